pub mod car;
pub mod maintenance;

pub use car::{Car, NewCar};
pub use maintenance::{MaintenanceRecord, NewMaintenanceRecord};
