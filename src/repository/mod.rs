pub mod car_repo;
pub mod maintenance_repo;

pub use car_repo::CarRepository;
pub use maintenance_repo::MaintenanceRecordRepository;
