pub const API_NAME: &str = "[car-maintenance-api]";
