use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
}

/// Payload for creating a car; the id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewCar {
    #[validate(length(min = 1, message = "make is required"))]
    pub make: String,
    #[validate(length(min = 1, message = "model is required"))]
    pub model: String,
    #[validate(range(min = 1900, max = 2100, message = "year must be plausible"))]
    pub year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_car_with_valid_fields_should_pass_validation() {
        let car = NewCar {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2018,
        };
        assert!(car.validate().is_ok());
    }

    #[test]
    fn test_new_car_with_empty_make_should_fail_validation() {
        let car = NewCar {
            make: "".to_string(),
            model: "Corolla".to_string(),
            year: 2018,
        };
        assert!(car.validate().is_err());
    }

    #[test]
    fn test_new_car_with_implausible_year_should_fail_validation() {
        let car = NewCar {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 1800,
        };
        assert!(car.validate().is_err());
    }
}
