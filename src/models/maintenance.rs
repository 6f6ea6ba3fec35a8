use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Car;

/// A persisted maintenance record with its owning car resolved.
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub description: String,
    pub cost: f64,
    pub car: Car,
}

/// Payload for creating a record under a car. The car association comes from
/// the request path, never from the body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewMaintenanceRecord {
    pub date: NaiveDate,
    #[validate(length(min = 1, max = 200, message = "description must be 1-200 characters"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "cost must be non-negative"))]
    pub cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oil_change() -> NewMaintenanceRecord {
        NewMaintenanceRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            description: "Oil change".to_string(),
            cost: 49.99,
        }
    }

    #[test]
    fn test_new_record_with_valid_fields_should_pass_validation() {
        assert!(oil_change().validate().is_ok());
    }

    #[test]
    fn test_new_record_with_negative_cost_should_fail_validation() {
        let mut record = oil_change();
        record.cost = -1.0;
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_new_record_with_empty_description_should_fail_validation() {
        let mut record = oil_change();
        record.description = String::new();
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_new_record_should_deserialize_iso_date() {
        let record: NewMaintenanceRecord = serde_json::from_str(
            r#"{"date":"2024-01-15","description":"Oil change","cost":49.99}"#,
        )
        .unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(record.description, "Oil change");
    }

    #[test]
    fn test_record_should_serialize_with_embedded_car() {
        let record = MaintenanceRecord {
            id: 7,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            description: "Oil change".to_string(),
            cost: 49.99,
            car: Car {
                id: 1,
                make: "Toyota".to_string(),
                model: "Corolla".to_string(),
                year: 2018,
            },
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["car"]["id"], 1);
        assert_eq!(value["date"], "2024-01-15");
    }
}
