use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use crate::models::{Car, MaintenanceRecord, NewMaintenanceRecord};

// Flat row shape for the JOIN against cars; mapped into the API model below.
#[derive(Debug, FromRow)]
struct MaintenanceRecordRow {
    id: i64,
    date: NaiveDate,
    description: String,
    cost: f64,
    car_id: i64,
    make: String,
    model: String,
    year: i32,
}

impl From<MaintenanceRecordRow> for MaintenanceRecord {
    fn from(row: MaintenanceRecordRow) -> Self {
        MaintenanceRecord {
            id: row.id,
            date: row.date,
            description: row.description,
            cost: row.cost,
            car: Car {
                id: row.car_id,
                make: row.make,
                model: row.model,
                year: row.year,
            },
        }
    }
}

#[derive(Clone)]
pub struct MaintenanceRecordRepository {
    pool: PgPool,
}

impl MaintenanceRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every record in the store, each with its owning car resolved.
    /// No ordering guarantee.
    pub async fn find_all(&self) -> Result<Vec<MaintenanceRecord>, sqlx::Error> {
        let rows = sqlx::query_as::<_, MaintenanceRecordRow>(
            "SELECT m.id, m.date, m.description, m.cost, \
                    c.id AS car_id, c.make, c.model, c.year \
             FROM maintenance_records m \
             JOIN cars c ON c.id = m.car_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MaintenanceRecord::from).collect())
    }

    pub async fn create(
        &self,
        car: &Car,
        record: &NewMaintenanceRecord,
    ) -> Result<MaintenanceRecord, sqlx::Error> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO maintenance_records (date, description, cost, car_id) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(record.date)
        .bind(&record.description)
        .bind(record.cost)
        .bind(car.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(MaintenanceRecord {
            id,
            date: record.date,
            description: record.description.clone(),
            cost: record.cost,
            car: car.clone(),
        })
    }
}
