use crate::models::{Car, NewCar};
use sqlx::PgPool;

#[derive(Clone)]
pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Car>, sqlx::Error> {
        sqlx::query_as::<_, Car>("SELECT id, make, model, year FROM cars")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Car>, sqlx::Error> {
        sqlx::query_as::<_, Car>("SELECT id, make, model, year FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn create(&self, car: &NewCar) -> Result<Car, sqlx::Error> {
        sqlx::query_as::<_, Car>(
            "INSERT INTO cars (make, model, year) VALUES ($1, $2, $3) RETURNING id, make, model, year",
        )
        .bind(&car.make)
        .bind(&car.model)
        .bind(car.year)
        .fetch_one(&self.pool)
        .await
    }
}
