use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use validator::Validate;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{Car, NewCar};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars).post(add_car))
        .route("/:id", get(get_car))
}

async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<Car>>, AppError> {
    let cars = state.car_repo.find_all().await?;
    Ok(Json(cars))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Car>, AppError> {
    let car = state
        .car_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Car not found: {}", id)))?;
    Ok(Json(car))
}

async fn add_car(
    State(state): State<AppState>,
    Json(payload): Json<NewCar>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let car = state.car_repo.create(&payload).await?;
    tracing::info!("{} Created car {}: {} {}", API_NAME, car.id, car.make, car.model);

    Ok((StatusCode::CREATED, Json(car)))
}
