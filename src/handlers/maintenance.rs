use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use validator::Validate;

use crate::constants::API_NAME;
use crate::error::AppError;
use crate::models::{MaintenanceRecord, NewMaintenanceRecord};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_records))
        .route("/car/:car_id", post(add_record))
}

async fn list_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<MaintenanceRecord>>, AppError> {
    let records = state.maintenance_repo.find_all().await?;
    Ok(Json(records))
}

async fn add_record(
    State(state): State<AppState>,
    Path(car_id): Path<i64>,
    Json(payload): Json<NewMaintenanceRecord>,
) -> Result<(StatusCode, Json<MaintenanceRecord>), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let car = state
        .car_repo
        .find_by_id(car_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Car not found: {}", car_id)))?;

    let record = state.maintenance_repo.create(&car, &payload).await?;

    tracing::info!(
        "{} Created maintenance record {} for car {}",
        API_NAME,
        record.id,
        car_id
    );

    Ok((StatusCode::CREATED, Json(record)))
}
