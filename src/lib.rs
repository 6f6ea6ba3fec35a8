pub mod auth;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;

use axum::{middleware, Router};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, services::ServeDir};

use auth::{AuthState, Credentials};
use repository::{CarRepository, MaintenanceRecordRepository};

#[derive(Clone)]
pub struct AppState {
    pub car_repo: CarRepository,
    pub maintenance_repo: MaintenanceRecordRepository,
    pub auth: AuthState,
}

impl AppState {
    pub fn new(pool: PgPool, credentials: Credentials) -> Self {
        Self {
            car_repo: CarRepository::new(pool.clone()),
            maintenance_repo: MaintenanceRecordRepository::new(pool),
            auth: AuthState::new(credentials),
        }
    }
}

/// Build the application router.
///
/// The car and maintenance resources sit behind the auth gate; login, logout,
/// health and the static assets (`/`, `/index.html`, `/css/**`, `/js/**`) are
/// public. There is no CSRF layer; callers authenticate per request via Basic
/// credentials or a session cookie.
pub fn app(state: AppState) -> Router {
    let protected = Router::new()
        .nest("/cars", handlers::cars::router())
        .nest("/maintenance", handlers::maintenance::router())
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            auth::require_auth,
        ));

    Router::new()
        .merge(protected)
        .merge(auth::router())
        .merge(handlers::health::router())
        .fallback_service(ServeDir::new("static"))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
