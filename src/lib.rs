use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/day/:date", get(handlers::daily::get_day))
        .route("/api/all_data", get(handlers::daily::get_all_data))
        .route("/api/save_daily_data", post(handlers::daily::save_daily_data))
        .route("/api/save_journal", post(handlers::daily::save_journal))
        .route("/api/set_goal", post(handlers::profile::set_goal))
        .route("/api/delete_goal", post(handlers::profile::delete_goal));

    let system_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz));

    Router::new()
        .route("/", get(handlers::pages::index))
        .merge(api_routes)
        .merge(system_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
