//! Route definitions for Karnataka Disaster Watch

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/weather", get(handlers::get_weather))
        .route("/weather-ai", get(handlers::get_weather_ai))
        .route("/earthquakes", get(handlers::get_earthquakes))
        .merge(flood_routes())
}

/// Flood report and risk routes
fn flood_routes() -> Router<AppState> {
    Router::new()
        .route("/flood", get(handlers::get_flood))
        .route("/flood/risk", get(handlers::get_flood_risk))
}
