//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;
use shared::Provenance;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub weather: Provenance,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    // Report which weather source requests will try first
    let weather = if state.config.live_weather_key().is_some() {
        Provenance::Live
    } else {
        Provenance::Synthetic
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        weather,
    })
}
