//! HTTP handlers for the earthquake endpoint

use axum::{extract::State, response::Response};
use chrono::Utc;

use super::sourced_json;
use crate::error::{AppError, AppResult};
use crate::AppState;

/// Recent earthquakes in South Asia, newest first
pub async fn get_earthquakes(State(state): State<AppState>) -> AppResult<Response> {
    let service = state.earthquake_service();
    let mut rng = state.rng();

    let earthquakes = service
        .latest(&state.catalog.seismic_regions, Utc::now(), &mut rng)
        .await;

    if earthquakes.get().is_empty() {
        return Err(AppError::NoData("Failed to fetch earthquake data".to_string()));
    }

    tracing::debug!(
        count = earthquakes.get().len(),
        source = %earthquakes.provenance(),
        "Served earthquakes"
    );
    Ok(sourced_json(earthquakes))
}
