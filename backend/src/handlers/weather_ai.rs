//! HTTP handler for the AI weather prediction report

use axum::{extract::State, response::Response};
use chrono::Utc;
use shared::Sourced;

use super::sourced_json;
use crate::error::AppResult;
use crate::services::prediction::generate_ai_report;
use crate::AppState;

/// Current predictions for every location plus a five-day Mangaluru outlook
pub async fn get_weather_ai(State(state): State<AppState>) -> AppResult<Response> {
    let mut rng = state.rng();
    let report = generate_ai_report(&state.catalog, Utc::now(), &mut rng)?;
    Ok(sourced_json(Sourced::Synthetic(report)))
}
