//! HTTP handlers for flood reports and risk assessments

use axum::{
    extract::{Query, State},
    response::Response,
};
use chrono::Utc;
use serde::Deserialize;
use shared::Sourced;

use super::{place_param, sourced_json};
use crate::error::AppResult;
use crate::services::FloodService;
use crate::AppState;

/// Query parameters for a flood situation report
#[derive(Debug, Deserialize)]
pub struct FloodQuery {
    pub region: Option<String>,
}

/// Situation report for a region key (`mangaluru`, `udupi`, `bangalore`)
pub async fn get_flood(
    State(state): State<AppState>,
    Query(query): Query<FloodQuery>,
) -> AppResult<Response> {
    let region = place_param(query.region, &state.config.defaults.region);
    let report = FloodService::new(&state.catalog).report(&region, Utc::now());
    Ok(sourced_json(Sourced::Synthetic(report)))
}

/// Query parameters for a flood risk assessment
#[derive(Debug, Deserialize)]
pub struct FloodRiskQuery {
    pub region: Option<String>,
}

/// Seasonal flood risk assessment for a named region
pub async fn get_flood_risk(
    State(state): State<AppState>,
    Query(query): Query<FloodRiskQuery>,
) -> AppResult<Response> {
    let region = place_param(query.region, &state.config.defaults.risk_region);
    let mut rng = state.rng();
    let data = FloodService::new(&state.catalog).assess(&region, Utc::now(), &mut rng);

    tracing::debug!(
        region = %data.region,
        risk = data.overall_risk_level,
        "Served flood risk"
    );
    Ok(sourced_json(Sourced::Synthetic(data)))
}
