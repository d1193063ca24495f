//! HTTP handlers for the weather endpoint

use axum::{
    extract::{Query, State},
    response::Response,
};
use chrono::Utc;
use serde::Deserialize;

use super::{place_param, sourced_json};
use crate::error::AppResult;
use crate::AppState;

/// Query parameters for a forecast lookup
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub location: Option<String>,
}

/// Current conditions and multi-day forecast for a place
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> AppResult<Response> {
    let location = place_param(query.location, &state.config.defaults.location);
    let service = state.weather_service();
    let mut rng = state.rng();

    let weather = service
        .forecast(&state.catalog.cities, &location, Utc::now(), &mut rng)
        .await;

    tracing::debug!(%location, source = %weather.provenance(), "Served weather");
    Ok(sourced_json(weather))
}
