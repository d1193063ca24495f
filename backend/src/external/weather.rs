//! Weather API client for fetching forecast data
//!
//! Integrates with WeatherAPI.com's forecast endpoint; the response is
//! passed through in the provider's own shape.

use reqwest::Client;
use shared::WeatherData;

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
    days: u8,
}

impl WeatherClient {
    /// Create a new WeatherClient against the given endpoint
    pub fn new(client: Client, api_key: String, base_url: String, days: u8) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            days,
        }
    }

    /// Fetch current conditions, forecast, and alerts for a place name
    pub async fn get_forecast(&self, location: &str) -> AppResult<WeatherData> {
        let url = format!("{}/forecast.json", self.base_url);
        let days = self.days.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "yes"),
            ])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Weather API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<WeatherData>()
            .await
            .map_err(|e| AppError::UpstreamDecode(format!("Failed to parse weather response: {}", e)))
    }
}
