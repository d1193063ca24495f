//! USGS earthquake summary feed client

use reqwest::Client;
use shared::FeatureCollection;

use crate::error::{AppError, AppResult};

/// Client for a GeoJSON earthquake summary feed
#[derive(Clone)]
pub struct EarthquakeFeedClient {
    client: Client,
    feed_url: String,
}

impl EarthquakeFeedClient {
    pub fn new(client: Client, feed_url: String) -> Self {
        Self { client, feed_url }
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Fetch and decode the whole feed
    pub async fn get_feed(&self) -> AppResult<FeatureCollection> {
        let response = self
            .client
            .get(&self.feed_url)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Earthquake feed request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<FeatureCollection>()
            .await
            .map_err(|e| AppError::UpstreamDecode(format!("Failed to parse earthquake feed: {}", e)))
    }
}
