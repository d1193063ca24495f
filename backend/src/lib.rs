//! Karnataka Disaster Watch - Backend
//!
//! JSON endpoints for the earthquake, flood, and weather dashboards. Live
//! upstream data is used where available; everything else is synthesized
//! from static regional tables.

use std::{sync::Arc, time::Duration};

use axum::{routing::get, Router};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shared::Catalog;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use external::{EarthquakeFeedClient, WeatherClient};
use services::{EarthquakeService, WeatherService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build the lookup tables and the outbound HTTP client
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .user_agent(concat!("kdw-server/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let catalog = Catalog::karnataka()?;

        Ok(Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            http,
        })
    }

    /// Per-request random source
    pub fn rng(&self) -> ChaCha8Rng {
        match self.config.generator.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    pub fn weather_service(&self) -> WeatherService {
        let days = self.config.weather.forecast_days;
        match self.config.live_weather_key() {
            Some(key) => WeatherService::with_client(
                WeatherClient::new(
                    self.http.clone(),
                    key.to_string(),
                    self.config.weather.api_endpoint.clone(),
                    days,
                ),
                days,
            ),
            None => WeatherService::synthetic(days),
        }
    }

    pub fn earthquake_service(&self) -> EarthquakeService {
        EarthquakeService::new(EarthquakeFeedClient::new(
            self.http.clone(),
            self.config.earthquake.feed_url.clone(),
        ))
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Karnataka Disaster Watch API v1.0"
}
