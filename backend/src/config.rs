//! Configuration management for Karnataka Disaster Watch
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides, e.g. `KDW__SERVER__PORT`
//! 4. `WEATHER_API_KEY` for the weather API key

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,

    /// Earthquake feed configuration
    pub earthquake: EarthquakeConfig,

    /// Outbound HTTP settings
    pub http: HttpConfig,

    /// Synthetic data generation settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Fallback query parameter values
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API endpoint
    pub api_endpoint: String,

    /// Weather API key; absent means synthetic data only
    pub api_key: Option<String>,

    /// Days requested from the forecast API
    pub forecast_days: u8,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EarthquakeConfig {
    /// GeoJSON summary feed URL
    pub feed_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Timeout for upstream requests in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible synthetic output
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DefaultsConfig {
    /// City used when `/api/weather` has no `location`
    pub location: String,

    /// Region used when `/api/flood` has no `region`
    pub region: String,

    /// Region used when `/api/flood/risk` has no `region`
    pub risk_region: String,
}

pub const WEATHER_API_ENDPOINT: &str = "https://api.weatherapi.com/v1";
pub const USGS_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/2.5_month.geojson";

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("KDW_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", WEATHER_API_ENDPOINT)?
            .set_default("weather.forecast_days", 5)?
            .set_default("earthquake.feed_url", USGS_FEED_URL)?
            .set_default("http.timeout_secs", 10)?
            .set_default("defaults.location", "Mangaluru")?
            .set_default("defaults.region", "mangaluru")?
            .set_default("defaults.risk_region", "Mangaluru")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (KDW_ prefix)
            .add_source(
                Environment::with_prefix("KDW")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("weather.api_key", std::env::var("WEATHER_API_KEY").ok())?
            .build()?;

        config.try_deserialize()
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Whether the configured key should be used against the live API.
    ///
    /// Development builds and keys without the `live_` prefix always use
    /// synthetic weather.
    pub fn live_weather_key(&self) -> Option<&str> {
        let key = self.weather.api_key.as_deref()?.trim();
        if self.is_development() || !key.starts_with("live_") {
            return None;
        }
        Some(key)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            weather: WeatherConfig {
                api_endpoint: WEATHER_API_ENDPOINT.to_string(),
                api_key: None,
                forecast_days: 5,
            },
            earthquake: EarthquakeConfig {
                feed_url: USGS_FEED_URL.to_string(),
            },
            http: HttpConfig { timeout_secs: 10 },
            generator: GeneratorConfig::default(),
            defaults: DefaultsConfig {
                location: "Mangaluru".to_string(),
                region: "mangaluru".to_string(),
                risk_region: "Mangaluru".to_string(),
            },
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
