//! Karnataka Disaster Watch - Backend Server
//!
//! Earthquake, flood, and weather information for coastal Karnataka.

use std::net::SocketAddr;

use disaster_watch_backend::{create_app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "kdw_server=debug,disaster_watch_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Karnataka Disaster Watch Server");
    tracing::info!("Environment: {}", config.environment);
    if config.live_weather_key().is_some() {
        tracing::info!("Weather: live API at {}", config.weather.api_endpoint);
    } else {
        tracing::info!("Weather: synthetic data only");
    }
    tracing::info!("Earthquake feed: {}", config.earthquake.feed_url);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Create application state
    let state = AppState::new(config)?;

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
