//! External API integrations

pub mod usgs;
pub mod weather;

pub use usgs::EarthquakeFeedClient;
pub use weather::WeatherClient;
