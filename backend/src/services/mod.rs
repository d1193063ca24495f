//! Business logic services for Karnataka Disaster Watch

pub mod earthquake;
pub mod flood;
pub mod prediction;
pub mod weather;

pub use earthquake::EarthquakeService;
pub use flood::FloodService;
pub use prediction::PredictionGenerator;
pub use weather::WeatherService;
