//! Weather data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptor of the forecasting model a prediction is attributed to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionModel {
    pub name: String,
    pub description: String,
    pub specialization: String,
    pub accuracy: f64,
}

impl PredictionModel {
    pub fn new(name: &str, description: &str, specialization: &str, accuracy: f64) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            specialization: specialization.to_string(),
            accuracy,
        }
    }
}

/// The fixed roster of prediction models
pub fn prediction_models() -> Vec<PredictionModel> {
    vec![
        PredictionModel::new(
            "DeepWeather-CNN",
            "Convolutional Neural Network trained on 50 years of meteorological data",
            "Precipitation patterns and intensity",
            0.89,
        ),
        PredictionModel::new(
            "AtmosLSTM",
            "Long Short-Term Memory network for temporal weather pattern analysis",
            "Temperature and humidity forecasting",
            0.92,
        ),
        PredictionModel::new(
            "GeoTransformer",
            "Transformer-based model incorporating geographical and topographical features",
            "Region-specific weather events",
            0.87,
        ),
        PredictionModel::new(
            "EnsembleClimate",
            "Ensemble model combining multiple prediction algorithms",
            "Overall weather pattern prediction",
            0.94,
        ),
    ]
}

/// Temperature range in whole °C; `min <= max`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemperatureRange {
    pub min: i32,
    pub max: i32,
}

/// A generated weather prediction for one location and target date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherPrediction {
    pub location: String,
    pub region: String,
    /// Condition text
    pub prediction: String,
    /// Percent, 70-95
    pub confidence: u8,
    pub temperature: TemperatureRange,
    /// Percent, 0-100
    pub precipitation: u8,
    pub humidity: i32,
    pub wind_speed: i32,
    pub wind_direction: String,
    pub alerts: Vec<String>,
    pub model: PredictionModel,
    pub updated: DateTime<Utc>,
    pub forecast_date: DateTime<Utc>,
}

/// Cosmetic metadata describing the prediction run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelInsights {
    pub primary_model: PredictionModel,
    pub data_points: u32,
    pub confidence_overall: u8,
    pub last_trained: DateTime<Utc>,
    pub key_factors: Vec<String>,
}

/// Factors listed in every insights block
pub const KEY_FACTORS: [&str; 5] = [
    "Monsoon intensity patterns",
    "Arabian Sea temperature anomalies",
    "Western Ghats orographic effect",
    "El Niño-Southern Oscillation (ENSO) status",
    "Indian Ocean Dipole (IOD) phase",
];

/// Response body of the AI weather endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiWeatherReport {
    pub current_predictions: Vec<WeatherPrediction>,
    pub forecast: Vec<WeatherPrediction>,
    pub model_insights: ModelInsights,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Weather API forecast shape
// ============================================================================

/// Forecast payload in the weather API's own field naming
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherData {
    pub location: WeatherLocation,
    pub current: CurrentConditions,
    pub forecast: Forecast,
    #[serde(default)]
    pub alerts: WeatherAlerts,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherLocation {
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub localtime: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionText {
    pub text: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub condition: ConditionText,
    pub wind_kph: f64,
    pub humidity: f64,
    pub feelslike_c: f64,
    pub uv: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    /// `YYYY-MM-DD`
    pub date: String,
    pub day: DaySummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DaySummary {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub condition: ConditionText,
    pub daily_chance_of_rain: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeatherAlerts {
    #[serde(default)]
    pub alert: Vec<WeatherAlert>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherAlert {
    pub headline: String,
    pub severity: String,
    pub urgency: String,
    pub areas: String,
    pub desc: String,
    pub effective: String,
    pub expires: String,
}

/// Icon code for a condition label; unknown labels map to "Sunny"
pub fn condition_icon_code(condition: &str) -> &'static str {
    match condition {
        "Sunny" => "113",
        "Partly cloudy" => "116",
        "Cloudy" => "119",
        "Overcast" => "122",
        "Mist" => "143",
        "Light rain" => "296",
        "Heavy rain" => "308",
        "Thunderstorm" => "389",
        "Fog" => "248",
        _ => "113",
    }
}

/// CDN icon URL for a condition label
pub fn condition_icon_url(condition: &str) -> String {
    format!(
        "//cdn.weatherapi.com/weather/64x64/day/{}.png",
        condition_icon_code(condition)
    )
}
