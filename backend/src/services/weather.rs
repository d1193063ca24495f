//! Weather forecasts with a synthetic fallback
//!
//! The live path proxies the weather API unchanged. When no production key
//! is configured, or the call fails for any reason, a mock forecast in the
//! same shape is generated from the city table.

use chrono::{DateTime, Datelike, Duration, SecondsFormat, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use shared::{
    condition_icon_url, CityTable, ClimateZone, ConditionText, CurrentConditions, DaySummary,
    Forecast, ForecastDay, Sourced, WeatherAlert, WeatherAlerts, WeatherData, WeatherLocation,
};

use crate::external::WeatherClient;

const VARIABLE_CONDITIONS: [&str; 4] = ["Partly cloudy", "Cloudy", "Light rain", "Mist"];
const DAILY_CONDITIONS: [&str; 6] = [
    "Sunny",
    "Partly cloudy",
    "Cloudy",
    "Light rain",
    "Heavy rain",
    "Thunderstorm",
];

/// Weather service for forecast lookups
#[derive(Clone)]
pub struct WeatherService {
    client: Option<WeatherClient>,
    forecast_days: u8,
}

impl WeatherService {
    /// Service that only ever generates mock data
    pub fn synthetic(forecast_days: u8) -> Self {
        Self {
            client: None,
            forecast_days,
        }
    }

    /// Service that tries the live API first
    pub fn with_client(client: WeatherClient, forecast_days: u8) -> Self {
        Self {
            client: Some(client),
            forecast_days,
        }
    }

    /// Forecast for a place name, falling back to mock data on any failure
    pub async fn forecast<R: Rng + Send + ?Sized>(
        &self,
        cities: &CityTable,
        location: &str,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Sourced<WeatherData> {
        let Some(client) = &self.client else {
            tracing::debug!("No production weather key configured, using mock data");
            return Sourced::Synthetic(mock_weather(cities, location, self.forecast_days, now, rng));
        };

        match client.get_forecast(location).await {
            Ok(data) => Sourced::Live(data),
            Err(e) => {
                tracing::warn!("Weather API unavailable, using mock data: {}", e);
                Sourced::Synthetic(mock_weather(cities, location, self.forecast_days, now, rng))
            }
        }
    }
}

fn season_adjustment(month0: u32) -> f64 {
    let mut adjustment = 0.0;
    if (3..=5).contains(&month0) {
        adjustment += 5.0;
    }
    if (6..=8).contains(&month0) {
        adjustment -= 2.0;
    }
    if matches!(month0, 0 | 1 | 11) {
        adjustment -= 5.0;
    }
    adjustment
}

/// Build a plausible forecast for an Indian city
pub fn mock_weather<R: Rng + ?Sized>(
    cities: &CityTable,
    location: &str,
    days: u8,
    now: DateTime<Utc>,
    rng: &mut R,
) -> WeatherData {
    let city = cities.resolve(location);
    let month = now.month0();
    let base_temp = city.zone.base_temperature() + season_adjustment(month);
    let current_temp = base_temp + rng.gen_range(-2.0..2.0);

    let condition = if city.zone == ClimateZone::Coastal && (6..=8).contains(&month) {
        "Heavy rain"
    } else if city.zone == ClimateZone::Northern && matches!(month, 11 | 0 | 1) {
        "Fog"
    } else if rng.gen::<f64>() > 0.7 {
        VARIABLE_CONDITIONS.choose(rng).copied().unwrap_or("Sunny")
    } else {
        "Sunny"
    };

    let forecastday = (0..days as i64)
        .map(|i| {
            let date = (now + Duration::days(i)).date_naive();
            let variation = rng.gen_range(-3.0..3.0);

            let day_condition = if rng.gen::<f64>() > 0.7 {
                DAILY_CONDITIONS.choose(rng).copied().unwrap_or(condition)
            } else {
                condition
            };
            let chance_of_rain = if day_condition.contains("rain") {
                70 + rng.gen_range(0..30)
            } else {
                rng.gen_range(0..30)
            };

            ForecastDay {
                date: date.format("%Y-%m-%d").to_string(),
                day: DaySummary {
                    maxtemp_c: base_temp + variation + 5.0,
                    mintemp_c: base_temp + variation - 5.0,
                    condition: ConditionText {
                        text: day_condition.to_string(),
                        icon: condition_icon_url(day_condition),
                    },
                    daily_chance_of_rain: chance_of_rain as f64,
                },
            }
        })
        .collect();

    let current = CurrentConditions {
        temp_c: current_temp,
        condition: ConditionText {
            text: condition.to_string(),
            icon: condition_icon_url(condition),
        },
        wind_kph: 5.0 + rng.gen::<f64>() * 15.0,
        humidity: (50 + rng.gen_range(0..40)) as f64,
        feelslike_c: current_temp + rng.gen_range(-1.0..1.0),
        uv: (5 + rng.gen_range(0..6)) as f64,
    };

    let alert = if city.zone == ClimateZone::Coastal && condition.contains("rain") {
        vec![WeatherAlert {
            headline: "Heavy Rainfall Warning".to_string(),
            severity: "Moderate".to_string(),
            urgency: "Expected".to_string(),
            areas: format!("{} and surrounding areas", city.name),
            desc: format!(
                "Heavy rainfall expected in {} and surrounding areas. Possible flooding in low-lying areas.",
                city.name
            ),
            effective: iso(now),
            expires: iso(now + Duration::hours(24)),
        }]
    } else {
        Vec::new()
    };

    WeatherData {
        location: WeatherLocation {
            name: city.name.clone(),
            region: city.region.clone(),
            country: "India".to_string(),
            lat: city.lat,
            lon: city.lon,
            localtime: iso(now),
        },
        current,
        forecast: Forecast { forecastday },
        alerts: WeatherAlerts { alert },
    }
}

fn iso(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}
