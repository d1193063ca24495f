//! Synthetic "AI" weather predictions for coastal Karnataka
//!
//! Predictions are bounded random draws over the season profile for the
//! reference date, adjusted for each location's elevation and exposure to
//! the coast. Nothing here performs I/O.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use shared::{
    clamp_percent, AiWeatherReport, Catalog, Location, ModelInsights, PredictionModel,
    SeasonTable, TableError, TemperatureRange, WeatherPrediction, COMPASS_POINTS, KEY_FACTORS,
    MAX_CONFIDENCE, MIN_CONFIDENCE,
};

/// Inland locations reach this fraction of the season's rainfall spread
pub const INLAND_RAIN_FACTOR: f64 = 0.8;

/// An alert is attached when a uniform draw exceeds this
pub const ALERT_THRESHOLD: f64 = 0.6;

/// Confidence lost per day of lead time
pub const CONFIDENCE_DECAY_PER_DAY: i64 = 3;

/// Lowest base confidence before lead-time decay
pub const BASE_CONFIDENCE_MIN: i32 = 85;

/// Location the multi-day forecast is generated for
pub const FORECAST_LOCATION: &str = "Mangaluru";

/// Number of forecast days in the AI report
pub const FORECAST_DAYS: u32 = 5;

/// Generates predictions from injected season and model tables
#[derive(Debug, Clone, Copy)]
pub struct PredictionGenerator<'a> {
    seasons: &'a SeasonTable,
    models: &'a [PredictionModel],
}

impl<'a> PredictionGenerator<'a> {
    /// Build a generator; the model roster must not be empty
    pub fn new(seasons: &'a SeasonTable, models: &'a [PredictionModel]) -> Result<Self, TableError> {
        if models.is_empty() {
            return Err(TableError::Empty("prediction models"));
        }
        Ok(Self { seasons, models })
    }

    pub fn from_catalog(catalog: &'a Catalog) -> Result<Self, TableError> {
        Self::new(&catalog.seasons, &catalog.models)
    }

    fn pick_model<R: Rng + ?Sized>(&self, rng: &mut R) -> PredictionModel {
        self.models[rng.gen_range(0..self.models.len())].clone()
    }

    /// Predict conditions at `location` for `days_ahead` days after `reference`
    pub fn predict<R: Rng + ?Sized>(
        &self,
        location: &Location,
        days_ahead: u32,
        reference: DateTime<Utc>,
        rng: &mut R,
    ) -> WeatherPrediction {
        let profile = self.seasons.for_date(reference);

        // Higher elevation is cooler; coastal exposure brings more rain
        let elevation_factor = location.elevation.unwrap_or(0.0) / 100.0;
        let coastal_factor = if location.is_coastal() {
            1.0
        } else {
            INLAND_RAIN_FACTOR
        };

        let t = profile.temperature;
        let mut temp_min = (t.min as f64 - elevation_factor * 2.0
            + rng.gen_range(-1..=1) as f64)
            .round() as i32;
        let temp_max = (t.max as f64 - elevation_factor * 3.0
            + rng.gen_range(-1..=2) as f64)
            .round() as i32;
        if temp_min > temp_max {
            temp_min = temp_max;
        }

        let r = profile.rainfall;
        let rainfall = (r.min as f64
            + (r.max - r.min) as f64 * coastal_factor
            + rng.gen_range(-5..=5) as f64)
            .round() as i32;
        let precipitation = clamp_percent(rainfall);

        let prediction = profile
            .conditions
            .choose(rng)
            .cloned()
            .unwrap_or_default();

        let alerts = if !profile.alerts.is_empty() && rng.gen::<f64>() > ALERT_THRESHOLD {
            profile.alerts.choose(rng).cloned().into_iter().collect()
        } else {
            Vec::new()
        };

        let base = rng.gen_range(BASE_CONFIDENCE_MIN..=MAX_CONFIDENCE) as i64;
        let confidence = (base - CONFIDENCE_DECAY_PER_DAY * days_ahead as i64)
            .max(MIN_CONFIDENCE as i64) as u8;

        let model = self.pick_model(rng);
        let humidity = rng.gen_range(profile.humidity.min..=profile.humidity.max);
        let wind_speed = rng.gen_range(profile.wind_speed.min..=profile.wind_speed.max);
        let wind_direction = COMPASS_POINTS
            .choose(rng)
            .map(|d| d.to_string())
            .unwrap_or_default();

        WeatherPrediction {
            location: location.name.clone(),
            region: location.region.clone(),
            prediction,
            confidence,
            temperature: TemperatureRange {
                min: temp_min,
                max: temp_max,
            },
            precipitation,
            humidity,
            wind_speed,
            wind_direction,
            alerts,
            model,
            updated: reference,
            forecast_date: reference + Duration::days(days_ahead as i64),
        }
    }

    /// Cosmetic metadata about the model run
    pub fn insights<R: Rng + ?Sized>(&self, reference: DateTime<Utc>, rng: &mut R) -> ModelInsights {
        ModelInsights {
            primary_model: self.pick_model(rng),
            data_points: rng.gen_range(15_000..=25_000),
            confidence_overall: rng.gen_range(87..=94),
            last_trained: reference - Duration::days(rng.gen_range(1..=7)),
            key_factors: KEY_FACTORS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Current predictions for every nearby location plus a multi-day forecast
pub fn generate_ai_report<R: Rng + ?Sized>(
    catalog: &Catalog,
    reference: DateTime<Utc>,
    rng: &mut R,
) -> Result<AiWeatherReport, TableError> {
    let generator = PredictionGenerator::from_catalog(catalog)?;

    let current_predictions = catalog
        .locations
        .iter()
        .map(|location| generator.predict(location, 0, reference, rng))
        .collect();

    let home = catalog.locations.resolve(FORECAST_LOCATION);
    let forecast = (1..=FORECAST_DAYS)
        .map(|day| generator.predict(home, day, reference, rng))
        .collect();

    let model_insights = generator.insights(reference, rng);

    Ok(AiWeatherReport {
        current_predictions,
        forecast,
        model_insights,
        timestamp: reference,
    })
}
