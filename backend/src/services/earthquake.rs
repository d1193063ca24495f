//! Earthquake feed normalization with synthetic fallback

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use shared::{
    format_depth, format_relative_time, is_in_south_asia, round_tenths, Coordinates, Feature,
    FeatureCollection, Intensity, ProcessedEarthquake, SeismicRegion, Sourced, COMPASS_POINTS,
};

use crate::error::AppResult;
use crate::external::EarthquakeFeedClient;

/// Detail page used for generated events
pub const SYNTHETIC_DETAIL_URL: &str = "https://earthquake.usgs.gov/earthquakes/map/";

/// Generated events are spread over this many days before the reference
pub const SYNTHETIC_WINDOW_DAYS: i64 = 30;

/// Earthquake service pairing the feed client with the normalizer
#[derive(Clone)]
pub struct EarthquakeService {
    feed: EarthquakeFeedClient,
}

impl EarthquakeService {
    pub fn new(feed: EarthquakeFeedClient) -> Self {
        Self { feed }
    }

    /// Fetch the feed and normalize it, substituting generated events when
    /// the feed fails or has nothing in the region
    pub async fn latest<R: Rng + Send + ?Sized>(
        &self,
        regions: &[SeismicRegion],
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Sourced<Vec<ProcessedEarthquake>> {
        tracing::debug!(url = self.feed.feed_url(), "Fetching earthquake feed");
        let feed = self.feed.get_feed().await;
        resolve_feed(feed, regions, now, rng)
    }
}

/// Second stage of the pipeline: pick live or synthetic records
pub fn resolve_feed<R: Rng + ?Sized>(
    feed: AppResult<FeatureCollection>,
    regions: &[SeismicRegion],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Sourced<Vec<ProcessedEarthquake>> {
    match feed {
        Ok(collection) => {
            let processed = normalize_features(&collection.features, now);
            if processed.is_empty() {
                tracing::warn!(
                    total = collection.features.len(),
                    "No earthquakes in region, using synthetic data"
                );
                Sourced::Synthetic(synthetic_earthquakes(regions, now, rng))
            } else {
                tracing::debug!(count = processed.len(), "Normalized live earthquake feed");
                Sourced::Live(processed)
            }
        }
        Err(e) => {
            tracing::warn!("Earthquake feed unavailable, using synthetic data: {}", e);
            Sourced::Synthetic(synthetic_earthquakes(regions, now, rng))
        }
    }
}

/// Filter features to South Asia and map them, most recent first.
///
/// Features without a magnitude, a position, or a valid time are dropped.
pub fn normalize_features(features: &[Feature], now: DateTime<Utc>) -> Vec<ProcessedEarthquake> {
    let mut in_region: Vec<(DateTime<Utc>, &Feature)> = features
        .iter()
        .filter(|f| f.properties.mag.is_some())
        .filter(|f| match (f.latitude(), f.longitude()) {
            (Some(lat), Some(lng)) => is_in_south_asia(lat, lng),
            _ => false,
        })
        .filter_map(|f| f.time().map(|t| (t, f)))
        .collect();

    in_region.sort_by(|a, b| b.0.cmp(&a.0));

    in_region
        .into_iter()
        .filter_map(|(time, feature)| process_feature(feature, time, now))
        .collect()
}

fn process_feature(
    feature: &Feature,
    time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<ProcessedEarthquake> {
    let magnitude = feature.properties.mag?;
    let coordinates = Coordinates::new(feature.latitude()?, feature.longitude()?);

    Some(ProcessedEarthquake {
        id: feature.id.clone(),
        magnitude,
        location: feature
            .properties
            .place
            .clone()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "Unknown location".to_string()),
        time: format_relative_time(now - time),
        depth: format_depth(feature.depth_km()),
        intensity: Intensity::from_magnitude(magnitude),
        coordinates,
        url: feature.properties.url.clone(),
    })
}

/// Generate 8-12 plausible events around the given seismic regions,
/// most recent first. Returns an empty list only if `regions` is empty.
pub fn synthetic_earthquakes<R: Rng + ?Sized>(
    regions: &[SeismicRegion],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<ProcessedEarthquake> {
    if regions.is_empty() {
        return Vec::new();
    }

    let count = rng.gen_range(8..=12);
    let window_ms = Duration::days(SYNTHETIC_WINDOW_DAYS).num_milliseconds();

    let mut events: Vec<(DateTime<Utc>, ProcessedEarthquake)> = (0..count)
        .filter_map(|i| {
            let region = regions.choose(rng)?;

            let lat = region.center.lat + rng.gen_range(-1.0..1.0);
            let lng = region.center.lng + rng.gen_range(-1.0..1.0);

            // Mostly smaller quakes, occasionally larger ones
            let magnitude = if rng.gen::<f64>() > 0.8 {
                5.0 + rng.gen::<f64>() * 2.0
            } else {
                2.5 + rng.gen::<f64>() * 2.5
            };
            let magnitude = round_tenths(magnitude);

            let depth = 10.0 + rng.gen::<f64>() * 60.0;
            let time = now - Duration::milliseconds(rng.gen_range(0..window_ms));

            let distance_km = rng.gen_range(10..160);
            let direction = COMPASS_POINTS.choose(rng).copied().unwrap_or("N");

            let event = ProcessedEarthquake {
                id: format!("mock-eq-{}", i),
                magnitude,
                location: format!("{} km {} of {}", distance_km, direction, region.name),
                time: format_relative_time(now - time),
                depth: format_depth(depth),
                intensity: Intensity::from_magnitude(magnitude),
                coordinates: Coordinates::new(lat, lng),
                url: SYNTHETIC_DETAIL_URL.to_string(),
            };
            Some((time, event))
        })
        .collect();

    events.sort_by(|a, b| b.0.cmp(&a.0));
    events.into_iter().map(|(_, event)| event).collect()
}
