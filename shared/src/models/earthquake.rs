//! Earthquake feed and display models
//!
//! Raw types follow the USGS GeoJSON summary feed; `ProcessedEarthquake` is
//! the compact shape served to the dashboard.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Coordinates;

/// Top-level GeoJSON response from the feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    #[serde(rename = "type", default)]
    pub type_: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// A single earthquake event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    pub id: String,
    pub properties: Properties,
    pub geometry: Geometry,
}

impl Feature {
    /// Event time, if the epoch milliseconds are representable
    pub fn time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.properties.time).single()
    }

    pub fn longitude(&self) -> Option<f64> {
        self.geometry.coordinates.first().copied()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.geometry.coordinates.get(1).copied()
    }

    /// Depth in kilometers; zero when the feed omits it
    pub fn depth_km(&self) -> f64 {
        self.geometry.coordinates.get(2).copied().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Properties {
    pub mag: Option<f64>,
    pub place: Option<String>,
    /// Milliseconds since the Unix epoch
    pub time: i64,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Geometry {
    /// `[longitude, latitude, depth]`
    pub coordinates: Vec<f64>,
}

/// Coarse magnitude classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Intensity {
    Weak,
    Light,
    Moderate,
    Strong,
}

impl Intensity {
    /// Thresholds are inclusive lower bounds: 6 Strong, 5 Moderate, 4 Light.
    pub fn from_magnitude(magnitude: f64) -> Self {
        if magnitude >= 6.0 {
            Intensity::Strong
        } else if magnitude >= 5.0 {
            Intensity::Moderate
        } else if magnitude >= 4.0 {
            Intensity::Light
        } else {
            Intensity::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Weak => "Weak",
            Intensity::Light => "Light",
            Intensity::Moderate => "Moderate",
            Intensity::Strong => "Strong",
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-oriented earthquake record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessedEarthquake {
    pub id: String,
    pub magnitude: f64,
    pub location: String,
    /// Relative time, e.g. "2 hours ago"
    pub time: String,
    /// e.g. "10.0km"
    pub depth: String,
    pub intensity: Intensity,
    pub coordinates: Coordinates,
    pub url: String,
}

/// A seismically active area used to seed synthetic events
#[derive(Debug, Clone, PartialEq)]
pub struct SeismicRegion {
    pub name: String,
    pub center: Coordinates,
}

impl SeismicRegion {
    fn new(name: &str, lat: f64, lng: f64) -> Self {
        Self {
            name: name.to_string(),
            center: Coordinates::new(lat, lng),
        }
    }
}

/// Regions in and around India that synthetic events are drawn from
pub fn south_asian_seismic_regions() -> Vec<SeismicRegion> {
    vec![
        SeismicRegion::new("Hindu Kush region, Afghanistan", 36.5, 71.0),
        SeismicRegion::new("Kashmir region", 34.0, 74.8),
        SeismicRegion::new("Gujarat region", 23.0, 72.0),
        SeismicRegion::new("Uttarakhand region", 30.0, 79.0),
        SeismicRegion::new("Andaman Islands region", 11.7, 92.8),
        SeismicRegion::new("Nepal-India border region", 27.7, 85.3),
        SeismicRegion::new("Bay of Bengal region", 13.0, 92.0),
        SeismicRegion::new("Nicobar Islands region", 8.0, 93.5),
    ]
}
