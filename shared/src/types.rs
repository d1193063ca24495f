//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Where a payload came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Live,
    Synthetic,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Live => "live",
            Provenance::Synthetic => "synthetic",
        }
    }
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payload tagged with its provenance.
///
/// Fallback pipelines return this instead of a bare value so callers can
/// tell upstream data apart from generated data.
#[derive(Debug, Clone, PartialEq)]
pub enum Sourced<T> {
    Live(T),
    Synthetic(T),
}

impl<T> Sourced<T> {
    pub fn provenance(&self) -> Provenance {
        match self {
            Sourced::Live(_) => Provenance::Live,
            Sourced::Synthetic(_) => Provenance::Synthetic,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Sourced::Live(_))
    }

    pub fn get(&self) -> &T {
        match self {
            Sourced::Live(value) | Sourced::Synthetic(value) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Sourced::Live(value) | Sourced::Synthetic(value) => value,
        }
    }
}

/// Inclusive latitude/longitude rectangle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

/// Eight-point compass directions used for wind and offsets
pub const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Inclusive integer range used by season profiles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    pub min: i32,
    pub max: i32,
}

impl Span {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}
