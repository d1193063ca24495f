//! WebAssembly module for Karnataka Disaster Watch
//!
//! Provides client-side helpers for:
//! - Earthquake intensity labels and relative times
//! - Severity colours for map markers
//! - Globe marker placement
//! - South Asia filtering of raw feed data

use chrono::Duration;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Globe radius markers sit on, slightly above the unit sphere
pub const MARKER_RADIUS: f64 = 1.02;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("disaster-watch wasm ready"));
}

/// Intensity label for a magnitude
#[wasm_bindgen]
pub fn intensity_label(magnitude: f64) -> String {
    Intensity::from_magnitude(magnitude).to_string()
}

/// Relative time between an event and a reference, both epoch milliseconds
#[wasm_bindgen]
pub fn relative_time(event_ms: f64, now_ms: f64) -> String {
    shared::format_relative_time(Duration::milliseconds((now_ms - event_ms) as i64))
}

/// Relative time from an event to the browser clock
#[wasm_bindgen]
pub fn relative_time_since(event_ms: f64) -> String {
    relative_time(event_ms, js_sys::Date::now())
}

/// Marker colour for a severity, risk, or intensity label
#[wasm_bindgen]
pub fn severity_color(level: &str) -> String {
    shared::severity_color(level).to_string()
}

/// Whether a point is inside the South Asia region of interest
#[wasm_bindgen]
pub fn in_south_asia(lat: f64, lng: f64) -> bool {
    is_in_south_asia(lat, lng)
}

/// Cartesian `[x, y, z]` on a sphere for a latitude/longitude.
///
/// A non-positive radius uses `MARKER_RADIUS`.
#[wasm_bindgen]
pub fn lat_lng_to_vector3(lat: f64, lng: f64, radius: f64) -> Vec<f64> {
    let r = if radius > 0.0 { radius } else { MARKER_RADIUS };
    let phi = (90.0 - lat).to_radians();
    let theta = (lng + 180.0).to_radians();

    vec![
        -r * phi.sin() * theta.cos(),
        r * phi.cos(),
        r * phi.sin() * theta.sin(),
    ]
}

/// Drop features outside South Asia from a GeoJSON feed
#[wasm_bindgen]
pub fn filter_feed(feed_json: &str) -> Result<String, JsValue> {
    let mut feed: FeatureCollection = serde_json::from_str(feed_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid feed JSON: {}", e)))?;

    feed.features.retain(|f| match (f.latitude(), f.longitude()) {
        (Some(lat), Some(lng)) => is_in_south_asia(lat, lng),
        _ => false,
    });

    serde_json::to_string(&feed).map_err(|e| JsValue::from_str(&e.to_string()))
}
