//! Display formatting helpers shared by the backend and the WASM module

use chrono::Duration;

/// Human-readable elapsed time, e.g. "3 hours ago" or "2 weeks ago".
///
/// Uses whole elapsed units; the sign of `elapsed` is ignored.
pub fn format_relative_time(elapsed: Duration) -> String {
    let elapsed = if elapsed < Duration::zero() {
        -elapsed
    } else {
        elapsed
    };
    let days = elapsed.num_days();

    match days {
        0 => {
            let hours = elapsed.num_hours();
            if hours == 0 {
                format!("{} minutes ago", elapsed.num_minutes())
            } else {
                format!("{} hours ago", hours)
            }
        }
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        7..=13 => "1 week ago".to_string(),
        14..=20 => "2 weeks ago".to_string(),
        21..=27 => "3 weeks ago".to_string(),
        _ => format!("{} weeks ago", days / 7),
    }
}

/// Depth with one decimal and unit, e.g. "10.0km"
pub fn format_depth(depth_km: f64) -> String {
    format!("{:.1}km", depth_km)
}

/// Round to one decimal place
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Dashboard colour for a severity, risk, or intensity label
pub fn severity_color(level: &str) -> &'static str {
    match level.to_lowercase().as_str() {
        "high" | "severe" | "strong" | "major" => "red",
        "moderate" | "medium" => "orange",
        "low" | "weak" | "minor" => "green",
        _ => "blue",
    }
}
