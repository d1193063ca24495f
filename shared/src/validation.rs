//! Range checks and clamps for dashboard data
//!
//! Includes the fixed South Asia bounding box used to filter the global
//! earthquake feed.

use crate::types::BoundingBox;

// ============================================================================
// Geography
// ============================================================================

/// India and surrounding regions: 5°N-40°N, 65°E-100°E
pub const SOUTH_ASIA: BoundingBox = BoundingBox {
    min_lat: 5.0,
    max_lat: 40.0,
    min_lng: 65.0,
    max_lng: 100.0,
};

/// Whether a point lies inside the South Asia region of interest
pub fn is_in_south_asia(lat: f64, lng: f64) -> bool {
    SOUTH_ASIA.contains(lat, lng)
}

// ============================================================================
// Scales
// ============================================================================

pub const MIN_RISK_LEVEL: u8 = 1;
pub const MAX_RISK_LEVEL: u8 = 5;

/// Clamp a signed risk computation onto the 1-5 scale
pub fn clamp_risk_level(level: i32) -> u8 {
    level.clamp(MIN_RISK_LEVEL as i32, MAX_RISK_LEVEL as i32) as u8
}

/// Clamp a signed percentage onto 0-100
pub fn clamp_percent(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

pub const MIN_CONFIDENCE: i32 = 70;
pub const MAX_CONFIDENCE: i32 = 95;

// ============================================================================
// Request parameters
// ============================================================================

pub const MAX_PLACE_NAME_LEN: usize = 64;

/// Validate a free-text place name from a query string
pub fn validate_place_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Place name cannot be empty");
    }
    if trimmed.chars().count() > MAX_PLACE_NAME_LEN {
        return Err("Place name is too long");
    }
    if trimmed.chars().any(|c| c.is_control()) {
        return Err("Place name contains control characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_south_asia_box_is_inclusive() {
        assert!(is_in_south_asia(5.0, 65.0));
        assert!(is_in_south_asia(40.0, 100.0));
        assert!(is_in_south_asia(12.9, 74.8));
        assert!(!is_in_south_asia(4.99, 74.8));
        assert!(!is_in_south_asia(35.6762, 139.6503)); // Tokyo
        assert!(!is_in_south_asia(12.9, 100.01));
    }

    #[test]
    fn test_clamps() {
        assert_eq!(clamp_risk_level(-3), 1);
        assert_eq!(clamp_risk_level(3), 3);
        assert_eq!(clamp_risk_level(7), 5);
        assert_eq!(clamp_percent(-5), 0);
        assert_eq!(clamp_percent(104), 100);
        assert_eq!(clamp_percent(42), 42);
    }

    #[test]
    fn test_validate_place_name() {
        assert!(validate_place_name("Mangaluru").is_ok());
        assert!(validate_place_name("  ").is_err());
        assert!(validate_place_name(&"x".repeat(65)).is_err());
        assert!(validate_place_name("bad\u{0007}name").is_err());
    }

    proptest! {
        #[test]
        fn prop_risk_clamp_stays_on_scale(level in -100i32..100) {
            let clamped = clamp_risk_level(level);
            prop_assert!((MIN_RISK_LEVEL..=MAX_RISK_LEVEL).contains(&clamped));
        }

        #[test]
        fn prop_bounding_box_matches_bounds(lat in -90.0f64..90.0, lng in -180.0f64..180.0) {
            let inside = is_in_south_asia(lat, lng);
            prop_assert_eq!(inside, (5.0..=40.0).contains(&lat) && (65.0..=100.0).contains(&lng));
        }
    }
}
