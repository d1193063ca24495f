//! Season profiles for the coastal Karnataka climate
//!
//! Months are 0-based (January = 0) throughout, matching `chrono::Datelike::month0`.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::types::Span;

/// Calendar season grouping
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Season {
    Monsoon,
    PostMonsoon,
    Winter,
    Summer,
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Season::Monsoon => "Monsoon",
            Season::PostMonsoon => "Post-monsoon",
            Season::Winter => "Winter",
            Season::Summer => "Summer",
        };
        write!(f, "{}", s)
    }
}

/// Numeric ranges and candidate strings for one season
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeasonProfile {
    pub season: Season,
    pub months: Vec<u32>,
    /// Rainfall probability, percent
    pub rainfall: Span,
    /// Temperature, °C
    pub temperature: Span,
    /// Relative humidity, percent
    pub humidity: Span,
    /// Wind speed, km/h
    pub wind_speed: Span,
    pub conditions: Vec<String>,
    pub alerts: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Season profiles whose month sets partition the year
#[derive(Debug, Clone)]
pub struct SeasonTable {
    profiles: Vec<SeasonProfile>,
    by_month: [usize; 12],
}

impl SeasonTable {
    /// Build a table, rejecting month sets that overlap or leave gaps
    pub fn new(profiles: Vec<SeasonProfile>) -> Result<Self, TableError> {
        if profiles.is_empty() {
            return Err(TableError::Empty("seasons"));
        }

        let mut owner: [Option<usize>; 12] = [None; 12];
        for (index, profile) in profiles.iter().enumerate() {
            for (field, span) in [
                ("rainfall", profile.rainfall),
                ("temperature", profile.temperature),
                ("humidity", profile.humidity),
                ("windSpeed", profile.wind_speed),
            ] {
                if span.min > span.max {
                    return Err(TableError::InvalidRange {
                        field: format!("{}.{}", profile.season, field),
                        min: span.min,
                        max: span.max,
                    });
                }
            }
            if profile.conditions.is_empty() {
                return Err(TableError::Empty("season conditions"));
            }

            for &month in &profile.months {
                let slot = owner
                    .get_mut(month as usize)
                    .ok_or(TableError::InvalidMonth(month))?;
                if let Some(previous) = slot {
                    return Err(TableError::OverlappingMonth {
                        month,
                        first: profiles[*previous].season.to_string(),
                        second: profile.season.to_string(),
                    });
                }
                *slot = Some(index);
            }
        }

        let mut by_month = [0usize; 12];
        for (month, slot) in owner.iter().enumerate() {
            by_month[month] = slot.ok_or(TableError::UncoveredMonth(month as u32))?;
        }

        Ok(Self { profiles, by_month })
    }

    /// Mangaluru and coastal Karnataka patterns
    pub fn coastal_karnataka() -> Result<Self, TableError> {
        Self::new(vec![
            SeasonProfile {
                season: Season::Monsoon,
                months: vec![5, 6, 7, 8, 9],
                rainfall: Span::new(70, 95),
                temperature: Span::new(23, 30),
                humidity: Span::new(80, 95),
                wind_speed: Span::new(15, 30),
                conditions: strings(&[
                    "Heavy monsoon rainfall",
                    "Thunderstorms",
                    "Persistent rainfall",
                    "Scattered heavy showers",
                    "Moderate to heavy rainfall",
                ]),
                alerts: strings(&[
                    "Flash flood risk in low-lying areas",
                    "Coastal erosion warning",
                    "High tide alert",
                    "Landslide risk in Western Ghats",
                    "Urban flooding possible",
                ]),
            },
            SeasonProfile {
                season: Season::PostMonsoon,
                months: vec![10, 11],
                rainfall: Span::new(30, 70),
                temperature: Span::new(24, 32),
                humidity: Span::new(70, 85),
                wind_speed: Span::new(8, 20),
                conditions: strings(&[
                    "Occasional showers",
                    "Partly cloudy with scattered rain",
                    "Decreasing rainfall",
                    "Intermittent showers",
                    "Clearing weather patterns",
                ]),
                alerts: strings(&[
                    "Isolated heavy rainfall possible",
                    "Moderate flood risk",
                    "Improving conditions expected",
                ]),
            },
            SeasonProfile {
                season: Season::Winter,
                months: vec![0, 1, 2],
                rainfall: Span::new(5, 30),
                temperature: Span::new(20, 33),
                humidity: Span::new(60, 80),
                wind_speed: Span::new(5, 15),
                conditions: strings(&[
                    "Clear skies",
                    "Mild temperatures",
                    "Occasional light showers",
                    "Morning mist",
                    "Pleasant weather",
                ]),
                alerts: Vec::new(),
            },
            SeasonProfile {
                season: Season::Summer,
                months: vec![3, 4],
                rainfall: Span::new(10, 40),
                temperature: Span::new(25, 36),
                humidity: Span::new(65, 85),
                wind_speed: Span::new(8, 18),
                conditions: strings(&[
                    "Hot and humid",
                    "Pre-monsoon showers",
                    "Increasing humidity",
                    "Warm with afternoon thunderstorms",
                    "Building cloud cover",
                ]),
                alerts: strings(&[
                    "Heat advisory",
                    "Pre-monsoon thunderstorm warning",
                    "Prepare for upcoming monsoon season",
                ]),
            },
        ])
    }

    /// Profile owning a 0-based month; months past 11 wrap
    pub fn for_month(&self, month0: u32) -> &SeasonProfile {
        &self.profiles[self.by_month[(month0 % 12) as usize]]
    }

    pub fn for_date(&self, date: DateTime<Utc>) -> &SeasonProfile {
        self.for_month(date.month0())
    }

    pub fn profiles(&self) -> &[SeasonProfile] {
        &self.profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn profile(season: Season, months: Vec<u32>) -> SeasonProfile {
        SeasonProfile {
            season,
            months,
            rainfall: Span::new(0, 10),
            temperature: Span::new(20, 30),
            humidity: Span::new(50, 60),
            wind_speed: Span::new(5, 10),
            conditions: vec!["Clear".to_string()],
            alerts: vec![],
        }
    }

    #[test]
    fn test_default_table_partitions_year() {
        let table = SeasonTable::coastal_karnataka().unwrap();
        let mut seen = 0;
        for profile in table.profiles() {
            seen += profile.months.len();
        }
        assert_eq!(seen, 12);

        assert_eq!(table.for_month(0).season, Season::Winter);
        assert_eq!(table.for_month(3).season, Season::Summer);
        assert_eq!(table.for_month(5).season, Season::Monsoon);
        assert_eq!(table.for_month(9).season, Season::Monsoon);
        assert_eq!(table.for_month(11).season, Season::PostMonsoon);
    }

    #[test]
    fn test_for_date_uses_calendar_month() {
        let table = SeasonTable::coastal_karnataka().unwrap();
        let july = Utc.with_ymd_and_hms(2024, 7, 15, 6, 0, 0).unwrap();
        assert_eq!(table.for_date(july).season, Season::Monsoon);
        let november = Utc.with_ymd_and_hms(2024, 11, 2, 6, 0, 0).unwrap();
        assert_eq!(table.for_date(november).season, Season::PostMonsoon);
    }

    #[test]
    fn test_rejects_overlap() {
        let result = SeasonTable::new(vec![
            profile(Season::Winter, (0..7).collect()),
            profile(Season::Summer, (6..12).collect()),
        ]);
        assert!(matches!(
            result,
            Err(TableError::OverlappingMonth { month: 6, .. })
        ));
    }

    #[test]
    fn test_rejects_gap() {
        let result = SeasonTable::new(vec![
            profile(Season::Winter, (0..6).collect()),
            profile(Season::Summer, (7..12).collect()),
        ]);
        assert_eq!(result.unwrap_err(), TableError::UncoveredMonth(6));
    }

    #[test]
    fn test_rejects_bad_month_and_range() {
        let result = SeasonTable::new(vec![profile(Season::Winter, vec![12])]);
        assert_eq!(result.unwrap_err(), TableError::InvalidMonth(12));

        let mut inverted = profile(Season::Winter, (0..12).collect());
        inverted.temperature = Span::new(30, 20);
        assert!(matches!(
            SeasonTable::new(vec![inverted]),
            Err(TableError::InvalidRange { .. })
        ));
    }
}
