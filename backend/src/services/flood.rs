//! Flood situation reports and the synthetic risk model

use chrono::{DateTime, Datelike, Duration, Utc};
use rand::Rng;
use shared::{
    clamp_risk_level, AffectedArea, AlertSeverity, Catalog, EvacuationCenter, FloodAlert,
    FloodData, FloodRegionTable, FloodReport, FloodReportTable, RiverReading, RiverTrend,
};

/// Region assessed when none is given
pub const DEFAULT_RISK_REGION: &str = "Mangaluru";

/// Whether a 0-based month falls in the peak monsoon window (July-September)
pub fn is_monsoon_month(month0: u32) -> bool {
    (6..=8).contains(&month0)
}

/// Flood service over the static flood tables
#[derive(Clone, Copy)]
pub struct FloodService<'a> {
    regions: &'a FloodRegionTable,
    reports: &'a FloodReportTable,
}

impl<'a> FloodService<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            regions: &catalog.flood_regions,
            reports: &catalog.flood_reports,
        }
    }

    /// Situation report for a region key; unknown keys get the default report
    pub fn report(&self, region: &str, now: DateTime<Utc>) -> FloodReport {
        self.reports.resolve(region).materialize(now)
    }

    /// Overall risk for a region on the 1-5 scale
    pub fn risk_level(&self, region: &str, month0: u32) -> u8 {
        let mut level = self.regions.classify(region).base_risk() as i32;
        if is_monsoon_month(month0) {
            level += 2;
        }
        clamp_risk_level(level)
    }

    /// Synthetic risk assessment populated from the region's template
    pub fn assess<R: Rng + ?Sized>(&self, region: &str, now: DateTime<Utc>, rng: &mut R) -> FloodData {
        let region = match region.trim() {
            "" => DEFAULT_RISK_REGION,
            name => name,
        };
        let month = now.month0();
        let risk = self.risk_level(region, month);

        let (name, affected_areas, river_data, evacuation_centers) =
            match self.regions.template(region) {
                Some(template) => (
                    template.region.clone(),
                    template
                        .areas
                        .iter()
                        .map(|(area, offset)| AffectedArea {
                            name: area.clone(),
                            risk_level: clamp_risk_level(risk as i32 - *offset as i32),
                        })
                        .collect(),
                    template.rivers.clone(),
                    template.centers.clone(),
                ),
                None => (
                    region.to_string(),
                    generic_areas(region, risk),
                    vec![RiverReading {
                        name: format!("{} River", region),
                        current_level: 7.0,
                        danger_level: 8.0,
                        trend: RiverTrend::Stable,
                    }],
                    vec![
                        EvacuationCenter {
                            name: format!("{} Government School", region),
                            capacity: 200,
                            current_occupancy: rng.gen_range(50..150),
                        },
                        EvacuationCenter {
                            name: format!("{} Community Center", region),
                            capacity: 300,
                            current_occupancy: rng.gen_range(75..225),
                        },
                    ],
                ),
            };

        let alerts = risk_alerts(&name, risk, is_monsoon_month(month), now);

        FloodData {
            region: name,
            last_updated: now,
            overall_risk_level: risk,
            affected_areas,
            river_data,
            evacuation_centers,
            alerts,
        }
    }
}

fn generic_areas(region: &str, risk: u8) -> Vec<AffectedArea> {
    [("River Basin", 0), ("City Center", 2), ("Outskirts", 1)]
        .iter()
        .map(|(suffix, offset)| AffectedArea {
            name: format!("{} {}", region, suffix),
            risk_level: clamp_risk_level(risk as i32 - offset),
        })
        .collect()
}

fn risk_alerts(region: &str, risk: u8, monsoon: bool, now: DateTime<Utc>) -> Vec<FloodAlert> {
    let mut alerts = Vec::new();

    let level_alert = if risk >= 4 {
        Some((
            AlertSeverity::High,
            format!(
                "Severe flood warning for {}. Evacuation recommended for low-lying areas.",
                region
            ),
        ))
    } else if risk >= 3 {
        Some((
            AlertSeverity::Medium,
            format!("Flood warning for {}. Be prepared for possible evacuation.", region),
        ))
    } else if risk >= 2 {
        Some((
            AlertSeverity::Low,
            format!("Flood watch for {}. Monitor local news for updates.", region),
        ))
    } else {
        None
    };

    if let Some((severity, message)) = level_alert {
        alerts.push(FloodAlert {
            severity,
            message,
            timestamp: now,
        });
    }

    if monsoon {
        alerts.push(FloodAlert {
            severity: if risk >= 3 {
                AlertSeverity::High
            } else {
                AlertSeverity::Medium
            },
            message: format!(
                "Heavy rainfall expected in {} over the next 24-48 hours.",
                region
            ),
            timestamp: now - Duration::hours(1),
        });
    }

    alerts
}
