//! Flood data models and region tables

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TableError;

// ============================================================================
// Risk model output
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiverTrend {
    Rising,
    Falling,
    Stable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AffectedArea {
    pub name: String,
    /// 1-5
    pub risk_level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiverReading {
    pub name: String,
    /// Meters
    pub current_level: f64,
    /// Meters
    pub danger_level: f64,
    pub trend: RiverTrend,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvacuationCenter {
    pub name: String,
    pub capacity: u32,
    pub current_occupancy: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FloodAlert {
    pub severity: AlertSeverity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Synthetic flood risk assessment for a region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FloodData {
    pub region: String,
    pub last_updated: DateTime<Utc>,
    /// 1-5
    pub overall_risk_level: u8,
    pub affected_areas: Vec<AffectedArea>,
    pub river_data: Vec<RiverReading>,
    pub evacuation_centers: Vec<EvacuationCenter>,
    pub alerts: Vec<FloodAlert>,
}

/// Hydrological classification of a region
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RegionClass {
    Coastal,
    RiverBasin,
    Other,
}

impl RegionClass {
    /// Off-season base risk on the 1-5 scale
    pub fn base_risk(&self) -> u8 {
        match self {
            RegionClass::Coastal => 3,
            RegionClass::RiverBasin => 4,
            RegionClass::Other => 2,
        }
    }
}

/// Per-region fixture used to populate `FloodData`
#[derive(Debug, Clone, PartialEq)]
pub struct FloodTemplate {
    pub region: String,
    /// Area name and how far below the overall risk it sits
    pub areas: Vec<(String, u8)>,
    pub rivers: Vec<RiverReading>,
    pub centers: Vec<EvacuationCenter>,
}

fn area(name: &str, offset: u8) -> (String, u8) {
    (name.to_string(), offset)
}

fn river(name: &str, current: f64, danger: f64, trend: RiverTrend) -> RiverReading {
    RiverReading {
        name: name.to_string(),
        current_level: current,
        danger_level: danger,
        trend,
    }
}

fn center(name: &str, capacity: u32, occupancy: u32) -> EvacuationCenter {
    EvacuationCenter {
        name: name.to_string(),
        capacity,
        current_occupancy: occupancy,
    }
}

/// Region classification lists and per-region fixtures
#[derive(Debug, Clone)]
pub struct FloodRegionTable {
    pub coastal: Vec<String>,
    pub river_basins: Vec<String>,
    pub templates: Vec<FloodTemplate>,
}

impl FloodRegionTable {
    pub fn karnataka() -> Self {
        use RiverTrend::*;

        let templates = vec![
            FloodTemplate {
                region: "Mangaluru".to_string(),
                areas: vec![
                    area("Netravati River Basin", 0),
                    area("Phalguni River Basin", 1),
                    area("Mangaluru City Center", 2),
                    area("Ullal Coastal Area", 0),
                ],
                rivers: vec![
                    river("Netravati River", 8.2, 9.0, Rising),
                    river("Phalguni River", 7.5, 8.5, Stable),
                    river("Kumaradhara River", 6.8, 8.0, Rising),
                ],
                centers: vec![
                    center("Mangaluru City Corporation Building", 500, 120),
                    center("St. Aloysius College", 300, 85),
                    center("Mangaluru University Campus", 600, 150),
                ],
            },
            FloodTemplate {
                region: "Bantwal".to_string(),
                areas: vec![
                    area("Netravati River Basin", 0),
                    area("Bantwal Town", 1),
                    area("BC Road Area", 1),
                ],
                rivers: vec![river("Netravati River", 8.5, 9.0, Rising)],
                centers: vec![
                    center("Bantwal Government School", 200, 65),
                    center("Bantwal Community Hall", 150, 40),
                ],
            },
            FloodTemplate {
                region: "Udupi".to_string(),
                areas: vec![
                    area("Swarna River Basin", 0),
                    area("Udupi Town", 1),
                    area("Malpe Coastal Area", 0),
                ],
                rivers: vec![
                    river("Swarna River", 7.2, 8.0, Stable),
                    river("Sita River", 6.5, 7.5, Rising),
                ],
                centers: vec![
                    center("Udupi Town Hall", 250, 70),
                    center("Manipal University Campus", 400, 110),
                ],
            },
        ];

        Self {
            coastal: ["Mangaluru", "Mumbai", "Chennai", "Kochi", "Goa"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            river_basins: ["Bantwal", "Udupi", "Varanasi", "Patna", "Guwahati"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            templates,
        }
    }

    /// Classify a region name, ignoring ASCII case
    pub fn classify(&self, region: &str) -> RegionClass {
        if self.coastal.iter().any(|r| r.eq_ignore_ascii_case(region)) {
            RegionClass::Coastal
        } else if self.river_basins.iter().any(|r| r.eq_ignore_ascii_case(region)) {
            RegionClass::RiverBasin
        } else {
            RegionClass::Other
        }
    }

    pub fn template(&self, region: &str) -> Option<&FloodTemplate> {
        self.templates
            .iter()
            .find(|t| t.region.eq_ignore_ascii_case(region))
    }
}

// ============================================================================
// Keyed situation reports
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLabel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportArea {
    pub id: u32,
    pub name: String,
    pub risk: RiskLabel,
    pub evacuation_order: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaterLevel {
    pub id: u32,
    pub location: String,
    pub level: String,
    pub status: RiverTrend,
    pub rate: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportCenter {
    pub name: String,
    pub capacity: String,
    pub occupancy: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportAlert {
    pub title: String,
    pub message: String,
    pub time: DateTime<Utc>,
}

/// Situation report served by the flood endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FloodReport {
    pub risk_level: RiskLabel,
    pub current_status: String,
    pub affected_areas: Vec<ReportArea>,
    pub water_levels: Vec<WaterLevel>,
    pub evacuation_centers: Vec<ReportCenter>,
    pub alerts: Vec<ReportAlert>,
}

/// Alert fixture whose time is relative to the request
#[derive(Debug, Clone, PartialEq)]
pub struct AlertFixture {
    pub title: String,
    pub message: String,
    pub hours_ago: i64,
}

/// A report with alert times still unresolved
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFixture {
    pub key: String,
    pub risk_level: RiskLabel,
    pub current_status: String,
    pub affected_areas: Vec<ReportArea>,
    pub water_levels: Vec<WaterLevel>,
    pub evacuation_centers: Vec<ReportCenter>,
    pub alerts: Vec<AlertFixture>,
}

impl ReportFixture {
    /// Resolve alert times against `now`
    pub fn materialize(&self, now: DateTime<Utc>) -> FloodReport {
        FloodReport {
            risk_level: self.risk_level,
            current_status: self.current_status.clone(),
            affected_areas: self.affected_areas.clone(),
            water_levels: self.water_levels.clone(),
            evacuation_centers: self.evacuation_centers.clone(),
            alerts: self
                .alerts
                .iter()
                .map(|a| ReportAlert {
                    title: a.title.clone(),
                    message: a.message.clone(),
                    time: now - chrono::Duration::hours(a.hours_ago),
                })
                .collect(),
        }
    }
}

fn report_area(id: u32, name: &str, risk: RiskLabel, evacuation_order: bool) -> ReportArea {
    ReportArea {
        id,
        name: name.to_string(),
        risk,
        evacuation_order,
    }
}

fn water_level(id: u32, location: &str, level: &str, status: RiverTrend, rate: &str) -> WaterLevel {
    WaterLevel {
        id,
        location: location.to_string(),
        level: level.to_string(),
        status,
        rate: rate.to_string(),
    }
}

fn report_center(name: &str, capacity: u32, occupancy: u32, status: &str) -> ReportCenter {
    ReportCenter {
        name: name.to_string(),
        capacity: format!("{} people", capacity),
        occupancy: format!("{} people", occupancy),
        status: status.to_string(),
    }
}

fn alert_fixture(title: &str, message: &str, hours_ago: i64) -> AlertFixture {
    AlertFixture {
        title: title.to_string(),
        message: message.to_string(),
        hours_ago,
    }
}

/// Keyed situation reports with a guaranteed default
#[derive(Debug, Clone)]
pub struct FloodReportTable {
    reports: Vec<ReportFixture>,
    default_index: usize,
}

impl FloodReportTable {
    pub fn new(reports: Vec<ReportFixture>, default_key: &str) -> Result<Self, TableError> {
        if reports.is_empty() {
            return Err(TableError::Empty("flood reports"));
        }
        let default_index = reports
            .iter()
            .position(|r| r.key == default_key)
            .ok_or_else(|| TableError::MissingDefault {
                table: "flood reports",
                name: default_key.to_string(),
            })?;
        Ok(Self {
            reports,
            default_index,
        })
    }

    pub fn karnataka() -> Result<Self, TableError> {
        use RiskLabel::*;
        use RiverTrend::*;

        let mangaluru = ReportFixture {
            key: "mangaluru".to_string(),
            risk_level: High,
            current_status: "Active Flooding".to_string(),
            affected_areas: vec![
                report_area(1, "Mangaluru City", High, true),
                report_area(2, "Bantwal, Karnataka", High, true),
                report_area(3, "Ullal", High, true),
                report_area(4, "Mulki", Moderate, false),
                report_area(5, "Surathkal", Moderate, false),
            ],
            water_levels: vec![
                water_level(1, "Netravati River", "15.2m", Rising, "+0.5m/hr"),
                water_level(2, "Phalguni River", "9.8m", Rising, "+0.3m/hr"),
                water_level(3, "Kumaradhara River", "12.7m", Stable, "0m/hr"),
            ],
            evacuation_centers: vec![
                report_center("Mangaluru Town Hall", 250, 180, "Open"),
                report_center("Bantwal Government School", 150, 120, "Open"),
                report_center("Ullal Community Center", 100, 85, "Open"),
            ],
            alerts: vec![
                alert_fixture(
                    "Red Alert: Heavy Rainfall",
                    "Extremely heavy rainfall expected in coastal Karnataka. Residents in low-lying areas advised to evacuate immediately.",
                    3,
                ),
                alert_fixture(
                    "Netravati River Overflow Warning",
                    "Netravati river has crossed danger mark. Areas along the riverbank at high risk of flooding.",
                    5,
                ),
            ],
        };

        let udupi = ReportFixture {
            key: "udupi".to_string(),
            risk_level: Moderate,
            current_status: "Flood Warning".to_string(),
            affected_areas: vec![
                report_area(1, "Udupi City", Moderate, false),
                report_area(2, "Manipal", Moderate, false),
                report_area(3, "Karkala", Low, false),
                report_area(4, "Kundapur", Moderate, false),
            ],
            water_levels: vec![
                water_level(1, "Swarna River", "7.8m", Rising, "+0.2m/hr"),
                water_level(2, "Sita River", "6.5m", Stable, "0m/hr"),
            ],
            evacuation_centers: vec![
                report_center("Udupi District School", 200, 85, "Open"),
                report_center("Manipal Community Hall", 150, 60, "Open"),
            ],
            alerts: vec![alert_fixture(
                "Orange Alert: Heavy Rainfall",
                "Heavy rainfall expected in Udupi district. Residents in low-lying areas advised to stay alert.",
                4,
            )],
        };

        let bangalore = ReportFixture {
            key: "bangalore".to_string(),
            risk_level: Low,
            current_status: "Normal".to_string(),
            affected_areas: vec![
                report_area(1, "Koramangala", Low, false),
                report_area(2, "Bellandur", Low, false),
                report_area(3, "Varthur", Low, false),
                report_area(4, "Whitefield", Low, false),
            ],
            water_levels: vec![
                water_level(1, "Vrishabhavathi River", "4.2m", Stable, "0m/hr"),
                water_level(2, "Arkavathi River", "3.8m", Stable, "0m/hr"),
            ],
            evacuation_centers: vec![
                report_center("Koramangala Indoor Stadium", 300, 0, "Standby"),
                report_center("Bellandur Government School", 200, 0, "Standby"),
            ],
            alerts: Vec::new(),
        };

        Self::new(vec![mangaluru, udupi, bangalore], "mangaluru")
    }

    pub fn get(&self, key: &str) -> Option<&ReportFixture> {
        self.reports.iter().find(|r| r.key == key)
    }

    /// Fixture for a region key; unknown keys fall back to the default
    pub fn resolve(&self, key: &str) -> &ReportFixture {
        let key = key.trim().to_lowercase();
        self.get(&key)
            .unwrap_or(&self.reports[self.default_index])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.reports.iter().map(|r| r.key.as_str())
    }
}
