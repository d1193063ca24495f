//! Location lookup tables

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// A named place used as a lookup key into the static tables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    pub region: String,
    pub lat: f64,
    pub lng: f64,
    /// Meters above sea level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coastal: Option<bool>,
}

impl Location {
    pub fn new(name: &str, region: &str, lat: f64, lng: f64) -> Self {
        Self {
            name: name.to_string(),
            region: region.to_string(),
            lat,
            lng,
            elevation: None,
            coastal: None,
        }
    }

    pub fn with_elevation(mut self, meters: f64) -> Self {
        self.elevation = Some(meters);
        self
    }

    pub fn with_coastal(mut self, coastal: bool) -> Self {
        self.coastal = Some(coastal);
        self
    }

    pub fn is_coastal(&self) -> bool {
        self.coastal.unwrap_or(false)
    }
}

/// Ordered set of locations with a guaranteed default entry.
///
/// Lookups are case-insensitive; unknown names resolve to the default.
#[derive(Debug, Clone)]
pub struct LocationTable {
    locations: Vec<Location>,
    default_index: usize,
}

impl LocationTable {
    pub fn new(locations: Vec<Location>, default_name: &str) -> Result<Self, TableError> {
        if locations.is_empty() {
            return Err(TableError::Empty("locations"));
        }
        let default_index = locations
            .iter()
            .position(|l| l.name.eq_ignore_ascii_case(default_name))
            .ok_or_else(|| TableError::MissingDefault {
                table: "locations",
                name: default_name.to_string(),
            })?;

        Ok(Self {
            locations,
            default_index,
        })
    }

    /// Nearby locations along the Dakshina Kannada / Udupi coast
    pub fn karnataka_coast() -> Result<Self, TableError> {
        let locations = vec![
            Location::new("Mangaluru", "Dakshina Kannada", 12.9141, 74.856)
                .with_elevation(22.0)
                .with_coastal(true),
            Location::new("Udupi", "Udupi District", 13.3409, 74.7421)
                .with_elevation(39.0)
                .with_coastal(true),
            Location::new("Bantwal", "Dakshina Kannada", 12.8067, 75.0336)
                .with_elevation(76.0)
                .with_coastal(false),
            Location::new("Puttur", "Dakshina Kannada", 12.7594, 75.2219)
                .with_elevation(85.0)
                .with_coastal(false),
            Location::new("Sullia", "Dakshina Kannada", 12.5634, 75.3869)
                .with_elevation(146.0)
                .with_coastal(false),
        ];

        Self::new(locations, "Mangaluru")
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations
            .iter()
            .find(|l| l.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn resolve(&self, name: &str) -> &Location {
        self.get(name).unwrap_or_else(|| self.default_location())
    }

    pub fn default_location(&self) -> &Location {
        &self.locations[self.default_index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Broad climate grouping used by the mock weather generator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClimateZone {
    Coastal,
    Northern,
    Inland,
}

impl ClimateZone {
    /// Baseline temperature in °C before seasonal adjustment
    pub fn base_temperature(&self) -> f64 {
        match self {
            ClimateZone::Coastal => 28.0,
            ClimateZone::Northern => 22.0,
            ClimateZone::Inland => 25.0,
        }
    }
}

/// Indian city metadata for the weather endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub region: String,
    pub lat: f64,
    pub lon: f64,
    pub zone: ClimateZone,
}

impl City {
    fn new(name: &str, region: &str, lat: f64, lon: f64, zone: ClimateZone) -> Self {
        Self {
            name: name.to_string(),
            region: region.to_string(),
            lat,
            lon,
            zone,
        }
    }
}

/// City lookup keyed by exact name.
///
/// Unknown cities keep their requested name but borrow the default city's
/// region and coordinates.
#[derive(Debug, Clone)]
pub struct CityTable {
    cities: Vec<City>,
    default_index: usize,
}

impl CityTable {
    pub fn new(cities: Vec<City>, default_name: &str) -> Result<Self, TableError> {
        if cities.is_empty() {
            return Err(TableError::Empty("cities"));
        }
        let default_index = cities
            .iter()
            .position(|c| c.name == default_name)
            .ok_or_else(|| TableError::MissingDefault {
                table: "cities",
                name: default_name.to_string(),
            })?;

        Ok(Self {
            cities,
            default_index,
        })
    }

    pub fn india() -> Result<Self, TableError> {
        use ClimateZone::*;

        let cities = vec![
            City::new("Mangaluru", "Karnataka", 12.9141, 74.856, Coastal),
            City::new("Bengaluru", "Karnataka", 12.9716, 77.5946, Inland),
            City::new("Mumbai", "Maharashtra", 19.076, 72.8777, Coastal),
            City::new("Delhi", "Delhi", 28.6139, 77.209, Northern),
            City::new("Chennai", "Tamil Nadu", 13.0827, 80.2707, Coastal),
            City::new("Kolkata", "West Bengal", 22.5726, 88.3639, Inland),
            City::new("Hyderabad", "Telangana", 17.385, 78.4867, Inland),
            City::new("Kochi", "Kerala", 9.9312, 76.2673, Coastal),
            City::new("Shimla", "Himachal Pradesh", 31.1048, 77.1734, Northern),
            City::new("Goa", "Goa", 15.2993, 74.124, Coastal),
            City::new("Lucknow", "Uttar Pradesh", 26.8467, 80.9462, Northern),
            City::new("Chandigarh", "Chandigarh", 30.7333, 76.7794, Northern),
        ];

        Self::new(cities, "Mangaluru")
    }

    pub fn get(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.name == name)
    }

    pub fn default_city(&self) -> &City {
        &self.cities[self.default_index]
    }

    /// Resolve a requested city name into metadata for mock generation
    pub fn resolve(&self, name: &str) -> City {
        let name = name.trim();
        if name.is_empty() {
            return self.default_city().clone();
        }
        match self.get(name) {
            Some(city) => city.clone(),
            None => {
                let fallback = self.default_city();
                City {
                    name: name.to_string(),
                    region: fallback.region.clone(),
                    lat: fallback.lat,
                    lon: fallback.lon,
                    zone: ClimateZone::Inland,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_lookup_is_case_insensitive() {
        let table = LocationTable::karnataka_coast().unwrap();
        assert_eq!(table.get("udupi").map(|l| l.name.as_str()), Some("Udupi"));
        assert_eq!(table.resolve("Atlantis").name, "Mangaluru");
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_location_table_requires_default() {
        let result = LocationTable::new(
            vec![Location::new("Udupi", "Udupi District", 13.34, 74.74)],
            "Mangaluru",
        );
        assert!(matches!(result, Err(TableError::MissingDefault { .. })));
        assert_eq!(
            LocationTable::new(vec![], "Mangaluru").unwrap_err(),
            TableError::Empty("locations")
        );
    }

    #[test]
    fn test_unknown_city_borrows_default_metadata() {
        let table = CityTable::india().unwrap();
        let city = table.resolve("Mysuru");
        assert_eq!(city.name, "Mysuru");
        assert_eq!(city.region, "Karnataka");
        assert_eq!(city.lat, 12.9141);
        assert_eq!(city.zone, ClimateZone::Inland);

        assert_eq!(table.resolve("").name, "Mangaluru");
        assert_eq!(table.resolve("Shimla").zone, ClimateZone::Northern);
    }

    #[test]
    fn test_city_table_requires_default() {
        let result = CityTable::new(
            vec![City::new("Delhi", "Delhi", 28.6139, 77.209, ClimateZone::Northern)],
            "Mangaluru",
        );
        assert!(matches!(result, Err(TableError::MissingDefault { .. })));
        assert_eq!(
            CityTable::new(vec![], "Mangaluru").unwrap_err(),
            TableError::Empty("cities")
        );
    }

    #[test]
    fn test_built_in_tables_default_to_mangaluru() {
        assert_eq!(CityTable::india().unwrap().default_city().name, "Mangaluru");
        assert_eq!(
            LocationTable::karnataka_coast().unwrap().default_location().name,
            "Mangaluru"
        );
    }
}
