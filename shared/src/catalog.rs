//! Static lookup tables bundled for injection into generators

use crate::error::TableError;
use crate::models::{
    prediction_models, south_asian_seismic_regions, CityTable, FloodRegionTable,
    FloodReportTable, LocationTable, PredictionModel, SeasonTable, SeismicRegion,
};

/// Every static table the services read, built once at startup
#[derive(Debug, Clone)]
pub struct Catalog {
    pub seasons: SeasonTable,
    pub locations: LocationTable,
    pub cities: CityTable,
    pub models: Vec<PredictionModel>,
    pub flood_regions: FloodRegionTable,
    pub flood_reports: FloodReportTable,
    pub seismic_regions: Vec<SeismicRegion>,
}

impl Catalog {
    /// Tables for coastal Karnataka and the wider Indian region
    pub fn karnataka() -> Result<Self, TableError> {
        let catalog = Self {
            seasons: SeasonTable::coastal_karnataka()?,
            locations: LocationTable::karnataka_coast()?,
            cities: CityTable::india()?,
            models: prediction_models(),
            flood_regions: FloodRegionTable::karnataka(),
            flood_reports: FloodReportTable::karnataka()?,
            seismic_regions: south_asian_seismic_regions(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the list-valued tables that generators pick from
    pub fn validate(&self) -> Result<(), TableError> {
        if self.models.is_empty() {
            return Err(TableError::Empty("prediction models"));
        }
        if self.seismic_regions.is_empty() {
            return Err(TableError::Empty("seismic regions"));
        }
        Ok(())
    }
}
