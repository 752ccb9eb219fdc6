//! CSV dataset location source

use pricing_application::{CatalogSourceError, LocationSource};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Column holding locality names
pub const LOCATION_COLUMN: &str = "location";

/// Dataset columns that were not part of the training feature set
pub const IGNORED_COLUMNS: [&str; 2] = ["size", "price_per_sqft"];

/// Reads locality names from the `location` column of a CSV dataset
///
/// Only the location column is extracted; every other column, including
/// [`IGNORED_COLUMNS`], is dropped while reading.
#[derive(Debug, Clone)]
pub struct CsvLocationSource {
    path: PathBuf,
}

impl CsvLocationSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, e: csv::Error) -> CatalogSourceError {
        CatalogSourceError::Read {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }
}

impl LocationSource for CsvLocationSource {
    fn load_locations(&self) -> Result<Vec<String>, CatalogSourceError> {
        if !self.path.exists() {
            return Err(CatalogSourceError::NotFound(self.path.clone()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| self.read_error(e))?;

        let headers = reader.headers().map_err(|e| self.read_error(e))?.clone();
        let dropped: Vec<&str> = headers
            .iter()
            .filter(|h| IGNORED_COLUMNS.contains(h))
            .collect();
        if !dropped.is_empty() {
            debug!("Dropping non-feature columns {:?} from {}", dropped, self.path.display());
        }

        let index = headers
            .iter()
            .position(|h| h == LOCATION_COLUMN)
            .ok_or_else(|| CatalogSourceError::MissingLocationColumn(self.path.clone()))?;

        let mut locations = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| self.read_error(e))?;
            if let Some(location) = row.get(index).filter(|l| !l.is_empty()) {
                locations.push(location.to_string());
            }
        }

        debug!("Read {} location cells from {}", locations.len(), self.path.display());
        Ok(locations)
    }

    fn describe(&self) -> String {
        format!("dataset {}", self.path.display())
    }
}
