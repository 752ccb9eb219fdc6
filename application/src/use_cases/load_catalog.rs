//! Load Catalog use case
//!
//! Builds the [`LocationCatalog`] once at startup. Any problem with the
//! authoritative source degrades to the built-in list; the caller never
//! sees an error.

use crate::ports::location_source::LocationSource;
use pricing_domain::LocationCatalog;
use tracing::{info, warn};

pub struct LoadCatalogUseCase<'a> {
    source: &'a dyn LocationSource,
}

impl<'a> LoadCatalogUseCase<'a> {
    pub fn new(source: &'a dyn LocationSource) -> Self {
        Self { source }
    }

    pub fn execute(&self) -> LocationCatalog {
        match self.source.load_locations() {
            Ok(names) => {
                let catalog = LocationCatalog::from_names(names);
                if catalog.is_empty() {
                    warn!(
                        "{} contained no locations, using built-in list",
                        self.source.describe()
                    );
                    return LocationCatalog::builtin();
                }
                info!(
                    "Loaded {} locations from {}",
                    catalog.len(),
                    self.source.describe()
                );
                catalog
            }
            Err(e) => {
                warn!("{}; using built-in location list", e);
                LocationCatalog::builtin()
            }
        }
    }
}
