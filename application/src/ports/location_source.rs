//! Location source port
//!
//! Defines where the authoritative list of localities comes from.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reading the authoritative locality source
#[derive(Error, Debug)]
pub enum CatalogSourceError {
    #[error("Dataset not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read dataset {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Dataset {0} has no 'location' column")]
    MissingLocationColumn(PathBuf),
}

/// Supplier of raw locality names
///
/// Implementations return names in source order, possibly with
/// duplicates; sorting and deduplication belong to the catalog.
pub trait LocationSource: Send + Sync {
    fn load_locations(&self) -> Result<Vec<String>, CatalogSourceError>;

    /// Short description used in diagnostics
    fn describe(&self) -> String;
}
