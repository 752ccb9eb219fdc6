//! Location catalog sources
//!
//! This module provides the [`LocationSource`] implementation backed by
//! the cleaned training dataset.
//!
//! [`LocationSource`]: pricing_application::LocationSource

mod csv_source;

pub use csv_source::{CsvLocationSource, IGNORED_COLUMNS, LOCATION_COLUMN};
