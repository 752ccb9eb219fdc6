//! Locality vocabulary
//!
//! [`catalog::LocationCatalog`] holds the sorted, deduplicated set of
//! locality names offered to users. It is built once at startup.

pub mod catalog;
