//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelKey`]: identifiers of the pricing models a caller can select
//! - [`error::FeatureValidationError`]: raw input that cannot become a feature record

pub mod error;
pub mod model;
