//! Domain layer for house-price
//!
//! This crate contains the value objects and pure pricing rules.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Feature Record
//!
//! A [`FeatureRecord`] is the only input a pricing model ever sees. It can
//! only be produced by validating a [`RawFeatureInput`], so every record in
//! flight has a positive area, positive bedroom/bathroom counts and a
//! non-empty locality.
//!
//! ## Fallback Heuristic
//!
//! When no trained artifact can answer, [`FallbackHeuristic`] produces a
//! closed-form estimate so that a structurally valid input always gets a
//! price.

pub mod core;
pub mod feature;
pub mod location;
pub mod pricing;

// Re-export commonly used types
pub use core::{
    error::FeatureValidationError,
    model::{ModelKey, ModelSelection},
};
pub use feature::{
    raw::{RawFeatureInput, RawValue},
    record::{FeatureField, FeatureRecord},
};
pub use location::catalog::{BUILTIN_LOCATIONS, LocationCatalog, OTHER_LOCATION};
pub use pricing::{
    fallback::{FallbackHeuristic, JITTER_BOUND, PRIVILEGED_LOCATIONS},
    outcome::{ModelPrediction, PredictionOutcome, PriceMap, PriceSource},
    summary::{PredictionSummary, round_price},
};
