//! Application layer for house-price
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod context;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PipelineConfig;
pub use context::PipelineContext;
pub use ports::{
    artifact_store::{ArtifactState, ArtifactStore, InferenceError},
    jitter::{FixedJitter, JitterSource, RandomJitter},
    location_source::{CatalogSourceError, LocationSource},
};
pub use use_cases::load_catalog::LoadCatalogUseCase;
pub use use_cases::predict_price::{PredictPriceInput, PredictPriceUseCase};
