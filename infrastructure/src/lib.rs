//! Infrastructure layer for house-price
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod artifact;
pub mod catalog;
pub mod config;

// Re-export commonly used types
pub use artifact::{
    error::{ArtifactComputeError, ArtifactLoadError},
    linear::{LinearRegressionArtifact, NumericCoefficients, UnknownLocation},
    store::{ArtifactDocument, FileArtifactStore},
};
pub use catalog::CsvLocationSource;
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDataConfig, FileModelsConfig,
    FileServerConfig,
};
