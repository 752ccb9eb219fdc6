//! Artifact error types

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn an artifact file into a usable model.
///
/// Only raised during startup; the store downgrades the key to
/// unavailable and keeps going.
#[derive(Error, Debug)]
pub enum ArtifactLoadError {
    #[error("Artifact not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Incompatible artifact format in {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid artifact {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Failure of a loaded artifact while computing a price
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArtifactComputeError {
    #[error("Found unknown location '{0}' during transform")]
    UnseenLocation(String),

    #[error("Model produced a non-finite price")]
    NonFinite,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ArtifactLoadError::NotFound(PathBuf::from("linear_regression_model.json"));
        assert_eq!(
            err.to_string(),
            "Artifact not found: linear_regression_model.json"
        );
    }

    #[test]
    fn test_compute_error_display() {
        let err = ArtifactComputeError::UnseenLocation("Atlantis".to_string());
        assert_eq!(
            err.to_string(),
            "Found unknown location 'Atlantis' during transform"
        );
    }
}
