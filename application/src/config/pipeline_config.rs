//! Pipeline configuration.
//!
//! Built by the binary from the merged file configuration and handed to
//! the infrastructure adapters at startup. Nothing here changes after the
//! pipeline is constructed.

use pricing_domain::{ModelKey, ModelSelection};
use std::path::PathBuf;

/// Default artifact path for the linear regression model
pub const DEFAULT_ARTIFACT_PATH: &str = "linear_regression_model.json";

/// Default dataset the location catalog is read from
pub const DEFAULT_DATASET_PATH: &str = "Cleaned_data.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Artifact file per model key, in load order
    pub artifacts: Vec<(ModelKey, PathBuf)>,
    /// Tabular dataset with a `location` column
    pub dataset: PathBuf,
    /// Models run when a caller does not select any
    pub default_models: ModelSelection,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            artifacts: vec![(ModelKey::LinearRegression, PathBuf::from(DEFAULT_ARTIFACT_PATH))],
            dataset: PathBuf::from(DEFAULT_DATASET_PATH),
            default_models: ModelSelection::default(),
        }
    }
}

impl PipelineConfig {
    /// Set (or replace) the artifact path for a key
    pub fn with_artifact(mut self, key: ModelKey, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match self.artifacts.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = path,
            None => self.artifacts.push((key, path)),
        }
        self
    }

    pub fn with_dataset(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.artifacts.len(), 1);
        assert_eq!(config.artifacts[0].0, ModelKey::LinearRegression);
        assert_eq!(config.dataset, PathBuf::from("Cleaned_data.csv"));
        assert_eq!(config.default_models.first(), &ModelKey::LinearRegression);
    }

    #[test]
    fn test_with_artifact_replaces_existing_key() {
        let config = PipelineConfig::default()
            .with_artifact(ModelKey::LinearRegression, "models/lr.json")
            .with_artifact(ModelKey::from("rf"), "models/rf.json");
        assert_eq!(config.artifacts.len(), 2);
        assert_eq!(config.artifacts[0].1, PathBuf::from("models/lr.json"));
        assert_eq!(config.artifacts[1].0, ModelKey::from("rf"));
    }
}
