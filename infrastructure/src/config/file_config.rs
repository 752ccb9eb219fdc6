//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types
//! once validated.

use pricing_application::PipelineConfig;
use pricing_application::config::pipeline_config::{DEFAULT_ARTIFACT_PATH, DEFAULT_DATASET_PATH};
use pricing_domain::{ModelKey, ModelSelection};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("server.port cannot be 0")]
    InvalidPort,

    #[error("server.host cannot be empty")]
    EmptyHost,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("artifact path for model '{0}' cannot be empty")]
    EmptyArtifactPath(String),

    #[error("data.dataset cannot be empty")]
    EmptyDatasetPath,
}

/// Raw server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port
    pub port: u16,
    /// Verbose logging for the server process
    pub debug: bool,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            debug: false,
        }
    }
}

/// Raw data configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDataConfig {
    /// Dataset the location catalog is read from
    pub dataset: String,
}

impl Default for FileDataConfig {
    fn default() -> Self {
        Self {
            dataset: DEFAULT_DATASET_PATH.to_string(),
        }
    }
}

/// Raw models configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model keys run when a request selects none
    pub default: Vec<String>,
    /// Artifact file per model key
    pub artifacts: BTreeMap<String, String>,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            default: vec![ModelKey::LinearRegression.to_string()],
            artifacts: BTreeMap::from([(
                ModelKey::LinearRegression.to_string(),
                DEFAULT_ARTIFACT_PATH.to_string(),
            )]),
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub server: FileServerConfig,
    pub data: FileDataConfig,
    pub models: FileModelsConfig,
}

impl FileConfig {
    /// Validate the configuration values
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigValidationError::EmptyHost);
        }
        if self.data.dataset.trim().is_empty() {
            return Err(ConfigValidationError::EmptyDatasetPath);
        }

        for model in &self.models.default {
            if model.trim().is_empty() {
                return Err(ConfigValidationError::EmptyModelName);
            }
        }

        for (key, path) in &self.models.artifacts {
            if key.trim().is_empty() {
                return Err(ConfigValidationError::EmptyModelName);
            }
            if path.trim().is_empty() {
                return Err(ConfigValidationError::EmptyArtifactPath(key.clone()));
            }
        }

        Ok(())
    }

    /// Convert to the pipeline configuration used at startup
    pub fn to_pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            artifacts: self
                .models
                .artifacts
                .iter()
                .map(|(key, path)| (ModelKey::from(key.as_str()), PathBuf::from(path)))
                .collect(),
            dataset: PathBuf::from(&self.data.dataset),
            default_models: self
                .models
                .default
                .iter()
                .map(|key| ModelKey::from(key.as_str()))
                .collect::<ModelSelection>(),
        }
    }
}
