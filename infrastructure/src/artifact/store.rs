//! File-backed artifact store

use super::error::{ArtifactComputeError, ArtifactLoadError};
use super::linear::LinearRegressionArtifact;
use pricing_application::{ArtifactState, ArtifactStore, InferenceError};
use pricing_domain::{FeatureRecord, ModelKey};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Any artifact format the store understands, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArtifactDocument {
    LinearRegression(LinearRegressionArtifact),
}

impl ArtifactDocument {
    /// Read and validate an artifact file
    pub fn load(path: &Path) -> Result<Self, ArtifactLoadError> {
        if !path.exists() {
            return Err(ArtifactLoadError::NotFound(path.to_path_buf()));
        }
        let bytes = fs::read(path).map_err(|source| ArtifactLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: ArtifactDocument =
            serde_json::from_slice(&bytes).map_err(|source| ArtifactLoadError::Format {
                path: path.to_path_buf(),
                source,
            })?;
        document
            .validate()
            .map_err(|reason| ArtifactLoadError::Invalid {
                path: path.to_path_buf(),
                reason,
            })?;
        Ok(document)
    }

    fn validate(&self) -> Result<(), String> {
        match self {
            ArtifactDocument::LinearRegression(model) => model.check_finite(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ArtifactDocument::LinearRegression(_) => "linear_regression",
        }
    }

    pub fn predict(&self, record: &FeatureRecord) -> Result<f64, ArtifactComputeError> {
        match self {
            ArtifactDocument::LinearRegression(model) => model.predict(record),
        }
    }
}

#[derive(Debug, Clone)]
enum Slot {
    Loaded(ArtifactDocument),
    Unavailable(String),
}

/// Artifact store populated once from files on disk
///
/// Every configured key gets exactly one load attempt. A failed attempt
/// leaves the key unavailable instead of failing startup, so the
/// pipeline can still answer with fallback prices when nothing loads.
#[derive(Debug, Clone, Default)]
pub struct FileArtifactStore {
    slots: Vec<(ModelKey, Slot)>,
}

impl FileArtifactStore {
    /// A store with no keys at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attempt to load every `(key, path)` pair. Never fails.
    pub fn load(artifacts: &[(ModelKey, PathBuf)]) -> Self {
        let mut store = Self::empty();
        for (key, path) in artifacts {
            store.load_key(key.clone(), path);
        }
        store
    }

    /// Attempt to load one key; a later attempt for the same key replaces it
    pub fn load_key(&mut self, key: ModelKey, path: &Path) {
        let slot = match ArtifactDocument::load(path) {
            Ok(document) => {
                info!(
                    "Loaded {} artifact for model {} from {}",
                    document.kind(),
                    key,
                    path.display()
                );
                Slot::Loaded(document)
            }
            Err(e) => {
                warn!("Model {} unavailable: {}", key, e);
                Slot::Unavailable(e.to_string())
            }
        };
        self.insert(key, slot);
    }

    /// Register an already-built artifact under a key
    pub fn with_document(mut self, key: ModelKey, document: ArtifactDocument) -> Self {
        self.insert(key, Slot::Loaded(document));
        self
    }

    fn insert(&mut self, key: ModelKey, slot: Slot) {
        match self.slots.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = slot,
            None => self.slots.push((key, slot)),
        }
    }

    fn slot(&self, key: &ModelKey) -> Option<&Slot> {
        self.slots.iter().find(|(k, _)| k == key).map(|(_, s)| s)
    }
}

impl ArtifactStore for FileArtifactStore {
    fn predict(&self, model: &ModelKey, record: &FeatureRecord) -> Result<f64, InferenceError> {
        match self.slot(model) {
            Some(Slot::Loaded(document)) => document
                .predict(record)
                .map_err(|e| InferenceError::compute(model, e.to_string())),
            Some(Slot::Unavailable(_)) | None => Err(InferenceError::ModelUnavailable(model.clone())),
        }
    }

    fn state(&self, model: &ModelKey) -> ArtifactState {
        match self.slot(model) {
            Some(Slot::Loaded(_)) => ArtifactState::Loaded,
            Some(Slot::Unavailable(reason)) => ArtifactState::Unavailable(reason.clone()),
            None => ArtifactState::Unavailable("no artifact configured".to_string()),
        }
    }

    fn keys(&self) -> Vec<ModelKey> {
        self.slots.iter().map(|(k, _)| k.clone()).collect()
    }
}
