//! Artifact store port
//!
//! Defines how the prediction use case reaches trained models.

use pricing_domain::{FeatureRecord, ModelKey};
use thiserror::Error;

/// Why a single-record inference produced no price.
///
/// Both variants are absorbed by the prediction use case; they never
/// reach a presentation adapter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// The key is unknown or its artifact failed to load
    #[error("Model not available: {0}")]
    ModelUnavailable(ModelKey),

    /// A loaded artifact failed while computing
    #[error("Prediction failed for model {model}: {reason}")]
    Compute { model: ModelKey, reason: String },
}

impl InferenceError {
    pub fn compute(model: &ModelKey, reason: impl Into<String>) -> Self {
        Self::Compute {
            model: model.clone(),
            reason: reason.into(),
        }
    }

    pub fn model(&self) -> &ModelKey {
        match self {
            Self::ModelUnavailable(model) | Self::Compute { model, .. } => model,
        }
    }
}

/// Load state of one model key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactState {
    Loaded,
    /// Load failed or was never attempted; holds the reason
    Unavailable(String),
}

impl ArtifactState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ArtifactState::Loaded)
    }
}

/// Holder of trained pricing models
///
/// Implementations are populated once at startup and read-only afterwards,
/// so `predict` takes `&self` and needs no locking.
pub trait ArtifactStore: Send + Sync {
    /// Run a single-record inference. The returned price is unrounded.
    fn predict(&self, model: &ModelKey, record: &FeatureRecord) -> Result<f64, InferenceError>;

    /// State of a key; unknown keys are unavailable
    fn state(&self, model: &ModelKey) -> ArtifactState;

    /// Keys a load was attempted for, in a stable order
    fn keys(&self) -> Vec<ModelKey>;

    /// Number of keys whose artifact is loaded
    fn loaded_count(&self) -> usize {
        self.keys()
            .iter()
            .filter(|key| self.state(key).is_loaded())
            .count()
    }
}
