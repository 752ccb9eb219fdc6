//! Pipeline context shared by every request
//!
//! Replaces process-wide globals: the binary builds one
//! [`PipelineContext`] at startup and hands an `Arc` of it to each
//! presentation surface. It is never mutated afterwards.

use crate::ports::artifact_store::ArtifactStore;
use crate::ports::jitter::JitterSource;
use crate::use_cases::predict_price::{PredictPriceInput, PredictPriceUseCase};
use pricing_domain::{
    FeatureValidationError, LocationCatalog, ModelKey, ModelSelection, PredictionOutcome,
    RawFeatureInput,
};
use std::sync::Arc;

pub struct PipelineContext {
    catalog: LocationCatalog,
    predictor: PredictPriceUseCase<dyn ArtifactStore>,
    default_models: ModelSelection,
}

impl PipelineContext {
    pub fn new(catalog: LocationCatalog, store: Arc<dyn ArtifactStore>) -> Self {
        Self {
            catalog,
            predictor: PredictPriceUseCase::new(store),
            default_models: ModelSelection::default(),
        }
    }

    pub fn with_jitter(mut self, jitter: Arc<dyn JitterSource>) -> Self {
        self.predictor = self.predictor.with_jitter(jitter);
        self
    }

    pub fn with_default_models(mut self, models: ModelSelection) -> Self {
        self.default_models = models;
        self
    }

    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    pub fn predictor(&self) -> &PredictPriceUseCase<dyn ArtifactStore> {
        &self.predictor
    }

    pub fn default_models(&self) -> &ModelSelection {
        &self.default_models
    }

    /// Run the pipeline; `None` selects the configured default models
    pub fn predict(
        &self,
        features: RawFeatureInput,
        models: Option<Vec<ModelKey>>,
    ) -> Result<PredictionOutcome, FeatureValidationError> {
        let selection = match models {
            Some(keys) => ModelSelection::new(keys),
            None => self.default_models.clone(),
        };
        let input = PredictPriceInput {
            features,
            models: selection,
        };
        self.predictor.execute(&input)
    }

    /// Number of model keys with a loaded artifact
    pub fn models_loaded(&self) -> usize {
        self.predictor.store().loaded_count()
    }

    pub fn locations_available(&self) -> usize {
        self.catalog.len()
    }
}

impl std::fmt::Debug for PipelineContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineContext")
            .field("locations", &self.catalog.len())
            .field("models_loaded", &self.models_loaded())
            .field("default_models", &self.default_models)
            .finish()
    }
}
