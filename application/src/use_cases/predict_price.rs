//! Predict Price use case
//!
//! Validates raw input, asks every selected model for a price and falls
//! back to the closed-form heuristic whenever a model cannot answer.

use crate::ports::artifact_store::{ArtifactStore, InferenceError};
use crate::ports::jitter::{JitterSource, RandomJitter};
use pricing_domain::{
    FallbackHeuristic, FeatureRecord, FeatureValidationError, ModelKey, ModelPrediction,
    ModelSelection, PredictionOutcome, PriceSource, RawFeatureInput, round_price,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Input for the PredictPrice use case
#[derive(Debug, Clone, Default)]
pub struct PredictPriceInput {
    /// Raw feature fields, validated once per call
    pub features: RawFeatureInput,
    /// Models to run, in the order results should be reported
    pub models: ModelSelection,
}

impl PredictPriceInput {
    /// Input that runs the default model selection
    pub fn new(features: RawFeatureInput) -> Self {
        Self {
            features,
            models: ModelSelection::default(),
        }
    }

    pub fn with_models(mut self, models: impl IntoIterator<Item = ModelKey>) -> Self {
        self.models = ModelSelection::new(models);
        self
    }
}

/// Use case for estimating a property price
///
/// Only [`FeatureValidationError`] escapes `execute`; every inference
/// failure is turned into a fallback price.
pub struct PredictPriceUseCase<S: ArtifactStore + ?Sized> {
    store: Arc<S>,
    jitter: Arc<dyn JitterSource>,
}

impl<S: ArtifactStore + ?Sized> Clone for PredictPriceUseCase<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            jitter: Arc::clone(&self.jitter),
        }
    }
}

impl<S: ArtifactStore + ?Sized> PredictPriceUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            jitter: Arc::new(RandomJitter),
        }
    }

    /// Replace the jitter source used after compute errors
    pub fn with_jitter(mut self, jitter: Arc<dyn JitterSource>) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Execute the use case
    pub fn execute(
        &self,
        input: &PredictPriceInput,
    ) -> Result<PredictionOutcome, FeatureValidationError> {
        let record = input.features.validate().inspect_err(|e| {
            debug!("Rejected prediction input: {}", e);
        })?;

        info!(
            "Predicting price for {} sqft, {} bath, {} bhk in '{}' with {} model(s)",
            record.total_sqft(),
            record.bath(),
            record.bhk(),
            record.location(),
            input.models.len()
        );

        let first = self.predict_one(input.models.first(), &record);
        let rest = input
            .models
            .rest()
            .iter()
            .map(|model| self.predict_one(model, &record))
            .collect();

        Ok(PredictionOutcome::from_split(record, first, rest))
    }

    /// Price from a single model, falling back on any inference error
    fn predict_one(&self, model: &ModelKey, record: &FeatureRecord) -> ModelPrediction {
        let (raw, source) = match self.store.predict(model, record) {
            Ok(price) => (price, PriceSource::Model),
            Err(InferenceError::ModelUnavailable(_)) => {
                debug!("Model {} unavailable, using fallback heuristic", model);
                (FallbackHeuristic::estimate(record), PriceSource::Fallback)
            }
            Err(e @ InferenceError::Compute { .. }) => {
                let jitter = self.jitter.sample();
                warn!("{}; using jittered fallback ({:+.3})", e, jitter);
                (
                    FallbackHeuristic::apply_jitter(FallbackHeuristic::estimate(record), jitter),
                    PriceSource::FallbackJittered,
                )
            }
        };

        ModelPrediction {
            model: model.clone(),
            price: round_price(raw),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::artifact_store::ArtifactState;
    use crate::ports::jitter::FixedJitter;
    use pricing_domain::{FeatureField, JITTER_BOUND};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted store: each key answers with a fixed result
    #[derive(Default)]
    struct ScriptedStore {
        answers: HashMap<ModelKey, Result<f64, InferenceError>>,
        calls: AtomicUsize,
    }

    impl ScriptedStore {
        fn with(mut self, key: &str, answer: Result<f64, InferenceError>) -> Self {
            self.answers.insert(ModelKey::from(key), answer);
            self
        }
    }

    impl ArtifactStore for ScriptedStore {
        fn predict(&self, model: &ModelKey, _record: &FeatureRecord) -> Result<f64, InferenceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answers
                .get(model)
                .cloned()
                .unwrap_or_else(|| Err(InferenceError::ModelUnavailable(model.clone())))
        }

        fn state(&self, model: &ModelKey) -> ArtifactState {
            match self.answers.get(model) {
                Some(_) => ArtifactState::Loaded,
                None => ArtifactState::Unavailable("not scripted".into()),
            }
        }

        fn keys(&self) -> Vec<ModelKey> {
            let mut keys: Vec<_> = self.answers.keys().cloned().collect();
            keys.sort();
            keys
        }
    }

    fn whitefield() -> RawFeatureInput {
        RawFeatureInput::new("1200", "2", "3", "Whitefield")
    }

    fn keys(names: &[&str]) -> Vec<ModelKey> {
        names.iter().map(|n| ModelKey::from(*n)).collect()
    }

    #[test]
    fn test_unavailable_model_uses_plain_fallback() {
        let use_case = PredictPriceUseCase::new(Arc::new(ScriptedStore::default()));
        let outcome = use_case.execute(&PredictPriceInput::new(whitefield())).unwrap();

        assert_eq!(outcome.predictions.len(), 1);
        assert_eq!(outcome.price_for(&ModelKey::LinearRegression), Some(151.0));
        assert_eq!(outcome.predictions[0].source, PriceSource::Fallback);
        assert_eq!(outcome.summary.average, 151.0);
        assert_eq!(outcome.summary.range, 0.0);
    }

    #[test]
    fn test_privileged_location_fallback() {
        let use_case = PredictPriceUseCase::new(Arc::new(ScriptedStore::default()));
        let input = PredictPriceInput::new(RawFeatureInput::new("1200", "2", "3", "Koramangala"));
        let outcome = use_case.execute(&input).unwrap();
        assert_eq!(outcome.price_for(&ModelKey::LinearRegression), Some(181.2));
    }

    #[test]
    fn test_unavailable_fallback_ignores_jitter() {
        let use_case = PredictPriceUseCase::new(Arc::new(ScriptedStore::default()))
            .with_jitter(Arc::new(FixedJitter(0.1)));
        let outcome = use_case.execute(&PredictPriceInput::new(whitefield())).unwrap();
        assert_eq!(outcome.price_for(&ModelKey::LinearRegression), Some(151.0));
    }

    #[test]
    fn test_model_answer_is_rounded() {
        let store = ScriptedStore::default().with("lr", Ok(123.456_7));
        let use_case = PredictPriceUseCase::new(Arc::new(store));
        let outcome = use_case.execute(&PredictPriceInput::new(whitefield())).unwrap();
        assert_eq!(outcome.price_for(&ModelKey::LinearRegression), Some(123.46));
        assert_eq!(outcome.predictions[0].source, PriceSource::Model);
        assert!(!outcome.any_fallback());
    }

    #[test]
    fn test_negative_model_answer_is_passed_through() {
        let store = ScriptedStore::default().with("lr", Ok(-12.345));
        let use_case = PredictPriceUseCase::new(Arc::new(store));
        let outcome = use_case.execute(&PredictPriceInput::new(whitefield())).unwrap();
        assert_eq!(outcome.price_for(&ModelKey::LinearRegression), Some(-12.35));
    }

    #[test]
    fn test_huge_model_answer_stays_finite() {
        let store = ScriptedStore::default().with("lr", Ok(1.0e307));
        let use_case = PredictPriceUseCase::new(Arc::new(store));
        let outcome = use_case.execute(&PredictPriceInput::new(whitefield())).unwrap();
        let price = outcome.price_for(&ModelKey::LinearRegression).unwrap();
        assert!(price.is_finite());
        assert_eq!(price, 1.0e307);
        assert!(outcome.summary.average.is_finite());
    }

    #[test]
    fn test_compute_error_uses_jittered_fallback() {
        let store = ScriptedStore::default().with(
            "lr",
            Err(InferenceError::compute(&ModelKey::LinearRegression, "boom")),
        );
        let use_case =
            PredictPriceUseCase::new(Arc::new(store)).with_jitter(Arc::new(FixedJitter(0.1)));
        let outcome = use_case.execute(&PredictPriceInput::new(whitefield())).unwrap();

        assert_eq!(outcome.price_for(&ModelKey::LinearRegression), Some(166.1));
        assert_eq!(outcome.predictions[0].source, PriceSource::FallbackJittered);
    }

    #[test]
    fn test_random_jitter_stays_within_ten_percent() {
        let store = ScriptedStore::default().with(
            "lr",
            Err(InferenceError::compute(&ModelKey::LinearRegression, "flaky")),
        );
        let use_case = PredictPriceUseCase::new(Arc::new(store));
        let input = PredictPriceInput::new(whitefield());
        for _ in 0..200 {
            let price = use_case
                .execute(&input)
                .unwrap()
                .price_for(&ModelKey::LinearRegression)
                .unwrap();
            let low = round_price(151.0 * (1.0 - JITTER_BOUND));
            let high = round_price(151.0 * (1.0 + JITTER_BOUND));
            assert!(price >= low && price <= high, "{}", price);
        }
    }

    #[test]
    fn test_one_result_per_key_in_caller_order() {
        let store = ScriptedStore::default()
            .with("lr", Ok(140.0))
            .with(
                "rf",
                Err(InferenceError::compute(&ModelKey::from("rf"), "unseen level")),
            );
        let use_case =
            PredictPriceUseCase::new(Arc::new(store)).with_jitter(Arc::new(FixedJitter(0.0)));
        let input = PredictPriceInput::new(whitefield()).with_models(keys(&["xgb", "lr", "rf", "lr"]));
        let outcome = use_case.execute(&input).unwrap();

        let order: Vec<&str> = outcome.predictions.iter().map(|p| p.model.as_str()).collect();
        assert_eq!(order, vec!["xgb", "lr", "rf"]);
        assert_eq!(outcome.price_for(&ModelKey::from("xgb")), Some(151.0));
        assert_eq!(outcome.price_for(&ModelKey::LinearRegression), Some(140.0));
        assert_eq!(outcome.price_for(&ModelKey::from("rf")), Some(151.0));

        assert_eq!(outcome.summary.minimum, 140.0);
        assert_eq!(outcome.summary.maximum, 151.0);
        assert_eq!(outcome.summary.average, 147.33);
        assert_eq!(outcome.summary.range, 11.0);
    }

    #[test]
    fn test_empty_selection_runs_default_model() {
        let use_case = PredictPriceUseCase::new(Arc::new(ScriptedStore::default()));
        let input = PredictPriceInput::new(whitefield()).with_models(Vec::new());
        let outcome = use_case.execute(&input).unwrap();
        assert_eq!(outcome.predictions.len(), 1);
        assert_eq!(outcome.predictions[0].model, ModelKey::LinearRegression);
    }

    #[test]
    fn test_validation_error_aborts_before_any_model_call() {
        let store = Arc::new(ScriptedStore::default().with("lr", Ok(100.0)));
        let use_case = PredictPriceUseCase::new(Arc::clone(&store));
        let input = PredictPriceInput::new(RawFeatureInput::new("lots", "2", "3", "Whitefield"))
            .with_models(keys(&["lr", "rf"]));

        let err = use_case.execute(&input).unwrap_err();
        assert_eq!(err.field(), FeatureField::TotalSqft);
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_missing_field_aborts() {
        let store = Arc::new(ScriptedStore::default());
        let use_case = PredictPriceUseCase::new(Arc::clone(&store));
        let mut features = whitefield();
        features.location = None;

        let err = use_case.execute(&PredictPriceInput::new(features)).unwrap_err();
        assert_eq!(err, FeatureValidationError::Missing(FeatureField::Location));
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_summary_invariants_with_mixed_sources() {
        let store = ScriptedStore::default()
            .with("a", Ok(10.004))
            .with("b", Ok(999.999))
            .with("c", Ok(-3.0));
        let use_case = PredictPriceUseCase::new(Arc::new(store));
        let input = PredictPriceInput::new(whitefield()).with_models(keys(&["a", "b", "c", "lr"]));
        let s = use_case.execute(&input).unwrap().summary;
        assert!(s.minimum <= s.average && s.average <= s.maximum);
        assert_eq!(s.range, round_price(s.maximum - s.minimum));
        assert!(s.range >= 0.0);
    }

    #[test]
    fn test_loaded_count_default_impl() {
        let store = ScriptedStore::default().with("lr", Ok(1.0)).with("rf", Ok(2.0));
        assert_eq!(store.loaded_count(), 2);
    }
}
