//! Prediction outcome value objects

use crate::core::model::ModelKey;
use crate::feature::record::FeatureRecord;
use crate::pricing::summary::PredictionSummary;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Where a model's price came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    /// The trained artifact answered
    Model,
    /// The artifact was unavailable, plain heuristic
    Fallback,
    /// The artifact failed during inference, heuristic with random jitter
    FallbackJittered,
}

impl PriceSource {
    pub fn is_fallback(&self) -> bool {
        !matches!(self, PriceSource::Model)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceSource::Model => "model",
            PriceSource::Fallback => "fallback",
            PriceSource::FallbackJittered => "fallback_jittered",
        }
    }
}

impl std::fmt::Display for PriceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One model's rounded price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPrediction {
    pub model: ModelKey,
    /// Price in lakhs, rounded to 2 decimal places
    pub price: f64,
    pub source: PriceSource,
}

/// Result of one prediction call
///
/// `predictions` follows the order the caller selected models in and
/// holds exactly one entry per distinct key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionOutcome {
    pub record: FeatureRecord,
    pub predictions: Vec<ModelPrediction>,
    pub summary: PredictionSummary,
}

impl PredictionOutcome {
    /// Build an outcome, deriving the summary.
    ///
    /// Returns `None` when `predictions` is empty.
    pub fn new(record: FeatureRecord, predictions: Vec<ModelPrediction>) -> Option<Self> {
        let prices: Vec<f64> = predictions.iter().map(|p| p.price).collect();
        let summary = PredictionSummary::from_prices(&prices)?;
        Some(Self {
            record,
            predictions,
            summary,
        })
    }

    /// Build an outcome from a guaranteed first prediction and the rest.
    pub fn from_split(
        record: FeatureRecord,
        first: ModelPrediction,
        rest: Vec<ModelPrediction>,
    ) -> Self {
        let rest_prices: Vec<f64> = rest.iter().map(|p| p.price).collect();
        let summary = PredictionSummary::from_split(first.price, &rest_prices);
        let mut predictions = Vec::with_capacity(rest.len() + 1);
        predictions.push(first);
        predictions.extend(rest);
        Self {
            record,
            predictions,
            summary,
        }
    }

    pub fn price_for(&self, model: &ModelKey) -> Option<f64> {
        self.predictions
            .iter()
            .find(|p| &p.model == model)
            .map(|p| p.price)
    }

    /// `{model_key: price}` view, serialized in selection order
    pub fn price_map(&self) -> PriceMap<'_> {
        PriceMap(&self.predictions)
    }

    pub fn any_fallback(&self) -> bool {
        self.predictions.iter().any(|p| p.source.is_fallback())
    }
}

/// Serializes predictions as a JSON object keyed by model key
#[derive(Debug, Clone, Copy)]
pub struct PriceMap<'a>(&'a [ModelPrediction]);

impl Serialize for PriceMap<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for prediction in self.0 {
            map.serialize_entry(prediction.model.as_str(), &prediction.price)?;
        }
        map.end()
    }
}
