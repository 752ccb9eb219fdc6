//! Summary statistics over per-model prices

use serde::{Deserialize, Serialize};

/// Round a price to 2 decimal places (half away from zero)
///
/// Values too large to scale are already integral and come back unchanged.
pub fn round_price(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// Aggregate statistics across all model prices of one prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    pub average: f64,
    pub minimum: f64,
    pub maximum: f64,
    pub range: f64,
}

impl PredictionSummary {
    /// Summarize a set of prices. Returns `None` for an empty set.
    pub fn from_prices(prices: &[f64]) -> Option<Self> {
        let (first, rest) = prices.split_first()?;
        Some(Self::from_split(*first, rest))
    }

    /// Summarize `first` together with `rest`.
    ///
    /// Guarantees `minimum <= average <= maximum` and
    /// `range == round(maximum - minimum) >= 0`.
    pub fn from_split(first: f64, rest: &[f64]) -> Self {
        let (min, max) = rest
            .iter()
            .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p)));
        let mean = (first + rest.iter().sum::<f64>()) / (rest.len() + 1) as f64;

        let minimum = round_price(min);
        let maximum = round_price(max);
        Self {
            average: round_price(mean).clamp(minimum, maximum),
            minimum,
            maximum,
            range: round_price(maximum - minimum),
        }
    }
}
