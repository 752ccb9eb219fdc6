//! Fallback pricing heuristic

use crate::feature::record::FeatureRecord;

/// Localities whose fallback price is scaled up by [`FallbackHeuristic::PREMIUM_MULTIPLIER`]
pub const PRIVILEGED_LOCATIONS: [&str; 2] = ["Koramangala", "Indira Nagar"];

/// Largest relative jitter applied to a fallback price after a compute error
pub const JITTER_BOUND: f64 = 0.1;

/// Closed-form price estimate in lakhs
///
/// `price = total_sqft × 0.08 + bhk × 15 + bath × 5`, scaled by 1.2 for the
/// privileged localities. Deterministic for a given record.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackHeuristic;

impl FallbackHeuristic {
    pub const SQFT_RATE: f64 = 0.08;
    pub const BHK_RATE: f64 = 15.0;
    pub const BATH_RATE: f64 = 5.0;
    pub const PREMIUM_MULTIPLIER: f64 = 1.2;

    /// Unrounded heuristic price for a record
    pub fn estimate(record: &FeatureRecord) -> f64 {
        Self::base_price(record) * Self::location_multiplier(record.location())
    }

    /// Price before the location multiplier
    pub fn base_price(record: &FeatureRecord) -> f64 {
        record.total_sqft() * Self::SQFT_RATE
            + f64::from(record.bhk()) * Self::BHK_RATE
            + f64::from(record.bath()) * Self::BATH_RATE
    }

    /// 1.2 for an exact match on a privileged locality, 1.0 otherwise
    pub fn location_multiplier(location: &str) -> f64 {
        if PRIVILEGED_LOCATIONS.contains(&location) {
            Self::PREMIUM_MULTIPLIER
        } else {
            1.0
        }
    }

    /// Scale `price` by `1 + jitter`, with `jitter` clamped to ±[`JITTER_BOUND`]
    pub fn apply_jitter(price: f64, jitter: f64) -> f64 {
        price * (1.0 + jitter.clamp(-JITTER_BOUND, JITTER_BOUND))
    }
}
