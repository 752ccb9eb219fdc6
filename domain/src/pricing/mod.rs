//! Pricing rules and prediction results
//!
//! - [`fallback::FallbackHeuristic`]: closed-form estimate used when no model answers
//! - [`summary::PredictionSummary`]: average / min / max / range over all models
//! - [`outcome::PredictionOutcome`]: per-model prices plus the summary

pub mod fallback;
pub mod outcome;
pub mod summary;
