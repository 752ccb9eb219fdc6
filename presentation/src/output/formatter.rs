//! Output formatter trait

use pricing_domain::PredictionOutcome;

/// Trait for formatting prediction outcomes
pub trait OutputFormatter {
    /// Format the complete outcome for humans
    fn format(&self, outcome: &PredictionOutcome) -> String;

    /// Format as JSON
    fn format_json(&self, outcome: &PredictionOutcome) -> String;
}
