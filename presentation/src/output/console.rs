//! Console output formatter for prediction outcomes

use crate::output::formatter::OutputFormatter;
use crate::output::money::{format_lakhs, format_rupees};
use colored::Colorize;
use pricing_domain::PredictionOutcome;
use serde_json::json;

/// Formats prediction outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete outcome
    pub fn format(outcome: &PredictionOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("House Price Estimate"));
        output.push('\n');

        // Input echo
        let record = &outcome.record;
        output.push_str(&format!(
            "{} {} sqft, {} BHK, {} bath, {}\n",
            "Property:".cyan().bold(),
            record.total_sqft(),
            record.bhk(),
            record.bath(),
            record.location()
        ));

        // Per-model prices
        output.push_str(&Self::section_header("Predictions"));
        for prediction in &outcome.predictions {
            let label = format!(
                "{} ({})",
                prediction.model.display_name(),
                prediction.model
            );
            let line = format!(
                "  {:<32} {:>20}  {}",
                label,
                format_lakhs(prediction.price),
                format_rupees(prediction.price).dimmed()
            );
            if prediction.source.is_fallback() {
                output.push_str(&format!(
                    "{} {}\n",
                    line,
                    format!("[{}]", prediction.source).yellow()
                ));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }

        // Summary statistics
        let summary = &outcome.summary;
        output.push_str(&Self::section_header("Summary"));
        output.push_str(&format!("  {:<10} {:.2}\n", "Average:", summary.average));
        output.push_str(&format!("  {:<10} {:.2}\n", "Minimum:", summary.minimum));
        output.push_str(&format!("  {:<10} {:.2}\n", "Maximum:", summary.maximum));
        output.push_str(&format!("  {:<10} {:.2}\n", "Range:", summary.range));

        if outcome.summary.minimum <= 0.0 {
            output.push_str(&format!(
                "\n{}\n",
                "The prediction seems unusual. Please verify your inputs.".yellow()
            ));
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &PredictionOutcome) -> String {
        let value = json!({
            "status": "success",
            "input": outcome.record,
            "predictions": outcome.price_map(),
            "sources": outcome
                .predictions
                .iter()
                .map(|p| (p.model.to_string(), json!(p.source)))
                .collect::<serde_json::Map<String, serde_json::Value>>(),
            "statistics": outcome.summary,
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a validation failure
    pub fn format_error(message: &str) -> String {
        format!("{} {}\n", "Error making prediction:".red().bold(), message)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &PredictionOutcome) -> String {
        Self::format(outcome)
    }

    fn format_json(&self, outcome: &PredictionOutcome) -> String {
        Self::format_json(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricing_domain::{FeatureRecord, ModelKey, ModelPrediction, PriceSource};

    fn outcome() -> PredictionOutcome {
        let record = FeatureRecord::new(1200.0, 2, 3, "Whitefield").unwrap();
        PredictionOutcome::new(
            record,
            vec![
                ModelPrediction {
                    model: ModelKey::LinearRegression,
                    price: 151.0,
                    source: PriceSource::Fallback,
                },
                ModelPrediction {
                    model: ModelKey::from("rf"),
                    price: 140.5,
                    source: PriceSource::Model,
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_format_contains_prices_and_summary() {
        let text = ConsoleFormatter::format(&outcome());
        assert!(text.contains("Linear Regression (lr)"));
        assert!(text.contains("₹ 151.00 Lakhs"));
        assert!(text.contains("₹ 140.50 Lakhs"));
        assert!(text.contains("Average:"));
        assert!(text.contains("10.50"));
        assert!(!text.contains("unusual"));
    }

    #[test]
    fn test_format_json() {
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&outcome())).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["predictions"]["lr"], 151.0);
        assert_eq!(json["predictions"]["rf"], 140.5);
        assert_eq!(json["sources"]["lr"], "fallback");
        assert_eq!(json["statistics"]["maximum"], 151.0);
        assert_eq!(json["input"]["location"], "Whitefield");
    }

    #[test]
    fn test_format_error() {
        let text = ConsoleFormatter::format_error("missing required field 'bath'");
        assert!(text.contains("missing required field 'bath'"));
    }
}
