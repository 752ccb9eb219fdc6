//! One-hot encoded linear regression artifact

use super::error::ArtifactComputeError;
use pricing_domain::FeatureRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What to do with a location the model was not trained on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownLocation {
    /// Contribute nothing (all one-hot columns zero)
    #[default]
    Ignore,
    /// Fail the inference
    Error,
}

/// Weights of the numeric features
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericCoefficients {
    pub total_sqft: f64,
    pub bath: f64,
    pub bhk: f64,
}

/// Linear regression over `total_sqft`, `bath`, `bhk` and a one-hot `location`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressionArtifact {
    pub intercept: f64,
    pub coefficients: NumericCoefficients,
    /// One weight per location seen in training
    #[serde(default)]
    pub locations: HashMap<String, f64>,
    #[serde(default)]
    pub handle_unknown: UnknownLocation,
}

impl LinearRegressionArtifact {
    /// Check that every weight is finite. Returns the offending name.
    pub fn check_finite(&self) -> Result<(), String> {
        let numeric = [
            ("intercept", self.intercept),
            ("total_sqft", self.coefficients.total_sqft),
            ("bath", self.coefficients.bath),
            ("bhk", self.coefficients.bhk),
        ];
        if let Some((name, _)) = numeric.iter().find(|(_, w)| !w.is_finite()) {
            return Err(format!("coefficient '{}' is not finite", name));
        }
        if let Some((name, _)) = self.locations.iter().find(|(_, w)| !w.is_finite()) {
            return Err(format!("location weight '{}' is not finite", name));
        }
        Ok(())
    }

    pub fn predict(&self, record: &FeatureRecord) -> Result<f64, ArtifactComputeError> {
        let location_weight = match self.locations.get(record.location()) {
            Some(weight) => *weight,
            None => match self.handle_unknown {
                UnknownLocation::Ignore => 0.0,
                UnknownLocation::Error => {
                    return Err(ArtifactComputeError::UnseenLocation(
                        record.location().to_string(),
                    ));
                }
            },
        };

        let price = self.intercept
            + self.coefficients.total_sqft * record.total_sqft()
            + self.coefficients.bath * f64::from(record.bath())
            + self.coefficients.bhk * f64::from(record.bhk())
            + location_weight;

        if price.is_finite() {
            Ok(price)
        } else {
            Err(ArtifactComputeError::NonFinite)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(handle_unknown: UnknownLocation) -> LinearRegressionArtifact {
        LinearRegressionArtifact {
            intercept: 10.0,
            coefficients: NumericCoefficients {
                total_sqft: 0.05,
                bath: 4.0,
                bhk: 12.0,
            },
            locations: HashMap::from([
                ("Whitefield".to_string(), 5.0),
                ("Koramangala".to_string(), 40.0),
            ]),
            handle_unknown,
        }
    }

    #[test]
    fn test_known_location() {
        let record = FeatureRecord::new(1000.0, 2, 3, "Koramangala").unwrap();
        let price = artifact(UnknownLocation::Ignore).predict(&record).unwrap();
        // 10 + 50 + 8 + 36 + 40
        assert!((price - 144.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_location_ignored() {
        let record = FeatureRecord::new(1000.0, 2, 3, "Atlantis").unwrap();
        let price = artifact(UnknownLocation::Ignore).predict(&record).unwrap();
        assert!((price - 104.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_location_rejected() {
        let record = FeatureRecord::new(1000.0, 2, 3, "Atlantis").unwrap();
        let err = artifact(UnknownLocation::Error).predict(&record).unwrap_err();
        assert_eq!(err, ArtifactComputeError::UnseenLocation("Atlantis".to_string()));
    }

    #[test]
    fn test_overflow_is_compute_error() {
        let mut model = artifact(UnknownLocation::Ignore);
        model.coefficients.total_sqft = f64::MAX;
        let record = FeatureRecord::new(1e10, 2, 3, "Whitefield").unwrap();
        assert_eq!(model.predict(&record).unwrap_err(), ArtifactComputeError::NonFinite);
    }

    #[test]
    fn test_check_finite() {
        assert!(artifact(UnknownLocation::Ignore).check_finite().is_ok());

        let mut model = artifact(UnknownLocation::Ignore);
        model.locations.insert("Hebbal".to_string(), f64::NAN);
        assert!(model.check_finite().unwrap_err().contains("Hebbal"));
    }

    #[test]
    fn test_deserialize_defaults() {
        let model: LinearRegressionArtifact = serde_json::from_str(
            r#"{"intercept": 1.0, "coefficients": {"total_sqft": 0.1, "bath": 1.0, "bhk": 1.0}}"#,
        )
        .unwrap();
        assert!(model.locations.is_empty());
        assert_eq!(model.handle_unknown, UnknownLocation::Ignore);
    }
}
