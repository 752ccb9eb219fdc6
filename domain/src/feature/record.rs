//! Validated feature record

use crate::core::error::FeatureValidationError;
use serde::{Deserialize, Serialize};

/// Names of the four model features
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureField {
    TotalSqft,
    Bath,
    Bhk,
    Location,
}

impl FeatureField {
    pub const ALL: [FeatureField; 4] = [
        FeatureField::TotalSqft,
        FeatureField::Bath,
        FeatureField::Bhk,
        FeatureField::Location,
    ];

    /// Column / form field name
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureField::TotalSqft => "total_sqft",
            FeatureField::Bath => "bath",
            FeatureField::Bhk => "bhk",
            FeatureField::Location => "location",
        }
    }
}

impl std::fmt::Display for FeatureField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A property description every pricing model accepts (Value Object)
///
/// Fields are private: the only ways to obtain a record are
/// [`FeatureRecord::new`] and [`RawFeatureInput::validate`], both of which
/// enforce positivity.
///
/// [`RawFeatureInput::validate`]: crate::RawFeatureInput::validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedRecord")]
pub struct FeatureRecord {
    total_sqft: f64,
    bath: u32,
    bhk: u32,
    location: String,
}

impl FeatureRecord {
    pub fn new(
        total_sqft: f64,
        bath: u32,
        bhk: u32,
        location: impl Into<String>,
    ) -> Result<Self, FeatureValidationError> {
        let location = location.into();
        if !total_sqft.is_finite() {
            return Err(FeatureValidationError::NotNumeric {
                field: FeatureField::TotalSqft,
                value: total_sqft.to_string(),
            });
        }
        if total_sqft <= 0.0 {
            return Err(FeatureValidationError::NotPositive(FeatureField::TotalSqft));
        }
        if bath == 0 {
            return Err(FeatureValidationError::NotPositive(FeatureField::Bath));
        }
        if bhk == 0 {
            return Err(FeatureValidationError::NotPositive(FeatureField::Bhk));
        }
        if location.trim().is_empty() {
            return Err(FeatureValidationError::InvalidLocation(location));
        }
        Ok(Self {
            total_sqft,
            bath,
            bhk,
            location,
        })
    }

    /// Total built-up area in square feet
    pub fn total_sqft(&self) -> f64 {
        self.total_sqft
    }

    /// Bathroom count
    pub fn bath(&self) -> u32 {
        self.bath
    }

    /// Bedroom count (BHK)
    pub fn bhk(&self) -> u32 {
        self.bhk
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

#[derive(Deserialize)]
struct UncheckedRecord {
    total_sqft: f64,
    bath: u32,
    bhk: u32,
    location: String,
}

impl TryFrom<UncheckedRecord> for FeatureRecord {
    type Error = FeatureValidationError;

    fn try_from(raw: UncheckedRecord) -> Result<Self, Self::Error> {
        FeatureRecord::new(raw.total_sqft, raw.bath, raw.bhk, raw.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = FeatureRecord::new(1200.0, 2, 3, "Whitefield").unwrap();
        assert_eq!(record.total_sqft(), 1200.0);
        assert_eq!(record.location(), "Whitefield");
    }

    #[test]
    fn test_zero_counts_rejected() {
        assert_eq!(
            FeatureRecord::new(1200.0, 0, 3, "Whitefield").unwrap_err(),
            FeatureValidationError::NotPositive(FeatureField::Bath)
        );
        assert_eq!(
            FeatureRecord::new(1200.0, 2, 0, "Whitefield").unwrap_err(),
            FeatureValidationError::NotPositive(FeatureField::Bhk)
        );
    }

    #[test]
    fn test_negative_area_rejected() {
        assert_eq!(
            FeatureRecord::new(-5.0, 2, 3, "Whitefield").unwrap_err(),
            FeatureValidationError::NotPositive(FeatureField::TotalSqft)
        );
    }

    #[test]
    fn test_deserialize_enforces_invariants() {
        let ok: FeatureRecord = serde_json::from_str(
            r#"{"total_sqft": 1000.0, "bath": 1, "bhk": 2, "location": "Hebbal"}"#,
        )
        .unwrap();
        assert_eq!(ok.bhk(), 2);

        let bad = serde_json::from_str::<FeatureRecord>(
            r#"{"total_sqft": 1000.0, "bath": 0, "bhk": 2, "location": "Hebbal"}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_field_names() {
        let names: Vec<_> = FeatureField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, vec!["total_sqft", "bath", "bhk", "location"]);
    }
}
