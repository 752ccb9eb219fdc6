//! Raw, unvalidated feature input

use crate::core::error::FeatureValidationError;
use crate::feature::record::{FeatureField, FeatureRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single raw field value as received from a form or JSON body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Convert an arbitrary JSON value. `null` counts as absent.
    ///
    /// Booleans, arrays and objects are kept as their JSON text so that
    /// validation can report them verbatim.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Number(n) => Some(match n.as_f64() {
                Some(f) => RawValue::Number(f),
                None => RawValue::Text(n.to_string()),
            }),
            Value::String(s) => Some(RawValue::Text(s.clone())),
            other => Some(RawValue::Text(other.to_string())),
        }
    }
}

impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<u32> for RawValue {
    fn from(n: u32) -> Self {
        RawValue::Number(f64::from(n))
    }
}

/// The four raw feature fields, each possibly absent
///
/// Adapters build this from whatever they collect (form fields, JSON
/// body, widget values) and hand it to the prediction use case, which is
/// the only place it gets validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFeatureInput {
    pub total_sqft: Option<RawValue>,
    pub bath: Option<RawValue>,
    pub bhk: Option<RawValue>,
    pub location: Option<RawValue>,
}

impl RawFeatureInput {
    /// Create an input with every field present
    pub fn new(
        total_sqft: impl Into<RawValue>,
        bath: impl Into<RawValue>,
        bhk: impl Into<RawValue>,
        location: impl Into<RawValue>,
    ) -> Self {
        Self {
            total_sqft: Some(total_sqft.into()),
            bath: Some(bath.into()),
            bhk: Some(bhk.into()),
            location: Some(location.into()),
        }
    }

    /// Pick the four feature fields out of a JSON object, ignoring anything else
    pub fn from_json(body: &Value) -> Self {
        let field = |name: &str| body.get(name).and_then(RawValue::from_json);
        Self {
            total_sqft: field(FeatureField::TotalSqft.as_str()),
            bath: field(FeatureField::Bath.as_str()),
            bhk: field(FeatureField::Bhk.as_str()),
            location: field(FeatureField::Location.as_str()),
        }
    }

    /// Coerce every field into a [`FeatureRecord`]
    pub fn validate(&self) -> Result<FeatureRecord, FeatureValidationError> {
        let total_sqft = parse_real(FeatureField::TotalSqft, self.total_sqft.as_ref())?;
        let bath = parse_count(FeatureField::Bath, self.bath.as_ref())?;
        let bhk = parse_count(FeatureField::Bhk, self.bhk.as_ref())?;
        let location = parse_location(self.location.as_ref())?;
        FeatureRecord::new(total_sqft, bath, bhk, location)
    }
}

fn parse_real(field: FeatureField, value: Option<&RawValue>) -> Result<f64, FeatureValidationError> {
    let not_numeric = |v: &RawValue| FeatureValidationError::NotNumeric {
        field,
        value: v.to_string(),
    };
    let value = value.ok_or(FeatureValidationError::Missing(field))?;
    let parsed = match value {
        RawValue::Number(n) => *n,
        RawValue::Text(s) => s.trim().parse::<f64>().map_err(|_| not_numeric(value))?,
    };
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(not_numeric(value))
    }
}

fn parse_count(field: FeatureField, value: Option<&RawValue>) -> Result<u32, FeatureValidationError> {
    if let Some(RawValue::Text(s)) = value {
        if let Ok(n) = s.trim().parse::<u32>() {
            return Ok(n);
        }
    }

    // Integral reals ("2.0", JSON 2.0) are accepted, anything fractional is not
    let real = parse_real(field, value)?;
    if real.fract() != 0.0 {
        return Err(FeatureValidationError::NotInteger {
            field,
            value: value.map(ToString::to_string).unwrap_or_default(),
        });
    }
    if real < 1.0 {
        return Err(FeatureValidationError::NotPositive(field));
    }
    if real > f64::from(u32::MAX) {
        return Err(FeatureValidationError::NotInteger {
            field,
            value: value.map(ToString::to_string).unwrap_or_default(),
        });
    }
    Ok(real as u32)
}

fn parse_location(value: Option<&RawValue>) -> Result<String, FeatureValidationError> {
    match value {
        None => Err(FeatureValidationError::Missing(FeatureField::Location)),
        Some(RawValue::Text(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(other) => Err(FeatureValidationError::InvalidLocation(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_string_fields() {
        let input = RawFeatureInput::new("1200", "2", "3", "Whitefield");
        let record = input.validate().unwrap();
        assert_eq!(record.total_sqft(), 1200.0);
        assert_eq!(record.bath(), 2);
        assert_eq!(record.bhk(), 3);
        assert_eq!(record.location(), "Whitefield");
    }

    #[test]
    fn test_validate_trims_numeric_text() {
        let input = RawFeatureInput::new(" 1050.5 ", " 1 ", "2 ", "JP Nagar");
        let record = input.validate().unwrap();
        assert_eq!(record.total_sqft(), 1050.5);
        assert_eq!(record.bath(), 1);
        assert_eq!(record.bhk(), 2);
    }

    #[test]
    fn test_validate_accepts_integral_reals() {
        let input = RawFeatureInput::new(1200.0, "2.0", 3.0, "other");
        let record = input.validate().unwrap();
        assert_eq!(record.bath(), 2);
        assert_eq!(record.bhk(), 3);
    }

    #[test]
    fn test_unknown_location_passes_through_verbatim() {
        let input = RawFeatureInput::new("900", "1", "1", "  Somewhere New ");
        let record = input.validate().unwrap();
        assert_eq!(record.location(), "  Somewhere New ");
    }

    #[test]
    fn test_non_numeric_sqft_is_rejected() {
        let input = RawFeatureInput::new("big", "2", "3", "Whitefield");
        let err = input.validate().unwrap_err();
        assert_eq!(
            err,
            FeatureValidationError::NotNumeric {
                field: FeatureField::TotalSqft,
                value: "big".to_string()
            }
        );
    }

    #[test]
    fn test_non_numeric_bath_and_bhk_are_rejected() {
        let err = RawFeatureInput::new("1200", "two", "3", "Whitefield")
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), FeatureField::Bath);

        let err = RawFeatureInput::new("1200", "2", "three", "Whitefield")
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), FeatureField::Bhk);
    }

    #[test]
    fn test_fractional_count_is_rejected() {
        let err = RawFeatureInput::new("1200", "2.5", "3", "Whitefield")
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            FeatureValidationError::NotInteger {
                field: FeatureField::Bath,
                ..
            }
        ));
    }

    #[test]
    fn test_non_positive_values_are_rejected() {
        let err = RawFeatureInput::new("0", "2", "3", "Whitefield")
            .validate()
            .unwrap_err();
        assert_eq!(err, FeatureValidationError::NotPositive(FeatureField::TotalSqft));

        let err = RawFeatureInput::new("1200", "-1", "3", "Whitefield")
            .validate()
            .unwrap_err();
        assert_eq!(err, FeatureValidationError::NotPositive(FeatureField::Bath));

        let err = RawFeatureInput::new("1200", "1", "0", "Whitefield")
            .validate()
            .unwrap_err();
        assert_eq!(err, FeatureValidationError::NotPositive(FeatureField::Bhk));
    }

    #[test]
    fn test_non_finite_sqft_is_rejected() {
        let err = RawFeatureInput::new("NaN", "2", "3", "Whitefield")
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), FeatureField::TotalSqft);

        let err = RawFeatureInput::new("inf", "2", "3", "Whitefield")
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), FeatureField::TotalSqft);
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let mut input = RawFeatureInput::new("1200", "2", "3", "Whitefield");
        input.bhk = None;
        assert_eq!(
            input.validate().unwrap_err(),
            FeatureValidationError::Missing(FeatureField::Bhk)
        );

        assert_eq!(
            RawFeatureInput::default().validate().unwrap_err(),
            FeatureValidationError::Missing(FeatureField::TotalSqft)
        );
    }

    #[test]
    fn test_blank_or_numeric_location_is_rejected() {
        let err = RawFeatureInput::new("1200", "2", "3", "   ")
            .validate()
            .unwrap_err();
        assert!(matches!(err, FeatureValidationError::InvalidLocation(_)));

        let err = RawFeatureInput::new("1200", "2", "3", 42.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, FeatureValidationError::InvalidLocation(_)));
    }

    #[test]
    fn test_from_json_mixed_types() {
        let body = json!({
            "total_sqft": 1200,
            "bath": "2",
            "bhk": 3,
            "location": "Koramangala",
            "models": ["lr"]
        });
        let record = RawFeatureInput::from_json(&body).validate().unwrap();
        assert_eq!(record.total_sqft(), 1200.0);
        assert_eq!(record.bath(), 2);
        assert_eq!(record.bhk(), 3);
        assert_eq!(record.location(), "Koramangala");
    }

    #[test]
    fn test_from_json_null_and_bool_fields() {
        let body = json!({
            "total_sqft": null,
            "bath": true,
            "bhk": 3,
            "location": "Hebbal"
        });
        let input = RawFeatureInput::from_json(&body);
        assert!(input.total_sqft.is_none());
        assert_eq!(input.bath, Some(RawValue::Text("true".to_string())));
        assert_eq!(
            input.validate().unwrap_err(),
            FeatureValidationError::Missing(FeatureField::TotalSqft)
        );
    }
}
