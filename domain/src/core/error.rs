//! Domain error types

use crate::feature::record::FeatureField;
use thiserror::Error;

/// Raw input could not be coerced into a [`FeatureRecord`].
///
/// This is the only error that aborts a prediction call. The message is
/// shown to end users as-is, so it names the offending field.
///
/// [`FeatureRecord`]: crate::FeatureRecord
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureValidationError {
    #[error("missing required field '{0}'")]
    Missing(FeatureField),

    #[error("field '{field}' must be a number, got '{value}'")]
    NotNumeric { field: FeatureField, value: String },

    #[error("field '{field}' must be a whole number, got '{value}'")]
    NotInteger { field: FeatureField, value: String },

    #[error("field '{0}' must be greater than zero")]
    NotPositive(FeatureField),

    #[error("field 'location' must be a non-empty text value, got '{0}'")]
    InvalidLocation(String),
}

impl FeatureValidationError {
    /// The field that failed validation
    pub fn field(&self) -> FeatureField {
        match self {
            Self::Missing(field) | Self::NotPositive(field) => *field,
            Self::NotNumeric { field, .. } | Self::NotInteger { field, .. } => *field,
            Self::InvalidLocation(_) => FeatureField::Location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let error = FeatureValidationError::Missing(FeatureField::TotalSqft);
        assert_eq!(error.to_string(), "missing required field 'total_sqft'");
    }

    #[test]
    fn test_not_numeric_display() {
        let error = FeatureValidationError::NotNumeric {
            field: FeatureField::Bath,
            value: "two".to_string(),
        };
        assert_eq!(error.to_string(), "field 'bath' must be a number, got 'two'");
        assert_eq!(error.field(), FeatureField::Bath);
    }

    #[test]
    fn test_invalid_location_points_at_location() {
        let error = FeatureValidationError::InvalidLocation(String::new());
        assert_eq!(error.field(), FeatureField::Location);
    }
}
