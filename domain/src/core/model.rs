//! Model key value object identifying a pricing model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a pricing model (Value Object)
///
/// Callers select models by key (e.g. `"lr"`). Keys are kept verbatim, so
/// results come back under exactly the key that was requested. Keys that no artifact was
/// configured for are still valid selections; the artifact store simply
/// reports them as unavailable and the fallback heuristic answers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModelKey {
    /// One-hot encoded linear regression (`"lr"`)
    LinearRegression,
    // Custom
    Custom(String),
}

impl ModelKey {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            ModelKey::LinearRegression => "lr",
            ModelKey::Custom(s) => s,
        }
    }

    /// Human readable model name
    pub fn display_name(&self) -> &str {
        match self {
            ModelKey::LinearRegression => "Linear Regression",
            ModelKey::Custom(s) => s,
        }
    }

    /// Short description shown next to the model name
    pub fn description(&self) -> &str {
        match self {
            ModelKey::LinearRegression => "Fast and accurate prediction model",
            ModelKey::Custom(_) => "Custom prediction model",
        }
    }

    /// Models used when a caller does not select any
    pub fn default_selection() -> Vec<ModelKey> {
        vec![ModelKey::LinearRegression]
    }
}

impl Default for ModelKey {
    /// Returns the default model (linear regression)
    fn default() -> Self {
        ModelKey::LinearRegression
    }
}

impl std::fmt::Display for ModelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "lr" => ModelKey::LinearRegression,
            other => ModelKey::Custom(other.to_string()),
        })
    }
}

impl From<&str> for ModelKey {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(key) => key,
            Err(never) => match never {},
        }
    }
}

impl Serialize for ModelKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ModelKey::from(s.as_str()))
    }
}

/// Non-empty, duplicate-free, ordered list of models to run
///
/// An empty request falls back to [`ModelKey::default_selection`]; a
/// repeated key keeps its first position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    first: ModelKey,
    rest: Vec<ModelKey>,
}

impl ModelSelection {
    pub fn new(keys: impl IntoIterator<Item = ModelKey>) -> Self {
        let mut unique: Vec<ModelKey> = Vec::new();
        for key in keys {
            if !unique.contains(&key) {
                unique.push(key);
            }
        }
        if unique.is_empty() {
            unique = ModelKey::default_selection();
        }
        let first = unique.remove(0);
        Self {
            first,
            rest: unique,
        }
    }

    pub fn first(&self) -> &ModelKey {
        &self.first
    }

    pub fn rest(&self) -> &[ModelKey] {
        &self.rest
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelKey> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    pub fn len(&self) -> usize {
        self.rest.len() + 1
    }

    /// Always false; present for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for ModelSelection {
    fn default() -> Self {
        Self::new(ModelKey::default_selection())
    }
}

impl FromIterator<ModelKey> for ModelSelection {
    fn from_iter<I: IntoIterator<Item = ModelKey>>(iter: I) -> Self {
        Self::new(iter)
    }
}
