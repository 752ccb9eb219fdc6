//! Location catalog value object

use serde::{Serialize, Serializer};

/// Sentinel locality that groups rare neighbourhoods
pub const OTHER_LOCATION: &str = "other";

/// Built-in localities used when the dataset cannot be read.
///
/// Kept in the same byte-wise order [`LocationCatalog`] sorts into.
pub const BUILTIN_LOCATIONS: [&str; 14] = [
    "BTM Layout",
    "Banashankari",
    "Electronic City",
    "HSR Layout",
    "Hebbal",
    "Indira Nagar",
    "JP Nagar",
    "Jayanagar",
    "Koramangala",
    "Marathahalli",
    "Rajaji Nagar",
    "Whitefield",
    "Yelahanka",
    OTHER_LOCATION,
];

/// Sorted, deduplicated set of known locality names
///
/// Membership is informational only: predictions accept any locality,
/// the catalog just drives selectors and `/api/locations`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCatalog {
    locations: Vec<String>,
}

impl LocationCatalog {
    /// Build a catalog from arbitrary names.
    ///
    /// Names are trimmed; blank names are skipped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut locations: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        locations.sort();
        locations.dedup();
        Self { locations }
    }

    /// The built-in fallback catalog
    pub fn builtin() -> Self {
        Self::from_names(BUILTIN_LOCATIONS)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn contains(&self, location: &str) -> bool {
        self.locations
            .binary_search_by(|probe| probe.as_str().cmp(location))
            .is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.locations
    }

    pub fn first(&self) -> Option<&str> {
        self.locations.first().map(String::as_str)
    }
}

impl Default for LocationCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Serialize for LocationCatalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.locations.serialize(serializer)
    }
}
