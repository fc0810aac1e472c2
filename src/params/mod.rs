//! Query Parameter Extraction
//!
//! Turns a page's query string into a flat, decoded parameter mapping:
//!
//! - **parser**: nom-based query string splitter and form decoder
//! - **location**: `PageLocation` (origin, path, query)
//! - **extractor**: `extract_params` and the memoizing `ParamExtractor`
//!
//! # Example
//!
//! ```rust
//! use chartlink::params::extract_params;
//!
//! let params = extract_params("?line=%7B%22a%22%3A1%7D&bar=2");
//! assert_eq!(params.get("line"), Some(r#"{"a":1}"#));
//! assert_eq!(params.get("bar"), Some("2"));
//! ```

pub mod extractor;
pub mod location;
pub mod parser;

pub use extractor::{extract_params, ParamExtractor};
pub use location::PageLocation;
pub use parser::{decode_component, parse_query_string};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Decoded query parameters, keyed by name
///
/// Ordered so that its JSON form is deterministic and usable as a cache key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a parameter, replacing any earlier value
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Stable serialized form, used to key the resolution cache
    pub fn fingerprint(&self) -> String {
        // A string-to-string map always serializes
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
