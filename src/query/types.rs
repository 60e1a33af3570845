//! Search query data structures
//!
//! - `QueryValue`: a single filter value (text, number, or list)
//! - `SearchQuery`: ordered mapping from filter descriptor to value

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key under which the page size is stored
pub const LIMIT_KEY: &str = "limit";

/// Separator between a field name and its operator token (`field__gte`)
pub const OPERATOR_SEPARATOR: &str = "__";

/// A filter value as typed (and optionally cast) by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// Whole number, e.g. `limit`
    Integer(i64),
    /// Decimal number, e.g. `incidence_angle`
    Float(f64),
    /// Free text, e.g. `collect_id` or a normalized datetime
    Text(String),
    /// Several values, e.g. enum selections or an `in` list
    List(Vec<QueryValue>),
}

impl QueryValue {
    /// Build a list of text values
    #[must_use]
    pub fn text_list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(|v| Self::Text(v.into())).collect())
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Text(value) => f.write_str(value),
            Self::List(values) => {
                let joined = values
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("|");
                f.write_str(&joined)
            }
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Ordered search filter mapping
///
/// Keys are filter descriptors: a bare field name (`collect_id`) or a field
/// with an operator token (`incidence_angle__gte`). Inserting an existing key
/// replaces its value and keeps its position.
///
/// The `Display` form joins `key` and value for every entry with `-` and is
/// used as the default identifier and export file name:
///
/// ```
/// use stacwiz::query::{QueryValue, SearchQuery};
///
/// let mut query = SearchQuery::new();
/// query.insert("a", "1");
/// query.insert("b", QueryValue::text_list(["x", "y"]));
/// assert_eq!(query.to_string(), "a1-bx|y");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery {
    filters: IndexMap<String, QueryValue>,
}

impl SearchQuery {
    /// Create an empty query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a descriptor, overwriting any previous value
    pub fn insert(&mut self, descriptor: impl Into<String>, value: impl Into<QueryValue>) {
        self.filters.insert(descriptor.into(), value.into());
    }

    /// Get the value stored for a descriptor
    #[must_use]
    pub fn get(&self, descriptor: &str) -> Option<&QueryValue> {
        self.filters.get(descriptor)
    }

    /// Whether a descriptor is present
    #[must_use]
    pub fn contains_key(&self, descriptor: &str) -> bool {
        self.filters.contains_key(descriptor)
    }

    /// Insert `limit` unless the query already has one
    pub fn ensure_limit(&mut self, default_limit: u32) {
        if !self.contains_key(LIMIT_KEY) {
            self.insert(LIMIT_KEY, i64::from(default_limit));
        }
    }

    /// Iterate descriptors in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of descriptors
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the query has no descriptors
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .filters
            .iter()
            .map(|(key, value)| format!("{key}{value}"))
            .collect::<Vec<_>>()
            .join("-");
        f.write_str(&joined)
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for SearchQuery {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            query.insert(key, value);
        }
        query
    }
}

/// Split a descriptor into field name and optional operator token
///
/// ```
/// use stacwiz::query::split_descriptor;
///
/// assert_eq!(split_descriptor("look_angle__gte"), ("look_angle", Some("gte")));
/// assert_eq!(split_descriptor("collect_id"), ("collect_id", None));
/// ```
#[must_use]
pub fn split_descriptor(descriptor: &str) -> (&str, Option<&str>) {
    match descriptor.rsplit_once(OPERATOR_SEPARATOR) {
        Some((field, op)) if !field.is_empty() && !op.is_empty() => (field, Some(op)),
        _ => (descriptor, None),
    }
}
