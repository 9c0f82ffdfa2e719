//! Request parameter mapping.
//!
//! [`Params`] is the untyped key/value mapping every endpoint accepts.
//! For GET and DELETE it becomes the query string, for POST and PUT the
//! JSON body.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{Error, Result};

/// A mapping of parameter names to JSON values.
///
/// # Example
///
/// ```
/// use taboola_rs::Params;
///
/// let params = Params::new()
///     .with("limit", 10)
///     .with("offset", 0);
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from any value that serializes to a JSON object.
    ///
    /// Fields skipped during serialization (e.g. `None` with
    /// `skip_serializing_if`) never appear in the result.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            other => Err(Error::Validation(format!(
                "parameters must serialize to an object, got {}",
                other
            ))),
        }
    }

    /// Add a parameter, consuming and returning the mapping.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a parameter, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a parameter.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` when `key` is set to a non-null value.
    pub fn has_value(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(v) if !v.is_null())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Flatten into query-string pairs.
    ///
    /// Nesting uses bracket keys: array items repeat `key[]`, object fields
    /// become `key[field]`. Nulls and empty arrays are dropped.
    pub(crate) fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            push_query_pairs(key.clone(), value, &mut pairs);
        }
        pairs
    }
}

fn push_query_pairs(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Array(items) => {
            let item_key = format!("{}[]", key);
            for item in items {
                push_query_pairs(item_key.clone(), item, pairs);
            }
        }
        Value::Object(fields) => {
            for (field, item) in fields {
                push_query_pairs(format!("{}[{}]", key, field), item, pairs);
            }
        }
        other => pairs.push((key, other.to_string())),
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_pairs() {
        let params = Params::new()
            .with("limit", 10)
            .with("active", true)
            .with("name", "spring sale")
            .with("missing", Value::Null);

        let pairs = params.to_query_pairs();
        assert!(pairs.contains(&("limit".into(), "10".into())));
        assert!(pairs.contains(&("active".into(), "true".into())));
        assert!(pairs.contains(&("name".into(), "spring sale".into())));
        assert!(!pairs.iter().any(|(k, _)| k == "missing"));
    }

    #[test]
    fn test_query_pairs_nest_with_brackets() {
        let params = Params::new()
            .with("status", json!(["RUNNING", "PAUSED"]))
            .with("filter", json!({"country": "US", "ids": [1, 2]}))
            .with("tags", json!([]));

        let mut pairs = params.to_query_pairs();
        pairs.sort();
        let mut expected: Vec<(String, String)> = [
            ("filter[country]", "US"),
            ("filter[ids][]", "1"),
            ("filter[ids][]", "2"),
            ("status[]", "RUNNING"),
            ("status[]", "PAUSED"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        expected.sort();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_has_value() {
        let params = Params::new().with("a", 1).with("b", Value::Null);
        assert!(params.has_value("a"));
        assert!(!params.has_value("b"));
        assert!(!params.has_value("c"));
    }

    #[test]
    fn test_from_serialize_rejects_scalars() {
        assert!(Params::from_serialize(&json!({"x": 1})).is_ok());
        assert!(Params::from_serialize(&42).is_err());
    }
}
