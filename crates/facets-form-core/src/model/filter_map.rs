//! Active filter state and per-facet diffs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Facet id → ordered, duplicate-free list of active values.
///
/// A facet with no active value has no entry at all; the map never holds an
/// empty list. Facets iterate in id order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterMap(BTreeMap<String, Vec<String>>);

impl FilterMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Active values of `facet`, empty when the facet is inactive.
    pub fn get(&self, facet: &str) -> &[String] {
        self.0.get(facet).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_facet(&self, facet: &str) -> bool {
        self.0.contains_key(facet)
    }

    pub fn is_active(&self, facet: &str, value: &str) -> bool {
        self.get(facet).iter().any(|v| v == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn facets(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of active facets.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of active values across all facets.
    pub fn value_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Replace the values of `facet`, returning the previous list.
    ///
    /// `values` must already be normalized; an empty list removes the entry.
    pub(crate) fn replace(&mut self, facet: &str, values: Vec<String>) -> Vec<String> {
        let previous = if values.is_empty() {
            self.0.remove(facet)
        } else {
            self.0.insert(facet.to_string(), values)
        };
        previous.unwrap_or_default()
    }

    /// Append one value to `facet`, ignoring empty and repeated values.
    pub(crate) fn push_value(&mut self, facet: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        let values = self.0.entry(facet.to_string()).or_default();
        if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }
}

impl<K, I, S> FromIterator<(K, I)> for FilterMap
where
    K: Into<String>,
    I: IntoIterator<Item = S>,
    S: ToString,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut map = FilterMap::new();
        for (facet, values) in iter {
            let facet = facet.into();
            let values = normalize_values(values);
            let mut merged = map.get(&facet).to_vec();
            for value in values {
                if !merged.contains(&value) {
                    merged.push(value);
                }
            }
            map.replace(&facet, merged);
        }
        map
    }
}

/// Values added and removed for one facet by a single update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl Diff {
    /// `added = values − existing`, `removed = existing − values`, each in the
    /// order of its source list.
    pub fn between(existing: &[String], values: &[String]) -> Self {
        Self {
            added: values
                .iter()
                .filter(|v| !existing.contains(*v))
                .cloned()
                .collect(),
            removed: existing
                .iter()
                .filter(|v| !values.contains(*v))
                .cloned()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Every changed value, added first.
    pub fn changed(&self) -> impl Iterator<Item = &str> {
        self.added
            .iter()
            .chain(self.removed.iter())
            .map(String::as_str)
    }
}

/// Coerce raw values to strings, dropping empty and repeated entries.
///
/// An empty string is the "no filter for this facet" value of a form
/// control, so it never reaches the store.
pub fn normalize_values<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: ToString,
{
    let mut normalized: Vec<String> = Vec::new();
    for value in values {
        let value = value.to_string();
        if !value.is_empty() && !normalized.contains(&value) {
            normalized.push(value);
        }
    }
    normalized
}

/// Coerce an arbitrary JSON value into a value list.
///
/// `null` → `[]`, arrays element-wise, any other scalar → one element.
pub fn values_from_json(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => normalize_values(items.iter().filter_map(scalar_text)),
        other => normalize_values(scalar_text(other)),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
