//! Ancestor relation of hierarchical facets.
//!
//! A hierarchical facet (taxonomy terms, nested categories) renders its items
//! as a tree. Selecting a parent already includes every descendant in the
//! result set, so a change to a descendant while its ancestor is active cannot
//! move the result count. The map computed here is what the live total uses to
//! skip those refreshes.

use super::deserialize_scalar_string;
use super::filter_map::values_from_json;
use crate::errors::{FacetsFormError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Value → ancestor values. Only membership matters, not order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AncestorMap(BTreeMap<String, Vec<String>>);

impl AncestorMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record the ancestors of `value`. Empty lists are not stored.
    pub fn insert(&mut self, value: impl Into<String>, ancestors: Vec<String>) {
        if !ancestors.is_empty() {
            self.0.insert(value.into(), ancestors);
        }
    }

    pub fn ancestors_of(&self, value: &str) -> &[String] {
        self.0.get(value).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Parse the widget's JSON ancestor attribute.
    ///
    /// Accepts an object (`{"1.1": ["1"]}`) or a list, where list positions
    /// are the values (a PHP array with sequential keys encodes as a list).
    /// A blank attribute or `[]` yields an empty map.
    pub fn from_attribute(facet: &str, raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::new());
        }

        let parsed: Value =
            serde_json::from_str(raw).map_err(|e| FacetsFormError::InvalidAncestors {
                facet: facet.to_string(),
                reason: e.to_string(),
            })?;

        let mut map = Self::new();
        match parsed {
            Value::Object(entries) => {
                for (value, ancestors) in entries {
                    map.insert(value, values_from_json(&ancestors));
                }
            }
            Value::Array(entries) => {
                for (index, ancestors) in entries.iter().enumerate() {
                    map.insert(index.to_string(), values_from_json(ancestors));
                }
            }
            other => {
                return Err(FacetsFormError::InvalidAncestors {
                    facet: facet.to_string(),
                    reason: format!("expected an object or a list, got {}", other),
                })
            }
        }
        Ok(map)
    }

    /// Serialize for the widget attribute; `[]` when empty.
    pub fn to_attribute(&self) -> String {
        if self.0.is_empty() {
            return "[]".to_string();
        }
        serde_json::to_string(&self.0).unwrap_or_else(|_| "[]".to_string())
    }

    /// Build from a rendered item tree.
    pub fn from_items(items: &[FacetItem]) -> Self {
        let mut map = Self::new();
        for item in flatten_items(items) {
            map.insert(item.value, item.ancestors);
        }
        map
    }
}

/// One facet result as handed to a widget for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetItem {
    #[serde(deserialize_with = "deserialize_scalar_string")]
    pub raw_value: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub children: Vec<FacetItem>,
}

impl FacetItem {
    pub fn new(raw_value: impl Into<String>) -> Self {
        Self {
            raw_value: raw_value.into(),
            label: String::new(),
            active: false,
            children: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn with_children(mut self, children: Vec<FacetItem>) -> Self {
        self.children = children;
        self
    }
}

/// A tree item flattened for rendering as an indented option list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedItem {
    pub value: String,
    pub label: String,
    /// Zero-based nesting depth
    pub depth: usize,
    pub active: bool,
    /// Root-to-parent order
    pub ancestors: Vec<String>,
}

/// Depth-first flattening of an item tree.
///
/// A value repeated in the tree keeps its first position.
pub fn flatten_items(items: &[FacetItem]) -> Vec<ProcessedItem> {
    let mut processed = Vec::new();
    let mut path = Vec::new();
    walk(items, &mut path, &mut processed);
    processed
}

fn walk(items: &[FacetItem], path: &mut Vec<String>, out: &mut Vec<ProcessedItem>) {
    for item in items {
        if out.iter().any(|p| p.value == item.raw_value) {
            continue;
        }
        out.push(ProcessedItem {
            value: item.raw_value.clone(),
            label: if item.label.is_empty() {
                item.raw_value.clone()
            } else {
                item.label.clone()
            },
            depth: path.len(),
            active: item.active,
            ancestors: path.clone(),
        });
        if !item.children.is_empty() {
            path.push(item.raw_value.clone());
            walk(&item.children, path, out);
            path.pop();
        }
    }
}
