pub mod ancestors;
pub mod event;
pub mod filter_map;

pub use ancestors::{flatten_items, AncestorMap, FacetItem, ProcessedItem};
pub use event::{ChangeEvent, ChangeListener, ChangeRecord, WidgetRef};
pub use filter_map::{normalize_values, values_from_json, Diff, FilterMap};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a string, number or bool and keep its textual form.
///
/// Facet values are strings on the wire, but fixtures routinely write term
/// ids as bare numbers.
pub(crate) fn deserialize_scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a scalar value, got {}",
            other
        ))),
    }
}
