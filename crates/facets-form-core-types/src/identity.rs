//! Identity of a single attached facets form
//!
//! Every form on a page owns its own filter store. The id lets log lines and
//! emitted events be traced back to the form instance that produced them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one attached form instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormInstanceId(String);

impl FormInstanceId {
    /// Generate a new FormInstanceId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (fixtures, replays)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for FormInstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FormInstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
