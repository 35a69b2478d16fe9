//! Core types shared across the facets-form crates
//!
//! - **Identity**: FormInstanceId, one per attached form
//! - **Attributes**: the DOM attribute contract read from page markup
//! - **Schema constants**: canonical logging field keys and event names

pub mod attributes;
pub mod identity;
pub mod schema;

pub use identity::FormInstanceId;
