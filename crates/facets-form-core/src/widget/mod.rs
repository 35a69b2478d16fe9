//! Widget adapters and their registry
//!
//! A [`WidgetAdapter`] knows how to read the current selection out of one kind
//! of rendered widget and which DOM event signals that the selection changed.
//! Adapters are looked up by the widget-kind attribute through a
//! [`WidgetRegistry`], once, when a form is attached.

pub mod checkbox;
pub mod date_range;
pub mod dropdown;
pub mod element;
pub mod render;

pub use checkbox::CheckboxAdapter;
pub use date_range::DateRangeAdapter;
pub use dropdown::DropdownAdapter;
pub use element::{FormInput, InputChange, WidgetElement};

use crate::config::FacetsFormConfig;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Widget kind tag of the checkbox group widget
pub const CHECKBOX: &str = "facets_form_checkbox";
/// Widget kind tag of the dropdown / multi-select widget
pub const DROPDOWN: &str = "facets_form_dropdown";
/// Widget kind tag of the date range widget
pub const DATE_RANGE: &str = "facets_form_date_range";

/// Capability interface of a widget kind
///
/// Implementations are stateless readers; they never fail. Missing structure
/// yields an empty value list.
pub trait WidgetAdapter: Send + Sync {
    /// Widget kind tag this adapter handles
    fn kind(&self) -> &'static str;

    /// DOM event that triggers re-extraction
    fn change_event_name(&self) -> &'static str;

    /// Current raw values of the widget, unnormalized
    fn extract(&self, widget: &WidgetElement) -> Vec<String>;
}

/// Widget kind tag → adapter
#[derive(Clone)]
pub struct WidgetRegistry {
    adapters: BTreeMap<String, Arc<dyn WidgetAdapter>>,
}

impl WidgetRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            adapters: BTreeMap::new(),
        }
    }

    /// Registry with the built-in adapters, the date range one using the
    /// configured delimiter.
    pub fn from_config(config: &FacetsFormConfig) -> Self {
        let mut registry = Self::new();
        registry.register(CheckboxAdapter);
        registry.register(DropdownAdapter);
        registry.register(DateRangeAdapter::new(config.date_range.delimiter.clone()));
        registry
    }

    /// Register an adapter under its kind tag, replacing any previous one.
    pub fn register<A>(&mut self, adapter: A)
    where
        A: WidgetAdapter + 'static,
    {
        self.adapters
            .insert(adapter.kind().to_string(), Arc::new(adapter));
    }

    pub fn resolve(&self, kind: &str) -> Option<Arc<dyn WidgetAdapter>> {
        self.adapters.get(kind).cloned()
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.adapters.contains_key(kind)
    }

    /// Registered kind tags, sorted
    pub fn kinds(&self) -> Vec<&str> {
        self.adapters.keys().map(String::as_str).collect()
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::from_config(&FacetsFormConfig::default())
    }
}

impl std::fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_knows_builtin_kinds() {
        let registry = WidgetRegistry::default();
        assert_eq!(registry.kinds(), [CHECKBOX, DATE_RANGE, DROPDOWN]);
        assert!(registry.resolve("facets_form_slider").is_none());
    }

    #[test]
    fn test_change_event_per_kind() {
        let registry = WidgetRegistry::default();
        let event = |kind: &str| registry.resolve(kind).map(|a| a.change_event_name());
        assert_eq!(event(CHECKBOX), Some("input"));
        assert_eq!(event(DROPDOWN), Some("change"));
        assert_eq!(event(DATE_RANGE), Some("change"));
    }

    #[test]
    fn test_register_replaces_existing_kind() {
        let mut config = FacetsFormConfig::default();
        config.date_range.delimiter = "--".to_string();
        let mut registry = WidgetRegistry::default();
        registry.register(DateRangeAdapter::new("--"));

        let element = WidgetElement::new(DATE_RANGE, "created").with_input(FormInput::Date {
            name: "created[from][date]".to_string(),
            value: "2021-08-16".to_string(),
        });
        let from_config = WidgetRegistry::from_config(&config);
        for registry in [registry, from_config] {
            let adapter = registry.resolve(DATE_RANGE).unwrap();
            assert_eq!(adapter.extract(&element), ["2021-08-16--"]);
        }
    }
}
