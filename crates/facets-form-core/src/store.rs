//! Per-form filter store.
//!
//! One store exists per attached form. It owns the [`FilterMap`], computes the
//! diff of each update and delivers change events to its listeners.

use crate::model::event::FnListener;
use crate::model::{normalize_values, ChangeEvent, ChangeListener, Diff, FilterMap, WidgetRef};

/// Filter state of a single form instance
///
/// Single-threaded: every update happens inside one event handler.
pub struct FilterStore {
    facets_source: String,
    filters: FilterMap,
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl FilterStore {
    pub fn new(facets_source: impl Into<String>) -> Self {
        Self {
            facets_source: facets_source.into(),
            filters: FilterMap::new(),
            listeners: Vec::new(),
        }
    }

    pub fn facets_source(&self) -> &str {
        &self.facets_source
    }

    /// All active filters
    pub fn all(&self) -> &FilterMap {
        &self.filters
    }

    /// Register a listener for emitted change events.
    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: ChangeListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Register a closure for emitted change events.
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: FnMut(&ChangeEvent<'_>) + 'static,
    {
        self.subscribe(FnListener(callback));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Store the active values of `facet` and return what changed.
    ///
    /// Values are coerced to strings and empty or repeated ones dropped. An
    /// empty result removes the facet. With `emit`, every listener receives
    /// the event before this returns, seeing the updated map.
    pub fn set_filters<I, S>(&mut self, facet: &str, values: I, widget: &WidgetRef, emit: bool) -> Diff
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let values = normalize_values(values);
        let diff = Diff::between(self.filters.get(facet), &values);
        self.filters.replace(facet, values);

        tracing::debug!(
            facets_source = %self.facets_source,
            facet,
            added_len = diff.added.len(),
            removed_len = diff.removed.len(),
            emit,
            "filters updated"
        );

        if emit {
            let event = ChangeEvent {
                facets_source: &self.facets_source,
                filters: &self.filters,
                widget,
                diff: &diff,
            };
            for listener in self.listeners.iter_mut() {
                listener.on_change(&event);
            }
        }

        diff
    }
}

impl std::fmt::Debug for FilterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterStore")
            .field("facets_source", &self.facets_source)
            .field("filters", &self.filters)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn widget() -> WidgetRef {
        WidgetRef::new("tags", "facets_form_checkbox")
    }

    #[test]
    fn test_set_filters_computes_diff_against_facet_only() {
        let mut store = FilterStore::new("search_api:test");
        store.set_filters("type", ["article"], &WidgetRef::new("type", "facets_form_dropdown"), false);
        store.set_filters("tags", ["1", "2"], &widget(), false);

        let diff = store.set_filters("tags", ["2", "3"], &widget(), false);
        assert_eq!(diff.added, ["3"]);
        assert_eq!(diff.removed, ["1"]);
        assert_eq!(store.all().get("type"), ["article".to_string()]);
    }

    #[test]
    fn test_emptying_a_facet_deletes_it() {
        let mut store = FilterStore::new("search_api:test");
        store.set_filters("tags", ["1"], &widget(), false);
        let diff = store.set_filters("tags", [""], &widget(), false);

        assert_eq!(diff.removed, ["1"]);
        assert!(!store.all().contains_facet("tags"));
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_listeners_only_run_when_emitting() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = FilterStore::new("search_api:test");
        let sink = Rc::clone(&seen);
        store.on_change(move |event| {
            sink.borrow_mut()
                .push(event.filters.get("tags").to_vec());
        });

        store.set_filters("tags", ["1"], &widget(), false);
        assert!(seen.borrow().is_empty());

        store.set_filters("tags", ["1", "2"], &widget(), true);
        assert_eq!(seen.borrow().as_slice(), [vec!["1".to_string(), "2".to_string()]]);
    }

    #[test]
    fn test_numbers_are_compared_as_strings() {
        let mut store = FilterStore::new("search_api:test");
        store.set_filters("tags", [12, 34], &widget(), false);
        let diff = store.set_filters("tags", ["12", "34"], &widget(), false);
        assert!(diff.is_empty());
    }
}
