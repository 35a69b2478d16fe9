//! Change events emitted by the filter store.

use super::ancestors::AncestorMap;
use super::filter_map::{Diff, FilterMap};
use serde::Serialize;

/// The widget an event originates from, as seen by event consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetRef {
    pub facet: String,
    /// Widget kind tag, e.g. `facets_form_checkbox`
    pub kind: String,
    /// Declared ancestor relation; `None` when the widget declares none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ancestors: Option<AncestorMap>,
}

impl WidgetRef {
    pub fn new(facet: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            facet: facet.into(),
            kind: kind.into(),
            ancestors: None,
        }
    }

    /// Attach an ancestor map; an empty map counts as no declaration.
    pub fn with_ancestors(mut self, ancestors: AncestorMap) -> Self {
        self.ancestors = (!ancestors.is_empty()).then_some(ancestors);
        self
    }
}

/// One state transition, borrowed from the store at dispatch time.
///
/// `filters` is the map as it is right after the update.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent<'a> {
    pub facets_source: &'a str,
    pub filters: &'a FilterMap,
    pub widget: &'a WidgetRef,
    pub diff: &'a Diff,
}

/// Owned copy of a [`ChangeEvent`], for listeners that keep history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    pub facets_source: String,
    pub filters: FilterMap,
    pub widget: WidgetRef,
    pub diff: Diff,
}

impl From<&ChangeEvent<'_>> for ChangeRecord {
    fn from(event: &ChangeEvent<'_>) -> Self {
        Self {
            facets_source: event.facets_source.to_string(),
            filters: event.filters.clone(),
            widget: event.widget.clone(),
            diff: event.diff.clone(),
        }
    }
}

/// Observer of the form's change events.
///
/// Invoked synchronously, in subscription order, on the caller's stack.
pub trait ChangeListener {
    fn on_change(&mut self, event: &ChangeEvent<'_>);
}

pub(crate) struct FnListener<F>(pub(crate) F);

impl<F> ChangeListener for FnListener<F>
where
    F: FnMut(&ChangeEvent<'_>),
{
    fn on_change(&mut self, event: &ChangeEvent<'_>) {
        (self.0)(event)
    }
}
