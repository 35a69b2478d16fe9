//! facets-form core - filter state tracking for faceted search forms
//!
//! A facets form renders search facets as form widgets that are submitted
//! together instead of refreshing on every click. This crate tracks what the
//! widgets currently select:
//! - FilterStore holding facet → active values and computing per-update diffs
//! - Widget adapters reading checkbox groups, dropdowns and date ranges
//! - ChangeNotifier seeding the store on attach and emitting change events
//! - Live total refresh gating for hierarchical facets
//!
//! Plus the server-side pieces the filter values cross: the `f[i]=facet:value`
//! query codec, date range intervals and their conditions, and the live total
//! request check.

pub use facets_form_core_types as core_types;

pub mod config;
pub mod date_range;
pub mod errors;
pub mod live_total;
pub mod logging_facility;
pub mod model;
pub mod notifier;
pub mod page;
pub mod query;
pub mod store;
pub mod widget;

// Re-export commonly used types
pub use config::FacetsFormConfig;
pub use date_range::{DateCondition, DateRange, DateType, RangeOperator};
pub use errors::{ExError, ExErrorKind, FacetsFormError, Result};
pub use live_total::{should_refresh, LiveTotal, LiveTotalRequest, RefreshFetcher};
pub use model::{AncestorMap, ChangeEvent, ChangeListener, ChangeRecord, Diff, FilterMap, WidgetRef};
pub use notifier::ChangeNotifier;
pub use store::FilterStore;
pub use widget::{WidgetAdapter, WidgetElement, WidgetRegistry};
