//! DOM attribute contract between the rendered form markup and the tracker.

/// Set on the `<form>`; value is the facets source id.
pub const ATTR_FORM: &str = "data-drupal-facets-form";

/// Set on the `<form>` when the live total is enabled for it.
pub const ATTR_LIVE_TOTAL: &str = "data-drupal-facets-form-live-total";

/// Set on each widget root; value is the widget kind tag.
pub const ATTR_WIDGET: &str = "data-drupal-facets-form-widget";

/// Set on each widget root; value is the facet id.
pub const ATTR_FACET: &str = "data-drupal-facets-form-facet";

/// Optional on a widget root; JSON object mapping a value to its ancestors.
pub const ATTR_ANCESTORS: &str = "data-drupal-facets-form-ancestors";

/// Name of the bubbling event dispatched on the form after a state change.
pub const CHANGE_EVENT: &str = "facets_form";

// Native DOM signals the widgets listen to
pub const DOM_EVENT_INPUT: &str = "input";
pub const DOM_EVENT_CHANGE: &str = "change";

/// Query parameter carrying the facets source id on live-total requests.
pub const QUERY_FACETS_SOURCE: &str = "facets_source";

/// Query parameter (array) carrying `facet:value` filters.
pub const QUERY_FILTER: &str = "f";
