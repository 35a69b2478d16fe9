pub mod date_range;
pub mod live_total;
pub mod query;
pub mod replay;

use facets_form_core::model::FilterMap;
use facets_form_core::query as facet_query;

/// Build a filter map from `facet:value` arguments.
pub(crate) fn filters_from_args(filters: &[String]) -> FilterMap {
    facet_query::decode(filters.iter().map(|f| ("f", f.as_str())))
}
