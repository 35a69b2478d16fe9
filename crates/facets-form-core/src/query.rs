//! Facet query string codec.
//!
//! Active filters travel as a query array: `f[0]=tags:12&f[1]=type:article`.
//! Numbering runs across facets, facets in map order, values in stored order.

use crate::core_types::attributes::QUERY_FILTER;
use crate::model::FilterMap;
use url::form_urlencoded;

/// `(key, value)` pairs for every active filter.
pub fn encode(filters: &FilterMap) -> Vec<(String, String)> {
    filters
        .iter()
        .flat_map(|(facet, values)| values.iter().map(move |value| (facet, value)))
        .enumerate()
        .map(|(index, (facet, value))| {
            (
                format!("{}[{}]", QUERY_FILTER, index),
                format!("{}:{}", facet, value),
            )
        })
        .collect()
}

/// Joined `key=value` pairs.
///
/// Not percent-encoded: widget values are produced URL-ready (a date range
/// offset's `+` already arrives as `%2B`).
pub fn to_query_string(filters: &FilterMap) -> String {
    encode(filters)
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Whether a decoded query key is part of the filter array.
pub fn is_filter_key(key: &str) -> bool {
    key == QUERY_FILTER
        || key
            .strip_prefix(QUERY_FILTER)
            .is_some_and(|rest| rest.starts_with('[') && rest.ends_with(']'))
}

/// Rebuild a filter map from decoded query pairs.
///
/// Non-filter keys are ignored. Filter values without a `facet:` prefix are
/// skipped.
pub fn decode<I, K, V>(pairs: I) -> FilterMap
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut filters = FilterMap::new();
    for (key, value) in pairs {
        if !is_filter_key(key.as_ref()) {
            continue;
        }
        match value.as_ref().split_once(':') {
            Some((facet, value)) if !facet.is_empty() => filters.push_value(facet, value),
            _ => tracing::debug!(value = value.as_ref(), "skipping malformed filter"),
        }
    }
    filters
}

/// Percent-decode a raw query string and rebuild its filter map.
pub fn decode_query(query: &str) -> FilterMap {
    decode(form_urlencoded::parse(query.trim_start_matches('?').as_bytes()))
}

/// Drop every filter parameter, keeping the rest verbatim and in order.
pub fn strip_filters(query: &str) -> String {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter(|segment| {
            form_urlencoded::parse(segment.as_bytes())
                .next()
                .map_or(true, |(key, _)| !is_filter_key(&key))
        })
        .collect::<Vec<_>>()
        .join("&")
}
