use crate::core_types::attributes::QUERY_FACETS_SOURCE;
use crate::model::FilterMap;
use crate::query;

/// `<base_path><route>?facets_source=<source>&f[0]=facet:value&...`
///
/// A missing slash between base path and route is inserted.
pub fn build_url(base_path: &str, route: &str, facets_source: &str, filters: &FilterMap) -> String {
    let mut url = base_path.to_string();
    if !url.ends_with('/') {
        url.push('/');
    }
    url.push_str(route.trim_start_matches('/'));
    url.push('?');
    url.push_str(QUERY_FACETS_SOURCE);
    url.push('=');
    url.push_str(facets_source);

    let filter_query = query::to_query_string(filters);
    if !filter_query.is_empty() {
        url.push('&');
        url.push_str(&filter_query);
    }
    url
}
