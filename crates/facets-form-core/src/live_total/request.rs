use super::SUPPORTED_BASE_PLUGIN;
use crate::core_types::attributes::QUERY_FACETS_SOURCE;
use crate::errors::{FacetsFormError, Result};
use crate::model::FilterMap;
use crate::query;
use url::form_urlencoded;

/// Parsed live total request, past the access check.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveTotalRequest {
    pub facets_source: String,
    pub filters: FilterMap,
}

impl LiveTotalRequest {
    /// Parse the query string of a live total request.
    ///
    /// # Errors
    ///
    /// `InvalidFacetsSource` when `facets_source` is missing or blank,
    /// `UnsupportedFacetsSource` when its base plugin is not Search API.
    pub fn from_query(query: &str) -> Result<Self> {
        let query = query.trim_start_matches('?');
        let facets_source = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == QUERY_FACETS_SOURCE)
            .map(|(_, value)| value.trim().to_string())
            .unwrap_or_default();

        if facets_source.is_empty() {
            return Err(FacetsFormError::InvalidFacetsSource { facets_source });
        }
        if base_plugin_id(&facets_source) != SUPPORTED_BASE_PLUGIN {
            return Err(FacetsFormError::UnsupportedFacetsSource { facets_source });
        }

        Ok(Self {
            filters: query::decode_query(query),
            facets_source,
        })
    }

    /// Parse a full or site-relative URL; only its query part matters.
    pub fn from_url(url: &str) -> Result<Self> {
        let without_fragment = url.split('#').next().unwrap_or_default();
        let query = without_fragment
            .split_once('?')
            .map(|(_, query)| query)
            .unwrap_or_default();
        Self::from_query(query)
    }

    pub fn base_plugin_id(&self) -> &str {
        base_plugin_id(&self.facets_source)
    }
}

/// Text before the first `:` of a facets source id.
fn base_plugin_id(facets_source: &str) -> &str {
    facets_source
        .split_once(':')
        .map_or(facets_source, |(base, _)| base)
}
