use super::gate::should_refresh;
use super::url::build_url;
use super::DEFAULT_ROUTE;
use crate::model::{ChangeEvent, ChangeListener};

/// Outbound side of a live total refresh.
///
/// Receives the URL to GET; handling the response is the fetcher's business.
pub trait RefreshFetcher {
    fn fetch(&mut self, url: &str);
}

impl<F> RefreshFetcher for F
where
    F: FnMut(&str),
{
    fn fetch(&mut self, url: &str) {
        self(url)
    }
}

/// Change listener refreshing the result count when the gate allows it.
#[derive(Debug)]
pub struct LiveTotal<F> {
    base_path: String,
    route: String,
    fetcher: F,
}

impl<F: RefreshFetcher> LiveTotal<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            base_path: "/".to_string(),
            route: DEFAULT_ROUTE.to_string(),
            fetcher,
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

impl<F: RefreshFetcher> ChangeListener for LiveTotal<F> {
    fn on_change(&mut self, event: &ChangeEvent<'_>) {
        let facet = event.widget.facet.as_str();
        if !should_refresh(event.diff, event.widget.ancestors.as_ref(), event.filters, facet) {
            tracing::debug!(facet, "live total unchanged, refresh skipped");
            return;
        }
        let url = build_url(&self.base_path, &self.route, event.facets_source, event.filters);
        tracing::debug!(facet, url = %url, "live total refresh");
        self.fetcher.fetch(&url);
    }
}
