//! Form configuration.
//!
//! Every field has a default, so an empty YAML document is a valid config.
//! Configs are embedded in page fixtures or loaded from their own file.

use crate::date_range::{self, DEFAULT_DELIMITER, DEFAULT_SUMMARY_FORMAT};
use crate::errors::{FacetsFormError, Result};
use crate::live_total;
use crate::model::FilterMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetsFormConfig {
    /// Emit change events from widget edits. With `false` the store still
    /// tracks state but nothing is dispatched to listeners.
    pub trigger_widget_change_event: bool,
    /// Facets the form is limited to; empty means every facet of the source
    pub facets: Vec<String>,
    pub date_range: DateRangeConfig,
    pub live_total: LiveTotalConfig,
}

impl Default for FacetsFormConfig {
    fn default() -> Self {
        Self {
            trigger_widget_change_event: true,
            facets: Vec::new(),
            date_range: DateRangeConfig::default(),
            live_total: LiveTotalConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRangeConfig {
    /// Separator of the two sides of an interval string
    pub delimiter: String,
    /// chrono format of dates in range summaries
    pub summary_format: String,
}

impl Default for DateRangeConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            summary_format: DEFAULT_SUMMARY_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveTotalConfig {
    /// Whether the form opts into live total refreshes
    pub enabled: bool,
    /// Site base path, with trailing slash
    pub base_path: String,
    pub route: String,
}

impl Default for LiveTotalConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_path: "/".to_string(),
            route: live_total::DEFAULT_ROUTE.to_string(),
        }
    }
}

impl LiveTotalConfig {
    /// Refresh URL for the given filter state.
    pub fn url_for(&self, facets_source: &str, filters: &FilterMap) -> String {
        live_total::build_url(&self.base_path, &self.route, facets_source, filters)
    }
}

impl DateRangeConfig {
    /// Summary of a date-range filter value, `None` when it does not parse.
    pub fn summarize(&self, value: &str) -> Option<String> {
        date_range::DateRange::parse(value, &self.delimiter)
            .and_then(|range| range.summary(&self.summary_format))
            .ok()
    }
}

impl FacetsFormConfig {
    /// Whether widgets of `facet` belong on the form.
    pub fn allows_facet(&self, facet: &str) -> bool {
        self.facets.is_empty() || self.facets.iter().any(|f| f == facet)
    }

    /// Parse and validate a YAML config document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// # Errors
    ///
    /// `InvalidConfig` for an empty delimiter or route, or a summary format
    /// chrono cannot render.
    pub fn validate(&self) -> Result<()> {
        if self.date_range.delimiter.is_empty() {
            return Err(FacetsFormError::InvalidConfig {
                reason: "date_range.delimiter must not be empty".to_string(),
            });
        }
        if self.date_range.summary_format.is_empty() {
            return Err(FacetsFormError::InvalidConfig {
                reason: "date_range.summary_format must not be empty".to_string(),
            });
        }
        if let Err(err) = date_range::summary_items(&self.date_range.summary_format) {
            return Err(FacetsFormError::InvalidConfig {
                reason: format!("date_range.summary_format: {}", err),
            });
        }
        if self.live_total.route.trim_matches('/').is_empty() {
            return Err(FacetsFormError::InvalidConfig {
                reason: "live_total.route must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
