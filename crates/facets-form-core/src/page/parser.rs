//! Page parser with validation
//!
//! Parses YAML and validates schema version, widget kinds, facet uniqueness
//! and script references

use crate::errors::{FacetsFormError, Result};
use crate::model::AncestorMap;
use crate::page::format_v0::PageV0;
use crate::widget::WidgetRegistry;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a page fixture from a path
pub fn parse_page_file(path: &Path) -> Result<PageV0> {
    let content = fs::read_to_string(path).map_err(|e| FacetsFormError::Io {
        message: format!("Failed to read page file {}: {}", path.display(), e),
    })?;

    parse_page_str(&content)
}

/// Parse a page fixture from a string
pub fn parse_page_str(content: &str) -> Result<PageV0> {
    let page: PageV0 = serde_yaml::from_str(content).map_err(|e| FacetsFormError::InvalidPage {
        reason: format!("YAML parse error: {}", e),
    })?;

    validate_page(&page)?;

    Ok(page)
}

fn invalid(reason: String) -> FacetsFormError {
    FacetsFormError::InvalidPage { reason }
}

/// Validate a parsed page
fn validate_page(page: &PageV0) -> Result<()> {
    if page.schema_version != 0 {
        return Err(invalid(format!(
            "Unsupported schema_version: {}. Expected 0",
            page.schema_version
        )));
    }

    if page.form.facets_source.trim().is_empty() {
        return Err(invalid("form.facets_source must not be empty".to_string()));
    }

    page.config.validate()?;

    let registry = WidgetRegistry::from_config(&page.config);
    let mut facets = HashSet::new();
    for widget in &page.widgets {
        if widget.facet.trim().is_empty() {
            return Err(invalid(format!(
                "Widget '{}' has an empty facet",
                widget.widget
            )));
        }
        if !registry.contains(&widget.widget) {
            return Err(FacetsFormError::UnknownWidget {
                facet: widget.facet.clone(),
                widget: widget.widget.clone(),
            });
        }
        if !facets.insert(widget.facet.as_str()) {
            return Err(FacetsFormError::DuplicateFacet {
                facet: widget.facet.clone(),
            });
        }
        // Fixtures are strict even though attaching tolerates bad markup.
        if let Some(raw) = &widget.ancestors {
            AncestorMap::from_attribute(&widget.facet, raw)?;
        }
    }

    for (index, step) in page.script.iter().enumerate() {
        if !facets.contains(step.facet.as_str()) {
            return Err(invalid(format!(
                "Script step {} references unknown facet: {}",
                index, step.facet
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
schema_version: 0
form:
  facets_source: search_api:views_page__search__page_1
widgets:
  - facet: type
    widget: facets_form_dropdown
    single: true
    items:
      - raw_value: article
      - raw_value: page
script:
  - facet: type
    change:
      action: select
      value: page
      selected: true
      exclusive: true
"#;

    #[test]
    fn test_parse_valid_page() {
        let page = parse_page_str(VALID).unwrap();
        assert_eq!(page.widgets.len(), 1);
        assert_eq!(page.script.len(), 1);
    }

    #[test]
    fn test_reject_invalid_schema_version() {
        let err = parse_page_str(&VALID.replace("schema_version: 0", "schema_version: 3")).unwrap_err();
        assert!(err.to_string().contains("schema_version"));
    }

    #[test]
    fn test_reject_unknown_widget_kind() {
        let err = parse_page_str(&VALID.replace("facets_form_dropdown", "facets_form_slider")).unwrap_err();
        assert_eq!(
            err,
            FacetsFormError::UnknownWidget {
                facet: "type".to_string(),
                widget: "facets_form_slider".to_string(),
            }
        );
    }

    #[test]
    fn test_reject_duplicate_facet() {
        let yaml = r#"
schema_version: 0
form:
  facets_source: search_api:s
widgets:
  - facet: tags
    widget: facets_form_checkbox
  - facet: tags
    widget: facets_form_dropdown
"#;
        let err = parse_page_str(yaml).unwrap_err();
        assert!(matches!(err, FacetsFormError::DuplicateFacet { ref facet } if facet == "tags"));
    }

    #[test]
    fn test_reject_script_on_unknown_facet() {
        let err = parse_page_str(&VALID.replace("  - facet: type\n    change", "  - facet: tags\n    change"))
            .unwrap_err();
        assert!(err.to_string().contains("unknown facet: tags"));
    }

    #[test]
    fn test_reject_malformed_ancestors() {
        let yaml = r#"
schema_version: 0
form:
  facets_source: search_api:s
widgets:
  - facet: tags
    widget: facets_form_checkbox
    ancestors: "{broken"
"#;
        let err = parse_page_str(yaml).unwrap_err();
        assert!(matches!(err, FacetsFormError::InvalidAncestors { .. }));
    }

    #[test]
    fn test_reject_invalid_config() {
        let yaml = r#"
schema_version: 0
form:
  facets_source: search_api:s
config:
  date_range:
    delimiter: ""
widgets: []
"#;
        let err = parse_page_str(yaml).unwrap_err();
        assert!(matches!(err, FacetsFormError::InvalidConfig { .. }));
    }

    #[test]
    fn test_reject_blank_facets_source() {
        let err = parse_page_str(&VALID.replace("search_api:views_page__search__page_1", "\"\"")).unwrap_err();
        assert!(err.to_string().contains("facets_source"));
    }
}
