//! Page format v0 schema
//!
//! Defines the YAML structure of a page fixture

use crate::config::FacetsFormConfig;
use crate::core_types::attributes::ATTR_ANCESTORS;
use crate::model::FacetItem;
use crate::widget::render::{render_checkboxes, render_dropdown};
use crate::widget::{FormInput, InputChange, WidgetElement, CHECKBOX, DROPDOWN};
use serde::{Deserialize, Serialize};

/// Top-level page fixture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    pub form: PageForm,

    #[serde(default)]
    pub config: FacetsFormConfig,

    pub widgets: Vec<PageWidget>,

    /// User edits, replayed in order
    #[serde(default)]
    pub script: Vec<ScriptStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageForm {
    /// Facets source plugin id, e.g. `search_api:views_page__search__page_1`
    pub facets_source: String,
}

/// One widget of the form.
///
/// Checkbox and dropdown widgets are usually given as an item tree and
/// rendered; `inputs` are appended after the rendered controls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageWidget {
    pub facet: String,

    /// Widget kind tag
    pub widget: String,

    /// Position on the form; lighter widgets come first, ties keep file order
    #[serde(default)]
    pub weight: i32,

    #[serde(default)]
    pub items: Vec<FacetItem>,

    /// Dropdown only: single-value select with a placeholder option
    #[serde(default)]
    pub single: bool,

    /// Raw ancestor attribute, overriding the one rendered from `items`
    #[serde(default)]
    pub ancestors: Option<String>,

    #[serde(default)]
    pub inputs: Vec<FormInput>,
}

impl PageV0 {
    /// Widgets in form order.
    pub fn ordered_widgets(&self) -> Vec<&PageWidget> {
        let mut widgets: Vec<&PageWidget> = self.widgets.iter().collect();
        widgets.sort_by_key(|w| w.weight);
        widgets
    }
}

impl PageWidget {
    /// Element model of this widget as rendered in the page.
    pub fn to_element(&self) -> WidgetElement {
        let mut element = match self.widget.as_str() {
            CHECKBOX if !self.items.is_empty() => render_checkboxes(&self.facet, &self.items),
            DROPDOWN if !self.items.is_empty() => {
                render_dropdown(&self.facet, &self.items, self.single)
            }
            kind => WidgetElement::new(kind, &self.facet),
        };
        for input in &self.inputs {
            element = element.with_input(input.clone());
        }
        if let Some(ancestors) = &self.ancestors {
            element = element.with_attribute(ATTR_ANCESTORS, ancestors.clone());
        }
        element
    }
}

/// A user edit on one widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptStep {
    pub facet: String,
    pub change: InputChange,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::DATE_RANGE;

    #[test]
    fn test_parse_minimal_page() {
        let yaml = r#"
schema_version: 0
form:
  facets_source: search_api:views_page__search__page_1
widgets:
  - facet: tags
    widget: facets_form_checkbox
    items:
      - raw_value: 1
        label: Animals
        children:
          - raw_value: 1.1
            label: Cats
"#;
        let page: PageV0 = serde_yaml::from_str(yaml).unwrap();
        assert!(page.script.is_empty());
        assert!(page.config.trigger_widget_change_event);

        let element = page.widgets[0].to_element();
        assert_eq!(element.ancestors_attribute(), Some(r#"{"1.1":["1"]}"#));
        assert_eq!(element.inputs.len(), 2);
    }

    #[test]
    fn test_inputs_and_ancestor_override() {
        let widget = PageWidget {
            facet: "created".to_string(),
            widget: DATE_RANGE.to_string(),
            weight: 0,
            items: Vec::new(),
            single: false,
            ancestors: Some("[]".to_string()),
            inputs: vec![FormInput::Date {
                name: "created[from][date]".to_string(),
                value: "2021-08-16".to_string(),
            }],
        };
        let element = widget.to_element();
        assert_eq!(element.kind(), Some(DATE_RANGE));
        assert_eq!(element.date_input("created[from][date]"), Some("2021-08-16"));
        assert_eq!(element.ancestors_attribute(), Some("[]"));
    }

    #[test]
    fn test_widgets_ordered_by_weight_then_file_order() {
        let yaml = r#"
schema_version: 0
form:
  facets_source: search_api:views_page__search__page_1
widgets:
  - facet: created
    widget: facets_form_date_range
    weight: 5
  - facet: tags
    widget: facets_form_checkbox
  - facet: type
    widget: facets_form_dropdown
    weight: -1
  - facet: author
    widget: facets_form_checkbox
"#;
        let page: PageV0 = serde_yaml::from_str(yaml).unwrap();
        let order: Vec<_> = page.ordered_widgets().iter().map(|w| w.facet.as_str()).collect();
        assert_eq!(order, ["type", "tags", "author", "created"]);
    }

    #[test]
    fn test_script_step_shape() {
        let yaml = "facet: type\nchange:\n  action: select\n  value: article\n  selected: true\n";
        let step: ScriptStep = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            step.change,
            InputChange::Select {
                value: "article".to_string(),
                selected: true,
                exclusive: false,
            }
        );
    }
}
