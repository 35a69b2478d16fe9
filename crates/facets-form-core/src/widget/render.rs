//! Server-side rendering of widgets from facet result trees.
//!
//! Produces the element model a browser would hold after the form is built:
//! one checkbox per item for checkbox groups, one option per item for
//! dropdowns, active items pre-selected.

use super::element::{FormInput, WidgetElement};
use super::{CHECKBOX, DROPDOWN};
use crate::core_types::attributes::ATTR_ANCESTORS;
use crate::model::{flatten_items, AncestorMap, FacetItem};

/// Label of the empty option of single-value dropdowns
pub const DEFAULT_OPTION_LABEL: &str = "Choose";
/// Repeated once per depth level in front of nested dropdown labels
pub const CHILD_ITEMS_PREFIX: &str = "-";

/// Checkbox group carrying the ancestor attribute of its tree.
pub fn render_checkboxes(facet: &str, items: &[FacetItem]) -> WidgetElement {
    let processed = flatten_items(items);
    let ancestors = AncestorMap::from_items(items);

    processed.into_iter().fold(
        WidgetElement::new(CHECKBOX, facet).with_attribute(ATTR_ANCESTORS, ancestors.to_attribute()),
        |element, item| {
            element.with_input(FormInput::Checkbox {
                name: format!("{}[{}]", facet, item.value),
                checked: item.active,
            })
        },
    )
}

/// Dropdown; `single` adds the empty placeholder option first.
pub fn render_dropdown(facet: &str, items: &[FacetItem], single: bool) -> WidgetElement {
    let mut element = WidgetElement::new(DROPDOWN, facet);
    if single {
        element = element.with_input(FormInput::SelectOption {
            value: String::new(),
            label: DEFAULT_OPTION_LABEL.to_string(),
            selected: false,
        });
    }
    for item in flatten_items(items) {
        element = element.with_input(FormInput::SelectOption {
            label: format!("{}{}", CHILD_ITEMS_PREFIX.repeat(item.depth), item.label),
            value: item.value,
            selected: item.active,
        });
    }
    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{CheckboxAdapter, DropdownAdapter, WidgetAdapter};

    fn tree() -> Vec<FacetItem> {
        vec![
            FacetItem::new("1")
                .with_label("Animals")
                .with_children(vec![FacetItem::new("1.1").with_label("Cats").active()]),
            FacetItem::new("2").with_label("Plants"),
        ]
    }

    #[test]
    fn test_checkboxes_carry_names_and_ancestors() {
        let element = render_checkboxes("tags", &tree());
        assert_eq!(element.ancestors_attribute(), Some(r#"{"1.1":["1"]}"#));
        assert_eq!(element.inputs.len(), 3);
        assert_eq!(CheckboxAdapter.extract(&element), ["1.1"]);
    }

    #[test]
    fn test_flat_tree_renders_empty_ancestors() {
        let element = render_checkboxes("type", &[FacetItem::new("article")]);
        assert_eq!(element.ancestors_attribute(), Some("[]"));
    }

    #[test]
    fn test_single_dropdown_prefixes_placeholder_and_indents() {
        let element = render_dropdown("tags", &tree(), true);
        let labels: Vec<_> = element
            .inputs
            .iter()
            .filter_map(|input| match input {
                FormInput::SelectOption { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, ["Choose", "Animals", "-Cats", "Plants"]);
        assert_eq!(DropdownAdapter.extract(&element), ["1.1"]);
    }
}
