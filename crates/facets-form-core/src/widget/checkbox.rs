use super::element::{FormInput, WidgetElement};
use super::{WidgetAdapter, CHECKBOX};
use crate::core_types::attributes::DOM_EVENT_INPUT;

/// Checkbox group: one checkbox per facet value, named `facet[value]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckboxAdapter;

impl WidgetAdapter for CheckboxAdapter {
    fn kind(&self) -> &'static str {
        CHECKBOX
    }

    fn change_event_name(&self) -> &'static str {
        DOM_EVENT_INPUT
    }

    fn extract(&self, widget: &WidgetElement) -> Vec<String> {
        let Some(facet) = widget.facet() else {
            return Vec::new();
        };
        widget
            .inputs
            .iter()
            .filter_map(|input| match input {
                FormInput::Checkbox {
                    name,
                    checked: true,
                } => unwrap_name(facet, name),
                _ => None,
            })
            .map(str::to_string)
            .collect()
    }
}

/// `tags[123]` → `123`, for facet `tags`.
fn unwrap_name<'a>(facet: &str, name: &'a str) -> Option<&'a str> {
    name.strip_prefix(facet)?
        .strip_prefix('[')?
        .strip_suffix(']')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkbox(name: &str, checked: bool) -> FormInput {
        FormInput::Checkbox {
            name: name.to_string(),
            checked,
        }
    }

    #[test]
    fn test_extracts_checked_values_in_document_order() {
        let widget = WidgetElement::new(CHECKBOX, "tags")
            .with_input(checkbox("tags[12]", true))
            .with_input(checkbox("tags[20]", false))
            .with_input(checkbox("tags[34]", true));
        assert_eq!(CheckboxAdapter.extract(&widget), ["12", "34"]);
    }

    #[test]
    fn test_skips_names_of_other_facets() {
        let widget = WidgetElement::new(CHECKBOX, "tags")
            .with_input(checkbox("tags_extra[1]", true))
            .with_input(checkbox("type[page]", true))
            .with_input(checkbox("tags", true))
            .with_input(checkbox("tags[a[b]]", true));
        assert_eq!(CheckboxAdapter.extract(&widget), ["a[b]"]);
    }

    #[test]
    fn test_widget_without_facet_extracts_nothing() {
        let widget = WidgetElement::default().with_input(checkbox("tags[12]", true));
        assert!(CheckboxAdapter.extract(&widget).is_empty());
    }
}
