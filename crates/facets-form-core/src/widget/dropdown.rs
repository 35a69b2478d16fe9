use super::element::{FormInput, WidgetElement};
use super::{WidgetAdapter, DROPDOWN};
use crate::core_types::attributes::DOM_EVENT_CHANGE;

/// Single or multiple select. The "Choose" placeholder option carries an
/// empty value, which the store drops.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropdownAdapter;

impl WidgetAdapter for DropdownAdapter {
    fn kind(&self) -> &'static str {
        DROPDOWN
    }

    fn change_event_name(&self) -> &'static str {
        DOM_EVENT_CHANGE
    }

    fn extract(&self, widget: &WidgetElement) -> Vec<String> {
        if widget.facet().is_none() {
            return Vec::new();
        }
        widget
            .inputs
            .iter()
            .filter_map(|input| match input {
                FormInput::SelectOption {
                    value,
                    selected: true,
                    ..
                } => Some(value.clone()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(value: &str, selected: bool) -> FormInput {
        FormInput::SelectOption {
            value: value.to_string(),
            label: value.to_string(),
            selected,
        }
    }

    #[test]
    fn test_extracts_selected_options() {
        let widget = WidgetElement::new(DROPDOWN, "type")
            .with_input(option("", false))
            .with_input(option("article", true))
            .with_input(option("page", true))
            .with_input(option("event", false));
        assert_eq!(DropdownAdapter.extract(&widget), ["article", "page"]);
    }

    #[test]
    fn test_selected_placeholder_extracts_empty_value() {
        let widget = WidgetElement::new(DROPDOWN, "type")
            .with_input(option("", true))
            .with_input(option("article", false));
        assert_eq!(DropdownAdapter.extract(&widget), [""]);
    }
}
