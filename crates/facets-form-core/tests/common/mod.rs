use facets_form_core::model::ChangeRecord;
use facets_form_core::widget::{FormInput, WidgetElement, CHECKBOX, DATE_RANGE, DROPDOWN};
use facets_form_core::ChangeNotifier;
use std::cell::RefCell;
use std::rc::Rc;

pub const SOURCE: &str = "search_api:views_page__search__page_1";

/// Checkbox group with `(value, checked)` boxes named `facet[value]`
#[allow(dead_code)]
pub fn checkbox_widget(facet: &str, boxes: &[(&str, bool)]) -> WidgetElement {
    boxes
        .iter()
        .fold(WidgetElement::new(CHECKBOX, facet), |element, (value, checked)| {
            element.with_input(FormInput::Checkbox {
                name: format!("{}[{}]", facet, value),
                checked: *checked,
            })
        })
}

/// Dropdown with `(value, selected)` options
#[allow(dead_code)]
pub fn dropdown_widget(facet: &str, options: &[(&str, bool)]) -> WidgetElement {
    options
        .iter()
        .fold(WidgetElement::new(DROPDOWN, facet), |element, (value, selected)| {
            element.with_input(FormInput::SelectOption {
                value: value.to_string(),
                label: value.to_string(),
                selected: *selected,
            })
        })
}

/// Date range widget with date inputs only
#[allow(dead_code)]
pub fn date_range_widget(facet: &str, from: &str, to: &str) -> WidgetElement {
    WidgetElement::new(DATE_RANGE, facet)
        .with_input(FormInput::Date {
            name: format!("{}[from][date]", facet),
            value: from.to_string(),
        })
        .with_input(FormInput::Date {
            name: format!("{}[to][date]", facet),
            value: to.to_string(),
        })
}

/// Record every event the notifier emits
#[allow(dead_code)]
pub fn record_events(notifier: &mut ChangeNotifier) -> Rc<RefCell<Vec<ChangeRecord>>> {
    let records = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&records);
    notifier.on_change(move |event| sink.borrow_mut().push(ChangeRecord::from(event)));
    records
}
