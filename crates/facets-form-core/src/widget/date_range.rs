use super::element::WidgetElement;
use super::{WidgetAdapter, DATE_RANGE};
use crate::core_types::attributes::DOM_EVENT_CHANGE;
use crate::date_range::DEFAULT_DELIMITER;

const SIDES: [&str; 2] = ["from", "to"];

/// Two date inputs (`facet[from][date]`, `facet[to][date]`), each with an
/// optional time input carrying its UTC offset.
#[derive(Debug, Clone)]
pub struct DateRangeAdapter {
    delimiter: String,
}

impl DateRangeAdapter {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    fn side(&self, widget: &WidgetElement, facet: &str, side: &str) -> String {
        let mut limit = widget
            .date_input(&format!("{}[{}][date]", facet, side))
            .unwrap_or_default()
            .to_string();
        if limit.is_empty() {
            return limit;
        }
        if let Some((time, timezone)) = widget.time_input(&format!("{}[{}][time]", facet, side)) {
            if !time.is_empty() {
                limit.push('T');
                limit.push_str(time);
                // Query strings are built unencoded; a bare '+' would read as a space.
                limit.push_str(&timezone.unwrap_or_default().replacen('+', "%2B", 1));
            }
        }
        limit
    }
}

impl Default for DateRangeAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl WidgetAdapter for DateRangeAdapter {
    fn kind(&self) -> &'static str {
        DATE_RANGE
    }

    fn change_event_name(&self) -> &'static str {
        DOM_EVENT_CHANGE
    }

    fn extract(&self, widget: &WidgetElement) -> Vec<String> {
        let Some(facet) = widget.facet() else {
            return Vec::new();
        };
        let range = SIDES
            .iter()
            .map(|side| self.side(widget, facet, side))
            .collect::<Vec<_>>()
            .join(&self.delimiter);
        if range == self.delimiter {
            Vec::new()
        } else {
            vec![range]
        }
    }
}
