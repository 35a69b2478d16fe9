//! Plain-data model of a rendered widget.
//!
//! Stands in for the live DOM: a widget root with its attributes and the form
//! controls inside it. Adapters read it; [`InputChange`] mutates it the way a
//! user interaction would.

use crate::core_types::attributes::{
    ATTR_ANCESTORS, ATTR_FACET, ATTR_WIDGET, DOM_EVENT_CHANGE, DOM_EVENT_INPUT,
};
use crate::model::deserialize_scalar_string;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Events a browser fires on a form control after a user edit.
const EDIT_EVENTS: &[&str] = &[DOM_EVENT_INPUT, DOM_EVENT_CHANGE];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetElement {
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub inputs: Vec<FormInput>,
}

/// A form control inside a widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormInput {
    Checkbox {
        name: String,
        #[serde(default)]
        checked: bool,
    },
    #[serde(rename = "option")]
    SelectOption {
        #[serde(deserialize_with = "deserialize_scalar_string")]
        value: String,
        #[serde(default)]
        label: String,
        #[serde(default)]
        selected: bool,
    },
    Date {
        name: String,
        #[serde(default)]
        value: String,
    },
    Time {
        name: String,
        #[serde(default)]
        value: String,
        /// UTC offset annotation, e.g. `+02:00`
        #[serde(default)]
        timezone: Option<String>,
    },
}

/// A user edit of one control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum InputChange {
    Check {
        name: String,
        checked: bool,
    },
    Select {
        #[serde(deserialize_with = "deserialize_scalar_string")]
        value: String,
        selected: bool,
        /// Single-select: selecting deselects every other option
        #[serde(default)]
        exclusive: bool,
    },
    Fill {
        name: String,
        #[serde(default)]
        value: String,
    },
}

impl WidgetElement {
    /// Widget root for `facet` rendered by the `kind` widget.
    pub fn new(kind: &str, facet: &str) -> Self {
        Self::default()
            .with_attribute(ATTR_WIDGET, kind)
            .with_attribute(ATTR_FACET, facet)
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_input(mut self, input: FormInput) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn facet(&self) -> Option<&str> {
        self.attribute(ATTR_FACET).filter(|f| !f.is_empty())
    }

    pub fn kind(&self) -> Option<&str> {
        self.attribute(ATTR_WIDGET)
    }

    pub fn ancestors_attribute(&self) -> Option<&str> {
        self.attribute(ATTR_ANCESTORS)
    }

    pub fn date_input(&self, name: &str) -> Option<&str> {
        self.inputs.iter().find_map(|input| match input {
            FormInput::Date { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Value and timezone of the named time input.
    pub fn time_input(&self, name: &str) -> Option<(&str, Option<&str>)> {
        self.inputs.iter().find_map(|input| match input {
            FormInput::Time {
                name: n,
                value,
                timezone,
            } if n == name => Some((value.as_str(), timezone.as_deref())),
            _ => None,
        })
    }

    /// Apply a user edit and return the DOM events it fires.
    ///
    /// No events when no control matches the edit.
    pub fn apply(&mut self, change: &InputChange) -> &'static [&'static str] {
        let matched = match change {
            InputChange::Check { name, checked } => {
                let mut matched = false;
                for input in self.inputs.iter_mut() {
                    if let FormInput::Checkbox { name: n, checked: c } = input {
                        if n == name {
                            *c = *checked;
                            matched = true;
                        }
                    }
                }
                matched
            }
            InputChange::Select {
                value,
                selected,
                exclusive,
            } => {
                let matched = self.inputs.iter().any(
                    |input| matches!(input, FormInput::SelectOption { value: v, .. } if v == value),
                );
                if matched {
                    for input in self.inputs.iter_mut() {
                        if let FormInput::SelectOption { value: v, selected: s, .. } = input {
                            if v == value {
                                *s = *selected;
                            } else if *exclusive && *selected {
                                *s = false;
                            }
                        }
                    }
                }
                matched
            }
            InputChange::Fill { name, value } => {
                let mut matched = false;
                for input in self.inputs.iter_mut() {
                    match input {
                        FormInput::Date { name: n, value: v } | FormInput::Time { name: n, value: v, .. }
                            if n == name =>
                        {
                            *v = value.clone();
                            matched = true;
                        }
                        _ => {}
                    }
                }
                matched
            }
        };

        if matched {
            EDIT_EVENTS
        } else {
            &[]
        }
    }
}
