//! The control tree the inspector produces.
//!
//! A [`Control`] pairs a serializable [`Widget`] description with a handler
//! that turns a [`ControlEvent`] into a replacement value for its property.
//! Handlers never mutate the value they were built from; they compute the
//! next value and pass it upward.

#[cfg(test)]
#[path = "control_test.rs"]
mod control_test;

use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;

use crate::editors::Editor;

/// Receives the replacement value of one property.
pub type ChangeFn = Rc<dyn Fn(Value)>;

/// Interprets an event; returns `false` when the event does not apply.
pub type Handler = Rc<dyn Fn(ControlEvent) -> bool>;

/// Something the user did to a control.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// Raw text typed into an input, textarea, number, color, select, list, or json field.
    Input(String),
    /// Checkbox toggled.
    Toggle(bool),
    /// Whole value supplied directly.
    Replace(Value),
    /// Append a defaulted item to a collection.
    Add,
    /// Remove the item at this index from a collection.
    Remove(usize),
}

/// Tri-state checkbox. Anything other than a JSON boolean is indeterminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckState {
    Checked,
    Unchecked,
    Indeterminate,
}

impl From<&Value> for CheckState {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(true) => Self::Checked,
            Value::Bool(false) => Self::Unchecked,
            _ => Self::Indeterminate,
        }
    }
}

/// One item of an object array: its fields rendered with the item schema.
#[derive(Debug, Serialize)]
pub struct ArrayItem {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub fields: Vec<Control>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "widget", rename_all = "camelCase")]
pub enum Widget {
    /// Single-line input; `input_type` is `text`, `url`, `image` or `date`.
    #[serde(rename_all = "camelCase")]
    Input { input_type: &'static str, value: String },
    TextArea { value: String },
    Number { value: f64 },
    Color { value: String },
    Checkbox { state: CheckState },
    Select { value: String, options: Vec<String> },
    /// Comma-separated free-form strings.
    StringList { value: String, items: Vec<String> },
    ObjectArray { items: Vec<ArrayItem> },
    /// Pretty-printed JSON text.
    Json { value: String },
    /// Add/remove affordance for the rows of a specialized editor.
    Collection { len: usize },
    Editor(Editor),
    Unavailable { message: String },
}

#[derive(Serialize)]
pub struct Control {
    pub name: String,
    pub label: String,
    #[serde(flatten)]
    pub widget: Widget,
    #[serde(skip)]
    handler: Option<Handler>,
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("widget", &self.widget)
            .field("interactive", &self.handler.is_some())
            .finish()
    }
}

impl Control {
    #[must_use]
    pub fn new(name: &str, label: &str, widget: Widget, handler: Handler) -> Self {
        Self { name: name.to_owned(), label: label.to_owned(), widget, handler: Some(handler) }
    }

    /// A control with nothing to dispatch to.
    #[must_use]
    pub fn display(name: &str, label: &str, widget: Widget) -> Self {
        Self { name: name.to_owned(), label: label.to_owned(), widget, handler: None }
    }

    /// Deliver an event. Returns `false` when the control ignores it.
    pub fn fire(&self, event: ControlEvent) -> bool {
        self.handler.as_ref().is_some_and(|h| h(event))
    }

    /// Direct children: object-array item fields and specialized-editor fields.
    #[must_use]
    pub fn children(&self) -> Vec<&Control> {
        match &self.widget {
            Widget::ObjectArray { items } => items.iter().flat_map(|i| i.fields.iter()).collect(),
            Widget::Editor(editor) => editor.fields.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Find a descendant by dotted path relative to this control, e.g.
    /// `"0.text"` for field `text` of item 0 of an object array.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&Control> {
        if path.is_empty() {
            return Some(self);
        }
        match &self.widget {
            Widget::ObjectArray { items } => {
                let (index, rest) = path.split_once('.').unwrap_or((path, ""));
                let item = items.iter().find(|i| i.index.to_string() == index)?;
                let (field, tail) = rest.split_once('.').unwrap_or((rest, ""));
                item.fields.iter().find(|c| c.name == field)?.find(tail)
            }
            Widget::Editor(editor) => editor.fields.iter().find(|c| c.name == path),
            _ => None,
        }
    }
}

/// Parse user text as a number; anything unparseable or non-finite is `0`.
#[must_use]
pub fn parse_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// A JSON number for `n`, or `0` when `n` is not finite.
#[must_use]
pub fn number_value(n: f64) -> Value {
    blocks::patch::number(n)
}

/// Split comma-separated text into trimmed, non-empty items.
#[must_use]
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned).collect()
}

/// The string form of a JSON value for text inputs. Non-strings show as JSON.
#[must_use]
pub fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
