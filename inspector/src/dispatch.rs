//! Recursive property dispatch: one [`EditableProp`] plus its current value
//! becomes one [`Control`].
//!
//! Object arrays call back into [`render_prop`] for every field of every item,
//! so nested structures of any depth use this same function. Specialized kinds
//! are delegated to [`crate::editors`] from inside the same match.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::rc::Rc;

use blocks::schema::new_array_item;
use blocks::{EditableProp, PropKind};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::color::normalize_hex;
use crate::consts::FALLBACK_COLOR;
use crate::control::{
    ArrayItem, ChangeFn, CheckState, Control, ControlEvent, Handler, Widget, number_value, parse_number, split_list,
    text_of,
};
use crate::editors;

/// Build the control for `prop`.
///
/// `parent` is the object that holds `value` (the block data at the top
/// level, the item object inside an array); specialized editors read sibling
/// fields from it. `on_change` receives the full replacement value.
#[must_use]
pub fn render_prop(prop: &EditableProp, value: &Value, parent: &Map<String, Value>, on_change: ChangeFn) -> Control {
    let name = prop.name.as_str();
    let label = prop.caption();
    match &prop.kind {
        PropKind::Text => input(name, label, "text", value, on_change),
        PropKind::Url => input(name, label, "url", value, on_change),
        PropKind::Image => input(name, label, "image", value, on_change),
        PropKind::Date => input(name, label, "date", value, on_change),
        PropKind::Textarea => {
            let widget = Widget::TextArea { value: text_of(value) };
            Control::new(name, label, widget, text_handler(on_change))
        }
        PropKind::Number => {
            let widget = Widget::Number { value: value.as_f64().unwrap_or(0.0) };
            let handler: Handler = Rc::new(move |event: ControlEvent| match event {
                ControlEvent::Input(raw) => {
                    on_change(number_value(parse_number(&raw)));
                    true
                }
                ControlEvent::Replace(v) => replace(&on_change, v),
                _ => false,
            });
            Control::new(name, label, widget, handler)
        }
        PropKind::Color => {
            let current = value.as_str().unwrap_or(FALLBACK_COLOR).to_owned();
            let widget = Widget::Color { value: current.clone() };
            let handler: Handler = Rc::new(move |event: ControlEvent| match event {
                ControlEvent::Input(raw) => {
                    on_change(Value::String(normalize_hex(&raw, &current)));
                    true
                }
                ControlEvent::Replace(v) => replace(&on_change, v),
                _ => false,
            });
            Control::new(name, label, widget, handler)
        }
        PropKind::Checkbox => {
            let widget = Widget::Checkbox { state: CheckState::from(value) };
            let handler: Handler = Rc::new(move |event: ControlEvent| match event {
                ControlEvent::Toggle(on) => {
                    on_change(Value::Bool(on));
                    true
                }
                ControlEvent::Replace(v) => replace(&on_change, v),
                _ => false,
            });
            Control::new(name, label, widget, handler)
        }
        PropKind::Select => select(prop, value, on_change),
        PropKind::StringArray => string_list(name, label, value, on_change),
        PropKind::Json => json(name, label, value, on_change),
        PropKind::ObjectArray => object_array(prop, value, on_change),
        PropKind::ChartData
        | PropKind::CompetitivePositioning
        | PropKind::MarketSegments
        | PropKind::SkillMatrix
        | PropKind::CompetitorFeatures => {
            let editor = editors::render(prop, value, parent, on_change.clone());
            let handler: Handler = Rc::new(move |event: ControlEvent| match event {
                ControlEvent::Replace(v) => replace(&on_change, v),
                _ => false,
            });
            Control::new(name, label, Widget::Editor(editor), handler)
        }
        PropKind::Other(kind) => {
            warn!(prop = name, kind = %kind, "no editor for property kind");
            Control::display(name, label, Widget::Unavailable { message: format!("editor not available for type: {kind}") })
        }
    }
}

fn replace(on_change: &ChangeFn, value: Value) -> bool {
    on_change(value);
    true
}

fn text_handler(on_change: ChangeFn) -> Handler {
    Rc::new(move |event: ControlEvent| match event {
        ControlEvent::Input(raw) => {
            on_change(Value::String(raw));
            true
        }
        ControlEvent::Replace(v) => replace(&on_change, v),
        _ => false,
    })
}

fn input(name: &str, label: &str, input_type: &'static str, value: &Value, on_change: ChangeFn) -> Control {
    let widget = Widget::Input { input_type, value: text_of(value) };
    Control::new(name, label, widget, text_handler(on_change))
}

fn select(prop: &EditableProp, value: &Value, on_change: ChangeFn) -> Control {
    let options = prop.options.clone();
    let widget = Widget::Select { value: text_of(value), options: options.clone() };
    let name = prop.name.clone();
    let handler: Handler = Rc::new(move |event: ControlEvent| match event {
        ControlEvent::Input(choice) => {
            if !options.is_empty() && !options.contains(&choice) {
                warn!(prop = %name, choice = %choice, "select value is not one of the options");
                return false;
            }
            on_change(Value::String(choice));
            true
        }
        ControlEvent::Replace(v) => replace(&on_change, v),
        _ => false,
    });
    Control::new(&prop.name, prop.caption(), widget, handler)
}

fn string_list(name: &str, label: &str, value: &Value, on_change: ChangeFn) -> Control {
    let items: Vec<String> = value.as_array().map_or_else(Vec::new, |a| a.iter().map(text_of).collect());
    let widget = Widget::StringList { value: items.join(", "), items };
    let handler: Handler = Rc::new(move |event: ControlEvent| match event {
        ControlEvent::Input(raw) => {
            on_change(Value::Array(split_list(&raw).into_iter().map(Value::String).collect()));
            true
        }
        ControlEvent::Replace(v) => replace(&on_change, v),
        _ => false,
    });
    Control::new(name, label, widget, handler)
}

fn json(name: &str, label: &str, value: &Value, on_change: ChangeFn) -> Control {
    let text = serde_json::to_string_pretty(value).unwrap_or_default();
    let prop = name.to_owned();
    let handler: Handler = Rc::new(move |event: ControlEvent| match event {
        ControlEvent::Input(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(parsed) => {
                on_change(parsed);
                true
            }
            Err(e) => {
                warn!(prop = %prop, error = %e, "json field does not parse; keeping previous value");
                false
            }
        },
        ControlEvent::Replace(v) => replace(&on_change, v),
        _ => false,
    });
    Control::new(name, label, Widget::Json { value: text }, handler)
}

fn object_array(prop: &EditableProp, value: &Value, on_change: ChangeFn) -> Control {
    let current: Vec<Value> = value.as_array().cloned().unwrap_or_default();
    let empty = Map::new();

    let items = current
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let object = item.as_object().unwrap_or(&empty);
            let fields = prop
                .item_schema
                .iter()
                .map(|field| {
                    let field_value = object.get(&field.name).cloned().unwrap_or_else(|| field.default_value());
                    let on_field = item_setter(&current, index, &field.name, on_change.clone());
                    render_prop(field, &field_value, object, on_field)
                })
                .collect();
            let id = object.get("id").and_then(Value::as_str).map(str::to_owned);
            ArrayItem { index, id, fields }
        })
        .collect();

    let item_schema = prop.item_schema.clone();
    let name = prop.name.clone();
    let handler: Handler = Rc::new(move |event: ControlEvent| match event {
        ControlEvent::Add => {
            let mut next = current.clone();
            next.push(new_array_item(&item_schema));
            debug!(prop = %name, len = next.len(), "array item added");
            on_change(Value::Array(next));
            true
        }
        ControlEvent::Remove(index) if index < current.len() => {
            let next: Vec<Value> =
                current.iter().enumerate().filter(|(i, _)| *i != index).map(|(_, v)| v.clone()).collect();
            debug!(prop = %name, index, "array item removed");
            on_change(Value::Array(next));
            true
        }
        ControlEvent::Replace(v) => replace(&on_change, v),
        _ => false,
    });
    Control::new(&prop.name, prop.caption(), Widget::ObjectArray { items }, handler)
}

/// Change callback for one field of one array item: replaces the whole array.
fn item_setter(current: &[Value], index: usize, field: &str, on_change: ChangeFn) -> ChangeFn {
    let current = current.to_vec();
    let field = field.to_owned();
    Rc::new(move |value: Value| {
        let mut next = current.clone();
        if let Some(slot) = next.get_mut(index) {
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            if let Some(object) = slot.as_object_mut() {
                object.insert(field.clone(), value);
            }
        }
        on_change(Value::Array(next));
    })
}
