#![allow(clippy::float_cmp)]

use std::cell::RefCell;

use blocks::schema::seed_object;
use serde_json::json;

use super::*;
use crate::control::CheckState;

type Seen = Rc<RefCell<Vec<Value>>>;

fn recorder() -> (ChangeFn, Seen) {
    let seen: Seen = Rc::default();
    let sink = seen.clone();
    (Rc::new(move |v: Value| sink.borrow_mut().push(v)), seen)
}

fn render(prop: &EditableProp, value: Value) -> (Control, Seen) {
    let (on_change, seen) = recorder();
    (render_prop(prop, &value, &Map::new(), on_change), seen)
}

fn last(seen: &Seen) -> Value {
    seen.borrow().last().cloned().unwrap_or(Value::Null)
}

fn todo_items() -> EditableProp {
    EditableProp::object_array(
        "items",
        "Items",
        vec![EditableProp::text("text", "Text"), EditableProp::checkbox("checked", "Done")],
    )
}

// =============================================================
// Every kind yields a control that reports a replacement value
// =============================================================

#[test]
fn every_known_kind_renders_an_interactive_control() {
    for kind in PropKind::KNOWN {
        let prop = EditableProp::new("field", "Field", kind.clone());
        let (control, seen) = render(&prop, prop.default_value());
        assert_eq!(control.name, "field");
        assert!(!matches!(control.widget, Widget::Unavailable { .. }), "{kind:?}");
        assert!(control.fire(ControlEvent::Replace(json!("x"))), "{kind:?}");
        assert_eq!(last(&seen), json!("x"));
    }
}

#[test]
fn text_like_kinds_report_the_typed_text() {
    for prop in [
        EditableProp::text("a", "A"),
        EditableProp::textarea("a", "A"),
        EditableProp::url("a", "A"),
        EditableProp::image("a", "A"),
        EditableProp::date("a", "A"),
    ] {
        let (control, seen) = render(&prop, json!("old"));
        assert!(control.fire(ControlEvent::Input("new".into())));
        assert_eq!(*seen.borrow(), vec![json!("new")]);
    }
}

#[test]
fn input_type_follows_kind() {
    let (control, _) = render(&EditableProp::url("link", "Link"), json!("https://x.dev"));
    assert!(matches!(control.widget, Widget::Input { input_type: "url", .. }));
}

#[test]
fn number_parses_and_guards() {
    let (control, seen) = render(&EditableProp::number("value", "Value"), json!(1000));
    assert!(matches!(control.widget, Widget::Number { value } if value == 1000.0));
    control.fire(ControlEvent::Input("1200".into()));
    control.fire(ControlEvent::Input("abc".into()));
    assert_eq!(*seen.borrow(), vec![json!(1200), json!(0)]);
}

#[test]
fn number_shows_zero_for_non_numbers() {
    let (control, _) = render(&EditableProp::number("value", "Value"), json!("ten"));
    assert!(matches!(control.widget, Widget::Number { value } if value == 0.0));
}

#[test]
fn color_normalizes_input() {
    let (control, seen) = render(&EditableProp::color("color", "Color"), json!("#112233"));
    control.fire(ControlEvent::Input("#ABC".into()));
    control.fire(ControlEvent::Input("red".into()));
    assert_eq!(*seen.borrow(), vec![json!("#aabbcc"), json!("#112233")]);
}

#[test]
fn checkbox_is_tri_state_and_toggles() {
    let (control, seen) = render(&EditableProp::checkbox("on", "On"), Value::Null);
    assert!(matches!(control.widget, Widget::Checkbox { state: CheckState::Indeterminate }));
    assert!(!control.fire(ControlEvent::Input("true".into())));
    assert!(control.fire(ControlEvent::Toggle(true)));
    assert_eq!(*seen.borrow(), vec![json!(true)]);
}

#[test]
fn select_accepts_only_listed_options() {
    let prop = EditableProp::select("trend", "Trend", &["up", "down", "flat"]);
    let (control, seen) = render(&prop, json!("up"));
    assert!(control.fire(ControlEvent::Input("down".into())));
    assert!(!control.fire(ControlEvent::Input("sideways".into())));
    assert_eq!(*seen.borrow(), vec![json!("down")]);
}

#[test]
fn string_list_splits_on_commas() {
    let (control, seen) = render(&EditableProp::string_array("tags", "Tags"), json!(["a", "b"]));
    assert!(matches!(&control.widget, Widget::StringList { value, .. } if value == "a, b"));
    control.fire(ControlEvent::Input("x, y ,, z".into()));
    assert_eq!(last(&seen), json!(["x", "y", "z"]));
}

#[test]
fn json_field_keeps_previous_value_on_parse_error() {
    let (control, seen) = render(&EditableProp::json("options", "Options"), json!({}));
    assert!(!control.fire(ControlEvent::Input("{not json".into())));
    assert!(control.fire(ControlEvent::Input(r#"{"stacked": true}"#.into())));
    assert_eq!(*seen.borrow(), vec![json!({"stacked": true})]);
}

#[test]
fn unknown_kind_renders_notice() {
    let prop = EditableProp::new("x", "X", PropKind::Other("sparkline".into()));
    let (control, seen) = render(&prop, Value::Null);
    assert!(
        matches!(&control.widget, Widget::Unavailable { message } if message == "editor not available for type: sparkline")
    );
    assert!(!control.fire(ControlEvent::Input("1".into())));
    assert!(seen.borrow().is_empty());
}

// =============================================================
// Object arrays
// =============================================================

#[test]
fn add_to_empty_array_yields_defaulted_item_with_id() {
    let (control, seen) = render(&todo_items(), json!([]));
    assert!(control.fire(ControlEvent::Add));
    let value = last(&seen);
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["text"], "");
    assert_eq!(items[0]["checked"], false);
    assert!(!items[0]["id"].as_str().unwrap().is_empty());
    assert_eq!(items[0].as_object().unwrap().len(), 3);
}

#[test]
fn remove_filters_by_index() {
    let current = json!([{"id": "a", "text": "one"}, {"id": "b", "text": "two"}, {"id": "c", "text": "three"}]);
    let (control, seen) = render(&todo_items(), current);
    assert!(control.fire(ControlEvent::Remove(1)));
    assert!(!control.fire(ControlEvent::Remove(9)));
    let ids: Vec<_> = last(&seen).as_array().unwrap().iter().map(|i| i["id"].clone()).collect();
    assert_eq!(ids, vec![json!("a"), json!("c")]);
}

#[test]
fn item_field_edit_replaces_whole_array() {
    let current = json!([{"id": "a", "text": "one", "checked": false}, {"id": "b", "text": "two", "checked": true}]);
    let (control, seen) = render(&todo_items(), current);
    let field = control.find("1.checked").unwrap();
    assert!(field.fire(ControlEvent::Toggle(false)));
    assert_eq!(
        last(&seen),
        json!([{"id": "a", "text": "one", "checked": false}, {"id": "b", "text": "two", "checked": false}])
    );
}

#[test]
fn missing_item_fields_render_defaults() {
    let (control, _) = render(&todo_items(), json!([{"id": "a"}]));
    let Widget::ObjectArray { items } = &control.widget else {
        panic!("expected object array");
    };
    assert_eq!(items[0].id.as_deref(), Some("a"));
    assert!(matches!(items[0].fields[1].widget, Widget::Checkbox { state: CheckState::Unchecked }));
}

#[test]
fn nested_arrays_recurse() {
    let prop = EditableProp::object_array(
        "phases",
        "Phases",
        vec![EditableProp::text("name", "Name"), EditableProp::object_array("items", "Items", vec![EditableProp::text("text", "Text")])],
    );
    let current = json!([{"name": "Q1", "items": [{"text": "ship"}]}]);
    let (control, seen) = render(&prop, current);
    let leaf = control.find("0.items.0.text").unwrap();
    assert!(leaf.fire(ControlEvent::Input("launch".into())));
    assert_eq!(last(&seen), json!([{"name": "Q1", "items": [{"text": "launch"}]}]));

    let inner = control.find("0.items").unwrap();
    assert!(inner.fire(ControlEvent::Add));
    assert_eq!(last(&seen)[0]["items"].as_array().unwrap().len(), 2);
}

#[test]
fn seed_matches_item_defaults() {
    let seed = seed_object(&todo_items().item_schema);
    assert_eq!(Value::Object(seed), json!({"text": "", "checked": false}));
}

// =============================================================
// Specialized delegation
// =============================================================

#[test]
fn specialized_kind_delegates_to_editor() {
    let prop = EditableProp::new("segments", "Segments", PropKind::MarketSegments);
    let (control, _) = render(&prop, json!([]));
    let Widget::Editor(editor) = &control.widget else {
        panic!("expected editor");
    };
    assert_eq!(editor.kind, PropKind::MarketSegments);
}

#[test]
fn competitor_editor_reads_sibling_from_parent() {
    let prop = EditableProp::new("competitors", "Competitors", PropKind::CompetitorFeatures).with_sibling("features");
    let parent = json!({"features": ["SSO", "API"]});
    let (on_change, _) = recorder();
    let control = render_prop(&prop, &json!([]), parent.as_object().unwrap(), on_change);
    assert!(control.find("competitors.0.features.API").is_some());
}
