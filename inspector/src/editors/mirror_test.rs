use std::cell::RefCell;

use serde_json::json;

use super::*;

type Seen = Rc<RefCell<Vec<Value>>>;

fn recorder() -> (ChangeFn, Seen) {
    let seen: Seen = Rc::default();
    let sink = seen.clone();
    (Rc::new(move |v: Value| sink.borrow_mut().push(v)), seen)
}

#[test]
fn every_change_pushes_whole_structure() {
    let (on_replace, seen) = recorder();
    let mirror = Mirror::new(vec![String::from("a"), String::from("b")], on_replace);
    let first = mirror.text("0", "First", "a", |v: &mut Vec<String>, s| v[0] = s);
    let second = mirror.text("1", "Second", "b", |v: &mut Vec<String>, s| v[1] = s);

    first.fire(ControlEvent::Input("x".into()));
    second.fire(ControlEvent::Input("y".into()));
    assert_eq!(*seen.borrow(), vec![json!(["x", "b"]), json!(["x", "y"])]);
}

#[test]
fn refused_change_pushes_nothing() {
    let (on_replace, seen) = recorder();
    let mirror = Mirror::new(vec![1], on_replace);
    let rows = mirror.collection("rows", "Rows", 1, |v: &mut Vec<i32>| v.push(0), |v: &mut Vec<i32>, i| remove_keeping_one(v, i));
    assert!(!rows.fire(ControlEvent::Remove(0)));
    assert!(!rows.fire(ControlEvent::Toggle(true)));
    assert!(seen.borrow().is_empty());
    assert!(rows.fire(ControlEvent::Add));
    assert_eq!(*seen.borrow(), vec![json!([1, 0])]);
}

#[test]
fn number_field_clamps() {
    let (on_replace, seen) = recorder();
    let mirror = Mirror::new(0.0_f64, on_replace);
    let field = mirror.number("v", "V", 0.0, (0.0, 5.0), |v: &mut f64, n| *v = n);
    field.fire(ControlEvent::Input("9".into()));
    field.fire(ControlEvent::Input("-2".into()));
    field.fire(ControlEvent::Input("abc".into()));
    assert_eq!(*seen.borrow(), vec![json!(5), json!(0), json!(0)]);
}

#[test]
fn remove_keeping_one_guards_bounds_and_last_row() {
    let mut rows = vec![1, 2];
    assert!(!remove_keeping_one(&mut rows, 5));
    assert!(remove_keeping_one(&mut rows, 0));
    assert!(!remove_keeping_one(&mut rows, 0));
    assert_eq!(rows, vec![2]);
}

#[test]
fn decode_falls_back_to_default() {
    let parsed: Vec<String> = decode(&json!({"not": "a list"}), "test");
    assert!(parsed.is_empty());
    let parsed: Vec<String> = decode(&Value::Null, "test");
    assert!(parsed.is_empty());
}

#[test]
fn non_specialized_kind_yields_notice() {
    let prop = EditableProp::text("title", "Title");
    let (on_replace, _) = recorder();
    let editor = render(&prop, &Value::Null, &Map::new(), on_replace);
    assert_eq!(editor.preview, Preview::None);
    assert_eq!(editor.warnings, vec!["editor not available for type: text".to_owned()]);
}
