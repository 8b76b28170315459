use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;

use super::*;
use crate::control::ControlEvent;

fn recorder() -> (ChangeFn, Rc<RefCell<Vec<Value>>>) {
    let seen: Rc<RefCell<Vec<Value>>> = Rc::default();
    let sink = seen.clone();
    (Rc::new(move |v: Value| sink.borrow_mut().push(v)), seen)
}

fn features() -> Vec<String> {
    vec!["SSO".to_owned(), "API".to_owned()]
}

#[test]
fn empty_data_gets_your_company() {
    let rows = normalize(&json!([]), &features());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Your Company");
    assert!(rows[0].is_us);
    assert_eq!(rows[0].features.len(), 2);
}

#[test]
fn defaulting_is_idempotent() {
    let first = normalize(&Value::Null, &features());
    assert_eq!(normalize(&serde_json::to_value(&first).unwrap(), &features()), first);
}

#[test]
fn toggles_follow_sibling_features() {
    let rows = normalize(&json!([{"name": "Acme", "features": {"SSO": true, "Legacy": true}}]), &features());
    assert_eq!(rows[0].features.get("SSO"), Some(&true));
    assert_eq!(rows[0].features.get("API"), Some(&false));
    assert!(!rows[0].features.contains_key("Legacy"));
}

#[test]
fn toggle_pushes_all_competitors() {
    let (on_replace, seen) = recorder();
    let current = json!([{"name": "Us", "isUs": true}, {"name": "Acme"}]);
    let editor = editor(&current, &features(), on_replace);
    let cell = editor.fields.iter().find(|c| c.name == "competitors.1.features.API").unwrap();
    assert!(cell.fire(ControlEvent::Toggle(true)));
    let pushed = seen.borrow()[0].clone();
    assert_eq!(pushed.as_array().unwrap().len(), 2);
    assert_eq!(pushed[1]["features"]["API"], true);
    assert_eq!(pushed[0]["isUs"], true);
}

#[test]
fn feature_matrix_preview() {
    let rows = normalize(&json!([{"name": "Us", "isUs": true, "features": {"API": true}}]), &features());
    let Preview::FeatureMatrix { features, rows } = preview(&rows, &features()) else {
        panic!("expected feature matrix");
    };
    assert_eq!(features, vec!["SSO", "API"]);
    assert_eq!(rows[0].cells, vec![false, true]);
}

#[test]
fn added_competitor_has_every_feature_off() {
    let (on_replace, seen) = recorder();
    let editor = editor(&Value::Null, &features(), on_replace);
    let rows = editor.fields.iter().find(|c| c.name == "competitors").unwrap();
    rows.fire(ControlEvent::Add);
    assert_eq!(seen.borrow()[0][1]["features"], json!({"API": false, "SSO": false}));
}
