#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn obj(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("not an object"),
    }
}

// =============================================================
// LayoutPatch
// =============================================================

#[test]
fn position_patch_sets_only_xy() {
    let patch = LayoutPatch::position(10.0, 20.0);
    assert_eq!(patch.x, Some(10.0));
    assert_eq!(patch.y, Some(20.0));
    assert!(patch.width.is_none() && patch.height.is_none() && patch.z_index.is_none());
}

#[test]
fn diff_reports_changed_fields_only() {
    let before = Layout::new(0.0, 0.0, 100.0, 50.0, 1);
    let after = Layout::new(0.0, 5.0, 120.0, 50.0, 1);
    let patch = LayoutPatch::diff(&before, &after);
    assert_eq!(patch, LayoutPatch { y: Some(5.0), width: Some(120.0), ..LayoutPatch::default() });
}

#[test]
fn diff_of_identical_layouts_is_empty() {
    let layout = Layout::new(3.0, 4.0, 100.0, 50.0, 2);
    assert!(LayoutPatch::diff(&layout, &layout).is_empty());
}

#[test]
fn apply_to_leaves_absent_fields() {
    let mut layout = Layout::new(0.0, 0.0, 100.0, 50.0, 7);
    LayoutPatch { width: Some(80.0), ..LayoutPatch::default() }.apply_to(&mut layout);
    assert_eq!(layout, Layout::new(0.0, 0.0, 80.0, 50.0, 7));
}

#[test]
fn layout_patch_serializes_sparse() {
    let value = serde_json::to_value(LayoutPatch::position(1.0, 2.0)).unwrap();
    assert_eq!(value, json!({ "x": 1.0, "y": 2.0 }));
}

// =============================================================
// Object merge
// =============================================================

#[test]
fn merge_replaces_and_keeps() {
    let mut target = obj(json!({ "a": 1, "b": 2 }));
    merge_object(&mut target, &obj(json!({ "b": 3, "c": 4 })));
    assert_eq!(Value::Object(target), json!({ "a": 1, "b": 3, "c": 4 }));
}

#[test]
fn merge_null_removes_key() {
    let mut target = obj(json!({ "fontFamily": "Inter", "border": "1px" }));
    merge_object(&mut target, &obj(json!({ "border": null })));
    assert_eq!(Value::Object(target), json!({ "fontFamily": "Inter" }));
}

#[test]
fn merge_is_shallow() {
    let mut target = obj(json!({ "data": { "labels": ["Q1"], "datasets": [] } }));
    merge_object(&mut target, &obj(json!({ "data": { "labels": ["Q2"] } })));
    assert_eq!(Value::Object(target), json!({ "data": { "labels": ["Q2"] } }));
}

#[test]
fn merge_value_replaces_non_object() {
    let mut target = json!("oops");
    merge_value(&mut target, &obj(json!({ "a": 1 })));
    assert_eq!(target, json!({ "a": 1 }));
}

// =============================================================
// Numbers
// =============================================================

#[test]
fn number_writes_whole_values_as_integers() {
    assert_eq!(number(1200.0), json!(1200));
    assert!(number(1200.0).is_i64());
    assert_eq!(number(-3.0), json!(-3));
    assert_eq!(number(0.25), json!(0.25));
    assert_eq!(number(f64::INFINITY), json!(0));
    assert_eq!(number(1e300), json!(1e300));
}

#[test]
fn compact_numbers_walks_nested_values() {
    let mut value = json!({ "value": 1200.0, "data": [1.0, 2.5], "nested": { "score": 4.0 }, "label": "MRR" });
    compact_numbers(&mut value);
    assert_eq!(value, json!({ "value": 1200, "data": [1, 2.5], "nested": { "score": 4 }, "label": "MRR" }));
}
