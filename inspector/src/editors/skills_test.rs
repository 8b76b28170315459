#![allow(clippy::float_cmp)]

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

#[test]
fn empty_data_gets_one_skill_and_member() {
    let m = normalize(&json!({}));
    assert_eq!(m.skills, vec!["Skill 1"]);
    assert_eq!(m.members.len(), 1);
    assert_eq!(m.members[0].scores.get("Skill 1"), Some(&0.0));
}

#[test]
fn defaulting_is_idempotent() {
    let first = normalize(&Value::Null);
    assert_eq!(normalize(&serde_json::to_value(&first).unwrap()), first);
}

#[test]
fn scores_clamp_and_follow_skills() {
    let m = normalize(&json!({
        "skills": ["Rust", "Sales"],
        "members": [{"name": "Ada", "scores": {"Rust": 9, "Cooking": 4}}]
    }));
    let scores = &m.members[0].scores;
    assert_eq!(scores.get("Rust"), Some(&5.0));
    assert_eq!(scores.get("Sales"), Some(&0.0));
    assert!(!scores.contains_key("Cooking"));
}

#[test]
fn colors_by_score() {
    assert_eq!(score_color(5.0), "#22c55e");
    assert_eq!(score_color(2.5), "#eab308");
    assert_eq!(score_color(1.0), "#ef4444");
}

#[test]
fn score_edit_pushes_clamped_value() {
    let (on_replace, seen) = recorder();
    let editor = editor(&json!({"skills": ["Rust"], "members": [{"name": "Ada"}]}), on_replace);
    let cell = editor.fields.iter().find(|c| c.name == "members.0.scores.Rust").unwrap();
    cell.fire(ControlEvent::Input("7".into()));
    assert_eq!(seen.borrow()[0]["members"][0]["scores"]["Rust"], json!(5));
}

#[test]
fn renaming_skills_reshapes_scores() {
    let (on_replace, seen) = recorder();
    let editor = editor(&json!({"skills": ["Rust"], "members": [{"name": "Ada", "scores": {"Rust": 3}}]}), on_replace);
    let skills = editor.fields.iter().find(|c| c.name == "skills").unwrap();
    skills.fire(ControlEvent::Input("Rust, Go".into()));
    assert_eq!(seen.borrow()[0]["members"][0]["scores"], json!({"Go": 0, "Rust": 3}));
}
