use serde_json::json;

use super::*;

fn style(value: Value) -> Style {
    match value {
        Value::Object(map) => map,
        _ => panic!("not an object"),
    }
}

#[test]
fn default_theme_sets_font_only() {
    assert_eq!(Value::Object(Theme::default().defaults()), json!({ "fontFamily": DEFAULT_FONT_FAMILY }));
}

#[test]
fn block_style_wins_over_theme() {
    let theme = Theme { font_family: "Georgia".into(), text_color: Some("#111111".into()), ..Theme::default() };
    let merged = theme.merge(&style(json!({ "fontFamily": "Mono", "border": "1px" })));
    assert_eq!(Value::Object(merged), json!({ "fontFamily": "Mono", "color": "#111111", "border": "1px" }));
}

#[test]
fn empty_block_style_gets_theme() {
    let theme = Theme { accent_color: Some("#ff0066".into()), ..Theme::default() };
    let merged = theme.merge(&Style::new());
    assert_eq!(merged["accentColor"], "#ff0066");
    assert_eq!(merged["fontFamily"], DEFAULT_FONT_FAMILY);
}

#[test]
fn deserializes_with_defaults() {
    let theme: Theme = serde_json::from_value(json!({ "textColor": "#000" })).unwrap();
    assert_eq!(theme.font_family, DEFAULT_FONT_FAMILY);
    assert_eq!(theme.text_color.as_deref(), Some("#000"));
}
