use super::*;

#[test]
fn short_form_expands_each_digit() {
    assert_eq!(parse_hex_rgb("#f0a"), Some((255, 0, 170)));
}

#[test]
fn long_form_ignores_case_and_whitespace() {
    assert_eq!(parse_hex_rgb(" #3B82f6\n"), Some((59, 130, 246)));
}

#[test]
fn missing_hash_or_wrong_length_is_none() {
    for raw in ["3b82f6", "#", "#1234", "#3b82f6ff", "#zzz"] {
        assert_eq!(parse_hex_rgb(raw), None, "{raw}");
    }
}

#[test]
fn multibyte_input_is_none() {
    assert_eq!(parse_hex_rgb("#éé"), None);
}

#[test]
fn swatch_value_is_canonical() {
    assert_eq!(normalize_hex("#F0A", FALLBACK), "#ff00aa");
    assert_eq!(normalize_hex("#10B981", FALLBACK), "#10b981");
}

#[test]
fn unparseable_uses_current_then_black() {
    assert_eq!(normalize_hex("teal", "#10b981"), "#10b981");
    assert_eq!(normalize_hex("teal", "also bad"), "#000000");
}

const FALLBACK: &str = "#000000";
