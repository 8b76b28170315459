//! Hex color normalization for color swatches.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Parse `#RGB` or `#RRGGBB` into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => Some((
            channel(&hex[0..1].repeat(2))?,
            channel(&hex[1..2].repeat(2))?,
            channel(&hex[2..3].repeat(2))?,
        )),
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

fn channel(pair: &str) -> Option<u8> {
    match u8::from_str_radix(pair, 16) {
        Ok(v) => Some(v),
        Err(_) => None,
    }
}

/// Canonical lowercase `#rrggbb` for `value`, or for `fallback` when `value`
/// does not parse. Black when neither parses.
#[must_use]
pub fn normalize_hex(value: &str, fallback: &str) -> String {
    let (r, g, b) = parse_hex_rgb(value).or_else(|| parse_hex_rgb(fallback)).unwrap_or((0, 0, 0));
    format!("#{r:02x}{g:02x}{b:02x}")
}
