//! Patch types. Every mutation of a block is a partial record merged into the
//! existing one; untouched fields survive.

#[cfg(test)]
#[path = "patch_test.rs"]
mod patch_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::block::Layout;

/// Partial `data`: keys to replace (a `null` value removes the key).
pub type DataPatch = Map<String, Value>;

/// Partial `style`: keys to replace (a `null` value removes the key).
pub type StylePatch = Map<String, Value>;

/// Sparse layout update. Only present fields are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i64>,
}

impl LayoutPatch {
    /// Patch carrying only a new position.
    #[must_use]
    pub fn position(x: f64, y: f64) -> Self {
        Self { x: Some(x), y: Some(y), ..Self::default() }
    }

    /// Fields of `after` that differ from `before`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn diff(before: &Layout, after: &Layout) -> Self {
        Self {
            x: (before.x != after.x).then_some(after.x),
            y: (before.y != after.y).then_some(after.y),
            width: (before.width != after.width).then_some(after.width),
            height: (before.height != after.height).then_some(after.height),
            z_index: (before.z_index != after.z_index).then_some(after.z_index),
        }
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.width.is_none() && self.height.is_none() && self.z_index.is_none()
    }

    /// Apply present fields to `layout`.
    pub fn apply_to(&self, layout: &mut Layout) {
        if let Some(x) = self.x {
            layout.x = x;
        }
        if let Some(y) = self.y {
            layout.y = y;
        }
        if let Some(w) = self.width {
            layout.width = w;
        }
        if let Some(h) = self.height {
            layout.height = h;
        }
        if let Some(z) = self.z_index {
            layout.z_index = z;
        }
    }
}

/// Shallow-merge `patch` into `target`. `null` values delete keys.
pub fn merge_object(target: &mut Map<String, Value>, patch: &Map<String, Value>) {
    for (k, v) in patch {
        if v.is_null() {
            target.remove(k);
        } else {
            target.insert(k.clone(), v.clone());
        }
    }
}

/// Shallow-merge `patch` into a JSON value, replacing non-objects with `{}` first.
pub fn merge_value(target: &mut Value, patch: &Map<String, Value>) {
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    if let Some(existing) = target.as_object_mut() {
        merge_object(existing, patch);
    }
}

/// `n` as a JSON number, written as an integer when it has no fractional
/// part. Non-finite input becomes `0`.
#[must_use]
pub fn number(n: f64) -> Value {
    match exact_int(n) {
        Some(int) => Value::from(int),
        None => serde_json::Number::from_f64(n).map_or_else(|| Value::from(0), Value::Number),
    }
}

/// Rewrite every whole float inside `value` as an integer.
pub fn compact_numbers(value: &mut Value) {
    let int = match value {
        Value::Array(items) => {
            items.iter_mut().for_each(compact_numbers);
            return;
        }
        Value::Object(map) => {
            map.values_mut().for_each(compact_numbers);
            return;
        }
        Value::Number(n) if n.is_f64() => n.as_f64().and_then(exact_int),
        _ => None,
    };
    if let Some(int) = int {
        *value = Value::from(int);
    }
}

// Integers past 2^53 are not exact in f64 anyway.
#[allow(clippy::cast_possible_truncation)]
fn exact_int(n: f64) -> Option<i64> {
    (n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0).then(|| n as i64)
}
