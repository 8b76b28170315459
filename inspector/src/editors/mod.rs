//! Specialized editors for structured data shapes.
//!
//! Each editor normalizes its value first: empty data becomes one placeholder
//! entry, so the live preview is never blank, and domain clamps are applied.
//! Normalizing an already-normalized value returns it unchanged. The editor
//! keeps a [`Mirror`] of the structure; every field change edits the mirror
//! and pushes the entire structure through the replace callback.

#[cfg(test)]
#[path = "mirror_test.rs"]
mod mirror_test;

pub mod chart;
pub mod competitors;
pub mod positioning;
pub mod segments;
pub mod skills;

use std::cell::RefCell;
use std::rc::Rc;

use blocks::patch::compact_numbers;
use blocks::{EditableProp, PropKind};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use crate::color::normalize_hex;
use crate::consts::SERIES_PALETTE;
use crate::control::{ChangeFn, CheckState, Control, ControlEvent, Handler, Widget, parse_number, split_list};

/// A specialized editor: its field controls plus a live preview.
#[derive(Debug, Serialize)]
pub struct Editor {
    pub kind: PropKind,
    pub fields: Vec<Control>,
    pub preview: Preview,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSeries {
    pub label: String,
    pub color: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotPoint {
    pub name: String,
    /// Pixels from the left of the preview box.
    pub px: f64,
    /// Pixels from the top of the preview box.
    pub py: f64,
    pub is_us: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    pub name: String,
    pub color: String,
    pub value: f64,
    /// Fraction of the stacked bar this segment occupies.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCell {
    pub score: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRow {
    pub name: String,
    pub cells: Vec<ScoreCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRow {
    pub name: String,
    pub is_us: bool,
    pub cells: Vec<bool>,
}

/// Simplified rendering of the structure being edited.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "preview", rename_all = "camelCase")]
pub enum Preview {
    Chart { labels: Vec<String>, series: Vec<PreviewSeries>, max: f64 },
    Scatter { width: f64, height: f64, x_axis: (String, String), y_axis: (String, String), points: Vec<PlotPoint> },
    StackedBar { total: f64, bars: Vec<Bar> },
    ScoreTable { skills: Vec<String>, rows: Vec<ScoreRow> },
    FeatureMatrix { features: Vec<String>, rows: Vec<FeatureRow> },
    None,
}

/// Build the specialized editor for `prop`.
#[must_use]
pub fn render(prop: &EditableProp, value: &Value, parent: &Map<String, Value>, on_replace: ChangeFn) -> Editor {
    match prop.kind {
        PropKind::ChartData => chart::editor(value, on_replace),
        PropKind::CompetitivePositioning => positioning::editor(value, on_replace),
        PropKind::MarketSegments => segments::editor(value, on_replace),
        PropKind::SkillMatrix => skills::editor(value, on_replace),
        PropKind::CompetitorFeatures => {
            let features = prop.sibling.as_deref().map_or_else(Vec::new, |s| sibling_strings(parent, s));
            competitors::editor(value, &features, on_replace)
        }
        _ => Editor {
            kind: prop.kind.clone(),
            fields: Vec::new(),
            preview: Preview::None,
            warnings: vec![format!("editor not available for type: {}", prop.kind.as_str())],
        },
    }
}

/// String items of a sibling array field on the parent object.
fn sibling_strings(parent: &Map<String, Value>, field: &str) -> Vec<String> {
    parent
        .get(field)
        .and_then(Value::as_array)
        .map_or_else(Vec::new, |a| a.iter().filter_map(Value::as_str).map(str::to_owned).collect())
}

/// Decode a structure leniently; `null` or a mismatched shape yields the default.
pub(crate) fn decode<T: DeserializeOwned + Default>(value: &Value, what: &str) -> T {
    if value.is_null() {
        return T::default();
    }
    match serde_json::from_value(value.clone()) {
        Ok(shape) => shape,
        Err(e) => {
            warn!(what, error = %e, "structured value does not decode; starting from empty");
            T::default()
        }
    }
}

/// Color for the `index`-th series or segment.
pub(crate) fn palette(index: usize) -> &'static str {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

/// Editable copy of a structure plus the callback that receives it whole.
pub(crate) struct Mirror<T> {
    state: Rc<RefCell<T>>,
    on_replace: ChangeFn,
}

impl<T: Serialize + 'static> Mirror<T> {
    pub(crate) fn new(initial: T, on_replace: ChangeFn) -> Self {
        Self { state: Rc::new(RefCell::new(initial)), on_replace }
    }

    /// Handler that applies an event to the mirror and, if it applied,
    /// pushes the whole structure upward.
    pub(crate) fn handler(&self, apply: impl Fn(&mut T, ControlEvent) -> bool + 'static) -> Handler {
        let state = self.state.clone();
        let on_replace = self.on_replace.clone();
        Rc::new(move |event: ControlEvent| {
            let applied = apply(&mut state.borrow_mut(), event);
            if !applied {
                return false;
            }
            match serde_json::to_value(&*state.borrow()) {
                Ok(mut value) => {
                    compact_numbers(&mut value);
                    on_replace(value);
                }
                Err(e) => {
                    warn!(error = %e, "structured value does not encode; change not pushed");
                    return false;
                }
            }
            true
        })
    }

    pub(crate) fn text(&self, name: &str, label: &str, value: &str, set: impl Fn(&mut T, String) + 'static) -> Control {
        let handler = self.handler(move |shape, event| match event {
            ControlEvent::Input(raw) => {
                set(shape, raw);
                true
            }
            _ => false,
        });
        Control::new(name, label, Widget::Input { input_type: "text", value: value.to_owned() }, handler)
    }

    /// Numeric field clamped to `[min, max]`; unparseable text is `0` before clamping.
    pub(crate) fn number(
        &self,
        name: &str,
        label: &str,
        value: f64,
        (min, max): (f64, f64),
        set: impl Fn(&mut T, f64) + 'static,
    ) -> Control {
        let handler = self.handler(move |shape, event| match event {
            ControlEvent::Input(raw) => {
                set(shape, parse_number(&raw).clamp(min, max));
                true
            }
            _ => false,
        });
        Control::new(name, label, Widget::Number { value }, handler)
    }

    pub(crate) fn color(&self, name: &str, label: &str, value: &str, set: impl Fn(&mut T, String) + 'static) -> Control {
        let current = value.to_owned();
        let handler = self.handler(move |shape, event| match event {
            ControlEvent::Input(raw) => {
                set(shape, normalize_hex(&raw, &current));
                true
            }
            _ => false,
        });
        Control::new(name, label, Widget::Color { value: value.to_owned() }, handler)
    }

    pub(crate) fn checkbox(&self, name: &str, label: &str, value: bool, set: impl Fn(&mut T, bool) + 'static) -> Control {
        let handler = self.handler(move |shape, event| match event {
            ControlEvent::Toggle(on) => {
                set(shape, on);
                true
            }
            _ => false,
        });
        let state = if value { CheckState::Checked } else { CheckState::Unchecked };
        Control::new(name, label, Widget::Checkbox { state }, handler)
    }

    pub(crate) fn list(
        &self,
        name: &str,
        label: &str,
        items: Vec<String>,
        set: impl Fn(&mut T, Vec<String>) + 'static,
    ) -> Control {
        let handler = self.handler(move |shape, event| match event {
            ControlEvent::Input(raw) => {
                set(shape, split_list(&raw));
                true
            }
            _ => false,
        });
        Control::new(name, label, Widget::StringList { value: items.join(", "), items }, handler)
    }

    /// Add/remove rows. `remove` returns `false` to refuse (e.g. last row).
    pub(crate) fn collection(
        &self,
        name: &str,
        label: &str,
        len: usize,
        add: impl Fn(&mut T) + 'static,
        remove: impl Fn(&mut T, usize) -> bool + 'static,
    ) -> Control {
        let handler = self.handler(move |shape, event| match event {
            ControlEvent::Add => {
                add(shape);
                true
            }
            ControlEvent::Remove(index) => remove(shape, index),
            _ => false,
        });
        Control::new(name, label, Widget::Collection { len }, handler)
    }
}

/// Remove `index` from `rows` unless it is out of range or the last row.
pub(crate) fn remove_keeping_one<R>(rows: &mut Vec<R>, index: usize) -> bool {
    if index >= rows.len() || rows.len() == 1 {
        return false;
    }
    rows.remove(index);
    true
}
