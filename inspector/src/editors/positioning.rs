//! Competitive positioning: named points on two normalized axes.

#[cfg(test)]
#[path = "positioning_test.rs"]
mod positioning_test;

use blocks::PropKind;
use blocks::payload::{AxisLabels, PositionPoint, Positioning};
use serde_json::Value;

use super::{Editor, Mirror, PlotPoint, Preview, decode, remove_keeping_one};
use crate::consts::{POSITION_MAX, POSITION_MIN, SCATTER_PREVIEW_HEIGHT, SCATTER_PREVIEW_WIDTH};
use crate::control::ChangeFn;

const RANGE: (f64, f64) = (POSITION_MIN, POSITION_MAX);

fn axis(low: &str, high: &str) -> AxisLabels {
    AxisLabels { low: low.to_owned(), high: high.to_owned() }
}

fn us() -> PositionPoint {
    PositionPoint { name: "Your Company".to_owned(), x: 0.5, y: 0.5, is_us: true }
}

/// Axis captions filled in, at least one point, coordinates within `[0, 1]`.
#[must_use]
pub fn normalize(value: &Value) -> Positioning {
    let mut positioning: Positioning = decode(value, "competitive positioning");
    if positioning.x_axis.low.is_empty() && positioning.x_axis.high.is_empty() {
        positioning.x_axis = axis("Low Price", "High Price");
    }
    if positioning.y_axis.low.is_empty() && positioning.y_axis.high.is_empty() {
        positioning.y_axis = axis("Low Quality", "High Quality");
    }
    if positioning.points.is_empty() {
        positioning.points.push(us());
    }
    for p in &mut positioning.points {
        p.x = p.x.clamp(POSITION_MIN, POSITION_MAX);
        p.y = p.y.clamp(POSITION_MIN, POSITION_MAX);
    }
    positioning
}

/// Map a normalized point into the preview box; `y` grows upward.
#[must_use]
pub fn to_preview(x: f64, y: f64) -> (f64, f64) {
    (x * SCATTER_PREVIEW_WIDTH, (1.0 - y) * SCATTER_PREVIEW_HEIGHT)
}

#[must_use]
pub fn preview(positioning: &Positioning) -> Preview {
    Preview::Scatter {
        width: SCATTER_PREVIEW_WIDTH,
        height: SCATTER_PREVIEW_HEIGHT,
        x_axis: (positioning.x_axis.low.clone(), positioning.x_axis.high.clone()),
        y_axis: (positioning.y_axis.low.clone(), positioning.y_axis.high.clone()),
        points: positioning
            .points
            .iter()
            .map(|p| {
                let (px, py) = to_preview(p.x, p.y);
                PlotPoint { name: p.name.clone(), px, py, is_us: p.is_us }
            })
            .collect(),
    }
}

pub(crate) fn editor(value: &Value, on_replace: ChangeFn) -> Editor {
    let positioning = normalize(value);
    let preview = preview(&positioning);
    let mirror = Mirror::new(positioning.clone(), on_replace);

    let mut fields = vec![
        mirror.text("xAxis.low", "X Axis Low", &positioning.x_axis.low, |p: &mut Positioning, v| p.x_axis.low = v),
        mirror.text("xAxis.high", "X Axis High", &positioning.x_axis.high, |p: &mut Positioning, v| p.x_axis.high = v),
        mirror.text("yAxis.low", "Y Axis Low", &positioning.y_axis.low, |p: &mut Positioning, v| p.y_axis.low = v),
        mirror.text("yAxis.high", "Y Axis High", &positioning.y_axis.high, |p: &mut Positioning, v| p.y_axis.high = v),
    ];
    for (i, point) in positioning.points.iter().enumerate() {
        let prefix = format!("points.{i}");
        fields.push(mirror.text(&format!("{prefix}.name"), "Name", &point.name, move |p: &mut Positioning, v| {
            if let Some(pt) = p.points.get_mut(i) {
                pt.name = v;
            }
        }));
        fields.push(mirror.number(&format!("{prefix}.x"), "X", point.x, RANGE, move |p: &mut Positioning, v| {
            if let Some(pt) = p.points.get_mut(i) {
                pt.x = v;
            }
        }));
        fields.push(mirror.number(&format!("{prefix}.y"), "Y", point.y, RANGE, move |p: &mut Positioning, v| {
            if let Some(pt) = p.points.get_mut(i) {
                pt.y = v;
            }
        }));
        fields.push(mirror.checkbox(&format!("{prefix}.isUs"), "Us", point.is_us, move |p: &mut Positioning, v| {
            if let Some(pt) = p.points.get_mut(i) {
                pt.is_us = v;
            }
        }));
    }
    fields.push(mirror.collection(
        "points",
        "Points",
        positioning.points.len(),
        |p: &mut Positioning| {
            let name = format!("Competitor {}", p.points.len());
            p.points.push(PositionPoint { name, x: 0.5, y: 0.5, is_us: false });
        },
        |p: &mut Positioning, index| remove_keeping_one(&mut p.points, index),
    ));

    Editor { kind: PropKind::CompetitivePositioning, fields, preview, warnings: Vec::new() }
}
