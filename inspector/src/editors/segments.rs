//! Market segments: named percentage shares shown as one stacked bar.
//!
//! Shares are not required to total 100; a differing total is reported as a
//! warning only.

#[cfg(test)]
#[path = "segments_test.rs"]
mod segments_test;

use blocks::PropKind;
use blocks::payload::MarketSegment;
use serde_json::Value;

use super::{Bar, Editor, Mirror, Preview, decode, palette, remove_keeping_one};
use crate::consts::{SEGMENT_MAX, SEGMENT_MIN, SEGMENT_TARGET_TOTAL};
use crate::control::ChangeFn;

const RANGE: (f64, f64) = (SEGMENT_MIN, SEGMENT_MAX);

/// At least one segment; every value within `[0, 100]`; every segment colored.
#[must_use]
pub fn normalize(value: &Value) -> Vec<MarketSegment> {
    let mut segments: Vec<MarketSegment> = decode(value, "market segments");
    if segments.is_empty() {
        segments.push(MarketSegment {
            name: "Segment 1".to_owned(),
            value: SEGMENT_TARGET_TOTAL,
            color: palette(0).to_owned(),
        });
    }
    for (i, s) in segments.iter_mut().enumerate() {
        s.value = s.value.clamp(SEGMENT_MIN, SEGMENT_MAX);
        if s.color.is_empty() {
            palette(i).clone_into(&mut s.color);
        }
    }
    segments
}

#[must_use]
pub fn total(segments: &[MarketSegment]) -> f64 {
    segments.iter().map(|s| s.value).sum()
}

/// Advisory message when the shares do not total 100.
#[must_use]
pub fn sum_warning(segments: &[MarketSegment]) -> Option<String> {
    let total = total(segments);
    ((total - SEGMENT_TARGET_TOTAL).abs() > 1e-9).then(|| format!("segments total {total}%, expected 100%"))
}

#[must_use]
pub fn preview(segments: &[MarketSegment]) -> Preview {
    let total = total(segments);
    Preview::StackedBar {
        total,
        bars: segments
            .iter()
            .map(|s| Bar {
                name: s.name.clone(),
                color: s.color.clone(),
                value: s.value,
                share: if total > 0.0 { s.value / total } else { 0.0 },
            })
            .collect(),
    }
}

pub(crate) fn editor(value: &Value, on_replace: ChangeFn) -> Editor {
    let segments = normalize(value);
    let preview = preview(&segments);
    let warnings = sum_warning(&segments).into_iter().collect();
    let mirror = Mirror::new(segments.clone(), on_replace);

    let mut fields = Vec::new();
    for (i, segment) in segments.iter().enumerate() {
        let prefix = format!("segments.{i}");
        fields.push(mirror.text(&format!("{prefix}.name"), "Name", &segment.name, move |s: &mut Vec<MarketSegment>, v| {
            if let Some(seg) = s.get_mut(i) {
                seg.name = v;
            }
        }));
        fields.push(mirror.number(
            &format!("{prefix}.value"),
            "Share (%)",
            segment.value,
            RANGE,
            move |s: &mut Vec<MarketSegment>, v| {
                if let Some(seg) = s.get_mut(i) {
                    seg.value = v;
                }
            },
        ));
        fields.push(mirror.color(&format!("{prefix}.color"), "Color", &segment.color, move |s: &mut Vec<MarketSegment>, v| {
            if let Some(seg) = s.get_mut(i) {
                seg.color = v;
            }
        }));
    }
    fields.push(mirror.collection(
        "segments",
        "Segments",
        segments.len(),
        |s: &mut Vec<MarketSegment>| {
            let n = s.len();
            s.push(MarketSegment { name: format!("Segment {}", n + 1), value: 0.0, color: palette(n).to_owned() });
        },
        |s: &mut Vec<MarketSegment>, index| remove_keeping_one(s, index),
    ));

    Editor { kind: PropKind::MarketSegments, fields, preview, warnings }
}
