//! Chart series editor: labels plus one or more datasets.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use blocks::PropKind;
use blocks::payload::{ChartDataset, ChartSeries};
use serde_json::Value;

use super::{Editor, Mirror, Preview, PreviewSeries, decode, palette, remove_keeping_one};
use crate::control::{ChangeFn, parse_number};

const DEFAULT_LABEL: &str = "Q1";

fn dataset(index: usize, len: usize) -> ChartDataset {
    ChartDataset { label: format!("Series {}", index + 1), data: vec![0.0; len], color: palette(index).to_owned() }
}

/// At least one label and one dataset; every dataset has a value per label.
#[must_use]
pub fn normalize(value: &Value) -> ChartSeries {
    let mut series: ChartSeries = decode(value, "chart data");
    conform(&mut series);
    series
}

fn conform(series: &mut ChartSeries) {
    if series.labels.is_empty() {
        series.labels.push(DEFAULT_LABEL.to_owned());
    }
    if series.datasets.is_empty() {
        series.datasets.push(dataset(0, 0));
    }
    let len = series.labels.len();
    for (i, ds) in series.datasets.iter_mut().enumerate() {
        if ds.data.len() < len {
            ds.data.resize(len, 0.0);
        }
        if ds.color.is_empty() {
            palette(i).clone_into(&mut ds.color);
        }
    }
}

#[must_use]
pub fn preview(series: &ChartSeries) -> Preview {
    let max = series.datasets.iter().flat_map(|d| d.data.iter().copied()).fold(0.0_f64, f64::max);
    Preview::Chart {
        labels: series.labels.clone(),
        series: series
            .datasets
            .iter()
            .map(|d| PreviewSeries { label: d.label.clone(), color: d.color.clone(), values: d.data.clone() })
            .collect(),
        max,
    }
}

pub(crate) fn editor(value: &Value, on_replace: ChangeFn) -> Editor {
    let series = normalize(value);
    let preview = preview(&series);
    let mirror = Mirror::new(series.clone(), on_replace);

    let mut fields = vec![mirror.list("labels", "Labels", series.labels.clone(), |s: &mut ChartSeries, labels| {
        s.labels = labels;
        conform(s);
    })];
    for (i, ds) in series.datasets.iter().enumerate() {
        let prefix = format!("datasets.{i}");
        fields.push(mirror.text(&format!("{prefix}.label"), "Series", &ds.label, move |s: &mut ChartSeries, v| {
            if let Some(d) = s.datasets.get_mut(i) {
                d.label = v;
            }
        }));
        fields.push(mirror.color(&format!("{prefix}.color"), "Color", &ds.color, move |s: &mut ChartSeries, v| {
            if let Some(d) = s.datasets.get_mut(i) {
                d.color = v;
            }
        }));
        let values = ds.data.iter().map(f64::to_string).collect();
        fields.push(mirror.list(&format!("{prefix}.data"), "Values", values, move |s: &mut ChartSeries, items| {
            if let Some(d) = s.datasets.get_mut(i) {
                d.data = items.iter().map(|v| parse_number(v)).collect();
            }
            conform(s);
        }));
    }
    fields.push(mirror.collection(
        "datasets",
        "Datasets",
        series.datasets.len(),
        |s: &mut ChartSeries| {
            let next = dataset(s.datasets.len(), s.labels.len());
            s.datasets.push(next);
        },
        |s: &mut ChartSeries, index| remove_keeping_one(&mut s.datasets, index),
    ));

    Editor { kind: PropKind::ChartData, fields, preview, warnings: Vec::new() }
}
