//! Competitor feature toggles. The feature names come from a sibling field
//! of the block, not from the competitors value itself.

#[cfg(test)]
#[path = "competitors_test.rs"]
mod competitors_test;

use blocks::PropKind;
use blocks::payload::Competitor;
use serde_json::Value;

use super::{Editor, FeatureRow, Mirror, Preview, decode, remove_keeping_one};
use crate::control::ChangeFn;

/// At least one competitor (ourselves); each has exactly one toggle per feature.
#[must_use]
pub fn normalize(value: &Value, features: &[String]) -> Vec<Competitor> {
    let mut competitors: Vec<Competitor> = decode(value, "competitors");
    if competitors.is_empty() {
        competitors.push(Competitor { name: "Your Company".to_owned(), is_us: true, ..Competitor::default() });
    }
    for c in &mut competitors {
        conform(c, features);
    }
    competitors
}

fn conform(competitor: &mut Competitor, features: &[String]) {
    competitor.features.retain(|f, _| features.contains(f));
    for f in features {
        competitor.features.entry(f.clone()).or_insert(false);
    }
}

#[must_use]
pub fn preview(competitors: &[Competitor], features: &[String]) -> Preview {
    Preview::FeatureMatrix {
        features: features.to_vec(),
        rows: competitors
            .iter()
            .map(|c| FeatureRow {
                name: c.name.clone(),
                is_us: c.is_us,
                cells: features.iter().map(|f| c.features.get(f).copied().unwrap_or(false)).collect(),
            })
            .collect(),
    }
}

pub(crate) fn editor(value: &Value, features: &[String], on_replace: ChangeFn) -> Editor {
    let competitors = normalize(value, features);
    let preview = preview(&competitors, features);
    let mirror = Mirror::new(competitors.clone(), on_replace);

    let mut fields = Vec::new();
    for (i, competitor) in competitors.iter().enumerate() {
        let prefix = format!("competitors.{i}");
        fields.push(mirror.text(&format!("{prefix}.name"), "Name", &competitor.name, move |c: &mut Vec<Competitor>, v| {
            if let Some(row) = c.get_mut(i) {
                row.name = v;
            }
        }));
        fields.push(mirror.checkbox(&format!("{prefix}.isUs"), "Us", competitor.is_us, move |c: &mut Vec<Competitor>, v| {
            if let Some(row) = c.get_mut(i) {
                row.is_us = v;
            }
        }));
        for feature in features {
            let has = competitor.features.get(feature).copied().unwrap_or(false);
            let key = feature.clone();
            fields.push(mirror.checkbox(
                &format!("{prefix}.features.{feature}"),
                feature,
                has,
                move |c: &mut Vec<Competitor>, v| {
                    if let Some(row) = c.get_mut(i) {
                        row.features.insert(key.clone(), v);
                    }
                },
            ));
        }
    }
    let known = features.to_vec();
    fields.push(mirror.collection(
        "competitors",
        "Competitors",
        competitors.len(),
        move |c: &mut Vec<Competitor>| {
            let mut next = Competitor { name: format!("Competitor {}", c.len()), ..Competitor::default() };
            conform(&mut next, &known);
            c.push(next);
        },
        |c: &mut Vec<Competitor>, index| remove_keeping_one(c, index),
    ));

    Editor { kind: PropKind::CompetitorFeatures, fields, preview, warnings: Vec::new() }
}
