//! Skill matrix: members scored 0 to 5 on each named skill.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use blocks::PropKind;
use blocks::payload::{SkillMatrix, SkillMember};
use serde_json::Value;

use super::{Editor, Mirror, Preview, ScoreCell, ScoreRow, decode, remove_keeping_one};
use crate::consts::{
    SKILL_MAX, SKILL_MIN, SKILL_MODERATE, SKILL_MODERATE_COLOR, SKILL_STRONG, SKILL_STRONG_COLOR, SKILL_WEAK_COLOR,
};
use crate::control::ChangeFn;

const RANGE: (f64, f64) = (SKILL_MIN, SKILL_MAX);

/// At least one skill and one member; each member has exactly one clamped
/// score per skill.
#[must_use]
pub fn normalize(value: &Value) -> SkillMatrix {
    let mut matrix: SkillMatrix = decode(value, "skill matrix");
    conform(&mut matrix);
    matrix
}

fn conform(matrix: &mut SkillMatrix) {
    if matrix.skills.is_empty() {
        matrix.skills.push("Skill 1".to_owned());
    }
    if matrix.members.is_empty() {
        matrix.members.push(SkillMember { name: "Team Member".to_owned(), ..SkillMember::default() });
    }
    let skills = &matrix.skills;
    for member in &mut matrix.members {
        member.scores.retain(|skill, _| skills.contains(skill));
        for skill in skills {
            let score = member.scores.entry(skill.clone()).or_insert(0.0);
            *score = score.clamp(SKILL_MIN, SKILL_MAX);
        }
    }
}

#[must_use]
pub fn score_color(score: f64) -> &'static str {
    if score >= SKILL_STRONG {
        SKILL_STRONG_COLOR
    } else if score >= SKILL_MODERATE {
        SKILL_MODERATE_COLOR
    } else {
        SKILL_WEAK_COLOR
    }
}

#[must_use]
pub fn preview(matrix: &SkillMatrix) -> Preview {
    Preview::ScoreTable {
        skills: matrix.skills.clone(),
        rows: matrix
            .members
            .iter()
            .map(|m| ScoreRow {
                name: m.name.clone(),
                cells: matrix
                    .skills
                    .iter()
                    .map(|skill| {
                        let score = m.scores.get(skill).copied().unwrap_or(0.0);
                        ScoreCell { score, color: score_color(score) }
                    })
                    .collect(),
            })
            .collect(),
    }
}

pub(crate) fn editor(value: &Value, on_replace: ChangeFn) -> Editor {
    let matrix = normalize(value);
    let preview = preview(&matrix);
    let mirror = Mirror::new(matrix.clone(), on_replace);

    let mut fields = vec![mirror.list("skills", "Skills", matrix.skills.clone(), |m: &mut SkillMatrix, skills| {
        m.skills = skills;
        conform(m);
    })];
    for (i, member) in matrix.members.iter().enumerate() {
        let prefix = format!("members.{i}");
        fields.push(mirror.text(&format!("{prefix}.name"), "Name", &member.name, move |m: &mut SkillMatrix, v| {
            if let Some(row) = m.members.get_mut(i) {
                row.name = v;
            }
        }));
        for skill in &matrix.skills {
            let score = member.scores.get(skill).copied().unwrap_or(0.0);
            let key = skill.clone();
            fields.push(mirror.number(
                &format!("{prefix}.scores.{skill}"),
                skill,
                score,
                RANGE,
                move |m: &mut SkillMatrix, v| {
                    if let Some(row) = m.members.get_mut(i) {
                        row.scores.insert(key.clone(), v);
                    }
                },
            ));
        }
    }
    fields.push(mirror.collection(
        "members",
        "Members",
        matrix.members.len(),
        |m: &mut SkillMatrix| {
            let name = format!("Team Member {}", m.members.len() + 1);
            m.members.push(SkillMember { name, ..SkillMember::default() });
            conform(m);
        },
        |m: &mut SkillMatrix, index| remove_keeping_one(&mut m.members, index),
    ));

    Editor { kind: PropKind::SkillMatrix, fields, preview, warnings: Vec::new() }
}
