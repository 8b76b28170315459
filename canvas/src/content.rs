//! Content dispatch: one exhaustive `match` from block payload to a
//! [`Content`] view. Adding a block type fails to compile until it has an
//! arm here.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use blocks::payload::*;
use blocks::{BlockData, Unrecognized};
use serde::Serialize;
use tracing::warn;

/// Label shown on the fallback panel for types the canvas cannot draw.
pub const UNSUPPORTED_LABEL: &str = "unsupported component type";

/// A captioned tile used by card-like and grid-like content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub body: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub src: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub is_us: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub name: String,
    pub value: f64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub label: String,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

/// What to draw inside a block's frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Content {
    RichText { text: String },
    Heading { text: String, level: String },
    Quote { text: String, attribution: String },
    Callout { title: String, body: String, tone: String },
    List { title: String, ordered: bool, items: Vec<ListItem> },
    Button { label: String, url: String, variant: String },
    Code { code: String, language: String },
    #[serde(rename_all = "camelCase")]
    Shape { shape: String, fill: String, stroke: String, stroke_width: f64 },
    Icon { name: String, color: String },
    Image { src: String, alt: String, caption: String },
    Media { media: String, source: String, title: String },
    Gallery { title: String, columns: u32, figures: Vec<Figure> },
    #[serde(rename_all = "camelCase")]
    Chart { chart_type: String, labels: Vec<String>, series: Vec<Series> },
    Metric { label: String, value: String, detail: String },
    Progress { label: String, fraction: f64 },
    #[serde(rename_all = "camelCase")]
    Table { headers: Vec<String>, rows: Vec<Vec<String>>, highlight_row: Option<usize> },
    Card(Card),
    Grid { title: String, columns: u32, cards: Vec<Card> },
    #[serde(rename_all = "camelCase")]
    Scatter { x_axis: [String; 2], y_axis: [String; 2], points: Vec<ScatterPoint> },
    Segments { title: String, segments: Vec<Segment> },
    Timeline { entries: Vec<TimelineEntry> },
    /// Fallback for unknown or undecodable data. `raw` is the payload as text.
    Unsupported { label: String, tag: String, raw: String },
}

/// Dispatch a payload to its content view. Never fails.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn render_content(data: &BlockData) -> Content {
    match data {
        BlockData::Text(d) => Content::RichText { text: d.content.clone() },
        BlockData::Heading(d) => Content::Heading { text: d.text.clone(), level: or(&d.level, "h2") },
        BlockData::Quote(d) => Content::Quote { text: d.text.clone(), attribution: attribution(&d.author, &d.role) },
        BlockData::CalloutBox(d) => {
            Content::Callout { title: d.title.clone(), body: d.body.clone(), tone: or(&d.tone, "info") }
        }
        BlockData::List(d) => Content::List {
            title: String::new(),
            ordered: d.ordered,
            items: d.items.iter().map(|t| ListItem { text: t.clone(), checked: None }).collect(),
        },
        BlockData::Checklist(d) => Content::List {
            title: d.title.clone(),
            ordered: false,
            items: d.items.iter().map(|i| ListItem { text: i.text.clone(), checked: Some(i.checked) }).collect(),
        },
        BlockData::Button(d) => {
            Content::Button { label: d.label.clone(), url: d.url.clone(), variant: or(&d.variant, "primary") }
        }
        BlockData::CallToAction(d) => Content::Card(Card {
            title: d.headline.clone(),
            body: d.subtext.clone(),
            bullets: non_empty([d.button_label.as_str()]),
            highlight: true,
            ..Card::default()
        }),
        BlockData::CodeBlock(d) => Content::Code { code: d.code.clone(), language: d.language.clone() },
        BlockData::Divider(d) => Content::Shape {
            shape: format!("line:{}", or(&d.line_style, "solid")),
            fill: String::new(),
            stroke: d.color.clone(),
            stroke_width: positive_or(d.thickness, 1.0),
        },
        BlockData::Shape(d) => Content::Shape {
            shape: or(&d.shape, "rectangle"),
            fill: d.fill.clone(),
            stroke: d.stroke.clone(),
            stroke_width: d.stroke_width,
        },
        BlockData::Icon(d) => Content::Icon { name: d.name.clone(), color: d.color.clone() },
        BlockData::Image(d) => Content::Image { src: d.src.clone(), alt: d.alt.clone(), caption: d.caption.clone() },
        BlockData::Video(d) => Content::Media { media: "video".into(), source: d.url.clone(), title: String::new() },
        BlockData::Embed(d) => Content::Media { media: "embed".into(), source: d.html.clone(), title: d.title.clone() },
        BlockData::Gallery(d) => Content::Gallery {
            title: String::new(),
            columns: columns(d.columns, 3),
            figures: d.images.iter().map(|i| Figure { src: i.src.clone(), caption: i.caption.clone() }).collect(),
        },
        BlockData::LogoCloud(d) => Content::Gallery {
            title: d.title.clone(),
            columns: columns(0.0, 5),
            figures: d.logos.iter().map(|l| Figure { src: l.src.clone(), caption: l.name.clone() }).collect(),
        },
        BlockData::Chart(d) => Content::Chart {
            chart_type: or(&d.chart_type, "bar"),
            labels: d.data.labels.clone(),
            series: d
                .data
                .datasets
                .iter()
                .map(|s| Series { label: s.label.clone(), values: s.data.clone(), color: s.color.clone() })
                .collect(),
        },
        BlockData::MetricCounter(d) => Content::Metric {
            label: d.label.clone(),
            value: format!("{}{}{}", d.prefix, format_number(d.value), d.suffix),
            detail: d.trend.clone(),
        },
        BlockData::Statistic(d) => {
            Content::Metric { label: d.label.clone(), value: d.value.clone(), detail: d.description.clone() }
        }
        BlockData::ProgressBar(d) => Content::Progress { label: d.label.clone(), fraction: fraction(d.value, d.max) },
        BlockData::Table(d) => Content::Table {
            headers: d.headers.clone(),
            rows: d.rows.iter().map(|r| r.cells.clone()).collect(),
            highlight_row: None,
        },
        BlockData::TractionMetrics(d) => Content::Grid {
            title: d.title.clone(),
            columns: columns(0.0, 3),
            cards: d
                .metrics
                .iter()
                .map(|m| Card { title: m.value.clone(), subtitle: m.label.clone(), body: m.trend.clone(), ..Card::default() })
                .collect(),
        },
        BlockData::UnitEconomics(d) => unit_economics(d),
        BlockData::RevenueProjection(d) => Content::Chart {
            chart_type: "bar".into(),
            labels: d.years.iter().map(|y| y.year.clone()).collect(),
            series: vec![
                Series { label: "Revenue".into(), values: d.years.iter().map(|y| y.revenue).collect(), color: String::new() },
                Series { label: "Expenses".into(), values: d.years.iter().map(|y| y.expenses).collect(), color: String::new() },
            ],
        },
        BlockData::Countdown(d) => {
            Content::Metric { label: d.label.clone(), value: d.target_date.clone(), detail: String::new() }
        }
        BlockData::TeamCard(d) => Content::Card(Card {
            title: d.name.clone(),
            subtitle: d.role.clone(),
            body: d.bio.clone(),
            image: d.photo.clone(),
            ..Card::default()
        }),
        BlockData::TeamGrid(d) => Content::Grid {
            title: d.title.clone(),
            columns: columns(0.0, 4),
            cards: d
                .members
                .iter()
                .map(|m| Card { title: m.name.clone(), subtitle: m.role.clone(), image: m.photo.clone(), ..Card::default() })
                .collect(),
        },
        BlockData::SkillMatrix(d) => skill_table(&d.matrix),
        BlockData::InvestorList(d) => Content::Grid {
            title: d.title.clone(),
            columns: columns(0.0, 4),
            cards: d
                .investors
                .iter()
                .map(|i| Card {
                    title: i.name.clone(),
                    subtitle: i.tier.clone(),
                    image: i.logo.clone(),
                    highlight: i.tier == "lead",
                    ..Card::default()
                })
                .collect(),
        },
        BlockData::Testimonial(d) => {
            Content::Quote { text: d.quote.clone(), attribution: attribution(&d.author, &d.company) }
        }
        BlockData::CustomerPersona(d) => Content::Card(Card {
            title: d.name.clone(),
            subtitle: persona_subtitle(d),
            image: d.avatar.clone(),
            bullets: d.goals.iter().chain(&d.pain_points).cloned().collect(),
            ..Card::default()
        }),
        BlockData::CompetitorTable(d) => competitor_table(d),
        BlockData::CompetitivePositioning(d) => Content::Scatter {
            x_axis: [d.positioning.x_axis.low.clone(), d.positioning.x_axis.high.clone()],
            y_axis: [d.positioning.y_axis.low.clone(), d.positioning.y_axis.high.clone()],
            points: d
                .positioning
                .points
                .iter()
                .map(|p| ScatterPoint {
                    name: p.name.clone(),
                    x: p.x.clamp(0.0, 1.0),
                    y: p.y.clamp(0.0, 1.0),
                    is_us: p.is_us,
                })
                .collect(),
        },
        BlockData::MarketSegments(d) => Content::Segments {
            title: d.title.clone(),
            segments: d
                .segments
                .iter()
                .map(|s| Segment { name: s.name.clone(), value: s.value, color: s.color.clone() })
                .collect(),
        },
        BlockData::MarketSize(d) => Content::Grid {
            title: String::new(),
            columns: 3,
            cards: [("TAM", d.tam), ("SAM", d.sam), ("SOM", d.som)]
                .into_iter()
                .map(|(label, v)| Card {
                    title: format!("{}{}{}", currency_symbol(&d.currency), format_number(v), d.unit),
                    subtitle: label.to_owned(),
                    ..Card::default()
                })
                .collect(),
        },
        BlockData::SwotAnalysis(d) => Content::Grid {
            title: String::new(),
            columns: 2,
            cards: [
                ("Strengths", &d.strengths),
                ("Weaknesses", &d.weaknesses),
                ("Opportunities", &d.opportunities),
                ("Threats", &d.threats),
            ]
            .into_iter()
            .map(|(title, items)| Card { title: title.to_owned(), bullets: items.clone(), ..Card::default() })
            .collect(),
        },
        BlockData::FeatureCard(d) => Content::Card(Card {
            title: d.title.clone(),
            body: d.description.clone(),
            icon: d.icon.clone(),
            ..Card::default()
        }),
        BlockData::FeatureGrid(d) => Content::Grid {
            title: d.title.clone(),
            columns: columns(d.columns, 3),
            cards: d
                .features
                .iter()
                .map(|f| Card {
                    title: f.title.clone(),
                    body: f.description.clone(),
                    icon: f.icon.clone(),
                    ..Card::default()
                })
                .collect(),
        },
        BlockData::ProblemStatement(d) => Content::Card(Card {
            title: "Problem".into(),
            subtitle: d.impact.clone(),
            body: d.problem.clone(),
            bullets: d.evidence.clone(),
            ..Card::default()
        }),
        BlockData::SolutionCard(d) => Content::Card(Card {
            title: d.title.clone(),
            body: d.description.clone(),
            bullets: d.benefits.clone(),
            ..Card::default()
        }),
        BlockData::ProductShowcase(d) => Content::Card(Card {
            title: d.name.clone(),
            subtitle: d.tagline.clone(),
            image: d.image.clone(),
            bullets: d.highlights.clone(),
            ..Card::default()
        }),
        BlockData::BusinessModel(d) => Content::Grid {
            title: d.pricing_model.clone(),
            columns: 2,
            cards: vec![
                Card { title: "Revenue Streams".into(), bullets: d.revenue_streams.clone(), ..Card::default() },
                Card { title: "Cost Structure".into(), bullets: d.cost_structure.clone(), ..Card::default() },
            ],
        },
        BlockData::PricingTable(d) => Content::Grid {
            title: String::new(),
            columns: columns(0.0, 3),
            cards: d
                .tiers
                .iter()
                .map(|t| Card {
                    title: t.name.clone(),
                    subtitle: if t.period.is_empty() { t.price.clone() } else { format!("{} / {}", t.price, t.period) },
                    bullets: t.features.clone(),
                    highlight: t.highlighted,
                    ..Card::default()
                })
                .collect(),
        },
        BlockData::FundingAsk(d) => Content::Card(Card {
            title: format!("{}{}", currency_symbol(&d.currency), format_number(d.amount)),
            subtitle: d.round.clone(),
            bullets: d.use_of_funds.iter().map(|f| format!("{}: {}%", f.category, format_number(f.percent))).collect(),
            highlight: true,
            ..Card::default()
        }),
        BlockData::Timeline(d) => Content::Timeline {
            entries: d
                .events
                .iter()
                .map(|e| TimelineEntry {
                    label: e.date.clone(),
                    title: e.title.clone(),
                    detail: e.description.clone(),
                    done: None,
                })
                .collect(),
        },
        BlockData::Roadmap(d) => Content::Timeline {
            entries: d
                .milestones
                .iter()
                .map(|m| TimelineEntry {
                    label: m.quarter.clone(),
                    title: m.title.clone(),
                    detail: m.deliverables.iter().map(|x| x.text.as_str()).collect::<Vec<_>>().join(", "),
                    done: Some(m.done),
                })
                .collect(),
        },
        BlockData::ContactInfo(d) => Content::List {
            title: String::new(),
            ordered: false,
            items: non_empty([d.email.as_str(), d.phone.as_str(), d.website.as_str(), d.address.as_str()])
                .into_iter()
                .map(|text| ListItem { text, checked: None })
                .collect(),
        },
        BlockData::SocialLinks(d) => Content::List {
            title: String::new(),
            ordered: false,
            items: d
                .links
                .iter()
                .map(|l| ListItem { text: format!("{}: {}", l.platform, l.url), checked: None })
                .collect(),
        },
        BlockData::Unrecognized(u) => unsupported(u),
    }
}

fn unsupported(u: &Unrecognized) -> Content {
    warn!(tag = %u.tag, "rendering unsupported block");
    let raw = match serde_json::to_string_pretty(&u.raw) {
        Ok(text) => text,
        Err(e) => format!("<unprintable: {e}>"),
    };
    Content::Unsupported { label: UNSUPPORTED_LABEL.to_owned(), tag: u.tag.clone(), raw }
}

fn unit_economics(d: &UnitEconomicsData) -> Content {
    let sym = currency_symbol(&d.currency);
    let ratio = if d.cac > 0.0 { format!("{:.1}x", d.ltv / d.cac) } else { "n/a".to_owned() };
    Content::Table {
        headers: vec!["Metric".into(), "Value".into()],
        rows: vec![
            vec!["CAC".into(), format!("{sym}{}", format_number(d.cac))],
            vec!["LTV".into(), format!("{sym}{}", format_number(d.ltv))],
            vec!["LTV:CAC".into(), ratio],
            vec!["Payback".into(), format!("{} months", format_number(d.payback_months))],
            vec!["Gross Margin".into(), format!("{}%", format_number(d.gross_margin))],
        ],
        highlight_row: None,
    }
}

fn skill_table(matrix: &SkillMatrix) -> Content {
    let mut headers = vec![String::new()];
    headers.extend(matrix.skills.iter().cloned());
    let rows = matrix
        .members
        .iter()
        .map(|m| {
            let mut row = vec![m.name.clone()];
            row.extend(matrix.skills.iter().map(|s| format_number(m.scores.get(s).copied().unwrap_or(0.0))));
            row
        })
        .collect();
    Content::Table { headers, rows, highlight_row: None }
}

fn competitor_table(d: &CompetitorTableData) -> Content {
    let mut headers = vec![String::new()];
    headers.extend(d.features.iter().cloned());
    let rows = d
        .competitors
        .iter()
        .map(|c| {
            let mut row = vec![c.name.clone()];
            row.extend(d.features.iter().map(|f| {
                if c.features.get(f).copied().unwrap_or(false) { "✓".to_owned() } else { "✗".to_owned() }
            }));
            row
        })
        .collect();
    let highlight_row = if d.highlight_us { d.competitors.iter().position(|c| c.is_us) } else { None };
    Content::Table { headers, rows, highlight_row }
}

fn persona_subtitle(d: &CustomerPersonaData) -> String {
    if d.age > 0.0 { format!("{}, {}", d.occupation, format_number(d.age)) } else { d.occupation.clone() }
}

fn attribution(name: &str, context: &str) -> String {
    match (name.is_empty(), context.is_empty()) {
        (true, _) => String::new(),
        (false, true) => name.to_owned(),
        (false, false) => format!("{name}, {context}"),
    }
}

fn or(value: &str, fallback: &str) -> String {
    if value.is_empty() { fallback.to_owned() } else { value.to_owned() }
}

fn non_empty<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    values.into_iter().filter(|v| !v.is_empty()).map(str::to_owned).collect()
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { fallback }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn columns(value: f64, fallback: u32) -> u32 {
    if value.is_finite() && value >= 1.0 { value.min(12.0) as u32 } else { fallback }
}

/// `value / max` clamped to `[0, 1]`; `0` when `max` is not positive.
#[must_use]
pub fn fraction(value: f64, max: f64) -> f64 {
    if !(max.is_finite() && max > 0.0 && value.is_finite()) {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}

fn currency_symbol(code: &str) -> &'static str {
    match code {
        "EUR" => "€",
        "GBP" => "£",
        "USD" | "" => "$",
        _ => "",
    }
}

/// Integers print without a decimal point; everything else as-is.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract().abs() < f64::EPSILON && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
