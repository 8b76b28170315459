//! Type-specific payloads carried in [`crate::data::BlockData`].
//!
//! Every payload decodes leniently: missing fields take their `Default`, so a
//! partially-loaded record still produces a usable block. A field present with
//! the wrong JSON type is a decode failure and the block degrades to
//! [`crate::data::Unrecognized`].
//!
//! Field names are camelCase on the wire and match the `name` of the
//! corresponding [`crate::schema::EditableProp`] in the registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

fn is_blank(s: &str) -> bool {
    s.is_empty()
}

// =============================================================
// Basic
// =============================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextData {
    pub content: String,
    pub font_size: f64,
    pub color: String,
    pub align: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadingData {
    pub text: String,
    pub level: String,
    pub color: String,
    pub align: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteData {
    pub text: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListData {
    pub items: Vec<String>,
    pub ordered: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChecklistItem {
    #[serde(skip_serializing_if = "is_blank")]
    pub id: String,
    pub text: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChecklistData {
    pub title: String,
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonData {
    pub label: String,
    pub url: String,
    pub variant: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CallToActionData {
    pub headline: String,
    pub subtext: String,
    pub button_label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalloutBoxData {
    pub title: String,
    pub body: String,
    pub tone: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeBlockData {
    pub code: String,
    pub language: String,
    pub show_line_numbers: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DividerData {
    pub thickness: f64,
    pub color: String,
    pub line_style: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShapeData {
    pub shape: String,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconData {
    pub name: String,
    pub color: String,
    pub size: f64,
}

// =============================================================
// Media
// =============================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageData {
    pub src: String,
    pub alt: String,
    pub fit: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoData {
    pub url: String,
    pub autoplay: bool,
    pub muted: bool,
    pub poster: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryImage {
    #[serde(skip_serializing_if = "is_blank")]
    pub id: String,
    pub src: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryData {
    pub images: Vec<GalleryImage>,
    pub columns: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Logo {
    #[serde(skip_serializing_if = "is_blank")]
    pub id: String,
    pub name: String,
    pub src: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogoCloudData {
    pub title: String,
    pub logos: Vec<Logo>,
    pub grayscale: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmbedData {
    pub title: String,
    pub html: String,
}

// =============================================================
// Data
// =============================================================

/// One series of a chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub color: String,
}

/// Labels plus one or more series, each with one value per label.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartData {
    pub chart_type: String,
    pub data: ChartSeries,
    pub options: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricCounterData {
    pub label: String,
    pub value: f64,
    pub trend: String,
    pub prefix: String,
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatisticData {
    pub value: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressBarData {
    pub label: String,
    pub value: f64,
    pub max: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableRow {
    #[serde(skip_serializing_if = "is_blank")]
    pub id: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
    pub striped: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TractionMetric {
    #[serde(skip_serializing_if = "is_blank")]
    pub id: String,
    pub label: String,
    pub value: String,
    pub trend: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TractionMetricsData {
    pub title: String,
    pub metrics: Vec<TractionMetric>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UnitEconomicsData {
    pub cac: f64,
    pub ltv: f64,
    pub payback_months: f64,
    pub gross_margin: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectionYear {
    #[serde(skip_serializing_if = "is_blank")]
    pub id: String,
    pub year: String,
    pub revenue: f64,
    pub expenses: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevenueProjectionData {
    pub title: String,
    pub currency: String,
    pub years: Vec<ProjectionYear>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CountdownData {
    pub label: String,
    pub target_date: String,
}

// =============================================================
// Team
// =============================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamCardData {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub photo: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(skip_serializing_if = "is_blank")]
    pub id: String,
    pub name: String,
    pub role: String,
    pub photo: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TeamGridData {
    pub title: String,
    pub members: Vec<TeamMember>,
}

/// A team member's scores keyed by skill name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillMember {
    pub name: String,
    pub scores: BTreeMap<String, f64>,
}

/// Skill names (columns) and members (rows) scored 0 to 5.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillMatrix {
    pub skills: Vec<String>,
    pub members: Vec<SkillMember>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillMatrixData {
    pub title: String,
    pub matrix: SkillMatrix,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Investor {
    #[serde(skip_serializing_if = "is_blank")]
    pub id: String,
    pub name: String,
    pub logo: String,
    pub tier: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvestorListData {
    pub title: String,
    pub investors: Vec<Investor>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestimonialData {
    pub quote: String,
    pub author: String,
    pub company: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerPersonaData {
    pub name: String,
    pub age: f64,
    pub occupation: String,
    pub goals: Vec<String>,
    pub pain_points: Vec<String>,
    pub avatar: String,
}

// =============================================================
// Market
// =============================================================

/// One competitor row with a yes/no cell per feature name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Competitor {
    pub name: String,
    pub is_us: bool,
    pub features: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompetitorTableData {
    pub title: String,
    pub features: Vec<String>,
    pub competitors: Vec<Competitor>,
    pub highlight_us: bool,
}

/// Captions for the low and high ends of one positioning axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisLabels {
    pub low: String,
    pub high: String,
}

/// A named point in normalized `[0, 1]` positioning space.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PositionPoint {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub is_us: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Positioning {
    pub x_axis: AxisLabels,
    pub y_axis: AxisLabels,
    pub points: Vec<PositionPoint>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompetitivePositioningData {
    pub title: String,
    pub positioning: Positioning,
}

/// One market segment; `value` is a percentage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketSegment {
    pub name: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketSegmentsData {
    pub title: String,
    pub segments: Vec<MarketSegment>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarketSizeData {
    pub tam: f64,
    pub sam: f64,
    pub som: f64,
    pub currency: String,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwotAnalysisData {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

// =============================================================
// Business
// =============================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureCardData {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub accent_color: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureItem {
    #[serde(skip_serializing_if = "is_blank")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeatureGridData {
    pub title: String,
    pub columns: f64,
    pub features: Vec<FeatureItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProblemStatementData {
    pub problem: String,
    pub impact: String,
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SolutionCardData {
    pub title: String,
    pub description: String,
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductShowcaseData {
    pub name: String,
    pub tagline: String,
    pub image: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessModelData {
    pub revenue_streams: Vec<String>,
    pub cost_structure: Vec<String>,
    pub pricing_model: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingTier {
    #[serde(skip_serializing_if = "is_blank")]
    pub id: String,
    pub name: String,
    pub price: String,
    pub period: String,
    pub features: Vec<String>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingTableData {
    pub tiers: Vec<PricingTier>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FundAllocation {
    #[serde(skip_serializing_if = "is_blank")]
    pub id: String,
    pub category: String,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FundingAskData {
    pub amount: f64,
    pub currency: String,
    pub round: String,
    pub use_of_funds: Vec<FundAllocation>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineEvent {
    #[serde(skip_serializing_if = "is_blank")]
    pub id: String,
    pub date: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineData {
    pub events: Vec<TimelineEvent>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Deliverable {
    #[serde(skip_serializing_if = "is_blank")]
    pub id: String,
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Milestone {
    #[serde(skip_serializing_if = "is_blank")]
    pub id: String,
    pub quarter: String,
    pub title: String,
    pub done: bool,
    pub deliverables: Vec<Deliverable>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoadmapData {
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfoData {
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLink {
    #[serde(skip_serializing_if = "is_blank")]
    pub id: String,
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLinksData {
    pub links: Vec<SocialLink>,
}
