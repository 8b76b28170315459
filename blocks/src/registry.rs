//! Static block schema registry: `BlockKind -> BlockMeta`.
//!
//! Pure lookup, built once on first access. Consumers must still handle an
//! entry with no editable props and blocks with no entry at all
//! ([`crate::data::BlockData::Unrecognized`]).

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::data::BlockKind;
use crate::schema::{BlockMeta, EditableProp as P, PropKind};

const ALIGN: &[&str] = &["left", "center", "right"];
const TREND: &[&str] = &["up", "down", "flat"];
const CURRENCY: &[&str] = &["USD", "EUR", "GBP"];

static REGISTRY: LazyLock<HashMap<BlockKind, BlockMeta>> = LazyLock::new(|| {
    BlockKind::ALL
        .iter()
        .map(|&kind| {
            let (label, editable_props) = entry(kind);
            let meta = BlockMeta { kind, label: label.to_owned(), category: kind.category(), editable_props };
            (kind, meta)
        })
        .collect()
});

/// Registry entry for a kind.
#[must_use]
pub fn meta(kind: BlockKind) -> Option<&'static BlockMeta> {
    REGISTRY.get(&kind)
}

/// Registry entry for a wire tag. `None` for tags outside the catalogue.
#[must_use]
pub fn meta_for_tag(tag: &str) -> Option<&'static BlockMeta> {
    BlockKind::from_tag(tag).and_then(meta)
}

/// All entries in palette order.
#[must_use]
pub fn all() -> Vec<&'static BlockMeta> {
    BlockKind::ALL.iter().filter_map(|&k| meta(k)).collect()
}

#[allow(clippy::too_many_lines)]
fn entry(kind: BlockKind) -> (&'static str, Vec<P>) {
    match kind {
        BlockKind::Text => (
            "Text",
            vec![
                P::textarea("content", "Content"),
                P::number("fontSize", "Font Size"),
                P::color("color", "Color"),
                P::select("align", "Alignment", ALIGN),
            ],
        ),
        BlockKind::Heading => (
            "Heading",
            vec![
                P::text("text", "Text"),
                P::select("level", "Level", &["h1", "h2", "h3"]),
                P::color("color", "Color"),
                P::select("align", "Alignment", ALIGN),
            ],
        ),
        BlockKind::Quote => (
            "Quote",
            vec![P::textarea("text", "Quote"), P::text("author", "Author"), P::text("role", "Role")],
        ),
        BlockKind::List => ("List", vec![P::string_array("items", "Items"), P::checkbox("ordered", "Numbered")]),
        BlockKind::Checklist => (
            "Checklist",
            vec![
                P::text("title", "Title"),
                P::object_array("items", "Items", vec![P::text("text", "Text"), P::checkbox("checked", "Done")]),
            ],
        ),
        BlockKind::Button => (
            "Button",
            vec![
                P::text("label", "Label"),
                P::url("url", "Link"),
                P::select("variant", "Variant", &["primary", "secondary", "outline"]),
            ],
        ),
        BlockKind::CallToAction => (
            "Call to Action",
            vec![
                P::text("headline", "Headline"),
                P::textarea("subtext", "Subtext"),
                P::text("buttonLabel", "Button Label"),
                P::url("url", "Link"),
            ],
        ),
        BlockKind::CalloutBox => (
            "Callout",
            vec![
                P::text("title", "Title"),
                P::textarea("body", "Body"),
                P::select("tone", "Tone", &["info", "success", "warning", "danger"]),
            ],
        ),
        BlockKind::CodeBlock => (
            "Code",
            vec![
                P::textarea("code", "Code"),
                P::select("language", "Language", &["rust", "typescript", "python", "json", "shell"]),
                P::checkbox("showLineNumbers", "Line Numbers"),
            ],
        ),
        BlockKind::Divider => (
            "Divider",
            vec![
                P::number("thickness", "Thickness"),
                P::color("color", "Color"),
                P::select("lineStyle", "Line Style", &["solid", "dashed", "dotted"]),
            ],
        ),
        BlockKind::Shape => (
            "Shape",
            vec![
                P::select("shape", "Shape", &["rectangle", "circle", "triangle", "diamond"]),
                P::color("fill", "Fill"),
                P::color("stroke", "Stroke"),
                P::number("strokeWidth", "Stroke Width"),
            ],
        ),
        BlockKind::Icon => (
            "Icon",
            vec![P::text("name", "Icon Name"), P::color("color", "Color"), P::number("size", "Size")],
        ),
        BlockKind::Image => (
            "Image",
            vec![
                P::image("src", "Source"),
                P::text("alt", "Alt Text"),
                P::select("fit", "Fit", &["cover", "contain", "fill"]),
                P::text("caption", "Caption"),
            ],
        ),
        BlockKind::Video => (
            "Video",
            vec![
                P::url("url", "Video URL"),
                P::checkbox("autoplay", "Autoplay"),
                P::checkbox("muted", "Muted"),
                P::image("poster", "Poster"),
            ],
        ),
        BlockKind::Gallery => (
            "Gallery",
            vec![
                P::object_array("images", "Images", vec![P::image("src", "Source"), P::text("caption", "Caption")]),
                P::number("columns", "Columns"),
            ],
        ),
        BlockKind::LogoCloud => (
            "Logo Cloud",
            vec![
                P::text("title", "Title"),
                P::object_array(
                    "logos",
                    "Logos",
                    vec![P::text("name", "Name"), P::image("src", "Logo"), P::url("url", "Link")],
                ),
                P::checkbox("grayscale", "Grayscale"),
            ],
        ),
        BlockKind::Embed => ("Embed", vec![P::text("title", "Title"), P::textarea("html", "HTML")]),
        BlockKind::Chart => (
            "Chart",
            vec![
                P::select("chartType", "Chart Type", &["bar", "line", "pie", "doughnut", "area"]),
                P::new("data", "Chart Data", PropKind::ChartData),
                P::json("options", "Options"),
            ],
        ),
        BlockKind::MetricCounter => (
            "Metric Counter",
            vec![
                P::text("label", "Label"),
                P::number("value", "Value"),
                P::select("trend", "Trend", TREND),
                P::text("prefix", "Prefix"),
                P::text("suffix", "Suffix"),
            ],
        ),
        BlockKind::Statistic => (
            "Statistic",
            vec![P::text("value", "Value"), P::text("label", "Label"), P::textarea("description", "Description")],
        ),
        BlockKind::ProgressBar => (
            "Progress Bar",
            vec![
                P::text("label", "Label"),
                P::number("value", "Value"),
                P::number("max", "Maximum"),
                P::color("color", "Color"),
            ],
        ),
        BlockKind::Table => (
            "Table",
            vec![
                P::string_array("headers", "Headers"),
                P::object_array("rows", "Rows", vec![P::string_array("cells", "Cells")]),
                P::checkbox("striped", "Striped"),
            ],
        ),
        BlockKind::TractionMetrics => (
            "Traction Metrics",
            vec![
                P::text("title", "Title"),
                P::object_array(
                    "metrics",
                    "Metrics",
                    vec![P::text("label", "Label"), P::text("value", "Value"), P::select("trend", "Trend", TREND)],
                ),
            ],
        ),
        BlockKind::UnitEconomics => (
            "Unit Economics",
            vec![
                P::number("cac", "CAC"),
                P::number("ltv", "LTV"),
                P::number("paybackMonths", "Payback (months)"),
                P::number("grossMargin", "Gross Margin %"),
                P::select("currency", "Currency", CURRENCY),
            ],
        ),
        BlockKind::RevenueProjection => (
            "Revenue Projection",
            vec![
                P::text("title", "Title"),
                P::select("currency", "Currency", CURRENCY),
                P::object_array(
                    "years",
                    "Years",
                    vec![P::text("year", "Year"), P::number("revenue", "Revenue"), P::number("expenses", "Expenses")],
                ),
            ],
        ),
        BlockKind::Countdown => ("Countdown", vec![P::text("label", "Label"), P::date("targetDate", "Target Date")]),
        BlockKind::TeamCard => (
            "Team Card",
            vec![
                P::text("name", "Name"),
                P::text("role", "Role"),
                P::textarea("bio", "Bio"),
                P::image("photo", "Photo"),
                P::url("linkedin", "LinkedIn"),
            ],
        ),
        BlockKind::TeamGrid => (
            "Team Grid",
            vec![
                P::text("title", "Title"),
                P::object_array(
                    "members",
                    "Members",
                    vec![P::text("name", "Name"), P::text("role", "Role"), P::image("photo", "Photo")],
                ),
            ],
        ),
        BlockKind::SkillMatrix => (
            "Skill Matrix",
            vec![P::text("title", "Title"), P::new("matrix", "Skills", PropKind::SkillMatrix)],
        ),
        BlockKind::InvestorList => (
            "Investors",
            vec![
                P::text("title", "Title"),
                P::object_array(
                    "investors",
                    "Investors",
                    vec![
                        P::text("name", "Name"),
                        P::image("logo", "Logo"),
                        P::select("tier", "Tier", &["lead", "participating", "angel"]),
                    ],
                ),
            ],
        ),
        BlockKind::Testimonial => (
            "Testimonial",
            vec![
                P::textarea("quote", "Quote"),
                P::text("author", "Author"),
                P::text("company", "Company"),
                P::image("avatar", "Avatar"),
            ],
        ),
        BlockKind::CustomerPersona => (
            "Customer Persona",
            vec![
                P::text("name", "Name"),
                P::number("age", "Age"),
                P::text("occupation", "Occupation"),
                P::string_array("goals", "Goals"),
                P::string_array("painPoints", "Pain Points"),
                P::image("avatar", "Avatar"),
            ],
        ),
        BlockKind::CompetitorTable => (
            "Competitor Table",
            vec![
                P::text("title", "Title"),
                P::string_array("features", "Features"),
                P::new("competitors", "Competitors", PropKind::CompetitorFeatures).with_sibling("features"),
                P::checkbox("highlightUs", "Highlight Us"),
            ],
        ),
        BlockKind::CompetitivePositioning => (
            "Competitive Positioning",
            vec![
                P::text("title", "Title"),
                P::new("positioning", "Positioning", PropKind::CompetitivePositioning),
            ],
        ),
        BlockKind::MarketSegments => (
            "Market Segments",
            vec![P::text("title", "Title"), P::new("segments", "Segments", PropKind::MarketSegments)],
        ),
        BlockKind::MarketSize => (
            "Market Size",
            vec![
                P::number("tam", "TAM"),
                P::number("sam", "SAM"),
                P::number("som", "SOM"),
                P::select("currency", "Currency", CURRENCY),
                P::select("unit", "Unit", &["K", "M", "B"]),
            ],
        ),
        BlockKind::SwotAnalysis => (
            "SWOT Analysis",
            vec![
                P::string_array("strengths", "Strengths"),
                P::string_array("weaknesses", "Weaknesses"),
                P::string_array("opportunities", "Opportunities"),
                P::string_array("threats", "Threats"),
            ],
        ),
        BlockKind::FeatureCard => (
            "Feature Card",
            vec![
                P::text("title", "Title"),
                P::textarea("description", "Description"),
                P::text("icon", "Icon"),
                P::color("accentColor", "Accent"),
            ],
        ),
        BlockKind::FeatureGrid => (
            "Feature Grid",
            vec![
                P::text("title", "Title"),
                P::number("columns", "Columns"),
                P::object_array(
                    "features",
                    "Features",
                    vec![P::text("title", "Title"), P::textarea("description", "Description"), P::text("icon", "Icon")],
                ),
            ],
        ),
        BlockKind::ProblemStatement => (
            "Problem",
            vec![
                P::textarea("problem", "Problem"),
                P::textarea("impact", "Impact"),
                P::string_array("evidence", "Evidence"),
            ],
        ),
        BlockKind::SolutionCard => (
            "Solution",
            vec![
                P::text("title", "Title"),
                P::textarea("description", "Description"),
                P::string_array("benefits", "Benefits"),
            ],
        ),
        BlockKind::ProductShowcase => (
            "Product Showcase",
            vec![
                P::text("name", "Product"),
                P::text("tagline", "Tagline"),
                P::image("image", "Image"),
                P::string_array("highlights", "Highlights"),
            ],
        ),
        BlockKind::BusinessModel => (
            "Business Model",
            vec![
                P::string_array("revenueStreams", "Revenue Streams"),
                P::string_array("costStructure", "Cost Structure"),
                P::select("pricingModel", "Pricing Model", &["subscription", "transactional", "freemium", "licensing"]),
            ],
        ),
        BlockKind::PricingTable => (
            "Pricing Table",
            vec![P::object_array(
                "tiers",
                "Tiers",
                vec![
                    P::text("name", "Name"),
                    P::text("price", "Price"),
                    P::select("period", "Period", &["month", "year", "once"]),
                    P::string_array("features", "Features"),
                    P::checkbox("highlighted", "Highlighted"),
                ],
            )],
        ),
        BlockKind::FundingAsk => (
            "Funding Ask",
            vec![
                P::number("amount", "Amount"),
                P::select("currency", "Currency", CURRENCY),
                P::select("round", "Round", &["pre-seed", "seed", "series-a", "series-b"]),
                P::object_array(
                    "useOfFunds",
                    "Use of Funds",
                    vec![P::text("category", "Category"), P::number("percent", "Percent")],
                ),
            ],
        ),
        BlockKind::Timeline => (
            "Timeline",
            vec![P::object_array(
                "events",
                "Events",
                vec![P::date("date", "Date"), P::text("title", "Title"), P::textarea("description", "Description")],
            )],
        ),
        BlockKind::Roadmap => (
            "Roadmap",
            vec![P::object_array(
                "milestones",
                "Milestones",
                vec![
                    P::text("quarter", "Quarter"),
                    P::text("title", "Title"),
                    P::checkbox("done", "Done"),
                    P::object_array(
                        "deliverables",
                        "Deliverables",
                        vec![P::text("text", "Text"), P::checkbox("done", "Done")],
                    ),
                ],
            )],
        ),
        BlockKind::ContactInfo => (
            "Contact",
            vec![
                P::text("email", "Email"),
                P::text("phone", "Phone"),
                P::url("website", "Website"),
                P::textarea("address", "Address"),
            ],
        ),
        BlockKind::SocialLinks => (
            "Social Links",
            vec![P::object_array(
                "links",
                "Links",
                vec![P::select("platform", "Platform", &["twitter", "linkedin", "github", "website"]), P::url("url", "URL")],
            )],
        ),
    }
}
