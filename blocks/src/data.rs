//! The closed block-type union.
//!
//! [`BlockKind`] is the bare type tag; [`BlockData`] pairs the tag with its
//! typed payload. Both are generated from one table so a new block type is a
//! single row here plus one arm in each exhaustive `match` elsewhere
//! ([`crate::kind`], [`crate::registry`], and the canvas renderer).
//!
//! Data whose tag is unknown, or whose payload does not decode against its
//! tag, is kept verbatim as [`Unrecognized`] so it round-trips and can be shown
//! as a diagnostic instead of being dropped.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::warn;

use crate::patch::{compact_numbers, merge_value};
use crate::payload::*;

/// Payload of a block whose type is not in the catalogue or failed to decode.
#[derive(Debug, Clone, PartialEq)]
pub struct Unrecognized {
    /// The type tag as it appeared on the wire.
    pub tag: String,
    /// The raw `data` value, untouched.
    pub raw: Value,
}

macro_rules! catalogue {
    ($($variant:ident($payload:ty) => $tag:literal,)*) => {
        /// Type tag of a block. Immutable for the lifetime of the block.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum BlockKind {
            $(
                #[serde(rename = $tag)]
                $variant,
            )*
        }

        impl BlockKind {
            /// Every kind, in palette order.
            pub const ALL: &'static [BlockKind] = &[$(BlockKind::$variant,)*];

            /// Wire tag, e.g. `"metricCounter"`.
            #[must_use]
            pub fn tag(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)*
                }
            }

            /// Parse a wire tag. Returns `None` for tags outside the catalogue.
            #[must_use]
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        /// A block's type tag together with its typed payload.
        #[derive(Debug, Clone, PartialEq)]
        pub enum BlockData {
            $($variant($payload),)*
            /// Unknown tag or undecodable payload, preserved verbatim.
            Unrecognized(Unrecognized),
        }

        impl BlockData {
            /// The kind of this payload, or `None` when unrecognized.
            #[must_use]
            pub fn kind(&self) -> Option<BlockKind> {
                match self {
                    $(Self::$variant(_) => Some(BlockKind::$variant),)*
                    Self::Unrecognized(_) => None,
                }
            }

            /// Wire tag of this payload (the original tag when unrecognized).
            #[must_use]
            pub fn tag(&self) -> &str {
                match self {
                    $(Self::$variant(_) => $tag,)*
                    Self::Unrecognized(u) => &u.tag,
                }
            }

            /// Default payload for a kind.
            #[must_use]
            pub fn empty(kind: BlockKind) -> Self {
                match kind {
                    $(BlockKind::$variant => Self::$variant(<$payload>::default()),)*
                }
            }

            fn decode_known(kind: BlockKind, raw: Value) -> Result<Self, serde_json::Error> {
                Ok(match kind {
                    $(BlockKind::$variant => Self::$variant(serde_json::from_value(raw)?),)*
                })
            }
        }

        impl Serialize for BlockData {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    $(Self::$variant(payload) => {
                        let mut value = serde_json::to_value(payload).map_err(S::Error::custom)?;
                        compact_numbers(&mut value);
                        value.serialize(serializer)
                    })*
                    Self::Unrecognized(u) => u.raw.serialize(serializer),
                }
            }
        }
    };
}

catalogue! {
    Text(TextData) => "text",
    Heading(HeadingData) => "heading",
    Quote(QuoteData) => "quote",
    List(ListData) => "list",
    Checklist(ChecklistData) => "checklist",
    Button(ButtonData) => "button",
    CallToAction(CallToActionData) => "callToAction",
    CalloutBox(CalloutBoxData) => "calloutBox",
    CodeBlock(CodeBlockData) => "codeBlock",
    Divider(DividerData) => "divider",
    Shape(ShapeData) => "shape",
    Icon(IconData) => "icon",
    Image(ImageData) => "image",
    Video(VideoData) => "video",
    Gallery(GalleryData) => "gallery",
    LogoCloud(LogoCloudData) => "logoCloud",
    Embed(EmbedData) => "embed",
    Chart(ChartData) => "chart",
    MetricCounter(MetricCounterData) => "metricCounter",
    Statistic(StatisticData) => "statistic",
    ProgressBar(ProgressBarData) => "progressBar",
    Table(TableData) => "table",
    TractionMetrics(TractionMetricsData) => "tractionMetrics",
    UnitEconomics(UnitEconomicsData) => "unitEconomics",
    RevenueProjection(RevenueProjectionData) => "revenueProjection",
    Countdown(CountdownData) => "countdown",
    TeamCard(TeamCardData) => "teamCard",
    TeamGrid(TeamGridData) => "teamGrid",
    SkillMatrix(SkillMatrixData) => "skillMatrix",
    InvestorList(InvestorListData) => "investorList",
    Testimonial(TestimonialData) => "testimonial",
    CustomerPersona(CustomerPersonaData) => "customerPersona",
    CompetitorTable(CompetitorTableData) => "competitorTable",
    CompetitivePositioning(CompetitivePositioningData) => "competitivePositioning",
    MarketSegments(MarketSegmentsData) => "marketSegments",
    MarketSize(MarketSizeData) => "marketSize",
    SwotAnalysis(SwotAnalysisData) => "swotAnalysis",
    FeatureCard(FeatureCardData) => "featureCard",
    FeatureGrid(FeatureGridData) => "featureGrid",
    ProblemStatement(ProblemStatementData) => "problemStatement",
    SolutionCard(SolutionCardData) => "solutionCard",
    ProductShowcase(ProductShowcaseData) => "productShowcase",
    BusinessModel(BusinessModelData) => "businessModel",
    PricingTable(PricingTableData) => "pricingTable",
    FundingAsk(FundingAskData) => "fundingAsk",
    Timeline(TimelineData) => "timeline",
    Roadmap(RoadmapData) => "roadmap",
    ContactInfo(ContactInfoData) => "contactInfo",
    SocialLinks(SocialLinksData) => "socialLinks",
}

impl BlockData {
    /// Decode a `(type, data)` pair from the wire.
    ///
    /// Never fails: an unknown tag or a payload that does not fit its tag
    /// yields [`BlockData::Unrecognized`] carrying the raw value.
    #[must_use]
    pub fn decode(tag: &str, raw: Value) -> Self {
        let Some(kind) = BlockKind::from_tag(tag) else {
            warn!(tag, "unknown block type; keeping raw data");
            return Self::Unrecognized(Unrecognized { tag: tag.to_owned(), raw });
        };
        match Self::try_decode(kind, raw.clone()) {
            Ok(data) => data,
            Err(e) => {
                warn!(tag, error = %e, "block payload does not decode; keeping raw data");
                Self::Unrecognized(Unrecognized { tag: tag.to_owned(), raw })
            }
        }
    }

    /// Strictly decode a payload for a known kind. `null` decodes as the
    /// default payload.
    ///
    /// # Errors
    ///
    /// Returns the serde error when a present field has the wrong shape.
    pub fn try_decode(kind: BlockKind, raw: Value) -> Result<Self, serde_json::Error> {
        if raw.is_null() {
            return Ok(Self::empty(kind));
        }
        Self::decode_known(kind, raw)
    }

    /// The payload as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns the serde error if the payload cannot be represented as JSON.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// This payload with `patch` shallow-merged in, decoded back to the same type.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the merged value no longer fits the type.
    pub fn merged(&self, patch: &Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut value = self.to_value()?;
        merge_value(&mut value, patch);
        match self.kind() {
            Some(kind) => Self::try_decode(kind, value),
            None => Ok(Self::Unrecognized(Unrecognized { tag: self.tag().to_owned(), raw: value })),
        }
    }
}
