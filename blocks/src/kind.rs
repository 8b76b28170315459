//! Per-kind traits that are not part of the payload: palette category,
//! inline text editing, and default drop size.

#[cfg(test)]
#[path = "kind_test.rs"]
mod kind_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BLOCK_HEIGHT, DEFAULT_BLOCK_WIDTH};
use crate::data::BlockKind;

/// Palette grouping for block kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Basic,
    Media,
    Data,
    Team,
    Market,
    Business,
}

impl Category {
    /// Human caption for palette section headers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Media => "Media",
            Self::Data => "Data & Metrics",
            Self::Team => "Team",
            Self::Market => "Market",
            Self::Business => "Business",
        }
    }
}

impl BlockKind {
    /// Palette category.
    #[must_use]
    pub fn category(self) -> Category {
        match self {
            Self::Text
            | Self::Heading
            | Self::Quote
            | Self::List
            | Self::Checklist
            | Self::Button
            | Self::CallToAction
            | Self::CalloutBox
            | Self::CodeBlock
            | Self::Divider
            | Self::Shape
            | Self::Icon => Category::Basic,
            Self::Image | Self::Video | Self::Gallery | Self::LogoCloud | Self::Embed => Category::Media,
            Self::Chart
            | Self::MetricCounter
            | Self::Statistic
            | Self::ProgressBar
            | Self::Table
            | Self::TractionMetrics
            | Self::UnitEconomics
            | Self::RevenueProjection
            | Self::Countdown => Category::Data,
            Self::TeamCard
            | Self::TeamGrid
            | Self::SkillMatrix
            | Self::InvestorList
            | Self::Testimonial
            | Self::CustomerPersona => Category::Team,
            Self::CompetitorTable
            | Self::CompetitivePositioning
            | Self::MarketSegments
            | Self::MarketSize
            | Self::SwotAnalysis => Category::Market,
            Self::FeatureCard
            | Self::FeatureGrid
            | Self::ProblemStatement
            | Self::SolutionCard
            | Self::ProductShowcase
            | Self::BusinessModel
            | Self::PricingTable
            | Self::FundingAsk
            | Self::Timeline
            | Self::Roadmap
            | Self::ContactInfo
            | Self::SocialLinks => Category::Business,
        }
    }

    /// Data field that inline rich-text editing reads and commits into.
    ///
    /// `None` means double-click opens the inspector instead.
    #[must_use]
    pub fn inline_text_field(self) -> Option<&'static str> {
        match self {
            Self::Text => Some("content"),
            Self::Heading | Self::Quote => Some("text"),
            Self::CalloutBox => Some("body"),
            _ => None,
        }
    }

    /// Whether double-click enters inline text editing.
    #[must_use]
    pub fn is_text_capable(self) -> bool {
        self.inline_text_field().is_some()
    }

    /// Width and height of a freshly dropped block.
    #[must_use]
    pub fn default_size(self) -> (f64, f64) {
        match self {
            Self::Heading => (480.0, 80.0),
            Self::Divider => (480.0, 20.0),
            Self::Button => (180.0, 48.0),
            Self::Icon => (64.0, 64.0),
            Self::MetricCounter | Self::Statistic => (220.0, 140.0),
            Self::ProgressBar => (320.0, 60.0),
            Self::Chart | Self::CompetitivePositioning => (480.0, 320.0),
            Self::CompetitorTable | Self::SkillMatrix | Self::PricingTable | Self::Table => (560.0, 320.0),
            Self::TeamGrid | Self::FeatureGrid | Self::Gallery | Self::Roadmap | Self::Timeline => (640.0, 300.0),
            _ => (DEFAULT_BLOCK_WIDTH, DEFAULT_BLOCK_HEIGHT),
        }
    }
}
