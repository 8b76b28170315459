//! Shared constants for the inspector and its specialized editors.

// ── Colors ──────────────────────────────────────────────────────

/// Fallback for color inputs that do not parse.
pub const FALLBACK_COLOR: &str = "#000000";

/// Colors handed out to new chart series and market segments, by index.
pub const SERIES_PALETTE: &[&str] = &["#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899"];

// ── Domain clamps ───────────────────────────────────────────────

pub const POSITION_MIN: f64 = 0.0;
pub const POSITION_MAX: f64 = 1.0;

pub const SEGMENT_MIN: f64 = 0.0;
pub const SEGMENT_MAX: f64 = 100.0;

/// Segment percentages are expected, but not required, to total this.
pub const SEGMENT_TARGET_TOTAL: f64 = 100.0;

pub const SKILL_MIN: f64 = 0.0;
pub const SKILL_MAX: f64 = 5.0;

// ── Previews ────────────────────────────────────────────────────

/// Size of the competitive-positioning scatter preview, in pixels.
pub const SCATTER_PREVIEW_WIDTH: f64 = 300.0;
pub const SCATTER_PREVIEW_HEIGHT: f64 = 200.0;

/// Skill score at or above which a cell is shown as strong.
pub const SKILL_STRONG: f64 = 4.0;

/// Skill score at or above which a cell is shown as moderate.
pub const SKILL_MODERATE: f64 = 2.0;

pub const SKILL_STRONG_COLOR: &str = "#22c55e";
pub const SKILL_MODERATE_COLOR: &str = "#eab308";
pub const SKILL_WEAK_COLOR: &str = "#ef4444";
