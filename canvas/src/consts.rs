//! Shared numeric constants for the canvas crate.

// ── Surface ─────────────────────────────────────────────────────

/// Default slide surface width in canvas pixels.
pub const DEFAULT_SURFACE_WIDTH: f64 = 1280.0;

/// Default slide surface height in canvas pixels.
pub const DEFAULT_SURFACE_HEIGHT: f64 = 720.0;

// ── Zoom ────────────────────────────────────────────────────────

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 8.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for resize handles.
pub const HANDLE_RADIUS_PX: f64 = 6.0;

/// Height of the grab strip along a block's top edge, in canvas pixels.
pub const DRAG_HANDLE_HEIGHT: f64 = 24.0;

// ── Theme ───────────────────────────────────────────────────────

pub const DEFAULT_FONT_FAMILY: &str = "Inter, sans-serif";
