//! Shared numeric constants for the block model.

// ── Geometry ────────────────────────────────────────────────────

/// Minimum width and height of any block, in canvas pixels.
pub const MIN_BLOCK_SIZE: f64 = 20.0;

/// Default width of a block dropped from the palette.
pub const DEFAULT_BLOCK_WIDTH: f64 = 320.0;

/// Default height of a block dropped from the palette.
pub const DEFAULT_BLOCK_HEIGHT: f64 = 180.0;

/// Default drop position when the host does not supply one.
pub const DEFAULT_DROP_X: f64 = 40.0;

/// Default drop position when the host does not supply one.
pub const DEFAULT_DROP_Y: f64 = 40.0;
