//! Canvas configuration: surface bounds, zoom, and size limits.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use blocks::consts::MIN_BLOCK_SIZE;
use serde::Deserialize;

use crate::camera::normalize_zoom;
use crate::consts::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, DRAG_HANDLE_HEIGHT};
use crate::geometry::Bounds;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    /// Surface width; blocks are clamped inside it on drag release.
    pub width: f64,
    /// Surface height.
    pub height: f64,
    /// Display zoom. Normalized on construction; see [`normalize_zoom`].
    pub zoom: f64,
    /// Width/height floor applied on every resize frame.
    pub min_block_size: f64,
    /// Height of the drag strip along each block's top edge.
    pub drag_handle_height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
            zoom: 1.0,
            min_block_size: MIN_BLOCK_SIZE,
            drag_handle_height: DRAG_HANDLE_HEIGHT,
        }
    }
}

impl CanvasConfig {
    /// Copy with a normalized zoom and sizes that respect the block floor.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            zoom: normalize_zoom(self.zoom),
            min_block_size: self.min_block_size.max(MIN_BLOCK_SIZE),
            width: self.width.max(MIN_BLOCK_SIZE),
            height: self.height.max(MIN_BLOCK_SIZE),
            drag_handle_height: self.drag_handle_height.max(0.0),
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds { width: self.width, height: self.height }
    }
}
