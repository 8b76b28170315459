#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::Serialize;

use crate::consts::{MAX_ZOOM, MIN_ZOOM};

/// A point in either screen or canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Zoom state of the slide surface.
///
/// The surface is drawn scaled by `zoom` with its origin at the screen
/// origin, so screen distances divide by `zoom` to become canvas distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

impl Camera {
    /// Camera with `zoom` normalized by [`normalize_zoom`].
    #[must_use]
    pub fn new(zoom: f64) -> Self {
        Self { zoom: normalize_zoom(zoom) }
    }

    /// Convert a screen-space point to canvas coordinates.
    #[must_use]
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        Point { x: screen.x / self.zoom, y: screen.y / self.zoom }
    }

    /// Convert a canvas-space point to screen coordinates.
    #[must_use]
    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        Point { x: canvas.x * self.zoom, y: canvas.y * self.zoom }
    }

    /// Convert a screen-space distance to a canvas-space distance.
    #[must_use]
    pub fn screen_dist_to_canvas(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }
}

/// Clamp a zoom factor into `[MIN_ZOOM, MAX_ZOOM]`. Non-finite or
/// non-positive input falls back to `1.0`.
#[must_use]
pub fn normalize_zoom(zoom: f64) -> f64 {
    if !zoom.is_finite() || zoom <= 0.0 {
        return 1.0;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}
