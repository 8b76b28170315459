//! Layout arithmetic for gestures. All inputs are in canvas pixels; callers
//! scale screen deltas by the camera before calling in.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use blocks::Layout;
use serde::{Deserialize, Serialize};

use crate::hit::ResizeHandle;

/// The slide surface a block must stay on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// `orig` moved by `(dx, dy)`. Size and z-index are untouched.
#[must_use]
pub fn translate(orig: &Layout, dx: f64, dy: f64) -> Layout {
    Layout { x: orig.x + dx, y: orig.y + dy, ..*orig }
}

/// `orig` resized by dragging `handle` by `(dx, dy)`.
///
/// Width and height never drop below `min_size`. When a left or top edge
/// moves, `x`/`y` shift by exactly the size change so the opposite edge stays
/// put, including when the floor is hit.
#[must_use]
pub fn resize(orig: &Layout, handle: ResizeHandle, dx: f64, dy: f64, min_size: f64) -> Layout {
    let mut next = *orig;

    if handle.moves_right() {
        next.width = (orig.width + dx).max(min_size);
    } else if handle.moves_left() {
        next.width = (orig.width - dx).max(min_size);
        next.x = orig.right() - next.width;
    }

    if handle.moves_bottom() {
        next.height = (orig.height + dy).max(min_size);
    } else if handle.moves_top() {
        next.height = (orig.height - dy).max(min_size);
        next.y = orig.bottom() - next.height;
    }

    next
}

/// Pull `layout` back onto the surface. A block larger than the surface is
/// pinned to the top-left corner.
#[must_use]
pub fn clamp_to_bounds(layout: &Layout, bounds: Bounds) -> Layout {
    let max_x = (bounds.width - layout.width).max(0.0);
    let max_y = (bounds.height - layout.height).max(0.0);
    Layout { x: layout.x.clamp(0.0, max_x), y: layout.y.clamp(0.0, max_y), ..*layout }
}
