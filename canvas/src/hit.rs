//! Resize handles and hit-testing.
//!
//! Handles are only live on selected blocks and are tested before any block
//! body so a handle overlapping a neighbour still wins. Bodies are tested
//! top-most first; the strip along a body's top edge is its drag handle.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use std::collections::BTreeSet;

use blocks::{Block, BlockId, Layout};
use serde::Serialize;

use crate::camera::{Camera, Point};
use crate::consts::HANDLE_RADIUS_PX;

/// One of the eight resize handles: four corners and four edge midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 8] = [Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W, Self::Nw];

    /// Drags the left edge: `x` follows the pointer, `width` absorbs it.
    #[must_use]
    pub fn moves_left(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }

    /// Drags the right edge.
    #[must_use]
    pub fn moves_right(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    /// Drags the top edge: `y` follows the pointer, `height` absorbs it.
    #[must_use]
    pub fn moves_top(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    /// Drags the bottom edge.
    #[must_use]
    pub fn moves_bottom(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }

    /// Handle center in canvas space.
    #[must_use]
    pub fn position(self, layout: &Layout) -> Point {
        let x = if self.moves_left() {
            layout.x
        } else if self.moves_right() {
            layout.right()
        } else {
            layout.x + layout.width / 2.0
        };
        let y = if self.moves_top() {
            layout.y
        } else if self.moves_bottom() {
            layout.bottom()
        } else {
            layout.y + layout.height / 2.0
        };
        Point::new(x, y)
    }

    /// CSS cursor name for hover feedback.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::N | Self::S => "ns-resize",
            Self::E | Self::W => "ew-resize",
            Self::Ne | Self::Sw => "nesw-resize",
            Self::Nw | Self::Se => "nwse-resize",
        }
    }
}

/// Which part of a block was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    DragHandle,
    Resize(ResizeHandle),
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub block_id: BlockId,
    pub part: HitPart,
}

/// Find what lies under the canvas-space point `pt`.
///
/// `blocks` must be in draw order (bottom first), as returned by
/// [`blocks::BlockStore::sorted`]. Blocks without a layout are never hit.
#[must_use]
pub fn hit_test(
    pt: Point,
    blocks: &[&Block],
    camera: &Camera,
    selection: &BTreeSet<BlockId>,
    drag_handle_height: f64,
) -> Option<Hit> {
    let slop = camera.screen_dist_to_canvas(HANDLE_RADIUS_PX);

    for block in blocks.iter().rev() {
        let Some(layout) = block.layout else { continue };
        if !selection.contains(&block.id) {
            continue;
        }
        for handle in ResizeHandle::ALL {
            let c = handle.position(&layout);
            if (pt.x - c.x).abs() <= slop && (pt.y - c.y).abs() <= slop {
                return Some(Hit { block_id: block.id, part: HitPart::Resize(handle) });
            }
        }
    }

    for block in blocks.iter().rev() {
        let Some(layout) = block.layout else { continue };
        if contains(&layout, pt) {
            let part = if pt.y <= layout.y + drag_handle_height.min(layout.height) {
                HitPart::DragHandle
            } else {
                HitPart::Body
            };
            return Some(Hit { block_id: block.id, part });
        }
    }
    None
}

fn contains(layout: &Layout, pt: Point) -> bool {
    pt.x >= layout.x && pt.x <= layout.right() && pt.y >= layout.y && pt.y <= layout.bottom()
}
