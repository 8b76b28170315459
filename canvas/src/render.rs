//! Scene assembly: turns the store plus canvas state into a [`CanvasView`].
//!
//! This module reads; it never mutates. Blocks without a layout are skipped.
//! The block under an active gesture is drawn at its candidate layout, and a
//! block in inline edit mode shows its edit buffer instead of stored data.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::collections::HashMap;

use blocks::{Block, BlockData, BlockId, BlockStore, DataPatch, Layout, Style};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::content::{Content, render_content};
use crate::engine::CanvasEngine;
use crate::hit::ResizeHandle;
use crate::theme::Theme;

/// Comment summary for one block, supplied by the host as opaque data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentMarker {
    pub block_id: BlockId,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
}

/// Bubble drawn on a block's corner when it has comments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentBubble {
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandleView {
    pub handle: ResizeHandle,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockView {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub tag: String,
    pub layout: Layout,
    /// Theme defaults overlaid by the block's own style.
    pub style: Style,
    pub selected: bool,
    pub editing: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub handles: Vec<HandleView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<CommentBubble>,
    pub content: Content,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasView {
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Blocks in draw order, bottom first.
    pub blocks: Vec<BlockView>,
}

/// Assemble the full scene.
#[must_use]
pub fn render(store: &BlockStore, engine: &CanvasEngine, theme: &Theme, comments: &[CommentMarker]) -> CanvasView {
    let bubbles: HashMap<BlockId, &CommentMarker> =
        comments.iter().filter(|c| c.count > 0).map(|c| (c.block_id, c)).collect();
    let preview = engine.preview();
    let show_handles = engine.capabilities().update_layout;

    let blocks = store
        .sorted()
        .into_iter()
        .filter_map(|block| {
            let Some(stored) = block.layout else {
                debug!(id = %block.id, "skipping block without layout");
                return None;
            };
            let layout = match preview {
                Some((id, candidate)) if id == block.id => candidate,
                _ => stored,
            };
            let selected = engine.is_selected(&block.id);
            let editing = engine.editing().is_some_and(|e| e.id == block.id);
            Some(BlockView {
                id: block.id,
                tag: block.tag().to_owned(),
                layout,
                style: theme.merge(&block.style),
                selected,
                editing,
                handles: if selected && show_handles { handles(&layout) } else { Vec::new() },
                comments: bubbles
                    .get(&block.id)
                    .map(|c| CommentBubble { count: c.count, sentiment: c.sentiment.clone() }),
                content: render_content(&displayed_data(block, engine)),
            })
        })
        .collect();

    let config = engine.config();
    CanvasView {
        width: config.width,
        height: config.height,
        zoom: engine.zoom(),
        background: theme.background.clone(),
        blocks,
    }
}

fn handles(layout: &Layout) -> Vec<HandleView> {
    ResizeHandle::ALL
        .into_iter()
        .map(|handle| {
            let p = handle.position(layout);
            HandleView { handle, x: p.x, y: p.y }
        })
        .collect()
}

/// The block's data with any inline edit buffer applied.
fn displayed_data(block: &Block, engine: &CanvasEngine) -> BlockData {
    let Some(edit) = engine.editing().filter(|e| e.id == block.id) else {
        return block.data.clone();
    };
    let mut patch = DataPatch::new();
    patch.insert(edit.field.to_owned(), Value::String(edit.buffer.clone()));
    match block.data.merged(&patch) {
        Ok(data) => data,
        Err(e) => {
            warn!(id = %block.id, error = %e, "edit buffer does not apply; showing stored data");
            block.data.clone()
        }
    }
}
