//! In-memory store of blocks: the single chokepoint for every mutation.
//!
//! Components never mutate blocks directly. The canvas reports layout deltas
//! and the inspector reports data patches; both arrive here and are applied as
//! shallow merges onto the existing record. Renderers read through
//! [`BlockStore::sorted`] to get draw order.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use tracing::debug;

use crate::block::{Block, BlockId};
use crate::data::BlockKind;
use crate::error::BlockError;
use crate::patch::{DataPatch, LayoutPatch, StylePatch, merge_object};

/// In-memory store of deck blocks.
#[derive(Debug, Clone, Default)]
pub struct BlockStore {
    blocks: HashMap<BlockId, Block>,
}

impl BlockStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { blocks: HashMap::new() }
    }

    /// Insert or replace a block. If a block with the same `id` already
    /// exists it is overwritten.
    pub fn insert(&mut self, block: Block) {
        self.blocks.insert(block.id, block);
    }

    /// Drop a new block of `kind` from the palette, stacked above everything
    /// else. Returns its id.
    pub fn create(&mut self, kind: BlockKind, at: Option<(f64, f64)>) -> BlockId {
        let z = self.max_z_index().map_or(0, |z| z + 1);
        let block = Block::from_palette(kind, at, z);
        let id = block.id;
        debug!(%id, tag = kind.tag(), z, "block created");
        self.insert(block);
        id
    }

    /// Remove a block by id, returning it if it was present.
    pub fn remove(&mut self, id: &BlockId) -> Option<Block> {
        let removed = self.blocks.remove(id);
        if removed.is_some() {
            debug!(%id, "block deleted");
        }
        removed
    }

    /// Return a reference to a block by id.
    #[must_use]
    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.get(id)
    }

    /// Apply a layout patch.
    ///
    /// # Errors
    ///
    /// [`BlockError::NotFound`] for an unknown id; [`BlockError::MissingLayout`]
    /// if the block has no layout to patch.
    pub fn apply_layout(&mut self, id: &BlockId, patch: &LayoutPatch) -> Result<(), BlockError> {
        let block = self.blocks.get_mut(id).ok_or(BlockError::NotFound(*id))?;
        let layout = block.layout.as_mut().ok_or(BlockError::MissingLayout(*id))?;
        patch.apply_to(layout);
        debug!(%id, ?patch, "layout patched");
        Ok(())
    }

    /// Shallow-merge a data patch into the block's payload.
    ///
    /// The merged payload must still decode as the block's type; otherwise the
    /// block is left untouched.
    ///
    /// # Errors
    ///
    /// [`BlockError::NotFound`] for an unknown id; [`BlockError::InvalidPayload`]
    /// when the merged value no longer fits the type.
    pub fn apply_data(&mut self, id: &BlockId, patch: &DataPatch) -> Result<(), BlockError> {
        let block = self.blocks.get_mut(id).ok_or(BlockError::NotFound(*id))?;
        let next = block.data.merged(patch).map_err(|source| BlockError::InvalidPayload {
            id: *id,
            tag: block.data.tag().to_owned(),
            source,
        })?;
        block.data = next;
        debug!(%id, keys = ?patch.keys().collect::<Vec<_>>(), "data patched");
        Ok(())
    }

    /// Shallow-merge a style patch into the block's style bag.
    ///
    /// # Errors
    ///
    /// [`BlockError::NotFound`] for an unknown id.
    pub fn apply_style(&mut self, id: &BlockId, patch: &StylePatch) -> Result<(), BlockError> {
        let block = self.blocks.get_mut(id).ok_or(BlockError::NotFound(*id))?;
        merge_object(&mut block.style, patch);
        debug!(%id, "style patched");
        Ok(())
    }

    /// Replace all blocks.
    pub fn load(&mut self, blocks: Vec<Block>) {
        self.blocks.clear();
        for block in blocks {
            self.blocks.insert(block.id, block);
        }
    }

    /// All blocks sorted by `(z_index, id)` for draw order. Blocks without a
    /// layout sort first with z-index 0.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Block> {
        let mut blocks: Vec<&Block> = self.blocks.values().collect();
        blocks.sort_by(|a, b| z_of(a).cmp(&z_of(b)).then_with(|| a.id.cmp(&b.id)));
        blocks
    }

    /// Highest z-index among blocks with a layout.
    #[must_use]
    pub fn max_z_index(&self) -> Option<i64> {
        self.blocks.values().filter_map(|b| b.layout.map(|l| l.z_index)).max()
    }

    /// Number of blocks currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if the store contains no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

fn z_of(block: &Block) -> i64 {
    block.layout.map_or(0, |l| l.z_index)
}
