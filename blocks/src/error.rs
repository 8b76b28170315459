//! Error type for store mutations.

use crate::block::BlockId;

/// Error returned by [`crate::store::BlockStore`] mutations.
#[derive(Debug, thiserror::Error)]
pub enum BlockError {
    /// No block with this id exists in the store.
    #[error("block not found: {0}")]
    NotFound(BlockId),
    /// The block has no layout to patch.
    #[error("block has no layout: {0}")]
    MissingLayout(BlockId),
    /// The merged payload no longer decodes as the block's type.
    #[error("patch does not fit `{tag}` payload of block {id}: {source}")]
    InvalidPayload {
        id: BlockId,
        tag: String,
        #[source]
        source: serde_json::Error,
    },
}
