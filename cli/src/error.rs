use std::path::PathBuf;

use blocks::{BlockError, BlockId};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown block type: {0}")]
    UnknownType(String),
    #[error("block not found: {0}")]
    BlockNotFound(BlockId),
    #[error("block {id} has no editable property `{prop}`")]
    NoSuchProperty { id: BlockId, prop: String },
    #[error("property `{prop}` rejected value `{value}`")]
    Rejected { prop: String, value: String },
    #[error(transparent)]
    Block(#[from] BlockError),
}
