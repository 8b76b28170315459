//! Block model for the deck canvas.
//!
//! A deck is a flat collection of typed, placeable [`block::Block`]s. This
//! crate owns what a block *is* (its geometry envelope, open style bag, and
//! type-specific payload), what can be *edited* on each block type (the
//! static schema registry), and the single store through which every
//! mutation flows as a shallow-merge patch.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`block`] | `Block`, `Layout`, and the wire representation |
//! | [`data`] | The closed `BlockKind` / `BlockData` union |
//! | [`payload`] | Per-type payload structs |
//! | [`kind`] | Categories and per-kind traits (inline text field, default size) |
//! | [`schema`] | Property descriptors (`EditableProp`) and default-value seeding |
//! | [`registry`] | Static `BlockKind -> BlockMeta` lookup |
//! | [`patch`] | Patch types and the shallow-merge rule |
//! | [`store`] | `BlockStore`, the owning chokepoint for mutations |
//! | [`consts`] | Shared numeric constants |
//! | [`error`] | `BlockError` |

pub mod block;
pub mod consts;
pub mod data;
pub mod error;
pub mod kind;
pub mod patch;
pub mod payload;
pub mod registry;
pub mod schema;
pub mod store;

pub use block::{Block, BlockId, Layout, Style};
pub use data::{BlockData, BlockKind, Unrecognized};
pub use error::BlockError;
pub use kind::Category;
pub use patch::{DataPatch, LayoutPatch, StylePatch};
pub use schema::{BlockMeta, EditableProp, PropKind};
pub use store::BlockStore;
