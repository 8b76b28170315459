//! Block canvas: direct manipulation and render dispatch for deck blocks.
//!
//! The canvas owns no block data. Hosts pass a read-only
//! [`blocks::BlockStore`] into every event handler; the engine answers with
//! [`engine::Action`]s that describe what should change, and the
//! [`container::Canvas`] forwards them to whichever host callbacks are
//! present. The only state kept here is the selection set, the active
//! gesture, and an inline text-edit buffer.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::CanvasEngine`]: pointer, keyboard, and edit handling |
//! | [`container`] | [`container::Canvas`]: engine plus optional host callbacks |
//! | [`input`] | Modifiers, keys, gesture state machine, scoped pointer capture |
//! | [`geometry`] | Resize, translate, and bounds clamping on [`blocks::Layout`] |
//! | [`hit`] | Resize handles and hit-testing against rendered blocks |
//! | [`camera`] | Zoom-aware conversion between screen and canvas space |
//! | [`render`] | Scene assembly: layout, selection, theme, comment bubbles |
//! | [`content`] | Exhaustive type dispatch into a serializable content view |
//! | [`theme`] | Deck theme merged beneath block-local style |
//! | [`config`] | Surface bounds, zoom, and size limits |
//! | [`consts`] | Shared numeric constants |

pub mod camera;
pub mod config;
pub mod consts;
pub mod container;
pub mod content;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod render;
pub mod theme;
