//! Schema-driven property inspector for deck blocks.
//!
//! Given a block and its registry entry, [`panel::inspect`] builds a tree of
//! [`control::Control`]s, one per editable property, with no per-type UI
//! code. Every control, however deeply nested, reports through a single
//! `(name, value)` callback; the host turns that into a shallow data patch.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`panel`] | Inspector panel: header, layout readout, property controls |
//! | [`dispatch`] | Recursive `PropKind -> Widget` dispatch, object arrays included |
//! | [`control`] | Control tree, widgets, and change events |
//! | [`editors`] | Specialized editors for structured shapes, with previews |
//! | [`color`] | Hex color parsing and normalization |
//! | [`consts`] | Clamps, preview sizes, and default colors |

pub mod color;
pub mod consts;
pub mod control;
pub mod dispatch;
pub mod editors;
pub mod panel;

pub use control::{Control, ControlEvent, Widget};
pub use panel::{Panel, PanelBody, inspect, inspect_with, patch_for};
