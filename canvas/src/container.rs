//! The canvas container: engine state plus the host's optional callbacks.
//!
//! The container routes input to [`CanvasEngine`] and forwards each resulting
//! [`Action`] to the matching callback. Callbacks that are not supplied turn
//! the corresponding interaction off, so a canvas built with
//! `Callbacks::default()` is a read-only viewer.

#[cfg(test)]
#[path = "container_test.rs"]
mod container_test;

use std::rc::Rc;

use blocks::{BlockError, BlockId, BlockStore, DataPatch, LayoutPatch};
use tracing::debug;

use crate::camera::Point;
use crate::config::CanvasConfig;
use crate::engine::{Action, CanvasEngine, Capabilities};
use crate::input::{Button, Key, Modifiers, PointerCapture};
use crate::render::{CanvasView, CommentMarker, render};
use crate::theme::Theme;

type SelectFn = Box<dyn FnMut(Option<BlockId>, bool)>;
type LayoutFn = Box<dyn FnMut(BlockId, LayoutPatch)>;
type DataFn = Box<dyn FnMut(BlockId, DataPatch)>;
type IdFn = Box<dyn FnMut(BlockId)>;
type CursorFn = Box<dyn FnMut(&'static str)>;

/// Upward callbacks a host may supply. Every one is optional.
#[derive(Default)]
pub struct Callbacks {
    pub select: Option<SelectFn>,
    pub update_layout: Option<LayoutFn>,
    pub update_data: Option<DataFn>,
    pub open_editor: Option<IdFn>,
    pub delete_block: Option<IdFn>,
    pub set_cursor: Option<CursorFn>,
}

impl Callbacks {
    #[must_use]
    pub fn on_select(mut self, f: impl FnMut(Option<BlockId>, bool) + 'static) -> Self {
        self.select = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_update_layout(mut self, f: impl FnMut(BlockId, LayoutPatch) + 'static) -> Self {
        self.update_layout = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_update_data(mut self, f: impl FnMut(BlockId, DataPatch) + 'static) -> Self {
        self.update_data = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_open_editor(mut self, f: impl FnMut(BlockId) + 'static) -> Self {
        self.open_editor = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_delete_block(mut self, f: impl FnMut(BlockId) + 'static) -> Self {
        self.delete_block = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_set_cursor(mut self, f: impl FnMut(&'static str) + 'static) -> Self {
        self.set_cursor = Some(Box::new(f));
        self
    }

    /// Interactions enabled by the callbacks present.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            select: self.select.is_some(),
            update_layout: self.update_layout.is_some(),
            update_data: self.update_data.is_some(),
            open_editor: self.open_editor.is_some(),
            delete: self.delete_block.is_some(),
        }
    }
}

pub struct Canvas {
    engine: CanvasEngine,
    callbacks: Callbacks,
    theme: Theme,
    comments: Vec<CommentMarker>,
}

impl Canvas {
    #[must_use]
    pub fn new(config: CanvasConfig, theme: Theme, callbacks: Callbacks) -> Self {
        let engine = CanvasEngine::new(config).with_capabilities(callbacks.capabilities());
        Self { engine, callbacks, theme, comments: Vec::new() }
    }

    #[must_use]
    pub fn with_capture(mut self, capture: Rc<dyn PointerCapture>) -> Self {
        self.engine = self.engine.with_capture(capture);
        self
    }

    #[must_use]
    pub fn engine(&self) -> &CanvasEngine {
        &self.engine
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_comments(&mut self, comments: Vec<CommentMarker>) {
        self.comments = comments;
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.engine.set_zoom(zoom);
    }

    /// The host deleted a block by some other route.
    pub fn forget(&mut self, id: &BlockId) {
        self.engine.forget(id);
    }

    // --- Input ---

    pub fn pointer_down(&mut self, store: &BlockStore, pt: Point, button: Button, modifiers: Modifiers) {
        let actions = self.engine.on_pointer_down(store, pt, button, modifiers);
        self.dispatch(actions);
    }

    pub fn pointer_move(&mut self, store: &BlockStore, pt: Point, modifiers: Modifiers) {
        let actions = self.engine.on_pointer_move(store, pt, modifiers);
        self.dispatch(actions);
    }

    pub fn pointer_up(&mut self, pt: Point, button: Button, modifiers: Modifiers) {
        let actions = self.engine.on_pointer_up(pt, button, modifiers);
        self.dispatch(actions);
    }

    pub fn pointer_cancel(&mut self) {
        self.engine.on_pointer_cancel();
    }

    pub fn double_click(&mut self, store: &BlockStore, pt: Point) {
        let actions = self.engine.on_double_click(store, pt);
        self.dispatch(actions);
    }

    pub fn key_down(&mut self, store: &BlockStore, key: &Key, modifiers: Modifiers) {
        let actions = self.engine.on_key_down(store, key, modifiers);
        self.dispatch(actions);
    }

    pub fn edit_text(&mut self, text: &str) {
        self.engine.edit_text(text);
    }

    /// Inline editor lost focus: commit the buffer.
    pub fn blur(&mut self) {
        let actions = self.engine.commit_edit();
        self.dispatch(actions);
    }

    // --- Output ---

    #[must_use]
    pub fn render(&self, store: &BlockStore) -> CanvasView {
        render(store, &self.engine, &self.theme, &self.comments)
    }

    fn dispatch(&mut self, actions: Vec<Action>) {
        for action in actions {
            debug!(?action, "dispatching canvas action");
            match action {
                Action::Select { id, multi } => {
                    if let Some(f) = self.callbacks.select.as_mut() {
                        f(id, multi);
                    }
                }
                Action::UpdateLayout { id, patch } => {
                    if let Some(f) = self.callbacks.update_layout.as_mut() {
                        f(id, patch);
                    }
                }
                Action::UpdateData { id, patch } => {
                    if let Some(f) = self.callbacks.update_data.as_mut() {
                        f(id, patch);
                    }
                }
                Action::OpenEditor { id } => {
                    if let Some(f) = self.callbacks.open_editor.as_mut() {
                        f(id);
                    }
                }
                Action::DeleteBlock { id } => {
                    self.engine.forget(&id);
                    if let Some(f) = self.callbacks.delete_block.as_mut() {
                        f(id);
                    }
                }
                Action::SetCursor(cursor) => {
                    if let Some(f) = self.callbacks.set_cursor.as_mut() {
                        f(cursor);
                    }
                }
            }
        }
    }
}

/// Apply a canvas action to the owning store.
///
/// Selection, editor, and cursor actions carry no block mutation and are
/// accepted as no-ops.
///
/// # Errors
///
/// Propagates [`BlockError`] from the store when a patch does not apply.
pub fn apply_action(store: &mut BlockStore, action: &Action) -> Result<(), BlockError> {
    match action {
        Action::UpdateLayout { id, patch } => store.apply_layout(id, patch),
        Action::UpdateData { id, patch } => store.apply_data(id, patch),
        Action::DeleteBlock { id } => {
            if store.remove(id).is_none() {
                return Err(BlockError::NotFound(*id));
            }
            Ok(())
        }
        Action::Select { .. } | Action::OpenEditor { .. } | Action::SetCursor(_) => Ok(()),
    }
}
