//! The canvas engine: selection, gestures, and inline editing.
//!
//! Every handler reads the host's [`BlockStore`] and returns the [`Action`]s
//! the host should apply. Nothing here mutates blocks. Layout changes are
//! committed once, on pointer-up; intermediate frames live only in the active
//! [`Gesture`] and are exposed through [`CanvasEngine::preview`].

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::BTreeSet;
use std::rc::Rc;

use blocks::{BlockId, BlockStore, DataPatch, Layout, LayoutPatch};
use serde_json::Value;
use tracing::debug;

use crate::camera::{Camera, Point};
use crate::config::CanvasConfig;
use crate::geometry::{clamp_to_bounds, resize, translate};
use crate::hit::{HitPart, hit_test};
use crate::input::{Button, CaptureGuard, Gesture, Key, Modifiers, NoCapture, PointerCapture, Tracked};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Selection changed. `None` clears the selection.
    Select { id: Option<BlockId>, multi: bool },
    UpdateLayout { id: BlockId, patch: LayoutPatch },
    UpdateData { id: BlockId, patch: DataPatch },
    OpenEditor { id: BlockId },
    DeleteBlock { id: BlockId },
    SetCursor(&'static str),
}

/// Which host callbacks exist. A missing capability makes the matching
/// interaction inert instead of failing.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub select: bool,
    pub update_layout: bool,
    pub update_data: bool,
    pub open_editor: bool,
    pub delete: bool,
}

impl Capabilities {
    pub const ALL: Self = Self { select: true, update_layout: true, update_data: true, open_editor: true, delete: true };
    pub const READ_ONLY: Self =
        Self { select: false, update_layout: false, update_data: false, open_editor: false, delete: false };
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::ALL
    }
}

/// Local rich-text buffer for a block in inline edit mode.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineEdit {
    pub id: BlockId,
    /// Data field the buffer commits into.
    pub field: &'static str,
    /// Field value when editing began.
    pub original: String,
    pub buffer: String,
}

pub struct CanvasEngine {
    config: CanvasConfig,
    camera: Camera,
    capabilities: Capabilities,
    capture: Rc<dyn PointerCapture>,
    selection: BTreeSet<BlockId>,
    gesture: Gesture,
    editing: Option<InlineEdit>,
    cursor: &'static str,
}

impl Default for CanvasEngine {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl CanvasEngine {
    #[must_use]
    pub fn new(config: CanvasConfig) -> Self {
        let config = config.normalized();
        Self {
            camera: Camera::new(config.zoom),
            config,
            capabilities: Capabilities::ALL,
            capture: Rc::new(NoCapture),
            selection: BTreeSet::new(),
            gesture: Gesture::Idle,
            editing: None,
            cursor: "default",
        }
    }

    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    #[must_use]
    pub fn with_capture(mut self, capture: Rc<dyn PointerCapture>) -> Self {
        self.capture = capture;
        self
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    #[must_use]
    pub fn selection(&self) -> &BTreeSet<BlockId> {
        &self.selection
    }

    #[must_use]
    pub fn is_selected(&self, id: &BlockId) -> bool {
        self.selection.contains(id)
    }

    #[must_use]
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    #[must_use]
    pub fn editing(&self) -> Option<&InlineEdit> {
        self.editing.as_ref()
    }

    /// Candidate layout of the block under an active gesture.
    #[must_use]
    pub fn preview(&self) -> Option<(BlockId, Layout)> {
        self.gesture.tracked().map(|t| (t.id, t.candidate))
    }

    // --- Host-driven state ---

    /// Change zoom. Cancels any gesture, since its start point was
    /// measured at the old scale.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.cancel_gesture();
        self.camera = Camera::new(zoom);
        self.config.zoom = self.camera.zoom;
    }

    /// Drop every trace of a block the host deleted.
    pub fn forget(&mut self, id: &BlockId) {
        self.selection.remove(id);
        if self.gesture.tracked().is_some_and(|t| t.id == *id) {
            self.cancel_gesture();
        }
        if self.editing.as_ref().is_some_and(|e| e.id == *id) {
            self.editing = None;
        }
    }

    /// Drop selected ids that no longer exist in `store`.
    pub fn retain_existing(&mut self, store: &BlockStore) {
        self.selection.retain(|id| store.get(id).is_some());
    }

    // --- Pointer ---

    pub fn on_pointer_down(
        &mut self,
        store: &BlockStore,
        screen_pt: Point,
        button: Button,
        modifiers: Modifiers,
    ) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let mut actions = Vec::new();
        let pt = self.camera.screen_to_canvas(screen_pt);
        let sorted = store.sorted();
        let hit = hit_test(pt, &sorted, &self.camera, &self.selection, self.config.drag_handle_height);

        if self.editing.as_ref().is_some_and(|e| hit.is_none_or(|h| h.block_id != e.id)) {
            actions.extend(self.commit_edit());
        }

        let Some(hit) = hit else {
            if self.capabilities.select && !modifiers.multi_select() && !self.selection.is_empty() {
                self.selection.clear();
                debug!("selection cleared");
                actions.push(Action::Select { id: None, multi: false });
            }
            return actions;
        };

        let Some(layout) = store.get(&hit.block_id).and_then(|b| b.layout) else {
            return actions;
        };

        match hit.part {
            HitPart::Resize(handle) => {
                if self.capabilities.update_layout {
                    debug!(id = %hit.block_id, ?handle, "resize started");
                    self.gesture = Gesture::Resizing(self.track(hit.block_id, screen_pt, layout), handle);
                }
            }
            HitPart::DragHandle | HitPart::Body => {
                actions.extend(self.select(hit.block_id, modifiers.multi_select()));
                if hit.part == HitPart::DragHandle && self.capabilities.update_layout {
                    debug!(id = %hit.block_id, "drag started");
                    self.gesture = Gesture::Dragging(self.track(hit.block_id, screen_pt, layout));
                }
            }
        }
        actions
    }

    pub fn on_pointer_move(&mut self, store: &BlockStore, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        if self.gesture.is_idle() {
            return self.hover_cursor(store, screen_pt).into_iter().collect();
        }
        self.update_candidate(screen_pt);
        Vec::new()
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        self.update_candidate(screen_pt);
        let bounds = self.config.bounds();
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => Vec::new(),
            Gesture::Dragging(t) => {
                if t.candidate == t.origin {
                    debug!(id = %t.id, "drag ended without displacement");
                    return Vec::new();
                }
                let released = clamp_to_bounds(&t.candidate, bounds);
                let moved = LayoutPatch::diff(&t.origin, &released);
                if moved.x.is_none() && moved.y.is_none() {
                    debug!(id = %t.id, "drag ended without displacement");
                    return Vec::new();
                }
                debug!(id = %t.id, x = released.x, y = released.y, "drag committed");
                vec![Action::UpdateLayout { id: t.id, patch: LayoutPatch::position(released.x, released.y) }]
            }
            Gesture::Resizing(t, handle) => {
                let patch = LayoutPatch::diff(&t.origin, &t.candidate);
                if patch.is_empty() {
                    return Vec::new();
                }
                debug!(id = %t.id, ?handle, ?patch, "resize committed");
                vec![Action::UpdateLayout { id: t.id, patch }]
            }
        }
    }

    /// Pointer lost (e.g. the window blurred): abandon the gesture.
    pub fn on_pointer_cancel(&mut self) {
        self.cancel_gesture();
    }

    /// Text-capable blocks enter inline editing; everything else asks the
    /// host to open the inspector.
    pub fn on_double_click(&mut self, store: &BlockStore, screen_pt: Point) -> Vec<Action> {
        let pt = self.camera.screen_to_canvas(screen_pt);
        let sorted = store.sorted();
        let Some(hit) = hit_test(pt, &sorted, &self.camera, &self.selection, self.config.drag_handle_height) else {
            return Vec::new();
        };
        let Some(block) = store.get(&hit.block_id) else {
            return Vec::new();
        };
        let field = block.kind().and_then(blocks::BlockKind::inline_text_field);

        if let Some(field) = field {
            if self.capabilities.update_data {
                if self.editing.as_ref().is_some_and(|e| e.id == block.id) {
                    return Vec::new();
                }
                let actions = self.commit_edit();
                let original = match block.data_value().get(field) {
                    Some(Value::String(s)) => s.clone(),
                    _ => String::new(),
                };
                debug!(id = %block.id, field, "inline edit started");
                self.editing = Some(InlineEdit { id: block.id, field, buffer: original.clone(), original });
                return actions;
            }
        }
        if self.capabilities.open_editor {
            return vec![Action::OpenEditor { id: block.id }];
        }
        Vec::new()
    }

    // --- Inline editing ---

    /// Replace the inline edit buffer. Ignored when not editing.
    pub fn edit_text(&mut self, text: &str) {
        if let Some(edit) = self.editing.as_mut() {
            text.clone_into(&mut edit.buffer);
        }
    }

    /// Leave inline edit mode, committing the buffer if it changed.
    pub fn commit_edit(&mut self) -> Vec<Action> {
        let Some(edit) = self.editing.take() else {
            return Vec::new();
        };
        if edit.buffer == edit.original {
            return Vec::new();
        }
        debug!(id = %edit.id, field = edit.field, "inline edit committed");
        let mut patch = DataPatch::new();
        patch.insert(edit.field.to_owned(), Value::String(edit.buffer));
        vec![Action::UpdateData { id: edit.id, patch }]
    }

    /// Leave inline edit mode, discarding the buffer.
    pub fn cancel_edit(&mut self) {
        if let Some(edit) = self.editing.take() {
            debug!(id = %edit.id, "inline edit discarded");
        }
    }

    // --- Keyboard ---

    pub fn on_key_down(&mut self, store: &BlockStore, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if key.is_escape() {
            self.cancel_gesture();
            self.cancel_edit();
            return Vec::new();
        }
        if self.editing.is_some() {
            return Vec::new();
        }
        if key.is_delete() {
            return self.delete_selection();
        }
        if key.is_select_all() && modifiers.command() {
            return self.select_all(store);
        }
        Vec::new()
    }

    /// One delete per selected block; the selection empties.
    pub fn delete_selection(&mut self) -> Vec<Action> {
        if !self.capabilities.delete || self.selection.is_empty() {
            return Vec::new();
        }
        self.cancel_gesture();
        let ids = std::mem::take(&mut self.selection);
        debug!(count = ids.len(), "deleting selection");
        ids.into_iter().map(|id| Action::DeleteBlock { id }).collect()
    }

    /// Add every rendered block to the selection.
    pub fn select_all(&mut self, store: &BlockStore) -> Vec<Action> {
        if !self.capabilities.select {
            return Vec::new();
        }
        store
            .sorted()
            .into_iter()
            .filter(|b| b.layout.is_some())
            .filter_map(|b| self.select(b.id, true))
            .collect()
    }

    // --- Internals ---

    fn select(&mut self, id: BlockId, multi: bool) -> Option<Action> {
        if !self.capabilities.select {
            return None;
        }
        if !multi {
            self.selection.clear();
        }
        self.selection.insert(id);
        debug!(%id, multi, count = self.selection.len(), "selection changed");
        Some(Action::Select { id: Some(id), multi })
    }

    fn track(&self, id: BlockId, start: Point, origin: Layout) -> Tracked {
        Tracked { id, start, origin, candidate: origin, _capture: CaptureGuard::acquire(Rc::clone(&self.capture)) }
    }

    fn update_candidate(&mut self, screen_pt: Point) {
        let camera = self.camera;
        let min = self.config.min_block_size;
        let handle = match &self.gesture {
            Gesture::Resizing(_, h) => Some(*h),
            _ => None,
        };
        let Some(t) = self.gesture.tracked_mut() else {
            return;
        };
        let dx = camera.screen_dist_to_canvas(screen_pt.x - t.start.x);
        let dy = camera.screen_dist_to_canvas(screen_pt.y - t.start.y);
        t.candidate = match handle {
            Some(h) => resize(&t.origin, h, dx, dy, min),
            None => translate(&t.origin, dx, dy),
        };
    }

    fn cancel_gesture(&mut self) {
        if let Some(t) = self.gesture.tracked() {
            debug!(id = %t.id, "gesture cancelled");
        }
        self.gesture = Gesture::Idle;
    }

    /// Cursor for the hovered part; emitted only when it changes.
    fn hover_cursor(&mut self, store: &BlockStore, screen_pt: Point) -> Option<Action> {
        let pt = self.camera.screen_to_canvas(screen_pt);
        let sorted = store.sorted();
        let hit = hit_test(pt, &sorted, &self.camera, &self.selection, self.config.drag_handle_height);
        let cursor = match hit.map(|h| h.part) {
            Some(HitPart::Resize(h)) if self.capabilities.update_layout => h.cursor(),
            Some(HitPart::DragHandle) if self.capabilities.update_layout => "grab",
            _ => "default",
        };
        if cursor == self.cursor {
            return None;
        }
        self.cursor = cursor;
        Some(Action::SetCursor(cursor))
    }
}
