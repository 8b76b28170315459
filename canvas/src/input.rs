//! Input model: modifier keys, buttons, keys, and the gesture state machine.
//!
//! A gesture is one continuous pointer-down, move, up interaction. While a
//! gesture is live the host must route pointer events to the canvas even
//! when the pointer leaves it; [`PointerCapture`] is how the canvas asks for
//! that. Every non-idle [`Gesture`] owns a [`CaptureGuard`], so capture is
//! released exactly when the gesture ends, however it ends.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::fmt;
use std::rc::Rc;

use blocks::{BlockId, Layout};
use tracing::debug;

use crate::camera::Point;
use crate::hit::ResizeHandle;

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Whether a click should add to the selection instead of replacing it.
    #[must_use]
    pub fn multi_select(self) -> bool {
        self.shift || self.ctrl || self.meta
    }

    /// Platform command key (Ctrl or Cmd).
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Middle,
    Secondary,
}

/// A keyboard key as reported by the host (e.g. `"Delete"`, `"Escape"`, `"a"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }

    #[must_use]
    pub fn is_delete(&self) -> bool {
        self.0 == "Delete" || self.0 == "Backspace"
    }

    #[must_use]
    pub fn is_select_all(&self) -> bool {
        self.0.eq_ignore_ascii_case("a")
    }
}

/// Host hook for routing global pointer events to the canvas.
///
/// `attach` is called when a gesture starts and `detach` exactly once when it
/// ends. A browser host would add and remove window-level `pointermove` /
/// `pointerup` listeners here.
pub trait PointerCapture {
    fn attach(&self);
    fn detach(&self);
}

/// Capture sink for hosts that already deliver every pointer event.
#[derive(Debug, Default)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    fn attach(&self) {}
    fn detach(&self) {}
}

/// Scoped capture: attaches on creation, detaches on drop.
pub struct CaptureGuard {
    capture: Rc<dyn PointerCapture>,
}

impl CaptureGuard {
    #[must_use]
    pub fn acquire(capture: Rc<dyn PointerCapture>) -> Self {
        capture.attach();
        debug!("pointer capture attached");
        Self { capture }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.capture.detach();
        debug!("pointer capture detached");
    }
}

impl fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CaptureGuard")
    }
}

/// Context shared by every active gesture.
#[derive(Debug)]
pub struct Tracked {
    /// Block under manipulation.
    pub id: BlockId,
    /// Screen-space pointer position at pointer-down.
    pub start: Point,
    /// Layout at pointer-down.
    pub origin: Layout,
    /// Layout the gesture would commit if released now.
    pub candidate: Layout,
    pub(crate) _capture: CaptureGuard,
}

/// Gesture state machine: idle, dragging, or resizing by one handle.
#[derive(Debug, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging(Tracked),
    Resizing(Tracked, ResizeHandle),
}

impl Gesture {
    /// The tracked context, if a gesture is live.
    #[must_use]
    pub fn tracked(&self) -> Option<&Tracked> {
        match self {
            Self::Idle => None,
            Self::Dragging(t) | Self::Resizing(t, _) => Some(t),
        }
    }

    pub(crate) fn tracked_mut(&mut self) -> Option<&mut Tracked> {
        match self {
            Self::Idle => None,
            Self::Dragging(t) | Self::Resizing(t, _) => Some(t),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
