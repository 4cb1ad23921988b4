//! The editor's seams to its host: change notifications and cursor control.

use crate::model::BoundingBox;

use super::input::Mode;

/// Axis of a scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Notifications the host subscribes to.
///
/// All methods default to doing nothing, so a host only implements what it
/// displays. Boxes are passed by value; the host never holds a reference into
/// editor state.
pub trait EditorObserver {
    /// The box was created, resized, moved, copied or deleted by the editor.
    fn on_box_changed(&mut self, _bbox: Option<BoundingBox>) {}

    /// The interaction mode changed.
    fn on_mode_changed(&mut self, _mode: Mode) {}

    /// New status bar text: pointer position, plus box size while editing it.
    fn on_status_text(&mut self, _text: &str) {}

    /// A pan gesture asks the host to scroll the viewport by `delta` along
    /// `orientation`. See [`scroll_value`](crate::view::scroll_value).
    fn on_scroll_request(&mut self, _delta: f32, _orientation: Orientation) {}
}

/// Pointer shapes the editor asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorKind {
    /// Plain arrow
    #[default]
    Default,
    /// Over a corner handle
    Point,
    /// Crosshair while creating a box
    Draw,
    /// Closed hand while moving the box
    Move,
    /// Open hand over the box interior or while panning
    Grab,
}

/// A stack of cursor overrides owned by the host (e.g. the toolkit's
/// application-wide override cursor).
///
/// The editor keeps its pushes balanced: everything it pushes is popped again
/// on [`Editor::pointer_left`](super::Editor::pointer_left).
pub trait CursorController {
    /// Push an override cursor.
    fn push(&mut self, kind: CursorKind);

    /// Pop the most recent override cursor.
    fn pop(&mut self);
}

/// Cursor controller for hosts without cursor support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCursor;

impl CursorController for NoCursor {
    fn push(&mut self, _kind: CursorKind) {}

    fn pop(&mut self) {}
}

/// The editor's mirror of what it has pushed onto the host's cursor stack.
pub(super) struct CursorState {
    controller: Box<dyn CursorController>,
    pushed: Vec<CursorKind>,
    /// Shape to re-apply when the pointer enters the widget again.
    last: CursorKind,
}

impl CursorState {
    pub(super) fn new(controller: Box<dyn CursorController>) -> Self {
        Self {
            controller,
            pushed: Vec::new(),
            last: CursorKind::Default,
        }
    }

    /// Replace the top override with `kind`, pushing one if none is active.
    pub(super) fn set(&mut self, kind: CursorKind) {
        self.last = kind;
        if self.pushed.last() == Some(&kind) {
            return;
        }
        if self.pushed.pop().is_some() {
            self.controller.pop();
        }
        self.pushed.push(kind);
        self.controller.push(kind);
    }

    /// Push an additional override on top of the current one.
    pub(super) fn push(&mut self, kind: CursorKind) {
        self.pushed.push(kind);
        self.controller.push(kind);
    }

    /// Pop the top override, if the editor pushed one.
    pub(super) fn pop(&mut self) {
        if self.pushed.pop().is_some() {
            self.controller.pop();
        }
    }

    /// Pop everything the editor pushed.
    pub(super) fn restore(&mut self) {
        while self.pushed.pop().is_some() {
            self.controller.pop();
        }
    }

    /// Re-apply the last requested shape.
    pub(super) fn reapply(&mut self) {
        let kind = self.last;
        self.set(kind);
    }

    pub(super) fn current(&self) -> Option<CursorKind> {
        self.pushed.last().copied()
    }
}
