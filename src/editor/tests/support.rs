//! Recording host doubles for editor tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::EditorConfig;
use crate::editor::{CursorController, CursorKind, Editor, EditorObserver, Mode, Orientation};
use crate::model::{BoundingBox, Point, Size};

/// A notification received by the recording observer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Event {
    BoxChanged(Option<BoundingBox>),
    ModeChanged(Mode),
    Status(String),
    Scroll(f32, Orientation),
}

/// Observer that appends every notification to a shared log.
#[derive(Clone, Default)]
pub(super) struct Recorder(Rc<RefCell<Vec<Event>>>);

impl Recorder {
    pub(super) fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub(super) fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub(super) fn boxes(&self) -> Vec<Option<BoundingBox>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::BoxChanged(bbox) => Some(bbox),
                _ => None,
            })
            .collect()
    }

    pub(super) fn modes(&self) -> Vec<Mode> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::ModeChanged(mode) => Some(mode),
                _ => None,
            })
            .collect()
    }

    pub(super) fn last_status(&self) -> Option<String> {
        self.events().into_iter().rev().find_map(|event| match event {
            Event::Status(text) => Some(text),
            _ => None,
        })
    }

    pub(super) fn scrolls(&self) -> Vec<(f32, Orientation)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Scroll(delta, orientation) => Some((delta, orientation)),
                _ => None,
            })
            .collect()
    }
}

impl EditorObserver for Recorder {
    fn on_box_changed(&mut self, bbox: Option<BoundingBox>) {
        self.0.borrow_mut().push(Event::BoxChanged(bbox));
    }

    fn on_mode_changed(&mut self, mode: Mode) {
        self.0.borrow_mut().push(Event::ModeChanged(mode));
    }

    fn on_status_text(&mut self, text: &str) {
        self.0.borrow_mut().push(Event::Status(text.to_string()));
    }

    fn on_scroll_request(&mut self, delta: f32, orientation: Orientation) {
        self.0.borrow_mut().push(Event::Scroll(delta, orientation));
    }
}

/// Cursor controller backed by a shared stack.
#[derive(Clone, Default)]
pub(super) struct CursorStack(Rc<RefCell<Vec<CursorKind>>>);

impl CursorStack {
    pub(super) fn stack(&self) -> Vec<CursorKind> {
        self.0.borrow().clone()
    }
}

impl CursorController for CursorStack {
    fn push(&mut self, kind: CursorKind) {
        self.0.borrow_mut().push(kind);
    }

    fn pop(&mut self) {
        self.0.borrow_mut().pop();
    }
}

pub(super) fn p(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// The box used throughout the scenarios.
pub(super) fn sample_box() -> BoundingBox {
    BoundingBox::new(10.0, 10.0, 100.0, 80.0)
}

/// Editor with a 640x480 image shown at 100% in a viewport of the same size,
/// so widget and image coordinates coincide.
pub(super) fn editor_with(config: EditorConfig) -> (Editor, Recorder) {
    let mut editor = Editor::new(config);
    editor.set_viewport(Size::new(640.0, 480.0));
    editor.set_image(Size::new(640.0, 480.0));
    let recorder = Recorder::default();
    editor.set_observer(recorder.clone());
    (editor, recorder)
}

pub(super) fn editor() -> (Editor, Recorder) {
    editor_with(EditorConfig::default())
}

pub(super) fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
