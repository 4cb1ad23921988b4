//! Input and state types of the editor.

use std::fmt;

use crate::model::{Corner, Point};

/// Interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The next press-drag-release draws a new box.
    Create,
    /// Hover highlights, corner resize, move and pan.
    #[default]
    Edit,
}

impl Mode {
    /// Get the display name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Create => "Create",
            Mode::Edit => "Edit",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Escape,
}

impl Key {
    /// Unit direction of an arrow key in image space (y grows downwards).
    pub fn direction(&self) -> Option<(f32, f32)> {
        match self {
            Key::Left => Some((-1.0, 0.0)),
            Key::Right => Some((1.0, 0.0)),
            Key::Up => Some((0.0, -1.0)),
            Key::Down => Some((0.0, 1.0)),
            Key::Escape => None,
        }
    }
}

/// Pointer buttons held during a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Buttons {
    pub primary: bool,
    pub secondary: bool,
    pub middle: bool,
}

impl Buttons {
    /// No button held (hover).
    pub const NONE: Buttons = Buttons {
        primary: false,
        secondary: false,
        middle: false,
    };

    /// Only the primary button held (drag).
    pub const PRIMARY: Buttons = Buttons {
        primary: true,
        secondary: false,
        middle: false,
    };

    /// Check if exactly the primary button is held.
    pub fn is_primary_only(&self) -> bool {
        *self == Self::PRIMARY
    }
}

/// What the pointer is over, in edit mode. Corner and interior hover are
/// mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    /// Within grab radius of a corner.
    Corner(Corner),
    /// Inside the box, away from the corners.
    Box,
}

/// Gesture started by a press in edit mode, chosen from the hover state at
/// the press point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Drag {
    /// Drag a corner; the opposite corner stays pinned.
    Resize(Corner),
    /// Translate the whole box. `last` is the pointer position of the last
    /// accepted step.
    Move { last: Point },
    /// Scroll the viewport relative to the press point.
    Pan { origin: Point },
}
