//! labeltrack - single bounding box annotation kernel
//!
//! The editing core of a tool that labels one bounding box per image and
//! stores the boxes in a plain text file, one line per image. Windowing,
//! image decoding and rendering belong to the host; this crate provides:
//!
//! - [`model`]: the box, its corners and plain geometry
//! - [`view`]: zoom levels and the widget/image coordinate mapping
//! - [`editor`]: the create/edit interaction state machine
//! - [`format`]: the label file codec
//! - [`session`]: per-image boxes, navigation and saving
//! - [`config`]: editor tunables

pub mod config;
pub mod constants;
pub mod editor;
pub mod format;
pub mod model;
pub mod session;
pub mod view;

pub use config::EditorConfig;
pub use editor::{Editor, EditorError, EditorObserver};
pub use model::{BoundingBox, Corner, Point, Size};
pub use session::LabelSession;
