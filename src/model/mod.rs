//! Data model: image-space geometry and the per-image bounding box.

mod bbox;
mod geometry;

pub use bbox::{BoundingBox, Corner};
pub use geometry::{Point, Size};
