//! View math: coordinate mapping, zoom levels and scroll arithmetic.

mod mapper;
mod zoom;

pub use mapper::CoordinateMapper;
pub use zoom::{Zoom, scroll_value, zoom_anchor};
