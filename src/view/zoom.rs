//! Zoom level mathematics.
//!
//! The zoom level is an integer percent in `[1, 500]`. These functions cover
//! the zoom commands (step in/out, reset, fit to window, mouse wheel) and the
//! scroll arithmetic the host applies for pan and wheel scroll requests.

use crate::constants::zoom as zoom_const;
use crate::model::{Point, Size};

/// Zoom level in integer percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Zoom {
    percent: u32,
}

impl Zoom {
    /// Create a zoom level, clamped to the supported range.
    pub fn new(percent: i64) -> Self {
        let clamped = percent.clamp(
            i64::from(zoom_const::MIN_PERCENT),
            i64::from(zoom_const::MAX_PERCENT),
        );
        Self {
            percent: u32::try_from(clamped).unwrap_or(zoom_const::DEFAULT_PERCENT),
        }
    }

    /// 100%, the "original size" level.
    pub fn original() -> Self {
        Self {
            percent: zoom_const::DEFAULT_PERCENT,
        }
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }

    /// Image-to-widget pixel ratio, in `[0.01, 5.00]`.
    pub fn scale(&self) -> f32 {
        self.percent as f32 * 0.01
    }

    /// Add a (possibly negative) percent increment, clamped.
    pub fn add(&self, increment: i32) -> Zoom {
        Zoom::new(i64::from(self.percent) + i64::from(increment))
    }

    /// Zoom in by `step` percent.
    pub fn zoom_in(&self, step: u32) -> Zoom {
        Zoom::new(i64::from(self.percent) + i64::from(step))
    }

    /// Zoom out by `step` percent.
    pub fn zoom_out(&self, step: u32) -> Zoom {
        Zoom::new(i64::from(self.percent) - i64::from(step))
    }

    /// Apply a mouse wheel angle delta: one step per full notch, rounding
    /// toward negative infinity, so a partial backwards notch still zooms out.
    pub fn wheel(&self, angle_delta: i32, step: u32) -> Zoom {
        let notches = angle_delta.div_euclid(zoom_const::WHEEL_NOTCH);
        Zoom::new(i64::from(self.percent) + i64::from(notches) * i64::from(step))
    }

    /// Largest zoom at which the whole image fits in the viewport.
    ///
    /// Returns `None` for degenerate image or viewport sizes.
    pub fn fit_window(image: Size, viewport: Size) -> Option<Zoom> {
        let w1 = viewport.width - zoom_const::FIT_MARGIN;
        let h1 = viewport.height - zoom_const::FIT_MARGIN;
        let (w2, h2) = (image.width, image.height);
        if w1 <= 0.0 || h1 <= 0.0 || w2 <= 0.0 || h2 <= 0.0 {
            return None;
        }

        let scale = if w1 / h1 <= w2 / h2 { w1 / w2 } else { h1 / h2 };
        // Truncate like the spinbox does
        Some(Zoom::new((100.0 * scale) as i64))
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::original()
    }
}

/// Where in the viewport a zoom is anchored, as a fraction per axis.
///
/// A cursor within the outer margin pins that edge (0 or 1); in between the
/// fraction is linear. After the zoom the host moves each scroll bar by
/// `fraction * (new_maximum - old_maximum)`, keeping the region under the
/// cursor roughly in place.
pub fn zoom_anchor(cursor: Point, viewport: Size) -> (f32, f32) {
    let margin = zoom_const::ANCHOR_MARGIN;
    let axis = |pos: f32, extent: f32| {
        let span = extent - 2.0 * margin * extent;
        if span <= 0.0 {
            return 0.5;
        }
        ((pos - margin * extent) / span).clamp(0.0, 1.0)
    };
    (
        axis(cursor.x, viewport.width),
        axis(cursor.y, viewport.height),
    )
}

/// New scroll bar value for a scroll request of `delta` (wheel units or pan
/// pixels), scaled by the bar's single step.
pub fn scroll_value(current: i32, single_step: i32, delta: f32) -> i32 {
    let notches = -delta / zoom_const::WHEEL_NOTCH as f32;
    (current as f32 + single_step as f32 * notches) as i32
}
