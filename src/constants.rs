//! Global constants for labeltrack

/// Corner grab radius in device pixels. Divided by the current scale before
/// comparing against image-space geometry.
pub const HIT_EPSILON: f32 = 11.0;

/// Distance an arrow key moves the box, in image pixels.
pub const NUDGE_STEP: f32 = 1.0;

/// Zoom limits and steps, in integer percent.
pub mod zoom {
    /// Smallest zoom level (1%)
    pub const MIN_PERCENT: u32 = 1;
    /// Largest zoom level (500%)
    pub const MAX_PERCENT: u32 = 500;
    /// Zoom level of "original size"
    pub const DEFAULT_PERCENT: u32 = 100;
    /// Increment for zoom in/out commands
    pub const STEP_PERCENT: u32 = 10;
    /// Mouse wheel angle delta for one notch
    pub const WHEEL_NOTCH: i32 = 120;
    /// Border kept free when fitting the image, so no scrollbars appear
    pub const FIT_MARGIN: f32 = 2.0;
    /// Fraction of the viewport at each edge that anchors zoom to that edge
    pub const ANCHOR_MARGIN: f32 = 0.1;
}

/// Label file format constants.
pub mod label {
    /// Serialized form of "no box for this image"
    pub const EMPTY_SENTINEL: &str = "-1.00,-1.00,-1.00,-1.00";
    /// Value of every field in the sentinel line
    pub const SENTINEL_VALUE: f32 = -1.0;
    /// Number of comma-separated fields per line
    pub const FIELD_COUNT: usize = 4;
}
