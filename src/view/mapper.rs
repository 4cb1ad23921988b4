//! Widget-space to image-space mapping.
//!
//! The host paints the image with `scale(s)` followed by `translate(offset)`,
//! where `offset` centers the scaled image along any axis on which it is
//! smaller than the viewport. Pointer positions arrive in widget space and are
//! mapped back through the exact inverse.

use crate::model::{Point, Size};

/// Mapping between widget pixels and image pixels for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    scale: f32,
    image: Size,
    viewport: Size,
}

impl CoordinateMapper {
    /// Create a mapper. `scale` must be positive; [`Zoom`](super::Zoom)
    /// guarantees this for values it produces.
    pub fn new(scale: f32, image: Size, viewport: Size) -> Self {
        debug_assert!(scale > 0.0, "scale must be positive, got {scale}");
        Self {
            scale,
            image,
            viewport,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Centering offset in image pixels.
    pub fn offset(&self) -> Point {
        let s = self.scale;
        let axis = |image: f32, viewport: f32| {
            let scaled = image * s;
            if scaled < viewport {
                (viewport - scaled) / (2.0 * s)
            } else {
                0.0
            }
        };
        Point::new(
            axis(self.image.width, self.viewport.width),
            axis(self.image.height, self.viewport.height),
        )
    }

    /// Convert a widget-space point to image space.
    pub fn to_image(&self, widget: Point) -> Point {
        let offset = self.offset();
        Point::new(
            widget.x / self.scale - offset.x,
            widget.y / self.scale - offset.y,
        )
    }

    /// Convert an image-space point to widget space.
    pub fn to_widget(&self, image: Point) -> Point {
        let offset = self.offset();
        Point::new(
            (image.x + offset.x) * self.scale,
            (image.y + offset.y) * self.scale,
        )
    }

    /// Convert a length in device pixels to image pixels.
    pub fn to_image_len(&self, device: f32) -> f32 {
        device / self.scale
    }

    /// Size the scaled image occupies in the viewport.
    pub fn scaled_image_size(&self) -> Size {
        Size::new(self.image.width * self.scale, self.image.height * self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_identity_when_viewport_matches_image() {
        let size = Size::new(640.0, 480.0);
        let mapper = CoordinateMapper::new(1.0, size, size);
        assert_eq!(mapper.offset(), Point::new(0.0, 0.0));
        assert_eq!(mapper.to_image(Point::new(10.0, 20.0)), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_offset_centers_small_image() {
        // 640x480 at 50% is 320x240 inside an 800x600 viewport.
        let mapper =
            CoordinateMapper::new(0.5, Size::new(640.0, 480.0), Size::new(800.0, 600.0));
        let offset = mapper.offset();
        assert!(approx_eq(offset.x, (800.0 - 320.0) / 1.0));
        assert!(approx_eq(offset.y, (600.0 - 240.0) / 1.0));

        // The image origin is painted at the centered position.
        let origin = mapper.to_widget(Point::new(0.0, 0.0));
        assert!(approx_eq(origin.x, 240.0));
        assert!(approx_eq(origin.y, 180.0));
    }

    #[test]
    fn test_no_offset_on_overflowing_axis() {
        // At 200% the image is 1280 wide (overflows) but 960 tall in a 1000 tall viewport.
        let mapper =
            CoordinateMapper::new(2.0, Size::new(640.0, 480.0), Size::new(800.0, 1000.0));
        let offset = mapper.offset();
        assert_eq!(offset.x, 0.0);
        assert!(approx_eq(offset.y, 10.0));
    }

    #[test]
    fn test_to_image_divides_by_scale() {
        let mapper =
            CoordinateMapper::new(2.0, Size::new(640.0, 480.0), Size::new(100.0, 100.0));
        let p = mapper.to_image(Point::new(100.0, 50.0));
        assert!(approx_eq(p.x, 50.0));
        assert!(approx_eq(p.y, 25.0));
        assert!(approx_eq(mapper.to_image_len(11.0), 5.5));
    }

    #[test]
    fn test_round_trip_across_scales() {
        let image = Size::new(640.0, 480.0);
        let viewport = Size::new(900.0, 700.0);
        let points = [
            Point::new(0.0, 0.0),
            Point::new(123.0, 456.0),
            Point::new(899.0, 699.0),
            Point::new(-40.0, 12.5),
        ];
        for percent in [1u32, 10, 33, 100, 150, 275, 500] {
            let mapper = CoordinateMapper::new(percent as f32 * 0.01, image, viewport);
            for p in points {
                let back = mapper.to_widget(mapper.to_image(p));
                let tolerance = EPSILON * (1.0 + p.x.abs().max(p.y.abs()));
                assert!(
                    (back.x - p.x).abs() < tolerance && (back.y - p.y).abs() < tolerance,
                    "round trip at {percent}% moved {p:?} to {back:?}"
                );
            }
        }
    }
}
