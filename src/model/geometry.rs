//! Points and sizes shared by the model, the view math and the editor.

/// A 2D point. Whether it is in image or widget space depends on the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another point.
    pub fn distance_to(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Vector from `other` to `self`.
    pub fn delta_from(&self, other: &Point) -> (f32, f32) {
        (self.x - other.x, self.y - other.y)
    }
}

/// Width and height, e.g. of a loaded image or of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if a point lies in `[0, width] x [0, height]`.
    pub fn contains(&self, point: &Point) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// Clamp a point into `[0, width] x [0, height]`.
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            point.x.clamp(0.0, self.width.max(0.0)),
            point.y.clamp(0.0, self.height.max(0.0)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert!((p1.distance_to(&p2) - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_size_contains_is_closed() {
        let size = Size::new(640.0, 480.0);
        assert!(size.contains(&Point::new(0.0, 0.0)));
        assert!(size.contains(&Point::new(640.0, 480.0)));
        assert!(!size.contains(&Point::new(-0.5, 10.0)));
        assert!(!size.contains(&Point::new(10.0, 480.5)));
    }

    #[test]
    fn test_size_clamp() {
        let size = Size::new(640.0, 480.0);
        assert_eq!(size.clamp(Point::new(700.0, -3.0)), Point::new(640.0, 0.0));
        assert_eq!(size.clamp(Point::new(12.5, 30.0)), Point::new(12.5, 30.0));
    }
}
