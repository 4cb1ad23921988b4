//! The axis-aligned bounding box of one image.
//!
//! A box is stored as its top-left corner plus size, in image pixels. An image
//! without a box is `Option::<BoundingBox>::None`; every slot that can be empty
//! (the editor, the session, parsed label lines) carries an `Option`.

use std::fmt;

use super::geometry::{Point, Size};

/// Corner of a box, numbered clockwise from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft = 0,
    TopRight = 1,
    BottomRight = 2,
    BottomLeft = 3,
}

impl Corner {
    /// All corners in index order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Clockwise index, 0..=3.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Corner for an index, taken modulo 4.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// The diagonally opposite corner, `(i + 2) mod 4`.
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }
}

/// An axis-aligned bounding box in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Top-left corner X coordinate
    pub x: f32,
    /// Top-left corner Y coordinate
    pub y: f32,
    /// Width of the box
    pub width: f32,
    /// Height of the box
    pub height: f32,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a bounding box spanning two arbitrary points.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Self {
            x: p1.x.min(p2.x),
            y: p1.y.min(p2.y),
            width: (p1.x - p2.x).abs(),
            height: (p1.y - p2.y).abs(),
        }
    }

    pub fn xmin(&self) -> f32 {
        self.x
    }

    pub fn ymin(&self) -> f32 {
        self.y
    }

    pub fn xmax(&self) -> f32 {
        self.x + self.width
    }

    pub fn ymax(&self) -> f32 {
        self.y + self.height
    }

    /// Center point of the box.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Position of a corner.
    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => Point::new(self.xmin(), self.ymin()),
            Corner::TopRight => Point::new(self.xmax(), self.ymin()),
            Corner::BottomRight => Point::new(self.xmax(), self.ymax()),
            Corner::BottomLeft => Point::new(self.xmin(), self.ymax()),
        }
    }

    /// Move `corner` to `point` while the opposite corner stays pinned.
    ///
    /// The box is rebuilt from the two points, so dragging a corner past the
    /// opposite one flips the box instead of producing a negative size.
    /// Returns the corner that `point` occupies afterwards, which differs from
    /// `corner` once the box has flipped.
    pub fn set_corner(&mut self, corner: Corner, point: Point) -> Corner {
        let pinned = self.corner(corner.opposite());
        *self = Self::from_corners(pinned, point);
        self.quadrant_of(&point)
    }

    /// Corner whose quadrant (relative to the center) contains `point`.
    ///
    /// A point exactly on a center line resolves to the lower corner index.
    pub fn quadrant_of(&self, point: &Point) -> Corner {
        let center = self.center();
        let left = point.x <= center.x;
        let right = point.x >= center.x;
        let top = point.y <= center.y;
        Corner::ALL
            .into_iter()
            .find(|corner| match corner {
                Corner::TopLeft => left && top,
                Corner::TopRight => right && top,
                Corner::BottomRight => right && !top,
                Corner::BottomLeft => left && !top,
            })
            .unwrap_or(Corner::TopLeft)
    }

    /// Translate the whole box.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// A translated copy of the box.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        let mut moved = *self;
        moved.translate(dx, dy);
        moved
    }

    /// Check if a point is inside the box (edges included).
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.xmin()
            && point.x <= self.xmax()
            && point.y >= self.ymin()
            && point.y <= self.ymax()
    }

    /// Check if the whole box lies in `[0, width] x [0, height]`.
    pub fn is_within(&self, bounds: Size) -> bool {
        Corner::ALL
            .iter()
            .all(|&corner| bounds.contains(&self.corner(corner)))
    }

    /// Get the area of the box.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// Label-file form of a box: `x,y,w,h` with two decimals.
impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2},{:.2},{:.2},{:.2}",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BoundingBox {
        BoundingBox::new(10.0, 10.0, 100.0, 80.0)
    }

    #[test]
    fn test_derived_accessors() {
        let bbox = sample();
        assert_eq!(bbox.xmin(), 10.0);
        assert_eq!(bbox.ymin(), 10.0);
        assert_eq!(bbox.xmax(), 110.0);
        assert_eq!(bbox.ymax(), 90.0);
        assert_eq!(bbox.center(), Point::new(60.0, 50.0));
    }

    #[test]
    fn test_corners_are_clockwise() {
        let bbox = sample();
        assert_eq!(bbox.corner(Corner::from_index(0)), Point::new(10.0, 10.0));
        assert_eq!(bbox.corner(Corner::from_index(1)), Point::new(110.0, 10.0));
        assert_eq!(bbox.corner(Corner::from_index(2)), Point::new(110.0, 90.0));
        assert_eq!(bbox.corner(Corner::from_index(3)), Point::new(10.0, 90.0));
    }

    #[test]
    fn test_opposite_corner() {
        for corner in Corner::ALL {
            assert_eq!(corner.opposite().index(), (corner.index() + 2) % 4);
            assert_eq!(corner.opposite().opposite(), corner);
        }
    }

    #[test]
    fn test_set_corner_pins_opposite_corner() {
        let targets = [
            Point::new(0.0, 0.0),
            Point::new(300.0, 5.0),
            Point::new(60.0, 50.0),
            Point::new(-20.0, 200.0),
            Point::new(110.0, 90.0),
        ];
        for corner in Corner::ALL {
            for target in targets {
                let mut bbox = sample();
                let pinned = bbox.corner(corner.opposite());
                bbox.set_corner(corner, target);
                assert!(bbox.width >= 0.0 && bbox.height >= 0.0);
                // The pinned point is still one of the box's corners.
                assert!(
                    Corner::ALL.iter().any(|&c| bbox.corner(c) == pinned),
                    "{corner:?} -> {target:?} lost pinned corner {pinned:?}"
                );
                assert!(Corner::ALL.iter().any(|&c| bbox.corner(c) == target));
            }
        }
    }

    #[test]
    fn test_set_corner_without_flip_keeps_index() {
        let mut bbox = sample();
        bbox.set_corner(Corner::BottomRight, Point::new(630.0, 90.0));
        assert_eq!(bbox, BoundingBox::new(10.0, 10.0, 620.0, 80.0));
        assert_eq!(bbox.corner(Corner::TopLeft), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_set_corner_past_opposite_flips() {
        let mut bbox = sample();
        bbox.set_corner(Corner::TopLeft, Point::new(150.0, 100.0));
        assert_eq!(bbox, BoundingBox::new(110.0, 90.0, 40.0, 10.0));
    }

    #[test]
    fn test_set_corner_reports_corner_after_flip() {
        let mut bbox = sample();
        let moved = bbox.set_corner(Corner::BottomRight, Point::new(0.0, 90.0));
        assert_eq!(moved, Corner::BottomLeft);
        assert_eq!(bbox, BoundingBox::new(0.0, 10.0, 10.0, 80.0));

        let mut bbox = sample();
        let moved = bbox.set_corner(Corner::TopRight, Point::new(200.0, 0.0));
        assert_eq!(moved, Corner::TopRight);
    }

    #[test]
    fn test_quadrant_ties_resolve_to_lower_index() {
        let bbox = sample();
        let center = bbox.center();
        assert_eq!(bbox.quadrant_of(&center), Corner::TopLeft);
        assert_eq!(
            bbox.quadrant_of(&Point::new(center.x, 80.0)),
            Corner::BottomRight
        );
        assert_eq!(
            bbox.quadrant_of(&Point::new(100.0, center.y)),
            Corner::TopRight
        );
        assert_eq!(
            bbox.quadrant_of(&Point::new(20.0, 85.0)),
            Corner::BottomLeft
        );
    }

    #[test]
    fn test_translate() {
        let mut bbox = sample();
        bbox.translate(-5.0, 2.5);
        assert_eq!(bbox, BoundingBox::new(5.0, 12.5, 100.0, 80.0));
        assert_eq!(bbox.translated(5.0, -2.5), sample());
    }

    #[test]
    fn test_contains() {
        let bbox = sample();
        assert!(bbox.contains(&Point::new(50.0, 50.0)));
        assert!(bbox.contains(&Point::new(10.0, 10.0))); // Edge
        assert!(!bbox.contains(&Point::new(5.0, 50.0)));
    }

    #[test]
    fn test_is_within() {
        let bounds = Size::new(640.0, 480.0);
        assert!(sample().is_within(bounds));
        assert!(BoundingBox::new(0.0, 0.0, 640.0, 480.0).is_within(bounds));
        assert!(!sample().translated(-10.5, 0.0).is_within(bounds));
        assert!(!sample().translated(0.0, 391.0).is_within(bounds));
    }

    #[test]
    fn test_display_two_decimals() {
        let bbox = BoundingBox::new(10.0, 10.126, 100.0, 80.5);
        assert_eq!(bbox.to_string(), "10.00,10.13,100.00,80.50");
    }
}
