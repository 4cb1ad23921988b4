//! Hit-testing the box against a pointer position.

use crate::model::{BoundingBox, Corner, Point};

use super::input::Highlight;

/// Find what `point` is over.
///
/// `radius` is the corner grab radius in **image** pixels, i.e. the device
/// epsilon already divided by the scale. Corners take priority over the
/// interior; among corners within the radius the nearest wins, and equal
/// distances resolve to the lower corner index.
pub fn hit_test(bbox: &BoundingBox, point: &Point, radius: f32) -> Highlight {
    let mut nearest: Option<(Corner, f32)> = None;
    for corner in Corner::ALL {
        let distance = bbox.corner(corner).distance_to(point);
        if distance > radius {
            continue;
        }
        if nearest.is_none_or(|(_, best)| distance < best) {
            nearest = Some((corner, distance));
        }
    }

    match nearest {
        Some((corner, _)) => Highlight::Corner(corner),
        None if bbox.contains(point) => Highlight::Box,
        None => Highlight::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BoundingBox {
        BoundingBox::new(10.0, 10.0, 100.0, 80.0)
    }

    #[test]
    fn test_corner_within_radius() {
        let bbox = sample();
        assert_eq!(
            hit_test(&bbox, &Point::new(112.0, 92.0), 11.0),
            Highlight::Corner(Corner::BottomRight)
        );
        assert_eq!(
            hit_test(&bbox, &Point::new(10.0, 21.0), 11.0),
            Highlight::Corner(Corner::TopLeft)
        );
    }

    #[test]
    fn test_corner_beats_interior() {
        let bbox = sample();
        // Inside the box and near a corner: the corner wins.
        assert_eq!(
            hit_test(&bbox, &Point::new(105.0, 15.0), 11.0),
            Highlight::Corner(Corner::TopRight)
        );
    }

    #[test]
    fn test_interior_and_miss() {
        let bbox = sample();
        assert_eq!(hit_test(&bbox, &Point::new(60.0, 50.0), 11.0), Highlight::Box);
        assert_eq!(hit_test(&bbox, &Point::new(300.0, 300.0), 11.0), Highlight::None);
        // Just outside a corner's radius and outside the box.
        assert_eq!(hit_test(&bbox, &Point::new(122.0, 90.0), 11.0), Highlight::None);
    }

    #[test]
    fn test_nearest_corner_wins() {
        // Narrow box: both right corners are within the radius.
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 6.0);
        assert_eq!(
            hit_test(&bbox, &Point::new(10.0, 5.0), 11.0),
            Highlight::Corner(Corner::BottomRight)
        );
    }

    #[test]
    fn test_equal_distance_resolves_to_lower_index() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        // The center is equidistant from all four corners.
        assert_eq!(
            hit_test(&bbox, &Point::new(5.0, 5.0), 11.0),
            Highlight::Corner(Corner::TopLeft)
        );
        // Equidistant from the two right corners.
        assert_eq!(
            hit_test(&bbox, &Point::new(12.0, 5.0), 6.0),
            Highlight::Corner(Corner::TopRight)
        );
    }

    #[test]
    fn test_zero_size_box_hits_a_corner() {
        let bbox = BoundingBox::new(50.0, 50.0, 0.0, 0.0);
        assert_eq!(
            hit_test(&bbox, &Point::new(50.0, 50.0), 1.0),
            Highlight::Corner(Corner::TopLeft)
        );
    }
}
