//! Rounded rectangle: a paddle rect dilated by the ball radius
//!
//! Testing the ball centre against the rounded rectangle is equivalent to
//! testing the ball circle against the plain rectangle.
//!
//! ```text
//!            +=========+
//!         ---|         |---
//!        - TL|   Top   |TR -
//!      ||----+         +----||
//!      ||     \       /     ||
//!      ||      \     /      ||
//!      || Left  \   /  Right||
//!      ||        \ /        ||
//!      ||        / \        ||
//!      ||       /   \       ||
//!      ||----+ Bottom  +----||
//!        - BL|         |BR -
//!         ---|         |---
//!            +=========+
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::math::{
    Line, Quadrant, circle_line_intersection, hor_segment_line_intersection, quadrant,
    rect_distance, ver_segment_line_intersection,
};
use super::rect::Rect;

/// Points closer than this are reported once
const MERGE_EPSILON: f32 = 1e-4;

/// One of the 8 zones of a rounded rectangle's boundary band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Top,
    Right,
    Bottom,
    Left,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Region {
    #[inline]
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Region::TopLeft | Region::TopRight | Region::BottomRight | Region::BottomLeft
        )
    }

    /// Top or bottom flat face
    #[inline]
    pub fn is_horizontal_face(self) -> bool {
        matches!(self, Region::Top | Region::Bottom)
    }

    /// Left or right flat face
    #[inline]
    pub fn is_vertical_face(self) -> bool {
        matches!(self, Region::Left | Region::Right)
    }

    /// Centre of the rounding circle for a corner region
    pub fn corner_center(self, rect: &Rect) -> Option<Vec2> {
        match self {
            Region::TopLeft => Some(rect.top_left()),
            Region::TopRight => Some(rect.top_right()),
            Region::BottomRight => Some(rect.bottom_right()),
            Region::BottomLeft => Some(rect.bottom_left()),
            _ => None,
        }
    }
}

/// Is the point inside the rect inflated by `radius` with rounded corners?
#[inline]
pub fn rounded_rect_contains(rect: &Rect, radius: f32, point: Vec2) -> bool {
    rect_distance(rect, point) <= radius
}

/// Classify which region of the rounded rect contains the point
///
/// Returns `None` when the point is outside. Corner zones take priority;
/// the flat faces are split by the two diagonals of the rect, which must
/// have a positive size.
pub fn rounded_rect_segment_contains(rect: &Rect, radius: f32, point: Vec2) -> Option<Region> {
    if !rounded_rect_contains(rect, radius, point) {
        return None;
    }

    let center = rect.center();

    // Only the corner on the point's side of the centre can hold it.
    // Screen y grows down, so quadrants 1 and 2 are the bottom corners.
    let (corner, region) = match quadrant(center, point) {
        Quadrant::First => (rect.bottom_right(), Region::BottomRight),
        Quadrant::Second => (rect.bottom_left(), Region::BottomLeft),
        Quadrant::Third => (rect.top_left(), Region::TopLeft),
        Quadrant::Fourth => (rect.top_right(), Region::TopRight),
    };
    let beyond_x = if corner.x > center.x {
        point.x > corner.x
    } else {
        point.x < corner.x
    };
    let beyond_y = if corner.y > center.y {
        point.y > corner.y
    } else {
        point.y < corner.y
    };
    if beyond_x && beyond_y {
        return Some(region);
    }

    let main_diagonal = Line::from_points(rect.top_left(), rect.bottom_right());
    let anti_diagonal = Line::from_points(rect.bottom_left(), rect.top_right());

    Some(
        match (main_diagonal.is_higher(point), anti_diagonal.is_higher(point)) {
            (true, true) => Region::Bottom,
            (false, false) => Region::Top,
            (false, true) => Region::Right,
            (true, false) => Region::Left,
        },
    )
}

/// Intersection points of a line and the outline of a rounded rectangle
///
/// Tests the four offset straight edges and the four corner arcs. Returns at
/// most 2 points.
pub fn rounded_rect_line_intersection(line: Line, rect: &Rect, radius: f32) -> Vec<Vec2> {
    let mut hits: Vec<Vec2> = Vec::with_capacity(4);

    let edges = [
        hor_segment_line_intersection(line, rect.left, rect.right(), rect.top - radius),
        hor_segment_line_intersection(line, rect.left, rect.right(), rect.bottom() + radius),
        ver_segment_line_intersection(line, rect.top, rect.bottom(), rect.left - radius),
        ver_segment_line_intersection(line, rect.top, rect.bottom(), rect.right() + radius),
    ];
    for hit in edges.into_iter().flatten() {
        push_unique(&mut hits, hit);
    }

    // Each arc only covers the outward quarter of its circle
    let corners = [
        (rect.top_left(), -1.0, -1.0),
        (rect.top_right(), 1.0, -1.0),
        (rect.bottom_right(), 1.0, 1.0),
        (rect.bottom_left(), -1.0, 1.0),
    ];
    for (corner, sign_x, sign_y) in corners {
        for hit in circle_line_intersection(corner, radius, line) {
            let offset = hit - corner;
            if offset.x * sign_x >= 0.0 && offset.y * sign_y >= 0.0 {
                push_unique(&mut hits, hit);
            }
        }
    }

    hits.truncate(2);
    hits
}

fn push_unique(hits: &mut Vec<Vec2>, point: Vec2) {
    if !hits.iter().any(|h| h.distance(point) <= MERGE_EPSILON) {
        hits.push(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paddle() -> Rect {
        Rect::new(10.0, 100.0, 45.0, 225.0)
    }

    fn assert_unordered(expected: [Vec2; 2], actual: &[Vec2]) {
        assert_eq!(actual.len(), 2, "got {actual:?}");
        let direct = expected[0].distance(actual[0]) < 1e-4 && expected[1].distance(actual[1]) < 1e-4;
        let swapped = expected[0].distance(actual[1]) < 1e-4 && expected[1].distance(actual[0]) < 1e-4;
        assert!(direct || swapped, "expected {expected:?}, got {actual:?}");
    }

    #[test]
    fn test_rounded_rect_line_horizontal() {
        let hits = rounded_rect_line_intersection(
            Line::sloped(0.0, 0.0),
            &Rect::new(-1.0, -1.0, 2.0, 2.0),
            0.5,
        );
        assert_unordered([Vec2::new(1.5, 0.0), Vec2::new(-1.5, 0.0)], &hits);
    }

    #[test]
    fn test_rounded_rect_line_through_corners() {
        let hits = rounded_rect_line_intersection(
            Line::sloped(1.0, 0.0),
            &Rect::new(-2.0, -2.0, 4.0, 4.0),
            1.0,
        );
        assert_unordered(
            [Vec2::new(-2.70711, -2.70711), Vec2::new(2.70711, 2.70711)],
            &hits,
        );

        let hits = rounded_rect_line_intersection(
            Line::sloped(1.0, 1.0),
            &Rect::new(-2.0, -1.0, 4.0, 4.0),
            1.0,
        );
        assert_unordered(
            [Vec2::new(-2.70711, -1.70711), Vec2::new(2.70711, 3.70711)],
            &hits,
        );
    }

    #[test]
    fn test_rounded_rect_line_offset_rect() {
        let hits = rounded_rect_line_intersection(
            Line::sloped(0.0, 1.0),
            &Rect::new(-2.0, -1.0, 4.0, 4.0),
            1.0,
        );
        assert_unordered([Vec2::new(3.0, 1.0), Vec2::new(-3.0, 1.0)], &hits);
    }

    #[test]
    fn test_rounded_rect_line_vertical_and_miss() {
        let rect = Rect::new(-1.0, -1.0, 2.0, 2.0);
        let hits = rounded_rect_line_intersection(Line::vertical(0.0), &rect, 0.5);
        assert_unordered([Vec2::new(0.0, -1.5), Vec2::new(0.0, 1.5)], &hits);

        assert!(rounded_rect_line_intersection(Line::sloped(0.0, 5.0), &rect, 0.5).is_empty());
    }

    #[test]
    fn test_contains_corner_gap() {
        let rect = paddle();
        // Diagonally off the top-left corner: inside the bounding box of the
        // inflated rect but outside the rounded corner
        assert!(!rounded_rect_contains(&rect, 10.0, Vec2::new(2.0, 92.0)));
        assert!(rounded_rect_contains(&rect, 10.0, Vec2::new(5.0, 95.0)));
    }

    #[test]
    fn test_segment_flat_faces() {
        let rect = paddle();
        let r = 10.0;
        assert_eq!(rounded_rect_segment_contains(&rect, r, Vec2::new(30.0, 95.0)), Some(Region::Top));
        assert_eq!(rounded_rect_segment_contains(&rect, r, Vec2::new(30.0, 330.0)), Some(Region::Bottom));
        assert_eq!(rounded_rect_segment_contains(&rect, r, Vec2::new(60.0, 200.0)), Some(Region::Right));
        assert_eq!(rounded_rect_segment_contains(&rect, r, Vec2::new(5.0, 200.0)), Some(Region::Left));
        // Inside the rect itself, split by the diagonals
        assert_eq!(rounded_rect_segment_contains(&rect, r, Vec2::new(50.0, 212.5)), Some(Region::Right));
        assert_eq!(rounded_rect_segment_contains(&rect, r, Vec2::new(32.5, 105.0)), Some(Region::Top));
    }

    #[test]
    fn test_segment_corners() {
        let rect = paddle();
        let r = 10.0;
        assert_eq!(rounded_rect_segment_contains(&rect, r, Vec2::new(5.0, 95.0)), Some(Region::TopLeft));
        assert_eq!(rounded_rect_segment_contains(&rect, r, Vec2::new(60.0, 95.0)), Some(Region::TopRight));
        assert_eq!(rounded_rect_segment_contains(&rect, r, Vec2::new(60.0, 330.0)), Some(Region::BottomRight));
        assert_eq!(rounded_rect_segment_contains(&rect, r, Vec2::new(5.0, 330.0)), Some(Region::BottomLeft));
    }

    #[test]
    fn test_segment_outside() {
        let rect = paddle();
        assert_eq!(rounded_rect_segment_contains(&rect, 10.0, Vec2::new(100.0, 200.0)), None);
        assert_eq!(rounded_rect_segment_contains(&rect, 10.0, Vec2::new(2.0, 92.0)), None);
    }

    #[test]
    fn test_region_corner_center() {
        let rect = paddle();
        assert_eq!(Region::BottomRight.corner_center(&rect), Some(Vec2::new(55.0, 325.0)));
        assert_eq!(Region::Left.corner_center(&rect), None);
        assert!(Region::TopLeft.is_corner());
        assert!(Region::Bottom.is_horizontal_face());
        assert!(Region::Right.is_vertical_face());
    }

    proptest! {
        #[test]
        fn prop_contains_matches_rect_distance(
            left in -200f32..200.0, top in -200f32..200.0,
            w in 1f32..100.0, h in 1f32..300.0,
            r in 0.5f32..30.0,
            px in -400f32..400.0, py in -400f32..600.0,
        ) {
            let rect = Rect::new(left, top, w, h);
            let point = Vec2::new(px, py);
            prop_assert_eq!(
                rounded_rect_contains(&rect, r, point),
                rect_distance(&rect, point) <= r
            );
            prop_assert_eq!(
                rounded_rect_segment_contains(&rect, r, point).is_some(),
                rounded_rect_contains(&rect, r, point)
            );
        }

        #[test]
        fn prop_corner_regions_lie_beyond_the_rect(
            px in -30f32..90.0, py in 60f32..360.0,
        ) {
            let rect = paddle();
            let point = Vec2::new(px, py);
            if let Some(region) = rounded_rect_segment_contains(&rect, 10.0, point) {
                if region.is_corner() {
                    prop_assert!(!rect.contains(point));
                }
            }
        }
    }
}
