//! Plane geometry primitives
//!
//! Lines, segments and circles used by the rounded-rectangle collision model.
//! Lines are kept in slope-intercept form; vertical lines get their own
//! variant instead of an infinite slope.

use glam::Vec2;

use super::rect::Rect;

/// Tolerance for treating a quadratic discriminant as zero (tangent line)
const TANGENT_EPSILON: f32 = 1e-6;

/// Euclidean distance between two points
#[inline]
pub fn distance(point_1: Vec2, point_2: Vec2) -> f32 {
    point_1.distance(point_2)
}

/// Distance from an axis-aligned rectangle to a point (0 if the point is inside)
pub fn rect_distance(rect: &Rect, point: Vec2) -> f32 {
    let dx = (rect.left - point.x).max(point.x - rect.right()).max(0.0);
    let dy = (rect.top - point.y).max(point.y - rect.bottom()).max(0.0);
    dx.hypot(dy)
}

/// Inclusive range test, bounds in any order
pub fn is_between(n: f32, a: f32, b: f32) -> bool {
    let (low, high) = if a > b { (b, a) } else { (a, b) };
    n >= low && n <= high
}

/// Quadrant of a point around a center
///
/// Uses mathematical orientation: positive `dy` is quadrants 1 and 2.
/// Points on an axis belong to the higher-indexed neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
}

pub fn quadrant(center: Vec2, point: Vec2) -> Quadrant {
    let dx = point.x - center.x;
    let dy = point.y - center.y;

    if dx > 0.0 && dy > 0.0 {
        Quadrant::First
    } else if dx <= 0.0 && dy > 0.0 {
        Quadrant::Second
    } else if dx < 0.0 {
        Quadrant::Third
    } else {
        Quadrant::Fourth
    }
}

/// Slope of the line through two points, `None` if the line is vertical
pub fn line_k_from_points(point_1: Vec2, point_2: Vec2) -> Option<f32> {
    let dx = point_2.x - point_1.x;
    if dx.abs() <= f32::EPSILON {
        None
    } else {
        Some((point_2.y - point_1.y) / dx)
    }
}

/// Intercept `b` of the line `y = kx + b` through a point
#[inline]
pub fn line_b_from_point(k: f32, point: Vec2) -> f32 {
    point.y - k * point.x
}

/// Angle (radians) of the ray from `from` towards `to`
#[inline]
pub fn line_angle_from_points(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// True if the point lies strictly above `y = kx + b` (larger y)
#[inline]
pub fn is_higher_semiplane(k: f32, b: f32, point: Vec2) -> bool {
    point.y > k * point.x + b
}

/// An infinite line in the plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Line {
    /// `y = k * x + b`
    Sloped { k: f32, b: f32 },
    /// `x = const`
    Vertical { x: f32 },
}

impl Line {
    pub fn sloped(k: f32, b: f32) -> Self {
        Line::Sloped { k, b }
    }

    pub fn vertical(x: f32) -> Self {
        Line::Vertical { x }
    }

    /// Line through two points
    pub fn from_points(point_1: Vec2, point_2: Vec2) -> Self {
        match line_k_from_points(point_1, point_2) {
            Some(k) => Line::Sloped {
                k,
                b: line_b_from_point(k, point_1),
            },
            None => Line::Vertical { x: point_1.x },
        }
    }

    /// Line through a point with an optional slope (`None` = vertical)
    pub fn through(point: Vec2, k: Option<f32>) -> Self {
        match k {
            Some(k) => Line::Sloped {
                k,
                b: line_b_from_point(k, point),
            },
            None => Line::Vertical { x: point.x },
        }
    }

    /// Line through a point along a direction angle
    pub fn from_angle(point: Vec2, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        if cos.abs() <= f32::EPSILON {
            Line::Vertical { x: point.x }
        } else {
            Self::through(point, Some(sin / cos))
        }
    }

    /// Side test against the line; for vertical lines "higher" means to the right
    pub fn is_higher(&self, point: Vec2) -> bool {
        match *self {
            Line::Sloped { k, b } => is_higher_semiplane(k, b, point),
            Line::Vertical { x } => point.x > x,
        }
    }
}

/// Intersection of a line with the vertical segment `x = seg_x, y in [y_1, y_2]`
///
/// A vertical line is parallel to the segment and never yields a point.
pub fn ver_segment_line_intersection(line: Line, y_1: f32, y_2: f32, seg_x: f32) -> Option<Vec2> {
    match line {
        Line::Sloped { k, b } => {
            let y = k * seg_x + b;
            is_between(y, y_1, y_2).then(|| Vec2::new(seg_x, y))
        }
        Line::Vertical { .. } => None,
    }
}

/// Intersection of a line with the horizontal segment `y = seg_y, x in [x_1, x_2]`
///
/// A horizontal line is parallel to the segment and never yields a point.
pub fn hor_segment_line_intersection(line: Line, x_1: f32, x_2: f32, seg_y: f32) -> Option<Vec2> {
    match line {
        Line::Sloped { k, b } => {
            if k.abs() <= f32::EPSILON {
                return None;
            }
            let x = (seg_y - b) / k;
            is_between(x, x_1, x_2).then(|| Vec2::new(x, seg_y))
        }
        Line::Vertical { x } => is_between(x, x_1, x_2).then(|| Vec2::new(x, seg_y)),
    }
}

/// Intersection points of a circle and a line: 0, 1 (tangent) or 2
pub fn circle_line_intersection(center: Vec2, radius: f32, line: Line) -> Vec<Vec2> {
    match line {
        Line::Sloped { k, b } => {
            // (1 + k^2) x^2 + 2 (k (b - cy) - cx) x + cx^2 + (b - cy)^2 - r^2 = 0
            let shifted_b = b - center.y;
            let qa = 1.0 + k * k;
            let qb = 2.0 * (k * shifted_b - center.x);
            let qc = center.x * center.x + shifted_b * shifted_b - radius * radius;

            let discriminant = qb * qb - 4.0 * qa * qc;
            let tolerance = TANGENT_EPSILON * (qb * qb).max(radius * radius).max(1.0);

            if discriminant < -tolerance {
                Vec::new()
            } else if discriminant <= tolerance {
                let x = -qb / (2.0 * qa);
                vec![Vec2::new(x, k * x + b)]
            } else {
                let root = discriminant.sqrt();
                let x_1 = (-qb + root) / (2.0 * qa);
                let x_2 = (-qb - root) / (2.0 * qa);
                vec![Vec2::new(x_1, k * x_1 + b), Vec2::new(x_2, k * x_2 + b)]
            }
        }
        Line::Vertical { x } => {
            let dx = x - center.x;
            let h_sq = radius * radius - dx * dx;
            let tolerance = TANGENT_EPSILON * (radius * radius).max(1.0);

            if h_sq < -tolerance {
                Vec::new()
            } else if h_sq <= tolerance {
                vec![Vec2::new(x, center.y)]
            } else {
                let h = h_sq.sqrt();
                vec![Vec2::new(x, center.y + h), Vec2::new(x, center.y - h)]
            }
        }
    }
}
