//! Collision detection and response for the ball
//!
//! Paddles are handled with the "rounded rect vs point" model: the paddle
//! rect inflated by the ball radius is tested against the ball centre, and
//! the region of the rounded rect that was entered decides how the ball
//! bounces.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::math::line_angle_from_points;
use super::rect::Rect;
use super::rounded::{Region, rounded_rect_contains, rounded_rect_segment_contains};
use super::state::{Ball, Side};
use crate::consts::CONTACT_SLOP;
use crate::{polar_to_cartesian, wrap_angle};

/// Horizontal arena bound hit by the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Bottom,
}

/// A ball/paddle contact found during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub side: Side,
    pub region: Region,
    /// False when the bounce was suppressed because the previous step was
    /// already in contact
    pub reflected: bool,
}

/// Result of resolving one integration step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionResult {
    pub wall: Option<Wall>,
    pub contact: Option<Contact>,
}

/// Check the ball against the top and bottom arena bounds
pub fn wall_collision(pos: Vec2, radius: f32, arena_height: f32) -> Option<Wall> {
    if pos.y - radius <= 0.0 {
        Some(Wall::Top)
    } else if pos.y + radius >= arena_height {
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// Mirror the direction across the horizontal axis
///
/// ```text
/// +================o==================+
/// |               /|\                 |
/// |    Before -> / | \ <- After       |
/// ```
#[inline]
pub fn reflect_off_wall(direction: f32) -> f32 {
    wrap_angle(TAU - direction)
}

/// New direction after entering the given region of a paddle
///
/// Corner hits send the ball straight back the way it came.
pub fn reflect_off_region(direction: f32, region: Region) -> f32 {
    if region.is_horizontal_face() {
        wrap_angle(TAU - direction)
    } else if region.is_vertical_face() {
        wrap_angle(PI - direction)
    } else {
        wrap_angle(direction + PI)
    }
}

/// Place the ball just outside the region of the paddle it entered
pub fn unstuck(rect: &Rect, radius: f32, region: Region, pos: Vec2) -> Vec2 {
    let clearance = radius + CONTACT_SLOP;
    match region {
        Region::Top => Vec2::new(pos.x, rect.top - clearance),
        Region::Right => Vec2::new(rect.right() + clearance, pos.y),
        Region::Bottom => Vec2::new(pos.x, rect.bottom() + clearance),
        Region::Left => Vec2::new(rect.left - clearance, pos.y),
        Region::TopLeft | Region::TopRight | Region::BottomRight | Region::BottomLeft => {
            let center = match region.corner_center(rect) {
                Some(center) => center,
                None => return pos,
            };
            let angle = line_angle_from_points(center, pos);
            center + polar_to_cartesian(clearance, angle)
        }
    }
}

/// Undo a paddle push that left the arena vertically
///
/// A paddle squeezing the ball against a wall cannot push it through the
/// wall; the ball is clamped back and leaves past the paddle's nearer side.
pub fn keep_in_arena(rect: &Rect, radius: f32, pos: Vec2, arena_height: f32) -> Vec2 {
    let (low, high) = (radius, arena_height - radius);
    if (low..=high).contains(&pos.y) {
        return pos;
    }

    let clamped = Vec2::new(pos.x, pos.y.clamp(low, high));
    if !rounded_rect_contains(rect, radius, clamped) {
        return clamped;
    }
    let side = if clamped.x < rect.center().x {
        Region::Left
    } else {
        Region::Right
    };
    unstuck(rect, radius, side, clamped)
}

/// Find the paddle (player first) whose rounded rect holds the ball centre
pub fn paddle_contact(pos: Vec2, radius: f32, player: &Rect, enemy: &Rect) -> Option<(Side, Region)> {
    if let Some(region) = rounded_rect_segment_contains(player, radius, pos) {
        return Some((Side::Player, region));
    }
    rounded_rect_segment_contains(enemy, radius, pos).map(|region| (Side::Enemy, region))
}

/// Resolve wall and paddle collisions for the ball's current position
///
/// `collided_before` carries the contact state between steps: while the ball
/// stays in contact, its position is still corrected but its direction is
/// left alone so one bounce is applied once.
pub fn resolve_collisions(
    ball: &mut Ball,
    player: &Rect,
    enemy: &Rect,
    arena_height: f32,
    collided_before: &mut bool,
) -> CollisionResult {
    let mut result = CollisionResult::default();

    if let Some(wall) = wall_collision(ball.pos, ball.radius, arena_height) {
        ball.direction = reflect_off_wall(ball.direction);
        ball.pos.y = ball.pos.y.clamp(ball.radius, arena_height - ball.radius);
        result.wall = Some(wall);
    }

    let Some((side, region)) = paddle_contact(ball.pos, ball.radius, player, enemy) else {
        *collided_before = false;
        return result;
    };

    let reflected = !*collided_before;
    if reflected {
        ball.direction = reflect_off_region(ball.direction, region);
    }

    let rect = match side {
        Side::Player => player,
        Side::Enemy => enemy,
    };
    ball.pos = unstuck(rect, ball.radius, region, ball.pos);
    ball.pos = keep_in_arena(rect, ball.radius, ball.pos, arena_height);

    *collided_before = true;
    result.contact = Some(Contact {
        side,
        region,
        reflected,
    });
    result
}
