//! Axis-aligned rectangle used for paddles
//!
//! Screen coordinates: `top` is the smaller y, `bottom` the larger one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.top)
    }

    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.left, self.bottom())
    }

    /// Check if a point lies inside the rectangle (edges included)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Shift the rectangle by a relative offset
    pub fn translate(&mut self, offset: Vec2) {
        self.left += offset.x;
        self.top += offset.y;
    }

    /// Keep the rectangle vertically inside `[0, max_bottom]`
    pub fn clamp_vertical(&mut self, max_bottom: f32) {
        self.top = self.top.clamp(0.0, (max_bottom - self.height).max(0.0));
    }
}
