//! PongX - a two-paddle Pong simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, match state)
//! - `server`: Front door for the presentation layer (tick + read-back)
//! - `settings`: Match configuration and validation
//! - `error`: Configuration errors

pub mod error;
pub mod server;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use server::{Server, ServerKind};
pub use settings::MatchSettings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default arena size (pixels)
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 45.0;
    pub const PADDLE_HEIGHT: f32 = 225.0;
    pub const PLAYER_PADDLE_X: f32 = 10.0;
    pub const ENEMY_PADDLE_X: f32 = 1225.0;
    /// Discrete move per Up/Down intent (pixels per tick)
    pub const PADDLE_STEP: f32 = 10.0;
    /// Move at relative speed 1.0 (pixels per tick)
    pub const PADDLE_MAX_SPEED: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Pixels per tick
    pub const BALL_SPEED: f32 = 5.0;

    /// Maximum collision substeps per tick
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Extra gap left between the ball and a surface after unsticking
    pub const CONTACT_SLOP: f32 = 0.01;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
