//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Injected RNG only
//! - No rendering, input polling or platform dependencies

pub mod collision;
pub mod math;
pub mod rect;
pub mod rng;
pub mod rounded;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, Contact, Wall, resolve_collisions};
pub use rect::Rect;
pub use rng::{Band, RandomSource, ScriptedRandom, SeededRandom};
pub use rounded::{Region, rounded_rect_contains, rounded_rect_segment_contains};
pub use state::{Ball, GameEvent, GameState, MatchPhase, Paddle, PaddleIntent, Score, Side};
pub use tick::{TickInput, tick};
