//! Match state and core simulation types
//!
//! Everything the tick function mutates lives in `GameState`. The
//! presentation layer only reads it between ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Contact, Wall};
use super::rect::Rect;
use super::rng::{Band, RandomSource, SeededRandom};
use crate::error::ConfigError;
use crate::polar_to_cartesian;
use crate::settings::MatchSettings;

/// Which paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, defends the left goal line
    Player,
    /// Right paddle, defends the right goal line
    Enemy,
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Ball frozen at the arena centre, waiting for a paddle to move
    Serving,
    /// Ball moving
    InPlay,
}

/// Notable things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ServeStarted,
    WallBounce(Wall),
    PaddleHit(Contact),
    Goal { scorer: Side, score: Score },
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Radians; 0 points right and angles grow clockwise on screen
    pub direction: f32,
    /// Pixels per tick
    pub speed: f32,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, direction: f32, speed: f32, radius: f32) -> Self {
        Self {
            pos,
            direction,
            speed,
            radius,
        }
    }

    /// Displacement per tick
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        polar_to_cartesian(self.speed, self.direction)
    }

    /// Move along the current direction by a fraction of one tick
    pub fn advance(&mut self, fraction: f32) {
        self.pos += self.velocity() * fraction;
    }
}

/// Per-tick movement request for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum PaddleIntent {
    #[default]
    Idle,
    /// One discrete step up
    Up,
    /// One discrete step down
    Down,
    /// Continuous speed in [-1, 1], negative is up
    Relative(f32),
}

impl PaddleIntent {
    /// Does this intent request any movement?
    pub fn is_active(self) -> bool {
        match self {
            PaddleIntent::Idle => false,
            PaddleIntent::Up | PaddleIntent::Down => true,
            PaddleIntent::Relative(speed) => speed != 0.0 && !speed.is_nan(),
        }
    }

    /// Vertical offset for this tick
    pub fn offset(self, step: f32, max_speed: f32) -> f32 {
        match self {
            PaddleIntent::Idle => 0.0,
            PaddleIntent::Up => -step,
            PaddleIntent::Down => step,
            PaddleIntent::Relative(speed) if speed.is_nan() => 0.0,
            PaddleIntent::Relative(speed) => speed.clamp(-1.0, 1.0) * max_speed,
        }
    }
}

/// A paddle; only its vertical position ever changes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Apply a movement intent, staying inside `[0, arena_height - h]`
    pub fn apply_intent(&mut self, intent: PaddleIntent, step: f32, max_speed: f32, arena_height: f32) {
        let dy = intent.offset(step, max_speed);
        if dy != 0.0 {
            self.rect.translate(Vec2::new(0.0, dy));
            self.rect.clamp_vertical(arena_height);
        }
    }
}

/// Goals scored by each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player: u32,
    pub enemy: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Enemy => self.enemy,
        }
    }

    pub fn add_point(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Enemy => self.enemy += 1,
        }
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState<R = SeededRandom> {
    /// Arena width and height
    pub arena: Vec2,
    pub ball: Ball,
    pub player: Paddle,
    pub enemy: Paddle,
    pub score: Score,
    pub phase: MatchPhase,
    /// Ball was touching a paddle at the end of the previous step
    pub collided_before: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paddle_step: f32,
    pub paddle_max_speed: f32,
    /// Serve directions after a goal (radians)
    pub serve_bands: [Band; 2],
    /// Events from the last tick
    pub events: Vec<GameEvent>,
    rng: R,
}

impl<R: RandomSource> GameState<R> {
    /// Create a match from validated settings, serving from the centre
    pub fn new(settings: &MatchSettings, mut rng: R) -> Result<Self, ConfigError> {
        settings.validate()?;

        let arena = settings.arena_size;
        let direction = rng.random_number_in_bands(&settings.kickoff_bands_radians());
        let ball = Ball::new(arena * 0.5, crate::wrap_angle(direction), settings.ball_speed, settings.ball_radius);

        log::info!(
            "New match: arena {}x{}, ball r={} v={}",
            arena.x,
            arena.y,
            ball.radius,
            ball.speed
        );

        Ok(Self {
            arena,
            ball,
            player: Paddle::new(settings.player_rect),
            enemy: Paddle::new(settings.enemy_rect),
            score: Score::default(),
            phase: MatchPhase::Serving,
            collided_before: false,
            time_ticks: 0,
            paddle_step: settings.paddle_step,
            paddle_max_speed: settings.paddle_max_speed,
            serve_bands: settings.serve_bands_radians(),
            events: Vec::new(),
            rng,
        })
    }

    /// Arena centre, where every serve starts
    pub fn center(&self) -> Vec2 {
        self.arena * 0.5
    }

    /// Recentre the ball with a fresh serve direction and suspend it
    pub fn reset_serve(&mut self) {
        let [first, second] = self.serve_bands;
        let direction = self
            .rng
            .random_number_double_range(first.min, first.max, second.min, second.max);

        self.ball.pos = self.center();
        self.ball.direction = crate::wrap_angle(direction);
        self.collided_before = false;
        self.phase = MatchPhase::Serving;

        log::trace!("Serve direction {:.1}°", self.ball.direction.to_degrees());
    }

    /// Award a goal and set up the next serve
    pub fn score_goal(&mut self, scorer: Side) {
        self.score.add_point(scorer);
        log::info!(
            "Goal for {:?}: {} - {}",
            scorer,
            self.score.player,
            self.score.enemy
        );
        self.events.push(GameEvent::Goal {
            scorer,
            score: self.score,
        });
        self.reset_serve();
    }
}
