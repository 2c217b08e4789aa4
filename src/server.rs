//! Match server
//!
//! Takes paddle intents from the presentation layer and hands back the
//! paddle, ball and score data it needs to draw a frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::settings::MatchSettings;
use crate::sim::{
    GameEvent, GameState, MatchPhase, PaddleIntent, RandomSource, Rect, SeededRandom, TickInput,
    tick,
};

/// Kind of match the server runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServerKind {
    /// Both paddles driven from the same machine
    #[default]
    LocalMultiplayer,
}

impl ServerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerKind::LocalMultiplayer => "local-multiplayer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "local-multiplayer" | "local" => Some(ServerKind::LocalMultiplayer),
            _ => None,
        }
    }
}

/// A running match
#[derive(Debug, Clone)]
pub struct Server<R = SeededRandom> {
    kind: ServerKind,
    state: GameState<R>,
}

impl Server<SeededRandom> {
    /// Create a server seeded from the settings (fixed seed or OS entropy)
    pub fn from_settings(kind: ServerKind, settings: &MatchSettings) -> Result<Self, ConfigError> {
        let rng = match settings.seed {
            Some(seed) => SeededRandom::from_seed(seed),
            None => SeededRandom::from_entropy(),
        };
        Self::create(kind, settings, rng)
    }
}

impl<R: RandomSource> Server<R> {
    /// Create a server with an explicit random source
    pub fn create(kind: ServerKind, settings: &MatchSettings, rng: R) -> Result<Self, ConfigError> {
        let state = GameState::new(settings, rng)?;
        log::info!("Started {} server", kind.as_str());
        Ok(Self { kind, state })
    }

    /// Advance the match by one frame
    pub fn tick(&mut self, player: PaddleIntent, enemy: PaddleIntent) {
        let input = TickInput::new(player, enemy);
        match self.kind {
            ServerKind::LocalMultiplayer => tick(&mut self.state, &input),
        }
    }

    pub fn kind(&self) -> ServerKind {
        self.kind
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn player_rect(&self) -> Rect {
        self.state.player.rect
    }

    pub fn enemy_rect(&self) -> Rect {
        self.state.enemy.rect
    }

    pub fn ball_pos(&self) -> Vec2 {
        self.state.ball.pos
    }

    /// Ball direction in radians
    pub fn ball_direction(&self) -> f32 {
        self.state.ball.direction
    }

    pub fn ball_radius(&self) -> f32 {
        self.state.ball.radius
    }

    pub fn player_score(&self) -> u32 {
        self.state.score.player
    }

    pub fn enemy_score(&self) -> u32 {
        self.state.score.enemy
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    /// Take the events produced by the last tick
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }
}
