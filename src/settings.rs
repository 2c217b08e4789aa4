//! Match settings
//!
//! Supplied by the setup layer before a match starts; invalid values are
//! rejected up front so the simulation never has to handle them per tick.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::rounded::rounded_rect_contains;
use crate::sim::{Band, Rect};

/// Settings for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    /// Arena width and height (pixels)
    pub arena_size: Vec2,
    /// Left paddle
    pub player_rect: Rect,
    /// Right paddle
    pub enemy_rect: Rect,

    pub ball_radius: f32,
    /// Pixels per tick
    pub ball_speed: f32,

    /// Pixels per tick for Up/Down intents
    pub paddle_step: f32,
    /// Pixels per tick at relative speed 1.0
    pub paddle_max_speed: f32,

    /// Serve directions after a goal (degrees, drawn as a double range)
    pub serve_bands: [Band; 2],
    /// Directions for the first serve of the match (degrees)
    pub kickoff_bands: Vec<Band>,

    /// Fixed RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            arena_size: Vec2::new(ARENA_WIDTH, ARENA_HEIGHT),
            player_rect: Rect::new(PLAYER_PADDLE_X, 0.0, PADDLE_WIDTH, PADDLE_HEIGHT),
            enemy_rect: Rect::new(ENEMY_PADDLE_X, 0.0, PADDLE_WIDTH, PADDLE_HEIGHT),

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            paddle_step: PADDLE_STEP,
            paddle_max_speed: PADDLE_MAX_SPEED,

            // No serve straight across the table
            serve_bands: [Band::new(10.0, 170.0), Band::new(190.0, 350.0)],
            kickoff_bands: vec![
                Band::new(0.0, 75.0),
                Band::new(115.0, 255.0),
                Band::new(295.0, 360.0),
            ],

            seed: None,
        }
    }
}

impl MatchSettings {
    /// Default settings with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse and validate settings from JSON (missing fields use defaults)
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded match settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serve bands converted to radians
    pub fn serve_bands_radians(&self) -> [Band; 2] {
        self.serve_bands.map(Band::to_radians)
    }

    /// Kickoff bands converted to radians
    pub fn kickoff_bands_radians(&self) -> Vec<Band> {
        self.kickoff_bands.iter().copied().map(Band::to_radians).collect()
    }

    /// Check every precondition the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let arena = self.arena_size;
        if !(arena.is_finite() && arena.x > 0.0 && arena.y > 0.0) {
            return Err(ConfigError::invalid("arena_size", "must be positive"));
        }

        positive("ball_radius", self.ball_radius)?;
        positive("ball_speed", self.ball_speed)?;
        positive("paddle_step", self.paddle_step)?;
        positive("paddle_max_speed", self.paddle_max_speed)?;

        if self.ball_radius * 2.0 >= arena.y {
            return Err(ConfigError::invalid(
                "ball_radius",
                format!("ball does not fit in an arena {} px high", arena.y),
            ));
        }

        check_paddle("player_rect", &self.player_rect, arena)?;
        check_paddle("enemy_rect", &self.enemy_rect, arena)?;

        if self.player_rect.center().x >= self.enemy_rect.center().x {
            return Err(ConfigError::invalid(
                "player_rect",
                "player paddle must be left of the enemy paddle",
            ));
        }

        let center = arena * 0.5;
        for (field, rect) in [("player_rect", &self.player_rect), ("enemy_rect", &self.enemy_rect)] {
            if rounded_rect_contains(rect, self.ball_radius, center) {
                return Err(ConfigError::invalid(field, "paddle overlaps the serve position"));
            }
        }

        check_bands("serve_bands", &self.serve_bands)?;
        check_bands("kickoff_bands", &self.kickoff_bands)?;

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be positive, got {value}")))
    }
}

fn check_paddle(field: &'static str, rect: &Rect, arena: Vec2) -> Result<(), ConfigError> {
    let finite = [rect.left, rect.top, rect.width, rect.height]
        .iter()
        .all(|v| v.is_finite());
    if !finite || rect.width <= 0.0 || rect.height <= 0.0 {
        return Err(ConfigError::invalid(field, "size must be positive"));
    }
    if rect.height >= arena.y {
        return Err(ConfigError::invalid(field, "paddle must be shorter than the arena"));
    }
    if rect.left < 0.0 || rect.right() > arena.x || rect.top < 0.0 || rect.bottom() > arena.y {
        return Err(ConfigError::invalid(field, "paddle must start inside the arena"));
    }
    Ok(())
}

fn check_bands(field: &'static str, bands: &[Band]) -> Result<(), ConfigError> {
    if bands.is_empty() {
        return Err(ConfigError::invalid(field, "at least one band is required"));
    }
    for band in bands {
        if !(band.min.is_finite() && band.max.is_finite()) || band.is_empty() {
            return Err(ConfigError::invalid(
                field,
                format!("band [{}, {}) must have min < max", band.min, band.max),
            ));
        }
    }
    Ok(())
}
