//! Fixed-step simulation tick
//!
//! One call advances the match by one frame.

use super::collision::resolve_collisions;
use super::rng::RandomSource;
use super::state::{Ball, GameEvent, GameState, MatchPhase, PaddleIntent, Side};
use crate::consts::MAX_SUBSTEPS;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub player: PaddleIntent,
    pub enemy: PaddleIntent,
}

impl TickInput {
    pub fn new(player: PaddleIntent, enemy: PaddleIntent) -> Self {
        Self { player, enemy }
    }

    pub fn is_active(&self) -> bool {
        self.player.is_active() || self.enemy.is_active()
    }
}

/// Number of equal sub-steps so the ball never moves more than its radius
/// at once
pub fn substeps_for(ball: &Ball) -> u32 {
    let steps = (ball.speed / ball.radius).ceil();
    if steps.is_finite() && steps >= 1.0 {
        (steps as u32).min(MAX_SUBSTEPS)
    } else {
        1
    }
}

/// Side that scored if the ball reached a goal line
pub fn goal_scorer(ball: &Ball, arena_width: f32) -> Option<Side> {
    if ball.pos.x - ball.radius <= 0.0 {
        Some(Side::Enemy)
    } else if ball.pos.x + ball.radius >= arena_width {
        Some(Side::Player)
    } else {
        None
    }
}

/// Advance the match by one tick
pub fn tick<R: RandomSource>(state: &mut GameState<R>, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    // Paddles move in every phase
    let (step, max_speed, height) = (state.paddle_step, state.paddle_max_speed, state.arena.y);
    state.player.apply_intent(input.player, step, max_speed, height);
    state.enemy.apply_intent(input.enemy, step, max_speed, height);

    if state.phase == MatchPhase::Serving {
        if !input.is_active() {
            return;
        }
        state.phase = MatchPhase::InPlay;
        state.events.push(GameEvent::ServeStarted);
    }

    let substeps = substeps_for(&state.ball);
    let fraction = 1.0 / substeps as f32;
    let mut paddle_hit = false;

    for _ in 0..substeps {
        state.ball.advance(fraction);

        let result = resolve_collisions(
            &mut state.ball,
            &state.player.rect,
            &state.enemy.rect,
            height,
            &mut state.collided_before,
        );

        if let Some(wall) = result.wall {
            log::debug!("Wall bounce {:?} at {:?}", wall, state.ball.pos);
            state.events.push(GameEvent::WallBounce(wall));
        }
        if let Some(contact) = result.contact {
            paddle_hit = true;
            if contact.reflected {
                log::debug!("{:?} paddle hit on {:?}", contact.side, contact.region);
                state.events.push(GameEvent::PaddleHit(contact));
            }
        }
    }

    if paddle_hit {
        return;
    }

    if let Some(scorer) = goal_scorer(&state.ball, state.arena.x) {
        state.score_goal(scorer);
    }
}
