//! PongX headless runner
//!
//! Stands in for the presentation layer: feeds scripted paddle intents into
//! a local match and logs what happens.
//!
//! Usage: `pongx [settings.json] [ticks]`, or `pongx --defaults` to print
//! the default settings.

#[cfg(not(target_arch = "wasm32"))]
use std::process::ExitCode;

#[cfg(not(target_arch = "wasm32"))]
use pongx::sim::{GameEvent, PaddleIntent};
#[cfg(not(target_arch = "wasm32"))]
use pongx::{MatchSettings, Server, ServerKind};

/// One simulated minute at 60 frames per second
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_TICKS: u64 = 60 * 60;

/// Slow sweep up and down, offset in phase per paddle
#[cfg(not(target_arch = "wasm32"))]
fn sweep(tick: u64, phase: f32) -> PaddleIntent {
    let t = tick as f32 * 0.02 + phase;
    PaddleIntent::Relative(t.sin())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let first = args.next();

    if first.as_deref() == Some("--defaults") {
        return match MatchSettings::default().to_json_pretty() {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    let settings = match first {
        Some(path) => match MatchSettings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => MatchSettings::default(),
    };

    let ticks = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(ticks)) => ticks,
        Some(Err(e)) => {
            log::error!("Invalid tick count: {e}");
            return ExitCode::FAILURE;
        }
        None => DEFAULT_TICKS,
    };

    let mut server = match Server::from_settings(ServerKind::LocalMultiplayer, &settings) {
        Ok(server) => server,
        Err(e) => {
            log::error!("Invalid settings: {e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("PongX (headless) running {ticks} ticks...");

    let mut paddle_hits = 0u32;
    for tick in 0..ticks {
        server.tick(sweep(tick, 0.0), sweep(tick, 1.7));

        for event in server.drain_events() {
            match event {
                GameEvent::PaddleHit(_) => paddle_hits += 1,
                GameEvent::Goal { scorer, score } => {
                    println!(
                        "tick {tick:>6}: goal for {scorer:?}, {} - {}",
                        score.player, score.enemy
                    );
                }
                _ => {}
            }
        }
    }

    println!(
        "Final score {} - {} after {ticks} ticks ({paddle_hits} paddle hits)",
        server.player_score(),
        server.enemy_score()
    );
    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm build is driven by the page through the library API
}
