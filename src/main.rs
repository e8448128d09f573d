//! Arena Pong headless host
//!
//! Drives the simulation the way a browser shell would: synthetic
//! animation-frame timestamps, a pointer that chases the ball, and a
//! snapshot read back after every frame. Usage:
//!
//! ```text
//! arena-pong [settings.json] [max_frames]
//! ```

use std::env;

use anyhow::{Context, Result};

use arena_pong::Settings;
use arena_pong::platform::FrameClock;
use arena_pong::sim::{GameEvent, GameState, Shape, TickInput, tick};

/// Animation frame interval (60 Hz)
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Default run length (two minutes of play)
const DEFAULT_MAX_FRAMES: u64 = 60 * 120;
/// How fast the synthetic pointer can chase the ball, pixels per frame
const POINTER_SPEED: f32 = 3.0;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Arena Pong (headless) starting...");

    let mut args = env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(&path)
            .with_context(|| format!("failed to load settings from {path}"))?,
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };
    let max_frames = match args.next() {
        Some(n) => n
            .parse::<u64>()
            .with_context(|| format!("invalid frame count {n:?}"))?,
        None => DEFAULT_MAX_FRAMES,
    };

    let mut state = GameState::new(settings).context("failed to build game")?;
    state.play();

    let mut clock = FrameClock::new();
    let mut pointer_y = state.paddles[0].pos().y;

    for frame in 0..max_frames {
        let now = frame as f64 * FRAME_MS;
        let Some(dt) = clock.advance(now) else {
            continue;
        };

        // Chase the ball with limited speed so it eventually gets past
        let target = state.ball.pos().y;
        pointer_y += (target - pointer_y).clamp(-POINTER_SPEED, POINTER_SPEED);

        let input = TickInput {
            pointer_y: Some(pointer_y),
            ..Default::default()
        };
        tick(&mut state, &input, dt);

        for event in &state.events {
            match event {
                GameEvent::LifeLost { remaining } => {
                    log::info!("Frame {frame}: life lost, {remaining} remaining")
                }
                GameEvent::GameOver { score } => {
                    log::info!("Frame {frame}: game over with {}", score.floor())
                }
                GameEvent::PaddleHit { paddle } => log::debug!("Frame {frame}: paddle {paddle} hit"),
                GameEvent::WallBounce => log::trace!("Frame {frame}: wall bounce"),
            }
        }

        if state.is_over() {
            break;
        }
    }

    let snapshot = state.snapshot();
    if let Some(message) = &snapshot.game_over_message {
        println!("{message}");
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).context("failed to serialize snapshot")?
    );

    Ok(())
}
