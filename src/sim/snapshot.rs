//! Read-only view of a frame for the renderer

use glam::Vec2;
use serde::Serialize;

use super::shape::{Color, Shape};
use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
    pub fill: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaddleView {
    pub pos: Vec2,
    pub half_extents: Vec2,
    pub fill: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArenaView {
    pub width: f32,
    pub height: f32,
    pub info_bar_height: f32,
    pub fill: Color,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub ball: BallView,
    pub paddles: [PaddleView; 2],
    pub score: f32,
    /// Score as shown on the info bar
    pub display_score: u64,
    pub lives: u32,
    pub phase: GamePhase,
    pub arena: ArenaView,
    /// Set once the game is over
    pub game_over_message: Option<String>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let paddle_view = |i: usize| {
            let paddle = &state.paddles[i];
            PaddleView {
                pos: paddle.pos(),
                half_extents: Vec2::new(paddle.half_width(), paddle.half_height()),
                fill: paddle.fill(),
            }
        };
        let display_score = state.score.floor() as u64;

        Self {
            ball: BallView {
                pos: state.ball.pos(),
                radius: state.ball.half_width(),
                fill: state.ball.fill(),
            },
            paddles: [paddle_view(0), paddle_view(1)],
            score: state.score,
            display_score,
            lives: state.lives,
            phase: state.phase,
            arena: ArenaView {
                width: state.arena.width,
                height: state.arena.height,
                info_bar_height: state.arena.info_bar_height,
                fill: state.arena.fill,
            },
            game_over_message: state
                .is_over()
                .then(|| format!("Game over! Your high score: {display_score}")),
        }
    }
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
