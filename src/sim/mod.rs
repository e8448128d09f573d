//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform concerns:
//! - The host supplies `dt` and input
//! - Paddles are processed in a fixed order (left, then right)
//! - State is read back through [`Snapshot`]

pub mod collision;
pub mod shape;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{
    PaddleSide, WallSide, ball_paddle_collision, ball_side_wall_collision,
    ball_top_bottom_collision, ball_wall_bounce, paddle_overlap, reflect_velocity,
};
pub use shape::{Body, Color, Shape};
pub use snapshot::{ArenaView, BallView, PaddleView, Snapshot};
pub use state::{Arena, Ball, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
