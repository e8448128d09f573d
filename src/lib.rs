//! Arena Pong - a two-paddle rectangular arena arcade game
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (entities, collisions, game state)
//! - `settings`: Data-driven game configuration
//! - `platform`: Host shell helpers (frame clock, key mapping)
//!
//! Rendering and the animation loop belong to the host. The core only
//! advances state and hands back a [`sim::Snapshot`].

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Reserved strip at the top of the arena for score/lives
    pub const INFO_BAR_HEIGHT: f32 = 30.0;

    /// Player lives at the start of a run
    pub const START_LIVES: u32 = 2;
    /// Score gained per second of play
    pub const SCORE_RATE: f32 = 10.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 30.0;
    pub const BALL_SPEED: f32 = 200.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 40.0;
    pub const PADDLE_HEIGHT: f32 = 150.0;
    /// Distance from each side wall to the paddle center
    pub const PADDLE_INSET: f32 = 40.0;
    /// Keyboard nudge per frame
    pub const PADDLE_MOVE_SPEED: f32 = 5.0;

    /// Left paddle reach, in ball widths
    pub const CONTACT_MARGIN: f32 = 1.0;

    /// Default palette (0xRRGGBB)
    pub const BALL_COLOR: u32 = 0xd80202;
    pub const BALL_FLASH_COLOR: u32 = 0x000000;
    pub const PADDLE_COLOR: u32 = 0x2500dc;
    pub const PADDLE_FLASH_COLOR: u32 = 0x000000;
    pub const ARENA_COLOR: u32 = 0xeeeeee;
    pub const ARENA_FLASH_COLOR: u32 = 0xffc0cb;
}
