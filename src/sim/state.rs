//! Game state and core simulation types
//!
//! Everything the renderer reads and the frame loop mutates lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shape::{Body, Color, Shape};
use crate::error::Result;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Fresh game, ball centered and waiting for the first serve
    Start,
    /// Active gameplay
    Playing,
    /// Game is paused, ball keeps its velocity
    Paused,
    /// Out of lives (terminal)
    Over,
}

/// Something that happened during the most recent update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball bounced off a paddle
    PaddleHit { paddle: usize },
    /// Ball left through a side wall and was re-served
    LifeLost { remaining: u32 },
    /// Last life lost
    GameOver { score: f32 },
}

/// The ball
#[derive(Debug, Clone, Serialize)]
pub struct Ball {
    pub body: Body,
    pub vel: Vec2,
    /// Per-axis serve speed
    pub speed: f32,
}

impl Ball {
    pub fn new(size: f32, speed: f32, fill: Color) -> Result<Self> {
        Ok(Self {
            body: Body::new("ball", size, size, fill)?,
            vel: Vec2::ZERO,
            speed,
        })
    }

    /// Move by one frame of velocity
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.body.pos += self.vel * dt;
    }
}

impl Shape for Ball {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

/// A vertically moving paddle
///
/// Position is set from outside (pointer or keys). Velocity is only ever
/// derived from how far the paddle moved since the previous frame.
#[derive(Debug, Clone, Serialize)]
pub struct Paddle {
    pub body: Body,
    pub vel: Vec2,
    /// Distance moved per frame while an up/down key is held
    pub move_speed: f32,
    prev_pos: Vec2,
}

impl Paddle {
    pub fn new(width: f32, height: f32, move_speed: f32, fill: Color) -> Result<Self> {
        Ok(Self {
            body: Body::new("paddle", width, height, fill)?,
            vel: Vec2::ZERO,
            move_speed,
            prev_pos: Vec2::ZERO,
        })
    }

    /// Place the paddle without producing a velocity spike next frame
    pub fn place(&mut self, pos: Vec2) {
        self.body.pos = pos;
        self.prev_pos = pos;
    }

    /// Forget motion made while the simulation was not running
    pub fn settle(&mut self) {
        self.prev_pos = self.body.pos;
        self.vel = Vec2::ZERO;
    }

    /// Derive velocity from the position change since the last call
    pub fn track_velocity(&mut self, dt: f32) {
        self.vel.y = (self.body.pos.y - self.prev_pos.y) / dt;
        self.prev_pos.y = self.body.pos.y;
    }

    #[inline]
    pub fn prev_pos(&self) -> Vec2 {
        self.prev_pos
    }
}

impl Shape for Paddle {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

/// The playfield rectangle
#[derive(Debug, Clone, Serialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub info_bar_height: f32,
    pub fill: Color,
}

impl Arena {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub ball: Ball,
    /// Left paddle first, then right
    pub paddles: [Paddle; 2],
    pub lives: u32,
    pub score: f32,
    pub phase: GamePhase,
    pub arena: Arena,
    /// Events raised by the most recent update
    pub events: Vec<GameEvent>,
    pub settings: Settings,
}

impl GameState {
    /// Build a game from validated settings, with the ball centered
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;

        let ball = Ball::new(
            settings.ball_size,
            settings.ball_speed,
            settings.ball_colors.normal,
        )?;
        let mut paddles = [
            Paddle::new(
                settings.paddle_width,
                settings.paddle_height,
                settings.paddle_move_speed,
                settings.paddle_colors.normal,
            )?,
            Paddle::new(
                settings.paddle_width,
                settings.paddle_height,
                settings.paddle_move_speed,
                settings.paddle_colors.normal,
            )?,
        ];

        // Paddles start half a paddle below center
        let y = settings.arena_height / 2.0 + settings.paddle_height / 2.0;
        paddles[0].place(Vec2::new(settings.paddle_inset, y));
        paddles[1].place(Vec2::new(settings.arena_width - settings.paddle_inset, y));

        let mut state = Self {
            ball,
            paddles,
            lives: settings.lives,
            score: 0.0,
            phase: GamePhase::Start,
            arena: Arena {
                width: settings.arena_width,
                height: settings.arena_height,
                info_bar_height: settings.info_bar_height,
                fill: settings.arena_colors.normal,
            },
            events: Vec::new(),
            settings,
        };
        state.reset();

        Ok(state)
    }

    /// Stop the ball and put it back in the middle of the arena
    pub fn reset(&mut self) {
        self.ball.vel = Vec2::ZERO;
        self.ball.body.pos = self.arena.center();
    }

    /// Start, resume, or re-serve
    pub fn play(&mut self) {
        let next = match self.phase {
            GamePhase::Start | GamePhase::Paused | GamePhase::Playing => GamePhase::Playing,
            GamePhase::Over => {
                log::warn!("play() ignored, game is over");
                return;
            }
        };

        let fresh_game = self.ball.vel == Vec2::ZERO && self.phase == GamePhase::Start;
        if fresh_game || self.phase == GamePhase::Playing {
            self.reset();
        }

        // Serve
        if self.ball.vel == Vec2::ZERO {
            self.ball.vel = Vec2::splat(self.ball.speed);
        }

        if self.phase != next {
            log::info!("Phase {:?} -> {:?}", self.phase, next);
            for paddle in &mut self.paddles {
                paddle.settle();
            }
        }
        self.phase = next;
    }

    /// Freeze an active game
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            log::info!("Phase Playing -> Paused");
            self.phase = GamePhase::Paused;
        }
    }

    /// Point both paddles at the same pointer height
    pub fn set_paddle_targets(&mut self, y: f32) {
        for paddle in &mut self.paddles {
            paddle.body.pos.y = y;
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> GameState {
        GameState::new(Settings::default()).unwrap()
    }

    #[test]
    fn test_new_layout() {
        let state = new_state();
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.lives, 2);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.ball.pos(), Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.paddles[0].pos(), Vec2::new(40.0, 375.0));
        assert_eq!(state.paddles[1].pos(), Vec2::new(760.0, 375.0));
        assert_eq!(state.paddles[1].left(), 740.0);
    }

    #[test]
    fn test_bad_sizes_fail_construction() {
        let settings = Settings {
            paddle_height: 0.0,
            ..Default::default()
        };
        assert!(GameState::new(settings).is_err());

        let settings = Settings {
            ball_size: -3.0,
            ..Default::default()
        };
        assert!(GameState::new(settings).is_err());
    }

    #[test]
    fn test_play_from_start_serves() {
        let mut state = new_state();
        state.ball.body.pos = Vec2::new(12.0, 99.0);
        state.reset();
        state.play();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.vel, Vec2::new(200.0, 200.0));
        assert_eq!(state.ball.pos(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_play_from_playing_reserves() {
        let mut state = new_state();
        state.play();
        state.ball.body.pos = Vec2::new(100.0, 100.0);
        state.ball.vel = Vec2::new(-200.0, 200.0);
        state.play();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.pos(), state.arena.center());
        assert_eq!(state.ball.vel, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_pause_and_resume_keeps_ball() {
        let mut state = new_state();
        state.play();
        state.ball.body.pos = Vec2::new(300.0, 250.0);
        state.ball.vel = Vec2::new(-200.0, 200.0);

        state.pause();
        assert_eq!(state.phase, GamePhase::Paused);

        state.play();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.pos(), Vec2::new(300.0, 250.0));
        assert_eq!(state.ball.vel, Vec2::new(-200.0, 200.0));
    }

    #[test]
    fn test_start_with_moving_ball_keeps_velocity() {
        let mut state = new_state();
        state.ball.vel = Vec2::new(-50.0, 10.0);
        state.play();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.vel, Vec2::new(-50.0, 10.0));
    }

    #[test]
    fn test_over_is_terminal() {
        let mut state = new_state();
        state.phase = GamePhase::Over;
        state.play();
        assert_eq!(state.phase, GamePhase::Over);
        state.pause();
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_paddle_velocity_tracking() {
        let mut paddle = Paddle::new(40.0, 150.0, 5.0, Color(0)).unwrap();
        paddle.place(Vec2::new(40.0, 300.0));
        paddle.track_velocity(0.5);
        assert_eq!(paddle.vel.y, 0.0);

        paddle.body.pos.y = 350.0;
        paddle.track_velocity(0.5);
        assert_eq!(paddle.vel.y, 100.0);
        assert_eq!(paddle.prev_pos().y, 350.0);
    }
}
