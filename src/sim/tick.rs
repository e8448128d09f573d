//! Per-frame simulation step
//!
//! Advances the game by one variable-length frame. The host measures `dt`
//! and owns the loop; nothing in here schedules or sleeps.

use super::collision::{ball_paddle_collision, ball_side_wall_collision, ball_wall_bounce};
use super::shape::Shape;
use super::state::{GameEvent, GamePhase, GameState};

/// Input gathered by the host for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer height, applied to both paddles
    pub pointer_y: Option<f32>,
    /// Up key held
    pub move_up: bool,
    /// Down key held
    pub move_down: bool,
    /// Pause toggle
    pub pause: bool,
    /// Start or resume play
    pub serve: bool,
}

/// Apply one frame of input, then advance the game
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.pause {
        match state.phase {
            GamePhase::Playing => state.pause(),
            GamePhase::Paused => state.play(),
            _ => {}
        }
    }
    if input.serve && matches!(state.phase, GamePhase::Start | GamePhase::Paused) {
        state.play();
    }

    if let Some(y) = input.pointer_y {
        state.set_paddle_targets(y);
    }

    state.step(dt, input.move_up, input.move_down);
}

impl GameState {
    /// Advance the simulation by `dt` seconds with no key input
    pub fn update(&mut self, dt: f32) {
        self.step(dt, false, false);
    }

    fn step(&mut self, dt: f32, move_up: bool, move_down: bool) {
        self.events.clear();

        if self.phase != GamePhase::Playing {
            return;
        }
        if !(dt.is_finite() && dt > 0.0) {
            log::trace!("Skipping frame with dt={dt}");
            return;
        }

        self.score += self.settings.score_rate * dt;

        // Side walls, checked before the ball moves
        if ball_side_wall_collision(&self.ball, &self.arena) {
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                log::info!("Game over! Final score: {}", self.score.floor());
                self.phase = GamePhase::Over;
                self.events.push(GameEvent::GameOver { score: self.score });
                return;
            }
            log::debug!("Life lost, {} remaining", self.lives);
            self.events.push(GameEvent::LifeLost {
                remaining: self.lives,
            });
            self.play();
        }

        self.ball.integrate(dt);

        let ball_colors = self.settings.ball_colors;
        let paddle_colors = self.settings.paddle_colors;
        let arena_colors = self.settings.arena_colors;
        let mut ball_flashed = false;
        let mut arena_flashed = false;

        // Top/bottom walls
        if ball_wall_bounce(&mut self.ball, &self.arena) {
            self.ball.set_fill(ball_colors.flash);
            self.arena.fill = arena_colors.flash;
            ball_flashed = true;
            arena_flashed = true;
            log::trace!("Wall bounce at {:?}", self.ball.pos());
            self.events.push(GameEvent::WallBounce);
        }

        let min_y = self.arena.info_bar_height;
        let max_y = self.arena.height;
        for (i, paddle) in self.paddles.iter_mut().enumerate() {
            paddle.set_fill(paddle_colors.normal);

            paddle.track_velocity(dt);

            if ball_paddle_collision(
                paddle,
                &mut self.ball,
                self.arena.width,
                self.settings.contact_margin,
            ) {
                self.ball.set_fill(ball_colors.flash);
                paddle.set_fill(paddle_colors.flash);
                ball_flashed = true;
                log::trace!("Paddle {i} hit at {:?}", self.ball.pos());
                self.events.push(GameEvent::PaddleHit { paddle: i });
            }

            // Keep the paddle inside the arena, below the info bar
            let half = paddle.half_height();
            let y = &mut paddle.body.pos.y;
            if *y <= half + min_y {
                *y = half + min_y;
            }
            if *y + half > max_y {
                *y = max_y - half;
            }

            if move_up {
                *y -= paddle.move_speed;
            }
            if move_down {
                *y += paddle.move_speed;
            }
        }

        if !ball_flashed {
            self.ball.set_fill(ball_colors.normal);
        }
        if !arena_flashed {
            self.arena.fill = arena_colors.normal;
        }
    }
}
