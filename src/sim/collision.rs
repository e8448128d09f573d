//! Collision detection and response for axis-aligned bodies
//!
//! Walls are tested against the ball's edges. Paddle tests are asymmetric:
//! the left paddle reaches `contact_margin` ball widths past the ball's left
//! edge, while the right paddle only sees the ball's true right edge.

use glam::Vec2;

use super::shape::Shape;
use super::state::{Arena, Ball, Paddle};

/// Which side of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleSide {
    Left,
    Right,
}

impl PaddleSide {
    /// Classify a paddle by which half of the arena it sits in. A paddle
    /// straddling the midline defends neither side.
    pub fn of(paddle: &impl Shape, arena_width: f32) -> Option<Self> {
        let mid = arena_width / 2.0;
        if paddle.right() < mid {
            Some(PaddleSide::Left)
        } else if paddle.left() > mid {
            Some(PaddleSide::Right)
        } else {
            None
        }
    }

    /// Whether a horizontal velocity is heading toward this side
    #[inline]
    pub fn approached_by(self, vel_x: f32) -> bool {
        match self {
            PaddleSide::Left => vel_x < 0.0,
            PaddleSide::Right => vel_x > 0.0,
        }
    }
}

/// Which horizontal wall the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Top,
    Bottom,
}

impl WallSide {
    /// Whether a vertical velocity is heading toward this wall
    #[inline]
    pub fn approached_by(self, vel_y: f32) -> bool {
        match self {
            WallSide::Top => vel_y < 0.0,
            WallSide::Bottom => vel_y > 0.0,
        }
    }
}

/// Ball has reached a side wall (a life is lost)
pub fn ball_side_wall_collision(ball: &impl Shape, arena: &Arena) -> bool {
    ball.left() < ball.half_width() || ball.right() > arena.width
}

/// Ball has reached the info bar or the bottom wall
pub fn ball_top_bottom_collision(ball: &impl Shape, arena: &Arena) -> Option<WallSide> {
    if ball.top() < ball.half_height() + arena.info_bar_height {
        Some(WallSide::Top)
    } else if ball.bottom() > arena.height {
        Some(WallSide::Bottom)
    } else {
        None
    }
}

/// Bounce the ball off the top or bottom wall if it touches one and is
/// still heading into it. Returns whether the ball was reflected.
pub fn ball_wall_bounce(ball: &mut Ball, arena: &Arena) -> bool {
    match ball_top_bottom_collision(&*ball, arena) {
        Some(side) if side.approached_by(ball.vel.y) => {
            ball.vel = reflect_velocity(ball.vel, Vec2::Y);
            true
        }
        _ => false,
    }
}

/// Overlap test between a paddle and the ball
///
/// `margin` extends the left paddle's reach past the ball's left edge.
pub fn paddle_overlap(
    paddle: &impl Shape,
    ball: &impl Shape,
    arena_width: f32,
    margin: f32,
) -> Option<PaddleSide> {
    let side = PaddleSide::of(paddle, arena_width)?;
    let vertical = paddle.top() < ball.bottom() && paddle.bottom() > ball.top();
    let horizontal = match side {
        PaddleSide::Left => ball.left() - margin <= paddle.right(),
        PaddleSide::Right => ball.right() >= paddle.left(),
    };
    (vertical && horizontal).then_some(side)
}

/// Bounce the ball off a paddle if they overlap and the ball is still
/// heading toward it. Returns whether the ball was reflected.
pub fn ball_paddle_collision(
    paddle: &Paddle,
    ball: &mut Ball,
    arena_width: f32,
    contact_margin: f32,
) -> bool {
    let margin = contact_margin * ball.width();
    match paddle_overlap(paddle, &*ball, arena_width, margin) {
        Some(side) if side.approached_by(ball.vel.x) => {
            ball.vel = reflect_velocity(ball.vel, Vec2::X);
            true
        }
        _ => false,
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n. With an axis-aligned normal this
/// flips exactly one component and preserves speed.
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
