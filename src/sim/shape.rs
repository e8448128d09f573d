//! Axis-aligned bodies shared by the ball and paddles

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// An opaque RGB fill color, serialized as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub u32);

impl Color {
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0 & 0xff_ffff)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        let hex = value.strip_prefix('#').unwrap_or(&value);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("expected #rrggbb, got {value:?}"));
        }
        u32::from_str_radix(hex, 16)
            .map(Color)
            .map_err(|err| format!("bad color {value:?}: {err}"))
    }
}

/// Position, size and fill of an axis-aligned rectangle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Body {
    /// Center point
    pub pos: Vec2,
    size: Vec2,
    pub fill: Color,
}

impl Body {
    /// Create a body centered at the origin. Width and height must be
    /// finite and positive.
    pub fn new(what: &'static str, width: f32, height: f32, fill: Color) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SimError::InvalidSize {
                what,
                width,
                height,
            });
        }
        Ok(Self {
            pos: Vec2::ZERO,
            size: Vec2::new(width, height),
            fill,
        })
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }
}

/// Edge accessors for anything built on a [`Body`]
pub trait Shape {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    #[inline]
    fn pos(&self) -> Vec2 {
        self.body().pos
    }

    #[inline]
    fn width(&self) -> f32 {
        self.body().size.x
    }

    #[inline]
    fn height(&self) -> f32 {
        self.body().size.y
    }

    #[inline]
    fn half_width(&self) -> f32 {
        self.width() / 2.0
    }

    #[inline]
    fn half_height(&self) -> f32 {
        self.height() / 2.0
    }

    #[inline]
    fn left(&self) -> f32 {
        self.pos().x - self.half_width()
    }

    #[inline]
    fn right(&self) -> f32 {
        self.pos().x + self.half_width()
    }

    #[inline]
    fn top(&self) -> f32 {
        self.pos().y - self.half_height()
    }

    #[inline]
    fn bottom(&self) -> f32 {
        self.pos().y + self.half_height()
    }

    #[inline]
    fn fill(&self) -> Color {
        self.body().fill
    }

    #[inline]
    fn set_fill(&mut self, color: Color) {
        self.body_mut().fill = color;
    }
}

impl Shape for Body {
    fn body(&self) -> &Body {
        self
    }

    fn body_mut(&mut self) -> &mut Body {
        self
    }
}
