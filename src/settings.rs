//! Game settings
//!
//! Every tunable value of a run. Loaded from JSON by the host; missing fields
//! fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};
use crate::sim::Color;

/// Normal and flashed fill colors for one kind of entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub normal: Color,
    pub flash: Color,
}

impl Palette {
    pub const fn new(normal: u32, flash: u32) -> Self {
        Self {
            normal: Color(normal),
            flash: Color(flash),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Strip at the top excluded from the ball's bounce region
    pub info_bar_height: f32,

    // === Rules ===
    pub lives: u32,
    /// Points per second while playing
    pub score_rate: f32,

    // === Ball ===
    pub ball_size: f32,
    /// Per-axis serve speed
    pub ball_speed: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_move_speed: f32,
    /// How far past its left edge, in ball widths, the ball reaches the
    /// left paddle. 1.0 is the classic behavior, 0.5 tests the half-width
    /// variant.
    pub contact_margin: f32,

    // === Colors ===
    pub ball_colors: Palette,
    pub paddle_colors: Palette,
    pub arena_colors: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            info_bar_height: INFO_BAR_HEIGHT,

            lives: START_LIVES,
            score_rate: SCORE_RATE,

            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,
            paddle_move_speed: PADDLE_MOVE_SPEED,
            contact_margin: CONTACT_MARGIN,

            ball_colors: Palette::new(BALL_COLOR, BALL_FLASH_COLOR),
            paddle_colors: Palette::new(PADDLE_COLOR, PADDLE_FLASH_COLOR),
            arena_colors: Palette::new(ARENA_COLOR, ARENA_FLASH_COLOR),
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the preconditions a game needs to be constructed
    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: f32) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SimError::InvalidSettings(format!(
                    "{name} must be positive, got {value}"
                )))
            }
        }
        fn non_negative(name: &str, value: f32) -> Result<()> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(SimError::InvalidSettings(format!(
                    "{name} must not be negative, got {value}"
                )))
            }
        }

        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;
        non_negative("info_bar_height", self.info_bar_height)?;
        if self.info_bar_height >= self.arena_height {
            return Err(SimError::InvalidSettings(format!(
                "info_bar_height {} leaves no room in an arena {} tall",
                self.info_bar_height, self.arena_height
            )));
        }
        if self.lives == 0 {
            return Err(SimError::InvalidSettings(
                "a run needs at least one life".to_string(),
            ));
        }
        non_negative("score_rate", self.score_rate)?;
        non_negative("ball_speed", self.ball_speed)?;
        non_negative("paddle_inset", self.paddle_inset)?;
        non_negative("paddle_move_speed", self.paddle_move_speed)?;
        non_negative("contact_margin", self.contact_margin)?;

        positive("ball_size", self.ball_size)?;
        positive("paddle_height", self.paddle_height)?;
        let playfield = self.arena_height - self.info_bar_height;
        if self.paddle_height > playfield {
            return Err(SimError::InvalidSettings(format!(
                "paddle_height {} does not fit below the info bar ({playfield})",
                self.paddle_height
            )));
        }
        // A centered ball must not already touch the side walls
        if self.ball_size > self.arena_width / 2.0 {
            return Err(SimError::InvalidSettings(format!(
                "ball_size {} is more than half of arena_width {}",
                self.ball_size, self.arena_width
            )));
        }
        if self.ball_size > playfield {
            return Err(SimError::InvalidSettings(format!(
                "ball_size {} does not fit below the info bar ({playfield})",
                self.ball_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "lives": 5, "ball_speed": 120.0 }"#).unwrap();
        assert_eq!(settings.lives, 5);
        assert_eq!(settings.ball_speed, 120.0);
        assert_eq!(settings.arena_width, ARENA_WIDTH);
        assert_eq!(settings.paddle_colors.normal, Color(PADDLE_COLOR));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut settings = Settings::default();
        settings.contact_margin = 0.5;
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = [
            r#"{ "arena_width": 0.0 }"#,
            r#"{ "info_bar_height": 600.0 }"#,
            r#"{ "lives": 0 }"#,
            r#"{ "score_rate": -1.0 }"#,
            r#"{ "contact_margin": -0.5 }"#,
            r#"{ "paddle_height": 571.0 }"#,
            r#"{ "info_bar_height": 500.0 }"#,
            r#"{ "ball_size": 401.0 }"#,
            r#"{ "arena_width": 50.0 }"#,
        ];
        for json in bad {
            assert!(
                matches!(Settings::from_json(json), Err(SimError::InvalidSettings(_))),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn test_size_limits_are_inclusive() {
        let settings = Settings {
            paddle_height: 570.0,
            ball_size: 400.0,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ lives: "),
            Err(SimError::Parse(_))
        ));
    }
}
