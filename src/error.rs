//! Construction-time errors
//!
//! The per-frame simulation is total and never fails. Everything that can go
//! wrong happens while building a game from settings.

use std::fmt;

/// Errors raised while building entities or loading settings
#[derive(Debug)]
pub enum SimError {
    /// A shape was given a non-positive or non-finite size
    InvalidSize {
        what: &'static str,
        width: f32,
        height: f32,
    },
    /// Settings failed validation
    InvalidSettings(String),
    /// Settings JSON could not be parsed
    Parse(serde_json::Error),
    /// Settings file could not be read
    Io(std::io::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidSize {
                what,
                width,
                height,
            } => write!(
                f,
                "{what} must have a positive size, got {width}x{height}"
            ),
            SimError::InvalidSettings(reason) => write!(f, "invalid settings: {reason}"),
            SimError::Parse(err) => write!(f, "failed to parse settings: {err}"),
            SimError::Io(err) => write!(f, "failed to read settings: {err}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Parse(err) => Some(err),
            SimError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Parse(err)
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
