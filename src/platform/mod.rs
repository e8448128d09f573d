//! Host shell helpers
//!
//! Handles the parts of the frame loop that belong to the host:
//! - Turning animation-frame timestamps into `dt`
//! - Mapping key events onto paddle input

use crate::sim::TickInput;

/// Converts millisecond frame timestamps into elapsed seconds
///
/// The first frame of a run has no predecessor, so it yields no `dt`.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame timestamp, returning seconds since the previous one
    pub fn advance(&mut self, now_ms: f64) -> Option<f32> {
        let dt = self.last_ms.map(|last| ((now_ms - last) / 1000.0) as f32);
        self.last_ms = Some(now_ms);
        dt
    }

    /// Forget the previous timestamp (e.g. after the tab was hidden)
    pub fn restart(&mut self) {
        self.last_ms = None;
    }
}

/// Held state of the up/down keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
}

impl KeyState {
    /// Handle a key press by DOM key name. Returns false for unmapped keys.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set(key, true)
    }

    /// Handle a key release by DOM key name. Returns false for unmapped keys.
    pub fn key_up(&mut self, key: &str) -> bool {
        self.set(key, false)
    }

    fn set(&mut self, key: &str, pressed: bool) -> bool {
        match key {
            "Up" | "ArrowUp" => self.up = pressed,
            "Down" | "ArrowDown" => self.down = pressed,
            _ => return false,
        }
        true
    }

    /// Copy held keys into a frame's input
    pub fn apply(&self, input: &mut TickInput) {
        input.move_up = self.up;
        input.move_down = self.down;
    }
}
