use crate::Config;
use std::time::Duration;
use thiserror::Error;

/// Speeds offered in the options dialog.
pub const MOVES_PER_SECOND_CHOICES: [u32; 8] = [1, 2, 3, 4, 5, 10, 15, 20];

/// Percentages offered in the autofill dialog.
pub const AUTOFILL_PERCENT_CHOICES: [u8; 13] = [5, 10, 15, 20, 25, 30, 40, 50, 60, 70, 80, 90, 95];

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OptionsError {
    #[error("{0} moves per second is not one of the offered speeds")]
    UnsupportedSpeed(u32),
}

/// User settings, kept in memory for the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    moves_per_second: u32,
    autofill_percent: Option<u8>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            moves_per_second: Config::DEFAULT_MOVES_PER_SECOND,
            autofill_percent: None,
        }
    }
}

impl Options {
    pub fn moves_per_second(&self) -> u32 {
        self.moves_per_second
    }

    pub fn set_moves_per_second(&mut self, moves: u32) -> Result<(), OptionsError> {
        if !MOVES_PER_SECOND_CHOICES.contains(&moves) {
            return Err(OptionsError::UnsupportedSpeed(moves));
        }
        self.moves_per_second = moves;
        Ok(())
    }

    /// Last percentage used for autofill, `None` until the first one.
    pub fn autofill_percent(&self) -> Option<u8> {
        self.autofill_percent
    }

    /// Remembers the fill percentage, clamped to 100.
    pub fn set_autofill_percent(&mut self, percent: u8) -> u8 {
        let percent = percent.min(100);
        self.autofill_percent = Some(percent);
        percent
    }

    /// Time between two moves while the game is running.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.moves_per_second
    }
}
