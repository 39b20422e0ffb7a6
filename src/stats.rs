//! Running win/loss/draw statistics for a session.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Which bucket a finished game was counted in, from the human's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The human won.
    Win,
    /// The computer won.
    Loss,
    /// Nobody won.
    Draw,
}

/// Session statistics. Counts only grow until [`Statistics::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Statistics {
    wins: u32,
    losses: u32,
    draws: u32,
}

impl Statistics {
    /// Empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one finished game.
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Win => self.wins += 1,
            Verdict::Loss => self.losses += 1,
            Verdict::Draw => self.draws += 1,
        }
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Games counted so far.
    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Win rate as a whole percentage, 0 before any game finishes.
    pub fn win_rate(&self) -> u32 {
        let total = self.total_games();
        if total == 0 {
            0
        } else {
            (f64::from(self.wins) / f64::from(total) * 100.0).round() as u32
        }
    }
}
