//! Turn states and game outcomes.

use serde::{Deserialize, Serialize};
use tictactoe_core::Mark;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    Win(Mark),
    /// Board filled with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where the turn controller stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// Waiting for `mover` to play.
    AwaitingInput(Mark),
    /// Game over; only a restart leaves this state.
    Terminal(Outcome),
}

impl TurnState {
    /// The mark to move, `None` once the game is over.
    pub fn mover(&self) -> Option<Mark> {
        match self {
            TurnState::AwaitingInput(mark) => Some(*mark),
            TurnState::Terminal(_) => None,
        }
    }

    /// Whether moves are still accepted.
    pub fn is_active(&self) -> bool {
        matches!(self, TurnState::AwaitingInput(_))
    }
}
