//! Who plays which mark in a given game.

use crate::Mode;
use serde::{Deserialize, Serialize};
use tictactoe_core::Mark;

/// Seat assignment for one game, derived once when the game starts.
///
/// Games alternate who opens: even-numbered games are opened by the human
/// with X, odd-numbered games by the other side with O. Every later question
/// about "is this the human's mark" goes through [`Seats::human_mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seats {
    first_mover: Mark,
    human_opens: bool,
}

impl Seats {
    /// Seats for game number `game` (0-based parity).
    pub fn for_game(game: u64) -> Self {
        let human_opens = game % 2 == 0;
        Self {
            first_mover: if human_opens { Mark::X } else { Mark::O },
            human_opens,
        }
    }

    /// The mark that plays the first ply.
    pub fn first_mover(&self) -> Mark {
        self.first_mover
    }

    /// Whether the human plays the first ply.
    pub fn human_opens(&self) -> bool {
        self.human_opens
    }

    /// The human's mark in this game.
    pub fn human_mark(&self) -> Mark {
        if self.human_opens {
            self.first_mover
        } else {
            self.first_mover.opponent()
        }
    }

    /// The computer's mark, when there is a computer.
    pub fn computer_mark(&self, mode: Mode) -> Option<Mark> {
        match mode {
            Mode::HumanVsComputer => Some(self.human_mark().opponent()),
            Mode::HumanVsHuman => None,
        }
    }

    /// Whether `mark` belongs to the computer under `mode`.
    pub fn is_computer(&self, mode: Mode, mark: Mark) -> bool {
        self.computer_mark(mode) == Some(mark)
    }
}
