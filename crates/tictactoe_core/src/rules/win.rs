//! Win detection logic for tic-tac-toe.

use super::line::{LINES, Line};
use crate::{Board, Mark};

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`LINES`] order and the first fully marked one
/// decides. Only one mark can own a line on a board reached by legal play,
/// the fixed order just keeps the answer deterministic for any board.
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|line| line.owner(board))
}

/// Every line currently owned by a single mark.
///
/// Usually empty or one line, but a final move can complete two at once.
pub fn winning_lines(board: &Board) -> Vec<Line> {
    LINES
        .iter()
        .copied()
        .filter(|line| line.owner(board).is_some())
        .collect()
}
