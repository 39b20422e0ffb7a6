//! Exhaustive minimax search for the optimal move.
//!
//! The tree below any 3x3 position is small enough (at most 9! leaves) to
//! search completely, so there is no pruning or transposition table. Every
//! hypothetical placement is made on a copy of the board.

use crate::rules::{LINES, is_full, winner};
use crate::{Board, Mark};
use tracing::{debug, instrument};

/// Score of a win found at depth 0.
const WIN: i32 = 10;

/// Returns the optimal move for `mover`, or `None` if the board is full.
///
/// An immediate win is taken first, then an immediate block of the
/// opponent. Otherwise each empty cell is scored by full minimax and the
/// lowest index with the best score wins.
#[instrument(skip(board), fields(filled = board.filled()))]
pub fn best_move(board: &Board, mover: Mark) -> Option<usize> {
    if let Some(index) = completing_move(board, mover) {
        debug!(index, "Taking immediate win");
        return Some(index);
    }

    if let Some(index) = completing_move(board, mover.opponent()) {
        debug!(index, "Blocking immediate loss");
        return Some(index);
    }

    let mut best: Option<(usize, i32)> = None;
    for index in board.empty_indices() {
        let score = minimax(&board.with(index, mover), mover, 0, false);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((index, score));
        }
    }

    if let Some((index, score)) = best {
        debug!(index, score, "Minimax selected move");
    }
    best.map(|(index, _)| index)
}

/// Minimax value of `board` for the side playing `maximizer`.
///
/// `maximizing` says whose ply comes next. Wins are discounted by depth so
/// quicker wins and slower losses are preferred.
fn minimax(board: &Board, maximizer: Mark, depth: i32, maximizing: bool) -> i32 {
    match winner(board) {
        Some(mark) if mark == maximizer => return WIN - depth,
        Some(_) => return depth - WIN,
        None if is_full(board) => return 0,
        None => {}
    }

    let mark = if maximizing {
        maximizer
    } else {
        maximizer.opponent()
    };
    let scores = board
        .empty_indices()
        .map(|index| minimax(&board.with(index, mark), maximizer, depth + 1, !maximizing));

    if maximizing {
        scores.max().unwrap_or(0)
    } else {
        scores.min().unwrap_or(0)
    }
}

/// First empty cell (in line order) that completes a line for `mark`.
fn completing_move(board: &Board, mark: Mark) -> Option<usize> {
    LINES
        .iter()
        .find_map(|line| line.completing_cell(board, mark))
}
