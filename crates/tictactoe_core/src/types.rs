//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// The symbol a player's moves are recorded with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Mark {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// Reasons a placement is refused by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Index is not in `0..9`.
    #[display("Index {} is off the board (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major, index 0 is top-left and 8 is bottom-right.
/// The board is `Copy`, so search can explore hypothetical positions on
/// private copies without touching the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at `index`, or `None` when the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty. Off-board indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Writes `mark` into an empty cell.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfRange`] for indices past 8 and
    /// [`BoardError::Occupied`] when the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        match self.cells.get_mut(index) {
            None => Err(BoardError::OutOfRange(index)),
            Some(Cell::Occupied(_)) => Err(BoardError::Occupied(index)),
            Some(cell) => {
                *cell = Cell::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Returns a copy of the board with `mark` at `index`, used by search.
    pub(crate) fn with(mut self, index: usize, mark: Mark) -> Self {
        self.cells[index] = Cell::Occupied(mark);
        self
    }

    /// Lazily yields the indices of every empty cell in ascending order.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
    }

    /// Number of occupied cells, which equals the number of plies played.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }
}

impl std::fmt::Display for Board {
    /// Renders the board with empty cells numbered 1-9.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        assert_eq!(board.get(4), Some(Cell::Occupied(Mark::X)));
        assert!(!board.is_empty(4));
        assert_eq!(board.filled(), 1);
    }

    #[test]
    fn test_place_occupied_is_rejected() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        assert_eq!(board.place(0, Mark::O), Err(BoardError::Occupied(0)));
        assert_eq!(board.get(0), Some(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn test_place_out_of_range_is_rejected() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Mark::X), Err(BoardError::OutOfRange(9)));
        assert!(!board.is_empty(9));
        assert_eq!(board.filled(), 0);
    }

    #[test]
    fn test_empty_indices_skips_occupied() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(5, Mark::O).unwrap();
        let empties: Vec<_> = board.empty_indices().collect();
        assert_eq!(empties, vec![1, 2, 3, 4, 6, 7, 8]);
    }

    #[test]
    fn test_copy_is_independent() {
        let board = Board::new();
        let hypothetical = board.with(3, Mark::O);
        assert!(board.is_empty(3));
        assert!(!hypothetical.is_empty(3));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(8, Mark::O).unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O");
    }
}
