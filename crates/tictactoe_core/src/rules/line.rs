//! The eight winning lines.

use crate::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};

/// Three board indices that win when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line(pub [usize; 3]);

/// Every line, in the order rules and search scan them.
pub const LINES: [Line; 8] = [
    // Rows
    Line([0, 1, 2]),
    Line([3, 4, 5]),
    Line([6, 7, 8]),
    // Columns
    Line([0, 3, 6]),
    Line([1, 4, 7]),
    Line([2, 5, 8]),
    // Diagonals
    Line([0, 4, 8]),
    Line([2, 4, 6]),
];

impl Line {
    /// Whether `index` lies on this line.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// The mark filling all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        match board.get(a) {
            Some(Cell::Occupied(mark))
                if board.get(b) == Some(Cell::Occupied(mark))
                    && board.get(c) == Some(Cell::Occupied(mark)) =>
            {
                Some(mark)
            }
            _ => None,
        }
    }

    /// The empty cell completing this line for `mark`: two cells hold `mark`
    /// and the third is empty.
    pub fn completing_cell(&self, board: &Board, mark: Mark) -> Option<usize> {
        let mut empty = None;
        let mut owned = 0;
        for index in self.0 {
            match board.get(index)? {
                Cell::Empty => empty = Some(index),
                Cell::Occupied(m) if m == mark => owned += 1,
                Cell::Occupied(_) => return None,
            }
        }
        if owned == 2 { empty } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completing_cell_finds_gap() {
        let mut board = Board::new();
        board.place(0, Mark::O).unwrap();
        board.place(2, Mark::O).unwrap();
        assert_eq!(LINES[0].completing_cell(&board, Mark::O), Some(1));
        assert_eq!(LINES[0].completing_cell(&board, Mark::X), None);
    }

    #[test]
    fn test_completing_cell_ignores_blocked_line() {
        let mut board = Board::new();
        board.place(0, Mark::O).unwrap();
        board.place(1, Mark::O).unwrap();
        board.place(2, Mark::X).unwrap();
        assert_eq!(LINES[0].completing_cell(&board, Mark::O), None);
    }

    #[test]
    fn test_owner() {
        let mut board = Board::new();
        for i in [2, 4, 6] {
            board.place(i, Mark::X).unwrap();
        }
        assert_eq!(LINES[7].owner(&board), Some(Mark::X));
        assert_eq!(LINES[6].owner(&board), None);
    }
}
