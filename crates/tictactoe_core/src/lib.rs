//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Board**: the 9-cell grid ([`Board`], [`Cell`], [`Mark`])
//! - **Rules**: win and draw detection over any board ([`rules`])
//! - **Search**: exhaustive minimax for the optimal move ([`best_move`])
//! - **Policy**: the computer opponent, blending search with random play
//!   ([`choose_move`])
//!
//! Nothing here performs I/O or owns a clock. Randomness arrives through the
//! [`RandomSource`] trait so callers decide where it comes from.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, Mark, best_move, rules};
//!
//! let mut board = Board::new();
//! board.place(0, Mark::X).unwrap();
//! board.place(1, Mark::X).unwrap();
//! assert_eq!(best_move(&board, Mark::O), Some(2));
//! assert_eq!(rules::winner(&board), None);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod policy;
mod position;
mod random;
pub mod rules;
mod search;
mod types;

pub use policy::{
    DEFAULT_OPTIMAL_PROBABILITY, InvalidProbability, NoLegalMove, OpponentConfig, choose_move,
    random_move,
};
pub use position::Position;
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use rules::{LINES, Line};
pub use search::best_move;
pub use types::{Board, BoardError, CELLS, Cell, Mark};
