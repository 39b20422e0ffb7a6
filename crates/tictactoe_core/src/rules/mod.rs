//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They never mutate their
//! input, so the same checks serve the live game and the boards that search
//! explores.

mod draw;
mod line;
mod win;

pub use draw::{is_draw, is_full};
pub use line::{LINES, Line};
pub use win::{winner, winning_lines};
