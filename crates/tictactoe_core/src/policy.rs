//! The computer opponent: optimal search blended with random play.

use crate::random::RandomSource;
use crate::search::best_move;
use crate::{Board, Mark};
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Default share of optimal moves, which lands the computer near a 50% win
/// rate against a capable human.
pub const DEFAULT_OPTIMAL_PROBABILITY: f64 = 0.5;

/// How often the opponent plays the search-optimal move.
///
/// This is a move-quality knob. Averaged over many games the computer's win
/// rate tracks it roughly, not exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OpponentConfig {
    optimal_probability: f64,
}

/// Rejected opponent configuration.
#[derive(Debug, Clone, Copy, PartialEq, Display, Error)]
#[display("optimal probability must be within [0, 1], got {}", _0)]
pub struct InvalidProbability(#[error(not(source))] pub f64);

impl OpponentConfig {
    /// Validates `optimal_probability` into a config.
    ///
    /// # Errors
    ///
    /// [`InvalidProbability`] unless the value lies in `[0, 1]`.
    pub fn new(optimal_probability: f64) -> Result<Self, InvalidProbability> {
        if (0.0..=1.0).contains(&optimal_probability) {
            Ok(Self {
                optimal_probability,
            })
        } else {
            Err(InvalidProbability(optimal_probability))
        }
    }

    /// Always play the optimal move.
    pub fn perfect() -> Self {
        Self {
            optimal_probability: 1.0,
        }
    }

    /// Always play a random move.
    pub fn random() -> Self {
        Self {
            optimal_probability: 0.0,
        }
    }

    /// Fraction of moves taken from search.
    pub fn optimal_probability(&self) -> f64 {
        self.optimal_probability
    }
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self {
            optimal_probability: DEFAULT_OPTIMAL_PROBABILITY,
        }
    }
}

/// The opponent was asked to move on a full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("no legal move left on the board")]
pub struct NoLegalMove;

/// Picks the computer's next move.
///
/// One sample decides the branch: below `optimal_probability` the move comes
/// from [`best_move`], otherwise it is uniform among the empty cells. The
/// result is always an empty cell.
///
/// # Errors
///
/// [`NoLegalMove`] when the board is full.
#[instrument(skip(board, rng), fields(filled = board.filled(), p = config.optimal_probability))]
pub fn choose_move(
    board: &Board,
    mover: Mark,
    config: &OpponentConfig,
    rng: &mut impl RandomSource,
) -> Result<usize, NoLegalMove> {
    let sample = rng.uniform();
    let candidate = if sample < config.optimal_probability {
        debug!(sample, "Optimal branch");
        best_move(board, mover)
    } else {
        debug!(sample, "Random branch");
        random_move(board, rng)
    };

    match candidate {
        Some(index) if board.is_empty(index) => Ok(index),
        other => {
            if board.filled() < crate::CELLS {
                warn!(?other, "Opponent produced an illegal move, falling back to random");
            }
            random_move(board, rng).ok_or(NoLegalMove)
        }
    }
}

/// Uniformly random empty cell, `None` on a full board.
pub fn random_move(board: &Board, rng: &mut impl RandomSource) -> Option<usize> {
    let empties: Vec<usize> = board.empty_indices().collect();
    if empties.is_empty() {
        return None;
    }
    empties.get(rng.index(empties.len())).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;

    const EPSILON: f64 = 1e-9;

    fn board_from(x: &[usize], o: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in x {
            board.place(i, Mark::X).unwrap();
        }
        for &i in o {
            board.place(i, Mark::O).unwrap();
        }
        board
    }

    #[test]
    fn test_sample_threshold_selects_branch() {
        // O wins at 2; empties are [2, 5, 7, 8] so 0.99 picks 8 at random.
        let board = board_from(&[3, 4, 6], &[0, 1]);
        let config = OpponentConfig::new(0.5).unwrap();

        let mut random = ScriptedSource::new(vec![0.5 + EPSILON, 0.99]);
        assert_eq!(choose_move(&board, Mark::O, &config, &mut random), Ok(8));

        let mut optimal = ScriptedSource::new(vec![0.5 - EPSILON, 0.99]);
        assert_eq!(choose_move(&board, Mark::O, &config, &mut optimal), Ok(2));
    }

    #[test]
    fn test_repeated_calls_stay_on_branch() {
        let board = board_from(&[0, 2], &[4]);
        let config = OpponentConfig::new(0.3).unwrap();
        for _ in 0..20 {
            let mut rng = ScriptedSource::new(vec![0.3 - EPSILON]);
            assert_eq!(choose_move(&board, Mark::O, &config, &mut rng), Ok(1));
        }
    }

    #[test]
    fn test_zero_probability_never_searches() {
        let board = board_from(&[3, 4, 6], &[0, 1]);
        let mut rng = ScriptedSource::new(vec![0.0, 0.4]);
        // empties [2, 5, 7, 8], 0.4 * 4 = 1.6 -> 5
        assert_eq!(
            choose_move(&board, Mark::O, &OpponentConfig::random(), &mut rng),
            Ok(5)
        );
    }

    #[test]
    fn test_full_board_is_no_legal_move() {
        let board = board_from(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
        let mut rng = ScriptedSource::constant(0.0);
        assert_eq!(
            choose_move(&board, Mark::X, &OpponentConfig::perfect(), &mut rng),
            Err(NoLegalMove)
        );
    }

    #[test]
    fn test_never_returns_occupied_cell() {
        let board = board_from(&[0, 4], &[8]);
        let config = OpponentConfig::default();
        for step in 0..50 {
            let u = step as f64 / 50.0;
            let mut rng = ScriptedSource::new(vec![u, u]);
            let index = choose_move(&board, Mark::O, &config, &mut rng).unwrap();
            assert!(board.is_empty(index));
        }
    }

    #[test]
    fn test_config_rejects_out_of_range() {
        assert!(OpponentConfig::new(-0.1).is_err());
        assert!(OpponentConfig::new(1.5).is_err());
        assert!(OpponentConfig::new(f64::NAN).is_err());
        assert_eq!(OpponentConfig::new(1.0), Ok(OpponentConfig::perfect()));
    }
}
