//! Application state and logic.

use crate::{Outcome, Presenter, Statistics, Verdict};
use tictactoe_core::{Line, Mark, Position};
use tracing::debug;

/// End-of-game banner shown over the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Headline for the result.
    pub message: &'static str,
    /// How the game was counted.
    pub verdict: Verdict,
}

impl Banner {
    fn for_verdict(verdict: Verdict) -> Self {
        let message = match verdict {
            Verdict::Win => "Congratulations! You Win!",
            Verdict::Loss => "Sorry! You Lost!",
            Verdict::Draw => "It's a Draw!",
        };
        Self { message, verdict }
    }
}

/// Everything the screen shows that isn't the board itself.
///
/// This is the terminal's [`Presenter`]: the controller pushes turn changes,
/// results and statistics into it and the renderer reads them back out.
#[derive(Debug)]
pub struct App {
    status_message: String,
    mover: Option<Mark>,
    stats: Statistics,
    winning_lines: Vec<Line>,
    banner: Option<Banner>,
    cursor: Position,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            status_message: "Waiting for game to start...".to_string(),
            mover: None,
            stats: Statistics::new(),
            winning_lines: Vec::new(),
            banner: None,
            cursor: Position::Center,
        }
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Mark on the move, `None` between games.
    pub fn mover(&self) -> Option<Mark> {
        self.mover
    }

    /// Latest statistics.
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Whether `index` lies on a winning line of the finished game.
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.winning_lines.iter().any(|line| line.contains(index))
    }

    /// The result banner, while a finished game is on screen.
    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the board cursor.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for App {
    fn on_turn_changed(&mut self, mover: Mark, label: &str) {
        debug!(%mover, label, "Turn changed");
        if self.mover.is_none() {
            // First turn of a new game: drop the previous result.
            self.banner = None;
            self.winning_lines.clear();
        }
        self.mover = Some(mover);
        self.status_message = label.to_string();
    }

    fn on_game_over(&mut self, outcome: Outcome, verdict: Verdict) {
        debug!(%outcome, ?verdict, "Game over");
        self.mover = None;
        self.banner = Some(Banner::for_verdict(verdict));
        self.status_message = format!("{}. Press 'n' for the next game or 'q' to quit.", outcome);
    }

    fn on_stats_changed(&mut self, stats: &Statistics) {
        self.stats = *stats;
    }

    fn on_winning_lines(&mut self, lines: &[Line]) {
        self.winning_lines = lines.to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_over_shows_banner_until_next_game() {
        let mut app = App::new();
        app.on_turn_changed(Mark::X, "Your turn (X)");
        app.on_winning_lines(&[Line([0, 1, 2])]);
        app.on_game_over(Outcome::Win(Mark::X), Verdict::Win);

        assert_eq!(app.banner().map(|b| b.message), Some("Congratulations! You Win!"));
        assert!(app.is_winning_cell(1));
        assert!(!app.is_winning_cell(4));
        assert_eq!(app.mover(), None);

        app.on_turn_changed(Mark::O, "Computer's turn (O)");
        assert_eq!(app.banner(), None);
        assert!(!app.is_winning_cell(1));
        assert_eq!(app.status_message(), "Computer's turn (O)");
    }

    #[test]
    fn test_loss_banner() {
        let mut app = App::new();
        app.on_game_over(Outcome::Win(Mark::O), Verdict::Loss);
        assert_eq!(app.banner().map(|b| b.message), Some("Sorry! You Lost!"));
    }
}
