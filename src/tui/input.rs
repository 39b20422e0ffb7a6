//! Keyboard handling.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor.
    Cursor(Position),
    /// Place a mark at a position.
    Place(Position),
    /// Start the next game, keeping statistics.
    NextGame,
    /// Zero the statistics and start over.
    ResetStatistics,
    /// Switch between human and computer opponents.
    ToggleMode,
    /// Leave the game.
    Quit,
}

/// Translates a key into a command given the current cursor.
pub fn command_for(key: KeyCode, cursor: Position) -> Option<Command> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::NextGame),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::ResetStatistics),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Command::ToggleMode),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Place(cursor)),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Command::Place),
        _ => move_cursor(cursor, key).map(Command::Cursor),
    }
}

/// Moves cursor based on arrow keys (or hjkl). Edges don't wrap.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Option<Position> {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Left | KeyCode::Char('h') => (row, col.checked_sub(1)?),
        KeyCode::Right | KeyCode::Char('l') => (row, col + 1),
        KeyCode::Up | KeyCode::Char('k') => (row.checked_sub(1)?, col),
        KeyCode::Down | KeyCode::Char('j') => (row + 1, col),
        _ => return None,
    };
    Position::at(row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_and_stops_at_edges() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Some(Position::TopCenter));
        assert_eq!(move_cursor(Position::Center, KeyCode::Char('l')), Some(Position::MiddleRight));
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), None);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), None);
    }

    #[test]
    fn test_digits_place_directly() {
        assert_eq!(
            command_for(KeyCode::Char('1'), Position::Center),
            Some(Command::Place(Position::TopLeft))
        );
        assert_eq!(
            command_for(KeyCode::Char('9'), Position::Center),
            Some(Command::Place(Position::BottomRight))
        );
        assert_eq!(command_for(KeyCode::Char('0'), Position::Center), None);
    }

    #[test]
    fn test_enter_places_at_cursor() {
        assert_eq!(
            command_for(KeyCode::Enter, Position::MiddleLeft),
            Some(Command::Place(Position::MiddleLeft))
        );
    }
}
