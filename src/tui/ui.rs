//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictactoe_core::{Board, Cell, Mark, OpponentConfig, Position};

use super::app::App;
use crate::{Mode, Verdict};

/// What the renderer needs from the session besides the presenter state.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    /// Live board.
    pub board: &'a Board,
    /// Presenter state.
    pub app: &'a App,
    /// Current mode.
    pub mode: Mode,
    /// Opponent strength.
    pub opponent: &'a OpponentConfig,
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, view: View<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Statistics
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = match view.mode {
        Mode::HumanVsComputer => format!(
            "Tic Tac Toe - {} (optimal moves {:.0}%)",
            view.mode.name(),
            view.opponent.optimal_probability() * 100.0
        ),
        Mode::HumanVsHuman => format!("Tic Tac Toe - {}", view.mode.name()),
    };
    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], view.board, view.app);

    let status_title = match view.app.mover() {
        Some(_) => format!("Status - cursor: {}", view.app.cursor()),
        None => "Status".to_string(),
    };
    let status = Paragraph::new(view.app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(status_title));
    frame.render_widget(status, chunks[2]);

    draw_stats(frame, chunks[3], view.app);

    let help = Paragraph::new(
        "Arrows/hjkl: move | Enter/1-9: place | n: next game | r: reset stats | m: mode | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[4]);

    if let Some(banner) = view.app.banner() {
        draw_banner(frame, chunks[1], banner.message, banner.verdict);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, app, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::at(row, col) {
            draw_cell(frame, cols[col * 2], board, app, pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, app: &App, pos: Position) {
    let index = pos.to_index();
    let label = (index + 1).to_string();

    let (symbol, base_style) = match board.get(index) {
        Some(Cell::Occupied(Mark::X)) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Cell::Occupied(Mark::O)) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => (label.as_str(), Style::default().fg(Color::DarkGray)),
    };

    let style = if app.is_winning_cell(index) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() && app.mover().is_some() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_stats(frame: &mut Frame, area: Rect, app: &App) {
    let stats = app.stats();
    let text = format!(
        "Wins: {}   Losses: {}   Draws: {}   Win Rate: {}%",
        stats.wins(),
        stats.losses(),
        stats.draws(),
        stats.win_rate()
    );
    let summary = Paragraph::new(text)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Statistics"));
    frame.render_widget(summary, area);
}

fn draw_banner(frame: &mut Frame, area: Rect, message: &str, verdict: Verdict) {
    let color = match verdict {
        Verdict::Win => Color::Green,
        Verdict::Loss => Color::Red,
        Verdict::Draw => Color::Yellow,
    };
    let popup = center_rect(area, 36, 5);
    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("n: play again"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Result"));

    frame.render_widget(Clear, popup);
    frame.render_widget(banner, popup);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, Presenter};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(view: View<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, view)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_stats_and_marks() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        let mut app = App::new();
        app.on_turn_changed(Mark::O, "Computer's turn (O)");
        let opponent = OpponentConfig::default();

        let screen = render(View {
            board: &board,
            app: &app,
            mode: Mode::HumanVsComputer,
            opponent: &opponent,
        });
        assert!(screen.contains("Win Rate: 0%"));
        assert!(screen.contains("Computer's turn (O)"));
        assert!(screen.contains("optimal moves 50%"));
        assert!(screen.contains("cursor: Center"));
        assert!(screen.contains('X'));
    }

    #[test]
    fn test_renders_result_banner() {
        let board = Board::new();
        let mut app = App::new();
        app.on_game_over(Outcome::Draw, Verdict::Draw);
        let opponent = OpponentConfig::default();

        let screen = render(View {
            board: &board,
            app: &app,
            mode: Mode::HumanVsHuman,
            opponent: &opponent,
        });
        assert!(screen.contains("It's a Draw!"));
        assert!(!screen.contains("cursor:"));
    }
}
