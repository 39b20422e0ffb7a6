//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod scheduler;
mod ui;

pub use app::{App, Banner};
pub use input::{Command, command_for, move_cursor};
pub use scheduler::TokioScheduler;
pub use ui::{View, draw};

use crate::{GameConfig, ScheduledTask, Scheduler, TurnController};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tictactoe_core::{RandomSource, RngSource};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// How long to wait for a key before checking timers again.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Log file for the interactive session, since stdout belongs to the board.
pub const LOG_FILE: &str = "tictactoe.log";

/// Runs an interactive session until the player quits.
pub async fn run_tui(config: GameConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(LOG_FILE)
        .with_context(|| format!("Failed to create log file {}", LOG_FILE))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(?config, "Starting tic-tac-toe TUI");

    let rng = match config.seed() {
        Some(seed) => RngSource::new(StdRng::seed_from_u64(*seed)),
        None => RngSource::new(StdRng::from_entropy()),
    };
    let (scheduler, mut tasks) = TokioScheduler::channel();
    let mut controller = TurnController::new(&config, App::new(), scheduler, rng);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, &mut controller, &mut tasks);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        eprintln!("Error: {:?}", err);
    }

    info!(stats = ?controller.stats(), "Session ended");
    Ok(())
}

/// Draws, fires due computer moves and applies key presses until quit.
#[instrument(skip_all)]
fn run_game<S, R>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    controller: &mut TurnController<App, S, R>,
    tasks: &mut mpsc::UnboundedReceiver<ScheduledTask>,
) -> Result<()>
where
    S: Scheduler,
    R: RandomSource,
{
    loop {
        while let Ok(task) = tasks.try_recv() {
            controller.fire(task);
        }

        terminal.draw(|frame| {
            draw(
                frame,
                View {
                    board: controller.board(),
                    app: controller.presenter(),
                    mode: controller.mode(),
                    opponent: controller.opponent(),
                },
            )
        })?;

        if !event::poll(INPUT_POLL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(command) = command_for(key.code, controller.presenter().cursor()) else {
            continue;
        };
        debug!(?command, "Key command");
        match command {
            Command::Cursor(position) => controller.presenter_mut().set_cursor(position),
            Command::Place(position) => {
                controller.presenter_mut().set_cursor(position);
                controller.submit_move(position.to_index());
            }
            Command::NextGame => controller.restart(),
            Command::ResetStatistics => {
                controller.reset_statistics();
                controller.restart();
            }
            Command::ToggleMode => {
                let mode = controller.mode().toggle();
                controller.set_mode(mode);
            }
            Command::Quit => {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
