//! Tic-tac-toe sessions against a tunable computer opponent.
//!
//! # Architecture
//!
//! - **Core** ([`tictactoe_core`]): board, rules, minimax search and the
//!   blended opponent policy
//! - **Controller**: the turn state machine owning one session's board,
//!   seats and statistics ([`TurnController`])
//! - **Ports**: what the controller reports to and schedules with
//!   ([`Presenter`], [`Scheduler`])
//! - **Config**: defaults, TOML file and CLI overrides ([`GameConfig`])
//! - **Simulation**: headless calibration of the opponent ([`simulate`])
//!
//! # Example
//!
//! ```
//! use tictactoe::{EventLog, GameConfig, ManualScheduler, Mode, TurnController};
//! use tictactoe_core::ScriptedSource;
//!
//! let config = GameConfig::default().with_mode(Mode::HumanVsComputer);
//! let mut game = TurnController::new(
//!     &config,
//!     EventLog::new(),
//!     ManualScheduler::new(),
//!     ScriptedSource::constant(0.0),
//! );
//!
//! assert!(game.submit_move(4));
//! for task in game.scheduler_mut().drain() {
//!     game.fire(task);
//! }
//! assert_eq!(game.board().filled(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod mode;
mod ports;
mod seats;
pub mod simulate;
mod state;
mod stats;
pub mod tui;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, DEFAULT_DELAY_MS, GameConfig};
pub use controller::{Rejection, TurnController};
pub use mode::Mode;
pub use ports::{EventLog, GameEvent, ManualScheduler, Presenter, ScheduledTask, Scheduler};
pub use seats::Seats;
pub use state::{Outcome, TurnState};
pub use stats::{Statistics, Verdict};

pub use tictactoe_core;
