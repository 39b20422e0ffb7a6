//! Collaborators the turn controller talks to.
//!
//! The controller never touches a screen or a clock directly. It reports to
//! a [`Presenter`] and asks a [`Scheduler`] to call it back later. Both are
//! traits so the terminal UI, the headless simulator and tests can each
//! supply their own.

use crate::{Outcome, Statistics, Verdict};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tictactoe_core::{Line, Mark};

/// Receives notifications from the turn controller.
pub trait Presenter {
    /// A new ply is awaited from `mover`.
    fn on_turn_changed(&mut self, mover: Mark, label: &str);

    /// The game finished. `verdict` is the bucket the statistics counted.
    fn on_game_over(&mut self, outcome: Outcome, verdict: Verdict);

    /// Statistics changed (a game finished or they were reset).
    fn on_stats_changed(&mut self, stats: &Statistics);

    /// Lines completed by the winning move, for highlighting.
    fn on_winning_lines(&mut self, lines: &[Line]);
}

/// Work the controller asks to have done later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduledTask {
    /// Let the computer move in game number `game`.
    ComputerMove {
        /// Game the move was scheduled for.
        game: u64,
    },
}

/// Deferred-callback capability.
///
/// Implementations hand `task` back to
/// [`TurnController::fire`](crate::TurnController::fire) once `delay` has
/// passed. Nothing is ever cancelled: the controller re-checks its state
/// when the task arrives.
pub trait Scheduler {
    /// Deliver `task` after `delay`.
    fn after(&mut self, delay: Duration, task: ScheduledTask);
}

/// Scheduler that only queues tasks; the owner decides when to run them.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    pending: Vec<(Duration, ScheduledTask)>,
}

impl ManualScheduler {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every queued task in scheduling order.
    pub fn drain(&mut self) -> Vec<ScheduledTask> {
        self.pending.drain(..).map(|(_, task)| task).collect()
    }

    /// Queued tasks with their requested delays.
    pub fn pending(&self) -> &[(Duration, ScheduledTask)] {
        &self.pending
    }
}

impl Scheduler for ManualScheduler {
    fn after(&mut self, delay: Duration, task: ScheduledTask) {
        self.pending.push((delay, task));
    }
}

/// Notifications as values, in the order they were emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// See [`Presenter::on_turn_changed`].
    TurnChanged {
        /// Mark to move.
        mover: Mark,
        /// Human-readable prompt.
        label: String,
    },
    /// See [`Presenter::on_game_over`].
    GameOver {
        /// How the game ended.
        outcome: Outcome,
        /// Statistics bucket.
        verdict: Verdict,
    },
    /// See [`Presenter::on_stats_changed`].
    StatsChanged(Statistics),
    /// See [`Presenter::on_winning_lines`].
    WinningLines(Vec<Line>),
}

/// Presenter that records every notification, used headless and in tests.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Removes and returns the recorded events.
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// The most recent event.
    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }
}

impl Presenter for EventLog {
    fn on_turn_changed(&mut self, mover: Mark, label: &str) {
        self.events.push(GameEvent::TurnChanged {
            mover,
            label: label.to_string(),
        });
    }

    fn on_game_over(&mut self, outcome: Outcome, verdict: Verdict) {
        self.events.push(GameEvent::GameOver { outcome, verdict });
    }

    fn on_stats_changed(&mut self, stats: &Statistics) {
        self.events.push(GameEvent::StatsChanged(*stats));
    }

    fn on_winning_lines(&mut self, lines: &[Line]) {
        self.events.push(GameEvent::WinningLines(lines.to_vec()));
    }
}
