//! The turn controller: one explicitly owned game session.
//!
//! Owns the board, the turn state, seat assignment and statistics. Human
//! input arrives through [`TurnController::submit_move`]; computer moves are
//! requested from the [`Scheduler`] and come back through
//! [`TurnController::fire`].

use crate::ports::{Presenter, ScheduledTask, Scheduler};
use crate::{GameConfig, Mode, Outcome, Seats, Statistics, TurnState, Verdict};
use derive_more::{Display, From};
use std::time::Duration;
use tictactoe_core::{
    Board, BoardError, Mark, NoLegalMove, OpponentConfig, RandomSource, choose_move, rules,
};
use tracing::{debug, error, info, instrument};

/// Why a submitted move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, From)]
pub enum Rejection {
    /// The game is over.
    #[display("game is already over")]
    GameOver,
    /// The computer is on the move.
    #[display("it is the computer's turn")]
    ComputersTurn,
    /// The board refused the placement.
    #[display("{}", _0)]
    #[from]
    Board(BoardError),
}

/// Drives one game session between a presenter, a scheduler and a source of
/// randomness.
#[derive(Debug)]
pub struct TurnController<P, S, R> {
    board: Board,
    state: TurnState,
    mode: Mode,
    seats: Seats,
    stats: Statistics,
    /// Games started since statistics were last reset; drives alternation.
    game_count: u64,
    /// Games started over the controller's lifetime; tags scheduled tasks.
    serial: u64,
    opponent: OpponentConfig,
    delay: Duration,
    presenter: P,
    scheduler: S,
    rng: R,
}

impl<P, S, R> TurnController<P, S, R>
where
    P: Presenter,
    S: Scheduler,
    R: RandomSource,
{
    /// Creates a controller and starts the first game.
    #[instrument(skip_all, fields(mode = ?config.mode()))]
    pub fn new(config: &GameConfig, presenter: P, scheduler: S, rng: R) -> Self {
        let mut controller = Self {
            board: Board::new(),
            state: TurnState::AwaitingInput(Mark::X),
            mode: *config.mode(),
            seats: Seats::for_game(0),
            stats: Statistics::new(),
            game_count: 0,
            serial: 0,
            opponent: *config.opponent(),
            delay: *config.delay(),
            presenter,
            scheduler,
            rng,
        };
        controller.presenter.on_stats_changed(&controller.stats);
        controller.start_game();
        controller
    }

    /// Plays `index` for the human whose turn it is.
    ///
    /// Returns whether the move was accepted. Moves after the game ended,
    /// onto occupied or off-board cells, or during the computer's turn are
    /// ignored without changing any state.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn submit_move(&mut self, index: usize) -> bool {
        match self.try_submit(index) {
            Ok(()) => true,
            Err(reason) => {
                debug!(index, %reason, "Move ignored");
                false
            }
        }
    }

    fn try_submit(&mut self, index: usize) -> Result<(), Rejection> {
        let mover = self.state.mover().ok_or(Rejection::GameOver)?;
        if self.seats.is_computer(self.mode, mover) {
            return Err(Rejection::ComputersTurn);
        }
        self.apply(index, mover)?;
        Ok(())
    }

    /// Starts the next game on an empty board. Statistics are kept.
    ///
    /// The opener alternates with every game; when the computer opens, its
    /// first move is scheduled straight away.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(game_count = self.game_count, "Restarting game");
        self.start_game();
    }

    /// Zeroes the statistics and the alternation counter.
    ///
    /// The game in progress is left alone; the next [`restart`](Self::restart)
    /// is opened by the human again.
    #[instrument(skip(self))]
    pub fn reset_statistics(&mut self) {
        info!(stats = ?self.stats, "Resetting statistics");
        self.stats.reset();
        self.game_count = 0;
        self.presenter.on_stats_changed(&self.stats);
    }

    /// Switches mode and starts a fresh game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        info!(from = ?self.mode, to = ?mode, "Changing mode");
        self.mode = mode;
        self.start_game();
    }

    /// Runs a task previously handed to the scheduler.
    ///
    /// Tasks from an earlier game, or arriving when the computer is no
    /// longer the mover, are dropped.
    #[instrument(skip(self))]
    pub fn fire(&mut self, task: ScheduledTask) {
        match task {
            ScheduledTask::ComputerMove { game } => self.computer_move(game),
        }
    }

    fn computer_move(&mut self, game: u64) {
        if game != self.serial {
            debug!(game, current = self.serial, "Dropping computer move for a finished game");
            return;
        }
        let Some(mark) = self.seats.computer_mark(self.mode) else {
            debug!("Dropping computer move, no computer in this mode");
            return;
        };
        if self.state != TurnState::AwaitingInput(mark) {
            debug!(state = ?self.state, "Dropping computer move, not the computer's turn");
            return;
        }

        match choose_move(&self.board, mark, &self.opponent, &mut self.rng) {
            Ok(index) => {
                debug!(index, %mark, "Computer moves");
                if let Err(e) = self.apply(index, mark) {
                    error!(index, error = %e, "Opponent chose an illegal move");
                }
            }
            Err(NoLegalMove) => {
                error!(board = %self.board, "Computer has no legal move, scoring the game as a draw");
                self.finish(Outcome::Draw);
            }
        }
    }

    fn start_game(&mut self) {
        self.board = Board::new();
        self.seats = Seats::for_game(self.game_count);
        self.game_count += 1;
        self.serial += 1;

        let opener = self.seats.first_mover();
        self.state = TurnState::AwaitingInput(opener);
        info!(
            game = self.serial,
            mode = ?self.mode,
            opener = %opener,
            human = %self.seats.human_mark(),
            "Game started"
        );
        self.announce_turn(opener);
    }

    /// Places `mark` and advances the state machine.
    fn apply(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        self.board.place(index, mark)?;

        if let Some(winner) = rules::winner(&self.board) {
            self.finish(Outcome::Win(winner));
        } else if rules::is_draw(&self.board) {
            self.finish(Outcome::Draw);
        } else {
            let next = mark.opponent();
            self.state = TurnState::AwaitingInput(next);
            self.announce_turn(next);
        }
        Ok(())
    }

    fn announce_turn(&mut self, mover: Mark) {
        let label = self.turn_label(mover);
        self.presenter.on_turn_changed(mover, &label);

        if self.seats.is_computer(self.mode, mover) {
            debug!(delay = ?self.delay, "Scheduling computer move");
            self.scheduler.after(
                self.delay,
                ScheduledTask::ComputerMove { game: self.serial },
            );
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.state = TurnState::Terminal(outcome);
        let verdict = self.verdict(outcome);
        self.stats.record(verdict);
        info!(%outcome, ?verdict, stats = ?self.stats, "Game over");

        if outcome.winner().is_some() {
            let lines = rules::winning_lines(&self.board);
            self.presenter.on_winning_lines(&lines);
        }
        self.presenter.on_stats_changed(&self.stats);
        self.presenter.on_game_over(outcome, verdict);
    }

    /// The statistics bucket for `outcome`.
    ///
    /// Between two humans every win is counted as a win.
    fn verdict(&self, outcome: Outcome) -> Verdict {
        match (outcome, self.mode) {
            (Outcome::Draw, _) => Verdict::Draw,
            (Outcome::Win(_), Mode::HumanVsHuman) => Verdict::Win,
            (Outcome::Win(mark), Mode::HumanVsComputer) if mark == self.seats.human_mark() => {
                Verdict::Win
            }
            (Outcome::Win(_), Mode::HumanVsComputer) => Verdict::Loss,
        }
    }

    /// Prompt shown while `mover` is on the move.
    pub fn turn_label(&self, mover: Mark) -> String {
        match self.mode {
            Mode::HumanVsComputer if self.seats.is_computer(self.mode, mover) => {
                format!("Computer's turn ({})", mover)
            }
            Mode::HumanVsComputer => format!("Your turn ({})", mover),
            Mode::HumanVsHuman => format!("Player {}'s turn", mover),
        }
    }
}

impl<P, S, R> TurnController<P, S, R> {
    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current turn state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Seat assignment for the current game.
    pub fn seats(&self) -> Seats {
        self.seats
    }

    /// Session statistics.
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Games started since statistics were last reset.
    pub fn game_count(&self) -> u64 {
        self.game_count
    }

    /// Opponent strength.
    pub fn opponent(&self) -> &OpponentConfig {
        &self.opponent
    }

    /// The presenter receiving notifications.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Mutable access to the scheduler, for draining queued tasks.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{EventLog, GameEvent, ManualScheduler};
    use tictactoe_core::ScriptedSource;

    type Controller = TurnController<EventLog, ManualScheduler, ScriptedSource>;

    fn controller(mode: Mode) -> Controller {
        let config = GameConfig::default().with_mode(mode);
        TurnController::new(
            &config,
            EventLog::new(),
            ManualScheduler::new(),
            ScriptedSource::constant(0.0),
        )
    }

    #[test]
    fn test_first_game_human_opens() {
        let c = controller(Mode::HumanVsComputer);
        assert_eq!(c.state(), TurnState::AwaitingInput(Mark::X));
        assert_eq!(
            c.presenter().last(),
            Some(&GameEvent::TurnChanged {
                mover: Mark::X,
                label: "Your turn (X)".to_string()
            })
        );
    }

    #[test]
    fn test_human_move_schedules_computer() {
        let mut c = controller(Mode::HumanVsComputer);
        assert!(c.submit_move(4));
        assert_eq!(c.state(), TurnState::AwaitingInput(Mark::O));
        let pending = c.scheduler_mut().pending().to_vec();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].0, Duration::from_millis(500));
    }

    #[test]
    fn test_human_cannot_play_for_computer() {
        let mut c = controller(Mode::HumanVsComputer);
        assert!(c.submit_move(4));
        assert!(!c.submit_move(0));
        assert!(c.board().is_empty(0));
    }

    #[test]
    fn test_rejections_do_not_change_state() {
        let mut c = controller(Mode::HumanVsHuman);
        assert!(c.submit_move(0));
        let before = (*c.board(), c.state());
        assert!(!c.submit_move(0));
        assert!(!c.submit_move(42));
        assert_eq!((*c.board(), c.state()), before);
    }

    #[test]
    fn test_verdict_in_human_mode_counts_wins() {
        let mut c = controller(Mode::HumanVsHuman);
        for index in [3, 0, 4, 1, 8, 2] {
            assert!(c.submit_move(index));
        }
        assert_eq!(c.state(), TurnState::Terminal(Outcome::Win(Mark::O)));
        assert_eq!(*c.stats().wins(), 1);
        assert_eq!(*c.stats().losses(), 0);
    }
}
