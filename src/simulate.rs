//! Headless calibration of the computer opponent.
//!
//! Plays many human-vs-computer games through the real [`TurnController`],
//! with the human seat driven by its own blended policy, and reports how
//! often the computer actually wins at a given optimal-move probability.

use crate::ports::{EventLog, ManualScheduler};
use crate::{GameConfig, Mode, TurnController, TurnState};
use derive_more::{Display, Error, From};
use serde::Serialize;
use tictactoe_core::{NoLegalMove, OpponentConfig, RandomSource, choose_move};
use tracing::{debug, info, instrument};

/// Why a simulation stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SimulationError {
    /// The simulated human was asked to move on a full board.
    #[display("simulated human found no legal move")]
    #[from]
    NoLegalMove(NoLegalMove),
    /// The controller waited on the computer with nothing scheduled.
    #[display("game {} stalled on the computer's turn", game)]
    Stalled {
        /// Game index within the run.
        game: u32,
    },
}

/// Aggregate result of a simulation run, from the human seat's side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Games played.
    pub games: u32,
    /// Games the simulated human won.
    pub wins: u32,
    /// Games the computer won.
    pub losses: u32,
    /// Drawn games.
    pub draws: u32,
    /// The computer's optimal-move probability.
    pub optimal_probability: f64,
    /// The simulated human's optimal-move probability.
    pub human_skill: f64,
}

impl SimulationReport {
    /// Fraction of games the computer won.
    pub fn computer_win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.losses) / f64::from(self.games)
        }
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} games, computer p={:.2}, human p={:.2}",
            self.games, self.optimal_probability, self.human_skill
        )?;
        writeln!(
            f,
            "human wins {}  computer wins {}  draws {}",
            self.wins, self.losses, self.draws
        )?;
        write!(
            f,
            "computer win rate {:.1}%",
            self.computer_win_rate() * 100.0
        )
    }
}

/// Plays `games` games and tallies the results.
///
/// `computer_rng` feeds the opponent inside the controller, `human_rng` the
/// simulated human. The mode in `config` is ignored; simulations are always
/// human vs computer.
#[instrument(skip(config, computer_rng, human_rng), fields(p = config.opponent().optimal_probability()))]
pub fn run<C, H>(
    config: &GameConfig,
    games: u32,
    human_skill: OpponentConfig,
    computer_rng: C,
    mut human_rng: H,
) -> Result<SimulationReport, SimulationError>
where
    C: RandomSource,
    H: RandomSource,
{
    let config = config.clone().with_mode(Mode::HumanVsComputer);
    let mut controller =
        TurnController::new(&config, EventLog::new(), ManualScheduler::new(), computer_rng);

    for game in 0..games {
        if game > 0 {
            controller.restart();
        }
        play_out(&mut controller, game, &human_skill, &mut human_rng)?;
        controller.presenter_mut().take();
    }

    let stats = controller.stats();
    let report = SimulationReport {
        games,
        wins: *stats.wins(),
        losses: *stats.losses(),
        draws: *stats.draws(),
        optimal_probability: config.opponent().optimal_probability(),
        human_skill: human_skill.optimal_probability(),
    };
    info!(?report, "Simulation finished");
    Ok(report)
}

fn play_out<C, H>(
    controller: &mut TurnController<EventLog, ManualScheduler, C>,
    game: u32,
    human_skill: &OpponentConfig,
    human_rng: &mut H,
) -> Result<(), SimulationError>
where
    C: RandomSource,
    H: RandomSource,
{
    loop {
        for task in controller.scheduler_mut().drain() {
            controller.fire(task);
        }

        let TurnState::AwaitingInput(mover) = controller.state() else {
            debug!(game, state = ?controller.state(), "Game finished");
            return Ok(());
        };
        if controller.seats().is_computer(controller.mode(), mover) {
            return Err(SimulationError::Stalled { game });
        }

        let index = choose_move(controller.board(), mover, human_skill, human_rng)?;
        controller.submit_move(index);
    }
}
