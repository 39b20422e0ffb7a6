//! Command-line interface for tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictactoe::Mode;

/// Tic-tac-toe against a friend or a tunable minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with a tunable computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ./tictactoe.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run, `play` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play(PlayArgs),

    /// Play computer against a simulated human and report the results
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        games: u32,

        /// Computer's optimal-move probability, overriding the config file
        #[arg(short = 'p', long)]
        optimal_probability: Option<f64>,

        /// Simulated human's optimal-move probability
        #[arg(long, default_value = "0.8")]
        human_skill: f64,

        /// Seed for both players' randomness
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Overrides for an interactive session.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Game mode
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Computer's optimal-move probability in [0, 1]
    #[arg(short = 'p', long)]
    pub optimal_probability: Option<f64>,

    /// Pause before each computer move, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's randomness
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_play_overrides() {
        let cli = Cli::try_parse_from([
            "tictactoe", "play", "--mode", "human", "-p", "0.9", "--delay-ms", "0",
        ])
        .unwrap();
        let Some(Command::Play(args)) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(args.mode, Some(Mode::HumanVsHuman));
        assert_eq!(args.optimal_probability, Some(0.9));
        assert_eq!(args.delay_ms, Some(0));
    }

    #[test]
    fn test_simulate_defaults() {
        let cli = Cli::try_parse_from(["tictactoe", "simulate", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        let Some(Command::Simulate {
            games, human_skill, json, ..
        }) = cli.command
        else {
            panic!("expected simulate");
        };
        assert_eq!(games, 1000);
        assert_eq!(human_skill, 0.8);
        assert!(!json);
    }
}
