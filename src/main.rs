//! Tic-tac-toe - unified CLI
//!
//! Interactive play in the terminal, or headless simulation to calibrate the
//! computer opponent.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tictactoe::tictactoe_core::{OpponentConfig, RngSource};
use tictactoe::{GameConfig, simulate, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config =
        GameConfig::discover(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or_else(|| Command::Play(PlayArgs::default())) {
        Command::Play(args) => run_play(config, args).await,
        Command::Simulate {
            games,
            optimal_probability,
            human_skill,
            seed,
            json,
        } => run_simulate(config, games, optimal_probability, human_skill, seed, json),
    }
}

/// Applies command-line overrides and runs the terminal UI.
async fn run_play(config: GameConfig, args: PlayArgs) -> Result<()> {
    let mut config = config;
    if let Some(mode) = args.mode {
        config = config.with_mode(mode);
    }
    if let Some(probability) = args.optimal_probability {
        config = config.with_optimal_probability(probability)?;
    }
    if let Some(delay_ms) = args.delay_ms {
        config = config.with_delay(Duration::from_millis(delay_ms));
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(Some(seed));
    }

    tui::run_tui(config).await
}

/// Plays `games` headless games and prints the report.
#[instrument(skip(config))]
fn run_simulate(
    config: GameConfig,
    games: u32,
    optimal_probability: Option<f64>,
    human_skill: f64,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = config;
    if let Some(probability) = optimal_probability {
        config = config.with_optimal_probability(probability)?;
    }
    let seed = seed.or(*config.seed());
    let human_skill = OpponentConfig::new(human_skill)?;

    info!(games, ?seed, "Starting simulation");

    let (computer_rng, human_rng) = match seed {
        Some(seed) => (
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (StdRng::from_entropy(), StdRng::from_entropy()),
    };
    let report = simulate::run(
        &config,
        games,
        human_skill,
        RngSource::new(computer_rng),
        RngSource::new(human_rng),
    )
    .context("Simulation failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
