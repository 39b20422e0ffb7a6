//! Tests for headless simulation with seeded generators.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe::GameConfig;
use tictactoe::simulate::{self, SimulationReport};
use tictactoe::tictactoe_core::{OpponentConfig, RngSource};

fn seeded(
    computer: OpponentConfig,
    human: OpponentConfig,
    games: u32,
    seed: u64,
) -> SimulationReport {
    let config = GameConfig::default().with_opponent(computer);
    simulate::run(
        &config,
        games,
        human,
        RngSource::new(StdRng::seed_from_u64(seed)),
        RngSource::new(StdRng::seed_from_u64(seed + 1)),
    )
    .unwrap()
}

#[test]
fn test_perfect_computer_never_loses() {
    let report = seeded(OpponentConfig::perfect(), OpponentConfig::random(), 60, 11);
    assert_eq!(report.wins, 0);
    assert_eq!(report.losses + report.draws, 60);
    assert!(report.losses > 0);
}

#[test]
fn test_random_computer_never_beats_perfect_human() {
    let report = seeded(OpponentConfig::random(), OpponentConfig::perfect(), 60, 5);
    assert_eq!(report.losses, 0);
    assert!(report.wins > 0);
}

#[test]
fn test_same_seed_same_report() {
    let p = OpponentConfig::new(0.6).unwrap();
    let skill = OpponentConfig::new(0.7).unwrap();
    assert_eq!(seeded(p, skill, 100, 42), seeded(p, skill, 100, 42));
}

#[test]
fn test_report_serializes() {
    let report = seeded(OpponentConfig::default(), OpponentConfig::default(), 10, 1);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["games"], 10);
    assert_eq!(json["optimal_probability"], 0.5);
}
