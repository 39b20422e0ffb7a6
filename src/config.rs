//! Game configuration: built-in defaults, an optional TOML file, then
//! command-line overrides.

use crate::Mode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tictactoe_core::{DEFAULT_OPTIMAL_PROBABILITY, InvalidProbability, OpponentConfig};
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Delay before the computer moves, so its reply doesn't feel instant.
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Resolved settings for a session.
#[derive(Debug, Clone, PartialEq, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Human vs human or human vs computer.
    mode: Mode,
    /// Strength of the computer opponent.
    opponent: OpponentConfig,
    /// Pause before each computer move.
    delay: Duration,
    /// Seed for the opponent's randomness; entropy when absent.
    seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            opponent: OpponentConfig::default(),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            seed: None,
        }
    }
}

/// On-disk shape of the config file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    mode: Mode,
    #[serde(default = "default_delay_ms")]
    delay_ms: u64,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    opponent: OpponentSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OpponentSection {
    #[serde(default = "default_optimal_probability")]
    optimal_probability: f64,
}

impl Default for OpponentSection {
    fn default() -> Self {
        Self {
            optimal_probability: default_optimal_probability(),
        }
    }
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

fn default_optimal_probability() -> f64 {
    DEFAULT_OPTIMAL_PROBABILITY
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        Ok(Self {
            mode: file.mode,
            opponent: OpponentConfig::new(file.opponent.optimal_probability)?,
            delay: Duration::from_millis(file.delay_ms),
            seed: file.seed,
        })
    }

    /// Loads `path` when given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else the built-in defaults.
    #[instrument]
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces the opponent strength, validating the probability.
    #[track_caller]
    pub fn with_optimal_probability(self, probability: f64) -> Result<Self, ConfigError> {
        Ok(self.with_opponent(OpponentConfig::new(probability)?))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<InvalidProbability> for ConfigError {
    #[track_caller]
    fn from(err: InvalidProbability) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_file() {
        let config = GameConfig::from_toml_str(
            r#"
            mode = "human"
            delay_ms = 250
            seed = 7

            [opponent]
            optimal_probability = 0.8
            "#,
        )
        .unwrap();
        assert_eq!(*config.mode(), Mode::HumanVsHuman);
        assert_eq!(*config.delay(), Duration::from_millis(250));
        assert_eq!(*config.seed(), Some(7));
        assert_eq!(config.opponent().optimal_probability(), 0.8);
    }

    #[test]
    fn test_empty_file_is_defaults() {
        assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_probability_out_of_range() {
        let err = GameConfig::from_toml_str("[opponent]\noptimal_probability = 1.5\n").unwrap_err();
        assert!(err.message.contains("[0, 1]"), "{}", err);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(GameConfig::from_toml_str("difficulty = 3\n").is_err());
    }

    #[test]
    fn test_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode = \"human\"\n[opponent]\noptimal_probability = 0.9").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.mode(), Mode::HumanVsHuman);
        assert_eq!(config.opponent().optimal_probability(), 0.9);
        assert_eq!(*config.delay(), Duration::from_millis(DEFAULT_DELAY_MS));

        assert_eq!(GameConfig::discover(Some(file.path())).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");

        let err = GameConfig::from_file(&missing).unwrap_err();
        assert!(err.message.contains("Failed to read config file"), "{}", err);
        assert!(GameConfig::discover(Some(missing.as_path())).is_err());
    }

    #[test]
    fn test_bad_file_contents_are_an_error() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "delay_ms = \"soon\"").unwrap();
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"), "{}", err);
    }

    #[test]
    fn test_cli_style_overrides() {
        let config = GameConfig::default()
            .with_mode(Mode::HumanVsHuman)
            .with_optimal_probability(0.25)
            .unwrap()
            .with_delay(Duration::ZERO);
        assert_eq!(*config.mode(), Mode::HumanVsHuman);
        assert_eq!(config.opponent().optimal_probability(), 0.25);
        assert_eq!(*config.delay(), Duration::ZERO);
    }
}
