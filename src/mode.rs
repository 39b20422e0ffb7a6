//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Who sits across from the human.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Mode {
    /// Two humans sharing the keyboard.
    #[value(name = "human")]
    #[serde(rename = "human")]
    HumanVsHuman,
    /// Human against the computer opponent.
    #[default]
    #[value(name = "computer")]
    #[serde(rename = "computer")]
    HumanVsComputer,
}

impl Mode {
    /// Returns display name.
    pub fn name(self) -> &'static str {
        match self {
            Mode::HumanVsHuman => "Human vs Human",
            Mode::HumanVsComputer => "Human vs Computer",
        }
    }

    /// Switches to the other mode.
    pub fn toggle(self) -> Self {
        match self {
            Mode::HumanVsHuman => Mode::HumanVsComputer,
            Mode::HumanVsComputer => Mode::HumanVsHuman,
        }
    }
}
