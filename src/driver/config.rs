//! Driver configuration.

use serde::{Deserialize, Serialize};

/// Settings for an interactive session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Seed for the random generator. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Ask to play again after each game.
    pub offer_replay: bool,

    /// Print previous guesses before each prompt.
    pub show_history: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seed: None,
            offer_replay: true,
            show_history: true,
        }
    }
}

impl DriverConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_replay(mut self, offer_replay: bool) -> Self {
        self.offer_replay = offer_replay;
        self
    }

    #[must_use]
    pub fn with_history(mut self, show_history: bool) -> Self {
        self.show_history = show_history;
        self
    }
}
