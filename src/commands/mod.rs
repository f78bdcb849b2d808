//! Command implementations

pub mod analyze;
pub mod simple;
pub mod simulate;

pub use analyze::{AnalysisResult, AnalysisStep, analyze_guesses};
pub use simple::run_simple;
pub use simulate::{
    DifficultySummary, RoundOutcome, SimulationConfig, SimulationResult, frequency_guess,
    play_round, run_simulation,
};

use crate::core::Difficulty;
use crate::engine::RoundConfig;

/// Round settings chosen on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub word_length: usize,
    pub max_wrong_guesses: usize,
    pub difficulty: Difficulty,
}

impl GameSettings {
    #[must_use]
    pub const fn new(word_length: usize, max_wrong_guesses: usize, difficulty: Difficulty) -> Self {
        Self {
            word_length,
            max_wrong_guesses,
            difficulty,
        }
    }

    #[must_use]
    pub const fn round_config(&self) -> RoundConfig {
        RoundConfig::new(self.word_length, self.max_wrong_guesses, self.difficulty)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new(5, 12, Difficulty::Medium)
    }
}
