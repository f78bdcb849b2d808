//! Core domain types for hangman
//!
//! Small value types shared by the engine and the front ends.

mod difficulty;
mod guessed;
mod pattern;

pub use difficulty::Difficulty;
pub use guessed::GuessedLetters;
pub use pattern::{Pattern, UNREVEALED};
