//! Evil Hangman
//!
//! A hangman opponent that never commits to a secret word. Every guess splits
//! the remaining candidates into families by the pattern the letter would
//! reveal, and the engine keeps the family that is hardest for the guesser.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::core::Difficulty;
//! use evil_hangman::engine::{RoundConfig, RoundEngine};
//!
//! let mut engine = RoundEngine::from_words(["cat", "car", "can", "cap"]).unwrap();
//! engine.begin_round(RoundConfig::new(3, 5, Difficulty::Hard)).unwrap();
//!
//! let report = engine.apply_guess('c').unwrap();
//! assert!(report.hit);
//! assert_eq!(engine.pattern().unwrap().as_str(), "c--");
//! assert_eq!(engine.guesses_remaining(), 4);
//! ```

// Core domain types
pub mod core;

// Family partitioning and round state
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Log subscriber setup
pub mod logging;
