//! Simulation command
//!
//! Plays the engine against an automated guesser for every difficulty and word
//! length, reporting how often the guesser survives.

use super::GameSettings;
use crate::core::{Difficulty, GuessedLetters};
use crate::engine::{Dictionary, EngineError, RoundConfig, RoundEngine, RoundStatus};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// What to simulate
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub word_lengths: Vec<usize>,
    pub max_wrong_guesses: usize,
    pub difficulties: Vec<Difficulty>,
}

impl SimulationConfig {
    /// Every length from `min_length` to `max_length` at every difficulty
    #[must_use]
    pub fn new(min_length: usize, max_length: usize, max_wrong_guesses: usize) -> Self {
        Self {
            word_lengths: (min_length..=max_length).collect(),
            max_wrong_guesses,
            difficulties: Difficulty::ALL.to_vec(),
        }
    }
}

/// Result of one simulated round
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub difficulty: Difficulty,
    pub word_length: usize,
    pub won: bool,
    pub guesses: String,
    pub candidates_left: usize,
    pub secret: String,
}

/// Aggregate results for one difficulty
#[derive(Debug, Clone)]
pub struct DifficultySummary {
    pub difficulty: Difficulty,
    pub rounds: usize,
    pub wins: usize,
    pub average_guesses: f64,
    pub average_candidates_left: f64,
}

impl DifficultySummary {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.wins as f64 / self.rounds as f64
        }
    }
}

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub outcomes: Vec<RoundOutcome>,
    pub summaries: Vec<DifficultySummary>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Pick the unguessed letter that appears in the most candidates
///
/// Ties go to the alphabetically first letter. Returns `None` once all 26
/// letters have been guessed.
///
/// # Examples
/// ```
/// use evil_hangman::commands::frequency_guess;
/// use evil_hangman::core::GuessedLetters;
///
/// let candidates = vec!["cat".to_string(), "cot".to_string(), "dig".to_string()];
/// let mut guessed = GuessedLetters::default();
/// assert_eq!(frequency_guess(&candidates, &guessed), Some('c'));
///
/// guessed.insert('c');
/// assert_eq!(frequency_guess(&candidates, &guessed), Some('t'));
/// ```
#[must_use]
pub fn frequency_guess(candidates: &[String], guessed: &GuessedLetters) -> Option<char> {
    let mut counts = [0usize; 26];

    for word in candidates {
        let mut seen = [false; 26];
        for idx in word.bytes().filter_map(|b| b.checked_sub(b'a')).map(usize::from) {
            if idx < 26 && !seen[idx] {
                seen[idx] = true;
                counts[idx] += 1;
            }
        }
    }

    ('a'..='z')
        .zip(counts)
        .filter(|&(letter, _)| !guessed.contains(letter))
        .max_by(|(la, ca), (lb, cb)| ca.cmp(cb).then(lb.cmp(la)))
        .map(|(letter, _)| letter)
}

/// Play one round with the frequency guesser
///
/// # Errors
///
/// Returns an engine error if the configuration is invalid.
pub fn play_round(dictionary: &Dictionary, config: RoundConfig) -> Result<RoundOutcome, EngineError> {
    let mut engine = RoundEngine::new(dictionary.clone());
    engine.begin_round(config)?;

    let mut guesses = String::new();

    while engine.status() == Some(RoundStatus::InProgress) {
        let round = engine.round().ok_or(EngineError::RoundNotStarted)?;
        let Some(letter) = frequency_guess(round.candidates(), round.guessed_letters()) else {
            break;
        };

        engine.apply_guess(letter)?;
        guesses.push(letter);
    }

    let won = engine.status() == Some(RoundStatus::Won);
    let candidates_left = engine.candidate_count();
    let secret = engine.resolve_secret_word()?;

    Ok(RoundOutcome {
        difficulty: config.difficulty,
        word_length: config.word_length,
        won,
        guesses,
        candidates_left,
        secret,
    })
}

/// Simulate every configured difficulty and word length in parallel
///
/// Lengths with no dictionary words are skipped.
///
/// # Errors
///
/// Returns the first engine error raised by any round.
pub fn run_simulation(
    dictionary: &Dictionary,
    config: &SimulationConfig,
    show_progress: bool,
) -> Result<SimulationResult, EngineError> {
    let mut jobs = Vec::new();
    for &difficulty in &config.difficulties {
        for &length in &config.word_lengths {
            if dictionary.word_count_of_length(length) > 0 {
                jobs.push(GameSettings::new(
                    length,
                    config.max_wrong_guesses,
                    difficulty,
                ));
            }
        }
    }

    let pb = if show_progress {
        let pb = ProgressBar::new(jobs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes = jobs
        .par_iter()
        .map(|settings| {
            let outcome = play_round(dictionary, settings.round_config());
            pb.inc(1);
            outcome
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("done");

    let duration = start.elapsed();
    let summaries = config
        .difficulties
        .iter()
        .map(|&difficulty| summarize(difficulty, &outcomes))
        .collect();

    info!(
        rounds = outcomes.len(),
        elapsed_ms = duration.as_millis() as u64,
        "simulation finished"
    );

    Ok(SimulationResult {
        rounds_per_second: outcomes.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
        outcomes,
        summaries,
        duration,
    })
}

fn summarize(difficulty: Difficulty, outcomes: &[RoundOutcome]) -> DifficultySummary {
    let rounds: Vec<&RoundOutcome> = outcomes
        .iter()
        .filter(|outcome| outcome.difficulty == difficulty)
        .collect();
    let count = rounds.len();
    let divisor = count.max(1) as f64;

    DifficultySummary {
        difficulty,
        rounds: count,
        wins: rounds.iter().filter(|outcome| outcome.won).count(),
        average_guesses: rounds.iter().map(|o| o.guesses.len()).sum::<usize>() as f64 / divisor,
        average_candidates_left: rounds.iter().map(|o| o.candidates_left).sum::<usize>() as f64
            / divisor,
    }
}
