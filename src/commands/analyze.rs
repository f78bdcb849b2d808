//! Family analysis command
//!
//! Replays a sequence of guesses and records every partition along the way.

use super::GameSettings;
use crate::core::Pattern;
use crate::engine::{Dictionary, EngineError, RoundEngine, RoundStatus};
use std::collections::BTreeMap;

/// One replayed guess
#[derive(Debug, Clone)]
pub struct AnalysisStep {
    pub letter: char,
    pub families: BTreeMap<Pattern, usize>,
    pub selected: Pattern,
    pub eased: bool,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub guesses_remaining: usize,
}

/// Result of replaying a guess sequence
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub settings: GameSettings,
    pub initial_candidates: usize,
    pub steps: Vec<AnalysisStep>,
    pub final_pattern: Pattern,
    pub remaining: Vec<String>,
    pub status: RoundStatus,
}

/// Replay `letters` against a fresh round
///
/// Whitespace and commas between letters are ignored.
///
/// # Errors
///
/// Returns the first engine error: an invalid configuration, a non-letter,
/// a repeated letter or a guess past the budget.
pub fn analyze_guesses(
    dictionary: &Dictionary,
    settings: GameSettings,
    letters: &str,
) -> Result<AnalysisResult, EngineError> {
    let mut engine = RoundEngine::new(dictionary.clone());
    engine.begin_round(settings.round_config())?;

    let initial_candidates = engine.candidate_count();
    let mut steps = Vec::new();

    for letter in letters
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
    {
        let candidates_before = engine.candidate_count();
        let report = engine.apply_guess(letter)?;

        steps.push(AnalysisStep {
            letter: report.letter,
            families: report.family_sizes,
            selected: report.selected,
            eased: report.eased,
            candidates_before,
            candidates_after: engine.candidate_count(),
            guesses_remaining: engine.guesses_remaining(),
        });
    }

    let round = engine.round().ok_or(EngineError::RoundNotStarted)?;

    Ok(AnalysisResult {
        settings,
        initial_candidates,
        steps,
        final_pattern: round.pattern().clone(),
        remaining: round.candidates().to_vec(),
        status: round.status(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    fn dictionary() -> Dictionary {
        Dictionary::new(["cat", "car", "can", "cap", "dog", "horse"]).unwrap()
    }

    #[test]
    fn records_each_step() {
        let settings = GameSettings::new(3, 6, Difficulty::Hard);
        let result = analyze_guesses(&dictionary(), settings, "a, t").unwrap();

        assert_eq!(result.initial_candidates, 5);
        assert_eq!(result.steps.len(), 2);

        let first = &result.steps[0];
        assert_eq!(first.letter, 'a');
        assert_eq!(first.candidates_before, 5);
        assert_eq!(first.candidates_after, 4);
        assert_eq!(first.families.len(), 2);

        let second = &result.steps[1];
        assert_eq!(second.selected.as_str(), "-a-");
        assert_eq!(second.candidates_after, 3);
        assert_eq!(second.guesses_remaining, 4);

        assert_eq!(result.final_pattern.as_str(), "-a-");
        assert_eq!(result.remaining, vec!["car", "can", "cap"]);
        assert_eq!(result.status, RoundStatus::InProgress);
    }

    #[test]
    fn no_letters_reports_initial_state() {
        let settings = GameSettings::new(5, 3, Difficulty::Easy);
        let result = analyze_guesses(&dictionary(), settings, "").unwrap();

        assert!(result.steps.is_empty());
        assert_eq!(result.final_pattern.as_str(), "-----");
        assert_eq!(result.remaining, vec!["horse"]);
    }

    #[test]
    fn repeated_letter_is_an_error() {
        let settings = GameSettings::new(3, 6, Difficulty::Hard);
        let result = analyze_guesses(&dictionary(), settings, "aa");

        assert!(matches!(result, Err(EngineError::DuplicateGuess('a'))));
    }

    #[test]
    fn missing_length_is_an_error() {
        let settings = GameSettings::new(4, 6, Difficulty::Hard);
        assert!(matches!(
            analyze_guesses(&dictionary(), settings, "a"),
            Err(EngineError::InvalidRoundConfig { .. })
        ));
    }
}
