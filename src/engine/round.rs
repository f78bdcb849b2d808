//! Round state machine
//!
//! A [`RoundEngine`] owns a dictionary and at most one round. Each call to
//! [`RoundEngine::begin_round`] builds a fresh [`RoundState`]; guesses and
//! resolution then mutate that state only.
//!
//! Phases: `Uninitialized` → `Active` → `Resolved`.

use super::dictionary::Dictionary;
use super::family::partition;
use super::selection::select;
use super::EngineError;
use crate::core::{Difficulty, GuessedLetters, Pattern};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use tracing::{debug, info, trace};

/// Parameters fixed for the lifetime of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub word_length: usize,
    pub max_wrong_guesses: usize,
    pub difficulty: Difficulty,
}

impl RoundConfig {
    #[must_use]
    pub const fn new(word_length: usize, max_wrong_guesses: usize, difficulty: Difficulty) -> Self {
        Self {
            word_length,
            max_wrong_guesses,
            difficulty,
        }
    }
}

/// Lifecycle of the engine's round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Uninitialized,
    Active,
    Resolved,
}

/// Outcome of a round from the guesser's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    /// Every position has been revealed
    Won,
    /// The guess budget ran out with positions still hidden
    Lost,
}

/// What a single guess did to the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub letter: char,
    /// Every family the guess produced, reduced to its size
    pub family_sizes: BTreeMap<Pattern, usize>,
    /// Pattern of the family that was kept
    pub selected: Pattern,
    /// Whether the difficulty easing rule fired on this guess
    pub eased: bool,
    /// Whether the kept pattern shows the guessed letter
    pub hit: bool,
}

/// State of one active round
#[derive(Debug, Clone)]
pub struct RoundState {
    config: RoundConfig,
    pattern: Pattern,
    candidates: Vec<String>,
    guessed: GuessedLetters,
    guesses_remaining: usize,
    guesses_made: usize,
    secret: Option<String>,
}

impl RoundState {
    /// Start a round over every dictionary word of the configured length
    ///
    /// # Errors
    /// Returns `EngineError::InvalidRoundConfig` if no word has the requested
    /// length or the guess budget is zero.
    pub fn new(dictionary: &Dictionary, config: RoundConfig) -> Result<Self, EngineError> {
        let invalid = |reason| EngineError::InvalidRoundConfig {
            word_length: config.word_length,
            max_wrong_guesses: config.max_wrong_guesses,
            reason,
        };

        if config.max_wrong_guesses < 1 {
            return Err(invalid("at least one guess is required"));
        }

        let candidates: Vec<String> = dictionary
            .words_of_length(config.word_length)
            .map(ToString::to_string)
            .collect();

        if candidates.is_empty() {
            return Err(invalid("no dictionary words have that length"));
        }

        Ok(Self {
            config,
            pattern: Pattern::hidden(config.word_length),
            candidates,
            guessed: GuessedLetters::default(),
            guesses_remaining: config.max_wrong_guesses,
            guesses_made: 0,
            secret: None,
        })
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Words still consistent with every guess so far
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub const fn guessed_letters(&self) -> &GuessedLetters {
        &self.guessed
    }

    /// Guessed letters as `[a, c, e]`
    #[must_use]
    pub fn guessed_letters_display(&self) -> String {
        self.guessed.to_string()
    }

    #[must_use]
    pub fn has_been_guessed(&self, letter: char) -> bool {
        self.guessed.contains(letter.to_ascii_lowercase())
    }

    #[inline]
    #[must_use]
    pub const fn guesses_remaining(&self) -> usize {
        self.guesses_remaining
    }

    #[inline]
    #[must_use]
    pub const fn guesses_made(&self) -> usize {
        self.guesses_made
    }

    /// The word fixed by resolution, if the round has been resolved
    #[must_use]
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.pattern.is_complete() {
            RoundStatus::Won
        } else if self.guesses_remaining == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// Apply a guessed letter and keep the adversarially chosen family
    ///
    /// Uppercase letters are treated as their lowercase form. Every guess
    /// costs one from the remaining budget, whether or not it reveals anything.
    ///
    /// # Errors
    /// - `RoundResolved` if the secret has already been fixed
    /// - `InvalidGuess` if `letter` is not an ASCII letter
    /// - `DuplicateGuess` if `letter` was already guessed
    /// - `NoGuessesRemaining` if the budget is spent
    /// - `NoCandidatesRemaining` if the candidate set is empty
    ///
    /// The state is unchanged when an error is returned.
    pub fn apply_guess(&mut self, letter: char) -> Result<GuessReport, EngineError> {
        if self.secret.is_some() {
            return Err(EngineError::RoundResolved);
        }
        if !letter.is_ascii_alphabetic() {
            return Err(EngineError::InvalidGuess(letter));
        }
        let letter = letter.to_ascii_lowercase();
        if self.guessed.contains(letter) {
            return Err(EngineError::DuplicateGuess(letter));
        }
        if self.guesses_remaining == 0 {
            return Err(EngineError::NoGuessesRemaining);
        }
        if self.candidates.is_empty() {
            return Err(EngineError::NoCandidatesRemaining);
        }

        self.guesses_made += 1;
        self.guessed.insert(letter);

        let candidates = std::mem::take(&mut self.candidates);
        let families = partition(&self.pattern, candidates, letter);

        for family in families.iter() {
            trace!(pattern = %family.pattern(), size = family.len(), "family");
        }

        // A guess that splits nothing fixes the pattern outright
        if let [only] = families.as_slice() {
            self.pattern = only.pattern().clone();
        }

        let selection = select(&families, self.config.difficulty, self.guesses_made)
            .ok_or(EngineError::NoCandidatesRemaining)?;
        let family_sizes = families.sizes();
        let family = families
            .into_family(&selection.pattern)
            .ok_or(EngineError::NoCandidatesRemaining)?;

        self.pattern = selection.pattern.clone();
        self.candidates = family.into_words();
        self.guesses_remaining -= 1;

        debug!(
            %letter,
            guess = self.guesses_made,
            families = family_sizes.len(),
            selected = %self.pattern,
            eased = selection.eased,
            candidates = self.candidates.len(),
            guesses_remaining = self.guesses_remaining,
            "applied guess"
        );

        Ok(GuessReport {
            letter,
            family_sizes,
            hit: self.pattern.reveals(letter),
            selected: selection.pattern,
            eased: selection.eased,
        })
    }

    /// Fix the secret word, picking uniformly among the candidates with `rng`
    ///
    /// A single remaining candidate is returned without touching `rng`. Once
    /// resolved, the same word is returned on every call.
    ///
    /// # Errors
    /// Returns `NoCandidatesRemaining` if the candidate set is empty.
    pub fn resolve_secret_word_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<String, EngineError> {
        if let Some(secret) = &self.secret {
            return Ok(secret.clone());
        }

        let secret = match self.candidates.as_slice() {
            [] => return Err(EngineError::NoCandidatesRemaining),
            [only] => only.clone(),
            many => many
                .choose(rng)
                .cloned()
                .ok_or(EngineError::NoCandidatesRemaining)?,
        };

        info!(
            %secret,
            candidates = self.candidates.len(),
            guesses_made = self.guesses_made,
            "resolved secret word"
        );

        self.secret = Some(secret.clone());
        Ok(secret)
    }
}

/// Adversarial hangman engine
///
/// # Examples
/// ```
/// use evil_hangman::core::Difficulty;
/// use evil_hangman::engine::{Dictionary, RoundConfig, RoundEngine};
///
/// let dictionary = Dictionary::new(["cat", "car", "can", "cap"]).unwrap();
/// let mut engine = RoundEngine::new(dictionary);
///
/// engine.begin_round(RoundConfig::new(3, 5, Difficulty::Hard)).unwrap();
/// engine.apply_guess('a').unwrap();
/// assert_eq!(engine.pattern().unwrap().as_str(), "-a-");
///
/// engine.apply_guess('t').unwrap();
/// assert_eq!(engine.candidate_count(), 3);
/// assert_eq!(engine.guesses_remaining(), 3);
/// assert_eq!(engine.guessed_letters_display(), "[a, t]");
/// ```
#[derive(Debug, Clone)]
pub struct RoundEngine {
    dictionary: Dictionary,
    round: Option<RoundState>,
}

impl RoundEngine {
    #[must_use]
    pub const fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            round: None,
        }
    }

    /// Build an engine straight from a word collection
    ///
    /// # Errors
    /// Returns `EngineError::InvalidDictionary` if the words are empty or invalid.
    pub fn from_words<I, S>(words: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Dictionary::new(words).map(Self::new)
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Count dictionary words with exactly `length` letters
    #[must_use]
    pub fn word_count_of_length(&self, length: usize) -> usize {
        self.dictionary.word_count_of_length(length)
    }

    /// Replace any previous round with a fresh one
    ///
    /// # Errors
    /// Returns `EngineError::InvalidRoundConfig` if no word has the requested
    /// length or the guess budget is zero. The previous round is kept in that case.
    pub fn begin_round(&mut self, config: RoundConfig) -> Result<(), EngineError> {
        let state = RoundState::new(&self.dictionary, config)?;

        info!(
            word_length = config.word_length,
            max_wrong_guesses = config.max_wrong_guesses,
            difficulty = %config.difficulty,
            candidates = state.candidate_count(),
            "began round"
        );

        self.round = Some(state);
        Ok(())
    }

    /// The active round, if one has been started
    #[inline]
    #[must_use]
    pub const fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        match &self.round {
            None => RoundPhase::Uninitialized,
            Some(round) if round.secret.is_some() => RoundPhase::Resolved,
            Some(_) => RoundPhase::Active,
        }
    }

    /// Round status, `None` before any round
    #[must_use]
    pub fn status(&self) -> Option<RoundStatus> {
        self.round.as_ref().map(RoundState::status)
    }

    /// Current pattern, `None` before any round
    #[must_use]
    pub fn pattern(&self) -> Option<&Pattern> {
        self.round.as_ref().map(RoundState::pattern)
    }

    /// Remaining candidates; empty before any round
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        self.round
            .as_ref()
            .map(RoundState::candidates)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates().len()
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.round.as_ref().map_or(0, RoundState::guesses_remaining)
    }

    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.round.as_ref().map_or(0, RoundState::guesses_made)
    }

    #[must_use]
    pub fn guessed_letters_display(&self) -> String {
        self.round
            .as_ref()
            .map_or_else(|| GuessedLetters::default().to_string(), RoundState::guessed_letters_display)
    }

    #[must_use]
    pub fn has_been_guessed(&self, letter: char) -> bool {
        self.round
            .as_ref()
            .is_some_and(|round| round.has_been_guessed(letter))
    }

    /// Apply a guess to the active round
    ///
    /// # Errors
    /// Returns `RoundNotStarted` before the first round, otherwise the errors
    /// of [`RoundState::apply_guess`].
    pub fn apply_guess(&mut self, letter: char) -> Result<GuessReport, EngineError> {
        self.round
            .as_mut()
            .ok_or(EngineError::RoundNotStarted)?
            .apply_guess(letter)
    }

    /// Fix the secret word using the thread-local random generator
    ///
    /// # Errors
    /// Returns `RoundNotStarted` before the first round and
    /// `NoCandidatesRemaining` if the candidate set is empty.
    pub fn resolve_secret_word(&mut self) -> Result<String, EngineError> {
        self.resolve_secret_word_with(&mut rand::rng())
    }

    /// Fix the secret word using the supplied random generator
    ///
    /// # Errors
    /// Same as [`RoundEngine::resolve_secret_word`].
    pub fn resolve_secret_word_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<String, EngineError> {
        self.round
            .as_mut()
            .ok_or(EngineError::RoundNotStarted)?
            .resolve_secret_word_with(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tracing_test::traced_test;

    fn engine(words: &[&str]) -> RoundEngine {
        RoundEngine::from_words(words.iter().copied()).unwrap()
    }

    fn cat_engine(difficulty: Difficulty) -> RoundEngine {
        let mut engine = engine(&["cat", "car", "can", "cap"]);
        engine
            .begin_round(RoundConfig::new(3, 5, difficulty))
            .unwrap();
        engine
    }

    fn sizes(report: &GuessReport) -> Vec<(String, usize)> {
        report
            .family_sizes
            .iter()
            .map(|(p, &n)| (p.to_string(), n))
            .collect()
    }

    #[test]
    fn queries_before_any_round() {
        let engine = engine(&["cat", "horse"]);

        assert_eq!(engine.phase(), RoundPhase::Uninitialized);
        assert_eq!(engine.word_count_of_length(3), 1);
        assert_eq!(engine.word_count_of_length(5), 1);
        assert_eq!(engine.candidate_count(), 0);
        assert_eq!(engine.guesses_remaining(), 0);
        assert_eq!(engine.guessed_letters_display(), "[]");
        assert!(engine.pattern().is_none());
        assert!(engine.status().is_none());
        assert!(!engine.has_been_guessed('a'));
    }

    #[test]
    fn guess_before_round_fails() {
        let mut engine = engine(&["cat"]);
        assert_eq!(engine.apply_guess('a'), Err(EngineError::RoundNotStarted));
        assert_eq!(
            engine.resolve_secret_word(),
            Err(EngineError::RoundNotStarted)
        );
    }

    #[test]
    fn begin_round_resets_state() {
        let engine = cat_engine(Difficulty::Hard);

        assert_eq!(engine.phase(), RoundPhase::Active);
        assert_eq!(engine.pattern().unwrap().as_str(), "---");
        assert_eq!(engine.candidate_count(), 4);
        assert_eq!(engine.guesses_remaining(), 5);
        assert_eq!(engine.guesses_made(), 0);
        assert_eq!(engine.guessed_letters_display(), "[]");
        assert_eq!(engine.status(), Some(RoundStatus::InProgress));
    }

    #[test]
    fn begin_round_rejects_missing_length() {
        let mut engine = engine(&["cat", "car"]);
        let result = engine.begin_round(RoundConfig::new(4, 5, Difficulty::Hard));

        assert!(matches!(
            result,
            Err(EngineError::InvalidRoundConfig { word_length: 4, .. })
        ));
        assert_eq!(engine.phase(), RoundPhase::Uninitialized);
    }

    #[test]
    fn begin_round_rejects_zero_guesses() {
        let mut engine = engine(&["cat", "car"]);
        let result = engine.begin_round(RoundConfig::new(3, 0, Difficulty::Hard));

        assert!(matches!(
            result,
            Err(EngineError::InvalidRoundConfig {
                max_wrong_guesses: 0,
                ..
            })
        ));
    }

    #[test]
    fn failed_begin_keeps_previous_round() {
        let mut engine = cat_engine(Difficulty::Hard);
        engine.apply_guess('a').unwrap();

        assert!(engine.begin_round(RoundConfig::new(9, 5, Difficulty::Hard)).is_err());
        assert_eq!(engine.pattern().unwrap().as_str(), "-a-");
        assert!(engine.has_been_guessed('a'));
    }

    #[test]
    fn universal_letter_reveals_single_family() {
        let mut engine = cat_engine(Difficulty::Hard);
        let report = engine.apply_guess('a').unwrap();

        assert_eq!(sizes(&report), vec![("-a-".to_string(), 4)]);
        assert_eq!(report.selected.as_str(), "-a-");
        assert!(report.hit);
        assert_eq!(engine.pattern().unwrap().as_str(), "-a-");
        assert_eq!(engine.candidate_count(), 4);
        assert_eq!(engine.guesses_remaining(), 4);
    }

    #[test]
    fn hard_keeps_largest_family() {
        let mut engine = cat_engine(Difficulty::Hard);
        engine.apply_guess('a').unwrap();
        let report = engine.apply_guess('t').unwrap();

        assert_eq!(
            sizes(&report),
            vec![("-a-".to_string(), 3), ("-at".to_string(), 1)]
        );
        assert!(!report.hit);
        assert!(!report.eased);
        assert_eq!(engine.pattern().unwrap().as_str(), "-a-");
        assert_eq!(engine.candidates(), &["car", "can", "cap"]);
        assert_eq!(engine.guesses_remaining(), 3);
    }

    #[test]
    fn easy_gives_second_hardest_on_even_guess() {
        let mut engine = cat_engine(Difficulty::Easy);
        engine.apply_guess('a').unwrap();
        let report = engine.apply_guess('t').unwrap();

        assert!(report.eased);
        assert!(report.hit);
        assert_eq!(engine.pattern().unwrap().as_str(), "-at");
        assert_eq!(engine.candidates(), &["cat"]);
        assert_eq!(engine.status(), Some(RoundStatus::InProgress));
    }

    #[test]
    fn medium_does_not_ease_second_guess() {
        let mut engine = cat_engine(Difficulty::Medium);
        engine.apply_guess('a').unwrap();
        engine.apply_guess('t').unwrap();

        assert_eq!(engine.pattern().unwrap().as_str(), "-a-");
        assert_eq!(engine.candidate_count(), 3);
    }

    #[test]
    fn medium_eases_fourth_guess() {
        let mut engine = engine(&["cat", "car", "can", "cap", "cab", "cam"]);
        engine
            .begin_round(RoundConfig::new(3, 10, Difficulty::Medium))
            .unwrap();

        for letter in ['a', 'c', 't'] {
            engine.apply_guess(letter).unwrap();
        }
        assert_eq!(engine.pattern().unwrap().as_str(), "ca-");
        assert_eq!(engine.candidate_count(), 5);

        // Fourth guess: "ca-" keeps 4 words, "car" only 1; easing keeps "car"
        let report = engine.apply_guess('r').unwrap();
        assert!(report.eased);
        assert_eq!(engine.pattern().unwrap().as_str(), "car");
        assert_eq!(engine.status(), Some(RoundStatus::Won));
    }

    #[test]
    fn duplicate_guess_is_rejected_without_side_effects() {
        let mut engine = cat_engine(Difficulty::Hard);
        engine.apply_guess('a').unwrap();

        assert_eq!(engine.apply_guess('a'), Err(EngineError::DuplicateGuess('a')));
        assert_eq!(engine.apply_guess('A'), Err(EngineError::DuplicateGuess('a')));
        assert_eq!(engine.guesses_made(), 1);
        assert_eq!(engine.guesses_remaining(), 4);
    }

    #[test]
    fn non_letters_are_rejected() {
        let mut engine = cat_engine(Difficulty::Hard);
        assert_eq!(engine.apply_guess('3'), Err(EngineError::InvalidGuess('3')));
        assert_eq!(engine.apply_guess('-'), Err(EngineError::InvalidGuess('-')));
        assert_eq!(engine.guesses_made(), 0);
    }

    #[test]
    fn uppercase_guess_is_normalized() {
        let mut engine = cat_engine(Difficulty::Hard);
        let report = engine.apply_guess('A').unwrap();

        assert_eq!(report.letter, 'a');
        assert!(engine.has_been_guessed('a'));
        assert!(engine.has_been_guessed('A'));
    }

    #[test]
    fn exhausted_budget_rejects_guesses() {
        let mut engine = engine(&["cat", "car", "can", "cap"]);
        engine
            .begin_round(RoundConfig::new(3, 1, Difficulty::Hard))
            .unwrap();

        engine.apply_guess('z').unwrap();
        assert_eq!(engine.guesses_remaining(), 0);
        assert_eq!(engine.status(), Some(RoundStatus::Lost));
        assert_eq!(engine.apply_guess('a'), Err(EngineError::NoGuessesRemaining));
    }

    #[test]
    fn guessed_letters_display_is_sorted() {
        let mut engine = cat_engine(Difficulty::Hard);
        for letter in ['e', 'a', 'c'] {
            engine.apply_guess(letter).unwrap();
        }

        assert_eq!(engine.guessed_letters_display(), "[a, c, e]");
    }

    #[test]
    fn queries_are_idempotent() {
        let mut engine = cat_engine(Difficulty::Medium);
        engine.apply_guess('a').unwrap();

        assert_eq!(engine.pattern(), engine.pattern());
        assert_eq!(engine.candidate_count(), engine.candidate_count());
        assert_eq!(engine.guessed_letters_display(), engine.guessed_letters_display());
    }

    #[test]
    fn single_candidate_resolves_without_randomness() {
        let mut engine = cat_engine(Difficulty::Easy);
        engine.apply_guess('a').unwrap();
        engine.apply_guess('t').unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let before = rng.clone().random::<u64>();
        assert_eq!(engine.resolve_secret_word_with(&mut rng).unwrap(), "cat");
        assert_eq!(rng.random::<u64>(), before);
    }

    #[test]
    fn resolution_picks_a_candidate_and_sticks() {
        let mut engine = cat_engine(Difficulty::Hard);
        engine.apply_guess('a').unwrap();

        let secret = engine.resolve_secret_word().unwrap();
        assert!(engine.candidates().contains(&secret));
        assert_eq!(engine.phase(), RoundPhase::Resolved);
        assert_eq!(engine.resolve_secret_word().unwrap(), secret);
        assert_eq!(engine.apply_guess('t'), Err(EngineError::RoundResolved));
    }

    #[test]
    fn begin_round_after_resolution_starts_fresh() {
        let mut engine = cat_engine(Difficulty::Hard);
        engine.resolve_secret_word().unwrap();

        engine
            .begin_round(RoundConfig::new(3, 2, Difficulty::Easy))
            .unwrap();
        assert_eq!(engine.phase(), RoundPhase::Active);
        assert_eq!(engine.guesses_remaining(), 2);
        assert!(engine.round().unwrap().secret().is_none());
    }

    #[test]
    fn candidates_stay_consistent_with_pattern() {
        let mut engine = engine(&[
            "bake", "cake", "lake", "make", "rake", "take", "wake", "bike", "like", "hike", "bone",
            "cone", "tone", "lone", "none", "cute", "mute", "lute",
        ]);
        engine
            .begin_round(RoundConfig::new(4, 20, Difficulty::Medium))
            .unwrap();

        let mut previous = engine.candidate_count();
        for letter in ['e', 'a', 'k', 'o', 'n', 'u', 't', 'b'] {
            engine.apply_guess(letter).unwrap();
            let round = engine.round().unwrap();

            assert!(round.candidate_count() <= previous);
            previous = round.candidate_count();
            for word in round.candidates() {
                assert!(
                    round.pattern().matches(word, round.guessed_letters()),
                    "{word} does not match {}",
                    round.pattern()
                );
            }
        }
    }

    #[test]
    fn identical_inputs_produce_identical_patterns() {
        let run = || {
            let mut engine = engine(&["tab", "bat", "ate", "tot", "cab", "act"]);
            engine
                .begin_round(RoundConfig::new(3, 6, Difficulty::Easy))
                .unwrap();
            ['t', 'a', 'b', 'c']
                .into_iter()
                .map(|letter| {
                    engine.apply_guess(letter).unwrap();
                    engine.pattern().unwrap().to_string()
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(run(), run());
    }

    #[test]
    #[traced_test]
    fn guesses_are_logged() {
        let mut engine = cat_engine(Difficulty::Hard);
        engine.apply_guess('a').unwrap();

        assert!(logs_contain("began round"));
        assert!(logs_contain("applied guess"));
    }
}
