use thiserror::Error;

/// Errors raised by the round engine
///
/// All of them are precondition violations: nothing is retried and the
/// engine state is left untouched when one is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid dictionary: {0}")]
    InvalidDictionary(String),
    #[error(
        "Invalid round configuration (length {word_length}, {max_wrong_guesses} guesses): {reason}"
    )]
    InvalidRoundConfig {
        word_length: usize,
        max_wrong_guesses: usize,
        reason: &'static str,
    },
    #[error("Letter '{0}' has already been guessed")]
    DuplicateGuess(char),
    #[error("'{0}' is not a letter")]
    InvalidGuess(char),
    #[error("No candidate words remain")]
    NoCandidatesRemaining,
    #[error("No guesses remain in this round")]
    NoGuessesRemaining,
    #[error("No round has been started")]
    RoundNotStarted,
    #[error("The round has already been resolved")]
    RoundResolved,
}
