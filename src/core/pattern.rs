//! Hangman pattern calculation and representation
//!
//! A pattern records which positions of the word have been disclosed:
//! - a lowercase letter marks a revealed position
//! - `-` marks a position that is still hidden
//!
//! Patterns order lexicographically by their string form, so `-` sorts before
//! every letter. Family selection relies on that order for tie-breaking.

use super::GuessedLetters;
use std::fmt;

/// Marker for a position that has not been revealed
pub const UNREVEALED: char = '-';

/// Revealed/unrevealed positions of a hangman word
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(String);

impl Pattern {
    /// Create a fully hidden pattern of the given length
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// assert_eq!(Pattern::hidden(4).as_str(), "----");
    /// ```
    #[must_use]
    pub fn hidden(length: usize) -> Self {
        Self(UNREVEALED.to_string().repeat(length))
    }

    /// Get the pattern as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of positions in the pattern
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Count the positions that are still hidden
    #[must_use]
    pub fn unrevealed_count(&self) -> usize {
        self.0.chars().filter(|&c| c == UNREVEALED).count()
    }

    /// Check whether every position has been revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.0.contains(UNREVEALED)
    }

    /// Check whether `letter` is revealed anywhere in the pattern
    #[must_use]
    pub fn reveals(&self, letter: char) -> bool {
        letter != UNREVEALED && self.0.contains(letter)
    }

    /// Calculate the pattern `word` produces when `letter` is guessed
    ///
    /// Every position where `word` holds `letter` becomes revealed; positions
    /// revealed in `self` stay revealed and all others stay hidden. A word
    /// without `letter` therefore yields an identical pattern.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// let current: Pattern = "-a-".parse().unwrap();
    /// assert_eq!(current.reveal("cat", 't').as_str(), "-at");
    /// assert_eq!(current.reveal("car", 't'), current);
    /// ```
    #[must_use]
    pub fn reveal(&self, word: &str, letter: char) -> Self {
        debug_assert_eq!(
            word.chars().count(),
            self.len(),
            "word length must match pattern length"
        );

        let revealed = self
            .0
            .chars()
            .zip(word.chars())
            .map(|(current, ch)| if ch == letter { letter } else { current })
            .collect();

        Self(revealed)
    }

    /// Check whether `word` is consistent with this pattern and the guesses so far
    ///
    /// A word matches when it agrees with every revealed position and holds no
    /// guessed letter at a hidden position.
    #[must_use]
    pub fn matches(&self, word: &str, guessed: &GuessedLetters) -> bool {
        if word.chars().count() != self.len() {
            return false;
        }

        self.0.chars().zip(word.chars()).all(|(shown, ch)| {
            if shown == UNREVEALED {
                !guessed.contains(ch)
            } else {
                shown == ch
            }
        })
    }

    /// Parse a pattern like `"-a-e"`
    ///
    /// Accepts lowercase ASCII letters and `-` (or `_`) for hidden positions.
    #[must_use]
    pub fn parse_str(s: &str) -> Option<Self> {
        s.chars()
            .map(|ch| match ch {
                '-' | '_' => Some(UNREVEALED),
                'a'..='z' => Some(ch),
                _ => None,
            })
            .collect::<Option<String>>()
            .map(Self)
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Pattern {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
