//! Letters guessed during a round

use rustc_hash::FxHashSet;
use std::fmt;

/// Set of guessed letters
///
/// Keeps insertion order for history display while membership checks are
/// order-independent. Each letter appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    order: Vec<char>,
    members: FxHashSet<char>,
}

impl GuessedLetters {
    /// Record a guessed letter
    ///
    /// Returns `false` if the letter was already present.
    pub fn insert(&mut self, letter: char) -> bool {
        if self.members.insert(letter) {
            self.order.push(letter);
            true
        } else {
            false
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.members.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Letters in the order they were guessed
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.order.iter().copied()
    }

    /// Letters in ascending alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<char> {
        let mut letters = self.order.clone();
        letters.sort_unstable();
        letters
    }
}

/// Renders as `[a, c, e]`, always ascending; an empty set renders as `[]`
impl fmt::Display for GuessedLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, letter) in self.sorted().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{letter}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_renders_brackets() {
        let guessed = GuessedLetters::default();
        assert!(guessed.is_empty());
        assert_eq!(guessed.to_string(), "[]");
    }

    #[test]
    fn display_is_sorted_regardless_of_order() {
        let mut guessed = GuessedLetters::default();
        guessed.insert('e');
        guessed.insert('a');
        guessed.insert('c');

        assert_eq!(guessed.to_string(), "[a, c, e]");
    }

    #[test]
    fn iter_keeps_insertion_order() {
        let mut guessed = GuessedLetters::default();
        for letter in ['t', 'a', 'z'] {
            guessed.insert(letter);
        }

        assert_eq!(guessed.iter().collect::<String>(), "taz");
        assert_eq!(guessed.sorted(), vec!['a', 't', 'z']);
    }

    #[test]
    fn insert_rejects_duplicates() {
        let mut guessed = GuessedLetters::default();
        assert!(guessed.insert('a'));
        assert!(!guessed.insert('a'));
        assert_eq!(guessed.len(), 1);
        assert!(guessed.contains('a'));
        assert!(!guessed.contains('b'));
    }
}
