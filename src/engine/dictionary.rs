//! Validated hangman dictionary
//!
//! The dictionary is read-only once built and cheap to clone, so independent
//! engines can share one word collection.

use super::EngineError;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Immutable, non-empty collection of lowercase words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Arc<[String]>,
    length_counts: FxHashMap<usize, usize>,
}

impl Dictionary {
    /// Build a dictionary from a word collection
    ///
    /// Duplicate words are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidDictionary` if the collection is empty or
    /// contains a word that is not made only of lowercase ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::engine::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["cat", "car", "cart"]).unwrap();
    /// assert_eq!(dictionary.word_count_of_length(3), 2);
    ///
    /// assert!(Dictionary::new(Vec::<String>::new()).is_err());
    /// assert!(Dictionary::new(["Cat"]).is_err());
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut unique = Vec::new();
        let mut length_counts: FxHashMap<usize, usize> = FxHashMap::default();

        for word in words {
            let word: String = word.into();

            if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(EngineError::InvalidDictionary(format!(
                    "'{word}' is not a lowercase word"
                )));
            }

            if seen.insert(word.clone()) {
                *length_counts.entry(word.len()).or_insert(0) += 1;
                unique.push(word);
            }
        }

        if unique.is_empty() {
            return Err(EngineError::InvalidDictionary(
                "dictionary contains no words".to_string(),
            ));
        }

        Ok(Self {
            words: unique.into(),
            length_counts,
        })
    }

    /// All words in their original order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; construction rejects empty collections
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Count the words with exactly `length` letters
    #[must_use]
    pub fn word_count_of_length(&self, length: usize) -> usize {
        self.length_counts.get(&length).copied().unwrap_or(0)
    }

    /// Words with exactly `length` letters, in dictionary order
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &str> + '_ {
        self.words
            .iter()
            .filter(move |word| word.len() == length)
            .map(String::as_str)
    }

    /// Word count for every length present, shortest first
    #[must_use]
    pub fn length_histogram(&self) -> BTreeMap<usize, usize> {
        self.length_counts.iter().map(|(&k, &v)| (k, v)).collect()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_collection() {
        let result = Dictionary::new(Vec::<&str>::new());
        assert!(matches!(result, Err(EngineError::InvalidDictionary(_))));
    }

    #[test]
    fn rejects_non_lowercase_words() {
        assert!(Dictionary::new(["cat", "Dog"]).is_err());
        assert!(Dictionary::new(["cat", "c4t"]).is_err());
        assert!(Dictionary::new(["cat", ""]).is_err());
        assert!(Dictionary::new(["café"]).is_err());
    }

    #[test]
    fn drops_duplicates_keeping_order() {
        let dictionary = Dictionary::new(["cat", "dog", "cat", "ant"]).unwrap();
        assert_eq!(dictionary.words(), &["cat", "dog", "ant"]);
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.word_count_of_length(3), 3);
    }

    #[test]
    fn counts_by_length() {
        let dictionary = Dictionary::new(["a", "at", "cat", "cart", "dog"]).unwrap();
        assert_eq!(dictionary.word_count_of_length(1), 1);
        assert_eq!(dictionary.word_count_of_length(3), 2);
        assert_eq!(dictionary.word_count_of_length(7), 0);
        assert_eq!(dictionary.word_count_of_length(0), 0);
    }

    #[test]
    fn words_of_length_preserves_order() {
        let dictionary = Dictionary::new(["dog", "cart", "ant", "bee"]).unwrap();
        let words: Vec<&str> = dictionary.words_of_length(3).collect();
        assert_eq!(words, vec!["dog", "ant", "bee"]);
    }

    #[test]
    fn histogram_is_sorted_by_length() {
        let dictionary = Dictionary::new(["house", "at", "cat", "dog", "a"]).unwrap();
        let histogram: Vec<(usize, usize)> = dictionary.length_histogram().into_iter().collect();
        assert_eq!(histogram, vec![(1, 1), (2, 1), (3, 2), (5, 1)]);
    }

    #[test]
    fn clones_share_words() {
        let dictionary = Dictionary::new(["cat"]).unwrap();
        let copy = dictionary.clone();
        assert!(Arc::ptr_eq(&dictionary.words, &copy.words));
        assert!(copy.contains("cat"));
        assert!(!copy.contains("dog"));
    }
}
