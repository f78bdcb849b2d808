//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::engine::{Dictionary, EngineError};
use std::fs;
use std::io;
use std::path::Path;

/// Normalize a raw dictionary entry
///
/// Trims and lowercases the entry. Returns `None` for blank lines, `#`
/// comments and anything that is not purely alphabetic ASCII.
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let word = trimmed.to_ascii_lowercase();
    word.bytes()
        .all(|b| b.is_ascii_lowercase())
        .then_some(word)
}

/// Load words from a file
///
/// Returns the valid entries in file order, skipping any invalid ones.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use evil_hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content.lines().filter_map(normalize_word).collect())
}

/// Convert embedded string slice to a normalized word vector
///
/// # Examples
/// ```
/// use evil_hangman::wordlists::loader::words_from_slice;
/// use evil_hangman::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize_word(s)).collect()
}

/// Build a dictionary from the embedded word list
///
/// # Errors
///
/// Returns `EngineError::InvalidDictionary` if the embedded list is empty.
pub fn embedded_dictionary() -> Result<Dictionary, EngineError> {
    Dictionary::new(words_from_slice(super::DICTIONARY))
}
