//! Word family partitioning
//!
//! Given the current pattern and a guessed letter, every candidate word falls
//! into exactly one family: the set of words that would produce the same
//! pattern if the letter were revealed.

use crate::core::Pattern;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Candidate words sharing the pattern a guess would produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    pattern: Pattern,
    words: Vec<String>,
}

impl Family {
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the family
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

/// All families produced by one guess, sorted by pattern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Families(Vec<Family>);

impl Families {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Family] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Family> {
        self.0.iter()
    }

    /// The family with the given pattern
    #[must_use]
    pub fn get(&self, pattern: &Pattern) -> Option<&Family> {
        self.0
            .binary_search_by(|family| family.pattern.cmp(pattern))
            .ok()
            .map(|idx| &self.0[idx])
    }

    /// Family sizes keyed by pattern, in lexicographic pattern order
    #[must_use]
    pub fn sizes(&self) -> BTreeMap<Pattern, usize> {
        self.0
            .iter()
            .map(|family| (family.pattern.clone(), family.len()))
            .collect()
    }

    /// Consume the partition, keeping only the family with `pattern`
    #[must_use]
    pub fn into_family(self, pattern: &Pattern) -> Option<Family> {
        self.0.into_iter().find(|family| &family.pattern == pattern)
    }
}

/// Partition `candidates` by the pattern each would produce for `letter`
///
/// Words that do not contain `letter` land in the family keyed by the
/// unchanged `current` pattern. Words keep their relative order inside each
/// family, and families come back sorted by pattern so that ranking ties
/// resolve the same way on every run.
///
/// # Examples
/// ```
/// use evil_hangman::core::Pattern;
/// use evil_hangman::engine::partition;
///
/// let candidates = vec!["cat".to_string(), "car".to_string(), "cap".to_string()];
/// let current: Pattern = "-a-".parse().unwrap();
/// let families = partition(&current, candidates, 't');
///
/// let sizes: Vec<(String, usize)> = families
///     .sizes()
///     .into_iter()
///     .map(|(pattern, size)| (pattern.to_string(), size))
///     .collect();
/// assert_eq!(sizes, vec![("-a-".to_string(), 2), ("-at".to_string(), 1)]);
/// ```
#[must_use]
pub fn partition(current: &Pattern, candidates: Vec<String>, letter: char) -> Families {
    let mut groups: FxHashMap<Pattern, Vec<String>> = FxHashMap::default();

    for word in candidates {
        let pattern = current.reveal(&word, letter);
        groups.entry(pattern).or_default().push(word);
    }

    let mut families: Vec<Family> = groups
        .into_iter()
        .map(|(pattern, words)| Family { pattern, words })
        .collect();
    families.sort_unstable_by(|a, b| a.pattern.cmp(&b.pattern));

    Families(families)
}
