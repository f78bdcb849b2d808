//! Adversarial family selection
//!
//! Ranks families by how much uncertainty they leave the guesser and applies
//! the difficulty easing rule.
//!
//! # Ranking
//! 1. Larger family wins
//! 2. Equal size: more unrevealed positions wins
//! 3. Still tied: lexicographically smaller pattern wins

use super::family::{Families, Family};
use crate::core::{Difficulty, Pattern};
use std::cmp::Reverse;

/// The two hardest families of a partition
#[derive(Debug, Clone, Copy)]
pub struct Ranking<'a> {
    pub hardest: &'a Family,
    /// Falls back to `hardest` when the partition has a single family
    pub second_hardest: &'a Family,
}

/// Family chosen for the next round state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub pattern: Pattern,
    /// Whether this guess was an easing turn
    pub eased: bool,
}

/// Ordering key: bigger is harder. Patterns are unique within a partition,
/// so two distinct families never compare equal.
fn hardness(family: &Family) -> (usize, usize, Reverse<&Pattern>) {
    (
        family.len(),
        family.pattern().unrevealed_count(),
        Reverse(family.pattern()),
    )
}

/// Pick the hardest family, skipping the one keyed by `except`
///
/// Returns `None` if no family is left to choose from.
#[must_use]
pub fn pick_hardest<'a>(families: &'a [Family], except: Option<&Pattern>) -> Option<&'a Family> {
    families
        .iter()
        .filter(|family| except != Some(family.pattern()))
        .max_by(|a, b| hardness(a).cmp(&hardness(b)))
}

/// Rank a partition into its hardest and second hardest families
///
/// Returns `None` for an empty partition.
#[must_use]
pub fn rank(families: &Families) -> Option<Ranking<'_>> {
    let hardest = pick_hardest(families.as_slice(), None)?;
    let second_hardest =
        pick_hardest(families.as_slice(), Some(hardest.pattern())).unwrap_or(hardest);

    Some(Ranking {
        hardest,
        second_hardest,
    })
}

/// Choose the family to keep after guess number `guess_number` (1-based)
///
/// On easing turns the second hardest family is kept; otherwise the hardest.
///
/// # Examples
/// ```
/// use evil_hangman::core::{Difficulty, Pattern};
/// use evil_hangman::engine::{partition, select};
///
/// let candidates = vec!["car".to_string(), "can".to_string(), "cat".to_string()];
/// let current: Pattern = "-a-".parse().unwrap();
/// let families = partition(&current, candidates, 't');
///
/// let hard = select(&families, Difficulty::Hard, 2).unwrap();
/// assert_eq!(hard.pattern.as_str(), "-a-");
///
/// let easy = select(&families, Difficulty::Easy, 2).unwrap();
/// assert_eq!(easy.pattern.as_str(), "-at");
/// assert!(easy.eased);
/// ```
#[must_use]
pub fn select(families: &Families, difficulty: Difficulty, guess_number: usize) -> Option<Selection> {
    let ranking = rank(families)?;
    let eased = difficulty.eases_on(guess_number);

    let chosen = if eased {
        ranking.second_hardest
    } else {
        ranking.hardest
    };

    Some(Selection {
        pattern: chosen.pattern().clone(),
        eased,
    })
}
