//! Formatting utilities for terminal output

use crate::core::{Pattern, UNREVEALED};

/// Format a pattern with spaces between positions, hidden ones as `_`
///
/// # Examples
/// ```
/// use evil_hangman::output::formatters::spaced_pattern;
///
/// let pattern = "-a-".parse().unwrap();
/// assert_eq!(spaced_pattern(&pattern), "_ A _");
/// ```
#[must_use]
pub fn spaced_pattern(pattern: &Pattern) -> String {
    pattern
        .as_str()
        .chars()
        .map(|c| {
            if c == UNREVEALED {
                '_'
            } else {
                c.to_ascii_uppercase()
            }
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing the guesses still available
#[must_use]
pub fn guesses_bar(remaining: usize, max: usize, width: usize) -> String {
    create_progress_bar(remaining as f64, max as f64, width)
}

/// Singular or plural noun for a count
#[must_use]
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_pattern_hidden() {
        assert_eq!(spaced_pattern(&Pattern::hidden(3)), "_ _ _");
    }

    #[test]
    fn spaced_pattern_revealed() {
        let pattern: Pattern = "s-ee-".parse().unwrap();
        assert_eq!(spaced_pattern(&pattern), "S _ E E _");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn guesses_bar_scales() {
        assert_eq!(guesses_bar(2, 4, 8), "████░░░░");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "word", "words"), "1 word");
        assert_eq!(plural(3, "word", "words"), "3 words");
    }
}
