//! Round difficulty levels

use std::fmt;

/// How often the engine lets the guesser off the hook
///
/// On an easing turn the engine keeps the second hardest family instead of
/// the hardest one. Easy eases every 2nd guess, Medium every 4th, Hard never.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties from easiest to hardest
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Guess interval between easing turns, `None` if the level never eases
    #[must_use]
    pub const fn easing_interval(self) -> Option<usize> {
        match self {
            Self::Easy => Some(2),
            Self::Medium => Some(4),
            Self::Hard => None,
        }
    }

    /// Check whether guess number `guess_number` (1-based) is an easing turn
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Difficulty;
    ///
    /// assert!(Difficulty::Easy.eases_on(2));
    /// assert!(!Difficulty::Medium.eases_on(2));
    /// assert!(Difficulty::Medium.eases_on(8));
    /// assert!(!Difficulty::Hard.eases_on(4));
    /// ```
    #[must_use]
    pub const fn eases_on(self, guess_number: usize) -> bool {
        match self.easing_interval() {
            Some(interval) => guess_number % interval == 0,
            None => false,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" | "e" => Ok(Self::Easy),
            "medium" | "m" => Ok(Self::Medium),
            "hard" | "h" => Ok(Self::Hard),
            _ => Err(format!("Unknown difficulty: {s} (expected easy, medium or hard)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easy_eases_every_other_guess() {
        let turns: Vec<usize> = (1..=8).filter(|&n| Difficulty::Easy.eases_on(n)).collect();
        assert_eq!(turns, vec![2, 4, 6, 8]);
    }

    #[test]
    fn medium_eases_every_fourth_guess() {
        let turns: Vec<usize> = (1..=12)
            .filter(|&n| Difficulty::Medium.eases_on(n))
            .collect();
        assert_eq!(turns, vec![4, 8, 12]);
    }

    #[test]
    fn hard_never_eases() {
        assert!((1..=26).all(|n| !Difficulty::Hard.eases_on(n)));
    }

    #[test]
    fn parse_names() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("MEDIUM".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("h".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("brutal".parse::<Difficulty>().is_err());
    }

    #[test]
    fn display_round_trips_name() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
    }
}
