//! Difficulty levels and the threshold mapping
//!
//! A difficulty is an integer from 1 (easiest) to 10 (hardest). The allowed
//! edit distance between consecutive chain words is the inverse mapping
//! `11 - level`, so higher difficulty means stricter matching.

use std::fmt;
use std::str::FromStr;

/// A validated difficulty level in 1..=10
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Difficulty(u8);

/// Error type for invalid difficulty input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DifficultyError {
    /// Input did not parse as an integer
    InvalidFormat(String),
    /// Parsed value was outside 1..=10
    OutOfRange(i64),
}

impl fmt::Display for DifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(input) => {
                write!(f, "'{input}' is not a number between 1 and 10")
            }
            Self::OutOfRange(value) => {
                write!(f, "{value} is outside the valid range 1-10")
            }
        }
    }
}

impl std::error::Error for DifficultyError {}

impl Difficulty {
    /// All difficulty levels, easiest first
    pub const ALL: [Self; 10] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
        Self(10),
    ];

    /// Create a difficulty from a raw level
    ///
    /// # Errors
    /// Returns `DifficultyError::OutOfRange` if `level` is not in 1..=10.
    ///
    /// # Examples
    /// ```
    /// use rock_chain::core::Difficulty;
    ///
    /// let difficulty = Difficulty::new(5).unwrap();
    /// assert_eq!(difficulty.threshold(), 6);
    ///
    /// assert!(Difficulty::new(0).is_err());
    /// assert!(Difficulty::new(11).is_err());
    /// ```
    pub fn new(level: u8) -> Result<Self, DifficultyError> {
        if (1..=10).contains(&level) {
            Ok(Self(level))
        } else {
            Err(DifficultyError::OutOfRange(i64::from(level)))
        }
    }

    /// The raw level, 1..=10
    #[inline]
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Maximum edit distance allowed between consecutive chain words
    ///
    /// Level 1 allows distance 10; level 10 allows only distance 1.
    #[inline]
    #[must_use]
    pub const fn threshold(self) -> usize {
        11 - self.0 as usize
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let level: i64 = trimmed
            .parse()
            .map_err(|_| DifficultyError::InvalidFormat(trimmed.to_string()))?;
        if (1..=10).contains(&level) {
            Ok(Self(level as u8))
        } else {
            Err(DifficultyError::OutOfRange(level))
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
