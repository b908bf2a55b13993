//! Word-pair analysis command
//!
//! Computes the edit distance between two words and reports at which
//! difficulty levels the pair would be a legal move.

use crate::core::{Difficulty, distance};

/// Result of analyzing a word pair
pub struct AnalysisResult {
    pub a: String,
    pub b: String,
    pub distance: usize,
    /// Legality per difficulty level; index 0 is level 1
    pub legal_at: [bool; 10],
}

impl AnalysisResult {
    /// The hardest difficulty at which the pair is still legal, if any
    #[must_use]
    pub fn hardest_legal(&self) -> Option<Difficulty> {
        Difficulty::ALL
            .into_iter()
            .rev()
            .find(|d| self.legal_at[usize::from(d.level()) - 1])
    }
}

/// Analyze a word pair against the acceptance rule at every difficulty
#[must_use]
pub fn analyze_pair(a: &str, b: &str) -> AnalysisResult {
    let d = distance(a, b);

    let mut legal_at = [false; 10];
    for (slot, difficulty) in legal_at.iter_mut().zip(Difficulty::ALL) {
        *slot = d > 0 && d <= difficulty.threshold();
    }

    AnalysisResult {
        a: a.to_string(),
        b: b.to_string(),
        distance: d,
        legal_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_pair_is_legal_everywhere() {
        let result = analyze_pair("rock", "sock");
        assert_eq!(result.distance, 1);
        assert!(result.legal_at.iter().all(|&legal| legal));
        assert_eq!(result.hardest_legal().map(Difficulty::level), Some(10));
    }

    #[test]
    fn identical_pair_is_legal_nowhere() {
        let result = analyze_pair("rock", "rock");
        assert_eq!(result.distance, 0);
        assert!(result.legal_at.iter().all(|&legal| !legal));
        assert!(result.hardest_legal().is_none());
    }

    #[test]
    fn far_pair_is_legal_only_at_low_difficulty() {
        // distance("rock", "paper") == 5, so legal while threshold >= 5,
        // i.e. difficulty <= 6
        let result = analyze_pair("rock", "paper");
        assert_eq!(result.distance, 5);
        assert_eq!(result.hardest_legal().map(Difficulty::level), Some(6));
        assert!(result.legal_at[5]); // level 6
        assert!(!result.legal_at[6]); // level 7
    }

    #[test]
    fn analysis_is_case_insensitive() {
        let result = analyze_pair("ROCK", "rock");
        assert_eq!(result.distance, 0);
        assert!(result.hardest_legal().is_none());
    }
}
