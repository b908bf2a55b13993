//! The chain-extension state machine
//!
//! Every game starts from "rock". The player first picks a difficulty, then
//! extends the chain one word at a time; a word is accepted when its edit
//! distance to the current head is positive and at most the threshold. The
//! first rejection ends the game: the session locks and further moves are
//! no-ops until `reset`.

use crate::core::{Difficulty, DifficultyError, distance};
use std::collections::VecDeque;

/// The word every chain starts from
pub const STARTING_WORD: &str = "rock";

const WELCOME_MESSAGE: &str = "🪨 Welcome to Rock Chain!\n\nSelect a difficulty level (1-10), with 1 being easiest and 10 hardest:";
const RETRY_MESSAGE: &str = "Please enter a valid number between 1 and 10:";

/// Which input interpretation is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Waiting for a difficulty level
    SelectingDifficulty,
    /// Accepting chain moves
    Playing,
    /// A move was rejected; the session is locked until reset
    Over,
}

/// Outcome of a difficulty submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DifficultyOutcome {
    /// Difficulty accepted; the session is now playing
    Selected(Difficulty),
    /// Input did not parse to a level in 1..=10; still selecting
    Invalid(DifficultyError),
    /// Called outside `SelectingDifficulty`; nothing changed
    NotSelecting,
}

/// Outcome of a move submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Word accepted as the new chain head
    Accepted { distance: usize },
    /// Word rejected; the session is now over
    Rejected { distance: usize },
    /// Input was blank after trimming; nothing changed
    Empty,
    /// Called outside `Playing`; nothing changed
    NotPlaying,
}

/// All mutable game state, owned exclusively by the calling shell
#[derive(Debug, Clone)]
pub struct GameSession {
    mode: Mode,
    difficulty: Option<Difficulty>,
    // Head (most recently accepted word) is at the front; never empty.
    chain: VecDeque<String>,
    score: usize,
    message: String,
}

impl GameSession {
    /// Create a fresh session waiting for a difficulty level
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: Mode::SelectingDifficulty,
            difficulty: None,
            chain: VecDeque::from([STARTING_WORD.to_string()]),
            score: 0,
            message: WELCOME_MESSAGE.to_string(),
        }
    }

    /// Submit a difficulty line
    ///
    /// On success the session transitions irrevocably to `Playing`; on a
    /// parse or range failure it stays in `SelectingDifficulty` with a retry
    /// prompt as its message.
    pub fn submit_difficulty(&mut self, raw: &str) -> DifficultyOutcome {
        if self.mode != Mode::SelectingDifficulty {
            return DifficultyOutcome::NotSelecting;
        }

        match raw.trim().parse::<Difficulty>() {
            Ok(difficulty) => {
                self.difficulty = Some(difficulty);
                self.mode = Mode::Playing;
                self.message = format!("What beats {STARTING_WORD} 🪨?");
                DifficultyOutcome::Selected(difficulty)
            }
            Err(err) => {
                self.message = RETRY_MESSAGE.to_string();
                DifficultyOutcome::Invalid(err)
            }
        }
    }

    /// Submit a move line
    ///
    /// A candidate is accepted when its edit distance to the current head is
    /// greater than zero (exact repeats lose) and at most the threshold.
    /// Rejection freezes chain and score and locks the session.
    pub fn submit_move(&mut self, raw: &str) -> MoveOutcome {
        let (Mode::Playing, Some(difficulty)) = (self.mode, self.difficulty) else {
            return MoveOutcome::NotPlaying;
        };

        let candidate = raw.trim();
        if candidate.is_empty() {
            return MoveOutcome::Empty;
        }

        let previous = self.head().to_string();
        let d = distance(&previous, candidate);

        if d > 0 && d <= difficulty.threshold() {
            self.chain.push_front(candidate.to_string());
            self.score += 1;
            self.message =
                format!("Good! \"{candidate}\" beats \"{previous}\". What beats \"{candidate}\"?");
            MoveOutcome::Accepted { distance: d }
        } else {
            self.mode = Mode::Over;
            self.message = format!(
                "Invalid answer! \"{candidate}\" doesn't meet the closeness requirement to \"{previous}\". Final score: {}. Press n for a new game or q to quit.",
                self.score
            );
            MoveOutcome::Rejected { distance: d }
        }
    }

    /// Start over: fresh chain, zero score, back to difficulty selection
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Current mode
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Chosen difficulty, if the game has started
    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Allowed edit distance, if the game has started
    #[inline]
    #[must_use]
    pub fn threshold(&self) -> Option<usize> {
        self.difficulty.map(Difficulty::threshold)
    }

    /// The most recently accepted word
    #[must_use]
    pub fn head(&self) -> &str {
        self.chain.front().map_or(STARTING_WORD, String::as_str)
    }

    /// Chain words, most recent first
    pub fn chain(&self) -> impl Iterator<Item = &str> {
        self.chain.iter().map(String::as_str)
    }

    /// Number of words in the chain (starting word included)
    #[inline]
    #[must_use]
    pub fn chain_len(&self) -> usize {
        self.chain.len()
    }

    /// Count of accepted moves
    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// The latest prompt or feedback message
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the session is locked after a rejection
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.mode == Mode::Over
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_session(level: &str) -> GameSession {
        let mut session = GameSession::new();
        assert!(matches!(
            session.submit_difficulty(level),
            DifficultyOutcome::Selected(_)
        ));
        session
    }

    #[test]
    fn new_session_starts_selecting_with_rock_chain() {
        let session = GameSession::new();
        assert_eq!(session.mode(), Mode::SelectingDifficulty);
        assert_eq!(session.head(), "rock");
        assert_eq!(session.chain_len(), 1);
        assert_eq!(session.score(), 0);
        assert!(session.difficulty().is_none());
        assert!(session.message().contains("difficulty"));
    }

    #[test]
    fn invalid_difficulty_inputs_keep_selecting() {
        for bad in ["0", "11", "abc", "", "  ", "3.5"] {
            let mut session = GameSession::new();
            assert!(
                matches!(session.submit_difficulty(bad), DifficultyOutcome::Invalid(_)),
                "expected rejection for {bad:?}"
            );
            assert_eq!(session.mode(), Mode::SelectingDifficulty);
            assert!(session.difficulty().is_none());
            assert_eq!(session.message(), RETRY_MESSAGE);
        }
    }

    #[test]
    fn valid_difficulty_transitions_to_playing() {
        let session = playing_session("5");
        assert_eq!(session.mode(), Mode::Playing);
        assert_eq!(session.threshold(), Some(6));
        assert_eq!(session.head(), "rock");
        assert_eq!(session.score(), 0);
        assert!(session.message().contains("What beats rock"));
    }

    #[test]
    fn difficulty_is_immutable_once_playing() {
        let mut session = playing_session("5");
        assert_eq!(
            session.submit_difficulty("9"),
            DifficultyOutcome::NotSelecting
        );
        assert_eq!(session.threshold(), Some(6));
    }

    #[test]
    fn close_word_is_accepted() {
        let mut session = playing_session("5");
        let outcome = session.submit_move("sock");
        assert_eq!(outcome, MoveOutcome::Accepted { distance: 1 });
        assert_eq!(session.head(), "sock");
        assert_eq!(session.chain_len(), 2);
        assert_eq!(session.score(), 1);
        assert!(session.message().contains("sock"));
        assert!(session.message().contains("rock"));
    }

    #[test]
    fn chain_is_most_recent_first() {
        let mut session = playing_session("1");
        session.submit_move("sock");
        session.submit_move("sack");
        let chain: Vec<&str> = session.chain().collect();
        assert_eq!(chain, ["sack", "sock", "rock"]);
    }

    #[test]
    fn far_word_is_rejected_and_locks() {
        let mut session = playing_session("10");
        let outcome = session.submit_move("paper");
        assert!(matches!(outcome, MoveOutcome::Rejected { distance } if distance > 1));
        assert_eq!(session.mode(), Mode::Over);
        assert!(session.is_over());
        assert_eq!(session.head(), "rock");
        assert_eq!(session.score(), 0);
        assert!(session.message().contains("paper"));
        assert!(session.message().contains("Final score: 0"));
    }

    #[test]
    fn exact_repeat_is_rejected_at_any_threshold() {
        let mut session = playing_session("1");
        let outcome = session.submit_move("rock");
        assert_eq!(outcome, MoveOutcome::Rejected { distance: 0 });
        assert_eq!(session.score(), 0);
        assert_eq!(session.chain_len(), 1);
    }

    #[test]
    fn repeat_differing_only_in_case_is_rejected() {
        let mut session = playing_session("1");
        let outcome = session.submit_move("ROCK");
        assert_eq!(outcome, MoveOutcome::Rejected { distance: 0 });
    }

    #[test]
    fn acceptance_is_case_insensitive() {
        let mut session = playing_session("5");
        let outcome = session.submit_move("SOCK");
        assert_eq!(outcome, MoveOutcome::Accepted { distance: 1 });
        // Stored as typed
        assert_eq!(session.head(), "SOCK");
    }

    #[test]
    fn empty_input_is_a_strict_noop() {
        let mut session = playing_session("5");
        let before = session.message().to_string();

        assert_eq!(session.submit_move(""), MoveOutcome::Empty);
        assert_eq!(session.submit_move("   "), MoveOutcome::Empty);

        assert_eq!(session.mode(), Mode::Playing);
        assert_eq!(session.chain_len(), 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.message(), before);
    }

    #[test]
    fn moves_before_difficulty_are_noops() {
        let mut session = GameSession::new();
        assert_eq!(session.submit_move("sock"), MoveOutcome::NotPlaying);
        assert_eq!(session.chain_len(), 1);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn rejection_locks_out_further_moves() {
        let mut session = playing_session("10");
        session.submit_move("paper");
        let message = session.message().to_string();

        // Even a word that would have been legal is refused now
        assert_eq!(session.submit_move("sock"), MoveOutcome::NotPlaying);
        assert_eq!(session.head(), "rock");
        assert_eq!(session.score(), 0);
        assert_eq!(session.message(), message);
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        // Threshold 5 at difficulty 6; "rock" -> "paper" is exactly 5 edits
        let mut session = playing_session("6");
        assert_eq!(session.submit_move("paper"), MoveOutcome::Accepted { distance: 5 });

        // One stricter and the same move loses
        let mut session = playing_session("7");
        assert_eq!(session.submit_move("paper"), MoveOutcome::Rejected { distance: 5 });
    }

    #[test]
    fn score_tracks_chain_growth() {
        let mut session = playing_session("3");
        for (i, word) in ["sock", "sick", "silk"].iter().enumerate() {
            assert!(matches!(
                session.submit_move(word),
                MoveOutcome::Accepted { .. }
            ));
            assert_eq!(session.score(), i + 1);
            assert_eq!(session.chain_len(), session.score() + 1);
        }
    }

    #[test]
    fn reset_restores_a_fresh_session() {
        let mut session = playing_session("10");
        session.submit_move("paper");
        assert!(session.is_over());

        session.reset();
        assert_eq!(session.mode(), Mode::SelectingDifficulty);
        assert_eq!(session.head(), "rock");
        assert_eq!(session.chain_len(), 1);
        assert_eq!(session.score(), 0);
        assert!(session.difficulty().is_none());
    }
}
