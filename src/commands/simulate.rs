//! Self-play simulation command
//!
//! Measures how far a chain can realistically go at a given difficulty by
//! playing random hints from a word pool until no legal word remains or a
//! turn cap is reached.

use crate::core::Difficulty;
use crate::session::GameSession;
use crate::suggest::{random_hint, used_words};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulateConfig {
    pub games: usize,
    pub difficulty: Difficulty,
    /// Stop a game after this many accepted moves even if words remain
    pub max_turns: usize,
}

/// Result of a simulation run
pub struct SimulateResult {
    pub games: usize,
    pub difficulty: Difficulty,
    pub average_score: f64,
    pub min_score: usize,
    pub max_score: usize,
    /// Games that stopped because the pool had no legal word left
    pub exhausted: usize,
    pub duration: Duration,
}

/// Play `games` self-play games at a fixed difficulty
///
/// Each game starts a fresh session, then repeatedly submits a random legal
/// word from the pool. Hints are always legal by construction, so a game only
/// ends when the pool is exhausted or the turn cap hits.
pub fn run_simulate<R: Rng>(
    config: &SimulateConfig,
    pool: &[String],
    rng: &mut R,
) -> SimulateResult {
    let pb = ProgressBar::new(config.games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_score = 0;
    let mut min_score = usize::MAX;
    let mut max_score = 0;
    let mut exhausted = 0;

    for _ in 0..config.games {
        let mut session = GameSession::new();
        session.submit_difficulty(&config.difficulty.level().to_string());
        let mut exclude = used_words(session.chain());

        while session.score() < config.max_turns {
            let Some(hint) = random_hint(
                pool,
                session.head(),
                config.difficulty.threshold(),
                &exclude,
                rng,
            ) else {
                exhausted += 1;
                break;
            };
            let word = hint.to_string();
            session.submit_move(&word);
            exclude.insert(word.to_lowercase());
        }

        let score = session.score();
        total_score += score;
        min_score = min_score.min(score);
        max_score = max_score.max(score);
        pb.inc(1);
    }

    pb.finish_and_clear();

    SimulateResult {
        games: config.games,
        difficulty: config.difficulty,
        average_score: if config.games == 0 {
            0.0
        } else {
            total_score as f64 / config.games as f64
        },
        min_score: if config.games == 0 { 0 } else { min_score },
        max_score,
        exhausted,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config(games: usize, level: u8, max_turns: usize) -> SimulateConfig {
        SimulateConfig {
            games,
            difficulty: Difficulty::new(level).unwrap(),
            max_turns,
        }
    }

    fn pool(words: &[&str]) -> Vec<String> {
        words.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn exhausts_a_mutually_close_pool() {
        // All four words are 1 edit from "rock" and from each other's heads,
        // so every game plays the whole pool and then runs dry
        let pool = pool(&["sock", "dock", "lock", "mock"]);
        let mut rng = StdRng::seed_from_u64(42);

        let result = run_simulate(&config(10, 5, 100), &pool, &mut rng);

        assert_eq!(result.games, 10);
        assert_eq!(result.exhausted, 10);
        assert!((result.average_score - 4.0).abs() < f64::EPSILON);
        assert_eq!(result.min_score, 4);
        assert_eq!(result.max_score, 4);
    }

    #[test]
    fn turn_cap_stops_games_early() {
        let pool = pool(&["sock", "dock", "lock", "mock"]);
        let mut rng = StdRng::seed_from_u64(42);

        let result = run_simulate(&config(5, 5, 2), &pool, &mut rng);

        assert_eq!(result.exhausted, 0);
        assert_eq!(result.min_score, 2);
        assert_eq!(result.max_score, 2);
    }

    #[test]
    fn hostile_pool_scores_zero() {
        // Nothing within threshold 1 of "rock"
        let pool = pool(&["paper", "scissors"]);
        let mut rng = StdRng::seed_from_u64(42);

        let result = run_simulate(&config(3, 10, 100), &pool, &mut rng);

        assert_eq!(result.exhausted, 3);
        assert!((result.average_score).abs() < f64::EPSILON);
        assert_eq!(result.max_score, 0);
    }

    #[test]
    fn zero_games_yields_zero_stats() {
        let pool = pool(&["sock"]);
        let mut rng = StdRng::seed_from_u64(42);

        let result = run_simulate(&config(0, 5, 100), &pool, &mut rng);

        assert_eq!(result.games, 0);
        assert!((result.average_score).abs() < f64::EPSILON);
        assert_eq!(result.min_score, 0);
        assert_eq!(result.max_score, 0);
    }

    #[test]
    fn average_sits_between_min_and_max() {
        let pool = pool(&["sock", "sick", "silk", "stock", "stick"]);
        let mut rng = StdRng::seed_from_u64(1);

        let result = run_simulate(&config(20, 8, 100), &pool, &mut rng);

        assert!(result.average_score >= result.min_score as f64);
        assert!(result.average_score <= result.max_score as f64);
    }
}
