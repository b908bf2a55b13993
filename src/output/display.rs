//! Display functions for session state and command results

use super::formatters::chain_display;
use crate::commands::{AnalysisResult, SimulateResult};
use crate::core::Difficulty;
use crate::session::{GameSession, Mode};
use colored::Colorize;

/// Render the canonical display string for a session
///
/// Shape (relied on by downstream consumers): the feedback message; then,
/// once the game has started, a `Difficulty:` line, a `Score:` line, and a
/// `Guessed so far:` line with the chain most-recent-first once at least one
/// move was accepted. The shell appends its own input echo.
#[must_use]
pub fn session_view(session: &GameSession) -> String {
    if session.mode() == Mode::SelectingDifficulty {
        return format!("{}\n", session.message());
    }

    let difficulty = session
        .difficulty()
        .map_or_else(String::new, |d| d.to_string());

    let mut view = format!(
        "{}\n\nDifficulty: {}\nScore: {}\n",
        session.message(),
        difficulty,
        session.score()
    );
    if session.chain_len() > 1 {
        view.push_str(&format!(
            "Guessed so far: {}\n",
            chain_display(session.chain())
        ));
    }
    view
}

/// Print the result of analyzing a word pair
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Distance: {} → {} = {}",
        result.a.to_uppercase().bright_yellow().bold(),
        result.b.to_uppercase().bright_yellow().bold(),
        result.distance.to_string().bright_cyan().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for difficulty in Difficulty::ALL {
        let legal = result.legal_at[usize::from(difficulty.level()) - 1];
        let verdict = if legal {
            "✓ legal".green()
        } else {
            "✗ rejected".red()
        };
        println!(
            "  Difficulty {:>2} (threshold {:>2}): {}",
            difficulty.level(),
            difficulty.threshold(),
            verdict
        );
    }

    println!();
    match result.hardest_legal() {
        Some(difficulty) => println!(
            "{}",
            format!("Playable up to difficulty {}", difficulty.level())
                .green()
                .bold()
        ),
        None => println!("{}", "Never a legal move".red().bold()),
    }
    println!();
}

/// Print the result of a self-play simulation
pub fn print_simulate_result(result: &SimulateResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " Self-play: {} games at difficulty {} (threshold {}) ",
        result.games,
        result.difficulty.level(),
        result.difficulty.threshold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n  Average chain:  {}",
        format!("{:.1}", result.average_score).bright_cyan().bold()
    );
    println!("  Longest chain:  {}", result.max_score);
    println!("  Shortest chain: {}", result.min_score);
    println!(
        "  Pool exhausted: {} of {} games",
        result.exhausted, result.games
    );
    println!("  Elapsed:        {:.2}s", result.duration.as_secs_f64());
    println!();
}
