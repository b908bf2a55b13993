//! Simple interactive CLI mode
//!
//! Text-based interactive game without TUI. The loop only ever feeds
//! completed lines to the session and renders from its accessors.

use crate::output::{chain_display, session_view};
use crate::session::{DifficultyOutcome, GameSession, Mode, MoveOutcome};
use crate::suggest::{random_hint, used_words};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(pool: &[String]) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Rock Chain - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Extend the chain with words close to the previous one.");
    println!("A word is accepted when its edit distance to the current word");
    println!("is at least 1 and at most the threshold (11 minus difficulty).\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'hint' for a suggestion\n");

    let mut session = GameSession::new();

    loop {
        match session.mode() {
            Mode::SelectingDifficulty => {
                println!("{}", session_view(&session));
                let input = get_user_input("Difficulty (1-10)")?;
                if is_quit(&input) {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }

                match session.submit_difficulty(&input) {
                    DifficultyOutcome::Selected(difficulty) => {
                        println!(
                            "\n{}\n",
                            format!(
                                "✓ Difficulty {} - words may differ by at most {} edits",
                                difficulty.level(),
                                difficulty.threshold()
                            )
                            .green()
                        );
                    }
                    DifficultyOutcome::Invalid(_) | DifficultyOutcome::NotSelecting => {}
                }
            }

            Mode::Playing => {
                println!("{}", session_view(&session));
                let input = get_user_input("Your answer ('hint', 'new', 'quit')")?;

                match input.to_lowercase().as_str() {
                    "quit" | "q" | "exit" => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    "new" => {
                        session.reset();
                        println!("\n🔄 New game started!\n");
                    }
                    "hint" | "h" => {
                        print_hint(&session, pool);
                    }
                    _ => match session.submit_move(&input) {
                        MoveOutcome::Accepted { distance } => {
                            println!(
                                "\n{}\n",
                                format!("✓ Accepted ({distance} edit(s) away)").green()
                            );
                        }
                        MoveOutcome::Rejected { distance: 0 } => {
                            println!("\n{}\n", "✗ Exact repeats lose".red().bold());
                        }
                        MoveOutcome::Rejected { distance } => {
                            println!(
                                "\n{}\n",
                                format!("✗ Too far ({distance} edit(s) away)").red().bold()
                            );
                        }
                        MoveOutcome::Empty | MoveOutcome::NotPlaying => {}
                    },
                }
            }

            Mode::Over => {
                print_game_over(&session);

                match get_user_input("Play again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" | "new" => {
                        session.reset();
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn print_hint(session: &GameSession, pool: &[String]) {
    let Some(threshold) = session.threshold() else {
        return;
    };
    let exclude = used_words(session.chain());

    match random_hint(pool, session.head(), threshold, &exclude, &mut rand::rng()) {
        Some(word) => println!("\n💡 Try: {}\n", word.bright_yellow().bold()),
        None => println!("\n{}\n", "No hint available at this threshold.".red()),
    }
}

fn print_game_over(session: &GameSession) {
    let score = session.score();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "              🪨  G A M E   O V E R  🪨              "
            .bright_red()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match score {
        0 => ("💀 Ouch!", "Out on the very first word!"),
        1..=4 => ("✓ Warmed up!", "A short chain, but a chain."),
        5..=9 => ("✨ Solid!", "Nice word instincts!"),
        10..=19 => ("💫 Great!", "That chain had legs!"),
        _ => ("🏆 Legendary!", "An epic chain!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Final score: {} {}",
        score.to_string().bright_cyan().bold(),
        if score == 1 { "word" } else { "words" }
    );

    println!("\n  Chain (most recent first):");
    println!("    {}", chain_display(session.chain()).bright_white());

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit")
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
