//! Rock Chain - CLI
//!
//! Terminal word-association game with TUI and CLI modes. Every move must stay
//! within an edit-distance threshold of the previous word.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rock_chain::{
    commands::{SimulateConfig, analyze_pair, run_simple, run_simulate},
    core::Difficulty,
    output::{print_analysis_result, print_simulate_result},
    wordlists::{WORDS, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "rock_chain",
    about = "Word-association game scored by Levenshtein distance",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist for hints and simulation: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Compute the edit distance between two words
    Distance {
        /// First word
        a: String,

        /// Second word
        b: String,
    },

    /// Self-play simulation measuring chain length at a difficulty
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Difficulty level (1-10)
        #[arg(short, long, default_value = "5")]
        difficulty: u8,

        /// Stop a game after this many accepted moves
        #[arg(short, long, default_value = "200")]
        max_turns: usize,
    },
}

/// Load the word pool based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<String>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load word pool based on -w flag
    let words = load_wordlist(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words),
        Commands::Simple => run_simple(&words).map_err(|e| anyhow::anyhow!(e)),
        Commands::Distance { a, b } => {
            print_analysis_result(&analyze_pair(&a, &b));
            Ok(())
        }
        Commands::Simulate {
            games,
            difficulty,
            max_turns,
        } => run_simulate_command(games, difficulty, max_turns, &words),
    }
}

fn run_play_command(words: &[String]) -> Result<()> {
    use rock_chain::interactive::{App, run_tui};

    let app = App::new(words);
    run_tui(app)
}

fn run_simulate_command(games: usize, difficulty: u8, max_turns: usize, words: &[String]) -> Result<()> {
    let difficulty = Difficulty::new(difficulty)?;

    println!(
        "Running {games} self-play games at difficulty {difficulty} over {} words...",
        words.len()
    );

    let config = SimulateConfig {
        games,
        difficulty,
        max_turns,
    };
    let result = run_simulate(&config, words, &mut rand::rng());
    print_simulate_result(&result);
    Ok(())
}
