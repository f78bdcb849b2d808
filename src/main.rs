//! Evil Hangman - CLI
//!
//! Adversarial hangman with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{GameSettings, SimulationConfig, analyze_guesses, run_simple, run_simulation},
    core::Difficulty,
    engine::Dictionary,
    logging::{init_file_logging, init_logging},
    output::{print_analysis_result, print_length_histogram, print_simulation_result},
    wordlists::loader::{embedded_dictionary, load_from_file},
};
use std::path::Path;

/// Log file used by the TUI when `--debug` is set
const TUI_LOG_FILE: &str = "evil_hangman.log";

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman against an opponent that keeps changing its mind about the word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Length of the secret word
    #[arg(short, long, global = true, default_value = "5")]
    length: usize,

    /// Number of guesses allowed per round
    #[arg(short, long, global = true, default_value = "12")]
    guesses: usize,

    /// Difficulty: easy, medium (default) or hard
    #[arg(short, long, global = true, default_value = "medium")]
    difficulty: Difficulty,

    /// Log engine decisions (to stderr, or to evil_hangman.log in the TUI)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (text prompts, no TUI)
    Simple {
        /// Show the family table after every guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Replay a sequence of guesses and show every family split
    Analyze {
        /// Letters to guess, in order (e.g. "eatr")
        letters: String,
    },

    /// Play automated rounds at every difficulty and report win rates
    Simulate {
        /// Shortest word length to simulate
        #[arg(long, default_value = "4")]
        min_length: usize,

        /// Longest word length to simulate
        #[arg(long, default_value = "8")]
        max_length: usize,
    },

    /// Show how many words of each length the dictionary has
    Lengths,
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => embedded_dictionary().context("Embedded dictionary is invalid"),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read wordlist {path}"))?;
            Dictionary::new(words).with_context(|| format!("Invalid wordlist {path}"))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it only logs to a file and only on request
    if matches!(command, Commands::Play) {
        if cli.debug {
            init_file_logging(true, Path::new(TUI_LOG_FILE))?;
        }
    } else {
        init_logging(cli.debug)?;
    }

    let dictionary = load_dictionary(&cli.wordlist)?;
    let settings = GameSettings::new(cli.length, cli.guesses, cli.difficulty);

    match command {
        Commands::Play => run_play_command(dictionary, settings),
        Commands::Simple { verbose } => run_simple(&dictionary, settings, verbose),
        Commands::Analyze { letters } => {
            let result = analyze_guesses(&dictionary, settings, &letters)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Simulate {
            min_length,
            max_length,
        } => {
            let config = SimulationConfig::new(min_length, max_length, cli.guesses);
            println!(
                "Simulating lengths {min_length}-{max_length} with {} guesses each...",
                cli.guesses
            );
            let result = run_simulation(&dictionary, &config, true)?;
            print_simulation_result(&result);
            Ok(())
        }
        Commands::Lengths => {
            print_length_histogram(&dictionary.length_histogram());
            Ok(())
        }
    }
}

fn run_play_command(dictionary: Dictionary, settings: GameSettings) -> Result<()> {
    use evil_hangman::interactive::{App, run_tui};

    let app = App::new(dictionary, settings).context("Cannot start round")?;
    run_tui(app)
}
