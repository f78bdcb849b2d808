//! Simple interactive CLI mode
//!
//! Text-based hangman without the TUI

use super::GameSettings;
use crate::engine::{Dictionary, RoundEngine, RoundStatus};
use crate::output::formatters::{guesses_bar, plural, spaced_pattern};
use crate::output::print_guess_report;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// With `verbose` set, every guess also prints the family table and the
/// number of words still in play.
///
/// # Errors
///
/// Returns an error on I/O failure reading input or if the settings do not fit
/// the dictionary.
pub fn run_simple(dictionary: &Dictionary, settings: GameSettings, verbose: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Evil Hangman - Text Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'm thinking of a word. Probably. Guess one letter at a time.");
    println!("Commands: 'quit' to exit, 'new' for a new round\n");

    let mut engine = RoundEngine::new(dictionary.clone());
    engine
        .begin_round(settings.round_config())
        .context("Cannot start round")?;

    loop {
        let status = engine.status().unwrap_or(RoundStatus::InProgress);

        if status != RoundStatus::InProgress {
            let secret = engine.resolve_secret_word()?;
            print_round_end(status, &secret, engine.guesses_made());

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    engine.begin_round(settings.round_config())?;
                    println!("\n🔄 New round started!\n");
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        print_board(&engine, settings, verbose);

        let input = get_user_input("Your guess")?.to_lowercase();
        match input.as_str() {
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                engine.begin_round(settings.round_config())?;
                println!("\n🔄 New round started!\n");
                continue;
            }
            _ => {}
        }

        let mut chars = input.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            println!("❌ Enter a single letter.\n");
            continue;
        };

        if engine.has_been_guessed(letter) {
            println!("❌ You already guessed {}.\n", letter.to_ascii_uppercase());
            continue;
        }

        match engine.apply_guess(letter) {
            Ok(report) => print_guess_report(&report, verbose),
            Err(e) => println!("❌ {e}\n"),
        }
    }
}

fn print_board(engine: &RoundEngine, settings: GameSettings, verbose: bool) {
    let Some(pattern) = engine.pattern() else {
        return;
    };

    println!("────────────────────────────────────────────────────────────");
    println!("   {}", spaced_pattern(pattern).bright_white().bold());
    println!(
        "   Guesses left: [{}] {}",
        guesses_bar(engine.guesses_remaining(), settings.max_wrong_guesses, 20).yellow(),
        engine.guesses_remaining()
    );
    println!("   Guessed:      {}", engine.guessed_letters_display());
    if verbose {
        println!(
            "   {}",
            plural(engine.candidate_count(), "word", "words").bright_black()
        );
    }
    println!("────────────────────────────────────────────────────────────");
}

fn print_round_end(status: RoundStatus, secret: &str, guesses_made: usize) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    if status == RoundStatus::Won {
        println!(
            "{}",
            "    🎉  Y O U   B E A T   T H E   E N G I N E !  🎉    "
                .bright_green()
                .bold()
        );
        println!(
            "\n  The word was {} and you needed {}.",
            secret.to_uppercase().bright_white().bold(),
            plural(guesses_made, "guess", "guesses")
        );
    } else {
        println!("{}", "    💀  O U T   O F   G U E S S E S  💀    ".red().bold());
        println!(
            "\n  The word was {}.",
            secret.to_uppercase().bright_white().bold()
        );
    }
    println!("{}\n", "═".repeat(70).bright_cyan());
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read input")?;

    if read == 0 {
        anyhow::bail!("Input closed");
    }

    Ok(input.trim().to_string())
}
