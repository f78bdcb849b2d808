//! Display functions for command results

use super::formatters::{create_progress_bar, plural, spaced_pattern};
use crate::commands::{AnalysisResult, SimulationResult};
use crate::core::Pattern;
use crate::engine::{GuessReport, RoundStatus};
use colored::Colorize;
use std::collections::BTreeMap;

/// Families shown before the table is cut short
const MAX_FAMILY_ROWS: usize = 12;

/// Print a family table, marking the kept family
pub fn print_families(families: &BTreeMap<Pattern, usize>, selected: &Pattern) {
    let largest = families.values().copied().max().unwrap_or(0);

    let mut rows: Vec<(&Pattern, usize)> = families.iter().map(|(p, &n)| (p, n)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    for (pattern, size) in rows.iter().take(MAX_FAMILY_ROWS) {
        let bar = create_progress_bar(*size as f64, largest as f64, 20);
        let line = format!("{:<14} {bar} {size:>5}", pattern.as_str());
        if *pattern == selected {
            println!("  {} {}", "▶".bright_green(), line.bright_green().bold());
        } else {
            println!("    {}", line.bright_black());
        }
    }

    if rows.len() > MAX_FAMILY_ROWS {
        println!(
            "    {}",
            format!("… {} more", plural(rows.len() - MAX_FAMILY_ROWS, "family", "families"))
                .bright_black()
        );
    }
}

/// Print what a guess did
pub fn print_guess_report(report: &GuessReport, verbose: bool) {
    let letter = report.letter.to_ascii_uppercase().to_string();
    if report.hit {
        println!("\n✅ {} is in the word!", letter.green().bold());
    } else {
        println!("\n❌ No {} in the word.", letter.red().bold());
    }

    if verbose {
        println!(
            "   {} considered{}",
            plural(report.family_sizes.len(), "family", "families"),
            if report.eased { " (easing turn)" } else { "" }
        );
        print_families(&report.family_sizes, &report.selected);
    }
}

/// Print the result of a guess-sequence analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} letters, {} difficulty, {} ",
        "FAMILY ANALYSIS:".bright_cyan().bold(),
        result.settings.word_length.to_string().bright_yellow().bold(),
        result.settings.difficulty.to_string().bright_yellow(),
        plural(result.settings.max_wrong_guesses, "guess", "guesses")
    );
    println!("{}", "═".repeat(60).cyan());
    println!("\nStarting candidates: {}", result.initial_candidates);

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nGuess {}: {}  {} → {}{}",
            i + 1,
            step.letter.to_ascii_uppercase().to_string().bright_white().bold(),
            step.candidates_before,
            step.candidates_after,
            if step.eased {
                " (easing turn)".yellow().to_string()
            } else {
                String::new()
            }
        );
        print_families(&step.families, &step.selected);
        println!("  Guesses left: {}", step.guesses_remaining);
    }

    println!("\nPattern: {}", spaced_pattern(&result.final_pattern).bright_white().bold());
    let status = match result.status {
        RoundStatus::InProgress => "in progress".normal(),
        RoundStatus::Won => "won".green().bold(),
        RoundStatus::Lost => "lost".red().bold(),
    };
    println!("Status:  {status}");

    if result.remaining.len() <= 20 {
        println!("Remaining: {}", result.remaining.join(", "));
    } else {
        println!(
            "Remaining: {}, … ({} total)",
            result.remaining[..20].join(", "),
            result.remaining.len()
        );
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Guesser win rate:".bright_cyan().bold());
    for summary in &result.summaries {
        let pct = summary.win_rate() * 100.0;
        let bar = create_progress_bar(pct, 100.0, 30);
        println!(
            "   {:<7} [{}] {} ({} / {})",
            summary.difficulty.to_string(),
            bar.green(),
            format!("{pct:5.1}%").bright_yellow(),
            summary.wins,
            summary.rounds
        );
        println!(
            "           avg {:.1} guesses, {:.1} candidates left",
            summary.average_guesses, summary.average_candidates_left
        );
    }

    println!("\n📈 {}", "Rounds:".bright_cyan().bold());
    for outcome in &result.outcomes {
        let verdict = if outcome.won {
            "won ".green()
        } else {
            "lost".red()
        };
        println!(
            "   {:<7} len {:>2}  {}  {:<26} secret {}",
            outcome.difficulty.to_string(),
            outcome.word_length,
            verdict,
            outcome.guesses,
            outcome.secret.bright_white()
        );
    }

    println!("\n   Time taken:      {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:   {:.1}", result.rounds_per_second);
}

/// Print the dictionary's word-length histogram
pub fn print_length_histogram(histogram: &BTreeMap<usize, usize>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "WORD LENGTHS".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    let largest = histogram.values().copied().max().unwrap_or(0);
    for (length, count) in histogram {
        let bar = create_progress_bar(*count as f64, largest as f64, 40);
        println!("   {length:>2}: {} {count:>6}", bar.green());
    }
}
