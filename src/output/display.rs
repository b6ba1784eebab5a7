//! Display functions for command results

use super::formatters::{feedback_tiles, score_bar};
use crate::commands::{RankEntry, SolveOutcome};
use colored::Colorize;

/// Print the result of a self-play solve
pub fn print_solve_outcome(outcome: &SolveOutcome, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", outcome.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in outcome.steps.iter().enumerate() {
        println!(
            "\nRound {}: {}",
            i + 1,
            feedback_tiles(&step.guess, &step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if outcome.solved {
        println!(
            "{}",
            format!("✅ Solved in {} rounds!", outcome.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved in {} rounds", outcome.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print a power ranking table
pub fn print_rank_table(entries: &[RankEntry]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "POWER RANKING".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for (i, entry) in entries.iter().enumerate() {
        let bar = score_bar(entry.score, 30);
        println!(
            "  {:>2}. {} [{}] {}",
            i + 1,
            entry.word.bright_white().bold(),
            bar.green(),
            format!("{:6.2}", entry.score).bright_yellow()
        );
    }
}
