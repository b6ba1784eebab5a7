//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackRow, Word};
use colored::Colorize;

/// Format a word as bracketed tiles: `[C] [R] [A] [N] [E]`
#[must_use]
pub fn word_tiles(word: &Word) -> String {
    let tiles: Vec<String> = word
        .letters()
        .iter()
        .map(|&letter| format!("[{}]", letter as char))
        .collect();
    tiles.join(" ")
}

/// Format a guess with its feedback as colored tiles
///
/// Correct letters render green, present-but-misplaced letters yellow, and
/// absent letters dimmed.
#[must_use]
pub fn feedback_tiles(word: &Word, feedback: &FeedbackRow) -> String {
    let tiles: Vec<String> = word
        .letters()
        .iter()
        .zip(feedback.codes())
        .map(|(&letter, &code)| {
            let tile = format!("[{}]", letter as char);
            match code {
                Feedback::Correct => tile.green().bold().to_string(),
                Feedback::PresentWrongPosition => tile.yellow().to_string(),
                Feedback::Absent => tile.bright_black().to_string(),
            }
        })
        .collect();
    tiles.join(" ")
}

/// Create a progress bar string for a 0-100 score
#[must_use]
pub fn score_bar(score: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((score / 100.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_tiles_brackets_each_letter() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word_tiles(&word), "[C] [R] [A] [N] [E]");
    }

    #[test]
    fn feedback_tiles_contains_every_letter() {
        let word = Word::new("crane").unwrap();
        let row = FeedbackRow::parse("CIXXC").unwrap();
        let tiles = feedback_tiles(&word, &row);

        for letter in ["[C]", "[R]", "[A]", "[N]", "[E]"] {
            assert!(tiles.contains(letter), "missing {letter} in {tiles}");
        }
    }

    #[test]
    fn score_bar_empty() {
        assert_eq!(score_bar(0.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn score_bar_full() {
        assert_eq!(score_bar(100.0, 10), "██████████");
    }

    #[test]
    fn score_bar_half() {
        assert_eq!(score_bar(50.0, 10), "█████░░░░░");
    }
}
