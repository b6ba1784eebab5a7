//! Dictionary loading utilities

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-separated file
///
/// Lines are trimmed; entries that are not exactly five letters are skipped
/// rather than treated as errors, so a dictionary may carry comments or
/// stray blank lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_assist::wordlists::loader::load_from_file;
///
/// let words = load_from_file("dictionary5.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse a newline-separated word list already held in memory
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
