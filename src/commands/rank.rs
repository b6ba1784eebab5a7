//! Power ranking command
//!
//! Scores every dictionary word against the full dictionary as candidate set
//! and reports the strongest openers. This is the offline sweep that vets
//! the fixed opening word the power strategy short-circuits to.

use crate::core::Word;
use crate::solver::{CandidateSet, power_score};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// One ranked word with its power score
#[derive(Debug, Clone)]
pub struct RankEntry {
    pub word: String,
    pub score: f64,
}

/// Rank the dictionary's words by power against the dictionary itself
///
/// Scores are computed in parallel; the returned list is sorted by
/// descending score, ties keeping dictionary order, and truncated to `top`
/// entries.
#[must_use]
pub fn rank_dictionary(dictionary: &[Word], top: usize) -> Vec<RankEntry> {
    let candidates = CandidateSet::new(dictionary.to_vec());

    let bar = ProgressBar::new(dictionary.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut entries: Vec<RankEntry> = dictionary
        .par_iter()
        .map(|word| {
            let score = power_score(word, &candidates);
            bar.inc(1);
            RankEntry {
                word: word.text().to_string(),
                score,
            }
        })
        .collect();

    bar.finish_and_clear();

    entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    entries.truncate(top);
    entries
}
