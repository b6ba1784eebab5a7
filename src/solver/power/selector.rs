//! Power-based guess selection over a pool
//!
//! Scores every pooled word and keeps the strict maximum.

use super::calculator::power_score;
use crate::core::Word;
use crate::solver::CandidateSet;
use rayon::prelude::*;

/// Select the pooled word with the greatest power score
///
/// Scoring is parallelized per pooled word; the reduction is sequential in
/// pool order so that ties go to the first-seen word (only a strictly
/// greater score displaces the current best). Returns `None` for an empty
/// pool.
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::{CandidateSet, select_most_powerful};
///
/// let pool = vec![Word::new("trace").unwrap(), Word::new("musty").unwrap()];
/// let pool_refs: Vec<&Word> = pool.iter().collect();
/// let candidates = CandidateSet::new(vec![
///     Word::new("crane").unwrap(),
///     Word::new("grace").unwrap(),
/// ]);
///
/// let (best, score) = select_most_powerful(&pool_refs, &candidates).unwrap();
/// assert_eq!(best.text(), "TRACE");
/// assert!(score > 0.0);
/// ```
#[must_use]
pub fn select_most_powerful<'a>(
    pool: &[&'a Word],
    candidates: &CandidateSet,
) -> Option<(&'a Word, f64)> {
    let scores: Vec<f64> = pool
        .par_iter()
        .map(|guess| power_score(guess, candidates))
        .collect();

    let mut best: Option<(&'a Word, f64)> = None;
    for (&word, score) in pool.iter().zip(scores) {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((word, score)),
        }
    }

    best
}
