//! Power calculation for a single guess
//!
//! Given a guess and the current candidate set, computes the guaranteed
//! (worst-case) percentage of candidates the guess eliminates.

use crate::core::FeedbackRow;
use crate::core::Word;
use crate::solver::{CandidateSet, compiler};

/// Score a guess by its guaranteed elimination percentage
///
/// Enumerates every possible feedback row for the guess. Each row is compiled
/// into constraints (a pure simulation, no game state involved) and applied
/// to the candidate set; the row's elimination count is the number of
/// candidates that fail. Rows that would eliminate the entire set are
/// self-contradictory outcomes and are discarded.
///
/// The score is `100 × min(eliminated) ÷ set size` over the surviving rows:
/// the information gain the guess guarantees even in the adversarial
/// outcome, not its average. Returns 0 when no row survives or the set is
/// empty.
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::{CandidateSet, power_score};
///
/// let candidates = CandidateSet::new(vec![
///     Word::new("crane").unwrap(),
///     Word::new("slate").unwrap(),
/// ]);
///
/// let score = power_score(&Word::new("trace").unwrap(), &candidates);
/// assert!((0.0..=100.0).contains(&score));
/// ```
#[must_use]
pub fn power_score(guess: &Word, candidates: &CandidateSet) -> f64 {
    let original = candidates.len();
    if original == 0 {
        return 0.0;
    }

    let mut min_eliminated: Option<usize> = None;

    for row in FeedbackRow::enumerate() {
        let constraints = compiler::simulate(guess, &row);
        let remaining = candidates.matching_count(&constraints);

        if remaining == 0 {
            // Infeasible outcome: no candidate could produce this feedback.
            continue;
        }

        let eliminated = original - remaining;
        min_eliminated = Some(min_eliminated.map_or(eliminated, |m| m.min(eliminated)));
    }

    min_eliminated.map_or(0.0, |eliminated| {
        100.0 * eliminated as f64 / original as f64
    })
}
