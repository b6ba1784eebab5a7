//! The working set of words still consistent with all feedback so far

use crate::core::{Constraint, Word};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Ordered set of dictionary words still consistent with every constraint
/// reduced into it
///
/// Insertion order is preserved for display; the set only ever shrinks.
/// An empty set is a valid terminal state meaning no known word fits the
/// feedback, not a failure.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Create a set from the session's starting dictionary
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Keep only the words that satisfy every supplied constraint
    ///
    /// A pure filter: words failing any constraint are dropped and never
    /// re-added. Reducing with the same constraints twice is a no-op.
    pub fn reduce(&mut self, constraints: &[Constraint]) {
        self.words
            .retain(|word| constraints.iter().all(|c| c.pass(word)));
    }

    /// How many members would survive the supplied constraints
    ///
    /// Non-destructive counterpart of [`reduce`](Self::reduce), used by the
    /// power scorer to evaluate hypothetical feedback without cloning the set.
    #[must_use]
    pub fn matching_count(&self, constraints: &[Constraint]) -> usize {
        self.words
            .iter()
            .filter(|word| constraints.iter().all(|c| c.pass(word)))
            .count()
    }

    /// Pick one member uniformly at random
    ///
    /// With `require_unique_letters` set, the pick is uniform over the
    /// all-distinct-letter members when any exist, and falls back to the
    /// whole set otherwise. Returns `None` only when the set is empty.
    pub fn pick_random<R: Rng + ?Sized>(
        &self,
        require_unique_letters: bool,
        rng: &mut R,
    ) -> Option<&Word> {
        if require_unique_letters {
            let unique: Vec<&Word> = self
                .words
                .iter()
                .filter(|word| word.has_unique_letters())
                .collect();

            if let Some(&word) = unique.choose(rng) {
                return Some(word);
            }
        }

        self.words.choose(rng)
    }

    /// True when no known word is consistent with the feedback so far
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Read-only view of the remaining words, in original order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}
