//! One game of the assistant
//!
//! A session owns the dictionary, the shrinking candidate set, and the
//! accumulated game state, and drives them through rounds of feedback.

use super::{CandidateSet, GameState, GuessSelector, Strategy, compiler};
use crate::core::{Constraint, FeedbackRow, Word};
use rand::Rng;

/// What one round of feedback did to the session
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    /// The ordered, de-duplicated constraints the feedback compiled to
    pub constraints: Vec<Constraint>,
    /// The guess matched the answer exactly
    pub solved: bool,
    /// Candidates remaining after reduction
    pub remaining: usize,
}

/// A single game: dictionary, candidates, and accumulated knowledge
///
/// The candidate set and game state are owned here and mutated only through
/// [`apply_feedback`](Self::apply_feedback); suggestion never modifies
/// anything, so a failed or empty suggestion leaves the session exactly as
/// it was.
pub struct Session {
    dictionary: Vec<Word>,
    candidates: CandidateSet,
    state: GameState,
}

impl Session {
    /// Start a session over a dictionary
    #[must_use]
    pub fn new(dictionary: Vec<Word>) -> Self {
        let candidates = CandidateSet::new(dictionary.clone());
        Self {
            dictionary,
            candidates,
            state: GameState::new(),
        }
    }

    /// Fold one round of feedback into the session
    ///
    /// Compiles the feedback against the guess, updates the game state,
    /// reduces the candidate set, and reports what happened. An empty
    /// post-reduction set is a valid outcome: no dictionary word fits the
    /// accumulated feedback.
    pub fn apply_feedback(&mut self, guess: &Word, feedback: &FeedbackRow) -> RoundOutcome {
        let round = compiler::compile(guess, feedback, &mut self.state);
        self.candidates.reduce(round.constraints());

        RoundOutcome {
            solved: round.is_solved(),
            remaining: self.candidates.len(),
            constraints: round.into_constraints(),
        }
    }

    /// Suggest the next guess under a strategy
    ///
    /// Pure with respect to session state; `None` means the strategy found
    /// nothing and the caller may try another.
    pub fn suggest<R: Rng + ?Sized>(&self, strategy: Strategy, rng: &mut R) -> Option<Word> {
        GuessSelector::new(&self.dictionary).suggest(strategy, &self.candidates, &self.state, rng)
    }

    /// The remaining candidates
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// The accumulated letter knowledge
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The full original dictionary
    #[inline]
    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    /// Discard all accumulated knowledge and start a new game
    pub fn reset(&mut self) {
        self.candidates = CandidateSet::new(self.dictionary.clone());
        self.state = GameState::new();
    }
}
