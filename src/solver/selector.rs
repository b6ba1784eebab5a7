//! Guess selection strategies
//!
//! Three ways to produce the next suggested guess:
//! - **Exploit** draws from the words still logically possible
//! - **Explore** probes fresh letters from the full dictionary
//! - **MaxPower** maximizes guaranteed worst-case elimination

use super::power::select_most_powerful;
use super::{CandidateSet, GameState};
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Fixed opening suggestion for the power strategy
///
/// The opening distribution is identical every game, so the first power word
/// is pre-vetted offline (see the `rank` command) instead of re-running the
/// full 243-row scan over the whole dictionary.
pub const OPENING_WORD: &str = "SALET";

/// Explore pools smaller than this are considered too thin for power scoring
const THIN_POOL: usize = 10;

/// Candidate sets smaller than this trigger pool broadening
const SMALL_CANDIDATE_SET: usize = 20;

/// Minimum distinct letters a broadening word must share with the candidates
const MIN_SHARED_LETTERS: usize = 2;

/// A guess-generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Random pick among the remaining candidates, preferring unique letters
    Exploit,
    /// Random dictionary word made entirely of untried, unbanned letters
    Explore,
    /// The pooled word with the greatest worst-case elimination
    MaxPower,
}

impl Strategy {
    /// Create a strategy from a name string
    ///
    /// Supported names: "exploit", "explore", "power".
    /// Defaults to `MaxPower` if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "exploit" => Self::Exploit,
            "explore" => Self::Explore,
            _ => Self::MaxPower,
        }
    }
}

/// Produces guess suggestions from the dictionary, the candidate set, and the
/// accumulated game state
pub struct GuessSelector<'a> {
    dictionary: &'a [Word],
}

impl<'a> GuessSelector<'a> {
    /// Create a selector over the session's full dictionary
    ///
    /// The dictionary is the original word list, not the shrunk candidate
    /// set: exploratory guesses need not be possible answers.
    #[must_use]
    pub const fn new(dictionary: &'a [Word]) -> Self {
        Self { dictionary }
    }

    /// Suggest the next guess under the given strategy
    ///
    /// Returns `None` when the strategy has no word to offer: an empty
    /// candidate set for `Exploit`, an exhausted probe pool for `Explore`
    /// or `MaxPower`. Callers may fall back to another strategy; no state
    /// is modified either way.
    pub fn suggest<R: Rng + ?Sized>(
        &self,
        strategy: Strategy,
        candidates: &CandidateSet,
        state: &GameState,
        rng: &mut R,
    ) -> Option<Word> {
        match strategy {
            Strategy::Exploit => candidates.pick_random(true, rng).cloned(),
            Strategy::Explore => self.explore(state, rng),
            Strategy::MaxPower => self.max_power(candidates, state),
        }
    }

    /// Pick a random dictionary word that probes only fresh letters
    fn explore<R: Rng + ?Sized>(&self, state: &GameState, rng: &mut R) -> Option<Word> {
        let pool = self.explore_pool(state);
        pool.choose(rng).map(|&word| word.clone())
    }

    /// Dictionary words usable as information-gathering probes
    ///
    /// A word qualifies when its letters are all distinct and every letter is
    /// unconfirmed: not already placed, not known absent, not tried without
    /// being confirmed present, and not banned at the position it occupies.
    fn explore_pool(&self, state: &GameState) -> Vec<&'a Word> {
        self.dictionary
            .iter()
            .filter(|word| {
                if !word.has_unique_letters() {
                    return false;
                }

                word.letters().iter().enumerate().all(|(position, &letter)| {
                    !state.is_correct(letter)
                        && !state.is_absent(letter)
                        && !(state.is_tried(letter) && !state.is_present(letter))
                        && !state.is_banned(letter, position)
                })
            })
            .collect()
    }

    /// Select the guess with the greatest guaranteed elimination
    fn max_power(&self, candidates: &CandidateSet, state: &GameState) -> Option<Word> {
        if state.is_fresh() {
            return Word::new(OPENING_WORD).ok();
        }

        let mut pool = self.explore_pool(state);

        // A thin probe pool against a small candidate set leaves too little
        // to score; widen with words that overlap the candidates' letters.
        if pool.len() < THIN_POOL && candidates.len() < SMALL_CANDIDATE_SET {
            let letters_in_play = candidate_letters(candidates);
            let pooled: FxHashSet<&str> = pool.iter().map(|w| w.text()).collect();

            pool.extend(self.dictionary.iter().filter(|word| {
                !pooled.contains(word.text())
                    && shared_distinct_letters(word, &letters_in_play) >= MIN_SHARED_LETTERS
            }));
        }

        select_most_powerful(&pool, candidates).map(|(word, _)| word.clone())
    }
}

/// Union of the letters appearing anywhere in the candidate set
fn candidate_letters(candidates: &CandidateSet) -> FxHashSet<u8> {
    candidates
        .words()
        .iter()
        .flat_map(|word| word.letters().iter().copied())
        .collect()
}

/// Count the distinct letters of `word` that appear in `letters`
fn shared_distinct_letters(word: &Word, letters: &FxHashSet<u8>) -> usize {
    let mut seen = FxHashSet::default();
    word.letters()
        .iter()
        .filter(|&&letter| letters.contains(&letter) && seen.insert(letter))
        .count()
}
