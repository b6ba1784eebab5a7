//! Cross-round accumulated letter knowledge

use crate::core::Feedback;
use rustc_hash::{FxHashMap, FxHashSet};

/// Letter knowledge accumulated across every round of one game
///
/// Unlike the per-round constraints, this survives the whole session and is
/// what the exploratory strategies consult when proposing words that are not
/// necessarily possible answers. Letters only ever leave the absent set, and
/// only when later feedback proves them present.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    tried: FxHashSet<u8>,
    present: FxHashSet<u8>,
    correct: FxHashSet<u8>,
    absent: FxHashSet<u8>,
    banned_positions: FxHashMap<u8, FxHashSet<usize>>,
}

impl GameState {
    /// Fresh state for a new game
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one positional feedback signal
    ///
    /// Called once per (letter, position) pair of a round, with the same raw
    /// feedback that produces that round's constraints:
    /// - `Absent` marks the letter absent unless it is already known present
    /// - `Correct` marks it present and correct, clearing any absent marking
    /// - `PresentWrongPosition` marks it present, clears any absent marking,
    ///   and bans this position for the letter
    pub fn record(&mut self, letter: u8, code: Feedback, position: usize) {
        let letter = letter.to_ascii_uppercase();
        self.tried.insert(letter);

        match code {
            Feedback::Absent => {
                if !self.present.contains(&letter) {
                    self.absent.insert(letter);
                }
            }
            Feedback::Correct => {
                self.present.insert(letter);
                self.correct.insert(letter);
                self.absent.remove(&letter);
            }
            Feedback::PresentWrongPosition => {
                self.present.insert(letter);
                self.absent.remove(&letter);
                self.banned_positions
                    .entry(letter)
                    .or_default()
                    .insert(position);
            }
        }
    }

    /// True iff no feedback has been recorded yet
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.tried.is_empty()
            && self.present.is_empty()
            && self.correct.is_empty()
            && self.absent.is_empty()
            && self.banned_positions.is_empty()
    }

    /// The letter has appeared in some guess with feedback
    #[inline]
    #[must_use]
    pub fn is_tried(&self, letter: u8) -> bool {
        self.tried.contains(&letter.to_ascii_uppercase())
    }

    /// The letter is confirmed to exist in the answer
    #[inline]
    #[must_use]
    pub fn is_present(&self, letter: u8) -> bool {
        self.present.contains(&letter.to_ascii_uppercase())
    }

    /// The letter is confirmed correct at some position
    #[inline]
    #[must_use]
    pub fn is_correct(&self, letter: u8) -> bool {
        self.correct.contains(&letter.to_ascii_uppercase())
    }

    /// The letter is confirmed absent from the answer
    #[inline]
    #[must_use]
    pub fn is_absent(&self, letter: u8) -> bool {
        self.absent.contains(&letter.to_ascii_uppercase())
    }

    /// The letter is known to be wrong at this position
    #[must_use]
    pub fn is_banned(&self, letter: u8, position: usize) -> bool {
        self.banned_positions
            .get(&letter.to_ascii_uppercase())
            .is_some_and(|positions| positions.contains(&position))
    }

    /// Number of distinct letters tried so far
    #[must_use]
    pub fn tried_count(&self) -> usize {
        self.tried.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_fresh() {
        let state = GameState::new();
        assert!(state.is_fresh());
        assert_eq!(state.tried_count(), 0);
    }

    #[test]
    fn any_feedback_makes_state_stale() {
        let mut state = GameState::new();
        state.record(b'A', Feedback::Absent, 0);
        assert!(!state.is_fresh());
        assert!(state.is_tried(b'A'));
    }

    #[test]
    fn absent_feedback_marks_letter_absent() {
        let mut state = GameState::new();
        state.record(b'Q', Feedback::Absent, 2);

        assert!(state.is_absent(b'Q'));
        assert!(!state.is_present(b'Q'));
    }

    #[test]
    fn correct_feedback_clears_prior_absent_marking() {
        let mut state = GameState::new();

        // Round one: E reported absent
        state.record(b'E', Feedback::Absent, 1);
        assert!(state.is_absent(b'E'));

        // Round two: E reported correct
        state.record(b'E', Feedback::Correct, 4);
        assert!(!state.is_absent(b'E'));
        assert!(state.is_present(b'E'));
        assert!(state.is_correct(b'E'));
    }

    #[test]
    fn present_feedback_clears_prior_absent_and_bans_position() {
        let mut state = GameState::new();

        state.record(b'S', Feedback::Absent, 3);
        assert!(state.is_absent(b'S'));

        state.record(b'S', Feedback::PresentWrongPosition, 0);
        assert!(!state.is_absent(b'S'));
        assert!(state.is_present(b'S'));
        assert!(state.is_banned(b'S', 0));
        assert!(!state.is_banned(b'S', 1));
    }

    #[test]
    fn absent_never_overrides_known_present() {
        let mut state = GameState::new();

        state.record(b'L', Feedback::PresentWrongPosition, 2);
        assert!(state.is_present(b'L'));

        // A later repeated-letter occurrence comes back absent; the letter
        // stays present.
        state.record(b'L', Feedback::Absent, 4);
        assert!(!state.is_absent(b'L'));
        assert!(state.is_present(b'L'));
    }

    #[test]
    fn banned_positions_accumulate_per_letter() {
        let mut state = GameState::new();
        state.record(b'R', Feedback::PresentWrongPosition, 1);
        state.record(b'R', Feedback::PresentWrongPosition, 3);

        assert!(state.is_banned(b'R', 1));
        assert!(state.is_banned(b'R', 3));
        assert!(!state.is_banned(b'R', 0));
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let mut state = GameState::new();
        state.record(b'a', Feedback::Correct, 0);

        assert!(state.is_correct(b'A'));
        assert!(state.is_correct(b'a'));
    }
}
