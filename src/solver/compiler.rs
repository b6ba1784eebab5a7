//! Turns one round's raw feedback into an ordered constraint list
//!
//! Compilation walks the guess positions, emits one constraint per feedback
//! code, sorts by constraint priority, and drops duplicate exclusions. Only
//! `Excluded` constraints can duplicate: a guess with a repeated letter may
//! report `X` for more than one occurrence, while positional constraints are
//! distinguished by their positions even when letters repeat.

use super::GameState;
use crate::core::{Constraint, FeedbackRow, Word};
use rustc_hash::FxHashSet;

/// The constraints produced by one round of feedback
#[derive(Debug, Clone)]
pub struct CompiledRound {
    constraints: Vec<Constraint>,
    solved: bool,
}

impl CompiledRound {
    /// The ordered, de-duplicated constraint list
    #[inline]
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Consume the round, yielding the constraint list
    #[inline]
    #[must_use]
    pub fn into_constraints(self) -> Vec<Constraint> {
        self.constraints
    }

    /// True iff every compiled constraint is `CorrectAt`: the guess was the
    /// answer
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }
}

/// Compile a round of feedback into constraints and fold it into `state`
///
/// Every (letter, position, code) triple is recorded in `state` exactly once,
/// using the same raw feedback the constraints derive from.
pub fn compile(guess: &Word, feedback: &FeedbackRow, state: &mut GameState) -> CompiledRound {
    for (position, &code) in feedback.codes().iter().enumerate() {
        state.record(guess.letter_at(position), code, position);
    }

    let constraints = assemble(guess, feedback);
    let solved = constraints
        .iter()
        .all(|c| matches!(c, Constraint::CorrectAt { .. }));

    CompiledRound { constraints, solved }
}

/// Compile a hypothetical round without touching any game state
///
/// Used by the power scorer to evaluate feedback outcomes that have not
/// actually happened.
#[must_use]
pub fn simulate(guess: &Word, feedback: &FeedbackRow) -> Vec<Constraint> {
    assemble(guess, feedback)
}

/// Emit, order, and de-duplicate one round's constraints
fn assemble(guess: &Word, feedback: &FeedbackRow) -> Vec<Constraint> {
    let mut raw: Vec<Constraint> = feedback
        .codes()
        .iter()
        .enumerate()
        .map(|(position, &code)| Constraint::for_feedback(code, position, guess.letter_at(position)))
        .collect();

    // Stable sort: within a priority, emission (position) order is preserved.
    raw.sort_by_key(Constraint::priority);

    // Drop repeat exclusions of the same letter. Positional constraints are
    // never deduplicated: a CorrectAt and an Excluded for the same letter can
    // legitimately coexist (the letter occurs exactly once, at that position).
    let mut excluded_seen: FxHashSet<u8> = FxHashSet::default();
    let mut constraints = Vec::with_capacity(raw.len());

    for constraint in raw {
        if let Constraint::Excluded { letter } = constraint {
            if !excluded_seen.insert(letter) {
                continue;
            }
        }
        constraints.push(constraint);
    }

    constraints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn row(codes: &str) -> FeedbackRow {
        FeedbackRow::parse(codes).unwrap()
    }

    #[test]
    fn all_correct_feedback_compiles_to_correct_at_only() {
        let mut state = GameState::new();
        let round = compile(&word("crane"), &row("CCCCC"), &mut state);

        assert!(round.is_solved());
        assert_eq!(round.constraints().len(), 5);
        assert!(
            round
                .constraints()
                .iter()
                .all(|c| matches!(c, Constraint::CorrectAt { .. }))
        );
    }

    #[test]
    fn compiled_constraints_reduce_to_exact_answer() {
        let mut state = GameState::new();
        let round = compile(&word("crane"), &row("CCCCC"), &mut state);

        let candidates = [word("crane"), word("slate"), word("trace")];
        let surviving: Vec<&Word> = candidates
            .iter()
            .filter(|w| round.constraints().iter().all(|c| c.pass(w)))
            .collect();

        assert_eq!(surviving.len(), 1);
        assert_eq!(surviving[0].text(), "CRANE");
    }

    #[test]
    fn constraints_are_sorted_by_priority() {
        let mut state = GameState::new();
        // SLATE with X C I X C: Excluded(S), CorrectAt(L), PresentNotAt(A),
        // Excluded(T), CorrectAt(E)
        let round = compile(&word("slate"), &row("XCIXC"), &mut state);

        let priorities: Vec<u8> = round.constraints().iter().map(Constraint::priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort_unstable();
        assert_eq!(priorities, sorted);

        assert_eq!(
            round.constraints()[0],
            Constraint::CorrectAt {
                position: 1,
                letter: b'L'
            }
        );
        assert_eq!(
            round.constraints()[1],
            Constraint::CorrectAt {
                position: 4,
                letter: b'E'
            }
        );
    }

    #[test]
    fn repeated_absent_letters_deduplicate_to_one_exclusion() {
        let mut state = GameState::new();
        // LEVEL: L(C) E(X) V(C) E(X) L(X). Both E exclusions collapse to one,
        // and the trailing L exclusion survives alongside CorrectAt(L, 0).
        let round = compile(&word("level"), &row("CXCXX"), &mut state);

        let excluded: Vec<u8> = round
            .constraints()
            .iter()
            .filter_map(|c| match c {
                Constraint::Excluded { letter } => Some(*letter),
                _ => None,
            })
            .collect();
        assert_eq!(excluded, [b'E', b'L']);

        let correct: Vec<(usize, u8)> = round
            .constraints()
            .iter()
            .filter_map(|c| match c {
                Constraint::CorrectAt { position, letter } => Some((*position, *letter)),
                _ => None,
            })
            .collect();
        assert_eq!(correct, [(0, b'L'), (2, b'V')]);

        // Priority order: both CorrectAt entries precede the exclusions.
        assert_eq!(round.constraints().len(), 4);
        assert_eq!(round.constraints()[0].priority(), 1);
        assert_eq!(round.constraints()[1].priority(), 1);
        assert_eq!(round.constraints()[2].priority(), 3);
        assert_eq!(round.constraints()[3].priority(), 3);
    }

    #[test]
    fn positional_constraints_sharing_a_letter_are_kept() {
        let mut state = GameState::new();
        // EERIE: E(I) E(I) R(X) I(X) E(I), three distinct PresentNotAt(E)
        // entries at positions 0, 1, and 4.
        let round = compile(&word("eerie"), &row("IIXXI"), &mut state);

        let present_positions: Vec<usize> = round
            .constraints()
            .iter()
            .filter_map(|c| match c {
                Constraint::PresentNotAt { position, letter } if *letter == b'E' => Some(*position),
                _ => None,
            })
            .collect();
        assert_eq!(present_positions, [0, 1, 4]);
    }

    #[test]
    fn compile_updates_game_state_once_per_position() {
        let mut state = GameState::new();
        compile(&word("slate"), &row("XCIXC"), &mut state);

        assert!(state.is_absent(b'S'));
        assert!(state.is_correct(b'L'));
        assert!(state.is_present(b'A'));
        assert!(state.is_banned(b'A', 2));
        assert!(state.is_absent(b'T'));
        assert!(state.is_correct(b'E'));
        assert_eq!(state.tried_count(), 5);
    }

    #[test]
    fn simulate_produces_same_constraints_without_state() {
        let mut state = GameState::new();
        let compiled = compile(&word("slate"), &row("XCIXC"), &mut state);
        let simulated = simulate(&word("slate"), &row("XCIXC"));

        assert_eq!(compiled.constraints(), simulated.as_slice());
    }

    #[test]
    fn mixed_feedback_is_not_solved() {
        let mut state = GameState::new();
        assert!(!compile(&word("slate"), &row("CCCCX"), &mut state).is_solved());
        assert!(!compile(&word("slate"), &row("CCCCI"), &mut state).is_solved());
    }
}
