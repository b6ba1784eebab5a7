//! Self-play solve command
//!
//! Drives a session against a known target word, generating the feedback a
//! real game would give, and records the solution path.

use crate::core::{FeedbackRow, Word};
use crate::solver::{Session, Strategy};
use rand::Rng;

/// Maximum rounds a game allows
pub const MAX_ROUNDS: usize = 6;

/// A single round in the solution path
#[derive(Debug, Clone)]
pub struct SolveStep {
    pub guess: Word,
    pub feedback: FeedbackRow,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of solving a target word
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub target: String,
    pub solved: bool,
    pub steps: Vec<SolveStep>,
}

/// Solve a specific target word with the given strategy
///
/// Exploratory strategies can run out of probe words mid-game; when that
/// happens (or when a single candidate remains) the round falls back to
/// exploiting the candidate set, so the game always has a guess while
/// candidates exist.
///
/// # Errors
///
/// Returns an error if the target is not five letters or does not appear in
/// the dictionary (the session could never reach it).
pub fn solve_target<R: Rng + ?Sized>(
    target: &str,
    dictionary: Vec<Word>,
    strategy: Strategy,
    rng: &mut R,
) -> Result<SolveOutcome, String> {
    let target_word = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;

    if !dictionary.iter().any(|w| w == &target_word) {
        return Err(format!("Word '{target_word}' not in dictionary"));
    }

    let mut session = Session::new(dictionary);
    let mut steps = Vec::new();

    for _ in 0..MAX_ROUNDS {
        let candidates_before = session.candidates().len();
        if candidates_before == 0 {
            break;
        }

        let guess = if candidates_before == 1 {
            // One candidate left: guess it outright instead of probing.
            session.candidates().words()[0].clone()
        } else {
            match session
                .suggest(strategy, rng)
                .or_else(|| session.suggest(Strategy::Exploit, rng))
            {
                Some(word) => word,
                None => break,
            }
        };

        let feedback = FeedbackRow::judge(&guess, &target_word);
        let outcome = session.apply_feedback(&guess, &feedback);

        steps.push(SolveStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: outcome.remaining,
        });

        if outcome.solved {
            return Ok(SolveOutcome {
                target: target_word.text().to_string(),
                solved: true,
                steps,
            });
        }
    }

    Ok(SolveOutcome {
        target: target_word.text().to_string(),
        solved: false,
        steps,
    })
}
