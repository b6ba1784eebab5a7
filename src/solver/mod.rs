//! Candidate reduction and guess selection
//!
//! This module contains the session machinery: the shrinking candidate set,
//! the feedback-to-constraint compiler, accumulated letter knowledge, and
//! the guess selection strategies.

mod candidates;
pub mod compiler;
mod power;
mod selector;
mod session;
mod state;

pub use candidates::CandidateSet;
pub use compiler::CompiledRound;
pub use power::{power_score, select_most_powerful};
pub use selector::{GuessSelector, OPENING_WORD, Strategy};
pub use session::{RoundOutcome, Session};
pub use state::GameState;
