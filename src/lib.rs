//! Wordle Assist
//!
//! A constraint-based assistant for five-letter word-guessing games. Round
//! feedback compiles into reduction constraints that shrink the set of words
//! still consistent with everything seen so far, and candidate guesses are
//! ranked by the elimination they guarantee in the worst case.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::{FeedbackRow, Word};
//! use wordle_assist::solver::Session;
//!
//! let dictionary = vec![
//!     Word::new("crane").unwrap(),
//!     Word::new("crone").unwrap(),
//!     Word::new("slate").unwrap(),
//! ];
//!
//! let mut session = Session::new(dictionary);
//! let guess = Word::new("crane").unwrap();
//! let feedback = FeedbackRow::parse("CCXCC").unwrap();
//!
//! let outcome = session.apply_feedback(&guess, &feedback);
//! assert_eq!(outcome.remaining, 1);
//! ```

// Core domain types
pub mod core;

// Candidate reduction and guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
