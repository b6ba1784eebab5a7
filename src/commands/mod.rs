//! Command implementations

pub mod assist;
pub mod rank;
pub mod solve;

pub use assist::run_assist;
pub use rank::{RankEntry, rank_dictionary};
pub use solve::{MAX_ROUNDS, SolveOutcome, SolveStep, solve_target};
