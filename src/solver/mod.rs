//! Constraint tracking, candidate filtering, and guess selection

mod constraints;
mod engine;
mod filter;
mod selector;

pub use constraints::Constraints;
pub use engine::{SolveError, Solver};
pub use filter::{bounds_from_words, refilter};
pub use selector::{GuessScore, score_guess, select_best_guess};
