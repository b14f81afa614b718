//! Kordle Solver
//!
//! A constraint-tracking solver for Kordle, the Korean-jamo Wordle variant.
//! Words are fixed-length sequences over a syllable alphabet; the solver
//! narrows per-position letter sets and per-letter occurrence bounds from
//! feedback, then picks the guess minimizing the expected remaining
//! candidate count.
//!
//! # Quick Start
//!
//! ```rust
//! use kordle_solver::core::{Alphabet, Feedback, Word};
//! use kordle_solver::solver::Solver;
//!
//! let alphabet = Alphabet::new("abc");
//! let words: Vec<Word> = ["aab", "aba", "baa"]
//!     .iter()
//!     .map(|t| Word::parse(t, &alphabet, 3).unwrap())
//!     .collect();
//!
//! let mut solver = Solver::new(alphabet, 3, words);
//! let guess = solver.get_guess().unwrap();
//! let feedback = Feedback::parse("CLL", 3).unwrap();
//! solver.update(&guess, &feedback);
//! ```

// Core domain types
pub mod core;

// Constraint tracking and guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
