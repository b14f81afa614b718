//! The solver state machine
//!
//! Owns the candidate set, the tried set, the constraints, and the fixed
//! first-guess queue. One instance serves one game session; `reset` starts a
//! fresh game over the same word lists.

use super::constraints::Constraints;
use super::filter::{bounds_from_words, refilter};
use super::selector::select_best_guess;
use crate::core::{Alphabet, Feedback, Word, WordError};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::fmt;

/// Error type for guess requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// No candidate is consistent with the feedback received. Recoverable:
    /// the caller can blacklist a bad word or reset.
    AnswerUnknown,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnswerUnknown => write!(f, "no remaining candidate fits the feedback"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Constraint-tracking Kordle solver
///
/// Call `update` with each round's guess and feedback, then `get_guess` for
/// the next suggestion. All state mutation happens inside `update` and
/// `get_guess` (the latter only consumes the fixed-opener queue).
pub struct Solver {
    alphabet: Alphabet,
    word_len: usize,
    solution_words: Vec<Word>,
    guess_words: Vec<Word>,
    opening_guesses: Vec<Word>,

    candidates: Vec<Word>,
    tried: FxHashSet<Word>,
    constraints: Constraints,
    first_moves: VecDeque<Word>,
    solved: bool,
}

impl Solver {
    /// Create a solver over a solution list, guessing from the same list
    #[must_use]
    pub fn new(alphabet: Alphabet, word_len: usize, solution_words: Vec<Word>) -> Self {
        let guess_words = solution_words.clone();
        Self::with_guess_pool(alphabet, word_len, solution_words, guess_words)
    }

    /// Create a solver with a guess pool distinct from the solution list
    #[must_use]
    pub fn with_guess_pool(
        alphabet: Alphabet,
        word_len: usize,
        solution_words: Vec<Word>,
        guess_words: Vec<Word>,
    ) -> Self {
        let candidates = solution_words.clone();
        let constraints = Constraints::new(&alphabet, word_len, &solution_words);
        Self {
            alphabet,
            word_len,
            solution_words,
            guess_words,
            opening_guesses: Vec::new(),
            candidates,
            tried: FxHashSet::default(),
            constraints,
            first_moves: VecDeque::new(),
            solved: false,
        }
    }

    /// Fix the opening guesses, returned verbatim before any scoring
    #[must_use]
    pub fn with_first_moves(mut self, openers: Vec<Word>) -> Self {
        self.first_moves = openers.iter().cloned().collect();
        self.opening_guesses = openers;
        self
    }

    /// Word length L
    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// The alphabet this solver plays over
    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Surviving candidates, in stable word-list order
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Whether all-Correct feedback has been seen
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Parse a word against this solver's alphabet and length
    ///
    /// # Errors
    /// Returns `WordError` for wrong length or foreign letters.
    pub fn parse_word(&self, text: &str) -> Result<Word, WordError> {
        Word::parse(text, &self.alphabet, self.word_len)
    }

    /// Fold one round of feedback into the solver state
    ///
    /// Updates the constraints, marks the guess as tried, re-filters the
    /// candidates and recomputes the letter bounds from the survivors.
    /// All-Correct feedback sets the solved flag and collapses the candidate
    /// set to the guess alone. Returns the surviving candidates; an empty
    /// result is not an error here, `get_guess` reports it.
    ///
    /// # Panics
    /// Panics if `guess` or `feedback` length differs from L (caller bug).
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) -> &[Word] {
        self.constraints.apply_feedback(guess, feedback);
        self.tried.insert(guess.clone());

        refilter(&mut self.candidates, &self.constraints, &self.tried);
        if !self.candidates.is_empty() {
            self.constraints.replace_bounds(bounds_from_words(
                &self.alphabet,
                self.word_len,
                &self.candidates,
            ));
        }

        if feedback.is_all_correct() {
            self.solved = true;
            self.candidates = vec![guess.clone()];
        }

        &self.candidates
    }

    /// Suggest the next guess
    ///
    /// A remaining fixed opener is returned first. With two or fewer
    /// candidates no discriminating guess beats trying one directly, so the
    /// first candidate is returned. Otherwise the full guess pool is scored.
    ///
    /// # Errors
    /// Returns `SolveError::AnswerUnknown` when no candidate remains.
    pub fn get_guess(&mut self) -> Result<Word, SolveError> {
        if let Some(opener) = self.first_moves.pop_front() {
            return Ok(opener);
        }

        match self.candidates.len() {
            0 => Err(SolveError::AnswerUnknown),
            1 | 2 => Ok(self.candidates[0].clone()),
            _ => Ok(select_best_guess(&self.guess_words, &self.candidates)
                .unwrap_or(&self.candidates[0])
                .clone()),
        }
    }

    /// Drop a word that turned out to be invalid in-game
    ///
    /// Removes it from the candidates and from both stored lists without
    /// marking it tried, so it never comes back after a reset either.
    pub fn blacklist(&mut self, word: &Word) {
        self.candidates.retain(|w| w != word);
        self.solution_words.retain(|w| w != word);
        self.guess_words.retain(|w| w != word);
    }

    /// Start a fresh game over the stored word lists
    pub fn reset(&mut self) {
        self.candidates = self.solution_words.clone();
        self.tried.clear();
        self.constraints = Constraints::new(&self.alphabet, self.word_len, &self.solution_words);
        self.first_moves = self.opening_guesses.iter().cloned().collect();
        self.solved = false;
    }

    /// Solve to completion against a known target
    ///
    /// Resets, then loops guess → judge → update until the guess equals the
    /// target. Returns the number of rounds used. The target always survives
    /// filtering (it satisfies its own constraints), so this terminates within
    /// the word-list size.
    ///
    /// # Errors
    /// Returns `SolveError::AnswerUnknown` if the target is not in the
    /// solution list (or was blacklisted) and the candidates run out.
    pub fn run_auto(&mut self, target: &Word) -> Result<usize, SolveError> {
        self.reset();
        let mut rounds = 0;
        loop {
            rounds += 1;
            let guess = self.get_guess()?;
            if guess == *target {
                return Ok(rounds);
            }
            let feedback = Feedback::score(&guess, target);
            self.update(&guess, &feedback);
        }
    }
}
