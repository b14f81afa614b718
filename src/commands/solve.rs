//! Solve a specific target word
//!
//! Drives the solver to completion against a known target and records the
//! per-round trace.

use crate::core::Feedback;
use crate::solver::{SolveError, Solver, score_guess};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    /// Stop after this many rounds; `None` runs to completion
    pub max_rounds: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_rounds: None,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub rounds: Vec<GuessStep>,
    pub target: String,
}

/// A single round in the solution trace
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Expected remaining candidates for this guess, when it was scored
    pub expected_remaining: Option<f64>,
}

/// Solve one target word, resetting the solver first
///
/// # Errors
///
/// Returns an error if the target does not parse against the solver's
/// alphabet and length, or if the candidate set runs out (the target is not
/// in the solution list).
pub fn solve_word(config: &SolveConfig, solver: &mut Solver) -> Result<SolveResult, String> {
    let target = solver
        .parse_word(&config.target)
        .map_err(|e| format!("Invalid target word: {e}"))?;

    solver.reset();
    let mut rounds: Vec<GuessStep> = Vec::new();

    loop {
        if let Some(limit) = config.max_rounds
            && rounds.len() >= limit
        {
            return Ok(SolveResult {
                success: false,
                rounds,
                target: config.target.clone(),
            });
        }

        let candidates_before = solver.candidates().len();

        let guess = match solver.get_guess() {
            Ok(guess) => guess,
            Err(SolveError::AnswerUnknown) => {
                return Err(format!(
                    "'{}' is not reachable from the word list",
                    config.target
                ));
            }
        };

        // The selector only runs with 3+ candidates; mirror that here
        let expected_remaining = if candidates_before > 2 {
            Some(score_guess(&guess, solver.candidates()).expected_group_size)
        } else {
            None
        };

        let feedback = Feedback::score(&guess, &target);
        let candidates_after = solver.update(&guess, &feedback).len();

        let solved = feedback.is_all_correct();
        rounds.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after,
            expected_remaining,
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                rounds,
                target: config.target.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, Word};

    fn solver(texts: &[&str]) -> Solver {
        let alphabet = Alphabet::new("abc");
        let words: Vec<Word> = texts
            .iter()
            .map(|t| Word::parse(t, &alphabet, 3).unwrap())
            .collect();
        Solver::new(alphabet, 3, words)
    }

    #[test]
    fn solves_listed_target() {
        let mut solver = solver(&["aab", "aba", "baa", "abc", "bca"]);
        let result = solve_word(&SolveConfig::new("aba".to_string()), &mut solver).unwrap();

        assert!(result.success);
        assert_eq!(result.rounds.last().unwrap().word, "aba");
        assert!(result.rounds.last().unwrap().feedback.is_all_correct());
    }

    #[test]
    fn trace_shows_monotone_candidates() {
        let mut solver = solver(&["aab", "aba", "baa", "abc", "bca", "cab"]);
        let result = solve_word(&SolveConfig::new("cab".to_string()), &mut solver).unwrap();

        for step in &result.rounds {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn invalid_target_is_error() {
        let mut solver = solver(&["aab", "aba"]);
        assert!(solve_word(&SolveConfig::new("abcd".to_string()), &mut solver).is_err());
        assert!(solve_word(&SolveConfig::new("xyz".to_string()), &mut solver).is_err());
    }

    #[test]
    fn unlisted_target_is_error() {
        // "ccc" parses but is not in the list; candidates run dry
        let mut solver = solver(&["aab", "aba", "baa"]);
        let result = solve_word(&SolveConfig::new("ccc".to_string()), &mut solver);
        assert!(result.is_err());
    }

    #[test]
    fn max_rounds_limits_the_trace() {
        let mut solver = solver(&["aab", "aba", "baa", "abc", "bca", "cab"]);
        let mut config = SolveConfig::new("cab".to_string());
        config.max_rounds = Some(1);

        let result = solve_word(&config, &mut solver).unwrap();
        assert!(result.rounds.len() <= 1);
    }
}
