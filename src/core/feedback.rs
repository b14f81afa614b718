//! Feedback codes and the game judge
//!
//! Feedback is one code per guessed position:
//! - `C` (Correct) = letter and position match
//! - `L` (Present) = letter is in the word at another position
//! - `X` (Absent) = letter is not in the remaining pool
//!
//! `Feedback::score` simulates the judge, including the two-pass rule for
//! duplicate letters: Correct marks claim pool capacity before any Present
//! mark is awarded.

use super::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// One position's feedback code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    Correct,
    Present,
    Absent,
}

impl Code {
    /// The single-character form used by the original game (`C`/`L`/`X`)
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Correct => 'C',
            Self::Present => 'L',
            Self::Absent => 'X',
        }
    }

    #[must_use]
    const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'C' | 'c' | '🟩' => Some(Self::Correct),
            'L' | 'l' | '🟨' => Some(Self::Present),
            'X' | 'x' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Full feedback for one guess: a code per position
///
/// Hashable so it can key the selector's partition maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    codes: Box<[Code]>,
}

impl Feedback {
    /// Build feedback from explicit codes
    #[must_use]
    pub fn new(codes: Vec<Code>) -> Self {
        Self {
            codes: codes.into_boxed_slice(),
        }
    }

    /// The all-Correct feedback of a given length (a solved game)
    #[must_use]
    pub fn all_correct(len: usize) -> Self {
        Self::new(vec![Code::Correct; len])
    }

    /// Parse a feedback string like `"CLXCLX"` (case-insensitive, block glyphs
    /// also accepted)
    ///
    /// Returns `None` on any foreign symbol or if the length differs from
    /// `word_len`; the constraint tracker never sees malformed feedback.
    ///
    /// # Examples
    /// ```
    /// use kordle_solver::core::Feedback;
    ///
    /// let fb = Feedback::parse("CLX", 3).unwrap();
    /// assert_eq!(fb.to_string(), "CLX");
    /// assert_eq!(Feedback::parse("clx", 3), Some(fb));
    /// assert!(Feedback::parse("CLQ", 3).is_none());
    /// assert!(Feedback::parse("CL", 3).is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str, word_len: usize) -> Option<Self> {
        let codes: Option<Vec<Code>> = s.chars().map(Code::from_char).collect();
        let codes = codes?;

        if codes.len() != word_len {
            return None;
        }

        Some(Self::new(codes))
    }

    /// Score `guess` against `target`, simulating the game's judge
    ///
    /// Pass 1 marks Correct positions and decrements the target's per-letter
    /// pool; pass 2 awards Present only while pool capacity remains. A letter
    /// appearing once in the target and twice in the guess therefore yields
    /// exactly one positive mark.
    ///
    /// # Panics
    /// Panics if the words have different lengths.
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        assert_eq!(
            guess.len(),
            target.len(),
            "guess and target must have equal length"
        );

        let mut codes = vec![Code::Absent; guess.len()];
        let mut pool: FxHashMap<char, u8> = target.counts().clone();

        // Pass 1: exact matches claim pool capacity first
        for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                codes[i] = Code::Correct;
                if let Some(remaining) = pool.get_mut(&g) {
                    *remaining -= 1;
                }
            }
        }

        // Pass 2: Present only while the pool still has that letter
        for (i, &g) in guess.letters().iter().enumerate() {
            if codes[i] == Code::Correct {
                continue;
            }
            if let Some(remaining) = pool.get_mut(&g)
                && *remaining > 0
            {
                codes[i] = Code::Present;
                *remaining -= 1;
            }
        }

        Self::new(codes)
    }

    /// The per-position codes
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether every position is Correct (the game is won)
    #[inline]
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.codes.iter().all(|&c| c == Code::Correct)
    }

    /// Count of Correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.codes.iter().filter(|&&c| c == Code::Correct).count()
    }

    /// Count of Present positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.codes.iter().filter(|&&c| c == Code::Present).count()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &code in &self.codes {
            write!(f, "{}", code.as_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn word(text: &str) -> Word {
        Word::parse(text, &Alphabet::new("abcdef"), text.chars().count()).unwrap()
    }

    #[test]
    fn self_score_is_all_correct() {
        for text in ["abc", "aab", "fff"] {
            let w = word(text);
            let fb = Feedback::score(&w, &w);
            assert!(fb.is_all_correct(), "self-score of {text} not all-Correct");
        }
    }

    #[test]
    fn score_aab_vs_aba_duplicate_handling() {
        // Position 0: a == a, Correct. Position 1: a present once more in the
        // target pool. Position 2: b present at target position 1.
        let fb = Feedback::score(&word("aab"), &word("aba"));
        assert_eq!(fb.to_string(), "CLL");
    }

    #[test]
    fn score_all_absent() {
        let fb = Feedback::score(&word("abc"), &word("def"));
        assert_eq!(fb.to_string(), "XXX");
        assert_eq!(fb.count_correct(), 0);
        assert_eq!(fb.count_present(), 0);
    }

    #[test]
    fn duplicate_guess_letter_single_target_copy() {
        // Guess has two a's, target has one (not in a matching position):
        // exactly one Present, the excess copy is Absent.
        let fb = Feedback::score(&word("aac"), &word("bda"));
        assert_eq!(fb.to_string(), "LXX");
    }

    #[test]
    fn correct_claims_pool_before_present() {
        // Target has one b, matched exactly at position 2; the earlier b in
        // the guess must not also be marked Present.
        let fb = Feedback::score(&word("bab"), &word("ccb"));
        assert_eq!(fb.to_string(), "XXC");
    }

    #[test]
    fn positive_marks_never_exceed_min_count() {
        let words = ["aab", "aba", "baa", "abc", "bca", "cab", "aaa", "bbb"];
        for g in &words {
            for t in &words {
                let guess = word(g);
                let target = word(t);
                let fb = Feedback::score(&guess, &target);
                for &letter in &['a', 'b', 'c'] {
                    let positives = fb
                        .codes()
                        .iter()
                        .zip(guess.letters())
                        .filter(|&(&code, &ch)| ch == letter && code != Code::Absent)
                        .count();
                    let limit = guess.count_of(letter).min(target.count_of(letter)) as usize;
                    assert!(
                        positives <= limit,
                        "{g} vs {t}: letter {letter} got {positives} marks, limit {limit}"
                    );
                }
            }
        }
    }

    #[test]
    fn parse_accepts_aliases() {
        let fb = Feedback::parse("CLX", 3).unwrap();
        assert_eq!(Feedback::parse("clx", 3), Some(fb.clone()));
        assert_eq!(Feedback::parse("🟩🟨⬜", 3), Some(fb));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(Feedback::parse("CLQ", 3).is_none()); // Foreign symbol
        assert!(Feedback::parse("CLXC", 3).is_none()); // Too long
        assert!(Feedback::parse("CL", 3).is_none()); // Too short
        assert!(Feedback::parse("", 3).is_none());
    }

    #[test]
    fn all_correct_constructor() {
        let fb = Feedback::all_correct(4);
        assert!(fb.is_all_correct());
        assert_eq!(fb.to_string(), "CCCC");
        assert!(!Feedback::parse("CCL", 3).unwrap().is_all_correct());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let fb = Feedback::parse("CXLLXC", 6).unwrap();
        assert_eq!(Feedback::parse(&fb.to_string(), 6), Some(fb));
    }
}
