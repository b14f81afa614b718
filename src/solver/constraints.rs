//! Constraint tracking for the solver
//!
//! Two structures accumulate everything learned from feedback:
//! - per-position sets of letters still possible there
//! - per-letter inclusive (min, max) occurrence-count bounds
//!
//! Both only ever tighten: position sets shrink (or pin to a singleton on a
//! Correct mark), lower bounds rise, upper bounds fall.

use super::filter::bounds_from_words;
use crate::core::{Alphabet, Code, Feedback, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Per-position letter sets plus per-letter occurrence bounds
///
/// The bounds map carries an entry for every alphabet letter, so absent
/// letters are checked against their (possibly nonzero) lower bound too.
#[derive(Debug, Clone)]
pub struct Constraints {
    positions: Vec<FxHashSet<char>>,
    bounds: FxHashMap<char, (u8, u8)>,
}

impl Constraints {
    /// Fresh constraints for a new game: every letter possible at every
    /// position, bounds taken from the solution list itself
    #[must_use]
    pub fn new(alphabet: &Alphabet, word_len: usize, solutions: &[Word]) -> Self {
        let full: FxHashSet<char> = alphabet.letters().iter().copied().collect();
        Self {
            positions: vec![full; word_len],
            bounds: bounds_from_words(alphabet, word_len, solutions),
        }
    }

    /// Word length L
    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.positions.len()
    }

    /// Fold one (guess, feedback) pair into the constraints
    ///
    /// Count rule: letters guessed more times than they were marked Correct or
    /// Present have their true count proven equal to the marked count; others
    /// get their lower bound raised to the marked count. Correct marks pin
    /// their position set to a singleton; every other mark removes the guessed
    /// letter from its position set.
    ///
    /// Two derived passes follow. Closure: once the lower bounds sum to L,
    /// every letter's count is fully known and the upper bounds collapse.
    /// Exclusivity: a letter pinned in as many positions as its upper bound
    /// allows cannot occur anywhere else, so it leaves all non-singleton sets.
    ///
    /// # Panics
    /// Panics if lengths differ from L, or if the feedback marks more copies
    /// of a letter than the guess contains (the judge returned impossible
    /// data; continuing would corrupt the bounds).
    pub fn apply_feedback(&mut self, guess: &Word, feedback: &Feedback) {
        let word_len = self.positions.len();
        assert_eq!(guess.len(), word_len, "guess length must be {word_len}");
        assert_eq!(
            feedback.len(),
            word_len,
            "feedback length must be {word_len}"
        );

        // Per letter: how many of its occurrences were marked Correct/Present
        let mut marked: FxHashMap<char, u8> = FxHashMap::default();
        for (&letter, &code) in guess.letters().iter().zip(feedback.codes()) {
            if code != Code::Absent {
                *marked.entry(letter).or_insert(0) += 1;
            }
        }

        for (&letter, &guessed) in guess.counts() {
            let hits = marked.get(&letter).copied().unwrap_or(0);
            assert!(
                guessed >= hits,
                "feedback marks {hits} copies of '{letter}' but the guess has {guessed}"
            );
            let bound = self
                .bounds
                .entry(letter)
                .or_insert((0, word_len as u8));
            if guessed > hits {
                // Excess copies are proven absent: the count is exactly `hits`
                *bound = (hits, hits);
            } else {
                bound.0 = bound.0.max(hits);
            }
        }

        // Position update: pin on Correct, otherwise the letter is proven
        // not to occupy this slot (it may still occupy others)
        for (i, (&letter, &code)) in guess
            .letters()
            .iter()
            .zip(feedback.codes())
            .enumerate()
        {
            if code == Code::Correct {
                self.positions[i].clear();
                self.positions[i].insert(letter);
            } else {
                self.positions[i].remove(&letter);
            }
        }

        // Closure pass: lower bounds summing to L mean every count is known
        let lower_sum: usize = self.bounds.values().map(|&(lo, _)| lo as usize).sum();
        if lower_sum >= word_len {
            for bound in self.bounds.values_mut() {
                bound.1 = bound.0;
            }
        }

        // Exclusivity pass: a letter already pinned in upper-bound-many
        // positions leaves every other position set
        let letters: Vec<char> = self.bounds.keys().copied().collect();
        for letter in letters {
            let upper = self.bounds[&letter].1;
            let pinned = self
                .positions
                .iter()
                .filter(|set| set.len() == 1 && set.contains(&letter))
                .count();
            if pinned >= upper as usize {
                for set in &mut self.positions {
                    if !(set.len() == 1 && set.contains(&letter)) {
                        set.remove(&letter);
                    }
                }
            }
        }
    }

    /// Whether a word satisfies every position set and every letter bound
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        let positions_ok = word
            .letters()
            .iter()
            .zip(&self.positions)
            .all(|(letter, set)| set.contains(letter));
        if !positions_ok {
            return false;
        }

        // Alphabet-wide: a zero count must also satisfy its lower bound
        self.bounds
            .iter()
            .all(|(&letter, &(lo, hi))| (lo..=hi).contains(&word.count_of(letter)))
    }

    /// The (min, max) occurrence bound for a letter
    #[must_use]
    pub fn bound_of(&self, letter: char) -> (u8, u8) {
        self.bounds
            .get(&letter)
            .copied()
            .unwrap_or((0, self.positions.len() as u8))
    }

    /// Letters still possible at a position
    ///
    /// # Panics
    /// Panics if `position >= word_len()`
    #[must_use]
    pub fn letters_at(&self, position: usize) -> &FxHashSet<char> {
        &self.positions[position]
    }

    /// Replace the bounds wholesale (the filter's recompute from survivors)
    pub(crate) fn replace_bounds(&mut self, bounds: FxHashMap<char, (u8, u8)>) {
        self.bounds = bounds;
    }
}
