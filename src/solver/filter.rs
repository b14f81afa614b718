//! Candidate filtering
//!
//! Re-derives the feasible solution set from the current constraints and
//! recomputes letter bounds from the survivors. The recomputed bounds reflect
//! the actual remaining word list and are strictly at least as tight as the
//! tracker's incremental bounds.

use super::constraints::Constraints;
use crate::core::{Alphabet, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Prune the candidate set in place
///
/// A candidate survives if it matches every position set, every letter's
/// occurrence count falls within its bound, and it has not been tried. The
/// vector identity is preserved (callers hold the same allocation) and so is
/// the relative order, which the selector's tie-break depends on.
pub fn refilter(candidates: &mut Vec<Word>, constraints: &Constraints, tried: &FxHashSet<Word>) {
    candidates.retain(|word| constraints.allows(word) && !tried.contains(word));
}

/// Per-letter (min, max) occurrence counts observed across `words`
///
/// Covers the whole alphabet: letters absent from every word get (0, 0), and
/// a letter present in every word gets a nonzero lower bound. With no words
/// at all the bounds degenerate to the trivial (0, L) range.
#[must_use]
pub fn bounds_from_words(
    alphabet: &Alphabet,
    word_len: usize,
    words: &[Word],
) -> FxHashMap<char, (u8, u8)> {
    let mut bounds = FxHashMap::default();

    if words.is_empty() {
        for &letter in alphabet.letters() {
            bounds.insert(letter, (0, word_len as u8));
        }
        return bounds;
    }

    for &letter in alphabet.letters() {
        let mut lo = u8::MAX;
        let mut hi = 0;
        for word in words {
            let count = word.count_of(letter);
            lo = lo.min(count);
            hi = hi.max(count);
        }
        bounds.insert(letter, (lo, hi));
    }

    bounds
}
