//! Guess selection by expected remaining-candidate-set size
//!
//! Each pool word partitions the candidates by the feedback it would receive
//! against them. The score is the size-weighted average group size
//! Σsᵢ²/Σsᵢ, i.e. the expected number of candidates left after guessing it
//! (larger groups are proportionally more likely outcomes, hence the second
//! weighting by size). Lower is better.

use crate::core::{Feedback, Word};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Tie-break bonus for guesses that could themselves be the answer
const CANDIDATE_BOOST: f64 = 0.01;

/// Partition statistics for one guess against the candidate set
#[derive(Debug, Clone, Copy)]
pub struct GuessScore {
    /// Expected remaining candidates after this guess (Σs²/Σs)
    pub expected_group_size: f64,
    /// Number of distinct feedback outcomes
    pub groups: usize,
    /// Largest single group (worst-case remaining candidates)
    pub largest_group: usize,
}

/// Score one guess by partitioning the candidates by feedback
///
/// # Examples
/// ```
/// use kordle_solver::core::{Alphabet, Word};
/// use kordle_solver::solver::score_guess;
///
/// let alphabet = Alphabet::new("abc");
/// let candidates: Vec<Word> = ["aab", "aba", "baa"]
///     .iter()
///     .map(|t| Word::parse(t, &alphabet, 3).unwrap())
///     .collect();
///
/// // "abc" gives each candidate a distinct feedback: three singleton groups
/// let guess = Word::parse("abc", &alphabet, 3).unwrap();
/// let score = score_guess(&guess, &candidates);
/// assert_eq!(score.groups, 3);
/// assert!((score.expected_group_size - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn score_guess(guess: &Word, candidates: &[Word]) -> GuessScore {
    let mut group_sizes: FxHashMap<Feedback, usize> = FxHashMap::default();
    for candidate in candidates {
        let feedback = Feedback::score(guess, candidate);
        *group_sizes.entry(feedback).or_insert(0) += 1;
    }

    let total: usize = candidates.len();
    let sum_of_squares: u64 = group_sizes.values().map(|&s| (s as u64) * (s as u64)).sum();
    let expected_group_size = if total == 0 {
        0.0
    } else {
        sum_of_squares as f64 / total as f64
    };

    GuessScore {
        expected_group_size,
        groups: group_sizes.len(),
        largest_group: group_sizes.values().copied().max().unwrap_or(0),
    }
}

/// Select the pool word minimizing expected remaining candidates
///
/// Pool words that are themselves candidates get a small boost so that, all
/// else equal, a guess that could end the game outright wins. Scoring runs in
/// parallel; the minimum is then taken sequentially with strict `<` so ties
/// always resolve to the earliest pool entry regardless of thread scheduling.
///
/// The returned word is a pool member; it need not be a candidate. Returns
/// `None` only when the pool or the candidate set is empty.
#[must_use]
pub fn select_best_guess<'a>(guess_pool: &'a [Word], candidates: &[Word]) -> Option<&'a Word> {
    if guess_pool.is_empty() || candidates.is_empty() {
        return None;
    }

    let candidate_texts: FxHashSet<&str> = candidates.iter().map(Word::text).collect();

    let scores: Vec<f64> = guess_pool
        .par_iter()
        .map(|guess| {
            let mut score = score_guess(guess, candidates).expected_group_size;
            if candidate_texts.contains(guess.text()) {
                score -= CANDIDATE_BOOST;
            }
            score
        })
        .collect();

    let mut best = 0;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score < scores[best] {
            best = i;
        }
    }

    Some(&guess_pool[best])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn alphabet() -> Alphabet {
        Alphabet::new("abcd")
    }

    fn word(text: &str) -> Word {
        Word::parse(text, &alphabet(), 3).unwrap()
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| word(t)).collect()
    }

    #[test]
    fn score_counts_groups_and_sizes() {
        // Against "ddd" every candidate scores all-Absent: one group of 3,
        // expected size 9/3 = 3
        let candidates = words(&["aab", "aba", "baa"]);
        let score = score_guess(&word("ddd"), &candidates);
        assert_eq!(score.groups, 1);
        assert_eq!(score.largest_group, 3);
        assert!((score.expected_group_size - 3.0).abs() < 1e-9);
    }

    #[test]
    fn score_perfect_discriminator() {
        // "aab" vs the three: CCC / CLL / LLC, all distinct
        let candidates = words(&["aab", "aba", "baa"]);
        let score = score_guess(&word("aab"), &candidates);
        assert_eq!(score.groups, 3);
        assert_eq!(score.largest_group, 1);
        assert!((score.expected_group_size - 1.0).abs() < 1e-9);
    }

    #[test]
    fn score_weighted_average() {
        // "dda" vs aab/aba/baa: last letter b→XXX... work from group sizes:
        // aab → XXX? d absent, d absent, a vs b: a present → XXL
        // aba → d,d absent; a vs a Correct → XXC
        // baa → XXC as well (a at position 2)
        // Groups {XXL:1, XXC:2}: (1 + 4) / 3
        let candidates = words(&["aab", "aba", "baa"]);
        let score = score_guess(&word("dda"), &candidates);
        assert_eq!(score.groups, 2);
        assert_eq!(score.largest_group, 2);
        assert!((score.expected_group_size - 5.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn score_empty_candidates() {
        let score = score_guess(&word("aab"), &[]);
        assert_eq!(score.groups, 0);
        assert!((score.expected_group_size - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn selects_best_discriminator() {
        let candidates = words(&["aab", "aba", "baa"]);
        // "aab" separates all three (score 1.0 - boost); "ddd" groups them all
        let pool = words(&["ddd", "aab"]);
        let best = select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(best.text(), "aab");
    }

    #[test]
    fn candidate_boost_breaks_ties() {
        // "aab" and "abd" both split the candidates into singletons, but only
        // "aab" is a candidate, so its boost must win even from second place
        let candidates = words(&["aab", "aba", "baa"]);
        let pool = words(&["abd", "aab"]);

        let plain = score_guess(&pool[0], &candidates);
        let boosted = score_guess(&pool[1], &candidates);
        assert!((plain.expected_group_size - boosted.expected_group_size).abs() < 1e-9);

        let best = select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(best.text(), "aab");
    }

    #[test]
    fn exact_ties_go_to_first_pool_entry() {
        // Two equally useless guesses: pool order decides
        let candidates = words(&["aab", "aba", "baa"]);
        let pool = words(&["ddd", "dcd"]);
        let best = select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(best.text(), "ddd");
    }

    #[test]
    fn returns_pool_member_not_candidate() {
        let candidates = words(&["aab", "aba"]);
        let pool = words(&["abd"]);
        let best = select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(best.text(), "abd");
    }

    #[test]
    fn empty_inputs_return_none() {
        assert!(select_best_guess(&[], &words(&["aab"])).is_none());
        assert!(select_best_guess(&words(&["aab"]), &[]).is_none());
    }
}
