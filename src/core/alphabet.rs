//! Syllable alphabet configuration
//!
//! The solver is generic over the letter set: Kordle uses the 28 basic Korean
//! jamo, but any set of characters works (tests use short Latin alphabets).

use rustc_hash::FxHashSet;

/// The 28 basic jamo used by the original Kordle word lists
pub const KOREAN_JAMO: &str = "ㄱㄴㄷㄹㅁㅂㅅㅇㅈㅊㅋㅌㅍㅎㅏㅐㅑㅒㅓㅔㅕㅖㅗㅛㅜㅠㅡㅣ";

/// A fixed, finite set of valid letters
///
/// Immutable once constructed; one instance is shared per solver session.
/// Letter order is preserved (first occurrence wins) so that anything iterating
/// the alphabet is deterministic.
#[derive(Debug, Clone)]
pub struct Alphabet {
    letters: Vec<char>,
    set: FxHashSet<char>,
}

impl Alphabet {
    /// Create an alphabet from a string of letters, deduplicating while
    /// preserving first-occurrence order
    #[must_use]
    pub fn new(letters: &str) -> Self {
        let mut ordered = Vec::new();
        let mut set = FxHashSet::default();
        for ch in letters.chars() {
            if set.insert(ch) {
                ordered.push(ch);
            }
        }
        Self {
            letters: ordered,
            set,
        }
    }

    /// The default Kordle alphabet
    #[must_use]
    pub fn korean_jamo() -> Self {
        Self::new(KOREAN_JAMO)
    }

    /// Check whether a character is a member of this alphabet
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.set.contains(&ch)
    }

    /// All letters in deterministic order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_jamo_has_28_letters() {
        let alphabet = Alphabet::korean_jamo();
        assert_eq!(alphabet.len(), 28);
        assert!(alphabet.contains('ㄱ'));
        assert!(alphabet.contains('ㅣ'));
        assert!(!alphabet.contains('ㅘ')); // Compound vowels are decomposed
        assert!(!alphabet.contains('a'));
    }

    #[test]
    fn duplicates_removed_order_preserved() {
        let alphabet = Alphabet::new("abcab");
        assert_eq!(alphabet.letters(), &['a', 'b', 'c']);
        assert_eq!(alphabet.len(), 3);
    }

    #[test]
    fn empty_alphabet() {
        let alphabet = Alphabet::new("");
        assert!(alphabet.is_empty());
        assert!(!alphabet.contains('a'));
    }
}
