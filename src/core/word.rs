//! Kordle word representation
//!
//! A Word is a fixed-length sequence of alphabet letters, validated at
//! construction. Letter occurrence counts are precomputed for feedback scoring
//! and bound checks with duplicate letters.

use super::Alphabet;
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A fixed-length word over a syllable alphabet
///
/// Stores the text alongside its decomposed letters and a per-letter count map.
/// Equality and hashing go by text; the other fields are derived data.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    letters: Box<[char]>,
    counts: FxHashMap<char, u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    LengthMismatch { expected: usize, actual: usize },
    ForeignLetter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::ForeignLetter(ch) => {
                write!(f, "Letter '{ch}' is not in the alphabet")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Parse a word, validating length and alphabet membership
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The letter count is not exactly `word_len`
    /// - Any letter is outside `alphabet`
    ///
    /// # Examples
    /// ```
    /// use kordle_solver::core::{Alphabet, Word};
    ///
    /// let alphabet = Alphabet::korean_jamo();
    /// let word = Word::parse("ㅎㅏㄴㄱㅜㄱ", &alphabet, 6).unwrap();
    /// assert_eq!(word.text(), "ㅎㅏㄴㄱㅜㄱ");
    ///
    /// assert!(Word::parse("ㅎㅏㄴ", &alphabet, 6).is_err());
    /// assert!(Word::parse("abcdef", &alphabet, 6).is_err());
    /// ```
    pub fn parse(text: &str, alphabet: &Alphabet, word_len: usize) -> Result<Self, WordError> {
        let letters: Vec<char> = text.chars().collect();

        if letters.len() != word_len {
            return Err(WordError::LengthMismatch {
                expected: word_len,
                actual: letters.len(),
            });
        }

        if let Some(&foreign) = letters.iter().find(|&&ch| !alphabet.contains(ch)) {
            return Err(WordError::ForeignLetter(foreign));
        }

        let mut counts: FxHashMap<char, u8> = FxHashMap::default();
        for &ch in &letters {
            *counts.entry(ch).or_insert(0) += 1;
        }

        Ok(Self {
            text: text.to_string(),
            letters: letters.into_boxed_slice(),
            counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the decomposed letters
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (the solver's fixed length L)
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

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// How many times a letter occurs in this word (0 if absent)
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> u8 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// The per-letter occurrence counts
    ///
    /// Only letters that actually occur have entries.
    #[inline]
    pub(crate) fn counts(&self) -> &FxHashMap<char, u8> {
        &self.counts
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
