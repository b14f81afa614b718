//! Word list loading
//!
//! The solver assumes a valid, pre-loaded list; lines that fail validation
//! (wrong length, letters outside the alphabet) are a loader concern and are
//! simply skipped.

use crate::core::{Alphabet, Word};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed; empty and invalid lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use kordle_solver::core::Alphabet;
/// use kordle_solver::wordlists::loader::load_from_file;
///
/// let alphabet = Alphabet::korean_jamo();
/// let words = load_from_file("data/words.txt", &alphabet, 6).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    alphabet: &Alphabet,
    word_len: usize,
) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines(), alphabet, word_len))
}

/// Convert raw lines into validated words, skipping anything malformed
pub fn words_from_lines<'a, I>(lines: I, alphabet: &Alphabet, word_len: usize) -> Vec<Word>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::parse(trimmed, alphabet, word_len).ok()
            }
        })
        .collect()
}
