//! Core domain types: alphabet, words, feedback

mod alphabet;
mod feedback;
mod word;

pub use alphabet::{Alphabet, KOREAN_JAMO};
pub use feedback::{Code, Feedback};
pub use word::{Word, WordError};
