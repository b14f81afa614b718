//! Formatting utilities for terminal output

use crate::core::{Code, Feedback};

/// Format feedback as a block-glyph string
#[must_use]
pub fn feedback_to_blocks(feedback: &Feedback) -> String {
    feedback
        .codes()
        .iter()
        .map(|code| match code {
            Code::Correct => '🟩',
            Code::Present => '🟨',
            Code::Absent => '⬜',
        })
        .collect()
}

/// One trace line: the guessed word next to its feedback blocks
#[must_use]
pub fn guess_row(word: &str, feedback: &Feedback) -> String {
    format!("{word}  {}", feedback_to_blocks(feedback))
}
