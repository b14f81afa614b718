//! Interactive solver shell
//!
//! Line-oriented loop: suggest a guess, read the feedback the game gave, feed
//! it back into the solver. I/O goes through the `Console` trait so the loop
//! can be driven by stdin/stdout or by a scripted console in tests.

use crate::core::Feedback;
use crate::output::formatters::feedback_to_blocks;
use crate::solver::{SolveError, Solver};
use colored::Colorize;
use std::io::{self, Write};

/// Injected prompt/response boundary for the interactive loop
pub trait Console {
    /// Show a prompt and read one line (trimmed)
    ///
    /// # Errors
    /// Returns an error if the underlying input source fails.
    fn prompt(&mut self, msg: &str) -> Result<String, String>;

    /// Print one line of output
    fn print(&mut self, msg: &str);
}

/// Console over stdin/stdout
pub struct StdConsole;

impl Console for StdConsole {
    fn prompt(&mut self, msg: &str) -> Result<String, String> {
        print!("{msg}: ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| e.to_string())?;
        Ok(input.trim().to_string())
    }

    fn print(&mut self, msg: &str) {
        println!("{msg}");
    }
}

/// Run the interactive solver loop
///
/// Accepted inputs after each suggestion:
/// - a feedback string (`C`/`L`/`X` per position) for the suggested guess
/// - `<word> <feedback>` to record a different guess that was played
/// - `!` to blacklist the suggestion (invalid in-game despite the list)
/// - `quit` to exit
///
/// # Errors
///
/// Returns an error if input fails or no candidate remains consistent with
/// the feedback entered.
pub fn run_interactive<C: Console>(solver: &mut Solver, console: &mut C) -> Result<(), String> {
    let word_len = solver.word_len();

    console.print(&format!("\n{}", "Kordle solver - interactive mode".bold()));
    console.print("Feedback codes: C = correct spot, L = in the word elsewhere, X = absent.");
    console.print("Other commands: '!' blacklists the suggestion, '<word> <feedback>' records");
    console.print("a guess you played instead, 'quit' exits.\n");

    loop {
        let guess = match solver.get_guess() {
            Ok(guess) => guess,
            Err(SolveError::AnswerUnknown) => {
                return Err(
                    "no remaining candidate fits the feedback; a word list entry may be wrong"
                        .to_string(),
                );
            }
        };

        console.print(&format!(
            "Suggestion: {}  ({} candidates remain)",
            guess.text().bold(),
            solver.candidates().len()
        ));

        if solver.candidates().len() == 1 && solver.candidates()[0] == guess {
            console.print("That is the last word consistent with the feedback.");
            return Ok(());
        }

        let input = console.prompt("Feedback (C/L/X)")?;

        let (played, feedback) = match input.as_str() {
            "quit" | "q" | "exit" => return Ok(()),
            "!" => {
                console.print(&format!("Blacklisting {}", guess.text()));
                solver.blacklist(&guess);
                continue;
            }
            entry if entry.contains(' ') => {
                // "<word> <feedback>": the player guessed something else
                let mut parts = entry.split_whitespace();
                let word_part = parts.next().unwrap_or("");
                let feedback_part = parts.next().unwrap_or("");

                let Ok(played) = solver.parse_word(word_part) else {
                    console.print("Unrecognized word; try again.");
                    continue;
                };
                let Some(feedback) = Feedback::parse(feedback_part, word_len) else {
                    console.print("Unrecognized feedback; try again.");
                    continue;
                };
                (played, feedback)
            }
            entry => {
                let Some(feedback) = Feedback::parse(entry, word_len) else {
                    console.print(&format!(
                        "Enter {word_len} codes from C/L/X, '!', '<word> <feedback>', or 'quit'."
                    ));
                    continue;
                };
                (guess.clone(), feedback)
            }
        };

        solver.update(&played, &feedback);
        console.print(&format!(
            "  {} {}",
            played.text(),
            feedback_to_blocks(&feedback)
        ));

        if solver.is_solved() {
            console.print(&format!(
                "{}",
                format!("Solved: {}", played.text()).green().bold()
            ));
            return Ok(());
        }
    }
}
