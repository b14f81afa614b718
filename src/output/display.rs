//! Display functions for command results

use super::formatters::guess_row;
use crate::commands::SolveResult;
use colored::Colorize;

/// Print the round-by-round trace of a solve
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.rounds.iter().enumerate() {
        println!("\nRound {}: {}", i + 1, guess_row(&step.word, &step.feedback));

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(expected) = step.expected_remaining {
                println!("  Expected remaining: {expected:.2}");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("Solved in {} rounds", result.rounds.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Not solved within {} rounds", result.rounds.len())
                .red()
                .bold()
        );
    }
}
