//! Whole-list solver evaluation
//!
//! Runs the solve-to-completion driver against every solution word (or a
//! sample) and aggregates round-count statistics.

use crate::core::Word;
use crate::solver::Solver;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Statistics from testing the whole word list
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub round_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_rounds: f64,
    pub max_rounds: usize,
    pub min_rounds: usize,
    pub worst_words: Vec<(String, usize)>,
}

/// Run the driver over the targets, optionally limited or randomly sampled
pub fn run_test_all(
    solver: &mut Solver,
    targets: &[Word],
    limit: Option<usize>,
    sample: Option<usize>,
) -> TestAllStatistics {
    let selected: Vec<&Word> = match sample {
        Some(n) => {
            use rand::prelude::IndexedRandom;
            targets.choose_multiple(&mut rand::rng(), n).collect()
        }
        None => targets
            .iter()
            .take(limit.unwrap_or(targets.len()))
            .collect(),
    };

    println!("Testing {} words...", selected.len());

    let pb = ProgressBar::new(selected.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut round_distribution: HashMap<usize, usize> = HashMap::new();
    let mut per_word: Vec<(String, usize)> = Vec::new();
    let mut solved = 0;
    let mut failed = 0;

    let total_start = Instant::now();

    for target in selected {
        match solver.run_auto(target) {
            Ok(rounds) => {
                solved += 1;
                *round_distribution.entry(rounds).or_insert(0) += 1;
                per_word.push((target.text().to_string(), rounds));
            }
            Err(_) => failed += 1,
        }
        pb.set_message(target.text().to_string());
        pb.inc(1);
    }

    pb.finish_and_clear();
    let total_time = total_start.elapsed();

    let total_rounds: usize = per_word.iter().map(|&(_, r)| r).sum();
    let average_rounds = if per_word.is_empty() {
        0.0
    } else {
        total_rounds as f64 / per_word.len() as f64
    };

    per_word.sort_by(|a, b| b.1.cmp(&a.1));
    let worst_words: Vec<(String, usize)> = per_word.iter().take(5).cloned().collect();

    TestAllStatistics {
        total_words: solved + failed,
        solved,
        failed,
        max_rounds: per_word.iter().map(|&(_, r)| r).max().unwrap_or(0),
        min_rounds: per_word.iter().map(|&(_, r)| r).min().unwrap_or(0),
        round_distribution,
        total_time,
        average_rounds,
        worst_words,
    }
}

/// Print aggregated statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "Results".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\nWords tested:   {}", stats.total_words);
    println!(
        "Solved:         {} ({})",
        stats.solved,
        format!("{:.1}%", percentage(stats.solved, stats.total_words)).green()
    );
    if stats.failed > 0 {
        println!("Failed:         {}", stats.failed.to_string().red());
    }
    println!("Average rounds: {:.3}", stats.average_rounds);
    println!(
        "Rounds range:   {} - {}",
        stats.min_rounds, stats.max_rounds
    );
    println!("Total time:     {:.2?}", stats.total_time);

    let mut rounds: Vec<&usize> = stats.round_distribution.keys().collect();
    rounds.sort_unstable();
    println!("\nDistribution:");
    for &r in rounds {
        let count = stats.round_distribution[&r];
        let bar_len = (count * 40).div_ceil(stats.solved.max(1));
        println!("  {r:>2}: {:<40} {count}", "█".repeat(bar_len));
    }

    if !stats.worst_words.is_empty() {
        println!("\nHardest words:");
        for (word, rounds) in &stats.worst_words {
            println!("  {word}  {rounds} rounds");
        }
    }
    println!();
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}
