//! Kordle Solver - CLI
//!
//! Interactive assistant and evaluation harness for the Korean-jamo Wordle.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kordle_solver::{
    commands::{
        SolveConfig, StdConsole, print_test_all_statistics, run_interactive, run_test_all,
        solve_word,
    },
    core::{Alphabet, Word},
    output::print_solve_result,
    solver::Solver,
    wordlists::{SAMPLE, loader},
};

#[derive(Parser)]
#[command(
    name = "kordle_solver",
    about = "Constraint-tracking solver for Kordle (Korean-jamo Wordle)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the solution word list (default: embedded sample)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Path to a separate guess-pool list (default: the solution list)
    #[arg(short = 'g', long, global = true)]
    guess_list: Option<String>,

    /// Word length in jamo
    #[arg(short = 'l', long, global = true, default_value = "6")]
    length: usize,

    /// Alphabet letters (default: the 28 basic Korean jamo)
    #[arg(short = 'a', long, global = true)]
    alphabet: Option<String>,

    /// Fixed opening guesses, comma-separated, played before any scoring
    #[arg(short = 'f', long, global = true, value_delimiter = ',')]
    first_words: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive solver mode (default)
    Simple,

    /// Solve a specific target word and print the trace
    Solve {
        /// The target word, as decomposed jamo
        word: String,

        /// Show candidate counts and expected-remaining per round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run the solver against every word in the list
    TestAll {
        /// Limit number of words to test
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Test a random sample of this many words instead
        #[arg(short, long)]
        sample: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let alphabet = match &cli.alphabet {
        Some(letters) => Alphabet::new(letters),
        None => Alphabet::korean_jamo(),
    };

    let solutions = load_words(cli.wordlist.as_deref(), &alphabet, cli.length)?;
    anyhow::ensure!(!solutions.is_empty(), "solution word list is empty");

    let guesses = match cli.guess_list.as_deref() {
        Some(path) => loader::load_from_file(path, &alphabet, cli.length)
            .with_context(|| format!("loading guess list from {path}"))?,
        None => solutions.clone(),
    };

    let openers: Vec<Word> = cli
        .first_words
        .iter()
        .map(|text| {
            Word::parse(text, &alphabet, cli.length)
                .map_err(|e| anyhow::anyhow!("invalid first word '{text}': {e}"))
        })
        .collect::<Result<_>>()?;

    let mut solver = Solver::with_guess_pool(alphabet, cli.length, solutions, guesses)
        .with_first_moves(openers);

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => {
            run_interactive(&mut solver, &mut StdConsole).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { word, verbose } => {
            let config = SolveConfig::new(word);
            let result = solve_word(&config, &mut solver).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::TestAll { limit, sample } => {
            let targets = solver.candidates().to_vec();
            let stats = run_test_all(&mut solver, &targets, limit, sample);
            print_test_all_statistics(&stats);
            Ok(())
        }
    }
}

/// Load the solution list from a file, or fall back to the embedded sample
fn load_words(path: Option<&str>, alphabet: &Alphabet, word_len: usize) -> Result<Vec<Word>> {
    match path {
        Some(path) => loader::load_from_file(path, alphabet, word_len)
            .with_context(|| format!("loading word list from {path}")),
        None => Ok(loader::words_from_lines(
            SAMPLE.iter().copied(),
            alphabet,
            word_len,
        )),
    }
}
