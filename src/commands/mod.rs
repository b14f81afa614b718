//! Command implementations

pub mod simple;
pub mod solve;
pub mod test_all;

pub use simple::{Console, StdConsole, run_interactive};
pub use solve::{SolveConfig, SolveResult, solve_word};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
