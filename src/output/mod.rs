//! Terminal output formatting

mod display;
pub mod formatters;

pub use display::print_solve_result;
