//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_families, print_guess_report, print_length_histogram,
    print_simulation_result,
};
