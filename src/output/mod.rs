//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_feedback, print_game_over, print_simulation_result, print_solve_result, print_suggestion,
};
