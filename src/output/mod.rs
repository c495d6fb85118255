//! Terminal output formatting
//!
//! Display utilities for the CLI and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_game_over, print_guess_count, print_guess_table, print_instructions, print_roster,
    print_share, print_simulation_result,
};
