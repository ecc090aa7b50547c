//! Terminal output formatting
//!
//! Display utilities for the plain terminal mode.

pub mod display;
pub mod formatters;

pub use display::{print_final_score, print_header, print_round};
