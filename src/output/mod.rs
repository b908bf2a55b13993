//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_simulate_result, session_view};
pub use formatters::{CHAIN_SEPARATOR, chain_display, difficulty_bar};
