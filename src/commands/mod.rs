//! Command implementations

pub mod analyze;
pub mod simple;
pub mod simulate;

pub use analyze::{AnalysisResult, analyze_pair};
pub use simple::run_simple;
pub use simulate::{SimulateConfig, SimulateResult, run_simulate};
