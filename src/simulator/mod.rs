//! Monte Carlo harness for the combo.
//!
//! Runs many independent trials, accumulates outcome statistics, and
//! renders the results. The run loop takes an injected observer callback,
//! so the live terminal view (and its cancellation handling) stays out of
//! the statistical core.

mod config;
mod report;
mod runner;
mod stats;

pub use config::SimConfig;
pub use report::{summarize, summary_text, write_json_report};
pub use runner::{run_simulation, run_simulation_observed, TrialControl};
pub use stats::RunStats;
