//! Simulation configuration.

use crate::constants::{
    DEFAULT_FLIPS_PER_TRIAL, DEFAULT_LOG_NAME, DEFAULT_OPPONENT_HP, DEFAULT_TRIALS,
};
use crate::plot::PlotMode;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent combo attempts to simulate
    pub num_trials: u32,

    /// Coin flips allowed per attempt before it gives up
    pub flips_per_trial: u32,

    /// Opponent HP at the start of each attempt
    pub opponent_hp: i32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Whether to show the live terminal view during the run
    pub show_progress: bool,

    /// Where the histograms go: saved as PNGs or shown in the terminal
    pub plot_mode: PlotMode,

    /// Name of the append-style result log
    pub log_name: String,

    /// If true, existing graph files are silently overwritten; otherwise a
    /// numbered sibling name is derived
    pub overwrite_plots: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_trials: DEFAULT_TRIALS,
            flips_per_trial: DEFAULT_FLIPS_PER_TRIAL,
            opponent_hp: DEFAULT_OPPONENT_HP,
            seed: None,
            show_progress: false,
            plot_mode: PlotMode::Save,
            log_name: DEFAULT_LOG_NAME.to_string(),
            overwrite_plots: false,
        }
    }
}

impl SimConfig {
    /// Quick config for deterministic tests.
    pub fn seeded(num_trials: u32, seed: u64) -> Self {
        Self {
            num_trials,
            seed: Some(seed),
            ..Default::default()
        }
    }
}
