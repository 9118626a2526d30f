// Default run parameters
pub const DEFAULT_TRIALS: u32 = 2000;
pub const DEFAULT_FLIPS_PER_TRIAL: u32 = 150; // 2e8 trials peaked at 84 flips once
pub const DEFAULT_OPPONENT_HP: i32 = 4;

// Output defaults
pub const DEFAULT_LOG_NAME: &str = "result_log.txt";
pub const WF_GRAPH_NAME: &str = "wf_graph.png";
pub const FLIP_GRAPH_NAME: &str = "flip_graph.png";

// Plot dimensions
pub const PLOT_WIDTH: u32 = 1650;
pub const PLOT_HEIGHT: u32 = 900;

// Textual progress bar width in characters
pub const PROGRESS_BAR_WIDTH: usize = 75;

// Live UI refresh: poll the keyboard with zero timeout so the trial loop
// never blocks on input
pub const LIVE_POLL_MS: u64 = 0;
