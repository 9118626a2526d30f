//! Run summary generation.
//!
//! Everything here runs after the trial loop: the in-memory statistics are
//! already complete, so an I/O failure while plotting or logging loses no
//! data.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::config::SimConfig;
use super::stats::RunStats;
use crate::constants::{FLIP_GRAPH_NAME, WF_GRAPH_NAME};
use crate::logbook;
use crate::plot::{self, PlotMode};
use crate::ui::chart_scene;

/// Human-readable summary of a finished run.
pub fn summary_text(stats: &RunStats) -> String {
    format!(
        "Opponent started at {} HP, {} flips per attempt\n\
         Success rate: {:.3}% ({} out of {} attempts)\n\
         Max wireflies used: {}\n\
         Max flips: {}, with sequence\n{}",
        stats.opponent_hp,
        stats.flips_per_trial,
        stats.success_rate(),
        stats.successes,
        stats.trials,
        stats.max_wireflies,
        stats.max_flips,
        stats.max_sequence,
    )
}

/// Render both histograms, append the summary to the log, and echo it to
/// stdout.
pub fn summarize(stats: &RunStats, config: &SimConfig) -> io::Result<()> {
    let title = format!(
        "n = {} with {} flips per attempt, successful = {} ({:.3}%)",
        stats.trials,
        stats.flips_per_trial,
        stats.successes,
        stats.success_rate(),
    );

    render_histogram(config, &stats.wf_counts, "Wireflies used", &title, WF_GRAPH_NAME)?;
    render_histogram(config, &stats.flip_counts, "Flips used", &title, FLIP_GRAPH_NAME)?;

    logbook::append_entry(Path::new(&config.log_name), &summary_text(stats))
}

fn render_histogram(
    config: &SimConfig,
    data: &BTreeMap<i32, u32>,
    x_label: &str,
    title: &str,
    file_name: &str,
) -> io::Result<()> {
    match config.plot_mode {
        PlotMode::Save => {
            plot::save_histogram(
                data,
                title,
                x_label,
                Path::new(file_name),
                config.overwrite_plots,
            )?;
            Ok(())
        }
        PlotMode::Show => chart_scene::show_histogram(data, title, x_label),
    }
}

/// Write the statistics as a timestamped JSON report and return its path.
pub fn write_json_report(stats: &RunStats) -> io::Result<PathBuf> {
    let json = serde_json::to_string_pretty(stats)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let filename = format!(
        "wirefly_report_{}.json",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    fs::write(&filename, json)?;
    Ok(PathBuf::from(filename))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combo::TrialOutcome;

    #[test]
    fn test_summary_contains_run_parameters() {
        let mut stats = RunStats::new(4, 150, 4);
        stats.record(&TrialOutcome::success(4, 4, "HHHH".to_string()));

        let text = summary_text(&stats);
        assert!(text.contains("Opponent started at 4 HP, 150 flips per attempt"));
        assert!(text.contains("Success rate: 25.000% (1 out of 4 attempts)"));
        assert!(text.contains("Max wireflies used: 4"));
        assert!(text.ends_with("with sequence\nHHHH"));
    }

    #[test]
    fn test_summary_rate_is_zero_for_empty_run() {
        let stats = RunStats::new(0, 150, 4);
        let text = summary_text(&stats);
        assert!(text.contains("Success rate: 0.000% (0 out of 0 attempts)"));
    }
}
