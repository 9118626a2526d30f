//! Main simulation runner.
//!
//! The loop itself knows nothing about the terminal: callers that want a
//! live view pass an observer which is invoked once per trial and may stop
//! the run. Statistics accumulated before a stop are returned as-is.

use super::config::SimConfig;
use super::stats::RunStats;
use crate::combo::run_trial;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Observer verdict after each trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialControl {
    Continue,
    Stop,
}

/// Run the full simulation silently.
pub fn run_simulation(config: &SimConfig) -> RunStats {
    run_simulation_observed(config, |_, _| TrialControl::Continue)
}

/// Run the simulation, invoking `observer` after every trial with the
/// 0-based trial index and the statistics so far.
///
/// A single RNG covers the whole run, so a fixed `config.seed` makes every
/// trial — and therefore the final statistics — reproducible.
pub fn run_simulation_observed<F>(config: &SimConfig, mut observer: F) -> RunStats
where
    F: FnMut(u32, &RunStats) -> TrialControl,
{
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut stats = RunStats::new(config.num_trials, config.flips_per_trial, config.opponent_hp);

    for trial_idx in 0..config.num_trials {
        let outcome = run_trial(&mut rng, config.flips_per_trial, config.opponent_hp);
        if outcome.succeeded {
            stats.record(&outcome);
        }

        if observer(trial_idx, &stats) == TrialControl::Stop {
            break;
        }
    }

    stats
}
