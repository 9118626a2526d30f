//! Running statistics for a simulation run.
//!
//! Statistics are tracked externally from trial outcomes: the runner feeds
//! each successful [`TrialOutcome`] into [`RunStats::record`].

use crate::combo::TrialOutcome;
use std::collections::BTreeMap;

/// Accumulated outcomes across one run.
///
/// Append-only: recording only ever adds to the frequency buckets and
/// ratchets the maxima upward. The frequency maps are keyed by outcome
/// value and each sums to `successes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    /// Configured number of trials for the run
    pub trials: u32,
    /// Flip budget per trial
    pub flips_per_trial: u32,
    /// Opponent HP each trial starts from
    pub opponent_hp: i32,

    /// wireflies-at-lethal -> number of successful trials
    pub wf_counts: BTreeMap<i32, u32>,
    /// flips-to-lethal -> number of successful trials
    pub flip_counts: BTreeMap<i32, u32>,

    /// Total successful trials recorded
    pub successes: u32,

    // Most recent success
    pub last_wireflies: i32,
    pub last_flips: i32,
    pub last_sequence: String,

    // Running maxima; the two are tracked independently, and the sequence
    // belongs to the trial that set the flip-count max
    pub max_wireflies: i32,
    pub max_flips: i32,
    pub max_sequence: String,
}

impl RunStats {
    /// Fresh statistics for a run of `trials` attempts.
    pub fn new(trials: u32, flips_per_trial: u32, opponent_hp: i32) -> Self {
        Self {
            trials,
            flips_per_trial,
            opponent_hp,
            wf_counts: BTreeMap::new(),
            flip_counts: BTreeMap::new(),
            successes: 0,
            last_wireflies: 0,
            last_flips: 0,
            last_sequence: String::new(),
            max_wireflies: 0,
            max_flips: 0,
            max_sequence: String::new(),
        }
    }

    /// Record one successful trial.
    ///
    /// Callers only pass successes; failed trials carry sentinel fields and
    /// are not counted.
    pub fn record(&mut self, outcome: &TrialOutcome) {
        debug_assert!(outcome.succeeded);

        self.successes += 1;

        self.last_wireflies = outcome.wireflies;
        self.last_flips = outcome.flips;
        self.last_sequence = outcome.sequence.clone();

        *self.wf_counts.entry(outcome.wireflies).or_insert(0) += 1;
        *self.flip_counts.entry(outcome.flips).or_insert(0) += 1;

        if self.max_wireflies < outcome.wireflies {
            self.max_wireflies = outcome.wireflies;
        }
        if self.max_flips < outcome.flips {
            self.max_flips = outcome.flips;
            self.max_sequence = outcome.sequence.clone();
        }
    }

    /// Success rate as a percentage, defined as 0 for an empty run.
    pub fn success_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.successes as f64 / self.trials as f64 * 100.0
        }
    }
}

// Hand-rolled so the JSON report can carry the computed success rate
// alongside the raw fields.
impl serde::Serialize for RunStats {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("RunStats", 12)?;
        state.serialize_field("trials", &self.trials)?;
        state.serialize_field("flips_per_trial", &self.flips_per_trial)?;
        state.serialize_field("opponent_hp", &self.opponent_hp)?;
        state.serialize_field("successes", &self.successes)?;
        state.serialize_field("success_rate", &self.success_rate())?;
        state.serialize_field("wf_counts", &self.wf_counts)?;
        state.serialize_field("flip_counts", &self.flip_counts)?;
        state.serialize_field("last_wireflies", &self.last_wireflies)?;
        state.serialize_field("last_flips", &self.last_flips)?;
        state.serialize_field("max_wireflies", &self.max_wireflies)?;
        state.serialize_field("max_flips", &self.max_flips)?;
        state.serialize_field("max_sequence", &self.max_sequence)?;
        state.end()
    }
}
