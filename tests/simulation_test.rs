//! Integration test: full simulation runs
//!
//! Exercises the trial generator, accumulator, and reporting together the
//! way the binary drives them: seeded batches, observed runs with early
//! stops, and the summary text built from the final statistics.

use wirefly::combo::run_trial;
use wirefly::simulator::{
    run_simulation, run_simulation_observed, summary_text, SimConfig, TrialControl,
};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Config for a small, fully deterministic batch.
fn seeded_config(num_trials: u32, seed: u64) -> SimConfig {
    SimConfig::seeded(num_trials, seed)
}

// =============================================================================
// Whole-run invariants
// =============================================================================

#[test]
fn test_frequency_sums_equal_success_count() {
    let stats = run_simulation(&seeded_config(2000, 42));

    let wf_total: u32 = stats.wf_counts.values().sum();
    let flip_total: u32 = stats.flip_counts.values().sum();

    assert_eq!(wf_total, stats.successes);
    assert_eq!(flip_total, stats.successes);
    assert!(stats.successes <= stats.trials);
}

#[test]
fn test_seeded_runs_are_identical() {
    let a = run_simulation(&seeded_config(1000, 7));
    let b = run_simulation(&seeded_config(1000, 7));
    assert_eq!(a, b);
}

#[test]
fn test_default_parameters_mostly_succeed() {
    // At 4 HP with a 150-flip budget the combo lands far more often than
    // not; a batch where it never does means the generator is broken
    let stats = run_simulation(&seeded_config(500, 123));
    assert!(stats.successes > 0);
    assert!(stats.max_wireflies >= 1);
    assert!(stats.max_flips >= 1);
}

#[test]
fn test_max_sequence_belongs_to_max_flips() {
    let stats = run_simulation(&seeded_config(2000, 99));
    if stats.successes > 0 {
        assert_eq!(stats.max_sequence.len(), stats.max_flips as usize);
        // The winning flip is always heads
        assert!(stats.max_sequence.ends_with('H'));
    }
}

// =============================================================================
// Degenerate inputs
// =============================================================================

#[test]
fn test_zero_trials_is_an_empty_run() {
    let stats = run_simulation(&seeded_config(0, 1));
    assert_eq!(stats.successes, 0);
    assert!(stats.wf_counts.is_empty());
    assert!(stats.flip_counts.is_empty());
    assert_eq!(stats.success_rate(), 0.0);
}

#[test]
fn test_zero_flip_budget_never_succeeds() {
    let config = SimConfig {
        flips_per_trial: 0,
        ..seeded_config(200, 5)
    };
    let stats = run_simulation(&config);
    assert_eq!(stats.successes, 0);
    assert_eq!(stats.success_rate(), 0.0);
}

#[test]
fn test_one_hp_opponent_dies_to_first_heads() {
    // With 1 HP every trial that flips at least one heads succeeds, so a
    // generous budget makes failure essentially impossible
    let config = SimConfig {
        opponent_hp: 1,
        ..seeded_config(100, 9)
    };
    let stats = run_simulation(&config);
    assert_eq!(stats.successes, 100);
    assert_eq!(stats.wf_counts[&1], 100);
}

// =============================================================================
// Observed runs
// =============================================================================

#[test]
fn test_observer_sees_every_trial_in_order() {
    let mut seen = Vec::new();
    run_simulation_observed(&seeded_config(25, 3), |idx, _| {
        seen.push(idx);
        TrialControl::Continue
    });
    assert_eq!(seen, (0..25).collect::<Vec<_>>());
}

#[test]
fn test_cancelled_run_keeps_partial_statistics() {
    let full = run_simulation(&seeded_config(100, 13));

    let partial = run_simulation_observed(&seeded_config(100, 13), |idx, _| {
        if idx == 49 {
            TrialControl::Stop
        } else {
            TrialControl::Continue
        }
    });

    // Same seed, so the first 50 trials are the same trials; the partial
    // stats must be a prefix of the full run's accumulation
    assert!(partial.successes <= full.successes);
    assert_eq!(
        partial.wf_counts.values().sum::<u32>(),
        partial.successes
    );
    assert!(partial.max_flips <= full.max_flips);
}

// =============================================================================
// Reporting
// =============================================================================

#[test]
fn test_summary_reflects_final_statistics() {
    let stats = run_simulation(&seeded_config(400, 77));
    let text = summary_text(&stats);

    assert!(text.contains("Opponent started at 4 HP, 150 flips per attempt"));
    assert!(text.contains(&format!(
        "({} out of {} attempts)",
        stats.successes, stats.trials
    )));
    assert!(text.contains(&format!("Max wireflies used: {}", stats.max_wireflies)));
    assert!(text.contains(&format!("Max flips: {}, with sequence", stats.max_flips)));
}

#[test]
fn test_json_report_round_trips_counts() {
    let stats = run_simulation(&seeded_config(300, 55));
    let json = serde_json::to_string(&stats).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["trials"], 300);
    assert_eq!(value["successes"], stats.successes);
    let wf_sum: u64 = value["wf_counts"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(wf_sum, stats.successes as u64);
}

// =============================================================================
// Generator-level golden behavior
// =============================================================================

#[test]
fn test_generator_is_pure_given_a_seed() {
    let mut rng_a = ChaCha8Rng::seed_from_u64(4242);
    let mut rng_b = ChaCha8Rng::seed_from_u64(4242);

    for _ in 0..50 {
        let a = run_trial(&mut rng_a, 150, 4);
        let b = run_trial(&mut rng_b, 150, 4);
        assert_eq!(a, b);
    }
}
