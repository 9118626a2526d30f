//! Simulation of a single combo attempt.

use super::types::TrialOutcome;
use rand::Rng;

/// Run one attempt of the combo.
///
/// Each flip is a fair coin. Heads puts another wirefly on the battlefield
/// and raises the opponent's effective HP by one; the attempt succeeds as
/// soon as `wireflies * 2 >= hp`. Tails wipes the swarm but leaves the
/// accumulated HP in place.
///
/// `max_flips = 0` fails immediately. `opponent_hp <= 0` is accepted, and
/// the lethal check can then pass on the very first heads.
pub fn run_trial<R: Rng>(rng: &mut R, max_flips: u32, opponent_hp: i32) -> TrialOutcome {
    let mut hp = opponent_hp;
    let mut wireflies: i32 = 0;
    let mut sequence = String::new();

    for _ in 0..max_flips {
        if rng.gen_bool(0.5) {
            sequence.push('H');
            hp += 1;
            wireflies += 1;
            if wireflies * 2 >= hp {
                let flips = sequence.len() as i32;
                return TrialOutcome::success(wireflies, flips, sequence);
            }
        } else {
            sequence.push('T');
            wireflies = 0;
        }
    }

    TrialOutcome::failure()
}
