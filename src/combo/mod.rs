//! The Wirefly Hive combo: flip coins, grow the swarm, swing for lethal.

mod logic;
mod types;

pub use logic::run_trial;
pub use types::TrialOutcome;
