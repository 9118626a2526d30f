//! Wirefly - Monte Carlo simulator for the Wirefly Hive coin-flip combo.
//!
//! This module exposes the trial generator, statistics, and presentation
//! helpers for testing and external use.

pub mod build_info;
pub mod combo;
pub mod constants;
pub mod logbook;
pub mod plot;
pub mod simulator;
pub mod ui;
