//! Balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of seeded runs with the autopilot to analyze:
//! - How often each installment is won with a given policy
//! - Which bosses end runs
//! - How long battles last

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{BossStats, SimReport};
pub use runner::{run_simulation, simulate_single_run, RunStats};
