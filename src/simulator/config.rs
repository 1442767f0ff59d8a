//! Simulation configuration.

use crate::core::Variant;
use crate::session::Policy;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of playthroughs
    pub num_runs: u32,

    /// Base seed; run `i` uses `seed + i` (None = random)
    pub seed: Option<u64>,

    pub variant: Variant,

    pub policy: Policy,

    /// Menu choices per run before the autopilot forfeits
    pub choice_budget: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            variant: Variant::default(),
            policy: Policy::default(),
            choice_budget: crate::session::autopilot::DEFAULT_CHOICE_BUDGET,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a short balance check of one installment.
    pub fn quick(variant: Variant) -> Self {
        Self {
            num_runs: 100,
            seed: Some(42),
            variant,
            ..Default::default()
        }
    }
}
