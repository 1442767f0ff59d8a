//! Plays whole sessions with the autopilot, one seeded RNG per run.
//!
//! Runs go through `GameSession` exactly as the terminal game does, so the
//! numbers reflect real rules rather than a simulator-specific model.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use super::config::SimConfig;
use super::report::SimReport;
use crate::error::GameError;
use crate::session::{Autopilot, BattleRecord, GameSession, RunOutcome};

/// What one playthrough produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub seed: Option<u64>,
    pub outcome: RunOutcome,
    pub battles: Vec<BattleRecord>,
    pub choices: u32,
}

impl RunStats {
    pub fn bosses_defeated(&self) -> usize {
        self.battles
            .iter()
            .filter(|b| b.result == crate::combat::BattlePhase::PlayerVictory)
            .count()
    }
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, GameError> {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = config.seed.map(|seed| seed.wrapping_add(run_idx as u64));
        let run = simulate_single_run(config, seed)?;

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {:?}, {} bosses, {} battles, {} choices",
                run_idx + 1,
                config.num_runs,
                run.outcome,
                run.bosses_defeated(),
                run.battles.len(),
                run.choices
            );
        }
        all_runs.push(run);
    }

    Ok(SimReport::from_runs(config.variant, all_runs))
}

/// Plays one session to its end.
pub fn simulate_single_run(config: &SimConfig, seed: Option<u64>) -> Result<RunStats, GameError> {
    let rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let pilot = Autopilot::new(config.policy).with_budget(config.choice_budget);
    let mut session = GameSession::with_rng(config.variant, rng, pilot);
    let outcome = session.run()?;
    tracing::debug!(?seed, ?outcome, "simulated run finished");

    Ok(RunStats {
        seed,
        outcome,
        battles: session.records().to_vec(),
        choices: session.presenter().choices(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Variant;
    use crate::session::Policy;

    fn config(variant: Variant, policy: Policy) -> SimConfig {
        SimConfig {
            num_runs: 5,
            seed: Some(7),
            variant,
            policy,
            verbosity: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_runs_are_reproducible() {
        let cfg = config(Variant::Vices, Policy::Balanced);
        let a = simulate_single_run(&cfg, Some(11)).unwrap();
        let b = simulate_single_run(&cfg, Some(11)).unwrap();
        assert_eq!(a.outcome, b.outcome);
        assert_eq!(a.battles, b.battles);
    }

    #[test]
    fn test_every_variant_finishes() {
        for variant in Variant::ALL {
            for policy in [Policy::AlwaysFight, Policy::Balanced] {
                let report = run_simulation(&config(variant, policy)).unwrap();
                assert_eq!(report.num_runs, 5);
                assert_eq!(
                    report.completed + report.defeats + report.forfeits + report.quits,
                    report.num_runs
                );
            }
        }
    }

    #[test]
    fn test_tiny_budget_forfeits() {
        let cfg = SimConfig {
            choice_budget: 1,
            ..config(Variant::Idols, Policy::AlwaysFight)
        };
        let run = simulate_single_run(&cfg, Some(3)).unwrap();
        assert!(matches!(run.outcome, RunOutcome::Forfeited(_)));
    }
}
