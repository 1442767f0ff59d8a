//! Simulation report generation.

use std::collections::BTreeMap;

use serde::Serialize;

use super::runner::RunStats;
use crate::combat::BattlePhase;
use crate::core::Variant;
use crate::progression::Ending;
use crate::roster::{roster, BossId};
use crate::session::RunOutcome;

/// Per-boss aggregates over every run that entered the room.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BossStats {
    pub id: u8,
    pub name: String,
    pub battles: u32,
    pub victories: u32,
    /// Runs that died in this room.
    pub defeats: u32,
    pub forfeits: u32,
    pub avg_rounds: f64,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub variant: Variant,
    pub num_runs: u32,
    pub completed: u32,
    pub defeats: u32,
    pub forfeits: u32,
    pub quits: u32,

    pub endings: BTreeMap<String, u32>,

    pub avg_bosses_defeated: f64,
    pub avg_rounds_per_battle: f64,

    /// Runs by number of bosses defeated.
    pub bosses_reached: Vec<u32>,
    pub per_boss: Vec<BossStats>,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

fn ending_name(ending: Ending) -> &'static str {
    match ending {
        Ending::DuelVictory => "duel victory",
        Ending::IdolsVictory => "idols victory",
        Ending::VicesEnding => "vices ending",
        Ending::TrueEnding => "true ending",
    }
}

impl SimReport {
    pub fn from_runs(variant: Variant, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let count = |pred: &dyn Fn(&RunOutcome) -> bool| {
            runs.iter().filter(|r| pred(&r.outcome)).count() as u32
        };
        let completed = count(&|o| matches!(o, RunOutcome::Completed(_)));
        let defeats = count(&|o| matches!(o, RunOutcome::Defeated(_)));
        let forfeits = count(&|o| matches!(o, RunOutcome::Forfeited(_)));
        let quits = count(&|o| matches!(o, RunOutcome::Quit));

        let mut endings = BTreeMap::new();
        for run in &runs {
            if let RunOutcome::Completed(ending) = run.outcome {
                *endings.entry(ending_name(ending).to_string()).or_insert(0) += 1;
            }
        }

        let bosses = roster(variant);
        let mut per_boss: Vec<BossStats> = bosses
            .iter()
            .enumerate()
            .map(|(i, def)| BossStats {
                id: i as u8,
                name: def.name.to_string(),
                ..Default::default()
            })
            .collect();
        let mut rounds_per_boss = vec![0u64; bosses.len()];
        let mut bosses_reached = vec![0u32; bosses.len() + 1];
        let mut total_battles = 0u64;
        let mut total_rounds = 0u64;

        for run in &runs {
            let defeated = run.bosses_defeated().min(bosses.len());
            bosses_reached[defeated] += 1;

            for battle in &run.battles {
                total_battles += 1;
                total_rounds += battle.rounds as u64;
                let BossId(id) = battle.boss;
                let Some(stats) = per_boss.get_mut(id as usize) else {
                    continue;
                };
                stats.battles += 1;
                rounds_per_boss[id as usize] += battle.rounds as u64;
                match battle.result {
                    BattlePhase::PlayerVictory => stats.victories += 1,
                    BattlePhase::PlayerDefeat => stats.defeats += 1,
                    _ => stats.forfeits += 1,
                }
            }
        }

        for (stats, rounds) in per_boss.iter_mut().zip(&rounds_per_boss) {
            stats.avg_rounds = *rounds as f64 / stats.battles.max(1) as f64;
        }

        let avg_bosses_defeated = runs.iter().map(|r| r.bosses_defeated() as f64).sum::<f64>()
            / num_runs.max(1) as f64;
        let avg_rounds_per_battle = total_rounds as f64 / total_battles.max(1) as f64;

        Self {
            variant,
            num_runs,
            completed,
            defeats,
            forfeits,
            quits,
            endings,
            avg_bosses_defeated,
            avg_rounds_per_battle,
            bosses_reached,
            per_boss,
            run_stats: runs,
        }
    }

    pub fn win_rate(&self) -> f64 {
        self.completed as f64 / self.num_runs.max(1) as f64 * 100.0
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();
        let pct = |n: u32| n as f64 / self.num_runs.max(1) as f64 * 100.0;

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str(&format!("                    (variant: {})\n", self.variant));
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} completed, {} defeated, {} forfeited\n\n",
            self.num_runs, self.completed, self.defeats, self.forfeits
        ));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Win Rate:            {:.1}%\n", self.win_rate()));
        report.push_str(&format!("  Defeat Rate:         {:.1}%\n", pct(self.defeats)));
        report.push_str(&format!("  Forfeit Rate:        {:.1}%\n", pct(self.forfeits)));
        for (ending, runs) in &self.endings {
            report.push_str(&format!("  {:<20} {}\n", format!("{}:", ending), runs));
        }
        report.push('\n');

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Bosses Defeated: {:.2}\n",
            self.avg_bosses_defeated
        ));
        report.push_str(&format!(
            "  Avg Rounds/Battle:   {:.1}\n\n",
            self.avg_rounds_per_battle
        ));

        report.push_str("── BOSSES REACHED ───────────────────────────────────────────────\n");
        for (defeated, runs) in self.bosses_reached.iter().enumerate() {
            let share = pct(*runs);
            let bar: String = "█".repeat((share / 5.0) as usize);
            report.push_str(&format!("  {:2} down: {:>5.1}% {}\n", defeated, share, bar));
        }
        report.push('\n');

        report.push_str("── PER-BOSS BREAKDOWN ───────────────────────────────────────────\n");
        report.push_str("  Boss               Battles   Wins   Deaths   Forfeits   Rounds\n");
        report.push_str("  ────               ───────   ────   ──────   ────────   ──────\n");
        for boss in self.per_boss.iter().filter(|b| b.battles > 0) {
            report.push_str(&format!(
                "  {:<18} {:7}   {:4}   {:6}   {:8}   {:6.1}\n",
                boss.name, boss.battles, boss.victories, boss.defeats, boss.forfeits, boss.avg_rounds
            ));
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        for boss in &self.per_boss {
            if boss.battles > 0 {
                let death_rate = boss.defeats as f64 / boss.battles as f64;
                if death_rate > 0.5 {
                    report.push_str(&format!(
                        "  ⚠️  {} wins {:.1}% of its fights\n",
                        boss.name,
                        death_rate * 100.0
                    ));
                }
            }
        }
        if self.forfeits > 0 {
            report.push_str("  ⚠️  Some runs stalled and ran out of choices\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Serialized by hand so the derived rates ride along.
impl Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 12)?;
        state.serialize_field("variant", &self.variant)?;
        state.serialize_field("num_runs", &self.num_runs)?;
        state.serialize_field("completed", &self.completed)?;
        state.serialize_field("defeats", &self.defeats)?;
        state.serialize_field("forfeits", &self.forfeits)?;
        state.serialize_field("quits", &self.quits)?;
        state.serialize_field("win_rate", &self.win_rate())?;
        state.serialize_field("endings", &self.endings)?;
        state.serialize_field("avg_bosses_defeated", &self.avg_bosses_defeated)?;
        state.serialize_field("avg_rounds_per_battle", &self.avg_rounds_per_battle)?;
        state.serialize_field("bosses_reached", &self.bosses_reached)?;
        state.serialize_field("per_boss", &self.per_boss)?;
        state.end()
    }
}
