//! Hit, crit and damage resolution.
//!
//! Three stat pairs feed the formula:
//! - precision / evasion scales the hit chance
//! - luck / protection scales the crit chance
//! - attack / defence scales the damage roll
//!
//! Every stat is floored at 1 before it enters a ratio, so a boss written with
//! negative defence takes damage as if its defence were 1.

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    CRIT_MULTIPLIER, DAMAGE_ROLL_MAX, DAMAGE_ROLL_MIN, MIN_STAT_FOR_RATIO,
};
use crate::core::{Dice, Rules, StatBlock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Miss,
    Hit,
    Crit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    Melee,
    Spell,
}

/// Summary of the last attack a combatant made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitResult {
    pub outcome: Outcome,
    /// Damage rolled, before the defender's HP clamp.
    pub damage: i32,
    pub source: Source,
}

impl HitResult {
    pub fn miss() -> Self {
        Self {
            outcome: Outcome::Miss,
            damage: 0,
            source: Source::Melee,
        }
    }

    /// Hit or crit; spells count as hits.
    pub fn landed(&self) -> bool {
        !matches!(self.outcome, Outcome::Miss)
    }

    pub fn is_crit(&self) -> bool {
        matches!(self.outcome, Outcome::Crit)
    }
}

/// What kind of attack is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strike {
    /// Rolled against the formula.
    Melee,
    /// Fixed damage that always lands.
    Spell(i32),
}

fn ratio(numerator: i32, denominator: i32) -> f64 {
    numerator.max(MIN_STAT_FOR_RATIO) as f64 / denominator.max(MIN_STAT_FOR_RATIO) as f64
}

/// Percent chance for a melee attack to land.
pub fn hit_chance(attacker: &StatBlock, defender: &StatBlock, rules: &Rules) -> f64 {
    ratio(attacker.precision, defender.evasion) * rules.base_hit
}

/// Percent chance for a landed melee attack to crit.
pub fn crit_chance(attacker: &StatBlock, defender: &StatBlock, rules: &Rules) -> f64 {
    ratio(attacker.luck, defender.protection) * rules.base_crit
}

/// Non-crit damage for a given base roll, rounded up.
pub fn base_damage(attacker: &StatBlock, defender: &StatBlock, roll: i32) -> i32 {
    (ratio(attacker.attack, defender.defence) * roll as f64).ceil() as i32
}

/// Resolves one attack and applies its damage to `defender.hp`.
///
/// Draw order for a melee strike: hit roll, then crit roll, then the damage
/// roll. A miss stops after the first draw; spells draw nothing.
pub fn resolve_attack(
    attacker: &StatBlock,
    defender: &mut StatBlock,
    strike: Strike,
    rules: &Rules,
    dice: &mut impl Dice,
) -> HitResult {
    let result = match strike {
        Strike::Spell(damage) => HitResult {
            outcome: Outcome::Hit,
            damage: damage.max(0),
            source: Source::Spell,
        },
        Strike::Melee => {
            let hit_roll = dice.percent();
            if hit_roll as f64 > hit_chance(attacker, defender, rules) {
                HitResult::miss()
            } else {
                let crit_roll = dice.percent();
                let is_crit = crit_roll as f64 <= crit_chance(attacker, defender, rules);
                let roll = dice.roll(DAMAGE_ROLL_MIN, DAMAGE_ROLL_MAX);
                let damage = base_damage(attacker, defender, roll);
                if is_crit {
                    HitResult {
                        outcome: Outcome::Crit,
                        damage: damage * CRIT_MULTIPLIER,
                        source: Source::Melee,
                    }
                } else {
                    HitResult {
                        outcome: Outcome::Hit,
                        damage,
                        source: Source::Melee,
                    }
                }
            }
        }
    };

    defender.hp.drain(result.damage);
    tracing::debug!(
        outcome = ?result.outcome,
        damage = result.damage,
        defender_hp = defender.hp.current(),
        "attack resolved"
    );
    result
}
