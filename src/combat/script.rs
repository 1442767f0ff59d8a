//! Per-boss turn policies.

use serde::{Deserialize, Serialize};

use crate::core::constants::*;
use crate::core::Dice;

use super::formula::HitResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BossScript {
    /// Always attacks.
    #[default]
    Striker,
    /// The duel enemy: fixed outcome table, pity after a successful cry.
    Brute,
    Sloth,
    Gluttony,
    Lust,
    Wrath,
    Envy,
    Greed,
    Pride,
    OriginalSin,
}

/// What the boss knows when it picks its move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossView {
    /// The all-purpose percent draw for this turn.
    pub r: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub ascended: bool,
    /// Set when the player's cry succeeded this round.
    pub pitied: bool,
}

/// The boss's main move for the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Attack,
    /// Roll the duel enemy table.
    TableAttack,
    Idle,
    Heal(i32),
    /// Hurts itself out of sympathy.
    Pity,
    /// One-time power-up: all stats rise, no attack.
    Ascend,
    ChargeUp,
}

/// Side effects triggered around the main attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Player loses this much HP.
    SharePain(i32),
    /// Boss attack rises by this much.
    Rage(i32),
    /// Boss heals this much.
    Leech(i32),
    /// Player loses this much gold.
    Steal(i32),
    /// Boss attacks once more.
    StrikeAgain,
}

fn ceil_div(amount: i32, divisor: f64) -> i32 {
    (amount as f64 / divisor).ceil() as i32
}

impl BossScript {
    pub fn decide(&self, view: &BossView, dice: &mut impl Dice) -> Intent {
        let hp = view.hp as f64;
        let r = view.r as f64;
        match self {
            BossScript::Brute => {
                if view.pitied {
                    Intent::Pity
                } else {
                    Intent::TableAttack
                }
            }
            BossScript::Sloth => {
                if r > hp / SLOTH_HP_DIVISOR {
                    Intent::Attack
                } else {
                    Intent::Idle
                }
            }
            BossScript::Gluttony => {
                if r < 100.0 - hp / GLUTTONY_HP_DIVISOR {
                    Intent::Attack
                } else {
                    Intent::Heal(dice.roll_pair(GLUTTONY_HEAL))
                }
            }
            BossScript::OriginalSin => {
                let threshold = view.max_hp as f64 * ORIGINAL_SIN_PHASE_FRACTION;
                if !view.ascended && hp <= threshold {
                    Intent::Ascend
                } else if view.ascended && r < 100.0 - hp / ORIGINAL_SIN_CHARGE_DIVISOR {
                    Intent::ChargeUp
                } else {
                    Intent::Attack
                }
            }
            BossScript::Striker
            | BossScript::Lust
            | BossScript::Wrath
            | BossScript::Envy
            | BossScript::Greed
            | BossScript::Pride => Intent::Attack,
        }
    }

    /// Reaction to the player's last action, resolved before the boss attacks.
    pub fn before_attack(&self, player_last: Option<&HitResult>) -> Option<Reaction> {
        let hit = player_last.filter(|h| h.landed())?;
        match self {
            BossScript::Lust => Some(Reaction::SharePain(ceil_div(hit.damage, LUST_SHARE_DIVISOR))),
            BossScript::Wrath => Some(Reaction::Rage(ceil_div(hit.damage, WRATH_RAGE_DIVISOR))),
            _ => None,
        }
    }

    /// Reaction to the boss's own attack. Greed draws its theft amount here.
    pub fn after_attack(&self, own: &HitResult, r: i32, dice: &mut impl Dice) -> Option<Reaction> {
        if !own.landed() {
            return None;
        }
        match self {
            BossScript::Envy => Some(Reaction::Leech(ceil_div(own.damage, ENVY_LEECH_DIVISOR))),
            BossScript::Greed if r < GREED_STEAL_CHANCE => {
                Some(Reaction::Steal(dice.roll_pair(GREED_STEAL)))
            }
            BossScript::Pride if own.is_crit() => Some(Reaction::StrikeAgain),
            _ => None,
        }
    }

    /// Whether this script uses the formula's all-purpose percent draw.
    pub fn draws_percent(&self) -> bool {
        !matches!(self, BossScript::Brute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::formula::{Outcome, Source};
    use crate::core::ScriptedDice;

    fn view(r: i32, hp: i32, max_hp: i32) -> BossView {
        BossView {
            r,
            hp,
            max_hp,
            ascended: false,
            pitied: false,
        }
    }

    fn hit(outcome: Outcome, damage: i32) -> HitResult {
        HitResult {
            outcome,
            damage,
            source: Source::Melee,
        }
    }

    #[test]
    fn test_sloth_idles_more_at_high_hp() {
        let mut dice = ScriptedDice::new([]);
        // 150 / 3 = 50
        assert_eq!(BossScript::Sloth.decide(&view(50, 150, 150), &mut dice), Intent::Idle);
        assert_eq!(BossScript::Sloth.decide(&view(51, 150, 150), &mut dice), Intent::Attack);
        assert_eq!(BossScript::Sloth.decide(&view(0, 0, 150), &mut dice), Intent::Idle);
    }

    #[test]
    fn test_gluttony_heals_when_roll_is_high() {
        let mut dice = ScriptedDice::new([75]);
        // 100 - 150 / 3 = 50
        assert_eq!(
            BossScript::Gluttony.decide(&view(49, 150, 150), &mut dice),
            Intent::Attack
        );
        assert_eq!(
            BossScript::Gluttony.decide(&view(50, 150, 150), &mut dice),
            Intent::Heal(75)
        );
    }

    #[test]
    fn test_original_sin_ascends_once_then_charges() {
        let mut dice = ScriptedDice::new([]);
        let script = BossScript::OriginalSin;
        assert_eq!(script.decide(&view(0, 301, 500), &mut dice), Intent::Attack);
        assert_eq!(script.decide(&view(0, 300, 500), &mut dice), Intent::Ascend);

        let ascended = BossView {
            ascended: true,
            ..view(39, 300, 500)
        };
        // 100 - 300 / 5 = 40
        assert_eq!(script.decide(&ascended, &mut dice), Intent::ChargeUp);
        let ascended = BossView { r: 40, ..ascended };
        assert_eq!(script.decide(&ascended, &mut dice), Intent::Attack);
    }

    #[test]
    fn test_brute_pities_after_cry() {
        let mut dice = ScriptedDice::new([]);
        let pitied = BossView {
            pitied: true,
            ..view(0, 666, 666)
        };
        assert_eq!(BossScript::Brute.decide(&pitied, &mut dice), Intent::Pity);
        assert_eq!(
            BossScript::Brute.decide(&view(0, 666, 666), &mut dice),
            Intent::TableAttack
        );
        assert!(!BossScript::Brute.draws_percent());
    }

    #[test]
    fn test_lust_and_wrath_react_to_landed_hits_only() {
        let landed = hit(Outcome::Hit, 95);
        let missed = HitResult::miss();
        assert_eq!(
            BossScript::Lust.before_attack(Some(&landed)),
            Some(Reaction::SharePain(10))
        );
        assert_eq!(
            BossScript::Wrath.before_attack(Some(&landed)),
            Some(Reaction::Rage(5))
        );
        assert_eq!(BossScript::Lust.before_attack(Some(&missed)), None);
        assert_eq!(BossScript::Wrath.before_attack(None), None);
        assert_eq!(BossScript::Envy.before_attack(Some(&landed)), None);
    }

    #[test]
    fn test_envy_greed_pride_react_to_own_hit() {
        let mut dice = ScriptedDice::new([2]);
        let landed = hit(Outcome::Hit, 21);
        assert_eq!(
            BossScript::Envy.after_attack(&landed, 0, &mut dice),
            Some(Reaction::Leech(5))
        );
        assert_eq!(BossScript::Greed.after_attack(&landed, 50, &mut dice), None);
        assert_eq!(
            BossScript::Greed.after_attack(&landed, 49, &mut dice),
            Some(Reaction::Steal(2))
        );
        assert_eq!(BossScript::Pride.after_attack(&landed, 0, &mut dice), None);
        assert_eq!(
            BossScript::Pride.after_attack(&hit(Outcome::Crit, 40), 0, &mut dice),
            Some(Reaction::StrikeAgain)
        );
        assert_eq!(
            BossScript::Envy.after_attack(&HitResult::miss(), 0, &mut dice),
            None
        );
    }
}
