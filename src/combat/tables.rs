//! Fixed outcome tables used by the duel instead of the stat formula.
//!
//! Each table is a list of faces on a ten-sided die. A roll picks a face by
//! walking the cumulative weights, then rolls the face's amount range.

use crate::core::constants::*;
use crate::core::Dice;

use super::formula::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Nothing,
    Damage((i32, i32)),
    Heal((i32, i32)),
    /// The enemy takes pity: it skips its next attack and hurts itself.
    Pity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub weight: i32,
    /// Tier used for narration and flashes (nothing / normal / exceptional).
    pub outcome: Outcome,
    pub effect: Effect,
}

const fn face(weight: i32, outcome: Outcome, effect: Effect) -> Face {
    Face {
        weight,
        outcome,
        effect,
    }
}

pub const FIGHT_TABLE: [Face; 3] = [
    face(1, Outcome::Miss, Effect::Nothing),
    face(8, Outcome::Hit, Effect::Damage(DUEL_FIGHT_HIT)),
    face(1, Outcome::Crit, Effect::Damage(DUEL_FIGHT_CRIT)),
];

pub const PRAY_TABLE: [Face; 3] = [
    face(3, Outcome::Miss, Effect::Nothing),
    face(6, Outcome::Hit, Effect::Heal(DUEL_PRAY_HEAL)),
    face(1, Outcome::Crit, Effect::Heal(DUEL_PRAY_MIRACLE)),
];

pub const CRY_TABLE: [Face; 2] = [
    face(4, Outcome::Miss, Effect::Nothing),
    face(6, Outcome::Hit, Effect::Pity),
];

pub const ENEMY_TABLE: [Face; 3] = [
    face(1, Outcome::Miss, Effect::Nothing),
    face(8, Outcome::Hit, Effect::Damage(DUEL_ENEMY_HIT)),
    face(1, Outcome::Crit, Effect::Damage(DUEL_ENEMY_CRIT)),
];

/// A resolved table roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRoll {
    pub outcome: Outcome,
    pub effect: Effect,
    /// Rolled amount for damage and heal faces, 0 otherwise.
    pub amount: i32,
}

/// Rolls a face, then its amount. Draws the face first and the amount second.
pub fn roll_table(table: &[Face], dice: &mut impl Dice) -> TableRoll {
    let total: i32 = table.iter().map(|f| f.weight).sum();
    let choice = dice.roll(1, total.max(1));

    let mut cumulative = 0;
    let picked = table
        .iter()
        .find(|f| {
            cumulative += f.weight;
            choice <= cumulative
        })
        .or(table.last())
        .copied()
        .unwrap_or(face(0, Outcome::Miss, Effect::Nothing));

    let amount = match picked.effect {
        Effect::Damage(range) | Effect::Heal(range) => dice.roll_pair(range),
        Effect::Nothing | Effect::Pity => 0,
    };
    TableRoll {
        outcome: picked.outcome,
        effect: picked.effect,
        amount,
    }
}

/// Amount the enemy loses when it takes pity on the player.
pub fn pity_damage(dice: &mut impl Dice) -> i32 {
    dice.roll_pair(DUEL_PITY_DAMAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDice;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_tables_use_ten_faces() {
        for table in [&FIGHT_TABLE[..], &PRAY_TABLE[..], &CRY_TABLE[..], &ENEMY_TABLE[..]] {
            let total: i32 = table.iter().map(|f| f.weight).sum();
            assert_eq!(total, DUEL_TABLE_FACES);
        }
    }

    #[test]
    fn test_face_boundaries() {
        let mut dice = ScriptedDice::new([1, 2, 57, 9, 10, 118]);
        assert_eq!(roll_table(&FIGHT_TABLE, &mut dice).outcome, Outcome::Miss);
        let hit = roll_table(&FIGHT_TABLE, &mut dice);
        assert_eq!((hit.outcome, hit.amount), (Outcome::Hit, 57));
        assert_eq!(roll_table(&FIGHT_TABLE, &mut dice).amount, 0);
        let crit = roll_table(&FIGHT_TABLE, &mut dice);
        assert_eq!((crit.outcome, crit.amount), (Outcome::Crit, 118));
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_cry_succeeds_on_five_and_up() {
        let mut dice = ScriptedDice::new([4, 5]);
        assert_eq!(roll_table(&CRY_TABLE, &mut dice).effect, Effect::Nothing);
        assert_eq!(roll_table(&CRY_TABLE, &mut dice).effect, Effect::Pity);
    }

    #[test]
    fn test_fight_distribution_converges() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let trials = 100_000;
        let (mut miss, mut hit, mut crit) = (0, 0, 0);
        for _ in 0..trials {
            match roll_table(&FIGHT_TABLE, &mut rng).outcome {
                Outcome::Miss => miss += 1,
                Outcome::Hit => hit += 1,
                Outcome::Crit => crit += 1,
            }
        }
        let pct = |n: i32| n as f64 / trials as f64 * 100.0;
        assert!((pct(hit) - 80.0).abs() < 1.0, "hit {}", pct(hit));
        assert!((pct(miss) - 10.0).abs() < 1.0, "miss {}", pct(miss));
        assert!((pct(crit) - 10.0).abs() < 1.0, "crit {}", pct(crit));
    }

    #[test]
    fn test_amounts_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..1000 {
            let roll = roll_table(&ENEMY_TABLE, &mut rng);
            match roll.outcome {
                Outcome::Miss => assert_eq!(roll.amount, 0),
                Outcome::Hit => assert!((10..=15).contains(&roll.amount)),
                Outcome::Crit => assert!((25..=30).contains(&roll.amount)),
            }
        }
    }
}
