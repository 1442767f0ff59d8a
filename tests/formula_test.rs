//! Attack formula integration tests
//!
//! Exact draw sequences against the public formula and battle API.

use idols::combat::{resolve_attack, Battle, BattlePhase, Outcome, PlayerAction, PlayerState, Strike};
use idols::core::{ScriptedDice, StatBlock, Variant};
use idols::error::ActionRejected;
use idols::roster::BossId;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// Melee resolution
// ============================================================================

#[test]
fn test_negative_defence_is_floored_to_one() {
    let attacker = StatBlock::uniform(50, 100);
    let mut defender = StatBlock::uniform(50, 5000);
    defender.defence = -20;

    for base in [45, 50, 55] {
        defender.hp.refill();
        let mut dice = ScriptedDice::new([5, 50, base]);
        let hit = resolve_attack(
            &attacker,
            &mut defender,
            Strike::Melee,
            &Variant::Idols.rules(),
            &mut dice,
        );
        assert_eq!(hit.outcome, Outcome::Hit);
        assert_eq!(hit.damage, 50 * base);
        assert_eq!(defender.hp.current(), 5000 - 50 * base);
        assert_eq!(dice.remaining(), 0);
    }
}

#[test]
fn test_damage_never_takes_hp_below_zero() {
    let attacker = StatBlock::uniform(50, 100);
    let mut defender = StatBlock::uniform(50, 500);
    defender.defence = -20;
    let mut dice = ScriptedDice::new([5, 50, 45]);
    let hit = resolve_attack(
        &attacker,
        &mut defender,
        Strike::Melee,
        &Variant::Idols.rules(),
        &mut dice,
    );
    assert_eq!(hit.damage, 2250);
    assert_eq!(defender.hp.current(), 0);
}

#[test]
fn test_same_seed_same_fight() {
    let play = |seed: u64| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let player = PlayerState::starting(Variant::Idols);
        let mut battle = Battle::new(Variant::Idols, &player, BossId(2)).unwrap();
        while !battle.phase().is_terminal() && battle.rounds() < 200 {
            battle.submit(PlayerAction::Fight, &mut rng).unwrap();
        }
        (
            battle.phase(),
            battle.rounds(),
            battle.player().stats.hp.current(),
            battle.boss().stats.hp.current(),
        )
    };
    assert_eq!(play(99), play(99));
}

// ============================================================================
// Rejected requests
// ============================================================================

#[test]
fn test_spell_without_mana_is_rejected_without_a_turn() {
    let mut player = PlayerState::starting(Variant::Vices);
    player.stats.mana.set(3);
    let mut battle = Battle::new(Variant::Vices, &player, BossId(0)).unwrap();
    battle.take_events();

    let mut dice = ScriptedDice::new([]);
    let err = battle.submit(PlayerAction::Cast(0), &mut dice).unwrap_err();

    assert_eq!(
        err,
        ActionRejected::NotEnoughMana {
            cost: 5,
            available: 3
        }
    );
    assert_eq!(battle.player().stats.mana.current(), 3);
    assert_eq!(battle.phase(), BattlePhase::AwaitingPlayerAction);
    assert_eq!(battle.rounds(), 0);
    assert!(battle.take_events().is_empty());
}

#[test]
fn test_using_an_empty_bag_is_rejected() {
    let mut player = PlayerState::starting(Variant::Idols);
    player.loadout.bag.clear();
    let mut battle = Battle::new(Variant::Idols, &player, BossId(0)).unwrap();
    let mut dice = ScriptedDice::new([]);
    assert_eq!(
        battle.submit(PlayerAction::UseItem(0), &mut dice),
        Err(ActionRejected::NothingToUse)
    );
}

#[test]
fn test_medicine_heals_and_spends_a_turn() {
    let mut player = PlayerState::starting(Variant::Idols);
    player.stats.hp.set(30);
    let mut battle = Battle::new(Variant::Idols, &player, BossId(0)).unwrap();
    // Boss: r, then a miss (Ahi precision 40 vs evasion 50: 68% to hit).
    let mut dice = ScriptedDice::new([0, 99]);
    let report = battle.submit(PlayerAction::UseItem(0), &mut dice).unwrap();
    assert!(report.consumed_turn);
    assert_eq!(battle.player().stats.hp.current(), 80);
    assert_eq!(battle.loadout().bag.len(), 3);
    assert_eq!(dice.remaining(), 0);
}
