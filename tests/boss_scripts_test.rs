//! Boss script integration tests
//!
//! One full round against each vice with an exact draw script. Player stats
//! are the vices baseline: 50 everywhere, 100 HP, 10 mana, 50 gold.

use idols::combat::{Battle, PlayerAction, PlayerState, StatusKind};
use idols::core::{ScriptedDice, Variant};
use idols::roster::{BossId, Perk, Spell};

fn battle_with(player: &PlayerState, id: u8) -> Battle {
    Battle::new(Variant::Vices, player, BossId(id)).unwrap()
}

fn vices_battle(id: u8) -> Battle {
    battle_with(&PlayerState::starting(Variant::Vices), id)
}

fn messages(battle: &mut Battle) -> Vec<String> {
    battle
        .take_events()
        .iter()
        .filter_map(|e| e.as_message().map(str::to_string))
        .collect()
}

fn play(battle: &mut Battle, action: PlayerAction, draws: &[i32]) {
    let mut dice = ScriptedDice::new(draws.iter().copied());
    battle.submit(action, &mut dice).unwrap();
    assert_eq!(dice.remaining(), 0, "unused draws");
}

// ============================================================================
// Scripts that change the main move
// ============================================================================

#[test]
fn test_sloth_burns_and_idles() {
    let mut player = PlayerState::starting(Variant::Vices);
    player.loadout.learn(Spell::Ignite);
    let mut battle = battle_with(&player, 0);
    battle.take_events();

    // r = 0, burn 30; 120 / 3 = 40 so r = 0 idles
    play(&mut battle, PlayerAction::Cast(1), &[0, 30]);
    assert_eq!(battle.boss().stats.hp.current(), 120);
    assert_eq!(battle.player().stats.hp.current(), 100);
    assert_eq!(battle.player().stats.mana.current(), 3);
    assert_eq!(
        battle.boss().status.map(|s| (s.kind, s.remaining)),
        Some((StatusKind::Burn, 4))
    );
    let lines = messages(&mut battle);
    assert!(lines.contains(&"Akua Moe is on fire!".to_string()));
    assert!(lines.contains(&"Akua Moe is lazing around...".to_string()));
}

#[test]
fn test_gluttony_eats_when_roll_is_high() {
    let mut battle = vices_battle(1);
    // Player hits 63; r = 99 >= 100 - 87/3 so Pehu heals 60
    play(&mut battle, PlayerAction::Fight, &[0, 99, 50, 99, 60]);
    assert_eq!(battle.boss().stats.hp.current(), 147);
    assert_eq!(battle.player().stats.hp.current(), 100);
}

#[test]
fn test_original_sin_ascends_then_charges_then_releases() {
    let mut battle = vices_battle(7);

    // Zap 105, boss attacks for 12
    play(&mut battle, PlayerAction::Cast(0), &[105, 99, 0, 99, 50]);
    assert_eq!(battle.boss().stats.hp.current(), 395);
    assert_eq!(battle.player().stats.hp.current(), 88);

    // Zap 105 takes it to 290, under 60% of 500: it ascends instead of attacking
    play(&mut battle, PlayerAction::Cast(0), &[105, 99]);
    assert!(battle.is_ascended());
    assert_eq!(battle.boss().stats.defence, 70);
    assert_eq!(battle.player().stats.hp.current(), 88);
    assert_eq!(battle.player().stats.mana.current(), 0);

    // Fight for ceil(50/70 * 50) = 36; r = 0 < 100 - 254/5 so it charges
    play(&mut battle, PlayerAction::Fight, &[0, 99, 50, 0]);
    assert_eq!(battle.boss().stats.hp.current(), 254);
    assert_eq!(
        battle.boss().status.map(|s| s.kind),
        Some(StatusKind::Charge)
    );

    // Miss; the charge releases for 70 and ends the turn
    play(&mut battle, PlayerAction::Fight, &[99, 50, 70]);
    assert_eq!(battle.player().stats.hp.current(), 18);
    assert_eq!(battle.boss().status, None);
    let lines = messages(&mut battle);
    assert!(lines.iter().any(|l| l == "Their attacks will be more potent!"));
    assert!(lines.iter().any(|l| l == "Akua Hala released a hellish shockwave!"));
}

// ============================================================================
// Reactions around the attack
// ============================================================================

#[test]
fn test_lust_shares_pain_before_attacking() {
    let mut battle = vices_battle(2);
    // Player hits 63, shares ceil(6.3) = 7, then takes 12
    play(&mut battle, PlayerAction::Fight, &[0, 99, 50, 0, 0, 99, 50]);
    assert_eq!(battle.boss().stats.hp.current(), 137);
    assert_eq!(battle.player().stats.hp.current(), 81);
}

#[test]
fn test_wrath_grows_stronger_when_hit() {
    let mut battle = vices_battle(3);
    // ceil(50/60 * 47) = 40 damage, rage ceil(40/20) = 2, then 10 damage
    play(&mut battle, PlayerAction::Fight, &[0, 99, 47, 0, 0, 99, 50]);
    assert_eq!(battle.boss().stats.hp.current(), 160);
    assert_eq!(battle.boss().stats.attack, 10);
    assert_eq!(battle.player().stats.hp.current(), 90);
}

#[test]
fn test_envy_leeches_after_landing() {
    let mut battle = vices_battle(4);
    // Player hits 50; Lili hits 8 and heals ceil(8/5) = 2
    play(&mut battle, PlayerAction::Fight, &[0, 99, 59, 0, 0, 99, 50]);
    assert_eq!(battle.player().stats.hp.current(), 92);
    assert_eq!(battle.boss().stats.hp.current(), 202);
}

#[test]
fn test_greed_steals_gold_on_low_roll() {
    let mut battle = vices_battle(5);
    play(&mut battle, PlayerAction::Fight, &[0, 99, 50, 10, 0, 99, 50, 3]);
    assert_eq!(battle.boss().stats.hp.current(), 187);
    assert_eq!(battle.player().stats.hp.current(), 88);
    assert_eq!(battle.player().stats.gold.current(), 47);
}

#[test]
fn test_greed_keeps_its_hands_to_itself_on_high_roll() {
    let mut battle = vices_battle(5);
    play(&mut battle, PlayerAction::Fight, &[0, 99, 50, 50, 0, 99, 50]);
    assert_eq!(battle.player().stats.gold.current(), 50);
}

#[test]
fn test_pride_strikes_again_on_crit() {
    let mut battle = vices_battle(6);
    battle.take_events();
    // Player misses; crit for 24, then one extra strike for 12
    play(&mut battle, PlayerAction::Fight, &[99, 0, 0, 0, 50, 0, 99, 50]);
    assert_eq!(battle.player().stats.hp.current(), 64);
    let lines = messages(&mut battle);
    assert_eq!(lines.iter().filter(|l| *l == "Akua Kei attacks!").count(), 1);
    assert!(lines.contains(&"Akua Kei attacks twice out of hubris!".to_string()));
}

// ============================================================================
// Perks and the duel
// ============================================================================

#[test]
fn test_energiser_adds_mana_each_round() {
    let mut player = PlayerState::starting(Variant::Vices);
    player.loadout.grant_perk(Perk::Energiser);
    player.stats.mana.set(3);
    let mut battle = battle_with(&player, 0);
    // 38 damage leaves 112; r = 0 idles
    play(&mut battle, PlayerAction::Fight, &[0, 99, 45, 0]);
    assert_eq!(battle.boss().stats.hp.current(), 112);
    assert_eq!(battle.player().stats.mana.current(), 4);
}

#[test]
fn test_energiser_skips_frozen_rounds() {
    let mut player = PlayerState::starting(Variant::Vices);
    player.loadout.learn(Spell::Congeal);
    player.loadout.grant_perk(Perk::Energiser);
    let mut battle = battle_with(&player, 2);

    // Congeal costs 8 of 10; the frozen boss turn ends the round early
    play(&mut battle, PlayerAction::Cast(1), &[0]);
    assert_eq!(
        battle.boss().status.map(|s| s.kind),
        Some(StatusKind::Freeze)
    );
    assert_eq!(battle.player().stats.mana.current(), 2);

    // Still frozen after a miss: no mana either
    play(&mut battle, PlayerAction::Fight, &[99, 0]);
    assert_eq!(battle.player().stats.mana.current(), 2);
}

#[test]
fn test_energiser_skips_the_charge_release_round() {
    let mut player = PlayerState::starting(Variant::Vices);
    player.loadout.grant_perk(Perk::Energiser);
    let mut battle = battle_with(&player, 7);

    play(&mut battle, PlayerAction::Cast(0), &[105, 99, 0, 99, 50]);
    assert_eq!(battle.player().stats.mana.current(), 6);
    play(&mut battle, PlayerAction::Cast(0), &[105, 99]);
    assert_eq!(battle.player().stats.mana.current(), 2);

    // Charging up is a full round
    play(&mut battle, PlayerAction::Fight, &[0, 99, 50, 0]);
    assert_eq!(battle.player().stats.mana.current(), 3);

    // The release ends the round before the perk
    play(&mut battle, PlayerAction::Fight, &[99, 50, 70]);
    assert_eq!(battle.player().stats.hp.current(), 18);
    assert_eq!(battle.player().stats.mana.current(), 3);
}

#[test]
fn test_duel_cry_earns_pity() {
    let mut battle = Battle::new(
        Variant::Duel,
        &PlayerState::starting(Variant::Duel),
        BossId(0),
    )
    .unwrap();
    play(&mut battle, PlayerAction::Cry, &[7, 28]);
    assert_eq!(battle.boss().stats.hp.current(), 638);
    assert_eq!(battle.player().stats.hp.current(), 99);

    // The pity lasts one round only.
    play(&mut battle, PlayerAction::Fight, &[10, 118, 5, 12]);
    assert_eq!(battle.boss().stats.hp.current(), 520);
    assert_eq!(battle.player().stats.hp.current(), 87);
}

#[test]
fn test_duel_pray_at_full_hp_wastes_the_blessing() {
    let mut battle = Battle::new(
        Variant::Duel,
        &PlayerState::starting(Variant::Duel),
        BossId(0),
    )
    .unwrap();
    battle.take_events();
    play(&mut battle, PlayerAction::Pray, &[5, 27, 1]);
    assert_eq!(battle.player().stats.hp.current(), 99);
    let lines = messages(&mut battle);
    assert!(lines.contains(&"...and you are blessed, but your HP is full!".to_string()));
    assert!(lines.contains(&"...but you evade it.".to_string()));
}
