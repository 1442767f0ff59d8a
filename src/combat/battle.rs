//! Turn state machine for a single boss room.
//!
//! A round runs player action, win check, boss turn, win check, then the
//! end-of-round effects. Requests that cannot be paid for are rejected before
//! anything changes, so a rejected request never costs the player a turn.

use serde::{Deserialize, Serialize};

use crate::core::constants::*;
use crate::core::{Dice, MenuAction, Rules, Stat, Variant};
use crate::error::ActionRejected;
use crate::roster::{boss_def, BossId, Item, Loadout, Perk, Spell};

use super::combatant::{Combatant, PlayerState};
use super::events::{BattleEvent, PoolKind, Side};
use super::formula::{resolve_attack, HitResult, Outcome, Source, Strike};
use super::script::{BossScript, BossView, Intent, Reaction};
use super::status::{self, StatusEffect, StatusTick};
use super::tables::{self, Effect, CRY_TABLE, ENEMY_TABLE, FIGHT_TABLE, PRAY_TABLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattlePhase {
    AwaitingPlayerAction,
    ResolvingPlayer,
    CheckWin,
    ResolvingBoss,
    PlayerVictory,
    PlayerDefeat,
    PlayerForfeit,
}

impl BattlePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BattlePhase::PlayerVictory | BattlePhase::PlayerDefeat | BattlePhase::PlayerForfeit
        )
    }
}

/// A request from the player for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Fight,
    Pray,
    Cry,
    Run,
    Examine,
    UseItem(usize),
    Cast(usize),
    Forfeit,
}

impl PlayerAction {
    fn menu_entry(&self, variant: Variant) -> MenuAction {
        match self {
            PlayerAction::Fight => MenuAction::Fight,
            PlayerAction::Pray => MenuAction::Pray,
            PlayerAction::Cry => MenuAction::Cry,
            PlayerAction::Run => MenuAction::Run,
            PlayerAction::Examine => MenuAction::Examine,
            PlayerAction::UseItem(_) => match variant {
                Variant::Idols => MenuAction::Inventory,
                _ => MenuAction::Bag,
            },
            PlayerAction::Cast(_) => MenuAction::Magic,
            PlayerAction::Forfeit => MenuAction::Forfeit,
        }
    }
}

/// Result of an accepted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// False for free actions such as EXAMINE.
    pub consumed_turn: bool,
    pub phase: BattlePhase,
}

/// What a victory handed out, for narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reward {
    Blessing(Stat),
    Gold(i32),
    Nothing,
}

pub struct Battle {
    variant: Variant,
    rules: Rules,
    phase: BattlePhase,
    player: Combatant,
    loadout: Loadout,
    boss: Combatant,
    boss_id: BossId,
    script: BossScript,
    bio: &'static [&'static str],
    blessing: Option<Stat>,
    gold_reward: i32,
    ascended: bool,
    pitied: bool,
    rounds: u32,
    events: Vec<BattleEvent>,
}

impl Battle {
    /// Opens a room. Fails with [`ActionRejected::NotAvailable`] for an id
    /// outside the installment's roster.
    pub fn new(variant: Variant, player: &PlayerState, id: BossId) -> Result<Self, ActionRejected> {
        let def = boss_def(variant, id).ok_or(ActionRejected::NotAvailable)?;
        let mut battle = Self {
            variant,
            rules: variant.rules(),
            phase: BattlePhase::AwaitingPlayerAction,
            player: Combatant::player(player),
            loadout: player.loadout.clone(),
            boss: Combatant::boss(id, def, variant),
            boss_id: id,
            script: def.script,
            bio: def.bio,
            blessing: def.blessing,
            gold_reward: def.gold,
            ascended: false,
            pitied: false,
            rounds: 0,
            events: Vec::new(),
        };

        tracing::info!(variant = %variant, boss = %def.name, id = %id, "battle started");
        match variant {
            Variant::Duel => {
                battle.say("!?");
                battle.say("An enemy appears!");
            }
            _ => {
                let line = format!("{} challenges you!", def.name);
                battle.say(line);
            }
        }
        battle.sync(Side::Player, PoolKind::Hp);
        battle.sync(Side::Boss, PoolKind::Hp);
        Ok(battle)
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn boss(&self) -> &Combatant {
        &self.boss
    }

    pub fn boss_id(&self) -> BossId {
        self.boss_id
    }

    pub fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    pub fn is_ascended(&self) -> bool {
        self.ascended
    }

    /// Rounds in which the player spent a turn.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Drains the queued events.
    pub fn take_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Leaves the room immediately. Allowed from any non-terminal phase.
    pub fn forfeit(&mut self) {
        if self.phase.is_terminal() {
            return;
        }
        match self.variant {
            Variant::Duel => {
                self.say("You run away!");
                self.emit(BattleEvent::Expression(":/"));
                self.say("What a shame.");
                self.say("Come back when you actually want to fight.");
            }
            _ => self.say("Farewell, then..."),
        }
        tracing::info!(boss = %self.boss.name, rounds = self.rounds, "player forfeited");
        self.set_phase(BattlePhase::PlayerForfeit);
    }

    /// Checks a request without changing anything.
    pub fn validate(&self, action: PlayerAction) -> Result<(), ActionRejected> {
        if self.phase.is_terminal() {
            return Err(ActionRejected::BattleOver);
        }
        if !self.variant.offers(action.menu_entry(self.variant)) {
            return Err(ActionRejected::NotAvailable);
        }
        match action {
            PlayerAction::UseItem(index) => self.loadout.item_at(index).map(|_| ()),
            PlayerAction::Cast(index) => {
                let spell = self.loadout.spell_at(index)?;
                let available = self.player.stats.mana.current();
                if available < spell.mana_cost() {
                    return Err(ActionRejected::NotEnoughMana {
                        cost: spell.mana_cost(),
                        available,
                    });
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Runs one player request and, if it spends a turn, the boss's reply.
    pub fn submit(
        &mut self,
        action: PlayerAction,
        dice: &mut impl Dice,
    ) -> Result<TurnReport, ActionRejected> {
        if let Err(rejected) = self.validate(action) {
            tracing::info!(?action, %rejected, "action rejected");
            return Err(rejected);
        }

        match action {
            PlayerAction::Examine => {
                for line in self.bio {
                    self.say(*line);
                }
                return Ok(self.report(false));
            }
            PlayerAction::Run | PlayerAction::Forfeit => {
                self.forfeit();
                return Ok(self.report(true));
            }
            _ => {}
        }

        self.player.last_hit = None;
        self.boss.last_hit = None;
        self.pitied = false;

        self.set_phase(BattlePhase::ResolvingPlayer);
        match self.variant {
            Variant::Duel => self.resolve_duel_action(action, dice),
            _ => self.resolve_player_action(action, dice)?,
        }
        self.rounds += 1;

        self.set_phase(BattlePhase::CheckWin);
        if self.check_win() {
            return Ok(self.report(true));
        }

        self.set_phase(BattlePhase::ResolvingBoss);
        let full_round = self.boss_turn(dice);

        self.set_phase(BattlePhase::CheckWin);
        if self.check_win() {
            return Ok(self.report(true));
        }

        if full_round {
            self.end_of_round();
        }
        self.set_phase(BattlePhase::AwaitingPlayerAction);
        Ok(self.report(true))
    }

    /// Writes the battle's outcome back into the persisted player and pays out
    /// the boss's reward. Returns `None` unless the player won.
    pub fn commit_victory(&mut self, state: &mut PlayerState) -> Option<Reward> {
        if self.phase != BattlePhase::PlayerVictory {
            return None;
        }
        state.stats.hp = self.player.stats.hp;
        state.stats.mana = self.player.stats.mana;
        state.stats.gold = self.player.stats.gold;
        state.loadout = self.loadout.clone();

        let reward = if let Some(stat) = self.blessing {
            state.stats.raise(stat, BLESSING_BONUS);
            self.say(format!("You were blessed! Your {} rose!", stat.name()));
            Reward::Blessing(stat)
        } else if self.gold_reward > 0 {
            state.stats.gold.restore(self.gold_reward);
            self.say(format!("You found {}G!", self.gold_reward));
            self.emit(BattleEvent::PoolChanged {
                side: Side::Player,
                pool: PoolKind::Gold,
                current: state.stats.gold.current(),
                max: state.stats.gold.max(),
            });
            Reward::Gold(self.gold_reward)
        } else {
            Reward::Nothing
        };
        tracing::info!(boss = %self.boss.name, ?reward, "victory committed");
        Some(reward)
    }

    fn report(&self, consumed_turn: bool) -> TurnReport {
        TurnReport {
            consumed_turn,
            phase: self.phase,
        }
    }

    fn emit(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    fn say(&mut self, text: impl Into<String>) {
        self.events.push(BattleEvent::message(text));
    }

    fn set_phase(&mut self, phase: BattlePhase) {
        if self.phase != phase {
            self.phase = phase;
            self.emit(BattleEvent::PhaseChanged(phase));
        }
    }

    fn sync(&mut self, side: Side, pool: PoolKind) {
        let stats = match side {
            Side::Player => &self.player.stats,
            Side::Boss => &self.boss.stats,
        };
        let value = match pool {
            PoolKind::Hp => stats.hp,
            PoolKind::Mana => stats.mana,
            PoolKind::Gold => stats.gold,
        };
        self.emit(BattleEvent::PoolChanged {
            side,
            pool,
            current: value.current(),
            max: value.max(),
        });
    }

    fn flicker(&mut self, side: Side, times: u8, colour: Option<&'static str>) {
        self.emit(BattleEvent::Flicker {
            side,
            times,
            colour,
        });
    }

    fn status_changed(&mut self) {
        let status = self.boss.status.map(|s| s.kind);
        tracing::debug!(boss = %self.boss.name, ?status, "status changed");
        self.emit(BattleEvent::StatusChanged {
            side: Side::Boss,
            status,
        });
    }

    /// Moves to a terminal phase if either side is down.
    fn check_win(&mut self) -> bool {
        if !self.boss.is_alive() {
            self.say(format!("You defeated {}!", self.boss.name));
            tracing::info!(boss = %self.boss.name, rounds = self.rounds, "boss defeated");
            self.set_phase(BattlePhase::PlayerVictory);
            true
        } else if !self.player.is_alive() {
            match self.variant {
                Variant::Duel => {
                    self.say("Uh-oh, it seems that you died.");
                    self.emit(BattleEvent::Expression(":D"));
                    self.say("I guess that means your enemy wins.");
                }
                _ => {
                    self.say("You were defeated!");
                    self.say("See you on the other side, then...");
                }
            }
            tracing::info!(boss = %self.boss.name, rounds = self.rounds, "player defeated");
            self.set_phase(BattlePhase::PlayerDefeat);
            true
        } else {
            false
        }
    }

    fn narrate_hit(&mut self, target: Side, hit: &HitResult) {
        match hit.outcome {
            Outcome::Crit => {
                self.flicker(target, 4, None);
                self.say("A critical hit!");
            }
            Outcome::Hit => self.flicker(target, 2, None),
            Outcome::Miss => self.say("But the attack missed..."),
        }
    }

    fn resolve_player_action(
        &mut self,
        action: PlayerAction,
        dice: &mut impl Dice,
    ) -> Result<(), ActionRejected> {
        match action {
            PlayerAction::Fight => {
                self.say("You attack!");
                let hit = resolve_attack(
                    &self.player.stats,
                    &mut self.boss.stats,
                    Strike::Melee,
                    &self.rules,
                    dice,
                );
                self.player.last_hit = Some(hit);
                self.narrate_hit(Side::Boss, &hit);
                self.sync(Side::Boss, PoolKind::Hp);
            }
            PlayerAction::Cast(index) => {
                let spell = self.loadout.spell_at(index)?;
                self.cast(spell, dice);
            }
            PlayerAction::UseItem(index) => {
                let item = self.loadout.take_item(index)?;
                self.use_item(item);
            }
            _ => return Err(ActionRejected::NotAvailable),
        }
        Ok(())
    }

    fn cast(&mut self, spell: Spell, dice: &mut impl Dice) {
        self.say(format!("You cast {}...", spell.display_name()));
        self.player.stats.mana.drain(spell.mana_cost());
        self.sync(Side::Player, PoolKind::Mana);
        match spell {
            Spell::Zap => {
                self.flicker(Side::Boss, 4, Some("YELLOW"));
                let damage = dice.roll_pair(ZAP_DAMAGE);
                let hit = resolve_attack(
                    &self.player.stats,
                    &mut self.boss.stats,
                    Strike::Spell(damage),
                    &self.rules,
                    dice,
                );
                self.player.last_hit = Some(hit);
                self.sync(Side::Boss, PoolKind::Hp);
                self.say("You landed a powerful strike on the enemy!");
            }
            Spell::Ignite => {
                self.flicker(Side::Boss, 4, Some("RED"));
                status::apply(&mut self.boss.status, StatusEffect::burn());
                self.status_changed();
                self.say("You set the enemy ablaze!");
            }
            Spell::Congeal => {
                self.flicker(Side::Boss, 4, Some("CYAN"));
                status::apply(&mut self.boss.status, StatusEffect::freeze());
                self.status_changed();
                self.say("You froze the enemy solid!");
            }
        }
    }

    fn use_item(&mut self, item: Item) {
        self.say(format!("You used the {}...", item.display_name()));
        match (item, self.variant) {
            (Item::Medicine, _) => {
                self.player.stats.hp.restore(MEDICINE_HEAL);
                self.say(format!("You restored {} life points!", MEDICINE_HEAL));
            }
            (Item::Elixir, _) => {
                self.player.stats.mana.refill();
                self.sync(Side::Player, PoolKind::Mana);
                self.say("You restored your mana points!");
            }
            (Item::Nectar, Variant::Idols) => {
                self.player.stats.hp.restore(IDOLS_NECTAR_HEAL);
                self.say("You restored all of your HP! Amazing!");
            }
            (Item::Nectar, _) => {
                self.player.stats.hp.refill();
                self.say("You restored your life to the max! Amazing!");
            }
        }
        self.sync(Side::Player, PoolKind::Hp);
    }

    fn resolve_duel_action(&mut self, action: PlayerAction, dice: &mut impl Dice) {
        match action {
            PlayerAction::Fight => {
                self.say("You try to attack...");
                let roll = tables::roll_table(&FIGHT_TABLE, dice);
                if let Effect::Damage(_) = roll.effect {
                    self.boss.stats.hp.drain(roll.amount);
                }
                self.player.last_hit = Some(HitResult {
                    outcome: roll.outcome,
                    damage: roll.amount,
                    source: Source::Melee,
                });
                match roll.outcome {
                    Outcome::Miss => {
                        self.say("...but you miss.");
                        self.emit(BattleEvent::Expression(":3"));
                        self.say("Whoopsie.");
                    }
                    Outcome::Hit => {
                        self.flicker(Side::Boss, 3, None);
                        self.sync(Side::Boss, PoolKind::Hp);
                        self.say("...and you land a hit!");
                    }
                    Outcome::Crit => {
                        self.flicker(Side::Boss, 4, None);
                        self.sync(Side::Boss, PoolKind::Hp);
                        self.say("...and you hit... hard!");
                        self.emit(BattleEvent::Expression(":C"));
                        self.say("That hurts...");
                    }
                }
            }
            PlayerAction::Pray => {
                self.say("You start to pray...");
                let roll = tables::roll_table(&PRAY_TABLE, dice);
                match roll.effect {
                    Effect::Heal(_) if self.player.stats.hp.is_full() => {
                        self.say("...and you are blessed, but your HP is full!");
                    }
                    Effect::Heal(_) => {
                        self.player.stats.hp.restore(roll.amount);
                        self.sync(Side::Player, PoolKind::Hp);
                        if roll.outcome == Outcome::Crit {
                            self.say("...and you are blessed... miraculously!");
                        } else {
                            self.say("...and you receive a blessing!");
                        }
                    }
                    _ => self.say("...but nobody answers."),
                }
            }
            PlayerAction::Cry => {
                self.say("You start to cry...");
                let roll = tables::roll_table(&CRY_TABLE, dice);
                if roll.effect == Effect::Pity {
                    self.pitied = true;
                    self.say("...and your enemy feels sorry for you.");
                } else {
                    self.say("...but nobody cares.");
                }
            }
            _ => {}
        }
    }

    fn duel_reply(&mut self, intent: Intent, dice: &mut impl Dice) {
        match intent {
            Intent::Pity => {
                self.flicker(Side::Boss, 2, None);
                let damage = tables::pity_damage(dice);
                self.boss.stats.hp.drain(damage);
                self.sync(Side::Boss, PoolKind::Hp);
                self.say("Your enemy takes a hit out of sympathy.");
                self.emit(BattleEvent::Expression(":S"));
                self.say("...");
            }
            _ => {
                self.say("Your enemy attacks...");
                let roll = tables::roll_table(&ENEMY_TABLE, dice);
                if let Effect::Damage(_) = roll.effect {
                    self.player.stats.hp.drain(roll.amount);
                }
                self.boss.last_hit = Some(HitResult {
                    outcome: roll.outcome,
                    damage: roll.amount,
                    source: Source::Melee,
                });
                match roll.outcome {
                    Outcome::Miss => {
                        self.say("...but you evade it.");
                        self.emit(BattleEvent::Expression(":|"));
                        self.say("Damn it.");
                    }
                    Outcome::Hit => {
                        self.sync(Side::Player, PoolKind::Hp);
                        self.say("...and you get hit!");
                    }
                    Outcome::Crit => {
                        self.sync(Side::Player, PoolKind::Hp);
                        self.say("...and you get hit... hard!");
                        self.emit(BattleEvent::Expression(":P"));
                        self.say("I almost pity you.");
                    }
                }
            }
        }
    }

    fn boss_view(&self, r: i32) -> BossView {
        BossView {
            r,
            hp: self.boss.stats.hp.current(),
            max_hp: self.boss.stats.hp.max(),
            ascended: self.ascended,
            pitied: self.pitied,
        }
    }

    /// The boss's half of a round. Returns false when a freeze or a charge
    /// release ended the round before end-of-round effects.
    fn boss_turn(&mut self, dice: &mut impl Dice) -> bool {
        let r = if self.script.draws_percent() {
            dice.percent()
        } else {
            0
        };
        let name = self.boss.name.clone();

        match status::tick(&mut self.boss.status) {
            StatusTick::Clear => {}
            StatusTick::Frozen => {
                self.say(format!("{} is frozen in place!", name));
                return false;
            }
            StatusTick::Burning => {
                self.say(format!("{} is on fire!", name));
                let damage = dice.roll_pair(BURN_TICK_DAMAGE);
                self.boss.stats.hp.drain(damage);
                self.sync(Side::Boss, PoolKind::Hp);
                if !self.boss.is_alive() {
                    return true;
                }
            }
            StatusTick::ChargeReleased => {
                self.status_changed();
                self.say(format!("{} released a hellish shockwave!", name));
                let damage = dice.roll_pair(CHARGE_RELEASE_DAMAGE);
                let hit = resolve_attack(
                    &self.boss.stats,
                    &mut self.player.stats,
                    Strike::Spell(damage),
                    &self.rules,
                    dice,
                );
                self.boss.last_hit = Some(hit);
                self.sync(Side::Player, PoolKind::Hp);
                return false;
            }
            StatusTick::Expired(_) => {
                self.status_changed();
                self.say(format!("{}'s status returned to normal.", name));
            }
        }

        let view = self.boss_view(r);
        match self.script.decide(&view, dice) {
            Intent::Attack => self.boss_attack(r, dice),
            intent @ (Intent::TableAttack | Intent::Pity) => self.duel_reply(intent, dice),
            Intent::Idle => self.say(format!("{} is lazing around...", name)),
            Intent::Heal(amount) => {
                self.say(format!("{} is chewing on its rations...", name));
                self.boss.stats.hp.restore(amount);
                self.sync(Side::Boss, PoolKind::Hp);
            }
            Intent::Ascend => {
                self.say("...?!");
                self.say(format!("{} ignited the flames of Hell!", name));
                self.say("Their attacks will be more potent!");
                self.boss.stats.raise_all(ORIGINAL_SIN_PHASE_BONUS);
                self.ascended = true;
                tracing::info!(boss = %name, "boss ascended");
            }
            Intent::ChargeUp => {
                self.flicker(Side::Boss, 4, Some("MAGENTA"));
                self.say(format!("{} is charging power...", name));
                status::apply(&mut self.boss.status, StatusEffect::charge());
                self.status_changed();
            }
        }
        true
    }

    fn boss_attack(&mut self, r: i32, dice: &mut impl Dice) {
        if let Some(reaction) = self.script.before_attack(self.player.last_hit.as_ref()) {
            self.apply_reaction(reaction, dice);
            if !self.player.is_alive() {
                return;
            }
        }

        let hit = self.boss_strike(true, dice);
        if !self.player.is_alive() {
            return;
        }
        if let Some(reaction) = self.script.after_attack(&hit, r, dice) {
            self.apply_reaction(reaction, dice);
        }
    }

    fn boss_strike(&mut self, announce: bool, dice: &mut impl Dice) -> HitResult {
        if announce {
            self.say(format!("{} attacks!", self.boss.name));
        }
        let hit = resolve_attack(
            &self.boss.stats,
            &mut self.player.stats,
            Strike::Melee,
            &self.rules,
            dice,
        );
        self.boss.last_hit = Some(hit);
        self.narrate_hit(Side::Player, &hit);
        self.sync(Side::Player, PoolKind::Hp);
        hit
    }

    fn apply_reaction(&mut self, reaction: Reaction, dice: &mut impl Dice) {
        let name = self.boss.name.clone();
        match reaction {
            Reaction::SharePain(amount) => {
                self.say(format!("{} shares their pain!", name));
                self.player.stats.hp.drain(amount);
                self.sync(Side::Player, PoolKind::Hp);
            }
            Reaction::Rage(amount) => {
                self.say(format!("{}'s rage is building...", name));
                self.boss.stats.raise(Stat::Attack, amount);
            }
            Reaction::Leech(amount) => {
                self.say(format!("{} feeds on your pain...", name));
                self.boss.stats.hp.restore(amount);
                self.sync(Side::Boss, PoolKind::Hp);
            }
            Reaction::Steal(amount) => {
                self.say(format!("{} snatches your spare change!", name));
                self.player.stats.gold.drain(amount);
                self.sync(Side::Player, PoolKind::Gold);
            }
            Reaction::StrikeAgain => {
                self.say(format!("{} attacks twice out of hubris!", name));
                self.boss_strike(false, dice);
            }
        }
    }

    fn end_of_round(&mut self) {
        if self.loadout.has_perk(Perk::Energiser) {
            let gained = self.player.stats.mana.restore(ENERGISER_MANA_PER_ROUND);
            if gained > 0 {
                self.sync(Side::Player, PoolKind::Mana);
            }
        }
    }
}
