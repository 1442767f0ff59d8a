//! A presentation that plays by itself. Drives the simulator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::combat::{BattleEvent, PoolKind, Side};
use crate::core::constants::{EXIT_LABEL, SHOP_LABEL};
use crate::error::{ActionRejected, GameError};

use super::narration::*;
use super::presentation::{GameEvent, Presentation};

/// How the autopilot picks its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// FIGHT every round, first door, never shop.
    AlwaysFight,
    /// Heals when low, casts when it can, buys perks and medicine.
    #[default]
    Balanced,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Policy::AlwaysFight => "fight",
            Policy::Balanced => "balanced",
        })
    }
}

impl FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fight" | "always-fight" => Ok(Policy::AlwaysFight),
            "balanced" => Ok(Policy::Balanced),
            other => Err(format!("unknown policy '{}' (expected fight or balanced)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Goal {
    Heal,
    Mana,
}

/// Fraction of max HP under which the balanced policy heals.
const HEAL_BELOW: f64 = 0.4;
/// Cheapest spell cost; below this the balanced policy drinks an elixir.
const MANA_FLOOR: i32 = 5;
/// Menu choices allowed per run before the autopilot gives up and forfeits.
pub const DEFAULT_CHOICE_BUDGET: u32 = 20_000;

/// Reads the event stream to track its own pools and answers every prompt.
#[derive(Debug, Clone)]
pub struct Autopilot {
    policy: Policy,
    hp: (i32, i32),
    mana: i32,
    gold: i32,
    boss_afflicted: bool,
    goal: Option<Goal>,
    no_healing: bool,
    no_mana: bool,
    shopped: bool,
    shop_done: bool,
    choices: u32,
    budget: u32,
}

impl Autopilot {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            hp: (1, 1),
            mana: 0,
            gold: 0,
            boss_afflicted: false,
            goal: None,
            no_healing: false,
            no_mana: false,
            shopped: false,
            shop_done: false,
            choices: 0,
            budget: DEFAULT_CHOICE_BUDGET,
        }
    }

    pub fn with_budget(mut self, budget: u32) -> Self {
        self.budget = budget;
        self
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Choices made so far.
    pub fn choices(&self) -> u32 {
        self.choices
    }

    fn hp_low(&self) -> bool {
        let (current, max) = self.hp;
        max > 0 && (current as f64) < max as f64 * HEAL_BELOW
    }

    fn battle_action(&mut self, options: &[String]) -> usize {
        let find = |label: &str| options.iter().position(|o| o == label);
        let fight = find("FIGHT").unwrap_or(0);
        if self.policy == Policy::AlwaysFight {
            return fight;
        }

        if self.hp_low() {
            if let Some(pray) = find("PRAY") {
                return pray;
            }
            if !self.no_healing {
                if let Some(bag) = find("BAG").or_else(|| find("INVENTORY")) {
                    self.goal = Some(Goal::Heal);
                    return bag;
                }
            }
        }
        if let Some(magic) = find("MAGIC") {
            if self.mana >= MANA_FLOOR {
                return magic;
            }
            if !self.no_mana {
                if let Some(bag) = find("BAG") {
                    self.goal = Some(Goal::Mana);
                    return bag;
                }
            }
        }
        fight
    }

    fn use_item(&mut self, options: &[String]) -> usize {
        let exit = options.len().saturating_sub(1);
        let wanted: &[&str] = match self.goal.take() {
            Some(Goal::Mana) => &["ELIXIR"],
            _ => &["MEDICINE", "NECTAR"],
        };
        for label in wanted {
            if let Some(index) = options.iter().position(|o| o == label) {
                return index;
            }
        }
        if wanted.contains(&"ELIXIR") {
            self.no_mana = true;
        } else {
            self.no_healing = true;
        }
        exit
    }

    fn cast(&mut self, options: &[String]) -> usize {
        let exit = options.len().saturating_sub(1);
        let affordable = |name: &str| {
            options.iter().position(|o| {
                o.split('\n').next() == Some(name)
                    && spell_cost(o).is_some_and(|cost| cost <= self.mana)
            })
        };
        let preference: &[&str] = if self.boss_afflicted {
            &["ZAP"]
        } else {
            &["CONGEAL", "IGNITE", "ZAP"]
        };
        preference
            .iter()
            .find_map(|name| affordable(name))
            .unwrap_or(exit)
    }

    fn lobby(&mut self, options: &[String]) -> usize {
        if self.policy == Policy::Balanced && !self.shopped {
            if let Some(shop) = options.iter().position(|o| o == SHOP_LABEL) {
                self.shopped = true;
                self.shop_done = false;
                return shop;
            }
        }
        0
    }

    fn shop(&mut self, options: &[String]) -> usize {
        let exit = options.len().saturating_sub(1);
        if self.shop_done {
            return exit;
        }
        self.shop_done = true;
        let preference = ["ENERGISER", "HEARTSTONE", "CONGEAL", "IGNITE", "MEDICINE"];
        preference
            .iter()
            .find_map(|name| {
                options.iter().position(|o| {
                    o.split('\n').next() == Some(name)
                        && listing_price(o).is_some_and(|price| price <= self.gold)
                })
            })
            .unwrap_or(exit)
    }

    fn observe(&mut self, event: &BattleEvent) {
        match event {
            BattleEvent::PoolChanged {
                side: Side::Player,
                pool,
                current,
                max,
            } => match pool {
                PoolKind::Hp => self.hp = (*current, *max),
                PoolKind::Mana => self.mana = *current,
                PoolKind::Gold => self.gold = *current,
            },
            BattleEvent::StatusChanged {
                side: Side::Boss,
                status,
            } => self.boss_afflicted = status.is_some(),
            _ => {}
        }
    }
}

/// Mana cost from a spell entry such as `"ZAP\n5 MANA"`.
fn spell_cost(label: &str) -> Option<i32> {
    label.split('\n').nth(1)?.split_whitespace().next()?.parse().ok()
}

/// Price from a listing such as `"MEDICINE\nITEM:20G"`.
fn listing_price(label: &str) -> Option<i32> {
    label.rsplit(':').next()?.trim_end_matches('G').parse().ok()
}

impl Presentation for Autopilot {
    fn present_choice(&mut self, prompt: &str, options: &[String]) -> Result<usize, GameError> {
        self.choices += 1;
        let last = options.len().saturating_sub(1);

        if self.choices > self.budget {
            // Out of patience: leave every room and every menu.
            return Ok(match prompt {
                PROMPT_ACTION | PROMPT_ACTION_DUEL => options
                    .iter()
                    .position(|o| o == "FORFEIT" || o == "RUN")
                    .unwrap_or(last),
                _ if options.last().map(String::as_str) == Some(EXIT_LABEL) => last,
                _ => 0,
            });
        }

        let index = match prompt {
            PROMPT_ACTION | PROMPT_ACTION_DUEL => self.battle_action(options),
            PROMPT_ITEM => self.use_item(options),
            PROMPT_SPELL => self.cast(options),
            PROMPT_DOORS | PROMPT_SINGLE_DOOR => self.lobby(options),
            PROMPT_SHOP => self.shop(options),
            PROMPT_MANUAL => last,
            _ => 0,
        };
        Ok(index)
    }

    fn show(&mut self, event: &GameEvent) -> Result<(), GameError> {
        match event {
            GameEvent::Battle(battle) => self.observe(battle),
            GameEvent::Narration(text) if text == ActionRejected::NothingToUse.narration() => {
                self.no_healing = true;
                self.no_mana = true;
            }
            GameEvent::EnterRoom { .. } => {
                self.boss_afflicted = false;
                self.goal = None;
            }
            GameEvent::LeaveRoom => {
                self.no_healing = false;
                self.no_mana = false;
                self.shopped = false;
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn pool(pool: PoolKind, current: i32, max: i32) -> GameEvent {
        GameEvent::Battle(BattleEvent::PoolChanged {
            side: Side::Player,
            pool,
            current,
            max,
        })
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(spell_cost("CONGEAL\n8 MANA"), Some(8));
        assert_eq!(listing_price("HEARTSTONE\nPERK:150G"), Some(150));
        assert_eq!(listing_price("nonsense"), None);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("fight".parse::<Policy>(), Ok(Policy::AlwaysFight));
        assert_eq!("Balanced".parse::<Policy>(), Ok(Policy::Balanced));
        assert!("coward".parse::<Policy>().is_err());
    }

    #[test]
    fn test_always_fight() {
        let mut pilot = Autopilot::new(Policy::AlwaysFight);
        pilot.show(&pool(PoolKind::Hp, 1, 100)).unwrap();
        let menu = labels(&["FIGHT", "MAGIC", "BAG", "FORFEIT"]);
        assert_eq!(pilot.present_choice(PROMPT_ACTION, &menu).unwrap(), 0);
    }

    #[test]
    fn test_balanced_heals_when_low() {
        let mut pilot = Autopilot::new(Policy::Balanced);
        pilot.show(&pool(PoolKind::Hp, 30, 100)).unwrap();
        let menu = labels(&["FIGHT", "MAGIC", "BAG", "FORFEIT"]);
        assert_eq!(pilot.present_choice(PROMPT_ACTION, &menu).unwrap(), 2);
        let bag = labels(&["ELIXIR", "MEDICINE", EXIT_LABEL]);
        assert_eq!(pilot.present_choice(PROMPT_ITEM, &bag).unwrap(), 1);
    }

    #[test]
    fn test_balanced_stops_looking_for_missing_medicine() {
        let mut pilot = Autopilot::new(Policy::Balanced);
        pilot.show(&pool(PoolKind::Hp, 30, 100)).unwrap();
        let menu = labels(&["FIGHT", "MAGIC", "BAG", "FORFEIT"]);
        assert_eq!(pilot.present_choice(PROMPT_ACTION, &menu).unwrap(), 2);
        let bag = labels(&["ELIXIR", EXIT_LABEL]);
        assert_eq!(pilot.present_choice(PROMPT_ITEM, &bag).unwrap(), 1);
        // Mana is 0, so the next best move is an elixir.
        assert_eq!(pilot.present_choice(PROMPT_ACTION, &menu).unwrap(), 2);
        assert_eq!(pilot.present_choice(PROMPT_ITEM, &bag).unwrap(), 0);
    }

    #[test]
    fn test_casts_strongest_affordable_spell() {
        let mut pilot = Autopilot::new(Policy::Balanced);
        pilot.show(&pool(PoolKind::Hp, 100, 100)).unwrap();
        pilot.show(&pool(PoolKind::Mana, 7, 10)).unwrap();
        let menu = labels(&["FIGHT", "MAGIC", "BAG", "FORFEIT"]);
        assert_eq!(pilot.present_choice(PROMPT_ACTION, &menu).unwrap(), 1);
        let spells = labels(&["ZAP\n5 MANA", "IGNITE\n7 MANA", "CONGEAL\n8 MANA", EXIT_LABEL]);
        assert_eq!(pilot.present_choice(PROMPT_SPELL, &spells).unwrap(), 1);
    }

    #[test]
    fn test_shop_once_per_lobby_visit() {
        let mut pilot = Autopilot::new(Policy::Balanced);
        pilot.show(&pool(PoolKind::Gold, 50, 999)).unwrap();
        let doors = labels(&["DOOR #1\nBLUE", "DOOR #2\nORANGE", SHOP_LABEL]);
        assert_eq!(pilot.present_choice(PROMPT_DOORS, &doors).unwrap(), 2);
        let stock = labels(&[
            "MEDICINE\nITEM:20G",
            "ELIXIR\nITEM:30G",
            "IGNITE\nSPELL:50G",
            "CONGEAL\nSPELL:70G",
            "ENERGISER\nPERK:100G",
            EXIT_LABEL,
        ]);
        assert_eq!(pilot.present_choice(PROMPT_SHOP, &stock).unwrap(), 2);
        assert_eq!(pilot.present_choice(PROMPT_SHOP, &stock).unwrap(), 5);
        assert_eq!(pilot.present_choice(PROMPT_DOORS, &doors).unwrap(), 0);
    }

    #[test]
    fn test_budget_exhaustion_forfeits() {
        let mut pilot = Autopilot::new(Policy::Balanced).with_budget(0);
        let menu = labels(&["FIGHT", "PRAY", "CRY", "RUN"]);
        assert_eq!(pilot.present_choice(PROMPT_ACTION_DUEL, &menu).unwrap(), 3);
    }
}
