//! Combat resolution: the attack formula, status effects, boss scripts and the
//! turn state machine that drives a boss room.

pub mod battle;
pub mod combatant;
pub mod events;
pub mod formula;
pub mod script;
pub mod status;
pub mod tables;

pub use battle::{Battle, BattlePhase, PlayerAction, Reward, TurnReport};
pub use combatant::{Combatant, CombatantKind, PlayerState};
pub use events::{BattleEvent, PoolKind, Side};
pub use formula::{resolve_attack, HitResult, Outcome, Source, Strike};
pub use script::BossScript;
pub use status::{StatusEffect, StatusKind};
