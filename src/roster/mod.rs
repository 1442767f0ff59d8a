//! Bosses, items, spells and perks.

pub mod data;
pub mod items;

pub use data::{boss_def, roster, BossDef, BossId};
pub use items::{Item, Loadout, Perk, Spell};
