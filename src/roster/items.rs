//! Items, spells, perks and the player's loadout.

use serde::{Deserialize, Serialize};

use crate::core::constants::*;
use crate::error::ActionRejected;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    Medicine,
    Elixir,
    Nectar,
}

impl Item {
    pub fn label(&self) -> &'static str {
        match self {
            Item::Medicine => "MEDICINE",
            Item::Elixir => "ELIXIR",
            Item::Nectar => "NECTAR",
        }
    }

    /// "Medicine", as used in narration.
    pub fn display_name(&self) -> &'static str {
        match self {
            Item::Medicine => "Medicine",
            Item::Elixir => "Elixir",
            Item::Nectar => "Nectar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spell {
    /// Immediate spell-type strike.
    Zap,
    /// Sets the enemy ablaze.
    Ignite,
    /// Freezes the enemy in place.
    Congeal,
}

impl Spell {
    pub fn label(&self) -> &'static str {
        match self {
            Spell::Zap => "ZAP",
            Spell::Ignite => "IGNITE",
            Spell::Congeal => "CONGEAL",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Spell::Zap => "Zap",
            Spell::Ignite => "Ignite",
            Spell::Congeal => "Congeal",
        }
    }

    pub fn mana_cost(&self) -> i32 {
        match self {
            Spell::Zap => ZAP_COST,
            Spell::Ignite => IGNITE_COST,
            Spell::Congeal => CONGEAL_COST,
        }
    }

    /// Menu entry, e.g. `"ZAP\n5 MANA"`.
    pub fn menu_label(&self) -> String {
        format!("{}\n{} MANA", self.label(), self.mana_cost())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Perk {
    /// +1 mana at the end of every round.
    Energiser,
    /// Raises max HP to 200 without healing.
    Heartstone,
}

impl Perk {
    pub fn label(&self) -> &'static str {
        match self {
            Perk::Energiser => "ENERGISER",
            Perk::Heartstone => "HEARTSTONE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Perk::Energiser => "Energiser",
            Perk::Heartstone => "Heartstone",
        }
    }
}

/// Everything the player carries besides their stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    pub bag: Vec<Item>,
    pub max_bag: usize,
    pub spells: Vec<Spell>,
    pub perks: Vec<Perk>,
}

impl Loadout {
    pub fn new(bag: Vec<Item>, max_bag: usize, spells: Vec<Spell>) -> Self {
        Self {
            bag,
            max_bag,
            spells,
            perks: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 0, Vec::new())
    }

    pub fn bag_is_full(&self) -> bool {
        self.bag.len() >= self.max_bag
    }

    /// Adds an item, refusing when the bag is at capacity.
    pub fn add_item(&mut self, item: Item) -> Result<(), ActionRejected> {
        if self.bag_is_full() {
            return Err(ActionRejected::BagFull {
                capacity: self.max_bag,
            });
        }
        self.bag.push(item);
        Ok(())
    }

    /// Adds an item even when the bag is full. Used for story gifts.
    pub fn gift_item(&mut self, item: Item) {
        self.bag.push(item);
    }

    pub fn item_at(&self, index: usize) -> Result<Item, ActionRejected> {
        if self.bag.is_empty() {
            return Err(ActionRejected::NothingToUse);
        }
        self.bag
            .get(index)
            .copied()
            .ok_or(ActionRejected::EmptySlot { index })
    }

    pub fn take_item(&mut self, index: usize) -> Result<Item, ActionRejected> {
        let item = self.item_at(index)?;
        self.bag.remove(index);
        Ok(item)
    }

    pub fn spell_at(&self, index: usize) -> Result<Spell, ActionRejected> {
        self.spells
            .get(index)
            .copied()
            .ok_or(ActionRejected::EmptySlot { index })
    }

    pub fn knows(&self, spell: Spell) -> bool {
        self.spells.contains(&spell)
    }

    pub fn learn(&mut self, spell: Spell) {
        if !self.knows(spell) {
            self.spells.push(spell);
        }
    }

    pub fn has_perk(&self, perk: Perk) -> bool {
        self.perks.contains(&perk)
    }

    pub fn grant_perk(&mut self, perk: Perk) {
        if !self.has_perk(perk) {
            self.perks.push(perk);
        }
    }

    pub fn bag_labels(&self) -> Vec<String> {
        self.bag.iter().map(|i| i.label().to_string()).collect()
    }

    pub fn spell_labels(&self) -> Vec<String> {
        self.spells.iter().map(|s| s.menu_label()).collect()
    }
}
