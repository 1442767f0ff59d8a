//! The lobby shop.

use serde::{Deserialize, Serialize};

use crate::combat::PlayerState;
use crate::core::constants::{HEARTSTONE_MAX_HP, SHOP_DISPLAY_LIMIT};
use crate::error::ActionRejected;
use crate::roster::{Item, Perk, Spell};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ware {
    Item(Item),
    Spell(Spell),
    Perk(Perk),
}

impl Ware {
    pub fn label(&self) -> &'static str {
        match self {
            Ware::Item(item) => item.label(),
            Ware::Spell(spell) => spell.label(),
            Ware::Perk(perk) => perk.label(),
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            Ware::Item(_) => "ITEM",
            Ware::Spell(_) => "SPELL",
            Ware::Perk(_) => "PERK",
        }
    }

    /// Spells and perks can only be bought once.
    pub fn is_unique(&self) -> bool {
        !matches!(self, Ware::Item(_))
    }

    /// The shopkeeper's line on a sale.
    pub fn sale_line(&self) -> String {
        match self {
            Ware::Item(item) => format!(
                "Here's yer {}. Use it wisely, ya hear?",
                item.display_name()
            ),
            Ware::Spell(spell) => format!(
                "Now ya can cast {}. Be careful, ya hear?",
                spell.display_name()
            ),
            Ware::Perk(perk) => format!(
                "Here's yer {}. Hope it does ya well.",
                perk.display_name()
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub ware: Ware,
    pub price: i32,
}

impl Listing {
    /// Menu entry, e.g. `"MEDICINE\nITEM:20G"`.
    pub fn menu_label(&self) -> String {
        format!(
            "{}\n{}:{}G",
            self.ware.label(),
            self.ware.category(),
            self.price
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    stock: Vec<Listing>,
}

impl Default for Shop {
    fn default() -> Self {
        Self::new()
    }
}

impl Shop {
    pub fn new() -> Self {
        let listing = |ware, price| Listing { ware, price };
        Self {
            stock: vec![
                listing(Ware::Item(Item::Medicine), 20),
                listing(Ware::Item(Item::Elixir), 30),
                listing(Ware::Spell(Spell::Ignite), 50),
                listing(Ware::Spell(Spell::Congeal), 70),
                listing(Ware::Perk(Perk::Energiser), 100),
                listing(Ware::Perk(Perk::Heartstone), 150),
                listing(Ware::Item(Item::Nectar), 80),
            ],
        }
    }

    /// The listings currently on the counter.
    pub fn on_display(&self) -> &[Listing] {
        let shown = self.stock.len().min(SHOP_DISPLAY_LIMIT);
        &self.stock[..shown]
    }

    pub fn menu_labels(&self) -> Vec<String> {
        self.on_display().iter().map(Listing::menu_label).collect()
    }

    /// Checks a purchase without changing anything.
    pub fn validate(&self, index: usize, player: &PlayerState) -> Result<Listing, ActionRejected> {
        let listing = *self
            .on_display()
            .get(index)
            .ok_or(ActionRejected::EmptySlot { index })?;
        let available = player.stats.gold.current();
        if available < listing.price {
            return Err(ActionRejected::NotEnoughGold {
                price: listing.price,
                available,
            });
        }
        if let Ware::Item(_) = listing.ware {
            if player.loadout.bag_is_full() {
                return Err(ActionRejected::BagFull {
                    capacity: player.loadout.max_bag,
                });
            }
        }
        Ok(listing)
    }

    /// Buys the listing at `index` from the counter.
    ///
    /// Refusals leave both the player and the stock untouched.
    pub fn purchase(
        &mut self,
        index: usize,
        player: &mut PlayerState,
    ) -> Result<Ware, ActionRejected> {
        let listing = match self.validate(index, player) {
            Ok(listing) => listing,
            Err(rejected) => {
                tracing::info!(index, %rejected, "purchase refused");
                return Err(rejected);
            }
        };

        player.stats.gold.drain(listing.price);
        match listing.ware {
            Ware::Item(item) => player.loadout.add_item(item)?,
            Ware::Spell(spell) => player.loadout.learn(spell),
            Ware::Perk(perk) => {
                player.loadout.grant_perk(perk);
                if perk == Perk::Heartstone {
                    player.stats.hp.set_max(HEARTSTONE_MAX_HP);
                }
            }
        }
        if listing.ware.is_unique() {
            self.stock.remove(index);
        }
        tracing::info!(
            ware = listing.ware.label(),
            price = listing.price,
            gold_left = player.stats.gold.current(),
            "purchase made"
        );
        Ok(listing.ware)
    }
}
