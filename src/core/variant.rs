//! Installment selection and the rule constants each one uses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::constants::*;

/// Which installment of the game is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// A single enemy and table-driven actions.
    Duel,
    /// Four elemental idols, then their supreme god.
    Idols,
    /// Seven vices behind paired doors, a shop, spells and a hidden eighth idol.
    #[default]
    Vices,
}

/// Hit and crit base chances fed into the attack formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    pub base_hit: f64,
    pub base_crit: f64,
}

/// The top-level actions offered each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Fight,
    Pray,
    Cry,
    Run,
    Examine,
    Inventory,
    Magic,
    Bag,
    Forfeit,
}

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Fight => "FIGHT",
            MenuAction::Pray => "PRAY",
            MenuAction::Cry => "CRY",
            MenuAction::Run => "RUN",
            MenuAction::Examine => "EXAMINE",
            MenuAction::Inventory => "INVENTORY",
            MenuAction::Magic => "MAGIC",
            MenuAction::Bag => "BAG",
            MenuAction::Forfeit => "FORFEIT",
        }
    }
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Duel, Variant::Idols, Variant::Vices];

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Duel => "duel",
            Variant::Idols => "idols",
            Variant::Vices => "vices",
        }
    }

    pub fn rules(&self) -> Rules {
        match self {
            // The duel never uses the formula; its tables carry their own odds.
            Variant::Duel | Variant::Idols => Rules {
                base_hit: IDOLS_BASE_HIT,
                base_crit: IDOLS_BASE_CRIT,
            },
            Variant::Vices => Rules {
                base_hit: VICES_BASE_HIT,
                base_crit: VICES_BASE_CRIT,
            },
        }
    }

    pub fn menu(&self) -> [MenuAction; 4] {
        match self {
            Variant::Duel => [
                MenuAction::Fight,
                MenuAction::Pray,
                MenuAction::Cry,
                MenuAction::Run,
            ],
            Variant::Idols => [
                MenuAction::Fight,
                MenuAction::Examine,
                MenuAction::Inventory,
                MenuAction::Forfeit,
            ],
            Variant::Vices => [
                MenuAction::Fight,
                MenuAction::Magic,
                MenuAction::Bag,
                MenuAction::Forfeit,
            ],
        }
    }

    pub fn offers(&self, action: MenuAction) -> bool {
        self.menu().contains(&action)
    }

    /// Whether the lobby offers a shop next to the doors.
    pub fn has_shop(&self) -> bool {
        matches!(self, Variant::Vices)
    }

    /// Whether the run opens with the START / MANUAL / QUIT menu.
    pub fn has_intro(&self) -> bool {
        !matches!(self, Variant::Duel)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "duel" | "1" => Ok(Variant::Duel),
            "idols" | "2" => Ok(Variant::Idols),
            "vices" | "3" => Ok(Variant::Vices),
            other => Err(format!(
                "unknown variant '{}' (expected duel, idols or vices)",
                other
            )),
        }
    }
}
