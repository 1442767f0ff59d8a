use serde::{Deserialize, Serialize};

use crate::core::constants::*;
use crate::core::{Pool, StatBlock, Variant};
use crate::roster::{BossDef, BossId, Item, Loadout, Spell};

use super::formula::HitResult;
use super::status::StatusEffect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatantKind {
    Player,
    Boss(BossId),
}

/// One side of a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub kind: CombatantKind,
    pub stats: StatBlock,
    pub status: Option<StatusEffect>,
    /// Result of this combatant's most recent attack this round.
    pub last_hit: Option<HitResult>,
}

impl Combatant {
    pub fn player(state: &PlayerState) -> Self {
        Self {
            name: "You".to_string(),
            kind: CombatantKind::Player,
            stats: state.stats.clone(),
            status: None,
            last_hit: None,
        }
    }

    pub fn boss(id: BossId, def: &BossDef, variant: Variant) -> Self {
        Self {
            name: def.name.to_string(),
            kind: CombatantKind::Boss(id),
            stats: def.stat_block(variant),
            status: None,
            last_hit: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    pub fn boss_id(&self) -> Option<BossId> {
        match self.kind {
            CombatantKind::Boss(id) => Some(id),
            CombatantKind::Player => None,
        }
    }
}

/// The player as carried between battles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub stats: StatBlock,
    pub loadout: Loadout,
}

impl PlayerState {
    /// Fresh player for the start of a run.
    pub fn starting(variant: Variant) -> Self {
        match variant {
            Variant::Duel => Self {
                stats: StatBlock::uniform(PLAYER_BASE_STAT, DUEL_PLAYER_HP),
                loadout: Loadout::empty(),
            },
            Variant::Idols => Self {
                stats: StatBlock::uniform(PLAYER_BASE_STAT, PLAYER_HP),
                loadout: Loadout::new(
                    vec![Item::Medicine; IDOLS_STARTING_MEDICINE],
                    IDOLS_MAX_BAG,
                    Vec::new(),
                ),
            },
            Variant::Vices => Self {
                stats: StatBlock::uniform(PLAYER_BASE_STAT, PLAYER_HP)
                    .with_mana(Pool::full(PLAYER_MANA))
                    .with_gold(Pool::with_current(PLAYER_GOLD_START, PLAYER_GOLD_MAX)),
                loadout: Loadout::new(
                    vec![Item::Medicine, Item::Elixir],
                    VICES_MAX_BAG,
                    vec![Spell::Zap],
                ),
            },
        }
    }
}
