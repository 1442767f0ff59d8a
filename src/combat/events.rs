//! State-change notifications published by a battle.
//!
//! The battle mutates its state immediately and queues one of these for every
//! visible change; a presentation drains the queue and animates at its own pace.

use super::battle::BattlePhase;
use super::status::StatusKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Boss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    Hp,
    Mana,
    Gold,
}

impl PoolKind {
    pub fn label(&self) -> &'static str {
        match self {
            PoolKind::Hp => "HP",
            PoolKind::Mana => "MP",
            PoolKind::Gold => "G",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    /// A line of narration.
    Message(String),
    PoolChanged {
        side: Side,
        pool: PoolKind,
        current: i32,
        max: i32,
    },
    /// A side flashes, e.g. when struck.
    Flicker {
        side: Side,
        times: u8,
        colour: Option<&'static str>,
    },
    /// The duel enemy changes its face.
    Expression(&'static str),
    StatusChanged {
        side: Side,
        status: Option<StatusKind>,
    },
    PhaseChanged(BattlePhase),
}

impl BattleEvent {
    pub fn message(text: impl Into<String>) -> Self {
        BattleEvent::Message(text.into())
    }

    pub fn as_message(&self) -> Option<&str> {
        match self {
            BattleEvent::Message(text) => Some(text),
            _ => None,
        }
    }
}
