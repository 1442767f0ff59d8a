//! Burn, freeze and charge countdowns.

use serde::{Deserialize, Serialize};

use crate::core::constants::{BURN_TURNS, CHARGE_TURNS, FREEZE_TURNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    Burn,
    Freeze,
    Charge,
}

impl StatusKind {
    pub fn name(&self) -> &'static str {
        match self {
            StatusKind::Burn => "burn",
            StatusKind::Freeze => "freeze",
            StatusKind::Charge => "charge",
        }
    }
}

/// An active status. `remaining` is always positive while the effect is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: StatusKind,
    pub remaining: u32,
}

impl StatusEffect {
    pub fn burn() -> Self {
        Self {
            kind: StatusKind::Burn,
            remaining: BURN_TURNS,
        }
    }

    pub fn freeze() -> Self {
        Self {
            kind: StatusKind::Freeze,
            remaining: FREEZE_TURNS,
        }
    }

    pub fn charge() -> Self {
        Self {
            kind: StatusKind::Charge,
            remaining: CHARGE_TURNS,
        }
    }
}

/// What a status does to its holder at the start of the holder's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTick {
    /// No status held.
    Clear,
    /// Turn is skipped.
    Frozen,
    /// Holder takes burn damage, then acts.
    Burning,
    /// The charge fires at the opponent and the turn ends.
    ChargeReleased,
    /// A burn or freeze ran out; the holder acts normally.
    Expired(StatusKind),
}

/// Applies a status, replacing whatever was held.
pub fn apply(slot: &mut Option<StatusEffect>, effect: StatusEffect) -> Option<StatusEffect> {
    slot.replace(effect)
}

/// Counts the held status down by one turn and reports its effect.
pub fn tick(slot: &mut Option<StatusEffect>) -> StatusTick {
    let Some(effect) = slot.as_mut() else {
        return StatusTick::Clear;
    };
    effect.remaining = effect.remaining.saturating_sub(1);
    if effect.remaining > 0 {
        return match effect.kind {
            StatusKind::Freeze => StatusTick::Frozen,
            StatusKind::Burn => StatusTick::Burning,
            // Still building.
            StatusKind::Charge => StatusTick::Clear,
        };
    }
    let kind = effect.kind;
    *slot = None;
    match kind {
        StatusKind::Charge => StatusTick::ChargeReleased,
        other => StatusTick::Expired(other),
    }
}
