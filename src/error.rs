//! Error types.
//!
//! [`ActionRejected`] is the recoverable class: the player asked for something
//! the current state cannot pay for, nothing was mutated and no turn was spent.
//! [`GameError`] covers everything that ends a session early.

use std::io;

use crate::roster::BossId;

/// A player request refused before any state changed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionRejected {
    #[error("not enough mana: {cost} needed, {available} available")]
    NotEnoughMana { cost: i32, available: i32 },

    #[error("not enough gold: {price}G needed, {available}G available")]
    NotEnoughGold { price: i32, available: i32 },

    #[error("bag is full ({capacity} items)")]
    BagFull { capacity: usize },

    #[error("nothing in slot {index}")]
    EmptySlot { index: usize },

    #[error("nothing to use")]
    NothingToUse,

    #[error("that action is not available here")]
    NotAvailable,

    #[error("the battle is already over")]
    BattleOver,
}

impl ActionRejected {
    /// Line shown to the player when the request bounces.
    pub fn narration(&self) -> &'static str {
        match self {
            ActionRejected::NotEnoughMana { .. } => "You don't have enough mana for that spell!",
            ActionRejected::NotEnoughGold { .. } => "Ya don't have enough money for that, mate.",
            ActionRejected::BagFull { .. } => "Yer bag is too full, mate.",
            ActionRejected::EmptySlot { .. } | ActionRejected::NothingToUse => {
                "You have no items..."
            }
            ActionRejected::NotAvailable => "You can't do that here.",
            ActionRejected::BattleOver => "The fight is already over.",
        }
    }
}

/// Errors that abort a session.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The presentation layer returned an index outside the offered options.
    #[error("menu choice {index} out of range for {len} options")]
    InvalidChoice { index: usize, len: usize },

    /// A menu was requested with nothing to choose from.
    #[error("menu '{prompt}' has no options")]
    NoOptions { prompt: String },

    /// A door led to a boss the installment does not have.
    #[error("no boss {0} in this installment")]
    UnknownBoss(BossId),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl GameError {
    /// Precondition violations are bugs in a presentation layer, not player input.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::InvalidChoice { .. }
                | GameError::NoOptions { .. }
                | GameError::UnknownBoss(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        let err = ActionRejected::NotEnoughMana {
            cost: 5,
            available: 3,
        };
        assert_eq!(err.to_string(), "not enough mana: 5 needed, 3 available");
        assert!(err.narration().contains("mana"));
    }

    #[test]
    fn test_invalid_choice_is_fatal() {
        assert!(GameError::InvalidChoice { index: 4, len: 4 }.is_fatal());
        assert!(!GameError::Config("x".into()).is_fatal());
    }

    #[test]
    fn test_io_error_converts() {
        let err: GameError = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, GameError::Io(_)));
    }
}
