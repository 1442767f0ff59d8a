//! Rule constants, stats and random draws shared by every installment.

pub mod constants;
pub mod dice;
pub mod stats;
pub mod variant;

pub use dice::{Dice, ScriptedDice};
pub use stats::{Pool, Stat, StatBlock};
pub use variant::{MenuAction, Rules, Variant};
