//! Idols - turn-based boss battles in three installments.
//!
//! The crate is split the way the game is played: `core` holds the rules and
//! dice, `combat` resolves a single boss room, `progression` and `economy`
//! track what happens between rooms, and `session` drives a whole run through
//! a [`session::Presentation`].

pub mod build_info;
pub mod combat;
pub mod config;
pub mod core;
pub mod economy;
pub mod error;
pub mod logging;
pub mod progression;
pub mod roster;
pub mod session;
pub mod simulator;
pub mod ui;

pub use error::{ActionRejected, GameError};
