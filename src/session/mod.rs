//! The game loop around battles and the seam to whatever draws it.

pub mod autopilot;
pub mod game;
pub mod narration;
pub mod presentation;

pub use autopilot::{Autopilot, Policy};
pub use game::{BattleRecord, GameSession, RunOutcome};
pub use presentation::{GameEvent, Presentation, ScriptedPresenter};
