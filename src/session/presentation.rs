//! The boundary between the game and whatever draws it.

use std::collections::VecDeque;

use crate::combat::BattleEvent;
use crate::error::GameError;
use crate::progression::Ending;
use crate::roster::BossId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A line of lobby, menu or story text.
    Narration(String),
    Battle(BattleEvent),
    EnterRoom {
        id: BossId,
        name: &'static str,
        glyph: &'static str,
        colour: &'static str,
    },
    LeaveRoom,
    Ending(Ending),
}

impl GameEvent {
    pub fn narration(text: impl Into<String>) -> Self {
        GameEvent::Narration(text.into())
    }

    /// The text of a narration or battle message.
    pub fn text(&self) -> Option<&str> {
        match self {
            GameEvent::Narration(text) => Some(text),
            GameEvent::Battle(event) => event.as_message(),
            _ => None,
        }
    }
}

/// Something that can show the game and ask the player to pick from a menu.
///
/// `present_choice` blocks until the player picks. Implementations re-prompt
/// on bad input themselves; an index outside `options` is a bug and the
/// session stops with [`GameError::InvalidChoice`].
pub trait Presentation {
    fn present_choice(&mut self, prompt: &str, options: &[String]) -> Result<usize, GameError>;

    fn show(&mut self, event: &GameEvent) -> Result<(), GameError>;
}

/// Replays a fixed list of menu choices and records everything shown.
///
/// # Panics
/// Panics when asked for a choice after the script is exhausted.
#[derive(Debug, Default)]
pub struct ScriptedPresenter {
    choices: VecDeque<usize>,
    shown: Vec<GameEvent>,
    prompts: Vec<(String, Vec<String>)>,
}

impl ScriptedPresenter {
    pub fn new(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
            shown: Vec::new(),
            prompts: Vec::new(),
        }
    }

    pub fn shown(&self) -> &[GameEvent] {
        &self.shown
    }

    /// Every prompt asked so far, with its options.
    pub fn prompts(&self) -> &[(String, Vec<String>)] {
        &self.prompts
    }

    /// All narration and battle message text, in order.
    pub fn lines(&self) -> Vec<&str> {
        self.shown.iter().filter_map(GameEvent::text).collect()
    }

    pub fn remaining(&self) -> usize {
        self.choices.len()
    }
}

impl Presentation for ScriptedPresenter {
    fn present_choice(&mut self, prompt: &str, options: &[String]) -> Result<usize, GameError> {
        self.prompts.push((prompt.to_string(), options.to_vec()));
        let Some(choice) = self.choices.pop_front() else {
            panic!(
                "scripted presenter exhausted at '{}' with options {:?}",
                prompt, options
            );
        };
        Ok(choice)
    }

    fn show(&mut self, event: &GameEvent) -> Result<(), GameError> {
        self.shown.push(event.clone());
        Ok(())
    }
}
