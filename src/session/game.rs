//! One playthrough: intro, lobby, rooms, shop and epilogue.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::combat::{
    Battle, BattleEvent, BattlePhase, PlayerAction, PlayerState, PoolKind, Side,
};
use crate::config::GameConfig;
use crate::core::constants::{EXIT_LABEL, NECTAR_GIFT_AFTER_WINS, SHOP_LABEL};
use crate::core::{MenuAction, Variant};
use crate::economy::Shop;
use crate::error::{ActionRejected, GameError};
use crate::progression::{Ending, ProgressionGraph};
use crate::roster::{boss_def, BossId, Item};

use super::narration::{self, *};
use super::presentation::{GameEvent, Presentation};

/// How a run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Completed(Ending),
    Defeated(BossId),
    Forfeited(BossId),
    /// QUIT from the intro menu.
    Quit,
}

/// Summary of one boss room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    pub boss: BossId,
    pub rounds: u32,
    pub result: BattlePhase,
}

enum LobbyChoice {
    Door(BossId),
    Shop,
}

/// Owns everything a run needs: the RNG, the player, progression, the shop
/// and the presentation.
pub struct GameSession<P: Presentation> {
    variant: Variant,
    rng: ChaCha8Rng,
    player: PlayerState,
    progression: ProgressionGraph,
    shop: Shop,
    presenter: P,
    nectar_granted: bool,
    doors_shown: bool,
    records: Vec<BattleRecord>,
}

impl<P: Presentation> GameSession<P> {
    pub fn new(config: &GameConfig, presenter: P) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config.variant, rng, presenter)
    }

    pub fn with_rng(variant: Variant, rng: ChaCha8Rng, presenter: P) -> Self {
        Self {
            variant,
            rng,
            player: PlayerState::starting(variant),
            progression: ProgressionGraph::for_variant(variant),
            shop: Shop::new(),
            presenter,
            nectar_granted: false,
            doors_shown: false,
            records: Vec::new(),
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn progression(&self) -> &ProgressionGraph {
        &self.progression
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn records(&self) -> &[BattleRecord] {
        &self.records
    }

    /// Plays until an ending, a defeat, a forfeit or a quit.
    pub fn run(&mut self) -> Result<RunOutcome, GameError> {
        tracing::info!(variant = %self.variant, "run started");
        if self.variant.has_intro() && !self.intro()? {
            return Ok(RunOutcome::Quit);
        }

        loop {
            if let Some(ending) = self.progression.ending() {
                self.epilogue(ending)?;
                tracing::info!(?ending, "run completed");
                return Ok(RunOutcome::Completed(ending));
            }
            match self.lobby()? {
                LobbyChoice::Shop => self.visit_shop()?,
                LobbyChoice::Door(id) => {
                    if let Some(outcome) = self.room(id)? {
                        tracing::info!(?outcome, "run ended");
                        return Ok(outcome);
                    }
                }
            }
        }
    }

    /// Asks the presentation to pick and checks the answer.
    fn choose(&mut self, prompt: &str, options: &[String]) -> Result<usize, GameError> {
        if options.is_empty() {
            return Err(GameError::NoOptions {
                prompt: prompt.to_string(),
            });
        }
        let index = self.presenter.present_choice(prompt, options)?;
        if index >= options.len() {
            tracing::error!(prompt, index, len = options.len(), "menu choice out of range");
            return Err(GameError::InvalidChoice {
                index,
                len: options.len(),
            });
        }
        Ok(index)
    }

    fn narrate(&mut self, text: impl Into<String>) -> Result<(), GameError> {
        self.presenter.show(&GameEvent::narration(text))
    }

    fn narrate_all(&mut self, lines: &[&str]) -> Result<(), GameError> {
        for line in lines {
            self.narrate(*line)?;
        }
        Ok(())
    }

    fn flush(&mut self, battle: &mut Battle) -> Result<(), GameError> {
        for event in battle.take_events() {
            self.presenter.show(&GameEvent::Battle(event))?;
        }
        Ok(())
    }

    fn show_pool(&mut self, pool: PoolKind) -> Result<(), GameError> {
        let value = match pool {
            PoolKind::Hp => self.player.stats.hp,
            PoolKind::Mana => self.player.stats.mana,
            PoolKind::Gold => self.player.stats.gold,
        };
        self.presenter
            .show(&GameEvent::Battle(BattleEvent::PoolChanged {
                side: Side::Player,
                pool,
                current: value.current(),
                max: value.max(),
            }))
    }

    fn intro(&mut self) -> Result<bool, GameError> {
        let options: Vec<String> = INTRO_OPTIONS.iter().map(|s| s.to_string()).collect();
        loop {
            match self.choose(intro_prompt(self.variant), &options)? {
                0 => {
                    self.narrate(START)?;
                    return Ok(true);
                }
                1 => self.manual()?,
                _ => {
                    self.narrate(QUIT)?;
                    return Ok(false);
                }
            }
        }
    }

    fn manual(&mut self) -> Result<(), GameError> {
        if self.variant == Variant::Idols {
            return self.narrate_all(IDOLS_MANUAL);
        }
        let mut options: Vec<String> = MANUAL_TOPICS.iter().map(|s| s.to_string()).collect();
        options.push(EXIT_LABEL.to_string());
        loop {
            let topic = self.choose(PROMPT_MANUAL, &options)?;
            if topic >= MANUAL_TOPICS.len() {
                return Ok(());
            }
            self.narrate_all(narration::manual_page(topic))?;
        }
    }

    fn lobby(&mut self) -> Result<LobbyChoice, GameError> {
        let doors = self.progression.available_doors();
        let Some(&first) = doors.first() else {
            return Err(GameError::NoOptions {
                prompt: "lobby".to_string(),
            });
        };

        match self.variant {
            Variant::Duel => Ok(LobbyChoice::Door(first)),
            Variant::Idols => {
                if doors.len() == 1 && self.progression.defeated().len() == 4 {
                    self.narrate_all(FINAL_IDOL)?;
                    return Ok(LobbyChoice::Door(first));
                }
                if self.progression.defeated().len() == NECTAR_GIFT_AFTER_WINS
                    && !self.nectar_granted
                {
                    self.narrate_all(NECTAR_GIFT)?;
                    self.player.loadout.gift_item(Item::Nectar);
                    self.nectar_granted = true;
                    tracing::info!("nectar gifted");
                }
                if !self.doors_shown {
                    self.narrate(IDOLS_LOBBY)?;
                    self.doors_shown = true;
                }
                let options = self.door_labels(&doors, false);
                let index = self.choose(PROMPT_DOORS, &options)?;
                Ok(LobbyChoice::Door(doors[index]))
            }
            Variant::Vices => {
                if !self.doors_shown {
                    if self.progression.hidden_door_revealed() {
                        self.narrate_all(HIDDEN_DOOR)?;
                    } else {
                        self.narrate(door_count_line(doors.len()))?;
                    }
                    self.doors_shown = true;
                }
                let prompt = if doors.len() == 1 {
                    PROMPT_SINGLE_DOOR
                } else {
                    PROMPT_DOORS
                };
                let mut options = self.door_labels(&doors, true);
                options.push(SHOP_LABEL.to_string());
                let index = self.choose(prompt, &options)?;
                if index == doors.len() {
                    Ok(LobbyChoice::Shop)
                } else {
                    Ok(LobbyChoice::Door(doors[index]))
                }
            }
        }
    }

    fn door_labels(&self, doors: &[BossId], numbered: bool) -> Vec<String> {
        doors
            .iter()
            .map(|id| {
                let colour = boss_def(self.variant, *id).map_or("?", |def| def.colour);
                if numbered {
                    format!("DOOR {}\n{}", id, colour)
                } else {
                    colour.to_string()
                }
            })
            .collect()
    }

    fn visit_shop(&mut self) -> Result<(), GameError> {
        tracing::debug!(gold = self.player.stats.gold.current(), "entered shop");
        self.show_pool(PoolKind::Gold)?;
        loop {
            let mut options = self.shop.menu_labels();
            options.push(EXIT_LABEL.to_string());
            let index = self.choose(PROMPT_SHOP, &options)?;
            if index == options.len() - 1 {
                return Ok(());
            }
            match self.shop.purchase(index, &mut self.player) {
                Ok(ware) => {
                    self.narrate(ware.sale_line())?;
                    self.show_pool(PoolKind::Gold)?;
                    self.show_pool(PoolKind::Hp)?;
                }
                Err(rejected) => self.narrate(rejected.narration())?,
            }
        }
    }

    /// Plays one room. Returns `Some` when the run is over.
    fn room(&mut self, id: BossId) -> Result<Option<RunOutcome>, GameError> {
        let def = boss_def(self.variant, id).ok_or(GameError::UnknownBoss(id))?;
        self.presenter.show(&GameEvent::EnterRoom {
            id,
            name: def.name,
            glyph: def.glyph,
            colour: def.colour,
        })?;
        let mut battle =
            Battle::new(self.variant, &self.player, id).map_err(|_| GameError::UnknownBoss(id))?;
        self.show_pool(PoolKind::Mana)?;
        self.show_pool(PoolKind::Gold)?;
        self.flush(&mut battle)?;

        while !battle.phase().is_terminal() {
            let Some(action) = self.pick_action(&battle)? else {
                continue;
            };
            if let Err(rejected) = battle.submit(action, &mut self.rng) {
                self.narrate(rejected.narration())?;
            }
            self.flush(&mut battle)?;
        }

        self.records.push(BattleRecord {
            boss: id,
            rounds: battle.rounds(),
            result: battle.phase(),
        });

        let outcome = match battle.phase() {
            BattlePhase::PlayerVictory => {
                battle.commit_victory(&mut self.player);
                self.flush(&mut battle)?;
                self.progression.record_victory(id);
                self.doors_shown = false;
                None
            }
            BattlePhase::PlayerDefeat => {
                if self.variant == Variant::Duel {
                    self.narrate_all(DUEL_DEFEAT)?;
                }
                Some(RunOutcome::Defeated(id))
            }
            _ => Some(RunOutcome::Forfeited(id)),
        };
        self.presenter.show(&GameEvent::LeaveRoom)?;
        Ok(outcome)
    }

    /// Top-level menu plus any submenu. `None` means the player backed out.
    fn pick_action(&mut self, battle: &Battle) -> Result<Option<PlayerAction>, GameError> {
        let menu = self.variant.menu();
        let labels: Vec<String> = menu.iter().map(|a| a.label().to_string()).collect();
        let prompt = if self.variant == Variant::Duel {
            PROMPT_ACTION_DUEL
        } else {
            PROMPT_ACTION
        };
        let choice = self.choose(prompt, &labels)?;

        let action = match menu[choice] {
            MenuAction::Fight => PlayerAction::Fight,
            MenuAction::Pray => PlayerAction::Pray,
            MenuAction::Cry => PlayerAction::Cry,
            MenuAction::Run => PlayerAction::Run,
            MenuAction::Examine => PlayerAction::Examine,
            MenuAction::Forfeit => PlayerAction::Forfeit,
            MenuAction::Inventory | MenuAction::Bag => {
                if battle.loadout().bag.is_empty() {
                    self.narrate(ActionRejected::NothingToUse.narration())?;
                    return Ok(None);
                }
                let mut options = battle.loadout().bag_labels();
                options.push(EXIT_LABEL.to_string());
                let index = self.choose(PROMPT_ITEM, &options)?;
                if index == options.len() - 1 {
                    return Ok(None);
                }
                PlayerAction::UseItem(index)
            }
            MenuAction::Magic => {
                let mut options = battle.loadout().spell_labels();
                options.push(EXIT_LABEL.to_string());
                let index = self.choose(PROMPT_SPELL, &options)?;
                if index == options.len() - 1 {
                    return Ok(None);
                }
                PlayerAction::Cast(index)
            }
        };
        Ok(Some(action))
    }

    fn epilogue(&mut self, ending: Ending) -> Result<(), GameError> {
        self.presenter.show(&GameEvent::Ending(ending))?;
        self.narrate_all(narration::epilogue(ending))
    }
}
