//! Defeated set and door availability.

use serde::{Deserialize, Serialize};

use crate::core::Variant;
use crate::roster::BossId;

/// How an installment decides which doors are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnlockRule {
    /// One enemy, open until defeated.
    Single,
    /// Every undefeated regular is open; the final boss opens once all
    /// regulars are down.
    FlatWithFinal { regulars: u8 },
    /// The vice doors, shown in pairs, plus the hidden eighth door.
    PairedTiers,
}

impl UnlockRule {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Duel => UnlockRule::Single,
            Variant::Idols => UnlockRule::FlatWithFinal { regulars: 4 },
            Variant::Vices => UnlockRule::PairedTiers,
        }
    }
}

/// How a finished run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ending {
    /// The duel enemy fell.
    DuelVictory,
    /// The supreme idol fell.
    IdolsVictory,
    /// The seventh vice fell before all the others were beaten.
    VicesEnding,
    /// The hidden eighth idol fell.
    TrueEnding,
}

/// Tracks which bosses the player has beaten during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionGraph {
    rule: UnlockRule,
    /// Defeated bosses in the order they fell.
    defeated: Vec<BossId>,
}

const PRIDE: BossId = BossId(6);
const ORIGINAL_SIN: BossId = BossId(7);
const VICES_BEFORE_SIN: usize = 7;

impl ProgressionGraph {
    pub fn new(rule: UnlockRule) -> Self {
        Self {
            rule,
            defeated: Vec::new(),
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        Self::new(UnlockRule::for_variant(variant))
    }

    pub fn rule(&self) -> UnlockRule {
        self.rule
    }

    pub fn defeated(&self) -> &[BossId] {
        &self.defeated
    }

    pub fn is_defeated(&self, id: BossId) -> bool {
        self.defeated.contains(&id)
    }

    /// Records a win. Returns false if the boss was already beaten.
    pub fn record_victory(&mut self, id: BossId) -> bool {
        if self.is_defeated(id) {
            return false;
        }
        self.defeated.push(id);
        tracing::info!(boss = %id, defeated = self.defeated.len(), "victory recorded");
        true
    }

    fn won(&self, index: u8) -> bool {
        self.is_defeated(BossId(index))
    }

    /// Doors open right now, in display order. Never includes a beaten boss.
    pub fn available_doors(&self) -> Vec<BossId> {
        let mut doors: Vec<BossId> = Vec::new();
        match self.rule {
            UnlockRule::Single => doors.push(BossId(0)),
            UnlockRule::FlatWithFinal { regulars } => {
                doors.extend((0..regulars).map(BossId));
                if (0..regulars).all(|i| self.won(i)) {
                    doors.push(BossId(regulars));
                }
            }
            UnlockRule::PairedTiers => {
                if !(self.won(0) && self.won(1)) && !self.won(2) && !self.won(3) {
                    doors.extend([BossId(0), BossId(1)]);
                }
                if (self.won(0) || self.won(1)) && !self.won(4) && !self.won(5) {
                    doors.extend([BossId(2), BossId(3)]);
                }
                if (self.won(2) || self.won(3)) && !self.won(6) {
                    doors.extend([BossId(4), BossId(5)]);
                }
                if self.won(4) || self.won(5) {
                    doors.push(PRIDE);
                }
                if self.defeated.len() == VICES_BEFORE_SIN {
                    doors.push(ORIGINAL_SIN);
                }
            }
        }
        doors.retain(|id| !self.is_defeated(*id));
        doors
    }

    /// The ending reached, if the run is over.
    pub fn ending(&self) -> Option<Ending> {
        match self.rule {
            UnlockRule::Single => self.won(0).then_some(Ending::DuelVictory),
            UnlockRule::FlatWithFinal { regulars } => {
                self.won(regulars).then_some(Ending::IdolsVictory)
            }
            UnlockRule::PairedTiers => {
                if self.is_defeated(ORIGINAL_SIN) {
                    Some(Ending::TrueEnding)
                } else if self.is_defeated(PRIDE) && self.defeated.len() != VICES_BEFORE_SIN {
                    Some(Ending::VicesEnding)
                } else {
                    None
                }
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.ending().is_some()
    }

    /// True when the hidden door has just become visible.
    pub fn hidden_door_revealed(&self) -> bool {
        self.rule == UnlockRule::PairedTiers
            && self.defeated.len() == VICES_BEFORE_SIN
            && !self.is_defeated(ORIGINAL_SIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u8]) -> Vec<BossId> {
        raw.iter().copied().map(BossId).collect()
    }

    fn vices_after(wins: &[u8]) -> ProgressionGraph {
        let mut graph = ProgressionGraph::for_variant(Variant::Vices);
        for id in wins {
            graph.record_victory(BossId(*id));
        }
        graph
    }

    #[test]
    fn test_duel_single_door() {
        let mut graph = ProgressionGraph::for_variant(Variant::Duel);
        assert_eq!(graph.available_doors(), ids(&[0]));
        assert!(graph.ending().is_none());
        graph.record_victory(BossId(0));
        assert!(graph.available_doors().is_empty());
        assert_eq!(graph.ending(), Some(Ending::DuelVictory));
    }

    #[test]
    fn test_idols_final_opens_after_four() {
        let mut graph = ProgressionGraph::for_variant(Variant::Idols);
        assert_eq!(graph.available_doors(), ids(&[0, 1, 2, 3]));
        for id in [2, 0, 3] {
            graph.record_victory(BossId(id));
        }
        assert_eq!(graph.available_doors(), ids(&[1]));
        graph.record_victory(BossId(1));
        assert_eq!(graph.available_doors(), ids(&[4]));
        assert!(!graph.is_complete());
        graph.record_victory(BossId(4));
        assert_eq!(graph.ending(), Some(Ending::IdolsVictory));
    }

    #[test]
    fn test_vices_first_pair() {
        assert_eq!(vices_after(&[]).available_doors(), ids(&[0, 1]));
    }

    #[test]
    fn test_vices_defeating_first_opens_second_pair() {
        let graph = vices_after(&[0]);
        let doors = graph.available_doors();
        assert_eq!(doors, ids(&[1, 2, 3]));
        assert!(!doors.contains(&BossId(0)));
    }

    #[test]
    fn test_vices_skipping_a_pair_member_closes_it() {
        // Moving on from a pair hides its other door for good.
        let graph = vices_after(&[0, 2]);
        assert_eq!(graph.available_doors(), ids(&[3, 4, 5]));
        let graph = vices_after(&[0, 2, 4]);
        assert_eq!(graph.available_doors(), ids(&[5, 6]));
    }

    #[test]
    fn test_vices_ending_when_pride_falls_early() {
        let graph = vices_after(&[0, 2, 4, 6]);
        assert_eq!(graph.ending(), Some(Ending::VicesEnding));
    }

    #[test]
    fn test_vices_hidden_door_after_all_seven() {
        let graph = vices_after(&[0, 1, 2, 3, 4, 5, 6]);
        assert!(graph.hidden_door_revealed());
        assert_eq!(graph.available_doors(), ids(&[7]));
        assert!(graph.ending().is_none());

        let graph = vices_after(&[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(graph.ending(), Some(Ending::TrueEnding));
        assert!(graph.available_doors().is_empty());
    }

    #[test]
    fn test_defeated_boss_never_offered_again() {
        let order = [1, 0, 3, 2, 5, 4, 6, 7];
        let mut graph = ProgressionGraph::for_variant(Variant::Vices);
        for id in order {
            assert!(graph.available_doors().contains(&BossId(id)));
            graph.record_victory(BossId(id));
            for beaten in graph.defeated() {
                assert!(!graph.available_doors().contains(beaten));
            }
        }
    }

    #[test]
    fn test_record_victory_is_idempotent() {
        let mut graph = ProgressionGraph::for_variant(Variant::Idols);
        assert!(graph.record_victory(BossId(0)));
        assert!(!graph.record_victory(BossId(0)));
        assert_eq!(graph.defeated().len(), 1);
    }
}
