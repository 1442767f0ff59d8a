//! Static boss tables for every installment.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::combat::script::BossScript;
use crate::core::constants::DUEL_ENEMY_HP;
use crate::core::{Stat, StatBlock, Variant};

/// Index of a boss within its installment's roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BossId(pub u8);

impl BossId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BossId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0 + 1)
    }
}

/// A boss as written in the tables. Stat fields are the raw table values;
/// [`BossDef::stat_block`] converts them with the installment's scaling.
#[derive(Debug, Clone, Copy)]
pub struct BossDef {
    pub name: &'static str,
    pub glyph: &'static str,
    pub colour: &'static str,
    pub hp: i32,
    pub atk: i32,
    pub def: i32,
    pub lck: i32,
    pub prt: i32,
    pub prs: i32,
    pub evs: i32,
    /// Gold found on defeat.
    pub gold: i32,
    /// Stat raised by +10 on defeat.
    pub blessing: Option<Stat>,
    pub script: BossScript,
    /// Read out by EXAMINE. Empty where the installment has no EXAMINE.
    pub bio: &'static [&'static str],
}

impl BossDef {
    pub fn stat_block(&self, variant: Variant) -> StatBlock {
        let mut block = StatBlock::uniform(0, self.hp);
        match variant {
            Variant::Duel => {
                block = StatBlock::uniform(50, self.hp);
            }
            // Idol tables are offsets from the player's baseline of 50.
            Variant::Idols => {
                block.attack = 10 + self.atk / 5;
                block.defence = 50 + self.def;
                block.luck = 50 + self.lck;
                block.protection = 50 + self.prt;
                block.precision = 50 + self.prs;
                block.evasion = 50 + self.evs;
            }
            Variant::Vices => {
                block.attack = self.atk / 5;
                block.defence = self.def;
                block.luck = self.lck;
                block.protection = self.prt;
                block.precision = self.prs;
                block.evasion = self.evs;
            }
        }
        block
    }
}

const DUEL_ROSTER: [BossDef; 1] = [BossDef {
    name: "The Enemy",
    glyph: ":)",
    colour: "WHITE",
    hp: DUEL_ENEMY_HP,
    atk: 0,
    def: 0,
    lck: 0,
    prt: 0,
    prs: 0,
    evs: 0,
    gold: 0,
    blessing: None,
    script: BossScript::Brute,
    bio: &[],
}];

const IDOLS_ROSTER: [BossDef; 5] = [
    BossDef {
        name: "Akua Ahi",
        glyph: "火",
        colour: "RED",
        hp: 500,
        atk: 20,
        def: -20,
        lck: 10,
        prt: 0,
        prs: -10,
        evs: 0,
        gold: 0,
        blessing: Some(Stat::Attack),
        script: BossScript::Striker,
        bio: &[
            "\"Entry I:\"",
            "\"Akua Ahi, the idol of fire...\"",
            "\"They have immense power, however their defences are lacking.\"",
            "\"They also tend to be very reckless and miss their targets.\"",
        ],
    },
    BossDef {
        name: "Akua Lepo",
        glyph: "土",
        colour: "YELLOW",
        hp: 500,
        atk: -20,
        def: 20,
        lck: 0,
        prt: 10,
        prs: 0,
        evs: -10,
        gold: 0,
        blessing: Some(Stat::Defence),
        script: BossScript::Striker,
        bio: &[
            "\"Entry II:\"",
            "\"Akua Lepo, the idol of earth...\"",
            "\"Their defence is unbreakable, however they are very sluggish in attacking.\"",
            "\"They are so placid and confident that they will not even try to dodge attacks.\"",
        ],
    },
    BossDef {
        name: "Akua Makani",
        glyph: "气",
        colour: "CYAN",
        hp: 500,
        atk: 0,
        def: -10,
        lck: 20,
        prt: -5,
        prs: 10,
        evs: -5,
        gold: 0,
        blessing: Some(Stat::Luck),
        script: BossScript::Striker,
        bio: &[
            "\"Entry III:\"",
            "\"Akua Makani, the idol of wind...\"",
            "\"They rely solely on their luck, as they do not have very much stamina.\"",
            "\"They are the most anxious of the idols and prioritise having perfect accuracy.\"",
        ],
    },
    BossDef {
        name: "Akua Wai",
        glyph: "水",
        colour: "BLUE",
        hp: 500,
        atk: -10,
        def: 0,
        lck: -5,
        prt: 20,
        prs: -5,
        evs: 10,
        gold: 0,
        blessing: Some(Stat::Protection),
        script: BossScript::Striker,
        bio: &[
            "\"Entry IV:\"",
            "\"Akua Wai, the idol of water...\"",
            "\"They are both resilient and evasive, but they do not attack very forcefully.\"",
            "\"They are a trickster. Not only are they hard to hit, they can also take many hits.\"",
        ],
    },
    BossDef {
        name: "Akua Lani",
        glyph: "大天王",
        colour: "PURPLE",
        hp: 750,
        atk: 5,
        def: 5,
        lck: 5,
        prt: 5,
        prs: 5,
        evs: 5,
        gold: 0,
        blessing: None,
        script: BossScript::Striker,
        bio: &[
            "\"Entry V:\"",
            "\"Akua Lani, the supreme god of the idols...\"",
            "\"They are very adept in all areas. Please take extreme caution.\"",
            "\"They have all of the other idols' skills, plus a whopping health pool.\"",
            "\"They are so self-absorbed, they have three characters in their body rather than one.\"",
        ],
    },
];

const VICES_ROSTER: [BossDef; 8] = [
    BossDef {
        name: "Akua Moe",
        glyph: "怠",
        colour: "BLUE",
        hp: 150,
        atk: 40,
        def: 60,
        lck: 40,
        prt: 40,
        prs: 40,
        evs: 40,
        gold: 30,
        blessing: None,
        script: BossScript::Sloth,
        bio: &[],
    },
    BossDef {
        name: "Akua Pehu",
        glyph: "貪",
        colour: "ORANGE",
        hp: 150,
        atk: 40,
        def: 40,
        lck: 40,
        prt: 60,
        prs: 40,
        evs: 40,
        gold: 30,
        blessing: None,
        script: BossScript::Gluttony,
        bio: &[],
    },
    BossDef {
        name: "Akua Kuko",
        glyph: "色",
        colour: "VIOLET",
        hp: 200,
        atk: 60,
        def: 40,
        lck: 40,
        prt: 40,
        prs: 60,
        evs: 40,
        gold: 50,
        blessing: None,
        script: BossScript::Lust,
        bio: &[],
    },
    BossDef {
        name: "Akua Manini",
        glyph: "憤",
        colour: "RED",
        hp: 200,
        atk: 40,
        def: 60,
        lck: 60,
        prt: 60,
        prs: 40,
        evs: 40,
        gold: 50,
        blessing: None,
        script: BossScript::Wrath,
        bio: &[],
    },
    BossDef {
        name: "Akua Lili",
        glyph: "妬",
        colour: "GREEN",
        hp: 250,
        atk: 40,
        def: 60,
        lck: 40,
        prt: 60,
        prs: 40,
        evs: 60,
        gold: 80,
        blessing: None,
        script: BossScript::Envy,
        bio: &[],
    },
    BossDef {
        name: "Akua Nunu",
        glyph: "欲",
        colour: "YELLOW",
        hp: 250,
        atk: 60,
        def: 40,
        lck: 60,
        prt: 40,
        prs: 60,
        evs: 40,
        gold: 80,
        blessing: None,
        script: BossScript::Greed,
        bio: &[],
    },
    BossDef {
        name: "Akua Kei",
        glyph: "慢",
        colour: "INDIGO",
        hp: 300,
        atk: 60,
        def: 50,
        lck: 60,
        prt: 50,
        prs: 60,
        evs: 50,
        gold: 120,
        blessing: None,
        script: BossScript::Pride,
        bio: &[],
    },
    BossDef {
        name: "Akua Hala",
        glyph: "罪",
        colour: "GREY",
        hp: 500,
        atk: 60,
        def: 60,
        lck: 60,
        prt: 60,
        prs: 60,
        evs: 60,
        gold: 0,
        blessing: None,
        script: BossScript::OriginalSin,
        bio: &[],
    },
];

/// The full roster for an installment, indexed by [`BossId`].
pub fn roster(variant: Variant) -> &'static [BossDef] {
    match variant {
        Variant::Duel => &DUEL_ROSTER,
        Variant::Idols => &IDOLS_ROSTER,
        Variant::Vices => &VICES_ROSTER,
    }
}

pub fn boss_def(variant: Variant, id: BossId) -> Option<&'static BossDef> {
    roster(variant).get(id.index())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_sizes() {
        assert_eq!(roster(Variant::Duel).len(), 1);
        assert_eq!(roster(Variant::Idols).len(), 5);
        assert_eq!(roster(Variant::Vices).len(), 8);
    }

    #[test]
    fn test_idol_stats_are_offsets_from_fifty() {
        let ahi = boss_def(Variant::Idols, BossId(0)).unwrap();
        let stats = ahi.stat_block(Variant::Idols);
        assert_eq!(stats.attack, 14);
        assert_eq!(stats.defence, 30);
        assert_eq!(stats.luck, 60);
        assert_eq!(stats.protection, 50);
        assert_eq!(stats.precision, 40);
        assert_eq!(stats.evasion, 50);
        assert_eq!(stats.hp.max(), 500);
    }

    #[test]
    fn test_vice_attack_is_divided_by_five() {
        let kei = boss_def(Variant::Vices, BossId(6)).unwrap();
        let stats = kei.stat_block(Variant::Vices);
        assert_eq!(stats.attack, 12);
        assert_eq!(stats.defence, 50);
        assert_eq!(stats.hp.current(), 300);
        assert_eq!(stats.mana.max(), 0);
    }

    #[test]
    fn test_blessings_follow_idol_order() {
        let blessings: Vec<Option<Stat>> = roster(Variant::Idols)
            .iter()
            .map(|b| b.blessing)
            .collect();
        assert_eq!(
            blessings,
            vec![
                Some(Stat::Attack),
                Some(Stat::Defence),
                Some(Stat::Luck),
                Some(Stat::Protection),
                None
            ]
        );
    }

    #[test]
    fn test_vice_gold_rewards() {
        let gold: Vec<i32> = roster(Variant::Vices).iter().map(|b| b.gold).collect();
        assert_eq!(gold, vec![30, 30, 50, 50, 80, 80, 120, 0]);
    }

    #[test]
    fn test_boss_id_display_is_one_based() {
        assert_eq!(BossId(0).to_string(), "#1");
        assert!(boss_def(Variant::Duel, BossId(3)).is_none());
    }
}
