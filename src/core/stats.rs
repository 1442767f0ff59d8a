//! Combat stats and bounded resource pools.

use serde::{Deserialize, Serialize};

/// The six combat stats, paired offence/defence along three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Attack,
    Defence,
    Luck,
    Protection,
    Precision,
    Evasion,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Attack,
        Stat::Defence,
        Stat::Luck,
        Stat::Protection,
        Stat::Precision,
        Stat::Evasion,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stat::Attack => "attack",
            Stat::Defence => "defence",
            Stat::Luck => "luck",
            Stat::Protection => "protection",
            Stat::Precision => "precision",
            Stat::Evasion => "evasion",
        }
    }
}

/// A bounded resource. `0 <= current <= max` holds after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    current: i32,
    max: i32,
}

impl Pool {
    /// Full pool with the given maximum. Negative maximums become 0.
    pub fn full(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }

    /// Pool with an explicit current value, clamped into range.
    pub fn with_current(current: i32, max: i32) -> Self {
        let max = max.max(0);
        Self {
            current: current.clamp(0, max),
            max,
        }
    }

    /// Pool with no capacity (bosses carry no mana or gold).
    pub fn empty() -> Self {
        Self { current: 0, max: 0 }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    pub fn is_full(&self) -> bool {
        self.current == self.max
    }

    /// Fraction of the pool remaining, in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            self.current as f64 / self.max as f64
        }
    }

    /// Sets the current value, clamped to `[0, max]`. Returns the applied value.
    pub fn set(&mut self, value: i32) -> i32 {
        self.current = value.clamp(0, self.max);
        self.current
    }

    /// Adds a signed delta, clamped. Returns the change actually applied.
    pub fn adjust(&mut self, delta: i32) -> i32 {
        let before = self.current;
        self.set(before.saturating_add(delta));
        self.current - before
    }

    /// Removes up to `amount`. Returns the amount actually removed.
    pub fn drain(&mut self, amount: i32) -> i32 {
        -self.adjust(-amount.max(0))
    }

    /// Restores up to `amount`. Returns the amount actually restored.
    pub fn restore(&mut self, amount: i32) -> i32 {
        self.adjust(amount.max(0))
    }

    pub fn refill(&mut self) {
        self.current = self.max;
    }

    /// Changes the maximum without restoring the current value.
    pub fn set_max(&mut self, max: i32) {
        self.max = max.max(0);
        self.current = self.current.min(self.max);
    }
}

/// Stats and pools for any combatant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub attack: i32,
    pub defence: i32,
    pub luck: i32,
    pub protection: i32,
    pub precision: i32,
    pub evasion: i32,
    pub hp: Pool,
    pub mana: Pool,
    pub gold: Pool,
}

impl StatBlock {
    /// All six stats set to `value`, full HP, no mana or gold.
    pub fn uniform(value: i32, max_hp: i32) -> Self {
        Self {
            attack: value,
            defence: value,
            luck: value,
            protection: value,
            precision: value,
            evasion: value,
            hp: Pool::full(max_hp),
            mana: Pool::empty(),
            gold: Pool::empty(),
        }
    }

    pub fn with_mana(mut self, mana: Pool) -> Self {
        self.mana = mana;
        self
    }

    pub fn with_gold(mut self, gold: Pool) -> Self {
        self.gold = gold;
        self
    }

    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Attack => self.attack,
            Stat::Defence => self.defence,
            Stat::Luck => self.luck,
            Stat::Protection => self.protection,
            Stat::Precision => self.precision,
            Stat::Evasion => self.evasion,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::Attack => &mut self.attack,
            Stat::Defence => &mut self.defence,
            Stat::Luck => &mut self.luck,
            Stat::Protection => &mut self.protection,
            Stat::Precision => &mut self.precision,
            Stat::Evasion => &mut self.evasion,
        }
    }

    pub fn raise(&mut self, stat: Stat, amount: i32) {
        let value = self.get_mut(stat);
        *value = value.saturating_add(amount);
    }

    pub fn raise_all(&mut self, amount: i32) {
        for stat in Stat::ALL {
            self.raise(stat, amount);
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp.current() > 0
    }
}
