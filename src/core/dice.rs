//! Random draws used by combat resolution.
//!
//! Every draw goes through [`Dice`] so a battle can run against a seeded
//! `ChaCha8Rng` in play and simulation, or against a [`ScriptedDice`] when a
//! test needs an exact roll sequence.

use std::collections::VecDeque;

use rand::Rng;

use super::constants::{PERCENT_ROLL_MAX, PERCENT_ROLL_MIN};

/// Source of uniform integer draws.
pub trait Dice {
    /// Uniform integer in `low..=high`.
    fn roll(&mut self, low: i32, high: i32) -> i32;

    /// Uniform integer in `0..=99`.
    fn percent(&mut self) -> i32 {
        self.roll(PERCENT_ROLL_MIN, PERCENT_ROLL_MAX)
    }

    /// Inclusive range given as a `(low, high)` pair.
    fn roll_pair(&mut self, range: (i32, i32)) -> i32 {
        self.roll(range.0, range.1)
    }
}

impl<R: Rng + ?Sized> Dice for R {
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.gen_range(low..=high)
    }
}

/// Replays a fixed sequence of draws.
///
/// Values outside the requested range are clamped into it, so a script can be
/// written in terms of the raw numbers a reader expects to see.
///
/// # Panics
/// Panics when a draw is requested after the script is exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    queue: VecDeque<i32>,
    consumed: usize,
}

impl ScriptedDice {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            queue: values.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Appends more draws to the end of the script.
    pub fn extend(&mut self, values: impl IntoIterator<Item = i32>) {
        self.queue.extend(values);
    }

    /// Number of draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        let Some(value) = self.queue.pop_front() else {
            panic!(
                "scripted dice exhausted after {} draws (wanted {}..={})",
                self.consumed, low, high
            );
        };
        self.consumed += 1;
        value.clamp(low, high.max(low))
    }
}
