//! RNG oracle used by phase resolution.
//!
//! Two draws happen per phase: choosing a bee by index, then rolling a
//! percentage for the miss check.

use std::collections::VecDeque;

/// Source of the random draws the engine needs.
///
/// Implementations do not need to be reproducible or cryptographically
/// secure.
pub trait RngOracle: Send {
    /// Uniform index in `[0, len)`. Callers guarantee `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform percentage in `[0, 100]` inclusive.
    fn roll_percent(&mut self) -> u32;
}

impl<R: RngOracle + ?Sized> RngOracle for Box<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn roll_percent(&mut self) -> u32 {
        (**self).roll_percent()
    }
}

/// Oracle that replays pre-recorded draws.
///
/// Picks are reduced modulo the hive length so they are always valid. When a
/// queue runs dry, picks fall back to index 0 and rolls to the fallback roll.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    picks: VecDeque<usize>,
    rolls: VecDeque<u32>,
    fallback_roll: u32,
}

impl ScriptedRng {
    pub const DEFAULT_FALLBACK_ROLL: u32 = 50;

    pub fn new() -> Self {
        Self {
            picks: VecDeque::new(),
            rolls: VecDeque::new(),
            fallback_roll: Self::DEFAULT_FALLBACK_ROLL,
        }
    }

    /// Queue of indices returned by [`RngOracle::pick_index`].
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Queue of percentages returned by [`RngOracle::roll_percent`].
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = u32>) -> Self {
        self.rolls.extend(rolls.into_iter().map(|roll| roll.min(100)));
        self
    }

    /// Roll returned once the roll queue is empty.
    pub fn with_fallback_roll(mut self, roll: u32) -> Self {
        self.fallback_roll = roll.min(100);
        self
    }
}

impl Default for ScriptedRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngOracle for ScriptedRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len.max(1)
    }

    fn roll_percent(&mut self) -> u32 {
        self.rolls.pop_front().unwrap_or(self.fallback_roll)
    }
}
