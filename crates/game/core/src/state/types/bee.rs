use core::fmt;

use crate::combat::apply_damage;
use crate::config::{CombatantProfile, DamageTable};

/// Tier of a bee in the hive.
///
/// Codes outside the known range are kept as [`BeeKind::Unrecognized`] so
/// formatting and population helpers can degrade to empty results instead of
/// failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BeeKind {
    Queen,
    Worker,
    Drone,
    Unrecognized(u8),
}

impl BeeKind {
    pub const fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Queen,
            1 => Self::Worker,
            2 => Self::Drone,
            other => Self::Unrecognized(other),
        }
    }

    pub const fn code(&self) -> u8 {
        match self {
            Self::Queen => 0,
            Self::Worker => 1,
            Self::Drone => 2,
            Self::Unrecognized(code) => *code,
        }
    }

    /// Narrative label, empty for unrecognized kinds.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Queen => "Queen bee",
            Self::Worker => "worker bee",
            Self::Drone => "drone bee",
            Self::Unrecognized(_) => "",
        }
    }

    pub const fn is_queen(&self) -> bool {
        matches!(self, Self::Queen)
    }
}

impl fmt::Display for BeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single member of the hive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bee {
    pub kind: BeeKind,
    pub health: i32,
    pub miss_chance: u32,
}

impl Bee {
    pub const fn new(kind: BeeKind, health: i32, miss_chance: u32) -> Self {
        Self {
            kind,
            health,
            miss_chance,
        }
    }

    pub const fn from_profile(kind: BeeKind, profile: CombatantProfile) -> Self {
        Self::new(kind, profile.health, profile.miss_chance)
    }

    /// Applies the player's damage for this bee's kind.
    ///
    /// Returns `true` when the bee's health dropped to zero or below.
    pub fn take_damage(&mut self, table: &DamageTable) -> bool {
        let (health, died) = apply_damage(self.health, table.against(self.kind));
        self.health = health;
        died
    }

    pub const fn is_dead(&self) -> bool {
        self.health <= 0
    }
}
