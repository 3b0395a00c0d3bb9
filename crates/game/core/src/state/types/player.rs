use crate::combat::apply_damage;
use crate::config::{CombatantProfile, DamageTable};

use super::BeeKind;

/// The player character.
///
/// Health is signed and keeps going below zero on a lethal sting so the
/// summary can report the overkill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub health: i32,
    pub miss_chance: u32,
}

impl Player {
    pub const fn new(profile: CombatantProfile) -> Self {
        Self {
            health: profile.health,
            miss_chance: profile.miss_chance,
        }
    }

    /// Standard player with a custom miss chance.
    pub const fn with_miss_chance(miss_chance: u32) -> Self {
        Self {
            health: CombatantProfile::PLAYER.health,
            miss_chance,
        }
    }

    /// Applies a sting from a bee of `attacker` kind.
    ///
    /// Returns `true` when the player's health dropped to zero or below.
    pub fn take_damage(&mut self, attacker: BeeKind, table: &DamageTable) -> bool {
        let (health, died) = apply_damage(self.health, table.against(attacker));
        self.health = health;
        died
    }

    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(CombatantProfile::PLAYER)
    }
}
