//! Game configuration constants and tunable parameters.
//!
//! Every number the rules depend on lives here and is handed to the engine at
//! construction. Nothing reads process-wide state.
use crate::state::BeeKind;

/// Per-kind damage amounts.
///
/// Two independent tables exist: damage dealt *to* a bee of a kind, and
/// damage dealt *by* a bee of a kind to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageTable {
    pub queen: i32,
    pub worker: i32,
    pub drone: i32,
}

impl DamageTable {
    /// Damage the player deals to each kind of bee.
    pub const TO_BEES: Self = Self {
        queen: 10,
        worker: 25,
        drone: 30,
    };

    /// Damage each kind of bee deals to the player.
    pub const TO_PLAYER: Self = Self {
        queen: 10,
        worker: 5,
        drone: 1,
    };

    /// Amount for the given kind. Unrecognized kinds deal and take nothing.
    pub const fn against(&self, kind: BeeKind) -> i32 {
        match kind {
            BeeKind::Queen => self.queen,
            BeeKind::Worker => self.worker,
            BeeKind::Drone => self.drone,
            BeeKind::Unrecognized(_) => 0,
        }
    }
}

/// Starting health and miss chance of a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantProfile {
    pub health: i32,
    /// Miss chance as a percentage in `[0, 100]`.
    pub miss_chance: u32,
}

impl CombatantProfile {
    pub const PLAYER: Self = Self::new(100, 10);
    pub const QUEEN: Self = Self::new(100, 10);
    pub const WORKER: Self = Self::new(75, 15);
    pub const DRONE: Self = Self::new(60, 20);

    pub const fn new(health: i32, miss_chance: u32) -> Self {
        Self {
            health,
            miss_chance,
        }
    }
}

/// Number of bees of each kind in a freshly built hive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HiveComposition {
    pub queens: usize,
    pub workers: usize,
    pub drones: usize,
}

impl HiveComposition {
    pub const STANDARD: Self = Self {
        queens: 1,
        workers: 5,
        drones: 25,
    };

    pub const fn total(&self) -> usize {
        self.queens + self.workers + self.drones
    }
}

/// Complete rule set for one game session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub damage_to_bees: DamageTable,
    pub damage_to_player: DamageTable,
    pub player: CombatantProfile,
    pub queen: CombatantProfile,
    pub worker: CombatantProfile,
    pub drone: CombatantProfile,
    pub hive: HiveComposition,
}

impl GameConfig {
    pub const fn new() -> Self {
        Self {
            damage_to_bees: DamageTable::TO_BEES,
            damage_to_player: DamageTable::TO_PLAYER,
            player: CombatantProfile::PLAYER,
            queen: CombatantProfile::QUEEN,
            worker: CombatantProfile::WORKER,
            drone: CombatantProfile::DRONE,
            hive: HiveComposition::STANDARD,
        }
    }

    /// Default stats for a bee kind, `None` when the kind is unrecognized.
    pub const fn profile(&self, kind: BeeKind) -> Option<CombatantProfile> {
        match kind {
            BeeKind::Queen => Some(self.queen),
            BeeKind::Worker => Some(self.worker),
            BeeKind::Drone => Some(self.drone),
            BeeKind::Unrecognized(_) => None,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_tables_are_asymmetric() {
        let config = GameConfig::default();

        assert_eq!(config.damage_to_bees.against(BeeKind::Queen), 10);
        assert_eq!(config.damage_to_bees.against(BeeKind::Worker), 25);
        assert_eq!(config.damage_to_bees.against(BeeKind::Drone), 30);

        assert_eq!(config.damage_to_player.against(BeeKind::Queen), 10);
        assert_eq!(config.damage_to_player.against(BeeKind::Worker), 5);
        assert_eq!(config.damage_to_player.against(BeeKind::Drone), 1);
    }

    #[test]
    fn unrecognized_kind_has_no_profile_or_damage() {
        let config = GameConfig::default();
        let unknown = BeeKind::Unrecognized(7);

        assert_eq!(config.profile(unknown), None);
        assert_eq!(config.damage_to_bees.against(unknown), 0);
        assert_eq!(config.damage_to_player.against(unknown), 0);
    }

    #[test]
    fn standard_hive_has_thirty_one_bees() {
        assert_eq!(HiveComposition::STANDARD.total(), 31);
    }
}
