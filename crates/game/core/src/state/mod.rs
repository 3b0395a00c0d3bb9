//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the player, the hive,
//! and round bookkeeping. Runtime layers clone this state into event
//! snapshots but mutate it exclusively through the engine.
pub mod types;

pub use types::{Bee, BeeKind, Player};

use crate::config::GameConfig;
use crate::population::build_hive;

/// Canonical snapshot of the game state.
///
/// Cloned by value into every emitted event. A clone never observes later
/// engine progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub player: Player,
    pub hive: Vec<Bee>,
    /// Rounds started, including a round cut short by game over.
    pub round: u32,
    /// Player attacks that landed.
    pub hits: u32,
    /// Bee attacks that landed.
    pub stings: u32,
}

impl GameState {
    /// Creates a state with the given combatants and zeroed counters.
    pub fn new(player: Player, hive: Vec<Bee>) -> Self {
        Self {
            player,
            hive,
            round: 0,
            hits: 0,
            stings: 0,
        }
    }

    /// Creates the standard opening state described by `config`.
    pub fn new_session(config: &GameConfig) -> Self {
        let composition = config.hive;
        Self::new(
            Player::new(config.player),
            build_hive(
                composition.queens,
                composition.workers,
                composition.drones,
                config,
            ),
        )
    }

    /// First queen in the hive, if any is present.
    pub fn queen(&self) -> Option<&Bee> {
        self.hive.iter().find(|bee| bee.kind.is_queen())
    }

    /// Number of bees of `kind` still in the hive.
    pub fn count(&self, kind: BeeKind) -> usize {
        self.hive.iter().filter(|bee| bee.kind == kind).count()
    }
}
