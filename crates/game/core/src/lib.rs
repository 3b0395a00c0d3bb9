//! Game rules and data types for the hive combat simulator.
//!
//! `game-core` defines the canonical rules (combatants, damage, hive
//! population, phase resolution) and exposes pure APIs reused by the runtime
//! and the clients. All state mutation flows through [`engine::GameEngine`],
//! and supporting crates depend on the types re-exported here.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod population;
pub mod state;

pub use combat::{describe_bee_hit, describe_sting, hive_misses, player_misses};
pub use config::{CombatantProfile, DamageTable, GameConfig, HiveComposition};
pub use engine::{EngineError, EventKind, GameEngine, Phase, PhaseOutcome};
pub use env::{RngOracle, ScriptedRng};
pub use error::{ErrorSeverity, GameError};
pub use population::{build_bees, build_hive};
pub use state::{Bee, BeeKind, GameState, Player};
