//! Combat resolution system.
//!
//! This module provides pure functions for resolving a single attack.
//! All combat logic is side-effect free; randomness arrives as plain rolls.
//!
//! # Core Functions
//!
//! - `apply_damage`: health reduction and death detection
//! - `player_misses` / `hive_misses`: miss checks against a percentage roll
//! - `describe_bee_hit` / `describe_sting`: narrative for an attack outcome

pub mod damage;
pub mod hit;
pub mod message;

pub use damage::apply_damage;
pub use hit::{hive_misses, player_misses};
pub use message::{
    HIVE_MISS_PREFIX, PLAYER_MISS, describe_bee_hit, describe_hive_miss, describe_sting,
};
