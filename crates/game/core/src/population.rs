//! Hive population factory.
//!
//! Builds bees with kind-specific default stats taken from [`GameConfig`].

use crate::config::GameConfig;
use crate::state::{Bee, BeeKind};

/// Builds `count` bees of `kind` with the kind's default stats.
///
/// `miss_chance` overrides the default miss chance of every bee produced.
/// Returns `None` for an unrecognized kind.
pub fn build_bees(
    kind: BeeKind,
    count: usize,
    miss_chance: Option<u32>,
    config: &GameConfig,
) -> Option<Vec<Bee>> {
    let mut profile = config.profile(kind)?;
    if let Some(miss_chance) = miss_chance {
        profile.miss_chance = miss_chance;
    }

    Some(vec![Bee::from_profile(kind, profile); count])
}

/// Builds a hive of queens, workers and drones, in that order.
pub fn build_hive(queens: usize, workers: usize, drones: usize, config: &GameConfig) -> Vec<Bee> {
    let mut hive = Vec::with_capacity(queens + workers + drones);

    for (kind, count) in [
        (BeeKind::Queen, queens),
        (BeeKind::Worker, workers),
        (BeeKind::Drone, drones),
    ] {
        hive.extend(build_bees(kind, count, None, config).unwrap_or_default());
    }

    hive
}
