//! Narrative text for attack outcomes.

use crate::config::DamageTable;
use crate::state::BeeKind;

/// Message for a player attack that missed.
pub const PLAYER_MISS: &str = "Miss! You just missed the hive, better luck next time!";

/// Leading text of a bee miss message.
pub const HIVE_MISS_PREFIX: &str = "Buzz! That was close! The";

/// Narrative for the player hitting a bee.
///
/// `remaining` is the bee's health after the hit; `table` supplies the damage
/// amount quoted in the survived variants. Unrecognized kinds yield an empty
/// string.
pub fn describe_bee_hit(kind: BeeKind, died: bool, remaining: i32, table: &DamageTable) -> String {
    let damage = table.against(kind);
    match (kind, died) {
        (BeeKind::Queen, true) => "You killed the Queen bee.".to_owned(),
        (BeeKind::Queen, false) => {
            format!("Direct Hit! Queen took {damage} hit points. {remaining} HP left.")
        }
        (BeeKind::Worker, true) => "You killed a worker bee.".to_owned(),
        (BeeKind::Worker, false) => {
            format!("Direct Hit! Worker took {damage} hit points. {remaining} HP left.")
        }
        (BeeKind::Drone, true) => "You killed a drone bee.".to_owned(),
        (BeeKind::Drone, false) => {
            format!("Direct Hit! Drone took {damage} hit points. {remaining} HP left.")
        }
        (BeeKind::Unrecognized(_), _) => String::new(),
    }
}

/// Narrative for a bee of `kind` stinging the player.
///
/// `remaining` is the player's health after the sting. Unrecognized kinds
/// yield an empty string.
pub fn describe_sting(kind: BeeKind, died: bool, remaining: i32) -> String {
    match (kind, died) {
        (BeeKind::Queen, true) => "The Queen bee just killed you!".to_owned(),
        (BeeKind::Queen, false) => {
            format!("Sting! You just got stun by the Queen bee. You have {remaining} HP left.")
        }
        (BeeKind::Worker, true) => "A worker bee just killed you!".to_owned(),
        (BeeKind::Worker, false) => {
            format!("Sting! You just got stun by a worker bee. You have {remaining} HP left.")
        }
        (BeeKind::Drone, true) => "A drone bee just killed you!".to_owned(),
        (BeeKind::Drone, false) => {
            format!("Sting! You just got stun by a drone bee. You have {remaining} HP left.")
        }
        (BeeKind::Unrecognized(_), _) => String::new(),
    }
}

/// Narrative for a bee of `kind` missing the player.
pub fn describe_hive_miss(kind: BeeKind) -> String {
    format!("{HIVE_MISS_PREFIX} {} just missed you!", kind.label())
}
