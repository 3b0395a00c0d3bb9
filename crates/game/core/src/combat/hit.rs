//! Miss checks for both sides of a round.
//!
//! Rolls are uniform percentages in `[0, 100]`. The two sides use different
//! boundaries: a player roll equal to the miss chance lands, a bee roll equal
//! to the miss chance misses.

/// Check if the player's attack misses.
///
/// Misses when `roll < miss_chance`.
pub fn player_misses(roll: u32, miss_chance: u32) -> bool {
    roll < miss_chance
}

/// Check if a bee's sting misses.
///
/// Misses when `roll <= miss_chance`.
pub fn hive_misses(roll: u32, miss_chance: u32) -> bool {
    roll <= miss_chance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_roll_lands_for_player() {
        assert!(player_misses(9, 10));
        assert!(!player_misses(10, 10));
        assert!(!player_misses(0, 0));
        assert!(!player_misses(100, 100));
    }

    #[test]
    fn boundary_roll_misses_for_hive() {
        assert!(hive_misses(10, 10));
        assert!(!hive_misses(11, 10));
        assert!(hive_misses(0, 0));
        assert!(hive_misses(100, 100));
    }
}
