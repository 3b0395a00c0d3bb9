//! Damage application.

/// Apply damage to current health.
///
/// Health is signed and is not clamped, so a lethal blow leaves a negative
/// value behind.
///
/// # Returns
///
/// The new health and whether it is now zero or below.
pub fn apply_damage(current_health: i32, damage: i32) -> (i32, bool) {
    let health = current_health.saturating_sub(damage);
    (health, health <= 0)
}
