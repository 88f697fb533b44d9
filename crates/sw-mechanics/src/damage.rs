//! The damage formula shared by player and enemy attacks.

use rand::Rng;
use rand::rngs::StdRng;

/// Fraction of the mitigated damage used as the variance band.
pub const DAMAGE_VARIANCE: f64 = 0.2;

/// Damage dealt by an attack of `base` strength against `armor`.
///
/// Armor is subtracted first (floored at 1), then a uniform variance of
/// up to ±20% is applied, and the result is floored at 1 again. Attacker
/// and defender roles do not matter.
pub fn calculate_damage(base: u32, armor: u32, rng: &mut StdRng) -> u32 {
    let mitigated = base.saturating_sub(armor).max(1);
    let variance = (f64::from(mitigated) * DAMAGE_VARIANCE) as i64;
    let swing = if variance > 0 {
        rng.random_range(-variance..=variance)
    } else {
        0
    };
    let damage = (i64::from(mitigated) + swing).max(1);
    u32::try_from(damage).unwrap_or(u32::MAX)
}
