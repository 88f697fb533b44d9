//! Random encounters after movement.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::combat::Enemy;

/// Names drawn for regular enemies.
pub const REGULAR_ENEMIES: &[&str] = &["Goblin", "Orc", "Skeleton", "Shadow", "Bandit", "Minion"];

/// Stats of a regular enemy: health, damage, armor.
pub const REGULAR_STATS: (u32, u32, u32) = (30, 8, 2);
/// Stats of the boss: health, damage, armor.
pub const BOSS_STATS: (u32, u32, u32) = (80, 15, 5);

/// Decides when an encounter happens and which enemy appears.
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterTable {
    /// Probability of an encounter after a successful move.
    pub encounter_chance: f64,
    /// The boss can only appear once the turn counter exceeds this.
    pub boss_turn_threshold: u32,
    /// Probability that an eligible encounter is the boss.
    pub boss_chance: f64,
}

impl Default for EncounterTable {
    fn default() -> Self {
        Self {
            encounter_chance: 0.3,
            boss_turn_threshold: 40,
            boss_chance: 0.3,
        }
    }
}

impl EncounterTable {
    /// Create a table with the default odds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the encounter chance.
    pub fn with_encounter_chance(mut self, chance: f64) -> Self {
        self.encounter_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set the boss turn threshold.
    pub fn with_boss_turn_threshold(mut self, turns: u32) -> Self {
        self.boss_turn_threshold = turns;
        self
    }

    /// Set the boss chance.
    pub fn with_boss_chance(mut self, chance: f64) -> Self {
        self.boss_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Roll whether an encounter happens.
    pub fn roll_encounter(&self, rng: &mut StdRng) -> bool {
        rng.random_bool(self.encounter_chance.clamp(0.0, 1.0))
    }

    /// Spawn the enemy for an encounter at `turn`.
    ///
    /// Past the threshold the boss, named after the antagonist, may appear.
    /// Otherwise a regular enemy is drawn from [`REGULAR_ENEMIES`].
    pub fn spawn(&self, turn: u32, antagonist: &str, rng: &mut StdRng) -> Enemy {
        if turn > self.boss_turn_threshold && rng.random_bool(self.boss_chance.clamp(0.0, 1.0)) {
            let (health, damage, armor) = BOSS_STATS;
            tracing::info!(turn, boss = antagonist, "boss encounter");
            return Enemy::boss(antagonist, health, damage, armor);
        }

        let name = REGULAR_ENEMIES.choose(rng).copied().unwrap_or("Minion");
        let (health, damage, armor) = REGULAR_STATS;
        tracing::info!(turn, enemy = name, "regular encounter");
        Enemy::new(name, health, damage, armor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn no_boss_before_threshold() {
        let table = EncounterTable::new().with_boss_chance(1.0);
        let mut rng = StdRng::seed_from_u64(1);
        for turn in 0..=40 {
            let enemy = table.spawn(turn, "Dark Lord", &mut rng);
            assert!(!enemy.is_boss);
            assert_eq!(enemy.health, 30);
            assert_eq!(enemy.damage, 8);
            assert_eq!(enemy.armor, 2);
            assert!(REGULAR_ENEMIES.contains(&enemy.name.as_str()));
        }
    }

    #[test]
    fn boss_after_threshold() {
        let table = EncounterTable::new().with_boss_chance(1.0);
        let mut rng = StdRng::seed_from_u64(2);
        let boss = table.spawn(41, "Dark Lord", &mut rng);
        assert!(boss.is_boss);
        assert_eq!(boss.name, "Dark Lord");
        assert_eq!(boss.health, 80);
        assert_eq!(boss.damage, 15);
        assert_eq!(boss.armor, 5);
    }

    #[test]
    fn boss_chance_zero_never_spawns_boss() {
        let table = EncounterTable::new().with_boss_chance(0.0);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert!(!table.spawn(100, "Rogue AI", &mut rng).is_boss);
        }
    }

    #[test]
    fn encounter_rolls_respect_extremes() {
        let mut rng = StdRng::seed_from_u64(4);
        let never = EncounterTable::new().with_encounter_chance(0.0);
        let always = EncounterTable::new().with_encounter_chance(1.0);
        for _ in 0..50 {
            assert!(!never.roll_encounter(&mut rng));
            assert!(always.roll_encounter(&mut rng));
        }
    }

    #[test]
    fn default_odds_are_roughly_thirty_percent() {
        let table = EncounterTable::new();
        let mut rng = StdRng::seed_from_u64(5);
        let hits = (0..1000).filter(|_| table.roll_encounter(&mut rng)).count();
        assert!((200..400).contains(&hits), "{hits} encounters in 1000 rolls");
    }
}
