//! Combat-scoped enemies.

use serde::{Deserialize, Serialize};

/// An enemy bound to one encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    /// Display name.
    pub name: String,
    /// Current health; zero means defeated.
    pub health: u32,
    /// Starting health.
    pub max_health: u32,
    /// Base damage of each attack.
    pub damage: u32,
    /// Flat damage mitigation.
    pub armor: u32,
    /// Defeating a boss ends the story.
    pub is_boss: bool,
}

impl Enemy {
    /// Create a regular enemy at full health.
    pub fn new(name: impl Into<String>, health: u32, damage: u32, armor: u32) -> Self {
        Self {
            name: name.into(),
            health,
            max_health: health,
            damage,
            armor,
            is_boss: false,
        }
    }

    /// Create a boss at full health.
    pub fn boss(name: impl Into<String>, health: u32, damage: u32, armor: u32) -> Self {
        Self {
            is_boss: true,
            ..Self::new(name, health, damage, armor)
        }
    }

    /// Whether the enemy has been brought to zero health.
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Subtract damage, saturating at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}
