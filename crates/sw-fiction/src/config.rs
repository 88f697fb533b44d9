//! Configuration for a game.

use sw_mechanics::EncounterTable;
use sw_worldgen::GenerationConfig;

/// Configuration for a game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// The player character's name.
    pub player_name: String,
    /// Genre name; unknown names fall back to fantasy.
    pub genre: String,
    /// Seed keywords for the story.
    pub keywords: Vec<String>,
    /// Whether moving can trigger random encounters.
    pub encounters_enabled: bool,
    /// Number of generated locations (at least 2).
    pub location_count: usize,
    /// Chance of an encounter after a successful move.
    pub encounter_chance: f64,
    /// The boss can only appear once the turn counter exceeds this.
    pub boss_turn_threshold: u32,
    /// Chance that an eligible encounter is the boss.
    pub boss_chance: f64,
    /// Maximum number of carried items, if any.
    pub inventory_capacity: Option<usize>,
    /// RNG seed for reproducible games. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: "Adventurer".to_string(),
            genre: "fantasy".to_string(),
            keywords: Vec::new(),
            encounters_enabled: true,
            location_count: 5,
            encounter_chance: 0.3,
            boss_turn_threshold: 40,
            boss_chance: 0.3,
            inventory_capacity: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the player name. Blank names keep the default.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.player_name = name.trim().to_string();
        }
        self
    }

    /// Set the genre.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Set the story keywords, dropping blanks.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords
            .into_iter()
            .map(Into::into)
            .map(|k: String| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        self
    }

    /// Enable or disable random encounters.
    pub fn with_encounters(mut self, enabled: bool) -> Self {
        self.encounters_enabled = enabled;
        self
    }

    /// Set the number of locations (raised to at least 2).
    pub fn with_location_count(mut self, count: usize) -> Self {
        self.location_count = count.max(GenerationConfig::MIN_LOCATIONS);
        self
    }

    /// Set the encounter chance (clamped to 0-1).
    pub fn with_encounter_chance(mut self, chance: f64) -> Self {
        self.encounter_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set when and how often the boss appears.
    pub fn with_boss(mut self, turn_threshold: u32, chance: f64) -> Self {
        self.boss_turn_threshold = turn_threshold;
        self.boss_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Cap the inventory. `None` removes the cap.
    pub fn with_inventory_capacity(mut self, capacity: Option<usize>) -> Self {
        self.inventory_capacity = capacity;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The world generation settings derived from this config.
    pub fn generation(&self) -> GenerationConfig {
        GenerationConfig::default().with_location_count(self.location_count)
    }

    /// The encounter table derived from this config.
    pub fn encounter_table(&self) -> EncounterTable {
        EncounterTable::new()
            .with_encounter_chance(self.encounter_chance)
            .with_boss_turn_threshold(self.boss_turn_threshold)
            .with_boss_chance(self.boss_chance)
    }
}
