//! The world generator.
//!
//! Generation is a single pass:
//!
//! 1. Pick theme, antagonist and reward from the genre's [`StoryTemplate`].
//! 2. Name `location_count` locations in narrative order.
//! 3. Wire a ring of `north` connections, the last wrapping to the first.
//! 4. Lock the climax behind the penultimate story step.
//! 5. Scatter items, NPCs and fixtures over every location but the start.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use sw_core::{
    Connection, ConnectionKind, CoreResult, Fixture, Genre, Item, Location, LocationId, Lock,
    Map, Story, StoryStep,
};

use crate::catalog::{ItemCatalog, NpcCatalog};
use crate::templates::{StoryTemplate, theme_title};

/// Knobs for world generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    /// Number of locations (at least 2).
    pub location_count: usize,
    /// Chance of a weapon on each non-start location.
    pub weapon_chance: f64,
    /// Chance of a piece of armor on each non-start location.
    pub armor_chance: f64,
    /// Chance of a healing item on each non-start location.
    pub healing_chance: f64,
    /// Chance of an NPC on each non-start location.
    pub npc_chance: f64,
    /// Chance of an inspectable fixture on each non-start location.
    pub fixture_chance: f64,
    /// Chance that a placed fixture hides a healing item.
    pub hidden_item_chance: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            location_count: 5,
            weapon_chance: 0.5,
            armor_chance: 0.4,
            healing_chance: 0.6,
            npc_chance: 0.3,
            fixture_chance: 0.5,
            hidden_item_chance: 0.5,
        }
    }
}

impl GenerationConfig {
    /// Smallest world that still has a start and a climax.
    pub const MIN_LOCATIONS: usize = 2;

    /// Set the number of locations (raised to at least 2).
    pub fn with_location_count(mut self, count: usize) -> Self {
        self.location_count = count.max(Self::MIN_LOCATIONS);
        self
    }

    /// Set the weapon, armor and healing chances (each clamped to 0-1).
    pub fn with_item_chances(mut self, weapon: f64, armor: f64, healing: f64) -> Self {
        self.weapon_chance = weapon.clamp(0.0, 1.0);
        self.armor_chance = armor.clamp(0.0, 1.0);
        self.healing_chance = healing.clamp(0.0, 1.0);
        self
    }

    /// Set the NPC chance (clamped to 0-1).
    pub fn with_npc_chance(mut self, chance: f64) -> Self {
        self.npc_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set the fixture and hidden-item chances (clamped to 0-1).
    pub fn with_fixture_chances(mut self, fixture: f64, hidden_item: f64) -> Self {
        self.fixture_chance = fixture.clamp(0.0, 1.0);
        self.hidden_item_chance = hidden_item.clamp(0.0, 1.0);
        self
    }

    /// A world with nothing scattered on it.
    pub fn empty(self) -> Self {
        self.with_item_chances(0.0, 0.0, 0.0)
            .with_npc_chance(0.0)
            .with_fixture_chances(0.0, 0.0)
    }
}

/// Everything a new game starts from.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedWorld {
    /// The story, with the start step already complete.
    pub story: Story,
    /// The location graph, positioned at the start.
    pub map: Map,
    /// Items for the player's initial inventory.
    pub starting_items: Vec<Item>,
}

/// Builds stories and maps from a genre and keywords.
#[derive(Debug, Clone, Default)]
pub struct WorldGenerator {
    config: GenerationConfig,
}

impl WorldGenerator {
    /// Create a generator.
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// The generator's configuration.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate from a genre name. Unknown genres fall back to fantasy.
    pub fn generate(
        &self,
        genre: &str,
        keywords: &[String],
        rng: &mut StdRng,
    ) -> CoreResult<GeneratedWorld> {
        let genre = Genre::parse(genre).unwrap_or_else(|| {
            tracing::warn!(requested = genre, "unknown genre, using fantasy");
            Genre::default()
        });
        self.generate_for(genre, keywords, rng)
    }

    /// Generate a world for a known genre.
    pub fn generate_for(
        &self,
        genre: Genre,
        keywords: &[String],
        rng: &mut StdRng,
    ) -> CoreResult<GeneratedWorld> {
        let template = StoryTemplate::for_genre(genre);
        let theme = template.themes.choose(rng).copied().unwrap_or("quest");
        let antagonist = template
            .antagonists
            .choose(rng)
            .copied()
            .unwrap_or("Enemy");
        let reward = template.rewards.choose(rng).copied().unwrap_or("Victory");

        let count = self.config.location_count.max(GenerationConfig::MIN_LOCATIONS);
        let names: Vec<String> = (0..count).map(|i| template.location_name(i)).collect();
        let steps = story_steps(&names, antagonist, reward);

        let mut locations: Vec<Location> = names
            .iter()
            .enumerate()
            .map(|(i, name)| Location::new(LocationId::indexed(i), name.clone()))
            .collect();

        let penultimate = steps[count - 2].id.clone();
        if let Some(climax) = locations.last_mut() {
            climax.lock = Some(Lock::RequiresStep(penultimate));
        }

        let items = ItemCatalog::new(genre);
        let npcs = NpcCatalog::new(genre);
        for location in locations.iter_mut().skip(1) {
            self.scatter(location, template, &items, &npcs, rng);
        }

        let mut map = Map::new(locations)?;
        for i in 0..count {
            let next = (i + 1) % count;
            map.connect(
                &LocationId::indexed(i),
                Connection::new(
                    "north",
                    LocationId::indexed(next),
                    ConnectionKind::Normal.narrate("north", &names[next]),
                ),
            )?;
        }

        let title = format!("The {} of {}", theme_title(theme), antagonist);
        let mut story = Story::new(
            title,
            genre,
            theme,
            antagonist,
            reward,
            names,
            keywords.to_vec(),
            steps,
        );
        story.complete_step_at(0);

        tracing::info!(
            genre = %genre,
            title = %story.title,
            locations = count,
            "world generated"
        );

        Ok(GeneratedWorld {
            story,
            map,
            starting_items: items.starting_items(),
        })
    }

    fn scatter(
        &self,
        location: &mut Location,
        template: &StoryTemplate,
        items: &ItemCatalog,
        npcs: &NpcCatalog,
        rng: &mut StdRng,
    ) {
        let cfg = &self.config;
        if roll(rng, cfg.weapon_chance) {
            if let Some(item) = items.random_weapon(rng) {
                location.put_item(item);
            }
        }
        if roll(rng, cfg.armor_chance) {
            if let Some(item) = items.random_armor(rng) {
                location.put_item(item);
            }
        }
        if roll(rng, cfg.healing_chance) {
            if let Some(item) = items.random_healing(rng) {
                location.put_item(item);
            }
        }
        if roll(rng, cfg.npc_chance) {
            if let Some(npc) = npcs.random(rng) {
                location.npcs.push(npc);
            }
        }
        if roll(rng, cfg.fixture_chance) {
            if let Some(&(name, description)) = template.fixtures.choose(rng) {
                let mut fixture = Fixture::new(name, description);
                if roll(rng, cfg.hidden_item_chance) {
                    fixture.hidden_item = items.random_healing(rng);
                }
                location.fixtures.push(fixture);
            }
        }
    }
}

fn roll(rng: &mut StdRng, chance: f64) -> bool {
    chance > 0.0 && rng.random_bool(chance.min(1.0))
}

fn story_steps(names: &[String], antagonist: &str, reward: &str) -> Vec<StoryStep> {
    let last = names.len().saturating_sub(1);
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let (title, description) = if i == 0 {
                (
                    "The Beginning".to_string(),
                    format!("Rumors of the {antagonist} have reached {name}. Prepare for the journey."),
                )
            } else if i == last {
                (
                    "Face Off".to_string(),
                    format!("Reach {name}, confront the {antagonist} and claim the {reward}."),
                )
            } else {
                (
                    format!("Investigate {name}"),
                    format!("Search {name} for clues and allies against the {antagonist}."),
                )
            };
            StoryStep {
                id: format!("step_{i}"),
                title,
                description,
                location: i,
            }
        })
        .collect()
}
