//! The game controller.
//!
//! [`GameController`] owns one game: the player, the generated world, the
//! active combat (if any), the RNG and the turn counter. Every call to
//! [`GameController::process_command`] runs to completion and leaves the
//! state machine in a well-defined state:
//!
//! ```text
//! STARTING --initialize--> EXPLORING <--flee / regular victory-- IN_COMBAT
//!                              |                                   |  |
//!                              +--encounter roll after a move----->+  |
//!                                                  boss victory: VICTORY
//!                                                  health at zero: DEFEAT
//! ```

mod combat;
mod explore;
mod items;

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use sw_core::{Map, Story, UnlockConditions};
use sw_mechanics::{CombatResolver, EncounterTable};
use sw_worldgen::WorldGenerator;

use crate::config::GameConfig;
use crate::error::{FictionError, FictionResult};
use crate::parser::{Command, parse_command};
use crate::player::PlayerCharacter;

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Created but not initialized.
    Starting,
    /// Moving around, no fight going on.
    Exploring,
    /// Bound to an active combat encounter.
    InCombat,
    /// The boss is defeated. Terminal.
    Victory,
    /// The player died. Terminal.
    Defeat,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Starting => "STARTING",
            Self::Exploring => "EXPLORING",
            Self::InCombat => "IN_COMBAT",
            Self::Victory => "VICTORY",
            Self::Defeat => "DEFEAT",
        };
        f.write_str(name)
    }
}

/// The generated part of a game.
#[derive(Debug, Clone)]
struct World {
    map: Map,
    story: Story,
}

/// Unlock checks against the player's inventory and story progress.
struct Progress<'a> {
    player: &'a PlayerCharacter,
    story: &'a Story,
}

impl UnlockConditions for Progress<'_> {
    fn has_item(&self, name: &str) -> bool {
        self.player.has_item(name)
    }

    fn has_completed_step(&self, step_id: &str) -> bool {
        self.story.is_step_complete(step_id)
    }

    fn step_title(&self, step_id: &str) -> Option<String> {
        self.story
            .steps
            .iter()
            .find(|step| step.id == step_id)
            .map(|step| step.title.clone())
    }
}

/// Drives one game from setup to victory or defeat.
#[derive(Debug)]
pub struct GameController {
    config: GameConfig,
    state: GameState,
    player: PlayerCharacter,
    world: Option<World>,
    combat: Option<CombatResolver>,
    encounters: EncounterTable,
    encounters_enabled: bool,
    rng: StdRng,
    turn_count: u32,
    conversation: Option<String>,
}

impl GameController {
    /// Create a controller in the `Starting` state.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let player =
            PlayerCharacter::new(config.player_name.clone()).with_capacity(config.inventory_capacity);
        Self {
            encounters: config.encounter_table(),
            encounters_enabled: config.encounters_enabled,
            config,
            state: GameState::Starting,
            player,
            world: None,
            combat: None,
            rng,
            turn_count: 0,
            conversation: None,
        }
    }

    /// Create and initialize a game from its config. Returns the controller
    /// and the opening text.
    pub fn start(config: GameConfig) -> FictionResult<(Self, String)> {
        let genre = config.genre.clone();
        let keywords = config.keywords.clone();
        let encounters = config.encounters_enabled;
        let mut game = Self::new(config);
        let intro = game.initialize(&genre, &keywords, encounters)?;
        Ok((game, intro))
    }

    /// Generate a world and begin exploring. Any previous game is discarded.
    ///
    /// Unknown genres fall back to fantasy.
    pub fn initialize(
        &mut self,
        genre: &str,
        keywords: &[String],
        encounters_enabled: bool,
    ) -> FictionResult<String> {
        let generator = WorldGenerator::new(self.config.generation());
        let generated = generator.generate(genre, keywords, &mut self.rng)?;

        self.player = PlayerCharacter::new(self.config.player_name.clone())
            .with_capacity(self.config.inventory_capacity);
        self.player.equip_kit(generated.starting_items);
        self.encounters_enabled = encounters_enabled;
        self.combat = None;
        self.conversation = None;
        self.turn_count = 0;

        let world = World {
            map: generated.map,
            story: generated.story,
        };
        let intro = opening_text(&self.player, &world);
        self.world = Some(world);
        self.set_state(GameState::Exploring);
        Ok(intro)
    }

    /// Process one line of input and return the response.
    ///
    /// Every normal game condition, including invalid commands, comes back
    /// as `Ok` with a message. `Err` means the game itself is broken.
    pub fn process_command(&mut self, input: &str) -> FictionResult<String> {
        self.turn_count += 1;
        match self.dispatch(input) {
            Ok(text) => Ok(text),
            Err(err) if err.is_recoverable() => {
                tracing::debug!(turn = self.turn_count, error = %err, "command rejected");
                Ok(err.to_string())
            }
            Err(err) => {
                tracing::error!(turn = self.turn_count, error = %err, "command failed");
                Err(err)
            }
        }
    }

    /// True while exploring or fighting.
    pub fn is_running(&self) -> bool {
        matches!(self.state, GameState::Exploring | GameState::InCombat)
    }

    /// The current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The player character.
    pub fn player(&self) -> &PlayerCharacter {
        &self.player
    }

    /// The map, once initialized.
    pub fn map(&self) -> Option<&Map> {
        self.world.as_ref().map(|w| &w.map)
    }

    /// The story, once initialized.
    pub fn story(&self) -> Option<&Story> {
        self.world.as_ref().map(|w| &w.story)
    }

    /// The active combat, if any.
    pub fn combat(&self) -> Option<&CombatResolver> {
        self.combat.as_ref()
    }

    /// Commands processed so far, including rejected ones.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Whether moving can trigger encounters.
    pub fn encounters_enabled(&self) -> bool {
        self.encounters_enabled
    }

    fn dispatch(&mut self, input: &str) -> FictionResult<String> {
        match self.state {
            GameState::Starting => return Err(FictionError::GameNotStarted),
            GameState::Victory | GameState::Defeat => return Err(FictionError::GameOver),
            GameState::Exploring | GameState::InCombat => {}
        }

        let command = parse_command(input)?;
        let in_combat = self.state == GameState::InCombat;
        if in_combat && !command.allowed_in_combat() {
            return Err(FictionError::BusyInCombat);
        }
        if !in_combat && command.is_combat() {
            return Err(FictionError::NotInCombat);
        }

        tracing::debug!(turn = self.turn_count, verb = command.verb(), "dispatch");
        self.execute(command)
    }

    fn execute(&mut self, command: Command) -> FictionResult<String> {
        match command {
            Command::Look => self.do_look(),
            Command::Go { direction } => self.do_go(&direction),
            Command::Take { item } => self.do_take(&item),
            Command::Drop { item } => self.do_drop(&item),
            Command::Inventory => Ok(self.do_inventory()),
            Command::Use { item } => self.do_use(&item),
            Command::Equip { item } => self.do_equip(&item),
            Command::Unequip { item } => self.do_unequip(&item),
            Command::Talk { npc } => self.do_talk(&npc),
            Command::Say { choice } => self.do_say(&choice),
            Command::Inspect { target } => self.do_inspect(&target),
            Command::Status => self.do_status(),
            Command::Story => self.do_story(),
            Command::Attack => self.do_attack(),
            Command::Defend => self.do_defend(),
            Command::Heal { item } => self.do_heal(item.as_deref()),
            Command::Flee => self.do_flee(),
            Command::Help => Ok(help_text()),
        }
    }

    fn world(&self) -> FictionResult<&World> {
        self.world.as_ref().ok_or(FictionError::GameNotStarted)
    }

    fn set_state(&mut self, next: GameState) {
        if self.state != next {
            tracing::info!(from = %self.state, to = %next, turn = self.turn_count, "state change");
            self.state = next;
        }
    }
}

fn opening_text(player: &PlayerCharacter, world: &World) -> String {
    let story = &world.story;
    let mut text = format!("{}\n{}.\n\n", story.title, story.goal);
    text.push_str(&format!("You are {}.", player.name));
    if let Some(first) = story.steps.first() {
        text.push(' ');
        text.push_str(&first.description);
    }
    text.push_str("\n\n");
    text.push_str(&world.map.current().descriptions.first_visit);
    text.push_str("\nType 'help' for a list of commands.");
    text
}

fn help_text() -> String {
    let lines = [
        ("look", "Look around"),
        ("go <direction>", "Move (north/south/east/west/up/down)"),
        ("take <item>", "Take an item"),
        ("drop <item>", "Drop an item"),
        ("inventory", "Show inventory"),
        ("equip <item>", "Equip a weapon or armor"),
        ("unequip <item>", "Remove equipment"),
        ("use <item>", "Use an item"),
        ("talk <npc>", "Talk to someone"),
        ("say <number>", "Answer in a conversation"),
        ("inspect <object>", "Inspect something"),
        ("status", "Show status"),
        ("story", "Show story progress"),
        ("attack", "Attack in combat"),
        ("defend", "Defend in combat"),
        ("heal [item]", "Heal in combat"),
        ("flee", "Try to escape"),
        ("help", "This message"),
    ];
    let mut text = String::from("Available commands:");
    for (usage, what) in lines {
        text.push_str(&format!("\n  {usage} - {what}"));
    }
    text
}

#[cfg(test)]
mod tests;
