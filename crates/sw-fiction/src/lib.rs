//! Interactive fiction layer for Sagenweber.
//!
//! Parses "verb [argument]" input, keeps the player's state, and drives the
//! game state machine that ties navigation, items, dialogue and combat
//! together. Each [`GameController`] owns one independent game.

/// Game configuration.
pub mod config;
/// Error types for the fiction layer.
pub mod error;
/// The game controller and its state machine.
pub mod game;
/// Command parsing and name resolution.
pub mod parser;
/// The player character.
pub mod player;

pub use config::GameConfig;
pub use error::{FictionError, FictionResult};
pub use game::{GameController, GameState};
pub use parser::{Command, parse_command};
pub use player::PlayerCharacter;
