//! Core types for Sagenweber: items, locations, NPCs, stories, and the
//! navigation graph that ties locations together.
//!
//! Everything here is plain data plus the rules that keep it consistent.
//! Randomness, combat and command handling live in the crates built on top.

/// Error types used throughout the crate.
pub mod error;
/// Narrative genres and their parsing.
pub mod genre;
/// Items, item kinds, and their stat invariants.
pub mod item;
/// Locations, connections, locks, and inspectable fixtures.
pub mod location;
/// The navigation graph that owns all locations.
pub mod map;
/// Non-player characters and their dialogue.
pub mod npc;
/// Stories, story steps, and the progress marker.
pub mod story;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export genre type.
pub use genre::Genre;
/// Re-export item types.
pub use item::{Item, ItemCategory, ItemKind};
/// Re-export location types.
pub use location::{
    Connection, ConnectionKind, Fixture, Location, LocationDescriptions, LocationId, Lock,
};
/// Re-export navigation types.
pub use map::{Arrival, Map, UnlockConditions};
/// Re-export NPC types.
pub use npc::{DialogueOption, Npc, NpcRole};
/// Re-export story types.
pub use story::{Story, StoryStep};
