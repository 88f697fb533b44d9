//! Procedural world generation for Sagenweber.
//!
//! Turns a genre and a handful of keywords into a [`sw_core::Story`] and a
//! ring-shaped [`sw_core::Map`], with items, NPCs and fixtures scattered
//! across it. All tables are static; all randomness comes from the caller.

/// Item and NPC catalogs per genre.
pub mod catalog;
/// Genre endings shown after the boss falls.
pub mod ending;
pub mod generator;
/// Story templates and fixtures per genre.
pub mod templates;

/// Re-export catalog types.
pub use catalog::{ItemCatalog, NpcCatalog};
/// Re-export ending lookup.
pub use ending::ending;
/// Re-export generator types.
pub use generator::{GeneratedWorld, GenerationConfig, WorldGenerator};
/// Re-export template types.
pub use templates::StoryTemplate;
