//! Combat mechanics for Sagenweber.
//!
//! Provides the shared damage formula, combat-scoped enemies, the random
//! encounter table, and a per-encounter combat resolver that plays out
//! attack/defend/heal/flee rounds against a single enemy.

pub mod combat;
pub mod damage;
pub mod encounter;
pub mod error;

pub use combat::{
    ActionOption, CombatAction, CombatResolver, Combatant, Enemy, RoundOutcome, RoundRecord,
    RoundResult,
};
pub use damage::calculate_damage;
pub use encounter::EncounterTable;
pub use error::{MechError, MechResult};
