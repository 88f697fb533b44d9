//! Error types for the fiction layer.
//!
//! Most variants describe things a player can do wrong; their `Display`
//! text is the message shown to the player. Only wrapped core or mechanics
//! errors that are not recoverable point at a broken game.

use sw_core::CoreError;
use sw_mechanics::MechError;
use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while processing a command.
#[derive(Debug, Error)]
pub enum FictionError {
    /// Blank input.
    #[error("Please enter a command.")]
    EmptyInput,

    /// The verb is not known.
    #[error("Unknown command. Type 'help' for commands.{}", did_you_mean(.suggestion))]
    UnknownCommand {
        /// The verb as typed.
        verb: String,
        /// A similar known verb.
        suggestion: Option<&'static str>,
    },

    /// The verb needs an argument that was not given. Holds the prompt.
    #[error("{0}")]
    MissingArgument(&'static str),

    /// The named item is not carried.
    #[error("You don't have a {0}.")]
    ItemNotInInventory(String),

    /// The named item is not on the ground here.
    #[error("There's no {0} here.")]
    ItemNotHere(String),

    /// Nothing lies on the ground here.
    #[error("There's nothing to take here.")]
    NothingToTake,

    /// The named NPC is not here.
    #[error("There's no {0} here.")]
    NpcNotHere(String),

    /// The NPC refuses to talk.
    #[error("The {0} is hostile and won't talk to you.")]
    Hostile(String),

    /// `say` without a conversation partner present.
    #[error("You're not talking to anyone.")]
    NotTalking,

    /// Only weapons and armor can be equipped.
    #[error("You can't equip the {0}.")]
    NotEquippable(String),

    /// The item has no use outside combat.
    #[error("You can't use the {0} right now.")]
    NotUsable(String),

    /// `unequip` named something not equipped.
    #[error("You don't have that equipped.")]
    NothingEquipped,

    /// The inventory cap is reached.
    #[error("Your inventory is full ({0} items).")]
    InventoryFull(usize),

    /// `heal` without any healing item.
    #[error("You have no healing items.")]
    NoHealingItems,

    /// A dialogue choice that does not exist.
    #[error("Invalid choice.")]
    InvalidChoice,

    /// A combat verb outside combat.
    #[error("You're not in combat.")]
    NotInCombat,

    /// A non-combat verb during combat.
    #[error("You can't do that in the middle of a fight!")]
    BusyInCombat,

    /// A command before the world was generated.
    #[error("The adventure has not begun yet.")]
    GameNotStarted,

    /// A command after victory or defeat.
    #[error("The adventure is over.")]
    GameOver,

    /// Movement blocked by a lock. Holds the reason.
    #[error("You can't go that way. {0}")]
    Locked(String),

    /// World model error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Combat error.
    #[error(transparent)]
    Mechanics(#[from] MechError),
}

impl FictionError {
    /// Returns true when the error is a normal game condition, shown to the
    /// player as a message. False means an invariant is broken.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Core(err) => err.is_recoverable(),
            Self::Mechanics(err) => err.is_recoverable(),
            _ => true,
        }
    }
}

fn did_you_mean(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(verb) => format!(" Did you mean '{verb}'?"),
        None => String::new(),
    }
}
