use crate::location::LocationId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the world model.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced location ID does not exist in the map.
    #[error("location not found: {0}")]
    LocationNotFound(LocationId),

    /// A location with the same ID was already added.
    #[error("location already exists: {0}")]
    DuplicateLocation(LocationId),

    /// The map has no locations to start from.
    #[error("the map has no locations")]
    EmptyMap,

    /// The current location has no exit with this direction token.
    #[error("You can't go {0} from here.")]
    NoExit(String),

    /// The destination is locked and its unlock condition is not met.
    #[error("You can't go that way. {reason}")]
    Locked {
        /// The locked destination.
        destination: LocationId,
        /// Human-readable reason, naming what is missing.
        reason: String,
    },
}

impl CoreError {
    /// Returns true for conditions a player can reach through normal play.
    ///
    /// Everything else points at a broken map invariant.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoExit(_) | Self::Locked { .. })
    }
}
