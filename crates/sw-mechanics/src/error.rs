//! Error types for the mechanics engine.

/// Errors that can occur during combat.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A round was requested but no encounter is running.
    #[error("No active combat.")]
    NoActiveCombat,

    /// An encounter was started while another was still running.
    #[error("an encounter with {0} is already in progress")]
    EncounterInProgress(String),
}

impl MechError {
    /// Returns true for conditions a player can reach through normal play.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoActiveCombat)
    }
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
