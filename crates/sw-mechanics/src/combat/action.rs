//! Combat actions and the round log.

use std::fmt;

/// An action the player takes in one round.
///
/// Bonuses and healing amounts come from the caller's equipment and
/// inventory; the resolver never looks at items itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    /// Strike the enemy.
    Attack {
        /// Equipped weapon bonus added to the base attack.
        weapon_bonus: u32,
    },
    /// Brace for the enemy's counter-attack (+5 armor this round).
    Defend,
    /// Restore health.
    Heal {
        /// Hit points restored, clamped to max health.
        amount: u32,
    },
    /// Try to escape (60% chance).
    Flee,
}

impl CombatAction {
    /// Lowercase verb for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Attack { .. } => "attack",
            Self::Defend => "defend",
            Self::Heal { .. } => "heal",
            Self::Flee => "flee",
        }
    }
}

impl fmt::Display for CombatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attack { weapon_bonus: 0 } => write!(f, "Attack"),
            Self::Attack { weapon_bonus } => write!(f, "Attack (+{weapon_bonus})"),
            Self::Defend => write!(f, "Defend"),
            Self::Heal { amount } => write!(f, "Heal ({amount} HP)"),
            Self::Flee => write!(f, "Flee"),
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Both sides are still standing.
    Continue,
    /// The enemy was defeated.
    Victory,
    /// The player was defeated.
    Defeat,
    /// The player escaped.
    Fled,
}

impl RoundOutcome {
    /// Whether the encounter is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Continue)
    }
}

/// The result of resolving one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// 1-based round number.
    pub round: u32,
    /// How the round ended.
    pub outcome: RoundOutcome,
    /// Damage the player dealt.
    pub damage_dealt: u32,
    /// Damage the player took.
    pub damage_taken: u32,
    /// Narration of the round.
    pub log: String,
}

/// An immutable record of a completed, non-terminal round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    /// 1-based round number.
    pub round: u32,
    /// What the player did.
    pub action: CombatAction,
    /// Damage the player dealt.
    pub damage_dealt: u32,
    /// Damage the player took.
    pub damage_taken: u32,
    /// Narration of the round.
    pub log: String,
}

/// One entry in the list of actions offered to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOption {
    /// Command that triggers the action (e.g. "heal health potion").
    pub command: String,
    /// What the action does.
    pub description: String,
}

impl ActionOption {
    /// Create an option.
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}
