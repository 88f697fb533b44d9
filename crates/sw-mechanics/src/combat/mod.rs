//! Per-encounter combat resolution.
//!
//! A [`CombatResolver`] is bound to one [`Enemy`] at a time. Each call to
//! [`CombatResolver::resolve_round`] plays the player's action, then the
//! enemy's counter-attack, and reports how the round ended. Completed
//! non-terminal rounds are appended to an append-only history.

pub mod action;
pub mod enemy;

pub use action::{ActionOption, CombatAction, RoundOutcome, RoundRecord, RoundResult};
pub use enemy::Enemy;

use rand::Rng;
use rand::rngs::StdRng;
use sw_core::{Item, ItemCategory};

use crate::damage::calculate_damage;
use crate::error::{MechError, MechResult};

/// Base strength of a player attack before the weapon bonus.
pub const BASE_ATTACK: u32 = 10;
/// Temporary armor granted by defending, for one counter-attack.
pub const DEFEND_BONUS: u32 = 5;
/// Probability that fleeing succeeds.
pub const FLEE_CHANCE: f64 = 0.6;

/// The player's side of a fight.
pub trait Combatant {
    /// Current health.
    fn health(&self) -> u32;
    /// Maximum health.
    fn max_health(&self) -> u32;
    /// Armor from equipment.
    fn armor(&self) -> u32;
    /// Lose health, saturating at zero.
    fn take_damage(&mut self, amount: u32);
    /// Gain health, clamped to max. Returns the amount actually restored.
    fn restore_health(&mut self, amount: u32) -> u32;
}

/// Plays out rounds against a single enemy.
#[derive(Debug, Clone, Default)]
pub struct CombatResolver {
    enemy: Option<Enemy>,
    active: bool,
    round: u32,
    history: Vec<RoundRecord>,
}

impl CombatResolver {
    /// Create an inactive resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver already fighting `enemy`.
    pub fn engage(enemy: Enemy) -> Self {
        Self {
            enemy: Some(enemy),
            active: true,
            round: 0,
            history: Vec::new(),
        }
    }

    /// Begin an encounter. Fails if one is still running.
    pub fn start_encounter(&mut self, enemy: Enemy) -> MechResult<()> {
        if self.active {
            let name = self
                .enemy
                .as_ref()
                .map(|e| e.name.clone())
                .unwrap_or_default();
            return Err(MechError::EncounterInProgress(name));
        }
        tracing::debug!(enemy = %enemy.name, boss = enemy.is_boss, "encounter started");
        *self = Self::engage(enemy);
        Ok(())
    }

    /// Whether an encounter is running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The enemy of the current (or just finished) encounter.
    pub fn enemy(&self) -> Option<&Enemy> {
        self.enemy.as_ref()
    }

    /// Records of every completed non-terminal round.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Number of rounds resolved so far.
    pub fn rounds_played(&self) -> u32 {
        self.round
    }

    /// Resolve one round: the player's action, then the enemy's counter-attack.
    pub fn resolve_round(
        &mut self,
        action: CombatAction,
        player: &mut impl Combatant,
        rng: &mut StdRng,
    ) -> MechResult<RoundResult> {
        if !self.active {
            return Err(MechError::NoActiveCombat);
        }
        let Some(enemy) = self.enemy.as_mut() else {
            return Err(MechError::NoActiveCombat);
        };

        self.round += 1;
        let round = self.round;
        let mut log = format!("Round {round}:\n");
        let mut damage_dealt = 0;
        let mut damage_taken = 0;
        let mut temporary_armor = 0;

        match action {
            CombatAction::Attack { weapon_bonus } => {
                damage_dealt = calculate_damage(BASE_ATTACK + weapon_bonus, enemy.armor, rng);
                enemy.take_damage(damage_dealt);
                log.push_str(&format!("  You attack! Dealing {damage_dealt} damage.\n"));
            }
            CombatAction::Defend => {
                temporary_armor = DEFEND_BONUS;
                log.push_str(&format!(
                    "  You brace for impact! (+{DEFEND_BONUS} armor this round)\n"
                ));
            }
            CombatAction::Heal { amount } => {
                let restored = player.restore_health(amount);
                log.push_str(&format!("  You use a healing item! Restored {restored} HP.\n"));
            }
            CombatAction::Flee => {
                if rng.random_bool(FLEE_CHANCE) {
                    log.push_str("  You manage to escape!\n");
                    self.active = false;
                    tracing::debug!(round, "player fled");
                    return Ok(RoundResult {
                        round,
                        outcome: RoundOutcome::Fled,
                        damage_dealt,
                        damage_taken,
                        log,
                    });
                }
                log.push_str("  You can't escape!\n");
            }
        }

        if !enemy.is_defeated() {
            damage_taken = calculate_damage(enemy.damage, player.armor() + temporary_armor, rng);
            player.take_damage(damage_taken);
            log.push_str(&format!(
                "  {} attacks! Dealing {damage_taken} damage.\n",
                enemy.name
            ));
        }

        let outcome = if enemy.is_defeated() {
            log.push_str(&format!("\nVICTORY! You defeated the {}!", enemy.name));
            RoundOutcome::Victory
        } else if player.health() == 0 {
            log.push_str("\nDEFEAT! You were defeated.");
            RoundOutcome::Defeat
        } else {
            log.push_str(&format!(
                "\nYour Health: {}/{} | {} Health: {}/{}",
                player.health(),
                player.max_health(),
                enemy.name,
                enemy.health,
                enemy.max_health
            ));
            RoundOutcome::Continue
        };

        tracing::debug!(
            round,
            action = action.name(),
            damage_dealt,
            damage_taken,
            ?outcome,
            "combat round resolved"
        );

        if outcome.is_terminal() {
            self.active = false;
        } else {
            self.history.push(RoundRecord {
                round,
                action,
                damage_dealt,
                damage_taken,
                log: log.clone(),
            });
        }

        Ok(RoundResult {
            round,
            outcome,
            damage_dealt,
            damage_taken,
            log,
        })
    }

    /// Actions open to the player: attack, defend and flee always, plus one
    /// heal option per distinct healing item carried.
    pub fn available_actions(&self, inventory: &[Item]) -> Vec<ActionOption> {
        let mut actions = vec![
            ActionOption::new("attack", "Attack the enemy"),
            ActionOption::new("defend", "Defend to reduce damage this round"),
            ActionOption::new("flee", "Try to escape from combat"),
        ];

        let mut seen: Vec<String> = Vec::new();
        for item in inventory
            .iter()
            .filter(|item| item.category() == ItemCategory::Healing)
        {
            let key = item.name.to_lowercase();
            if seen.contains(&key) {
                continue;
            }
            actions.push(ActionOption::new(
                format!("heal {key}"),
                format!("Use {} ({} HP)", item.name, item.healing_amount()),
            ));
            seen.push(key);
        }

        actions
    }
}
