//! Combat: starting encounters, resolving rounds and applying outcomes.

use rand::Rng;
use sw_core::ItemCategory;
use sw_mechanics::{CombatAction, CombatResolver, Enemy, MechError, RoundOutcome};

use super::{GameController, GameState};
use crate::error::{FictionError, FictionResult};

/// Experience for defeating a regular enemy.
const EXPERIENCE_RANGE: std::ops::RangeInclusive<u32> = 10..=50;

impl GameController {
    /// Bind the game to a new encounter.
    pub(super) fn start_encounter(&mut self, enemy: Enemy) -> FictionResult<String> {
        let mut text = if enemy.is_boss {
            format!("⚠️ The {} appears! This is the final battle!", enemy.name)
        } else {
            format!("⚠️ An enemy appears! A {} blocks your path.", enemy.name)
        };
        text.push_str(&format!(
            "\n{} Health: {}/{} | Damage: {} | Armor: {}",
            enemy.name, enemy.health, enemy.max_health, enemy.damage, enemy.armor
        ));

        let mut resolver = CombatResolver::new();
        resolver.start_encounter(enemy)?;
        text.push_str("\n\nActions:");
        for action in resolver.available_actions(self.player.inventory()) {
            text.push_str(&format!("\n  {} - {}", action.command, action.description));
        }

        self.combat = Some(resolver);
        self.conversation = None;
        self.set_state(GameState::InCombat);
        Ok(text)
    }

    pub(super) fn do_attack(&mut self) -> FictionResult<String> {
        let weapon_bonus = self.player.total_damage_bonus();
        self.fight(CombatAction::Attack { weapon_bonus })
    }

    pub(super) fn do_defend(&mut self) -> FictionResult<String> {
        self.fight(CombatAction::Defend)
    }

    pub(super) fn do_flee(&mut self) -> FictionResult<String> {
        self.fight(CombatAction::Flee)
    }

    /// Heal with the named item, or the first healing item carried.
    pub(super) fn do_heal(&mut self, name: Option<&str>) -> FictionResult<String> {
        let index = match name {
            Some(name) => {
                let index = self
                    .player
                    .find_item(name)
                    .ok_or_else(|| FictionError::ItemNotInInventory(name.to_string()))?;
                let item = &self.player.inventory()[index];
                if item.category() != ItemCategory::Healing {
                    return Err(FictionError::NotUsable(item.name.clone()));
                }
                index
            }
            None => self
                .player
                .first_healing_item()
                .ok_or(FictionError::NoHealingItems)?,
        };
        let item = &self.player.inventory()[index];
        let amount = item.healing_amount();
        let consumable = item.consumable;

        let text = self.fight(CombatAction::Heal { amount })?;
        if consumable {
            self.player.remove_item(index);
        }
        Ok(text)
    }

    fn fight(&mut self, action: CombatAction) -> FictionResult<String> {
        let resolver = self
            .combat
            .as_mut()
            .ok_or(FictionError::Mechanics(MechError::NoActiveCombat))?;
        let result = resolver.resolve_round(action, &mut self.player, &mut self.rng)?;
        let enemy = resolver.enemy().cloned();
        let mut text = result.log;

        match result.outcome {
            RoundOutcome::Continue => {}
            RoundOutcome::Victory => {
                self.combat = None;
                match enemy {
                    Some(enemy) if enemy.is_boss => text.push_str(&self.win(&enemy.name)?),
                    _ => {
                        let xp = self.rng.random_range(EXPERIENCE_RANGE);
                        self.player.gain_experience(xp);
                        text.push_str(&format!("\n\nYou gain {xp} experience points!"));
                        self.set_state(GameState::Exploring);
                    }
                }
            }
            RoundOutcome::Defeat => {
                self.combat = None;
                text.push_str("\n\nYour adventure ends here. GAME OVER.");
                self.set_state(GameState::Defeat);
            }
            RoundOutcome::Fled => {
                self.combat = None;
                self.set_state(GameState::Exploring);
            }
        }
        Ok(text)
    }

    fn win(&mut self, boss: &str) -> FictionResult<String> {
        let world = self.world.as_mut().ok_or(FictionError::GameNotStarted)?;
        world.story.complete_all();
        let story = &world.story;
        let ending = sw_worldgen::ending(
            story.genre,
            &self.player.name,
            &story.antagonist,
            &story.reward,
            &mut self.rng,
        );
        let text = format!("\n\nYOU HAVE DEFEATED THE {}!\n{ending}", boss.to_uppercase());
        self.set_state(GameState::Victory);
        Ok(text)
    }
}
