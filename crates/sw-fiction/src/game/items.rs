//! Inventory handling outside combat.

use sw_core::ItemCategory;
use sw_mechanics::Combatant;

use super::GameController;
use crate::error::{FictionError, FictionResult};
use crate::parser::resolve;

impl GameController {
    pub(super) fn do_take(&mut self, name: &str) -> FictionResult<String> {
        let world = self.world.as_mut().ok_or(FictionError::GameNotStarted)?;
        let location = world.map.current_mut();
        if location.items.is_empty() {
            return Err(FictionError::NothingToTake);
        }
        let index =
            resolve(&location.items, name).ok_or_else(|| FictionError::ItemNotHere(name.to_string()))?;
        if let Some(cap) = self.player.capacity().filter(|_| !self.player.has_room()) {
            return Err(FictionError::InventoryFull(cap));
        }
        let Some(item) = location.take_item(index) else {
            return Err(FictionError::ItemNotHere(name.to_string()));
        };
        let text = format!("You took the {}.", item.name);
        self.player.add_item(item)?;
        Ok(text)
    }

    pub(super) fn do_drop(&mut self, name: &str) -> FictionResult<String> {
        let world = self.world.as_mut().ok_or(FictionError::GameNotStarted)?;
        let item = self
            .player
            .find_item(name)
            .and_then(|i| self.player.remove_item(i))
            .ok_or_else(|| FictionError::ItemNotInInventory(name.to_string()))?;
        let text = format!("You dropped the {}.", item.name);
        world.map.current_mut().put_item(item);
        Ok(text)
    }

    pub(super) fn do_inventory(&self) -> String {
        let player = &self.player;
        if player.inventory().is_empty() {
            return "Your inventory is empty.".to_string();
        }
        let mut text = String::from("Inventory:");
        for item in player.inventory() {
            text.push_str(&format!("\n  - {}: {}", item.name, item.description));
        }
        if let Some(weapon) = player.equipped_weapon() {
            text.push_str(&format!("\nEquipped weapon: {weapon}"));
        }
        if let Some(armor) = player.equipped_armor() {
            text.push_str(&format!("\nEquipped armor: {armor}"));
        }
        text
    }

    pub(super) fn do_use(&mut self, name: &str) -> FictionResult<String> {
        let index = self
            .player
            .find_item(name)
            .ok_or_else(|| FictionError::ItemNotInInventory(name.to_string()))?;
        let item = &self.player.inventory()[index];
        if item.category() != ItemCategory::Healing {
            return Err(FictionError::NotUsable(item.name.clone()));
        }
        let (item_name, amount, consumable) =
            (item.name.clone(), item.healing_amount(), item.consumable);

        let restored = self.player.restore_health(amount);
        if consumable {
            self.player.remove_item(index);
        }
        Ok(format!("You used {item_name}. Restored {restored} HP."))
    }

    pub(super) fn do_equip(&mut self, name: &str) -> FictionResult<String> {
        let index = self
            .player
            .find_item(name)
            .ok_or_else(|| FictionError::ItemNotInInventory(name.to_string()))?;
        let item = self.player.equip(index)?;
        tracing::debug!(item = %item.name, "equipped");
        Ok(format!("You equipped {}.", item.name))
    }

    pub(super) fn do_unequip(&mut self, name: &str) -> FictionResult<String> {
        let item = self.player.unequip(name)?;
        Ok(format!("You unequipped {item}."))
    }
}
