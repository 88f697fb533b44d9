//! The player character.

use sw_core::{Item, ItemCategory};
use sw_mechanics::Combatant;

use crate::error::{FictionError, FictionResult};
use crate::parser::resolve;

/// Health a new character starts with.
pub const STARTING_HEALTH: u32 = 100;

/// The player's character: health, inventory and equipment.
///
/// Equipment slots hold indices into the inventory, so an equipped item is
/// still owned by the inventory and never duplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCharacter {
    /// Display name.
    pub name: String,
    health: u32,
    max_health: u32,
    inventory: Vec<Item>,
    weapon: Option<usize>,
    armor: Option<usize>,
    experience: u32,
    clues: Vec<String>,
    capacity: Option<usize>,
}

impl PlayerCharacter {
    /// Create a character at full health with an empty, unbounded inventory.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: STARTING_HEALTH,
            max_health: STARTING_HEALTH,
            inventory: Vec::new(),
            weapon: None,
            armor: None,
            experience: 0,
            clues: Vec::new(),
            capacity: None,
        }
    }

    /// Cap the number of carried items.
    pub fn with_capacity(mut self, capacity: Option<usize>) -> Self {
        self.capacity = capacity;
        self
    }

    /// Current health.
    pub fn health(&self) -> u32 {
        self.health
    }

    /// Maximum health.
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    /// Whether health is above zero.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Carried items, in pickup order.
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// The inventory limit, if any.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Whether another item fits.
    pub fn has_room(&self) -> bool {
        self.capacity.is_none_or(|cap| self.inventory.len() < cap)
    }

    /// Add an item, respecting the capacity.
    pub fn add_item(&mut self, item: Item) -> FictionResult<()> {
        match self.capacity {
            Some(cap) if self.inventory.len() >= cap => Err(FictionError::InventoryFull(cap)),
            _ => {
                self.inventory.push(item);
                Ok(())
            }
        }
    }

    /// Give the starting kit. Ignores the capacity.
    pub fn equip_kit(&mut self, items: Vec<Item>) {
        self.inventory.extend(items);
    }

    /// Resolve an item name against the inventory.
    pub fn find_item(&self, name: &str) -> Option<usize> {
        resolve(&self.inventory, name)
    }

    /// Whether an item with this exact name (case-insensitive) is carried.
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|item| item.is_named(name))
    }

    /// Remove an item, unequipping it first if needed.
    pub fn remove_item(&mut self, index: usize) -> Option<Item> {
        if index >= self.inventory.len() {
            return None;
        }
        self.weapon = shift_slot(self.weapon, index);
        self.armor = shift_slot(self.armor, index);
        Some(self.inventory.remove(index))
    }

    /// Equip the item at `index` in its slot. Returns the item.
    pub fn equip(&mut self, index: usize) -> FictionResult<&Item> {
        let Some(item) = self.inventory.get(index) else {
            return Err(FictionError::ItemNotInInventory(index.to_string()));
        };
        match item.category() {
            ItemCategory::Weapon => self.weapon = Some(index),
            ItemCategory::Armor => self.armor = Some(index),
            _ => return Err(FictionError::NotEquippable(item.name.clone())),
        }
        Ok(&self.inventory[index])
    }

    /// Unequip the equipped item matching `name`. Returns its name.
    pub fn unequip(&mut self, name: &str) -> FictionResult<String> {
        let index = self.find_item(name).ok_or(FictionError::NothingEquipped)?;
        for slot in [&mut self.weapon, &mut self.armor] {
            if *slot == Some(index) {
                *slot = None;
                return Ok(self.inventory[index].name.clone());
            }
        }
        Err(FictionError::NothingEquipped)
    }

    /// The equipped weapon.
    pub fn equipped_weapon(&self) -> Option<&Item> {
        self.weapon.and_then(|i| self.inventory.get(i))
    }

    /// The equipped armor.
    pub fn equipped_armor(&self) -> Option<&Item> {
        self.armor.and_then(|i| self.inventory.get(i))
    }

    /// Damage added to attacks by the equipped weapon.
    pub fn total_damage_bonus(&self) -> u32 {
        self.equipped_weapon().map_or(0, Item::damage_bonus)
    }

    /// Armor from the equipped armor.
    pub fn total_armor(&self) -> u32 {
        self.equipped_armor().map_or(0, Item::armor_value)
    }

    /// Index of the first carried healing item.
    pub fn first_healing_item(&self) -> Option<usize> {
        self.inventory
            .iter()
            .position(|item| item.category() == ItemCategory::Healing)
    }

    /// Experience earned so far.
    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Add experience.
    pub fn gain_experience(&mut self, amount: u32) {
        self.experience = self.experience.saturating_add(amount);
    }

    /// Clues learned, in order.
    pub fn clues(&self) -> &[String] {
        &self.clues
    }

    /// Record a clue. Returns false if it was already known.
    pub fn learn_clue(&mut self, clue: impl Into<String>) -> bool {
        let clue = clue.into();
        if self.clues.contains(&clue) {
            false
        } else {
            self.clues.push(clue);
            true
        }
    }
}

fn shift_slot(slot: Option<usize>, removed: usize) -> Option<usize> {
    match slot {
        Some(i) if i == removed => None,
        Some(i) if i > removed => Some(i - 1),
        other => other,
    }
}

impl Combatant for PlayerCharacter {
    fn health(&self) -> u32 {
        self.health
    }

    fn max_health(&self) -> u32 {
        self.max_health
    }

    fn armor(&self) -> u32 {
        self.total_armor()
    }

    fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    fn restore_health(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount).min(self.max_health);
        self.health - before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hero() -> PlayerCharacter {
        let mut player = PlayerCharacter::new("Aria");
        player.equip_kit(vec![
            Item::quest("Backpack", "A sturdy bag"),
            Item::weapon("Iron Sword", "A sturdy steel blade", 15),
            Item::armor("Leather Armor", "Basic protection", 5),
            Item::healing("Health Potion", "Restores 30 HP", 30),
        ]);
        player
    }

    #[test]
    fn equipment_bonuses() {
        let mut player = hero();
        assert_eq!(player.total_damage_bonus(), 0);
        assert_eq!(player.total_armor(), 0);

        player.equip(1).unwrap();
        player.equip(2).unwrap();
        assert_eq!(player.total_damage_bonus(), 15);
        assert_eq!(player.total_armor(), 5);
        assert_eq!(Combatant::armor(&player), 5);
    }

    #[test]
    fn only_weapons_and_armor_equip() {
        let mut player = hero();
        let err = player.equip(0).unwrap_err();
        assert_eq!(err.to_string(), "You can't equip the Backpack.");
        assert!(player.equip(3).is_err());
        assert!(player.equipped_weapon().is_none());
    }

    #[test]
    fn removing_items_keeps_slots_consistent() {
        let mut player = hero();
        player.equip(1).unwrap();
        player.equip(2).unwrap();

        // Removing an earlier item shifts the slots down.
        let backpack = player.remove_item(0).unwrap();
        assert_eq!(backpack.name, "Backpack");
        assert_eq!(player.equipped_weapon().unwrap().name, "Iron Sword");
        assert_eq!(player.equipped_armor().unwrap().name, "Leather Armor");

        // Removing the equipped weapon unequips it.
        let idx = player.find_item("iron sword").unwrap();
        player.remove_item(idx).unwrap();
        assert!(player.equipped_weapon().is_none());
        assert_eq!(player.total_damage_bonus(), 0);
        assert_eq!(player.equipped_armor().unwrap().name, "Leather Armor");
        assert!(player.remove_item(10).is_none());
    }

    #[test]
    fn unequip_by_name() {
        let mut player = hero();
        player.equip(1).unwrap();
        assert!(matches!(
            player.unequip("leather armor"),
            Err(FictionError::NothingEquipped)
        ));
        assert_eq!(player.unequip("IRON SWORD").unwrap(), "Iron Sword");
        assert!(player.equipped_weapon().is_none());
        assert_eq!(player.inventory().len(), 4);
    }

    #[test]
    fn unequip_tolerates_typos() {
        let mut player = hero();
        player.equip(1).unwrap();
        assert_eq!(player.unequip("iron swrd").unwrap(), "Iron Sword");
        assert!(player.equipped_weapon().is_none());
        assert!(matches!(
            player.unequip("iron swrd"),
            Err(FictionError::NothingEquipped)
        ));
    }

    #[test]
    fn capacity_is_enforced() {
        let mut player = PlayerCharacter::new("Aria").with_capacity(Some(1));
        assert!(player.has_room());
        player.add_item(Item::quest("Map", "")).unwrap();
        assert!(!player.has_room());
        let err = player.add_item(Item::quest("Compass", "")).unwrap_err();
        assert!(matches!(err, FictionError::InventoryFull(1)));
        assert_eq!(player.capacity(), Some(1));
        assert_eq!(player.inventory().len(), 1);
    }

    #[test]
    fn healing_is_clamped() {
        let mut player = hero();
        player.take_damage(20);
        assert_eq!(player.health(), 80);
        assert_eq!(player.restore_health(60), 20);
        assert_eq!(player.health(), 100);
    }

    #[test]
    fn clues_are_unique() {
        let mut player = hero();
        assert!(player.learn_clue("Guard positions"));
        assert!(!player.learn_clue("Guard positions"));
        assert_eq!(player.clues().len(), 1);
    }

    proptest! {
        #[test]
        fn health_stays_in_bounds(ops in prop::collection::vec((any::<bool>(), 0u32..200), 0..50)) {
            let mut player = hero();
            for (damage, amount) in ops {
                if damage {
                    player.take_damage(amount);
                } else {
                    player.restore_health(amount);
                }
                prop_assert!(player.health() <= player.max_health());
            }
        }
    }
}
