use std::fmt;

use serde::{Deserialize, Serialize};

/// What an item is, together with the one stat that category may carry.
///
/// Keeping the stat inside the variant means a weapon can never have an
/// armor value, and a key can never heal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ItemKind {
    /// Adds to the player's attack damage while equipped.
    Weapon {
        /// Flat damage added to the base attack.
        damage_bonus: u32,
    },
    /// Mitigates incoming damage while equipped.
    Armor {
        /// Flat damage subtracted from enemy attacks.
        armor_value: u32,
    },
    /// Restores health when used.
    Healing {
        /// Hit points restored.
        amount: u32,
    },
    /// Opens a locked way.
    Key,
    /// Story-relevant item with no mechanical effect.
    Quest,
    /// Single-use item with no mechanical effect.
    Consumable,
}

/// Fieldless view of [`ItemKind`], for display and matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// See [`ItemKind::Weapon`].
    Weapon,
    /// See [`ItemKind::Armor`].
    Armor,
    /// See [`ItemKind::Healing`].
    Healing,
    /// See [`ItemKind::Key`].
    Key,
    /// See [`ItemKind::Quest`].
    Quest,
    /// See [`ItemKind::Consumable`].
    Consumable,
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
            Self::Healing => "healing",
            Self::Key => "key",
            Self::Quest => "quest",
            Self::Consumable => "consumable",
        };
        f.write_str(name)
    }
}

/// An item that can lie on the ground, sit in an inventory, or be equipped.
///
/// Items are moved between owners, never shared: a location's ground list,
/// the player's inventory, and NPC gifts all hold their own values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, matched case-insensitively by commands.
    pub name: String,
    /// Short flavor text.
    pub description: String,
    /// Category and stat.
    pub kind: ItemKind,
    /// Whether using the item removes it from the inventory.
    pub consumable: bool,
    /// Optional flavor line describing a special effect.
    pub special_effect: Option<String>,
}

impl Item {
    fn new(name: impl Into<String>, description: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            consumable: false,
            special_effect: None,
        }
    }

    /// Create a weapon.
    pub fn weapon(
        name: impl Into<String>,
        description: impl Into<String>,
        damage_bonus: u32,
    ) -> Self {
        Self::new(name, description, ItemKind::Weapon { damage_bonus })
    }

    /// Create a piece of armor.
    pub fn armor(
        name: impl Into<String>,
        description: impl Into<String>,
        armor_value: u32,
    ) -> Self {
        Self::new(name, description, ItemKind::Armor { armor_value })
    }

    /// Create a consumable healing item.
    pub fn healing(
        name: impl Into<String>,
        description: impl Into<String>,
        amount: u32,
    ) -> Self {
        let mut item = Self::new(name, description, ItemKind::Healing { amount });
        item.consumable = true;
        item
    }

    /// Create a key.
    pub fn key(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description, ItemKind::Key)
    }

    /// Create a quest item.
    pub fn quest(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description, ItemKind::Quest)
    }

    /// Create a single-use item with no mechanical effect.
    pub fn consumable(name: impl Into<String>, description: impl Into<String>) -> Self {
        let mut item = Self::new(name, description, ItemKind::Consumable);
        item.consumable = true;
        item
    }

    /// Attach a special-effect line.
    pub fn with_special_effect(mut self, effect: impl Into<String>) -> Self {
        self.special_effect = Some(effect.into());
        self
    }

    /// Mark the item as reusable (or not).
    pub fn with_consumable(mut self, consumable: bool) -> Self {
        self.consumable = consumable;
        self
    }

    /// The item's category.
    pub fn category(&self) -> ItemCategory {
        match self.kind {
            ItemKind::Weapon { .. } => ItemCategory::Weapon,
            ItemKind::Armor { .. } => ItemCategory::Armor,
            ItemKind::Healing { .. } => ItemCategory::Healing,
            ItemKind::Key => ItemCategory::Key,
            ItemKind::Quest => ItemCategory::Quest,
            ItemKind::Consumable => ItemCategory::Consumable,
        }
    }

    /// Damage bonus (0 unless a weapon).
    pub fn damage_bonus(&self) -> u32 {
        match self.kind {
            ItemKind::Weapon { damage_bonus } => damage_bonus,
            _ => 0,
        }
    }

    /// Armor value (0 unless armor).
    pub fn armor_value(&self) -> u32 {
        match self.kind {
            ItemKind::Armor { armor_value } => armor_value,
            _ => 0,
        }
    }

    /// Healing amount (0 unless a healing item).
    pub fn healing_amount(&self) -> u32 {
        match self.kind {
            ItemKind::Healing { amount } => amount,
            _ => 0,
        }
    }

    /// Whether the item can go into an equipment slot.
    pub fn is_equippable(&self) -> bool {
        matches!(self.category(), ItemCategory::Weapon | ItemCategory::Armor)
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// Multi-line description including stats.
    pub fn full_description(&self) -> String {
        let mut desc = format!("{}: {}", self.name, self.description);
        match self.kind {
            ItemKind::Weapon { damage_bonus } => {
                desc.push_str(&format!("\n  Damage Bonus: +{damage_bonus}"));
            }
            ItemKind::Armor { armor_value } => {
                desc.push_str(&format!("\n  Armor Value: {armor_value}"));
            }
            ItemKind::Healing { amount } => {
                desc.push_str(&format!("\n  Healing: +{amount} HP"));
            }
            ItemKind::Key | ItemKind::Quest | ItemKind::Consumable => {}
        }
        if let Some(effect) = &self.special_effect {
            desc.push_str(&format!("\n  Special: {effect}"));
        }
        desc
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
