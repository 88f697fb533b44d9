use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use sw_core::{DialogueOption, Genre, Item, Npc, NpcRole};

/// Weapon table rows: name, description, damage bonus, special effect.
type WeaponRow = (&'static str, &'static str, u32, Option<&'static str>);
/// Armor table rows: name, description, armor value.
type ArmorRow = (&'static str, &'static str, u32);

const FANTASY_WEAPONS: &[WeaponRow] = &[
    ("Iron Sword", "A sturdy steel blade", 15, None),
    (
        "Magic Staff",
        "A glowing staff crackling with power",
        25,
        Some("Deals magical damage"),
    ),
    ("Ancient Axe", "A legendary weapon", 20, None),
];

const SCIFI_WEAPONS: &[WeaponRow] = &[
    ("Laser Pistol", "Compact energy weapon", 12, None),
    ("Plasma Rifle", "Advanced energy rifle", 20, None),
    ("Ion Cannon", "Heavy weapon", 30, None),
];

const DETECTIVE_WEAPONS: &[WeaponRow] = &[
    ("Revolver", "Standard detective sidearm", 10, None),
    ("Shotgun", "Powerful firearm", 18, None),
];

const HORROR_WEAPONS: &[WeaponRow] = &[
    (
        "Holy Water",
        "Effective against evil",
        10,
        Some("Works on undead"),
    ),
    ("Silver Dagger", "A blessed blade", 12, None),
    ("Blessed Mace", "A holy weapon", 15, None),
];

const FANTASY_ARMOR: &[ArmorRow] = &[
    ("Leather Armor", "Basic protection", 5),
    ("Iron Plate", "Heavy armor", 15),
    ("Mithril Armor", "Legendary protection", 25),
];

const SCIFI_ARMOR: &[ArmorRow] = &[
    ("Combat Suit", "Standard armor", 8),
    ("Reinforced Suit", "Heavy combat armor", 15),
];

const DETECTIVE_ARMOR: &[ArmorRow] = &[("Kevlar Vest", "Bullet-resistant vest", 10)];

const HORROR_ARMOR: &[ArmorRow] = &[("Protective Talisman", "Reduces supernatural damage", 8)];

const HEALING: &[(&str, &str, u32)] = &[
    ("Health Potion", "Restores 30 HP", 30),
    ("Greater Potion", "Restores 60 HP", 60),
    ("Full Heal Spell", "Fully restores health", 100),
];

/// Static item tables keyed by genre.
///
/// Every lookup returns fresh items; the catalog itself holds no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCatalog {
    genre: Genre,
}

impl ItemCatalog {
    /// The catalog for a genre.
    pub fn new(genre: Genre) -> Self {
        Self { genre }
    }

    /// The genre this catalog serves.
    pub fn genre(&self) -> Genre {
        self.genre
    }

    fn weapon_rows(&self) -> &'static [WeaponRow] {
        match self.genre {
            Genre::Fantasy => FANTASY_WEAPONS,
            Genre::Scifi => SCIFI_WEAPONS,
            Genre::Detective => DETECTIVE_WEAPONS,
            Genre::Horror => HORROR_WEAPONS,
        }
    }

    fn armor_rows(&self) -> &'static [ArmorRow] {
        match self.genre {
            Genre::Fantasy => FANTASY_ARMOR,
            Genre::Scifi => SCIFI_ARMOR,
            Genre::Detective => DETECTIVE_ARMOR,
            Genre::Horror => HORROR_ARMOR,
        }
    }

    /// All weapons of the genre, in table order.
    pub fn weapons(&self) -> Vec<Item> {
        self.weapon_rows().iter().map(weapon_from_row).collect()
    }

    /// All armor of the genre, in table order.
    pub fn armor(&self) -> Vec<Item> {
        self.armor_rows()
            .iter()
            .map(|&(name, desc, value)| Item::armor(name, desc, value))
            .collect()
    }

    /// Healing items. These are shared by every genre.
    pub fn healing(&self) -> Vec<Item> {
        HEALING
            .iter()
            .map(|&(name, desc, amount)| Item::healing(name, desc, amount))
            .collect()
    }

    /// A random weapon.
    pub fn random_weapon(&self, rng: &mut StdRng) -> Option<Item> {
        self.weapon_rows().choose(rng).map(weapon_from_row)
    }

    /// A random piece of armor.
    pub fn random_armor(&self, rng: &mut StdRng) -> Option<Item> {
        self.armor_rows()
            .choose(rng)
            .map(|&(name, desc, value)| Item::armor(name, desc, value))
    }

    /// A random healing item.
    pub fn random_healing(&self, rng: &mut StdRng) -> Option<Item> {
        HEALING
            .choose(rng)
            .map(|&(name, desc, amount)| Item::healing(name, desc, amount))
    }

    /// Items every new player carries: a backpack, a map, the genre's first
    /// weapon and the first healing item.
    pub fn starting_items(&self) -> Vec<Item> {
        let mut items = vec![
            Item::quest("Backpack", "A sturdy bag for carrying items"),
            Item::quest("Map", "A map of the land"),
        ];
        items.extend(self.weapons().into_iter().take(1));
        items.extend(self.healing().into_iter().take(1));
        items
    }

    /// Look up an item by name in this genre's tables. Names that are not
    /// in any table become quest items.
    pub fn named(&self, name: &str) -> Item {
        self.weapons()
            .into_iter()
            .chain(self.armor())
            .chain(self.healing())
            .find(|item| item.is_named(name))
            .unwrap_or_else(|| Item::quest(name, format!("A {name}, given to you on your quest.")))
    }
}

fn weapon_from_row(row: &WeaponRow) -> Item {
    let &(name, desc, bonus, special) = row;
    let item = Item::weapon(name, desc, bonus);
    match special {
        Some(effect) => item.with_special_effect(effect),
        None => item,
    }
}

/// Static NPC tables keyed by genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NpcCatalog {
    genre: Genre,
}

impl NpcCatalog {
    /// The catalog for a genre.
    pub fn new(genre: Genre) -> Self {
        Self { genre }
    }

    /// Every NPC of the genre, freshly built.
    pub fn npcs(&self) -> Vec<Npc> {
        match self.genre {
            Genre::Fantasy => vec![
                Npc::new(
                    "Wise Wizard",
                    NpcRole::QuestGiver,
                    "An elderly wizard with a long beard",
                    "Greetings, traveler. I sense great destiny about you.",
                )
                .with_option(
                    DialogueOption::new(
                        "What's happening here?",
                        "Dark forces are stirring. You must stop them before it's too late.",
                    )
                    .giving_clue("The enemy's weakness"),
                )
                .with_option(
                    DialogueOption::new(
                        "Can you help me?",
                        "I can provide guidance, but the victory must be yours.",
                    )
                    .giving_item("Magic Scroll"),
                ),
                Npc::new(
                    "Brave Knight",
                    NpcRole::Ally,
                    "A seasoned warrior in shining armor",
                    "Well met! I'd be honored to aid you in your quest.",
                )
                .with_option(
                    DialogueOption::new("Will you join me?", "Aye, I shall fight beside you.")
                        .giving_clue("Enemy patrol routes"),
                )
                .with_option(
                    DialogueOption::new(
                        "What do you know?",
                        "The castle ahead is well-guarded. Be cautious.",
                    )
                    .giving_clue("Guard positions"),
                ),
            ],
            Genre::Scifi => vec![
                Npc::new(
                    "AI Assistant",
                    NpcRole::Ally,
                    "A holographic artificial intelligence",
                    "Greetings. I am here to assist you.",
                )
                .with_option(
                    DialogueOption::new(
                        "What's the situation?",
                        "The station is under siege. We must restore power.",
                    )
                    .giving_clue("Power core location"),
                )
                .with_option(
                    DialogueOption::new(
                        "Can you help?",
                        "I can provide system access if you need it.",
                    )
                    .giving_item("Access Card"),
                ),
            ],
            Genre::Detective => vec![
                Npc::new(
                    "Police Captain",
                    NpcRole::QuestGiver,
                    "A gruff police captain",
                    "Detective, glad you're on the case.",
                )
                .with_option(
                    DialogueOption::new(
                        "What do we know?",
                        "Three bodies, same location. The pattern suggests one culprit.",
                    )
                    .giving_clue("The culprit's method"),
                )
                .with_option(
                    DialogueOption::new(
                        "Any leads?",
                        "Check the warehouse district. Suspects were last seen there.",
                    )
                    .giving_clue("Warehouse location"),
                ),
            ],
            Genre::Horror => vec![
                Npc::new(
                    "Priest",
                    NpcRole::Ally,
                    "A holy man with a sacred symbol",
                    "The darkness here is strong. You will need protection.",
                )
                .with_option(
                    DialogueOption::new(
                        "What can you tell me?",
                        "An ancient curse binds this place. It must be broken.",
                    )
                    .giving_clue("Curse ritual"),
                )
                .with_option(
                    DialogueOption::new("Will you help?", "I will perform a blessing to aid you.")
                        .giving_item("Holy Water"),
                ),
            ],
        }
    }

    /// A random NPC of the genre.
    pub fn random(&self, rng: &mut StdRng) -> Option<Npc> {
        self.npcs().choose(rng).cloned()
    }
}
