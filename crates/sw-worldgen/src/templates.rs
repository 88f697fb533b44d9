use sw_core::Genre;

/// The vocabulary a story is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryTemplate {
    /// Theme names, snake_case.
    pub themes: &'static [&'static str],
    /// Possible antagonists; the chosen one becomes the boss.
    pub antagonists: &'static [&'static str],
    /// Possible rewards.
    pub rewards: &'static [&'static str],
    /// Location names in narrative order; the last is the climax.
    pub locations: &'static [&'static str],
    /// Inspectable fixtures: name, description.
    pub fixtures: &'static [(&'static str, &'static str)],
}

const FANTASY: StoryTemplate = StoryTemplate {
    themes: &["rescue", "revenge", "treasure_hunt", "escape"],
    antagonists: &["Dark Lord", "Evil Sorcerer", "Dragon", "Cursed King"],
    rewards: &["Ancient Crown", "Magic Artifact", "Lost Kingdom", "Redemption"],
    locations: &[
        "Dark Forest",
        "Ancient Temple",
        "Mountain Peak",
        "Cursed Village",
        "Dragon's Lair",
    ],
    fixtures: &[
        (
            "wooden chest",
            "A large wooden chest with brass hinges, covered in dust.",
        ),
        (
            "stone altar",
            "An ancient stone altar with mysterious carvings.",
        ),
        ("bookshelf", "Towering shelves filled with ancient tomes."),
        ("sword rack", "An ornate rack displaying weapons."),
    ],
};

const SCIFI: StoryTemplate = StoryTemplate {
    themes: &[
        "escape_planet",
        "repair_ship",
        "stop_invasion",
        "retrieve_data",
    ],
    antagonists: &["AI Overlord", "Alien Hive", "Rogue AI", "Corporate Enemy"],
    rewards: &["Freedom", "Power Source", "Cure", "Truth"],
    locations: &[
        "Space Station",
        "Alien World",
        "Research Lab",
        "Crashed Ship",
        "Dystopian City",
    ],
    fixtures: &[
        (
            "storage locker",
            "A sealed metal storage locker with a keypad.",
        ),
        ("server console", "A blinking computer terminal with screens."),
        ("weapons cache", "A hidden weapons storage compartment."),
    ],
};

const DETECTIVE: StoryTemplate = StoryTemplate {
    themes: &[
        "solve_murder",
        "find_culprit",
        "uncover_conspiracy",
        "recover_artifact",
    ],
    antagonists: &[
        "Serial Killer",
        "Crime Boss",
        "Corrupt Official",
        "Mastermind",
    ],
    rewards: &["Justice", "Truth", "Redemption", "Solved Case"],
    locations: &[
        "Crime Scene",
        "Police Station",
        "Abandoned Building",
        "Underground Hideout",
        "City Street",
    ],
    fixtures: &[
        ("filing cabinet", "Old metal drawers with case files."),
        ("safe", "A heavy wall safe with a combination lock."),
        ("desk", "A cluttered desk with scattered papers."),
    ],
};

const HORROR: StoryTemplate = StoryTemplate {
    themes: &["survive_night", "break_curse", "escape_evil", "save_town"],
    antagonists: &[
        "Ancient Evil",
        "Possessed Spirit",
        "Creature",
        "Cult Leader",
    ],
    rewards: &["Safety", "Peace", "Redemption", "Knowledge"],
    locations: &[
        "Haunted Mansion",
        "Abandoned Hospital",
        "Dark Graveyard",
        "Cursed Church",
        "Witch's Cottage",
    ],
    fixtures: &[
        ("coffin", "An ancient stone coffin with carved runes."),
        ("crypt door", "A sealed metal door to the crypt."),
    ],
};

impl StoryTemplate {
    /// The template for a genre.
    pub fn for_genre(genre: Genre) -> &'static StoryTemplate {
        match genre {
            Genre::Fantasy => &FANTASY,
            Genre::Scifi => &SCIFI,
            Genre::Detective => &DETECTIVE,
            Genre::Horror => &HORROR,
        }
    }

    /// Name of the location at `index`. Past the end of the table the names
    /// repeat as outskirts, numbered from the third lap on.
    pub fn location_name(&self, index: usize) -> String {
        let len = self.locations.len().max(1);
        let base = self.locations.get(index % len).copied().unwrap_or("Wilderness");
        match index / len {
            0 => base.to_string(),
            1 => format!("Outskirts of {base}"),
            lap => format!("Outskirts of {base} {lap}"),
        }
    }
}

/// "treasure_hunt" becomes "Treasure Hunt".
pub fn theme_title(theme: &str) -> String {
    theme
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
