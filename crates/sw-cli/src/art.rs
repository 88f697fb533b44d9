//! Decorative art. Lookups return `None` when nothing fits.

const FOREST: &str = r"
    \|/
   --*--
    /|\
   / | \
  /  |  \
     |";

const CASTLE: &str = r"
      |\
      | \
    \-+-/
     |=|
    /| |\
   / | | \
  |  | |  |";

const CAVE: &str = r"
     ___
   /~   ~\
  /       \
 |  /|||\  |
 |     O   |
  \_     _/
     ~|~";

const CITY: &str = r"
  ___   ___
 |___|_|___|
 |_|_____||_|
 |__|_|___|_|
  _|_______|";

const SPACESHIP: &str = r"
    \     /
     \___/
    _|___|_
   |_______|
   |  |||  |
     /||||\";

const DRAGON: &str = r"
         __====-_  _-====__
   _--^^^#####//      \\#####^^^--_
 -~##########// (    ) \\##########~-
  ~^^^^^^^^^^/__)    (__\^^^^^^^^^^~";

const GHOST: &str = r"
    .-.
   (o o)
   | O \
    \   \
     `~~~'";

const SKULL: &str = r"
    _____
   /     \
  | () () |
   \  ^  /
    |||||";

const BANNER: &str = r"
  ____                                      _
 / ___|  __ _  __ _  ___ _ ____      _____| |__   ___ _ __
 \___ \ / _` |/ _` |/ _ \ '_ \ \ /\ / / _ \ '_ \ / _ \ '__|
  ___) | (_| | (_| |  __/ | | \ V  V /  __/ |_) |  __/ |
 |____/ \__,_|\__, |\___|_| |_|\_/\_/ \___|_.__/ \___|_|
              |___/";

/// Keywords in a location name and the art they select.
const LOCATIONS: &[(&str, &str)] = &[
    ("forest", FOREST),
    ("woods", FOREST),
    ("temple", CASTLE),
    ("castle", CASTLE),
    ("mansion", CASTLE),
    ("asylum", CASTLE),
    ("lair", CAVE),
    ("cave", CAVE),
    ("peak", CAVE),
    ("village", CITY),
    ("city", CITY),
    ("street", CITY),
    ("station", SPACESHIP),
    ("ship", SPACESHIP),
    ("lab", SPACESHIP),
];

/// Keywords in a creature name and the art they select.
const CREATURES: &[(&str, &str)] = &[
    ("dragon", DRAGON),
    ("ghost", GHOST),
    ("spirit", GHOST),
    ("phantom", GHOST),
    ("skeleton", SKULL),
    ("zombie", SKULL),
    ("lord", SKULL),
];

fn lookup(table: &[(&str, &'static str)], name: &str) -> Option<&'static str> {
    let name = name.to_lowercase();
    table
        .iter()
        .find(|(key, _)| name.contains(key))
        .map(|&(_, art)| art)
}

/// Art for a location, chosen by a keyword in its name.
pub fn location(name: &str) -> Option<&'static str> {
    lookup(LOCATIONS, name)
}

/// Art for an enemy or NPC, chosen by a keyword in its name.
pub fn creature(name: &str) -> Option<&'static str> {
    lookup(CREATURES, name)
}

/// The title banner.
pub fn banner() -> &'static str {
    BANNER
}
