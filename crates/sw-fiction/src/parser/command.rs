//! Command parsing for player input.
//!
//! Input is split into a verb and one free-text argument. A few filler
//! words ("to", "at", "up") after the verb are skipped.

use crate::error::{FictionError, FictionResult};
use crate::parser::resolver::suggest;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Describe the current location.
    Look,
    /// Move along a connection.
    Go {
        /// Direction token, lowercased and expanded ("n" becomes "north").
        direction: String,
    },
    /// Pick up an item from the ground.
    Take {
        /// The item name.
        item: String,
    },
    /// Put an item on the ground.
    Drop {
        /// The item name.
        item: String,
    },
    /// List carried items.
    Inventory,
    /// Use an item outside combat.
    Use {
        /// The item name.
        item: String,
    },
    /// Equip a weapon or armor.
    Equip {
        /// The item name.
        item: String,
    },
    /// Remove equipped gear.
    Unequip {
        /// The item name.
        item: String,
    },
    /// Start a conversation.
    Talk {
        /// The NPC name.
        npc: String,
    },
    /// Pick a numbered dialogue option.
    Say {
        /// The option as typed.
        choice: String,
    },
    /// Examine a fixture, carried item or NPC.
    Inspect {
        /// What to examine.
        target: String,
    },
    /// Show the player's condition.
    Status,
    /// Show story progress.
    Story,
    /// Attack the enemy.
    Attack,
    /// Brace for the enemy's attack.
    Defend,
    /// Use a healing item in combat.
    Heal {
        /// A specific healing item, or the first one carried.
        item: Option<String>,
    },
    /// Try to escape.
    Flee,
    /// List commands.
    Help,
}

impl Command {
    /// Canonical verb.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Look => "look",
            Self::Go { .. } => "go",
            Self::Take { .. } => "take",
            Self::Drop { .. } => "drop",
            Self::Inventory => "inventory",
            Self::Use { .. } => "use",
            Self::Equip { .. } => "equip",
            Self::Unequip { .. } => "unequip",
            Self::Talk { .. } => "talk",
            Self::Say { .. } => "say",
            Self::Inspect { .. } => "inspect",
            Self::Status => "status",
            Self::Story => "story",
            Self::Attack => "attack",
            Self::Defend => "defend",
            Self::Heal { .. } => "heal",
            Self::Flee => "flee",
            Self::Help => "help",
        }
    }

    /// Whether the command only makes sense during combat.
    pub fn is_combat(&self) -> bool {
        matches!(
            self,
            Self::Attack | Self::Defend | Self::Heal { .. } | Self::Flee
        )
    }

    /// Whether the command may be issued during combat.
    pub fn allowed_in_combat(&self) -> bool {
        match self {
            Self::Attack | Self::Defend | Self::Heal { .. } | Self::Flee => true,
            Self::Look | Self::Inventory | Self::Status | Self::Story | Self::Help => true,
            Self::Go { .. }
            | Self::Take { .. }
            | Self::Drop { .. }
            | Self::Use { .. }
            | Self::Equip { .. }
            | Self::Unequip { .. }
            | Self::Talk { .. }
            | Self::Say { .. }
            | Self::Inspect { .. } => false,
        }
    }
}

/// Canonical verbs, in help order.
pub const VERBS: &[&str] = &[
    "look",
    "go",
    "take",
    "drop",
    "inventory",
    "use",
    "equip",
    "unequip",
    "talk",
    "say",
    "inspect",
    "status",
    "story",
    "attack",
    "defend",
    "heal",
    "flee",
    "help",
];

/// Verb synonyms for command parsing.
const LOOK_VERBS: &[&str] = &["look", "l"];
const GO_VERBS: &[&str] = &["go", "move", "walk"];
const TAKE_VERBS: &[&str] = &["take", "get", "grab", "pick"];
const DROP_VERBS: &[&str] = &["drop", "discard"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i"];
const USE_VERBS: &[&str] = &["use"];
const EQUIP_VERBS: &[&str] = &["equip", "wield", "wear"];
const UNEQUIP_VERBS: &[&str] = &["unequip", "remove"];
const TALK_VERBS: &[&str] = &["talk", "speak"];
const SAY_VERBS: &[&str] = &["say", "choose"];
const INSPECT_VERBS: &[&str] = &["inspect", "examine", "x"];
const STATUS_VERBS: &[&str] = &["status", "stats"];
const STORY_VERBS: &[&str] = &["story", "quest"];
const ATTACK_VERBS: &[&str] = &["attack", "fight", "hit"];
const DEFEND_VERBS: &[&str] = &["defend", "block"];
const HEAL_VERBS: &[&str] = &["heal"];
const FLEE_VERBS: &[&str] = &["flee", "run"];
const HELP_VERBS: &[&str] = &["help", "?"];

/// Filler words skipped in front of an argument.
const FILLER: &[&str] = &["to", "with", "at", "up", "the"];

/// Expand a direction shorthand. Anything else is lowercased as-is, so
/// free-form tokens like "enter tavern" pass through.
pub fn normalize_direction(token: &str) -> String {
    let token = token.trim().to_lowercase();
    let full = match token.as_str() {
        "n" => "north",
        "s" => "south",
        "e" => "east",
        "w" => "west",
        "u" => "up",
        "d" => "down",
        _ => return token,
    };
    full.to_string()
}

fn bare_direction(verb: &str) -> Option<String> {
    match verb {
        "north" | "south" | "east" | "west" | "up" | "down" | "n" | "s" | "e" | "w" | "u"
        | "d" => Some(normalize_direction(verb)),
        _ => None,
    }
}

/// Parse a line of player input.
pub fn parse_command(input: &str) -> FictionResult<Command> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FictionError::EmptyInput);
    }

    let (verb, rest) = match input.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb.to_lowercase(), rest.trim()),
        None => (input.to_lowercase(), ""),
    };
    let verb = verb.as_str();
    let argument = strip_filler(rest);

    if let Some(direction) = bare_direction(verb) {
        return Ok(Command::Go { direction });
    }

    let command = if is_one_of(verb, LOOK_VERBS) {
        Command::Look
    } else if is_one_of(verb, GO_VERBS) {
        Command::Go {
            direction: normalize_direction(require(argument, "Go where?")?),
        }
    } else if is_one_of(verb, TAKE_VERBS) {
        Command::Take {
            item: require(argument, "Take what?")?.to_string(),
        }
    } else if is_one_of(verb, DROP_VERBS) {
        Command::Drop {
            item: require(argument, "Drop what?")?.to_string(),
        }
    } else if is_one_of(verb, INVENTORY_VERBS) {
        Command::Inventory
    } else if is_one_of(verb, USE_VERBS) {
        Command::Use {
            item: require(argument, "Use what?")?.to_string(),
        }
    } else if is_one_of(verb, EQUIP_VERBS) {
        Command::Equip {
            item: require(argument, "Equip what?")?.to_string(),
        }
    } else if is_one_of(verb, UNEQUIP_VERBS) {
        Command::Unequip {
            item: require(argument, "Unequip what?")?.to_string(),
        }
    } else if is_one_of(verb, TALK_VERBS) {
        Command::Talk {
            npc: require(argument, "Talk to whom?")?.to_string(),
        }
    } else if is_one_of(verb, SAY_VERBS) {
        Command::Say {
            choice: require(argument, "Say what? Pick an option by number.")?.to_string(),
        }
    } else if is_one_of(verb, INSPECT_VERBS) {
        Command::Inspect {
            target: require(argument, "Inspect what?")?.to_string(),
        }
    } else if is_one_of(verb, STATUS_VERBS) {
        Command::Status
    } else if is_one_of(verb, STORY_VERBS) {
        Command::Story
    } else if is_one_of(verb, ATTACK_VERBS) {
        Command::Attack
    } else if is_one_of(verb, DEFEND_VERBS) {
        Command::Defend
    } else if is_one_of(verb, HEAL_VERBS) {
        Command::Heal {
            item: (!argument.is_empty()).then(|| argument.to_string()),
        }
    } else if is_one_of(verb, FLEE_VERBS) {
        Command::Flee
    } else if is_one_of(verb, HELP_VERBS) {
        Command::Help
    } else {
        return Err(FictionError::UnknownCommand {
            verb: verb.to_string(),
            suggestion: suggest(VERBS, verb),
        });
    };

    Ok(command)
}

fn is_one_of(verb: &str, synonyms: &[&str]) -> bool {
    synonyms.iter().any(|s| *s == verb)
}

fn strip_filler(rest: &str) -> &str {
    let mut rest = rest.trim();
    loop {
        let (word, tail) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        if word.is_empty() || !FILLER.iter().any(|f| f.eq_ignore_ascii_case(word)) {
            return rest;
        }
        rest = tail.trim_start();
    }
}

fn require<'a>(argument: &'a str, prompt: &'static str) -> FictionResult<&'a str> {
    if argument.is_empty() {
        Err(FictionError::MissingArgument(prompt))
    } else {
        Ok(argument)
    }
}
