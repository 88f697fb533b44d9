use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::npc::Npc;

/// Identifier of a location within one map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocationId(pub String);

impl LocationId {
    /// Create an ID from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The conventional ID for the location at `index` in narrative order.
    pub fn indexed(index: usize) -> Self {
        Self(format!("loc_{index}"))
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three ways a location is described.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDescriptions {
    /// Shown on first arrival.
    pub first_visit: String,
    /// Shown when returning.
    pub revisit: String,
    /// Shown by `look`.
    pub detailed: String,
}

/// A condition that must hold before a location can be entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lock {
    /// The player must carry an item with this name.
    RequiresItem(String),
    /// The story step with this ID must be complete.
    RequiresStep(String),
}

impl Lock {
    /// The message shown when the lock blocks movement.
    pub fn reason(&self) -> String {
        match self {
            Self::RequiresItem(item) => format!("The path is blocked. You need the {item}."),
            Self::RequiresStep(_) => "You are not ready to go there yet.".to_string(),
        }
    }
}

/// How a connection is traversed.
///
/// [`ConnectionKind::OneWay`] edges get no return path from
/// [`Map::connect_both`](crate::Map::connect_both); the other kinds only
/// shape the narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    /// A regular path.
    #[default]
    Normal,
    /// A path with no way back.
    OneWay,
    /// Entering a building or enclosed space.
    Enter,
    /// Leaving a building or enclosed space.
    Exit,
    /// Magical or technological transport.
    Teleport,
    /// A passage that needs an action or story step.
    Special,
}

impl ConnectionKind {
    /// Default narration for taking an edge of this kind.
    pub fn narrate(self, direction: &str, destination: &str) -> String {
        match self {
            Self::Normal => format!("You travel {direction} to {destination}."),
            Self::OneWay => {
                format!("You go {direction} to {destination}. There is no way back.")
            }
            Self::Enter => format!("You enter {destination}."),
            Self::Exit => format!("You step out to {destination}."),
            Self::Teleport => format!("You are transported to {destination}."),
            Self::Special => format!("You find a way {direction} to {destination}."),
        }
    }
}

/// A directed edge out of a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// The direction token the player types (e.g. "north", "enter tavern").
    pub direction: String,
    /// Where the edge leads.
    pub destination: LocationId,
    /// How the edge is traversed.
    pub kind: ConnectionKind,
    /// Narration shown when the edge is taken.
    pub transition: String,
}

impl Connection {
    /// Create a normal connection.
    pub fn new(
        direction: impl Into<String>,
        destination: LocationId,
        transition: impl Into<String>,
    ) -> Self {
        Self {
            direction: direction.into().to_lowercase(),
            destination,
            kind: ConnectionKind::Normal,
            transition: transition.into(),
        }
    }

    /// Set the connection kind.
    pub fn with_kind(mut self, kind: ConnectionKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Something in a location that can be inspected, possibly hiding an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// Name used by `inspect`.
    pub name: String,
    /// What the player sees on inspection.
    pub description: String,
    /// Item revealed the first time the fixture is inspected.
    pub hidden_item: Option<Item>,
}

impl Fixture {
    /// Create a fixture with nothing hidden inside.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            hidden_item: None,
        }
    }

    /// Hide an item in the fixture.
    pub fn with_hidden_item(mut self, item: Item) -> Self {
        self.hidden_item = Some(item);
        self
    }
}

/// A place in the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique ID within the map.
    pub id: LocationId,
    /// Display name.
    pub name: String,
    /// First-visit, revisit and detailed text.
    pub descriptions: LocationDescriptions,
    /// Outgoing edges keyed by direction token.
    pub connections: BTreeMap<String, Connection>,
    /// Items lying on the ground.
    pub items: Vec<Item>,
    /// NPCs present.
    pub npcs: Vec<Npc>,
    /// Inspectable fixtures.
    pub fixtures: Vec<Fixture>,
    /// Condition for entering, if any.
    pub lock: Option<Lock>,
    /// Set on first arrival, never cleared.
    pub visited: bool,
}

impl Location {
    /// Create a location with the default description set for `name`.
    pub fn new(id: LocationId, name: impl Into<String>) -> Self {
        let name = name.into();
        let descriptions = LocationDescriptions {
            first_visit: format!("You arrive at {name}."),
            revisit: format!("You're back at {name}."),
            detailed: format!("You examine {name} carefully..."),
        };
        Self {
            id,
            name,
            descriptions,
            connections: BTreeMap::new(),
            items: Vec::new(),
            npcs: Vec::new(),
            fixtures: Vec::new(),
            lock: None,
            visited: false,
        }
    }

    /// Replace the description set.
    pub fn with_descriptions(mut self, descriptions: LocationDescriptions) -> Self {
        self.descriptions = descriptions;
        self
    }

    /// Lock the location.
    pub fn with_lock(mut self, lock: Lock) -> Self {
        self.lock = Some(lock);
        self
    }

    /// Whether the location can currently be entered without a check.
    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    /// Find a ground item by name (case-insensitive).
    pub fn find_item(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.is_named(name))
    }

    /// Remove and return a ground item.
    pub fn take_item(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Put an item on the ground.
    pub fn put_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Find an NPC by name (case-insensitive).
    pub fn find_npc(&self, name: &str) -> Option<&Npc> {
        self.npcs.iter().find(|npc| npc.is_named(name))
    }

    /// Find an NPC by name for mutation.
    pub fn find_npc_mut(&mut self, name: &str) -> Option<&mut Npc> {
        self.npcs.iter_mut().find(|npc| npc.is_named(name))
    }

    /// Find a fixture by name (case-insensitive).
    pub fn find_fixture_mut(&mut self, name: &str) -> Option<&mut Fixture> {
        self.fixtures
            .iter_mut()
            .find(|f| f.name.eq_ignore_ascii_case(name.trim()))
    }
}
