use std::fmt;

use serde::{Deserialize, Serialize};

/// The narrative template family a world is generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    /// Swords, sorcery, and dragons.
    #[default]
    Fantasy,
    /// Space stations, rogue AIs, and alien worlds.
    Scifi,
    /// Crime scenes, suspects, and conspiracies.
    Detective,
    /// Haunted places and ancient evils.
    Horror,
}

impl Genre {
    /// All genres in display order.
    pub const ALL: [Genre; 4] = [Self::Fantasy, Self::Scifi, Self::Detective, Self::Horror];

    /// Parse a genre name (case-insensitive). Returns `None` for unknown names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fantasy" => Some(Self::Fantasy),
            "scifi" | "sci-fi" | "science fiction" => Some(Self::Scifi),
            "detective" | "noir" | "mystery" => Some(Self::Detective),
            "horror" => Some(Self::Horror),
            _ => None,
        }
    }

    /// Parse a genre name, substituting the default genre when unrecognized.
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Lowercase name of the genre.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fantasy => "fantasy",
            Self::Scifi => "scifi",
            Self::Detective => "detective",
            Self::Horror => "horror",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
