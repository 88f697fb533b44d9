use serde::{Deserialize, Serialize};

/// The part an NPC plays in the story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NpcRole {
    /// Sells or trades goods.
    Merchant,
    /// Guards a place.
    Guard,
    /// Helps the player.
    Ally,
    /// Works against the player.
    Villain,
    /// Hands out the quest.
    QuestGiver,
    /// Just passing through.
    #[default]
    Neutral,
}

/// One numbered reply the player can pick after talking to an NPC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueOption {
    /// What the player says.
    pub prompt: String,
    /// What the NPC answers.
    pub response: String,
    /// Name of an item handed to the player.
    pub gives_item: Option<String>,
    /// A clue the player learns.
    pub gives_clue: Option<String>,
}

impl DialogueOption {
    /// Create an option with no reward.
    pub fn new(prompt: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response: response.into(),
            gives_item: None,
            gives_clue: None,
        }
    }

    /// Reward the player with an item.
    pub fn giving_item(mut self, item: impl Into<String>) -> Self {
        self.gives_item = Some(item.into());
        self
    }

    /// Reward the player with a clue.
    pub fn giving_clue(mut self, clue: impl Into<String>) -> Self {
        self.gives_clue = Some(clue.into());
        self
    }
}

/// A non-player character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npc {
    /// Display name, matched case-insensitively.
    pub name: String,
    /// Story role.
    pub role: NpcRole,
    /// Appearance.
    pub description: String,
    /// First thing said when spoken to.
    pub greeting: String,
    /// Replies the player can choose from.
    pub dialogue: Vec<DialogueOption>,
    /// Hostile NPCs refuse to talk.
    pub hostile: bool,
    /// Set after the first conversation.
    pub talked_to: bool,
    /// Options whose rewards were already handed out.
    pub exhausted: Vec<usize>,
}

impl Npc {
    /// Create a friendly NPC without dialogue options.
    pub fn new(
        name: impl Into<String>,
        role: NpcRole,
        description: impl Into<String>,
        greeting: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role,
            description: description.into(),
            greeting: greeting.into(),
            dialogue: Vec::new(),
            hostile: false,
            talked_to: false,
            exhausted: Vec::new(),
        }
    }

    /// Add a dialogue option.
    pub fn with_option(mut self, option: DialogueOption) -> Self {
        self.dialogue.push(option);
        self
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// Look up a 1-based dialogue choice.
    pub fn option(&self, choice: usize) -> Option<&DialogueOption> {
        choice.checked_sub(1).and_then(|i| self.dialogue.get(i))
    }

    /// Mark a 1-based choice as rewarded. Returns false if it already was.
    pub fn exhaust(&mut self, choice: usize) -> bool {
        if self.exhausted.contains(&choice) {
            false
        } else {
            self.exhausted.push(choice);
            true
        }
    }
}
