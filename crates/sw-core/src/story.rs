use serde::{Deserialize, Serialize};

use crate::genre::Genre;

/// One beat of the story, tied to the location where it happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryStep {
    /// Stable ID, referenced by story locks.
    pub id: String,
    /// Short title.
    pub title: String,
    /// What the player should do.
    pub description: String,
    /// Index (in narrative order) of the location where the step completes.
    pub location: usize,
}

/// A generated story. Immutable after creation apart from the progress marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Title, e.g. "The Rescue of the Dragon".
    pub title: String,
    /// Genre the story was built from.
    pub genre: Genre,
    /// Theme name.
    pub theme: String,
    /// The boss whose defeat ends the story.
    pub antagonist: String,
    /// What the player wins.
    pub reward: String,
    /// Goal text, naming the antagonist.
    pub goal: String,
    /// Location names in narrative order; first is the start, last the climax.
    pub locations: Vec<String>,
    /// Seed keywords supplied by the player.
    pub keywords: Vec<String>,
    /// Ordered steps, one per location.
    pub steps: Vec<StoryStep>,
    progress: usize,
}

impl Story {
    /// Create a story with no steps completed.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        genre: Genre,
        theme: impl Into<String>,
        antagonist: impl Into<String>,
        reward: impl Into<String>,
        locations: Vec<String>,
        keywords: Vec<String>,
        steps: Vec<StoryStep>,
    ) -> Self {
        let antagonist = antagonist.into();
        let reward = reward.into();
        let goal = format!("Stop the {antagonist} and claim the {reward}");
        Self {
            title: title.into(),
            genre,
            theme: theme.into(),
            antagonist,
            reward,
            goal,
            locations,
            keywords,
            steps,
            progress: 0,
        }
    }

    /// The win condition in words.
    pub fn win_condition(&self) -> String {
        format!("Defeat the {}", self.antagonist)
    }

    /// Number of completed steps.
    pub fn progress(&self) -> usize {
        self.progress
    }

    /// The first step not yet completed.
    pub fn current_step(&self) -> Option<&StoryStep> {
        self.steps.get(self.progress)
    }

    /// Whether the step with this ID has been completed.
    pub fn is_step_complete(&self, id: &str) -> bool {
        self.steps
            .iter()
            .take(self.progress)
            .any(|step| step.id == id)
    }

    /// Advance if the current step happens at `location`. Returns the step completed.
    pub fn complete_step_at(&mut self, location: usize) -> Option<&StoryStep> {
        let matches = self
            .current_step()
            .is_some_and(|step| step.location == location);
        if matches {
            self.progress += 1;
            self.steps.get(self.progress - 1)
        } else {
            None
        }
    }

    /// Mark every step complete.
    pub fn complete_all(&mut self) {
        self.progress = self.steps.len();
    }

    /// Whether every step is complete.
    pub fn is_complete(&self) -> bool {
        self.progress >= self.steps.len()
    }
}
