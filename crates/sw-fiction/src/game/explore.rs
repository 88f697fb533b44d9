//! Exploration: looking around, moving, talking and inspecting.

use sw_core::{CoreError, Lock};
use sw_worldgen::ItemCatalog;

use super::{GameController, GameState, Progress};
use crate::error::{FictionError, FictionResult};
use crate::parser::resolve;

impl GameController {
    pub(super) fn do_look(&self) -> FictionResult<String> {
        let world = self.world()?;
        let location = world.map.current();
        let mut text = format!("== {} ==\n{}", location.name, location.descriptions.detailed);

        let progress = Progress {
            player: &self.player,
            story: &world.story,
        };
        let exits = world.map.available_exits(&progress);
        if exits.is_empty() {
            text.push_str("\n\nThere are no open exits.");
        } else {
            text.push_str(&format!("\n\nExits: {}", exits.join(", ")));
        }

        if !location.items.is_empty() {
            text.push_str("\nItems here:");
            for item in &location.items {
                text.push_str(&format!("\n  - {}", item.name));
            }
        }
        if !location.npcs.is_empty() {
            text.push_str("\nPeople here:");
            for npc in &location.npcs {
                text.push_str(&format!("\n  - {}", npc.name));
            }
        }
        if !location.fixtures.is_empty() {
            text.push_str("\nYou notice:");
            for fixture in &location.fixtures {
                text.push_str(&format!("\n  - {}", fixture.name));
            }
        }
        Ok(text)
    }

    pub(super) fn do_go(&mut self, direction: &str) -> FictionResult<String> {
        let world = self.world.as_mut().ok_or(FictionError::GameNotStarted)?;
        let progress = Progress {
            player: &self.player,
            story: &world.story,
        };
        let arrival = world
            .map
            .travel(direction, &progress)
            .map_err(|err| match err {
                CoreError::Locked { reason, .. } => FictionError::Locked(reason),
                other => FictionError::Core(other),
            })?;
        self.conversation = None;

        let mut text = String::new();
        match &arrival.unlocked {
            Some(Lock::RequiresItem(item)) => {
                text.push_str(&format!("You use the {item} to open the way.\n"));
            }
            Some(Lock::RequiresStep(_)) => text.push_str("The way opens.\n"),
            None => {}
        }
        if !arrival.transition.is_empty() {
            text.push_str(&arrival.transition);
            text.push('\n');
        }
        text.push_str(&arrival.description);

        if let Some(step) = world.story.complete_step_at(arrival.index) {
            tracing::info!(step = %step.id, location = %arrival.name, "story step completed");
            text.push_str(&format!("\n\nStory progress: {}.", step.title));
        }
        if let Some(next) = world.story.current_step() {
            if arrival.first_visit && next.location != arrival.index {
                text.push_str(&format!("\nNext: {}", next.description));
            }
        }

        let antagonist = world.story.antagonist.clone();
        if self.encounters_enabled && self.encounters.roll_encounter(&mut self.rng) {
            let enemy = self
                .encounters
                .spawn(self.turn_count, &antagonist, &mut self.rng);
            text.push_str("\n\n");
            text.push_str(&self.start_encounter(enemy)?);
        }
        Ok(text)
    }

    pub(super) fn do_talk(&mut self, name: &str) -> FictionResult<String> {
        let world = self.world.as_mut().ok_or(FictionError::GameNotStarted)?;
        let location = world.map.current_mut();
        let index =
            resolve(&location.npcs, name).ok_or_else(|| FictionError::NpcNotHere(name.to_string()))?;
        let npc = &mut location.npcs[index];
        if npc.hostile {
            return Err(FictionError::Hostile(npc.name.clone()));
        }
        npc.talked_to = true;

        let mut text = format!("{}: \"{}\"", npc.name, npc.greeting);
        if !npc.dialogue.is_empty() {
            text.push('\n');
            for (i, option) in npc.dialogue.iter().enumerate() {
                text.push_str(&format!("\n  {}. {}", i + 1, option.prompt));
            }
            text.push_str("\n(Reply with 'say <number>'.)");
        }
        tracing::debug!(npc = %npc.name, "conversation started");
        self.conversation = Some(npc.name.clone());
        Ok(text)
    }

    pub(super) fn do_say(&mut self, choice: &str) -> FictionResult<String> {
        let name = self.conversation.clone().ok_or(FictionError::NotTalking)?;
        let world = self.world.as_mut().ok_or(FictionError::GameNotStarted)?;
        let genre = world.story.genre;
        let npc = world
            .map
            .current_mut()
            .find_npc_mut(&name)
            .ok_or(FictionError::NotTalking)?;

        let number: usize = choice.trim().parse().map_err(|_| FictionError::InvalidChoice)?;
        let option = npc.option(number).cloned().ok_or(FictionError::InvalidChoice)?;
        let first_time = npc.exhaust(number);

        let mut text = format!("{}: \"{}\"", npc.name, option.response);
        if !first_time {
            return Ok(text);
        }

        if let Some(item_name) = &option.gives_item {
            let item = ItemCatalog::new(genre).named(item_name);
            let item_name = item.name.clone();
            match self.player.add_item(item) {
                Ok(()) => text.push_str(&format!("\n{name} gives you the {item_name}.")),
                Err(FictionError::InventoryFull(_)) => {
                    text.push_str(&format!("\nYou have no room for the {item_name}."));
                }
                Err(err) => return Err(err),
            }
        }
        if let Some(clue) = &option.gives_clue {
            if self.player.learn_clue(clue.as_str()) {
                text.push_str(&format!("\nYou learned: {clue}"));
            }
        }
        Ok(text)
    }

    pub(super) fn do_inspect(&mut self, target: &str) -> FictionResult<String> {
        let world = self.world.as_mut().ok_or(FictionError::GameNotStarted)?;
        let location = world.map.current_mut();

        if let Some(i) = resolve(&location.fixtures, target) {
            let fixture = &mut location.fixtures[i];
            let mut text = fixture.description.clone();
            if let Some(item) = fixture.hidden_item.take() {
                text.push_str(&format!("\nInside, you find a {}. It drops to the ground.", item.name));
                tracing::debug!(item = %item.name, "hidden item revealed");
                location.put_item(item);
            }
            return Ok(text);
        }
        if let Some(i) = resolve(&location.items, target) {
            return Ok(location.items[i].full_description());
        }
        if let Some(i) = resolve(&location.npcs, target) {
            let npc = &location.npcs[i];
            return Ok(format!("{}: {}", npc.name, npc.description));
        }
        if let Some(i) = self.player.find_item(target) {
            return Ok(self.player.inventory()[i].full_description());
        }
        Ok(format!("You examine the {target} carefully. Nothing special."))
    }

    pub(super) fn do_status(&self) -> FictionResult<String> {
        let world = self.world()?;
        let player = &self.player;
        let mut text = format!(
            "Status:\n  Name: {}\n  Health: {}/{}\n  Damage Bonus: +{}\n  Armor: {}\n  \
             Experience: {}\n  Turns: {}\n  Location: {}",
            player.name,
            player.health(),
            player.max_health(),
            player.total_damage_bonus(),
            player.total_armor(),
            player.experience(),
            self.turn_count,
            world.map.current().name,
        );
        if self.state == GameState::InCombat {
            if let Some(enemy) = self.combat.as_ref().and_then(|c| c.enemy()) {
                text.push_str(&format!(
                    "\n  Fighting: {} ({}/{})",
                    enemy.name, enemy.health, enemy.max_health
                ));
            }
        }
        Ok(text)
    }

    pub(super) fn do_story(&self) -> FictionResult<String> {
        let story = &self.world()?.story;
        let keywords = if story.keywords.is_empty() {
            "none".to_string()
        } else {
            story.keywords.join(", ")
        };
        let mut text = format!(
            "Story: {}\nGoal: {}\nWin condition: {}\nKeywords: {}\nProgress: {}/{}",
            story.title,
            story.goal,
            story.win_condition(),
            keywords,
            story.progress(),
            story.steps.len(),
        );
        match story.current_step() {
            Some(step) => {
                text.push_str(&format!(
                    "\nCurrent Progress: {}: {}",
                    step.title, step.description
                ));
            }
            None => text.push_str(&format!("\nCurrent Progress: {}.", story.win_condition())),
        }
        if !self.player.clues().is_empty() {
            text.push_str("\nClues:");
            for clue in self.player.clues() {
                text.push_str(&format!("\n  - {clue}"));
            }
        }
        Ok(text)
    }
}
