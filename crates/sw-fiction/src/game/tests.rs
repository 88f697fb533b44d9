use super::*;
use proptest::prelude::*;
use sw_core::{Fixture, Genre, Item, Lock};
use sw_mechanics::{Combatant, Enemy};
use sw_worldgen::NpcCatalog;

fn config() -> GameConfig {
    GameConfig::default()
        .with_player_name("Aria")
        .with_keywords(["dragons"])
        .with_encounters(false)
        .with_seed(7)
}

fn started(config: GameConfig) -> GameController {
    GameController::start(config).unwrap().0
}

fn send(game: &mut GameController, input: &str) -> String {
    game.process_command(input).unwrap()
}

fn world(game: &mut GameController) -> &mut World {
    game.world.as_mut().unwrap()
}

#[test]
fn commands_before_initialize_are_rejected() {
    let mut game = GameController::new(config());
    assert_eq!(game.state(), GameState::Starting);
    assert!(!game.is_running());
    assert_eq!(send(&mut game, "look"), "The adventure has not begun yet.");
    assert_eq!(game.state(), GameState::Starting);
}

#[test]
fn start_sets_up_an_exploring_game() {
    let (game, intro) = GameController::start(config()).unwrap();
    let story = game.story().unwrap();
    assert!(intro.starts_with(&story.title));
    assert!(intro.contains("You are Aria."));
    assert!(intro.contains("You arrive at Dark Forest."));
    assert!(intro.contains("Type 'help'"));

    assert_eq!(game.state(), GameState::Exploring);
    assert!(game.is_running());
    assert!(game.combat().is_none());
    assert_eq!(game.turn_count(), 0);
    assert_eq!(game.map().unwrap().len(), 5);
    assert_eq!(story.progress(), 1);

    let names: Vec<&str> = game
        .player()
        .inventory()
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(names, ["Backpack", "Map", "Iron Sword", "Health Potion"]);
}

#[test]
fn walking_the_ring_returns_to_start() {
    let mut game = started(config());
    let mut last = String::new();
    for _ in 0..5 {
        last = send(&mut game, "go north");
    }
    assert!(last.contains("You're back at Dark Forest."), "{last}");
    assert_eq!(game.map().unwrap().current_index(), 0);
    assert_eq!(game.story().unwrap().progress(), 5);
    assert!(game.map().unwrap().locations().iter().all(|l| l.visited));
}

#[test]
fn first_visit_completes_story_steps() {
    let mut game = started(config());
    let transition = game.map().unwrap().current().connections["north"].transition.clone();
    assert_eq!(transition, "You travel north to Ancient Temple.");
    let text = send(&mut game, "n");
    assert!(
        text.starts_with(&format!("{transition}\nYou arrive at Ancient Temple.")),
        "{text}"
    );
    assert!(text.contains("Story progress: Investigate Ancient Temple."));
    assert_eq!(game.story().unwrap().progress(), 2);
}

#[test]
fn missing_exit_is_reported() {
    let mut game = started(config());
    assert_eq!(send(&mut game, "go south"), "You can't go south from here.");
    assert_eq!(game.map().unwrap().current_index(), 0);
}

#[test]
fn item_locks_need_the_item() {
    let mut game = started(config());
    world(&mut game).map.locations_mut()[1].lock = Some(Lock::RequiresItem("Brass Key".into()));

    assert_eq!(
        send(&mut game, "go north"),
        "You can't go that way. The path is blocked. You need the Brass Key."
    );
    assert_eq!(game.map().unwrap().current_index(), 0);
    assert!(send(&mut game, "look").contains("There are no open exits."));

    game.player
        .add_item(Item::key("Brass Key", "Opens a gate"))
        .unwrap();
    assert!(send(&mut game, "look").contains("Exits: north"));
    let text = send(&mut game, "go north");
    assert!(text.starts_with(
        "You use the Brass Key to open the way.\n\
         You travel north to Ancient Temple.\n\
         You arrive at Ancient Temple."
    ));
    assert_eq!(game.map().unwrap().current_index(), 1);
}

#[test]
fn step_locks_name_the_missing_step() {
    let mut game = started(config());
    world(&mut game).map.locations_mut()[1].lock = Some(Lock::RequiresStep("step_3".into()));

    assert_eq!(
        send(&mut game, "go north"),
        "You can't go that way. You must first complete: Investigate Cursed Village."
    );
    assert_eq!(game.map().unwrap().current_index(), 0);

    world(&mut game).story.complete_all();
    let text = send(&mut game, "go north");
    assert!(text.starts_with("The way opens.\nYou travel north to Ancient Temple."), "{text}");
}

#[test]
fn look_does_not_change_state() {
    let mut game = started(config());
    world(&mut game)
        .map
        .current_mut()
        .put_item(Item::weapon("Silver Axe", "Shiny", 12));

    let first = send(&mut game, "look");
    let map_before = game.map().unwrap().clone();
    let player_before = game.player().clone();
    let second = send(&mut game, "look");

    assert_eq!(first, second);
    assert!(first.starts_with("== Dark Forest =="));
    assert!(first.contains("Items here:\n  - Silver Axe"));
    assert_eq!(game.map().unwrap(), &map_before);
    assert_eq!(game.player(), &player_before);
}

#[test]
fn take_and_drop_round_trip() {
    let mut game = started(config());
    assert_eq!(send(&mut game, "take axe"), "There's nothing to take here.");

    let axe = Item::weapon("Silver Axe", "Shiny", 12);
    world(&mut game).map.current_mut().put_item(axe.clone());
    assert_eq!(send(&mut game, "take banana"), "There's no banana here.");
    assert_eq!(send(&mut game, "take the silver axe"), "You took the Silver Axe.");
    assert!(game.map().unwrap().current().items.is_empty());
    assert!(game.player().has_item("Silver Axe"));

    assert_eq!(send(&mut game, "drop silver axe"), "You dropped the Silver Axe.");
    assert_eq!(game.map().unwrap().current().items, vec![axe]);
    assert!(!game.player().has_item("Silver Axe"));
    assert_eq!(send(&mut game, "drop silver axe"), "You don't have a silver axe.");
}

#[test]
fn full_inventory_leaves_item_on_ground() {
    let mut game = started(config().with_inventory_capacity(Some(4)));
    world(&mut game)
        .map
        .current_mut()
        .put_item(Item::weapon("Silver Axe", "Shiny", 12));
    assert_eq!(
        send(&mut game, "take silver axe"),
        "Your inventory is full (4 items)."
    );
    assert_eq!(game.map().unwrap().current().items.len(), 1);
    assert_eq!(game.player().inventory().len(), 4);
}

#[test]
fn full_inventory_reports_the_capacity() {
    let mut game = started(config().with_inventory_capacity(Some(2)));
    world(&mut game)
        .map
        .current_mut()
        .put_item(Item::weapon("Silver Axe", "Shiny", 12));
    assert_eq!(game.player().inventory().len(), 4);
    assert_eq!(
        send(&mut game, "take silver axe"),
        "Your inventory is full (2 items)."
    );
}

#[test]
fn equipment_shows_in_status() {
    let mut game = started(config());
    assert!(send(&mut game, "status").contains("Damage Bonus: +0"));
    assert_eq!(send(&mut game, "equip iron sword"), "You equipped Iron Sword.");

    let status = send(&mut game, "status");
    assert!(status.contains("Name: Aria"));
    assert!(status.contains("Health: 100/100"));
    assert!(status.contains("Damage Bonus: +15"));
    assert!(status.contains("Location: Dark Forest"));
    assert!(send(&mut game, "inventory").contains("Equipped weapon: Iron Sword"));

    assert_eq!(send(&mut game, "equip map"), "You can't equip the Map.");
    assert_eq!(send(&mut game, "unequip iron sword"), "You unequipped Iron Sword.");
    assert_eq!(send(&mut game, "unequip iron sword"), "You don't have that equipped.");

    send(&mut game, "equip iron sword");
    assert_eq!(send(&mut game, "unequip iron swrd"), "You unequipped Iron Sword.");
}

#[test]
fn using_a_potion_heals_and_consumes_it() {
    let mut game = started(config());
    game.player.take_damage(50);
    assert_eq!(
        send(&mut game, "use health potion"),
        "You used Health Potion. Restored 30 HP."
    );
    assert_eq!(game.player().health(), 80);
    assert!(!game.player().has_item("Health Potion"));
    assert_eq!(send(&mut game, "use map"), "You can't use the Map right now.");
}

#[test]
fn conversations_give_items_once() {
    let mut game = started(config());
    assert_eq!(send(&mut game, "say 1"), "You're not talking to anyone.");

    let wizard = NpcCatalog::new(Genre::Fantasy).npcs().remove(0);
    world(&mut game).map.current_mut().npcs.push(wizard);

    let greeting = send(&mut game, "talk to wise wizard");
    assert!(greeting.starts_with("Wise Wizard: \"Greetings, traveler."));
    assert!(greeting.contains("1. What's happening here?"));
    assert!(greeting.contains("2. Can you help me?"));

    let reply = send(&mut game, "say 2");
    assert!(reply.contains("Wise Wizard gives you the Magic Scroll."));
    send(&mut game, "say 2");
    let scrolls = game
        .player()
        .inventory()
        .iter()
        .filter(|item| item.name == "Magic Scroll")
        .count();
    assert_eq!(scrolls, 1);

    assert!(send(&mut game, "say 1").contains("You learned: The enemy's weakness"));
    assert_eq!(game.player().clues().len(), 1);
    assert_eq!(send(&mut game, "say 9"), "Invalid choice.");
    assert_eq!(send(&mut game, "say hello"), "Invalid choice.");
    assert!(send(&mut game, "story").contains("Clues:\n  - The enemy's weakness"));
}

#[test]
fn hostile_npcs_refuse_to_talk() {
    let mut game = started(config());
    let mut npc = NpcCatalog::new(Genre::Fantasy).npcs().remove(1);
    npc.hostile = true;
    world(&mut game).map.current_mut().npcs.push(npc);
    assert_eq!(
        send(&mut game, "talk brave knight"),
        "The Brave Knight is hostile and won't talk to you."
    );
    assert_eq!(send(&mut game, "talk ghost"), "There's no ghost here.");
}

#[test]
fn inspecting_a_fixture_reveals_its_item_once() {
    let mut game = started(config());
    world(&mut game).map.current_mut().fixtures.push(
        Fixture::new("wooden chest", "A large wooden chest.")
            .with_hidden_item(Item::healing("Health Potion", "Restores 30 HP", 30)),
    );

    let text = send(&mut game, "inspect wooden chest");
    assert!(text.starts_with("A large wooden chest."));
    assert!(text.contains("Inside, you find a Health Potion."));
    assert_eq!(game.map().unwrap().current().items.len(), 1);

    assert_eq!(send(&mut game, "examine wooden chest"), "A large wooden chest.");
    assert_eq!(game.map().unwrap().current().items.len(), 1);
    assert_eq!(
        send(&mut game, "inspect moon"),
        "You examine the moon carefully. Nothing special."
    );
}

#[test]
fn combat_verbs_need_a_fight() {
    let mut game = started(config());
    for verb in ["attack", "defend", "heal", "flee"] {
        assert_eq!(send(&mut game, verb), "You're not in combat.");
    }
    assert_eq!(game.state(), GameState::Exploring);
}

#[test]
fn moving_can_trigger_an_encounter() {
    let cfg = config().with_encounters(true).with_encounter_chance(1.0);
    let mut game = started(cfg);
    let text = send(&mut game, "go north");
    assert!(text.contains("An enemy appears!"), "{text}");
    assert!(text.contains("Actions:\n  attack - Attack the enemy"));
    assert!(text.contains("heal health potion - Use Health Potion (30 HP)"));
    assert_eq!(game.state(), GameState::InCombat);
    assert!(game.combat().unwrap().is_active());

    // Only combat commands and a few read-only ones work now.
    assert_eq!(
        send(&mut game, "go north"),
        "You can't do that in the middle of a fight!"
    );
    assert_eq!(game.map().unwrap().current_index(), 1);
    assert!(send(&mut game, "status").contains("Fighting: "));
}

#[test]
fn regular_enemy_can_be_beaten() {
    let mut game = started(config());
    send(&mut game, "look");
    game.start_encounter(Enemy::new("Goblin", 30, 8, 2)).unwrap();
    assert_eq!(game.state(), GameState::InCombat);

    let mut last = String::new();
    for _ in 0..30 {
        last = send(&mut game, "attack");
        if game.state() != GameState::InCombat {
            break;
        }
    }
    assert_eq!(game.state(), GameState::Exploring);
    assert!(game.combat().is_none());
    assert!(last.contains("VICTORY! You defeated the Goblin!"));
    assert!(last.contains("experience points!"));
    assert!((10..=50).contains(&game.player().experience()));
}

#[test]
fn healing_in_combat_uses_a_potion() {
    let mut game = started(config());
    game.player.take_damage(60);
    game.start_encounter(Enemy::new("Goblin", 30, 8, 2)).unwrap();

    let text = send(&mut game, "heal");
    assert!(text.contains("You use a healing item! Restored 30 HP."));
    assert!(!game.player().has_item("Health Potion"));
    assert_eq!(send(&mut game, "heal"), "You have no healing items.");
    assert_eq!(send(&mut game, "heal map"), "You can't use the Map right now.");
    assert_eq!(game.state(), GameState::InCombat);
}

#[test]
fn fleeing_ends_the_encounter() {
    let mut game = started(config());
    game.start_encounter(Enemy::new("Goblin", 30, 8, 2)).unwrap();
    for _ in 0..10 {
        send(&mut game, "flee");
        if game.state() != GameState::InCombat {
            break;
        }
    }
    assert_eq!(game.state(), GameState::Exploring);
    assert!(game.combat().is_none());
    assert!(game.player().is_alive());
}

#[test]
fn defeating_the_boss_wins_the_game() {
    let mut game = started(config());
    send(&mut game, "equip iron sword");
    let boss = game.story().unwrap().antagonist.clone();
    game.start_encounter(Enemy::boss(boss.clone(), 80, 15, 5))
        .unwrap();

    let mut last = String::new();
    for _ in 0..10 {
        last = send(&mut game, "attack");
        if game.state() != GameState::InCombat {
            break;
        }
    }
    assert_eq!(game.state(), GameState::Victory);
    assert!(!game.is_running());
    assert!(game.combat().is_none());
    assert!(game.story().unwrap().is_complete());
    assert!(last.contains(&format!("YOU HAVE DEFEATED THE {}!", boss.to_uppercase())));

    assert_eq!(send(&mut game, "look"), "The adventure is over.");
}

#[test]
fn losing_all_health_is_defeat() {
    let mut game = started(config());
    game.start_encounter(Enemy::new("Ogre", 500, 200, 0)).unwrap();
    let text = send(&mut game, "defend");
    assert!(text.contains("DEFEAT! You were defeated."));
    assert_eq!(game.state(), GameState::Defeat);
    assert!(game.combat().is_none());
    assert_eq!(game.player().health(), 0);
    assert_eq!(send(&mut game, "attack"), "The adventure is over.");
}

#[test]
fn bad_input_still_counts_as_a_turn() {
    let mut game = started(config());
    assert_eq!(send(&mut game, "   "), "Please enter a command.");
    assert!(send(&mut game, "xyzzy").starts_with("Unknown command. Type 'help' for commands."));
    assert_eq!(send(&mut game, "go"), "Go where?");
    assert_eq!(game.turn_count(), 3);
    assert_eq!(game.state(), GameState::Exploring);
    assert!(send(&mut game, "status").contains("Turns: 4"));
}

#[test]
fn help_lists_every_command() {
    let mut game = started(config());
    let help = send(&mut game, "help");
    for usage in ["look", "go <direction>", "talk <npc>", "heal [item]", "flee"] {
        assert!(help.contains(usage), "missing {usage}");
    }
}

#[test]
fn story_summary() {
    let mut game = started(config());
    let text = send(&mut game, "story");
    let story = game.story().unwrap();
    assert!(text.starts_with(&format!("Story: {}", story.title)));
    assert!(text.contains("Keywords: dragons"));
    assert!(text.contains("Progress: 1/5"));
    assert!(text.contains("Current Progress: Investigate Ancient Temple"));
}

#[test]
fn reinitializing_discards_the_old_game() {
    let mut game = started(config());
    send(&mut game, "go north");
    send(&mut game, "drop map");
    let intro = game.initialize("horror", &[], false).unwrap();
    assert!(intro.contains("You arrive at Haunted Mansion."));
    assert_eq!(game.turn_count(), 0);
    assert_eq!(game.map().unwrap().current_index(), 0);
    assert!(game.player().has_item("Map"));
    assert_eq!(game.story().unwrap().genre, Genre::Horror);
}

const SCRIPT: &[&str] = &[
    "go north",
    "attack",
    "attack",
    "defend",
    "flee",
    "heal",
    "look",
    "take health potion",
    "equip iron sword",
    "status",
    "inventory",
    "use health potion",
    "talk wise wizard",
    "say 2",
    "inspect wooden chest",
    "drop map",
    "story",
    "xyzzy",
    "",
];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn state_invariants_hold(seed in any::<u64>(), moves in prop::collection::vec(0..SCRIPT.len(), 1..80)) {
        let cfg = config()
            .with_seed(seed)
            .with_encounters(true)
            .with_encounter_chance(0.5)
            .with_boss(10, 0.5);
        let mut game = started(cfg);
        for i in moves {
            let result = game.process_command(SCRIPT[i]);
            prop_assert!(result.is_ok());

            let player = game.player();
            prop_assert!(player.health() <= player.max_health());
            let fighting = game.combat().is_some_and(CombatResolver::is_active);
            prop_assert_eq!(game.state() == GameState::InCombat, fighting);
            if matches!(game.state(), GameState::Victory | GameState::Defeat) {
                prop_assert!(game.combat().is_none());
            }
            if game.state() == GameState::Defeat {
                prop_assert_eq!(player.health(), 0);
            }
        }
    }
}
