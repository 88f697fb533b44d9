//! The interactive play loop.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use sw_fiction::{GameConfig, GameController, GameState};

use crate::PlayArgs;
use crate::art;

const GENRES: &[&str] = &["fantasy", "scifi", "detective", "horror"];

/// Run one game on stdin/stdout until it ends, the player quits, or input runs out.
pub fn run(args: PlayArgs) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    println!("{}", art::banner().cyan());

    let name = match args.name {
        Some(name) => name,
        None => ask(&mut reader, "What is your name, adventurer?")?,
    };
    let genre = match args.genre {
        Some(genre) => genre,
        None => ask(
            &mut reader,
            &format!("Choose your adventure type ({}):", GENRES.join(", ")),
        )?,
    };
    let keywords = match args.keywords {
        Some(keywords) => keywords,
        None => ask(&mut reader, "Enter story keywords (comma-separated):")?
            .split(',')
            .map(str::to_string)
            .collect(),
    };

    let mut config = GameConfig::default()
        .with_player_name(name)
        .with_keywords(keywords)
        .with_encounters(!args.no_encounters)
        .with_location_count(args.locations)
        .with_inventory_capacity(args.capacity);
    if !genre.trim().is_empty() {
        config = config.with_genre(genre.trim().to_lowercase());
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let (mut game, intro) =
        GameController::start(config).map_err(|e| format!("failed to start game: {e}"))?;
    tracing::debug!(seed = ?args.seed, locations = args.locations, "session started");

    println!();
    if let Some(art) = game.map().and_then(|m| art::location(&m.current().name)) {
        println!("{art}");
    }
    println!("{intro}");
    let encounters = if game.encounters_enabled() {
        "Enabled"
    } else {
        "Disabled"
    };
    println!("Combat Encounters: {encounters}\n");

    let mut line = String::new();
    loop {
        print!("{} ", ">".bold());
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            println!("Thanks for playing!");
            break;
        }

        let location_before = game.map().map(|m| m.current_index());
        let state_before = game.state();
        let response = game.process_command(input).map_err(|e| e.to_string())?;

        if game.map().map(|m| m.current_index()) != location_before {
            if let Some(art) = game.map().and_then(|m| art::location(&m.current().name)) {
                println!("{art}");
            }
        }
        if state_before != GameState::InCombat && game.state() == GameState::InCombat {
            let enemy = game.combat().and_then(|c| c.enemy());
            if let Some(art) = enemy.and_then(|e| art::creature(&e.name)) {
                println!("{}", art.red());
            }
        }
        println!("{response}\n");

        if !game.is_running() {
            print_summary(&game);
            break;
        }
    }

    Ok(())
}

fn ask(reader: &mut impl BufRead, prompt: &str) -> Result<String, String> {
    print!("{prompt} ");
    io::stdout().flush().map_err(|e| e.to_string())?;
    let mut answer = String::new();
    reader.read_line(&mut answer).map_err(|e| e.to_string())?;
    Ok(answer.trim().to_string())
}

fn print_summary(game: &GameController) {
    match game.state() {
        GameState::Victory => println!("{}", "*** VICTORY ***".green().bold()),
        GameState::Defeat => println!("{}", "*** GAME OVER ***".red().bold()),
        _ => return,
    }
    let player = game.player();
    let visited = game
        .map()
        .map_or(0, |m| m.locations().iter().filter(|l| l.visited).count());
    println!("Final Stats:");
    println!("  Turns: {}", game.turn_count());
    println!("  Health: {}/{}", player.health(), player.max_health());
    println!("  Experience: {}", player.experience());
    println!("  Locations: {visited}");
}
