//! Print a generated world without playing it.

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sw_core::Lock;
use sw_worldgen::{GeneratedWorld, GenerationConfig, WorldGenerator};

use crate::DumpFormat;

pub fn run(
    genre: &str,
    keywords: &[String],
    seed: Option<u64>,
    locations: usize,
    format: DumpFormat,
) -> Result<(), String> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let keywords: Vec<String> = keywords
        .iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();

    let generator = WorldGenerator::new(GenerationConfig::default().with_location_count(locations));
    let world = generator
        .generate(genre, &keywords, &mut rng)
        .map_err(|e| format!("generation failed: {e}"))?;

    match format {
        DumpFormat::Json => {
            let json = serde_json::to_string_pretty(&world)
                .map_err(|e| format!("failed to serialize world: {e}"))?;
            println!("{json}");
        }
        DumpFormat::Text => print_text(&world),
    }
    Ok(())
}

fn print_text(world: &GeneratedWorld) {
    let story = &world.story;
    println!("{}", story.title.bold());
    println!("  Genre: {}", story.genre);
    println!("  Goal: {}", story.goal);
    println!("  Win condition: {}", story.win_condition());
    if !story.keywords.is_empty() {
        println!("  Keywords: {}", story.keywords.join(", "));
    }

    println!("\n{}", "Locations".bold());
    for (i, location) in world.map.locations().iter().enumerate() {
        print!("  {}. {}", i + 1, location.name);
        match &location.lock {
            Some(Lock::RequiresItem(item)) => print!(" [needs {item}]"),
            Some(Lock::RequiresStep(step)) => print!(" [needs {step}]"),
            None => {}
        }
        println!();
        for connection in location.connections.values() {
            println!("       {} -> {}", connection.direction, connection.destination);
        }
        for item in &location.items {
            println!("       item: {}", item.full_description());
        }
        for npc in &location.npcs {
            println!("       npc: {} ({})", npc.name, npc.description);
        }
        for fixture in &location.fixtures {
            let hidden = fixture
                .hidden_item
                .as_ref()
                .map(|item| format!(", hides {}", item.name))
                .unwrap_or_default();
            println!("       fixture: {}{hidden}", fixture.name);
        }
    }

    println!("\n{}", "Story steps".bold());
    for step in &story.steps {
        println!("  {}: {} - {}", step.id, step.title, step.description);
    }

    println!("\n{}", "Starting items".bold());
    for item in &world.starting_items {
        println!("  {}", item.full_description());
    }
}
