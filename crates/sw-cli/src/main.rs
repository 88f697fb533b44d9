//! Line-mode shell for the Sagenweber text-adventure engine.

mod art;
mod commands;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "sagenweber",
    about = "Sagenweber - a procedurally generated text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an adventure (the default)
    Play(PlayArgs),

    /// Generate a world and print it without playing
    Generate {
        /// Genre: fantasy, scifi, detective, horror
        #[arg(short, long, default_value = "fantasy")]
        genre: String,

        /// Comma-separated story keywords
        #[arg(short, long, value_delimiter = ',')]
        keywords: Vec<String>,

        /// RNG seed for a reproducible world
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of locations (at least 2)
        #[arg(short, long, default_value = "5")]
        locations: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: DumpFormat,
    },
}

/// Options for a play session. Missing name, genre or keywords are asked for.
#[derive(clap::Args, Default)]
struct PlayArgs {
    /// Your character's name
    #[arg(short, long)]
    name: Option<String>,

    /// Genre: fantasy, scifi, detective, horror
    #[arg(short, long)]
    genre: Option<String>,

    /// Comma-separated story keywords
    #[arg(short, long, value_delimiter = ',')]
    keywords: Option<Vec<String>>,

    /// Disable random encounters
    #[arg(long)]
    no_encounters: bool,

    /// RNG seed for a reproducible game
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of locations (at least 2)
    #[arg(short, long, default_value = "5")]
    locations: usize,

    /// Maximum number of carried items
    #[arg(long)]
    capacity: Option<usize>,
}

/// Output formats for `generate`.
#[derive(Clone, Copy, ValueEnum)]
enum DumpFormat {
    Text,
    Json,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Some(Commands::Play(args)) => commands::play::run(args),
        None => commands::play::run(PlayArgs {
            locations: 5,
            ..PlayArgs::default()
        }),
        Some(Commands::Generate {
            genre,
            keywords,
            seed,
            locations,
            format,
        }) => commands::generate::run(&genre, &keywords, seed, locations, format),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
