//! Kinship CLI - Command-line interface for Kinship
//!
//! Loads a family snapshot and answers relationship questions about it.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "kinship")]
#[command(author = "Kinship Contributors")]
#[command(version)]
#[command(about = "Compute how two people in a family tree are related", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Snapshot file with people and relationships
    #[arg(short, long, global = true, default_value = "family.json")]
    snapshot: PathBuf,

    /// Engine config file (defaults to .kinship/config.json, then the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default engine config to .kinship/config.json
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show snapshot statistics
    Stats {
        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show how <TO> is related to <FROM>
    Relate {
        /// Person id or name asking
        from: String,

        /// Person id or name being described
        to: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show the shortest chain of people joining two people
    Path {
        from: String,
        to: String,

        /// Maximum hops to search (defaults to the configured path depth)
        #[arg(short, long)]
        depth: Option<usize>,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List everyone who stands in one relationship to a person
    Relatives {
        person: String,

        /// Relationship type, e.g. COUSIN, grandmother, step-brother
        kind: String,

        /// Maximum results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Compute the relationship between every pair of the given people
    Matrix {
        #[arg(required = true, num_args = 2..)]
        people: Vec<String>,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Count a person's relatives by kind
    Counts {
        person: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let source = commands::Source {
        snapshot: cli.snapshot,
        config: cli.config,
    };

    let result = match cli.command {
        Commands::Init { path } => commands::init(&path),
        Commands::Stats { json } => commands::stats(&source, json),
        Commands::Relate { from, to, json } => commands::relate(&source, &from, &to, json),
        Commands::Path {
            from,
            to,
            depth,
            json,
        } => commands::path(&source, &from, &to, depth, json),
        Commands::Relatives {
            person,
            kind,
            limit,
            json,
        } => commands::relatives(&source, &person, &kind, limit, json),
        Commands::Matrix { people, json } => commands::matrix(&source, &people, json),
        Commands::Counts { person, json } => commands::counts(&source, &person, json),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
