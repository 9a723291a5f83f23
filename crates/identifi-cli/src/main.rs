//! Identifi CLI: inspect identity records and render their widgets.
//!
//! Subcommands: init, inspect, card, identicon, search.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use identifi_core::IdentifiConfig;

/// Identifi: decentralized identity profile cards.
#[derive(Parser, Debug)]
#[command(name = "identifi", version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, global = true, default_value = "identifi.toml")]
    config: PathBuf,

    /// Override the configured log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default configuration file.
    Init(commands::init::InitArgs),
    /// Print the normalized state of an identity record.
    Inspect(commands::inspect::InspectArgs),
    /// Render a profile card.
    Card(commands::card::CardArgs),
    /// Render a trust identicon.
    Identicon(commands::identicon::IdenticonArgs),
    /// Search a file of identity records and render the result list.
    Search(commands::search::SearchArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.command {
        Commands::Init(_) => IdentifiConfig::default(),
        _ => IdentifiConfig::load(&cli.config)?,
    };

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Init(args) => commands::init::run(args, &cli.config),
        Commands::Inspect(args) => commands::inspect::run(args, &config),
        Commands::Card(args) => commands::card::run(args, &config),
        Commands::Identicon(args) => commands::identicon::run(args, &config),
        Commands::Search(args) => commands::search::run(args, &config).await,
    }
}
