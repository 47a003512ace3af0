//! Pedigree planner command line.
//!
//! Evaluates saved ancestry trees and rebuilds the static tables from vendor
//! dumps. Run with: `pedigree <command>`

mod commands;
mod config;
mod dirs;
mod logging;

use anyhow::Result;
use clap::Parser;
use commands::{Affinity, BuildAffinity, BuildCharacters, Inspiration};
use config::CliConfig;

/// Pedigree planner tools
#[derive(Parser)]
#[command(name = "pedigree")]
#[command(about = "Affinity and inspiration planner for pedigree trees", long_about = None)]
#[command(version)]
struct Cli {
    /// Data directory holding affinity.json, characters.json and config.toml
    #[arg(short, long, global = true, value_name = "DIR")]
    data_dir: Option<std::path::PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show the affinity breakdown of a tree slot
    Affinity(Affinity),

    /// List inspiration chances for a tree slot
    Inspiration(Inspiration),

    /// Build affinity.json from relation dumps
    BuildAffinity(BuildAffinity),

    /// Build characters.json from text and card dumps
    BuildCharacters(BuildCharacters),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for PEDIGREE_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let config = CliConfig::from_env().with_data_dir(cli.data_dir)?;
    tracing::debug!(data_dir = %config.data_dir.display(), "resolved data directory");

    match cli.command {
        Command::Affinity(cmd) => cmd.execute(&config),
        Command::Inspiration(cmd) => cmd.execute(&config),
        Command::BuildAffinity(cmd) => cmd.execute(&config),
        Command::BuildCharacters(cmd) => cmd.execute(&config),
    }
}
