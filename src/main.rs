use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use wordhint::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "wordhint")]
#[command(about = "Dictionary hover hints with a persistent definition cache")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.wordhint/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a word and print its definition as markdown
    Lookup {
        /// The word to look up (case is ignored)
        word: String,

        /// Provider id to use instead of the configured default
        #[arg(long)]
        provider: Option<String>,
    },

    /// Clear the definition cache
    ClearCache {
        /// Provider id whose cache to clear (defaults to the configured
        /// provider)
        #[arg(long)]
        provider: Option<String>,

        /// Also delete the backing cache file from disk
        #[arg(long)]
        disk: bool,
    },

    /// Initialize a new ~/.wordhint/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Lookup { word, provider } => {
            cli::lookup::lookup_command(config, &word, provider).await?;
        }
        Commands::ClearCache { provider, disk } => {
            cli::cache::clear_cache_command(config, provider, disk).await?;
        }
        Commands::Init { force } => {
            cli::init::init_command(force)?;
        }
    }

    Ok(())
}
