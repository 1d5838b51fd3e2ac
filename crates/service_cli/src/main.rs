//! shuffle-sort CLI - Seeded Shuffling and Bubble Sorting
//!
//! Command-line front end for the `shuffle_sort` library.
//!
//! # Commands
//!
//! - `shuffle-sort demo` - Shuffle and sort the standard integer and people lists
//! - `shuffle-sort shuffle --values 5,2,8` - Shuffle a list of integers
//! - `shuffle-sort sort --values 5,2,8` - Bubble-sort a list of integers
//! - `shuffle-sort check` - Validate configuration and run generator self-checks
//!
//! # Configuration
//!
//! Settings come from `--config` (default `shuffle-sort.toml`, optional),
//! then `SHUFFLE_SORT_*` environment variables, then command-line flags.
//! A `--config` file that does not exist falls back to defaults with a warning.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

use config::{CliConfig, OutputFormat};
pub use error::{CliError, Result};

/// Seeded shuffle and stable bubble sort
#[derive(Parser)]
#[command(name = "shuffle-sort")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path [default: shuffle-sort.toml]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json); overrides the configuration
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shuffle and sort the standard integer and people lists
    Demo {
        /// Seed for the integer shuffle
        #[arg(short, long, allow_hyphen_values = true)]
        seed: Option<i64>,

        /// Seed for the people shuffle
        #[arg(short, long, allow_hyphen_values = true)]
        people_seed: Option<i64>,
    },

    /// Shuffle a comma-separated list of integers
    Shuffle {
        /// Values to shuffle (e.g., 5,2,8,1)
        #[arg(long, allow_hyphen_values = true)]
        values: String,

        /// Generator seed
        #[arg(short, long, allow_hyphen_values = true)]
        seed: Option<i64>,
    },

    /// Bubble-sort a comma-separated list of integers
    Sort {
        /// Values to sort (e.g., 5,2,8,1)
        #[arg(long, allow_hyphen_values = true)]
        values: String,

        /// Sort in descending order
        #[arg(short, long)]
        descending: bool,
    },

    /// Check configuration and generator determinism
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_deref()
        .unwrap_or(Path::new(config::DEFAULT_CONFIG_PATH));
    let config = CliConfig::load_with_env_and_validate(config_path)?;
    init_tracing(&config, cli.verbose);

    if let Some(path) = config::missing_explicit_path(cli.config.as_deref()) {
        warn!("Config file {} not found; using defaults", path.display());
    }

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!("Effective configuration: {:?}", config);

    let format = match cli.format.as_deref() {
        Some(raw) => raw
            .parse::<OutputFormat>()
            .map_err(|e| CliError::invalid_argument(e.to_string()))?,
        None => config.format,
    };

    match cli.command {
        Commands::Demo { seed, people_seed } => commands::demo::run(
            seed.unwrap_or(config.default_seed),
            people_seed.unwrap_or(config.people_seed),
            format,
        ),
        Commands::Shuffle { values, seed } => {
            commands::shuffle::run(&values, seed.unwrap_or(config.default_seed), format)
        }
        Commands::Sort { values, descending } => commands::sort::run(&values, descending, format),
        Commands::Check => commands::check::run(&config),
    }
}

/// `RUST_LOG` wins; otherwise the configured level, raised to debug by `--verbose`.
fn init_tracing(config: &CliConfig, verbose: bool) {
    let level = if verbose {
        "debug".to_string()
    } else {
        config.log_level.to_lowercase()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_shuffle_with_negative_seed() {
        let cli = Cli::try_parse_from([
            "shuffle-sort",
            "shuffle",
            "--values",
            "3,-1,2",
            "--seed",
            "-5",
        ])
        .unwrap();
        match cli.command {
            Commands::Shuffle { values, seed } => {
                assert_eq!(values, "3,-1,2");
                assert_eq!(seed, Some(-5));
            }
            _ => panic!("Expected shuffle command"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "shuffle-sort",
            "sort",
            "--values",
            "1",
            "-d",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format.as_deref(), Some("json"));
        assert!(matches!(cli.command, Commands::Sort { descending: true, .. }));
    }

    #[test]
    fn test_config_flag_is_optional() {
        let cli = Cli::try_parse_from(["shuffle-sort", "check"]).unwrap();
        assert_eq!(cli.config, None);

        let cli = Cli::try_parse_from(["shuffle-sort", "check", "-c", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
