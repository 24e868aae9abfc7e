//! `cloplib`: inspect operation types, special-type data and configuration.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use cloplib_config::{CliArgs, Config, default_config_dir};

mod commands;
mod error;

use commands::{classify, show_config, tools, types};
use error::CliError;

#[derive(Parser)]
#[command(name = "cloplib")]
#[command(about = "Inspect claim-protection operation types and classification data")]
struct Cli {
    #[command(flatten)]
    args: CliArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in operation types and their default visibility
    Types {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report how material or mob ids are classified
    Classify {
        /// Material or mob ids, e.g. `minecraft:wheat`
        #[arg(required = true)]
        ids: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the inspection tools listed in the config
    Tools,
    /// Print the effective configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    let config_dir = match &cli.args.config {
        Some(dir) => dir.clone(),
        None => default_config_dir().unwrap_or_else(|| PathBuf::from(".")),
    };

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&cli.args);

    let log_dir = match &config.debug.log_dir {
        Some(dir) => dir.clone(),
        None => config_dir.join("logs"),
    };
    let debug_build = cfg!(debug_assertions);
    if let Err(e) = cloplib_log::init_logging(Some(&log_dir), debug_build, Some(&config)) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let result = match config.validate() {
        Ok(()) => run(cli.command, &config, &config_dir),
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands, config: &Config, config_dir: &Path) -> Result<(), CliError> {
    match command {
        Commands::Types { json } => types::run(json),
        Commands::Classify { ids, json } => classify::run(config, &ids, json),
        Commands::Tools => tools::run(config),
        Commands::Config => show_config::run(config, config_dir),
    }
}
