//! Command-line overrides shared by cloplib tools.

use std::path::PathBuf;

use clap::Args;

use crate::Config;

/// Arguments that override settings loaded from `config.ron`.
///
/// Flattened into a tool's own clap parser.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Inspection raycast distance in blocks.
    #[arg(long, global = true)]
    pub inspection_distance: Option<u32>,

    /// Special-types YAML file replacing the bundled lists.
    #[arg(long, global = true)]
    pub special_types: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(distance) = args.inspection_distance {
            self.listener.inspection_distance = distance;
        }
        if let Some(ref path) = args.special_types {
            self.listener.special_types = Some(path.clone());
        }
    }
}
