//! Configuration for cloplib hosts and tools.
//!
//! Settings persist to disk as `config.ron`. CLI arguments parsed with clap
//! override whatever was loaded, and unknown or missing fields fall back to
//! defaults so older and newer files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE_NAME, Config, DebugConfig, ListenerConfig, default_config_dir};
pub use error::ConfigError;
