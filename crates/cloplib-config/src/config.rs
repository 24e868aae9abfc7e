//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside a config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// The platform config directory for cloplib, e.g. `~/.config/cloplib`.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cloplib"))
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Event listener settings.
    pub listener: ListenerConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Event listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// How far an inspection tool raycast reaches, in blocks.
    pub inspection_distance: u32,
    /// Special-types YAML file replacing the bundled material lists.
    pub special_types: Option<PathBuf>,
    /// Inspection tools registered at startup, as `material` or
    /// `material#variant`.
    pub inspection_tools: Vec<String>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level or filter directive (e.g., "debug", "info,cloplib_listener=trace").
    pub log_level: String,
    /// Directory for JSON log files in debug builds.
    pub log_dir: Option<PathBuf>,
}

// --- Default implementations ---

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            inspection_distance: 40,
            special_types: None,
            inspection_tools: Vec::new(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Checks values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listener.inspection_distance == 0 {
            return Err(ConfigError::InvalidValue {
                field: "listener.inspection_distance",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.debug.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "debug.log_level",
                reason: "must not be empty".to_string(),
            });
        }
        let default_level = self.debug.log_level.split(',').next().unwrap_or_default();
        let default_level = default_level.trim().to_lowercase();
        if !default_level.contains('=') && !LOG_LEVELS.contains(&default_level.as_str()) {
            log::warn!("Unrecognized log level `{default_level}`, the filter may ignore it");
        }
        Ok(())
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(config_path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
