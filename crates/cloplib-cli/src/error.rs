//! Errors surfaced by CLI commands.

use cloplib_config::ConfigError;
use cloplib_handler::TypeCheckerError;
use cloplib_listener::ToolError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    SpecialTypes(#[from] TypeCheckerError),

    #[error("invalid inspection tool `{descriptor}`: {source}")]
    Tool {
        descriptor: String,
        #[source]
        source: ToolError,
    },

    #[error("failed to format output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to format config: {0}")]
    Ron(#[from] ron::Error),
}
