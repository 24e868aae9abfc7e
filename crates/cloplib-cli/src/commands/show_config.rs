//! Config command implementation.

use std::path::Path;

use cloplib_config::{CONFIG_FILE_NAME, Config};

use crate::error::CliError;

pub fn run(config: &Config, config_dir: &Path) -> Result<(), CliError> {
    let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
    println!("# {}", config_dir.join(CONFIG_FILE_NAME).display());
    println!("{}", ron::ser::to_string_pretty(config, pretty)?);
    Ok(())
}
