//! Tools command implementation.

use cloplib_config::Config;
use cloplib_listener::InspectionTool;

use crate::error::CliError;

/// Parses every configured tool descriptor, failing on the first bad one.
pub fn parse_tools(config: &Config) -> Result<Vec<InspectionTool>, CliError> {
    config
        .listener
        .inspection_tools
        .iter()
        .map(|descriptor| {
            let parsed = descriptor.parse::<InspectionTool>();
            parsed.map_err(|source| CliError::Tool {
                descriptor: descriptor.clone(),
                source,
            })
        })
        .collect()
}

pub fn run(config: &Config) -> Result<(), CliError> {
    let tools = parse_tools(config)?;
    if tools.is_empty() {
        println!("No inspection tools configured");
        return Ok(());
    }

    let distance = config.listener.inspection_distance;
    println!("Inspection distance: {distance} blocks");
    for tool in &tools {
        match tool.variant() {
            Some(variant) => println!("  {} (variant {variant})", tool.material()),
            None => println!("  {} (any variant)", tool.material()),
        }
    }
    Ok(())
}
