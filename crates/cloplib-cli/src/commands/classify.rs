//! Classify command implementation.

use cloplib_config::Config;
use cloplib_handler::{SpecialTypeChecker, TypeChecker};
use cloplib_listener::classify::{break_type, material_name, place_type};
use serde::Serialize;

use crate::error::CliError;

/// How one id is treated by the listener's rules.
#[derive(Debug, PartialEq, Serialize)]
pub struct Report {
    pub id: String,
    pub farm: bool,
    pub pressure_sensitive: bool,
    pub griefing_mob: bool,
    /// Operation type checked when a player breaks this block.
    pub on_break: String,
    /// Operation type checked when a player places this block.
    pub on_place: String,
}

pub fn report(checker: &dyn TypeChecker, id: &str) -> Report {
    let farm = checker.is_farm_material(id);
    Report {
        id: material_name(id).to_string(),
        farm,
        pressure_sensitive: checker.is_pressure_sensitive_material(id),
        griefing_mob: checker.is_griefing_mob(id),
        on_break: break_type(farm).as_minimal_string(),
        on_place: place_type(farm).as_minimal_string(),
    }
}

/// The configured special-types file, or the bundled data.
pub fn load_checker(config: &Config) -> Result<SpecialTypeChecker, CliError> {
    let checker = match &config.listener.special_types {
        Some(path) => SpecialTypeChecker::load(path)?,
        None => SpecialTypeChecker::bundled()?,
    };
    Ok(checker)
}

pub fn run(config: &Config, ids: &[String], json: bool) -> Result<(), CliError> {
    let checker = load_checker(config)?;
    let reports: Vec<Report> = ids.iter().map(|id| report(&checker, id)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!(
        "{:<32} {:<5} {:<8} {:<8} {:<18} {}",
        "ID", "FARM", "PRESSURE", "GRIEFING", "BREAK", "PLACE"
    );
    println!("{}", "-".repeat(96));
    for r in &reports {
        println!(
            "{:<32} {:<5} {:<8} {:<8} {:<18} {}",
            r.id, r.farm, r.pressure_sensitive, r.griefing_mob, r.on_break, r.on_place
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_report_for_crop() {
        let checker = SpecialTypeChecker::bundled().unwrap();
        let r = report(&checker, "minecraft:wheat");
        assert_eq!(r.id, "wheat");
        assert!(r.farm);
        assert!(!r.griefing_mob);
        assert_eq!(r.on_break, "farm_block_break");
        assert_eq!(r.on_place, "farm_block_place");
    }

    #[test]
    fn test_report_for_plain_block() {
        let checker = SpecialTypeChecker::bundled().unwrap();
        let r = report(&checker, "minecraft:stone");
        assert!(!r.farm && !r.pressure_sensitive && !r.griefing_mob);
        assert_eq!(r.on_break, "block_break");
    }

    #[test]
    fn test_configured_special_types_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("special_types.yml");
        std::fs::write(&path, "farm_blocks:\n  - stone\n").unwrap();

        let mut config = Config::default();
        config.listener.special_types = Some(path);
        let checker = load_checker(&config).unwrap();
        assert!(report(&checker, "stone").farm);
        assert!(!report(&checker, "wheat").farm);
    }

    #[test]
    fn test_missing_special_types_file() {
        let mut config = Config::default();
        config.listener.special_types = Some(PathBuf::from("/nonexistent/special_types.yml"));
        assert!(matches!(load_checker(&config), Err(CliError::SpecialTypes(_))));
    }
}
