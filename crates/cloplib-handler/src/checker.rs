//! Special-type classification of raw material and mob identifiers.

use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The special-types data shipped with the library.
const BUNDLED_SPECIAL_TYPES: &str = include_str!("../data/special_types.yml");

/// Predicates classifying raw identifiers such as `minecraft:wheat`.
pub trait TypeChecker {
    /// Crops, farmland and other blocks whose handling is a farming operation.
    fn is_farm_material(&self, material_id: &str) -> bool;

    /// Blocks that activate when an entity steps on them.
    fn is_pressure_sensitive_material(&self, material_id: &str) -> bool;

    /// Mobs that change blocks on their own (endermen, ravagers, ...).
    fn is_griefing_mob(&self, mob_id: &str) -> bool;
}

/// Errors from loading special-types data.
#[derive(Debug, Error)]
pub enum TypeCheckerError {
    /// The data file could not be read.
    #[error("failed to read special types: {0}")]
    Read(#[from] std::io::Error),

    /// The data is not valid YAML of the expected shape.
    #[error("failed to parse special types: {0}")]
    Parse(#[from] serde_yaml::Error),
}

// ---------------------------------------------------------------------------
// Data file shape
// ---------------------------------------------------------------------------

/// The three flat string lists making up a special-types data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialTypes {
    /// Farm block and crop material ids.
    pub farm_blocks: Vec<String>,
    /// Pressure-sensitive material ids.
    pub pressure_sensitive_blocks: Vec<String>,
    /// Griefing-capable mob ids.
    pub griefing_mobs: Vec<String>,
}

// ---------------------------------------------------------------------------
// SpecialTypeChecker
// ---------------------------------------------------------------------------

/// A [`TypeChecker`] backed by three sets of normalized identifiers.
///
/// Identifiers are trimmed, lowercased and stripped of the `minecraft:`
/// namespace both when loaded and when looked up, so `Minecraft:Wheat` and
/// `wheat` are the same entry.
#[derive(Debug, Clone, Default)]
pub struct SpecialTypeChecker {
    farm_blocks: FxHashSet<String>,
    pressure_sensitive_blocks: FxHashSet<String>,
    griefing_mobs: FxHashSet<String>,
}

impl SpecialTypeChecker {
    /// Builds a checker from already parsed data.
    pub fn new(types: SpecialTypes) -> Self {
        Self {
            farm_blocks: normalize_all(types.farm_blocks),
            pressure_sensitive_blocks: normalize_all(types.pressure_sensitive_blocks),
            griefing_mobs: normalize_all(types.griefing_mobs),
        }
    }

    /// Parses YAML data with `farm_blocks`, `pressure_sensitive_blocks` and
    /// `griefing_mobs` lists. Missing lists are empty.
    pub fn from_yaml_str(data: &str) -> Result<Self, TypeCheckerError> {
        let types: SpecialTypes = serde_yaml::from_str(data)?;
        Ok(Self::new(types))
    }

    /// Loads YAML data from a file.
    pub fn load(path: &Path) -> Result<Self, TypeCheckerError> {
        let data = std::fs::read_to_string(path)?;
        let checker = Self::from_yaml_str(&data)?;
        tracing::info!(
            path = %path.display(),
            farm = checker.farm_blocks.len(),
            pressure = checker.pressure_sensitive_blocks.len(),
            griefing = checker.griefing_mobs.len(),
            "loaded special types"
        );
        Ok(checker)
    }

    /// The data bundled with the library.
    pub fn bundled() -> Result<Self, TypeCheckerError> {
        Self::from_yaml_str(BUNDLED_SPECIAL_TYPES)
    }
}

impl TypeChecker for SpecialTypeChecker {
    fn is_farm_material(&self, material_id: &str) -> bool {
        self.farm_blocks.contains(&normalize(material_id))
    }

    fn is_pressure_sensitive_material(&self, material_id: &str) -> bool {
        self.pressure_sensitive_blocks
            .contains(&normalize(material_id))
    }

    fn is_griefing_mob(&self, mob_id: &str) -> bool {
        self.griefing_mobs.contains(&normalize(mob_id))
    }
}

fn normalize(id: &str) -> String {
    let lowered = id.trim().to_lowercase();
    match lowered.strip_prefix("minecraft:") {
        Some(stripped) => stripped.to_string(),
        None => lowered,
    }
}

fn normalize_all(ids: Vec<String>) -> FxHashSet<String> {
    ids.iter().map(|id| normalize(id)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
