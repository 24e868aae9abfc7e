//! Inspection tools: held items that trigger a callback instead of a
//! protection check, such as a stick for viewing claim borders.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use cloplib_operation::{Position, User};
use thiserror::Error;

use crate::classify::material_name;
use crate::platform::HeldItem;

/// Default raycast reach for inspection callbacks, in blocks.
pub const DEFAULT_INSPECTION_DISTANCE: u32 = 40;

/// Called with the inspecting user and the block they are looking at.
pub type InspectorCallback = Arc<dyn Fn(&User, &Position) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("inspection tool has no material")]
    EmptyMaterial,

    #[error("invalid inspection tool variant: {0}")]
    InvalidVariant(String),
}

// ---------------------------------------------------------------------------
// InspectionTool
// ---------------------------------------------------------------------------

/// A held-item descriptor: material plus an optional variant tag.
///
/// The derived equality is structural and only used for storage. Lookups go
/// through [`matches`](Self::matches).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InspectionTool {
    material: String,
    variant: Option<i32>,
}

impl InspectionTool {
    /// A tool matching any item of `material`. A leading `minecraft:` is
    /// dropped.
    pub fn new(material: &str) -> Self {
        Self {
            material: material_name(material).to_string(),
            variant: None,
        }
    }

    pub fn with_variant(mut self, variant: i32) -> Self {
        self.variant = Some(variant);
        self
    }

    /// The lookup key for a held item.
    pub fn from_item(item: &HeldItem) -> Self {
        Self {
            material: material_name(&item.material).to_string(),
            variant: item.variant,
        }
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn variant(&self) -> Option<i32> {
        self.variant
    }

    /// Whether this lookup tool selects `registered`.
    ///
    /// Materials must be equal. A lookup without a variant selects every
    /// registered tool of the material; a lookup with a variant only selects
    /// a registered tool carrying the same variant.
    pub fn matches(&self, registered: &InspectionTool) -> bool {
        self.material == registered.material
            && match self.variant {
                None => true,
                Some(variant) => registered.variant == Some(variant),
            }
    }
}

impl fmt::Display for InspectionTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant {
            Some(variant) => write!(f, "{}#{}", self.material, variant),
            None => f.write_str(&self.material),
        }
    }
}

/// Parses `material` or `material#variant`.
impl FromStr for InspectionTool {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (material, variant) = match s.split_once('#') {
            Some((material, variant)) => (material, Some(variant)),
            None => (s, None),
        };
        if material_name(material).is_empty() {
            return Err(ToolError::EmptyMaterial);
        }
        let tool = Self::new(material);
        match variant {
            Some(variant) => variant
                .trim()
                .parse()
                .map(|v| tool.with_variant(v))
                .map_err(|_| ToolError::InvalidVariant(variant.to_string())),
            None => Ok(tool),
        }
    }
}

// ---------------------------------------------------------------------------
// InspectionTools
// ---------------------------------------------------------------------------

type ToolTable = Vec<(InspectionTool, InspectorCallback)>;

/// Registered inspection callbacks plus the inspection raycast distance.
///
/// The table is an immutable snapshot replaced wholesale on every change, so
/// a lookup running alongside a registration sees either the old or the new
/// table.
pub struct InspectionTools {
    table: RwLock<Arc<ToolTable>>,
    distance: AtomicU32,
}

impl Default for InspectionTools {
    fn default() -> Self {
        Self::new(DEFAULT_INSPECTION_DISTANCE)
    }
}

impl fmt::Debug for InspectionTools {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tools: Vec<String> = self.tools().iter().map(ToString::to_string).collect();
        f.debug_struct("InspectionTools")
            .field("tools", &tools)
            .field("distance", &self.distance())
            .finish()
    }
}

impl InspectionTools {
    pub fn new(distance: u32) -> Self {
        Self {
            table: RwLock::new(Arc::new(Vec::new())),
            distance: AtomicU32::new(distance),
        }
    }

    pub fn distance(&self) -> u32 {
        self.distance.load(Ordering::Relaxed)
    }

    pub fn set_distance(&self, distance: u32) {
        self.distance.store(distance, Ordering::Relaxed);
    }

    /// Registers `callback` for `tool`, replacing any callback registered
    /// for the same tool.
    pub fn set(&self, tool: InspectionTool, callback: InspectorCallback) {
        self.update(|table| match table.iter_mut().find(|(existing, _)| *existing == tool) {
            Some(entry) => entry.1 = callback,
            None => table.push((tool, callback)),
        });
    }

    /// Removes the callback registered for exactly `tool`.
    pub fn remove(&self, tool: &InspectionTool) -> bool {
        let mut removed = false;
        self.update(|table| {
            let before = table.len();
            table.retain(|(existing, _)| existing != tool);
            removed = table.len() != before;
        });
        removed
    }

    /// The callback selected by a held item. An exact registration wins;
    /// otherwise the earliest registration the lookup
    /// [`matches`](InspectionTool::matches).
    pub fn find(&self, lookup: &InspectionTool) -> Option<InspectorCallback> {
        let table = self.snapshot();
        table
            .iter()
            .find(|(registered, _)| registered == lookup)
            .or_else(|| table.iter().find(|(tool, _)| lookup.matches(tool)))
            .map(|(_, callback)| Arc::clone(callback))
    }

    /// Registered tools, in registration order.
    pub fn tools(&self) -> Vec<InspectionTool> {
        self.snapshot()
            .iter()
            .map(|(tool, _)| tool.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    fn snapshot(&self) -> Arc<ToolTable> {
        let guard = self.table.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    fn update(&self, edit: impl FnOnce(&mut ToolTable)) {
        let mut guard = self.table.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = ToolTable::clone(&**guard);
        edit(&mut next);
        *guard = Arc::new(next);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
