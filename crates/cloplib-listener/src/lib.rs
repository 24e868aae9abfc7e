//! Turns native game-server events into [`Operation`](cloplib_operation::Operation)s
//! and asks a [`Handler`](cloplib_handler::Handler) whether to veto them.
//!
//! A host integration implements [`Platform`] over its own entity and block
//! handles, builds an [`OperationListener`] and forwards each native event to
//! the matching `on_*` method. The returned [`Decision`] (or
//! [`InteractOutcome`], or the filtered block list) is then applied with the
//! host's own cancellation primitive.

pub mod classify;
mod decision;
mod inspect;
mod item_table;
mod listener;
mod platform;

#[cfg(test)]
mod testing;

pub use decision::{ActionResult, Decision, InteractOutcome, Movement, VehicleMovement};
pub use inspect::{
    DEFAULT_INSPECTION_DISTANCE, InspectionTool, InspectionTools, InspectorCallback, ToolError,
};
pub use item_table::ItemOperationTable;
pub use listener::{InteractEvent, OperationListener};
pub use platform::{BlockFace, BlockTraits, EntityTraits, Hand, HeldItem, Platform, Shooter};
