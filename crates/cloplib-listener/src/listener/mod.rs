//! [`OperationListener`]: the shared dispatch behind every host integration.
//!
//! Event handlers are split by area: block edits, clicks, damage, entity
//! events, movement, nature and world events. All of them follow the same
//! shape: gather facts from the [`Platform`], classify, ask the handler once
//! (or once per affected block) and report the result.

mod block;
mod damage;
mod entity;
mod interact;
mod movement;
mod nature;
mod world;


use std::sync::{Arc, PoisonError, RwLock};

use cloplib_handler::{Handler, TypeChecker};
use cloplib_operation::{Operation, Position, User, World};

use crate::classify::ItemKind;
use crate::decision::Decision;
use crate::inspect::{InspectionTool, InspectionTools, InspectorCallback};
use crate::item_table::ItemOperationTable;
use crate::platform::Platform;

pub use interact::InteractEvent;

/// Classifies native events into operations and consults a [`Handler`].
pub struct OperationListener<P: Platform, H: Handler + ?Sized> {
    platform: P,
    handler: Arc<H>,
    tools: InspectionTools,
    items: RwLock<Arc<ItemOperationTable>>,
}

impl<P: Platform, H: Handler + ?Sized> OperationListener<P, H> {
    pub fn new(platform: P, handler: Arc<H>) -> Self {
        Self {
            platform,
            handler,
            tools: InspectionTools::default(),
            items: RwLock::new(Arc::new(ItemOperationTable::default())),
        }
    }

    /// Sets the initial inspection raycast distance.
    pub fn with_inspection_distance(self, distance: u32) -> Self {
        self.tools.set_distance(distance);
        self
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn handler(&self) -> &Arc<H> {
        &self.handler
    }

    fn checker(&self) -> &dyn TypeChecker {
        self.handler.type_checker()
    }

    // ---- Inspection tools ----

    /// Registers a callback run when a player right-clicks holding `tool`.
    pub fn set_inspector_callback<F>(&self, tool: InspectionTool, callback: F)
    where
        F: Fn(&User, &Position) + Send + Sync + 'static,
    {
        tracing::debug!(tool = %tool, "registered inspector callback");
        self.tools.set(tool, Arc::new(callback));
    }

    /// Removes the callback registered for exactly `tool`.
    pub fn remove_inspector_callback(&self, tool: &InspectionTool) -> bool {
        self.tools.remove(tool)
    }

    pub fn inspection_tools(&self) -> &InspectionTools {
        &self.tools
    }

    pub fn inspection_distance(&self) -> u32 {
        self.tools.distance()
    }

    pub fn set_inspection_distance(&self, distance: u32) {
        self.tools.set_distance(distance);
    }

    fn find_inspector(&self, tool: &InspectionTool) -> Option<InspectorCallback> {
        self.tools.find(tool)
    }

    // ---- Item-use table ----

    /// Rebuilds the item-use table from the host's item registry using the
    /// handler's current special-type data, then swaps it in.
    pub fn precalculate_items<I, S>(&self, items: I)
    where
        I: IntoIterator<Item = (S, ItemKind)>,
        S: AsRef<str>,
    {
        let table = ItemOperationTable::precalculate(items, self.checker());
        *self.items.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(table);
    }

    /// The current item-use table.
    pub fn item_table(&self) -> Arc<ItemOperationTable> {
        let guard = self.items.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    // ---- Handler queries ----

    fn check(&self, operation: Operation) -> Decision {
        let decision = Decision::from_veto(self.handler.cancel_operation(&operation));
        if decision.is_cancelled() {
            tracing::debug!(
                operation = %operation.operation_type(),
                user = operation.user().map(User::name),
                x = operation.position().x(),
                y = operation.position().y(),
                z = operation.position().z(),
                "operation vetoed"
            );
        }
        decision
    }

    fn check_nature(&self, world: &World, source: &Position, target: &Position) -> Decision {
        let decision = Decision::from_veto(self.handler.cancel_nature(world, source, target));
        if decision.is_cancelled() {
            tracing::debug!(world = world.name(), "nature vetoed");
        }
        decision
    }

    fn block_position(&self, block: &P::Block) -> Option<Position> {
        let position = self.platform.block_position(block);
        if position.is_none() {
            tracing::trace!("block has no position, skipping");
        }
        position
    }

    fn entity_position(&self, entity: &P::Entity) -> Option<Position> {
        let position = self.platform.entity_position(entity);
        if position.is_none() {
            tracing::trace!("entity has no position, skipping");
        }
        position
    }

    fn is_farm_block(&self, block: &P::Block) -> bool {
        let material = self.platform.block_material(block);
        self.checker().is_farm_material(&material)
    }
}
