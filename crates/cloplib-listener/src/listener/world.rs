//! Raids, lightning and portal creation.

use cloplib_handler::Handler;
use cloplib_operation::{Operation, OperationType, Position};
use rustc_hash::FxHashSet;

use super::OperationListener;
use crate::classify::{self, LightningCause, PortalCreateReason};
use crate::decision::Decision;
use crate::platform::Platform;

impl<P: Platform, H: Handler + ?Sized> OperationListener<P, H> {
    /// A player with Bad Omen triggering a raid centred on `raid_center`.
    pub fn on_raid_trigger(&self, player: &P::Entity, raid_center: &Position) -> Decision {
        if self.platform.is_npc(player) {
            return Decision::Allow;
        }
        self.check(Operation::by(
            self.platform.actor(player),
            OperationType::START_RAID,
            raid_center.clone(),
        ))
    }

    /// Lightning about to strike `position`.
    pub fn on_lightning_strike(&self, cause: LightningCause, position: &Position) -> Decision {
        self.check(Operation::of(classify::lightning_type(cause), position.clone()))
    }

    /// A portal being created from `blocks`. Only nether portals generated
    /// as the pair of a portal lit elsewhere are checked, once per distinct
    /// block column.
    pub fn on_portal_create(
        &self,
        reason: PortalCreateReason,
        creator: Option<&P::Entity>,
        blocks: &[P::Block],
    ) -> Decision {
        if reason != PortalCreateReason::NetherPair {
            return Decision::Allow;
        }

        let mut columns = FxHashSet::default();
        let positions: Vec<Position> = blocks
            .iter()
            .filter_map(|block| self.block_position(block))
            .filter(|position| {
                let cell = position.block();
                columns.insert((cell.x, cell.z))
            })
            .collect();

        let actor = creator.and_then(|creator| self.platform.actor(creator));
        for position in positions {
            let operation = Operation::by(actor.clone(), OperationType::BLOCK_PLACE, position);
            let decision = self.check(operation);
            if decision.is_cancelled() {
                return decision;
            }
        }
        Decision::Allow
    }
}
