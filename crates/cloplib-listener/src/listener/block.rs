//! Breaking and placing blocks, buckets and hanging entities.

use cloplib_handler::Handler;
use cloplib_operation::{Operation, OperationType};

use super::OperationListener;
use crate::classify::{self, HangingRemoveCause};
use crate::decision::Decision;
use crate::platform::Platform;

impl<P: Platform, H: Handler + ?Sized> OperationListener<P, H> {
    /// A player breaking a block.
    pub fn on_block_break(&self, player: &P::Entity, block: &P::Block) -> Decision {
        let Some(position) = self.block_position(block) else {
            return Decision::Allow;
        };
        let kind = classify::break_type(self.is_farm_block(block));
        self.check(Operation::by(self.platform.actor(player), kind, position))
    }

    /// A player placing `placed`. NPCs may always place.
    pub fn on_block_place(&self, player: &P::Entity, placed: &P::Block) -> Decision {
        if self.platform.is_npc(player) {
            return Decision::Allow;
        }
        let Some(position) = self.block_position(placed) else {
            return Decision::Allow;
        };
        let kind = classify::place_type(self.is_farm_block(placed));
        self.check(Operation::by(self.platform.actor(player), kind, position))
    }

    /// A player scooping fluid out of `block` with a bucket.
    pub fn on_bucket_fill(&self, player: &P::Entity, block: &P::Block) -> Decision {
        let Some(position) = self.block_position(block) else {
            return Decision::Allow;
        };
        self.check(Operation::by(
            self.platform.actor(player),
            OperationType::FILL_BUCKET,
            position,
        ))
    }

    /// A player pouring a bucket into `block`. NPCs are exempt.
    pub fn on_bucket_empty(&self, player: &P::Entity, block: &P::Block) -> Decision {
        if self.platform.is_npc(player) {
            return Decision::Allow;
        }
        let Some(position) = self.block_position(block) else {
            return Decision::Allow;
        };
        self.check(Operation::by(
            self.platform.actor(player),
            OperationType::EMPTY_BUCKET,
            position,
        ))
    }

    /// A painting, item frame or similar being hung. Only player placements
    /// are checked.
    pub fn on_hanging_place(&self, player: Option<&P::Entity>, hanging: &P::Entity) -> Decision {
        let Some(player) = player else {
            return Decision::Allow;
        };
        if self.platform.is_npc(player) {
            return Decision::Allow;
        }
        let Some(position) = self.entity_position(hanging) else {
            return Decision::Allow;
        };
        self.check(Operation::by(
            self.platform.actor(player),
            OperationType::PLACE_HANGING_ENTITY,
            position,
        ))
    }

    /// A hanging entity being knocked off its wall.
    ///
    /// Player removers (directly, by projectile or riding) are checked as
    /// breaking it; any other entity remover is a nature check from the
    /// hanging entity to the remover.
    pub fn on_hanging_break(
        &self,
        hanging: &P::Entity,
        remover: Option<&P::Entity>,
        cause: HangingRemoveCause,
    ) -> Decision {
        let Some(position) = self.entity_position(hanging) else {
            return Decision::Allow;
        };
        match cause {
            HangingRemoveCause::Entity => {
                let Some(remover) = remover else {
                    return Decision::Allow;
                };
                if let Some(player) = self.platform.player_source(remover) {
                    return self.check(Operation::by(
                        self.platform.actor(&player),
                        OperationType::BREAK_HANGING_ENTITY,
                        position,
                    ));
                }
                let Some(remover_position) = self.entity_position(remover) else {
                    return Decision::Allow;
                };
                let world = remover_position.world().clone();
                self.check_nature(&world, &position, &remover_position)
            }
            HangingRemoveCause::Explosion => {
                self.check(Operation::of(OperationType::EXPLOSION_DAMAGE_TERRAIN, position))
            }
            _ => Decision::Allow,
        }
    }
}
