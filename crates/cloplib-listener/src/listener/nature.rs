//! Actor-less block movement: fluids, pistons, dispensers and fire.

use cloplib_handler::Handler;
use cloplib_operation::{Operation, OperationType, Position};

use super::OperationListener;
use crate::classify;
use crate::decision::Decision;
use crate::platform::{BlockFace, Platform};

impl<P: Platform, H: Handler + ?Sized> OperationListener<P, H> {
    /// Water or lava flowing from `source` into `target`.
    pub fn on_fluid_flow(&self, source: &P::Block, target: &P::Block) -> Decision {
        if !classify::is_flowing_fluid(&self.platform.block_material(source)) {
            return Decision::Allow;
        }
        let Some(from) = self.block_position(source) else {
            return Decision::Allow;
        };
        let Some(to) = self.block_position(target) else {
            return Decision::Allow;
        };
        let world = from.world().clone();
        self.check_nature(&world, &from, &to)
    }

    /// A piston pushing `pushed` one block towards `direction`. Each pushed
    /// block's destination is checked against the piston.
    pub fn on_piston_extend(
        &self,
        piston: &P::Block,
        pushed: &[P::Block],
        direction: BlockFace,
    ) -> Decision {
        let step = direction.offset();
        self.check_from_block(
            piston,
            pushed
                .iter()
                .filter_map(|block| self.block_position(block))
                .map(|position| position.offset(step)),
        )
    }

    /// A sticky piston pulling `pulled` back.
    pub fn on_piston_retract(&self, piston: &P::Block, pulled: &[P::Block]) -> Decision {
        self.check_from_block(
            piston,
            pulled.iter().filter_map(|block| self.block_position(block)),
        )
    }

    /// A dispenser or dropper firing into the block on its `facing` side.
    pub fn on_dispense(&self, dispenser: &P::Block, facing: BlockFace) -> Decision {
        let Some(source) = self.block_position(dispenser) else {
            return Decision::Allow;
        };
        let target = source.offset(facing.offset());
        let world = source.world().clone();
        self.check_nature(&world, &source, &target)
    }

    /// Fire spreading from `source` into `target`. Other block spreads
    /// (grass, mushrooms) are ignored.
    pub fn on_block_spread(&self, source: &P::Block, target: &P::Block) -> Decision {
        if !self.platform.block_traits(source).fire {
            return Decision::Allow;
        }
        let Some(position) = self.block_position(target) else {
            return Decision::Allow;
        };
        self.check(Operation::of(OperationType::FIRE_SPREAD, position))
    }

    /// A block burning away.
    pub fn on_block_burn(&self, block: &P::Block) -> Decision {
        let Some(position) = self.block_position(block) else {
            return Decision::Allow;
        };
        self.check(Operation::of(OperationType::FIRE_BURN, position))
    }

    /// Nature checks from `origin` to each target, stopping at the first
    /// veto.
    fn check_from_block(
        &self,
        origin: &P::Block,
        targets: impl Iterator<Item = Position>,
    ) -> Decision {
        let Some(source) = self.block_position(origin) else {
            return Decision::Allow;
        };
        let world = source.world().clone();
        for target in targets {
            if self.check_nature(&world, &source, &target).is_cancelled() {
                return Decision::Cancel;
            }
        }
        Decision::Allow
    }
}
