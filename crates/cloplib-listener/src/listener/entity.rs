//! Explosions, spawns and entities changing or placing blocks.

use cloplib_handler::Handler;
use cloplib_operation::{Operation, OperationType, User};

use super::OperationListener;
use crate::classify::{self, SpawnReason};
use crate::decision::Decision;
use crate::platform::{Platform, Shooter};

impl<P: Platform, H: Handler + ?Sized> OperationListener<P, H> {
    /// A block-triggered explosion (beds, respawn anchors). Protected blocks
    /// are removed from `blocks`; the explosion itself always goes ahead.
    ///
    /// Returns the number of blocks removed.
    pub fn on_block_explode(&self, blocks: &mut Vec<P::Block>) -> usize {
        self.filter_exploded(blocks, OperationType::EXPLOSION_DAMAGE_TERRAIN, None)
    }

    /// An entity explosion. Primed explosives are checked as explosions and
    /// every other explosive entity as a monster damaging terrain. A player
    /// behind the explosive is recorded as the actor.
    ///
    /// Returns the number of blocks removed.
    pub fn on_entity_explode(&self, explosive: &P::Entity, blocks: &mut Vec<P::Block>) -> usize {
        let kind = classify::explosion_terrain_type(&self.platform.entity_traits(explosive));
        let actor = self.platform.resolve_actor(explosive);
        self.filter_exploded(blocks, kind, actor)
    }

    fn filter_exploded(
        &self,
        blocks: &mut Vec<P::Block>,
        kind: OperationType,
        actor: Option<User>,
    ) -> usize {
        let before = blocks.len();
        blocks.retain(|block| match self.platform.block_position(block) {
            Some(position) => self
                .check(Operation::by(actor.clone(), kind.clone(), position))
                .is_allowed(),
            None => true,
        });
        let removed = before - blocks.len();
        if removed > 0 {
            tracing::debug!(
                kind = %kind,
                removed,
                remaining = blocks.len(),
                "protected blocks from explosion"
            );
        }
        removed
    }

    /// An entity turning `block` into something else: endermen picking up
    /// blocks, players trampling via projectiles, arrows lighting campfires.
    pub fn on_entity_change_block(&self, entity: &P::Entity, block: &P::Block) -> Decision {
        let Some(position) = self.block_position(block) else {
            return Decision::Allow;
        };

        if let Some(player) = self.platform.player_source(entity) {
            let actor = self.platform.actor(&player);
            return self.check(Operation::by(actor, OperationType::BLOCK_BREAK, position));
        }

        let mut decision = Decision::Allow;
        let mob_type = self.platform.entity_type_id(entity);
        if self.checker().is_griefing_mob(&mob_type) {
            let operation = Operation::of(OperationType::MONSTER_DAMAGE_TERRAIN, position.clone());
            decision = self.check(operation);
        }
        if let Some(Shooter::Block(dispenser)) = self.platform.shooter(entity) {
            if let Some(source) = self.block_position(&dispenser) {
                let world = position.world().clone();
                decision = decision.or(self.check_nature(&world, &source, &position));
            }
        }
        decision
    }

    /// A player throwing an egg. A cancelled decision means the egg must not
    /// hatch. Eggs thrown by NPCs are still checked, without an actor.
    pub fn on_egg_throw(&self, player: &P::Entity, egg: &P::Entity) -> Decision {
        let Some(thrower) = self.platform.player_source(player) else {
            return Decision::Allow;
        };
        let Some(position) = self.entity_position(egg) else {
            return Decision::Allow;
        };
        let actor = self.platform.actor(&thrower);
        self.check(Operation::by(actor, OperationType::USE_SPAWN_EGG, position))
    }

    /// A boat, minecart, end crystal or armor stand being placed.
    pub fn on_entity_place(&self, player: Option<&P::Entity>, entity: &P::Entity) -> Decision {
        let Some(position) = self.entity_position(entity) else {
            return Decision::Allow;
        };
        let kind = classify::entity_place_type(&self.platform.entity_traits(entity));
        let actor = player.and_then(|player| self.platform.actor(player));
        self.check(Operation::by(actor, kind, position))
    }

    /// A mob spawning. Only natural, trap, reinforcement and patrol spawns
    /// are checked.
    pub fn on_mob_spawn(&self, entity: &P::Entity, reason: SpawnReason) -> Decision {
        if !reason.is_checked() {
            return Decision::Allow;
        }
        let Some(position) = self.entity_position(entity) else {
            return Decision::Allow;
        };
        let kind = classify::spawn_type(self.platform.is_hostile(entity));
        self.check(Operation::of(kind, position))
    }
}
