//! Entities hurting entities: melee, projectiles, fire, fishing rods and
//! vehicle damage.

use cloplib_handler::Handler;
use cloplib_operation::{Operation, OperationType};

use super::OperationListener;
use crate::classify::{self, DamageCause};
use crate::decision::Decision;
use crate::platform::{Platform, Shooter};

impl<P: Platform, H: Handler + ?Sized> OperationListener<P, H> {
    /// `damager` hurting `victim`.
    pub fn on_entity_damage_by_entity(
        &self,
        damager: &P::Entity,
        victim: &P::Entity,
        cause: DamageCause,
    ) -> Decision {
        if let Some(player) = self.platform.player_source(damager) {
            return self.player_damages(&player, victim);
        }
        if self.platform.shooter(damager).is_some() {
            return self.projectile_damages(damager, victim);
        }

        if classify::explosion_damages_entity(cause, self.platform.is_hostile(victim)) {
            let Some(position) = self.entity_position(victim) else {
                return Decision::Allow;
            };
            return self.check(Operation::of(OperationType::EXPLOSION_DAMAGE_ENTITY, position));
        }
        Decision::Allow
    }

    /// `combuster` setting `victim` on fire.
    pub fn on_entity_combust_by_entity(
        &self,
        combuster: &P::Entity,
        victim: &P::Entity,
    ) -> Decision {
        if let Some(player) = self.platform.player_source(combuster) {
            return self.player_damages(&player, victim);
        }
        if self.platform.shooter(combuster).is_some() {
            return self.projectile_damages(combuster, victim);
        }
        Decision::Allow
    }

    /// `catcher` reeling in `caught` with a fishing rod.
    pub fn on_player_fish(&self, catcher: &P::Entity, caught: &P::Entity) -> Decision {
        let actor = self.platform.actor(catcher);
        if let Some(caught_player) = self.platform.player_source(caught) {
            let Some(position) = self.entity_position(&caught_player) else {
                return Decision::Allow;
            };
            return self.check(Operation::between(
                actor,
                self.platform.as_user(&caught_player),
                OperationType::PLAYER_DAMAGE_PLAYER,
                position,
            ));
        }

        let Some(position) = self.entity_position(caught) else {
            return Decision::Allow;
        };
        let kind = self.player_damage_type(caught);
        self.check(Operation::by(actor, kind, position))
    }

    /// A vehicle being damaged or destroyed, optionally by `attacker`.
    pub fn on_vehicle_damage(&self, vehicle: &P::Entity, attacker: Option<&P::Entity>) -> Decision {
        if let Some(attacker) = attacker {
            if let Some(player) = self.platform.player_source(attacker) {
                return self.player_damages(&player, vehicle);
            }
            if self.platform.shooter(attacker).is_some() {
                return self.projectile_damages(attacker, vehicle);
            }
        }

        let Some(position) = self.entity_position(vehicle) else {
            return Decision::Allow;
        };
        self.check(Operation::of_silent(OperationType::BREAK_VEHICLE, position, true))
    }

    fn player_damages(&self, player: &P::Entity, victim: &P::Entity) -> Decision {
        let attacker = self.platform.actor(player);
        if let Some(defender) = self.platform.player_source(victim) {
            let Some(position) = self.entity_position(&defender) else {
                return Decision::Allow;
            };
            return self.check(Operation::between(
                attacker,
                self.platform.as_user(&defender),
                OperationType::PLAYER_DAMAGE_PLAYER,
                position,
            ));
        }

        let Some(position) = self.entity_position(victim) else {
            return Decision::Allow;
        };
        let kind = self.player_damage_type(victim);
        self.check(Operation::by(attacker, kind, position))
    }

    fn projectile_damages(&self, projectile: &P::Entity, victim: &P::Entity) -> Decision {
        let shooter = self.platform.shooter(projectile);
        let Some(victim_position) = self.entity_position(victim) else {
            return Decision::Allow;
        };

        // Dispensed projectiles may not cross into protected land.
        if let Some(Shooter::Block(dispenser)) = &shooter {
            let Some(source) = self.block_position(dispenser) else {
                return Decision::Allow;
            };
            let world = source.world().clone();
            return self.check_nature(&world, &source, &victim_position);
        }

        let shooter_hostile = match &shooter {
            Some(Shooter::Entity(entity)) => self.platform.is_hostile(entity),
            _ => false,
        };
        let victim_exempt = self.platform.is_player(victim) || self.platform.is_hostile(victim);
        if shooter_hostile && !victim_exempt {
            let operation = Operation::of(OperationType::MONSTER_DAMAGE_TERRAIN, victim_position);
            return self.check(operation);
        }
        Decision::Allow
    }

    fn player_damage_type(&self, victim: &P::Entity) -> OperationType {
        let hostile = self.platform.is_hostile(victim);
        classify::player_damage_type(&self.platform.entity_traits(victim), hostile)
    }
}
