//! Players and ridden vehicles moving between blocks, and item teleports.

use cloplib_handler::Handler;
use cloplib_operation::{Operation, OperationType, Position};

use super::OperationListener;
use crate::classify::TeleportCause;
use crate::decision::{Decision, Movement, VehicleMovement};
use crate::platform::Platform;

impl<P: Platform, H: Handler + ?Sized> OperationListener<P, H> {
    /// A player moving from `from` to `to`. Moves within one block cell are
    /// never checked.
    pub fn on_player_move(
        &self,
        player: &P::Entity,
        from: &Position,
        to: Option<&Position>,
    ) -> Movement {
        let Some(to) = to else {
            return Movement::Allow;
        };
        if from.same_block(to) || self.platform.is_npc(player) {
            return Movement::Allow;
        }
        let Some(user) = self.platform.as_user(player) else {
            return Movement::Allow;
        };

        if self.handler.cancel_movement(&user, from, to) {
            tracing::debug!(user = user.name(), "movement vetoed");
            return Movement::Cancel {
                dismount: self.platform.is_inside_vehicle(player),
            };
        }
        Movement::Allow
    }

    /// A vehicle moving from `from` to `to`. Only vehicles ridden by a real
    /// player are checked.
    pub fn on_vehicle_move(
        &self,
        vehicle: &P::Entity,
        from: &Position,
        to: &Position,
    ) -> VehicleMovement {
        if from.same_block(to) {
            return VehicleMovement::Allow;
        }
        let Some(player) = self.platform.player_source(vehicle) else {
            return VehicleMovement::Allow;
        };
        if self.platform.is_npc(&player) || !self.platform.is_inside_vehicle(&player) {
            return VehicleMovement::Allow;
        }
        let Some(user) = self.platform.as_user(&player) else {
            return VehicleMovement::Allow;
        };

        if self.handler.cancel_movement(&user, from, to) {
            tracing::debug!(user = user.name(), "vehicle movement vetoed");
            return VehicleMovement::Eject;
        }
        VehicleMovement::Allow
    }

    /// A player teleporting away from `from`. Only ender pearl and chorus
    /// fruit teleports are checked.
    pub fn on_teleport(
        &self,
        player: &P::Entity,
        cause: TeleportCause,
        from: &Position,
    ) -> Decision {
        if !cause.is_item_teleport() || self.platform.is_npc(player) {
            return Decision::Allow;
        }
        self.check(Operation::by(
            self.platform.actor(player),
            OperationType::ENDER_PEARL_TELEPORT,
            from.clone(),
        ))
    }
}
