//! Clicks: blocks, entities, held items and inspection tools.

use cloplib_handler::Handler;
use cloplib_operation::{Operation, OperationType};

use super::OperationListener;
use crate::classify::{self, ClickAction};
use crate::decision::{ActionResult, Decision, InteractOutcome};
use crate::inspect::InspectionTool;
use crate::platform::{Hand, HeldItem, Platform};

/// A player click as reported by the host.
pub struct InteractEvent<'a, P: Platform> {
    pub player: &'a P::Entity,
    pub action: ClickAction,
    pub hand: Hand,
    /// The clicked or stepped-on block, if any.
    pub block: Option<&'a P::Block>,
    /// The item in the clicking hand.
    pub item: Option<&'a HeldItem>,
    /// Denials already applied by the host or an earlier listener.
    pub prior: InteractOutcome,
}

impl<P: Platform, H: Handler + ?Sized> OperationListener<P, H> {
    /// A player clicking air or a block, or stepping on a block.
    pub fn on_interact(&self, event: &InteractEvent<'_, P>) -> InteractOutcome {
        let mut outcome = event.prior;
        match event.action {
            ClickAction::RightClickAir => {
                if event.hand == Hand::Main {
                    self.handle_item_interaction(event, &mut outcome);
                }
            }
            ClickAction::RightClickBlock => {
                if event.hand == Hand::Main && self.handle_item_interaction(event, &mut outcome) {
                    return outcome;
                }
                self.handle_block_click(event, &mut outcome);
            }
            ClickAction::Physical => self.handle_physical(event, &mut outcome),
            ClickAction::LeftClickAir | ClickAction::LeftClickBlock => {}
        }
        outcome
    }

    /// Returns `true` when the click was consumed by an inspection tool or a
    /// spawn egg.
    fn handle_item_interaction(
        &self,
        event: &InteractEvent<'_, P>,
        outcome: &mut InteractOutcome,
    ) -> bool {
        if !outcome.deny_item {
            return self.handle_inspection(event, outcome) || self.handle_spawn_egg(event, outcome);
        }
        event.action != ClickAction::RightClickBlock
    }

    fn handle_inspection(
        &self,
        event: &InteractEvent<'_, P>,
        outcome: &mut InteractOutcome,
    ) -> bool {
        let Some(item) = event.item else {
            return false;
        };
        let Some(callback) = self.find_inspector(&InspectionTool::from_item(item)) else {
            return false;
        };
        outcome.deny_both();

        let distance = self.inspection_distance();
        let target = self.platform.target_block(event.player, distance);
        if let (Some(user), Some(target)) = (self.platform.as_user(event.player), target) {
            callback(&user, &target);
        }
        true
    }

    fn handle_spawn_egg(
        &self,
        event: &InteractEvent<'_, P>,
        outcome: &mut InteractOutcome,
    ) -> bool {
        let Some(item) = event.item else {
            return false;
        };
        if !classify::is_spawn_egg(&item.material) {
            return false;
        }
        if self.platform.is_npc(event.player) {
            return true;
        }
        let Some(position) = self.entity_position(event.player) else {
            return true;
        };
        let decision = self.check(Operation::by(
            self.platform.actor(event.player),
            OperationType::USE_SPAWN_EGG,
            position,
        ));
        if decision.is_cancelled() {
            outcome.deny_both();
        }
        true
    }

    fn handle_block_click(&self, event: &InteractEvent<'_, P>, outcome: &mut InteractOutcome) {
        let Some(block) = event.block else {
            return;
        };
        if outcome.deny_block {
            return;
        }
        let Some(position) = self.block_position(block) else {
            return;
        };
        let farm = self.is_farm_block(block);
        let kind = classify::interact_type(&self.platform.block_traits(block), farm);
        let decision = self.check(Operation::by_silent(
            self.platform.actor(event.player),
            kind,
            position,
            event.hand.is_silent(),
        ));
        if decision.is_cancelled() {
            outcome.deny_block = true;
            // Eating while clicking a protected block stays allowed.
            if let Some(item) = event.item {
                if !(item.is_air() || item.edible) {
                    outcome.deny_item = true;
                }
            }
        }
    }

    fn handle_physical(&self, event: &InteractEvent<'_, P>, outcome: &mut InteractOutcome) {
        if outcome.deny_block {
            return;
        }
        let Some(block) = event.block else {
            return;
        };
        if self.platform.block_traits(block).air || self.platform.is_npc(event.player) {
            return;
        }
        let Some(position) = self.block_position(block) else {
            return;
        };
        let material = self.platform.block_material(block);
        let operation = if self.checker().is_pressure_sensitive_material(&material) {
            Operation::by_silent(
                self.platform.actor(event.player),
                OperationType::REDSTONE_INTERACT,
                position,
                true,
            )
        } else {
            Operation::by(
                self.platform.actor(event.player),
                OperationType::BLOCK_INTERACT,
                position,
            )
        };
        if self.check(operation).is_cancelled() {
            outcome.deny_block = true;
        }
    }

    /// A player right-clicking an entity. Clicking other players is never
    /// checked.
    pub fn on_interact_entity(
        &self,
        player: &P::Entity,
        target: &P::Entity,
        hand: Hand,
    ) -> Decision {
        if self.platform.is_player(target) || self.platform.is_npc(player) {
            return Decision::Allow;
        }
        let Some(position) = self.entity_position(target) else {
            return Decision::Allow;
        };
        let traits = self.platform.entity_traits(target);
        if traits.vehicle && traits.inventory_holder {
            let decision = self.check(Operation::by_silent(
                self.platform.actor(player),
                OperationType::CONTAINER_OPEN,
                position.clone(),
                hand.is_silent(),
            ));
            if decision.is_cancelled() {
                return decision;
            }
        }
        self.check(Operation::by_silent(
            self.platform.actor(player),
            OperationType::ENTITY_INTERACT,
            position,
            hand.is_silent(),
        ))
    }

    /// A player taking or swapping equipment on an armor stand.
    pub fn on_armor_stand_manipulate(
        &self,
        player: &P::Entity,
        stand: &P::Entity,
        hand: Hand,
    ) -> Decision {
        if self.platform.is_npc(player) {
            return Decision::Allow;
        }
        let Some(position) = self.entity_position(stand) else {
            return Decision::Allow;
        };
        self.check(Operation::by_silent(
            self.platform.actor(player),
            OperationType::CONTAINER_OPEN,
            position,
            hand.is_silent(),
        ))
    }

    /// A player taking the book off a lectern.
    pub fn on_lectern_take_book(&self, player: &P::Entity, lectern: &P::Block) -> Decision {
        if self.platform.is_npc(player) {
            return Decision::Allow;
        }
        let Some(position) = self.block_position(lectern) else {
            return Decision::Allow;
        };
        self.check(Operation::by(
            self.platform.actor(player),
            OperationType::CONTAINER_OPEN,
            position,
        ))
    }

    /// Item use on hosts that report it as a callback.
    ///
    /// Main-hand use only dispatches inspection tools. Off-hand use is looked
    /// up in the item-use table and checked silently at the player.
    pub fn on_use_item(
        &self,
        player: &P::Entity,
        hand: Hand,
        item: Option<&HeldItem>,
    ) -> ActionResult {
        let Some(item) = item.filter(|item| !item.is_air()) else {
            return ActionResult::Pass;
        };
        let Some(user) = self.platform.as_user(player) else {
            return ActionResult::Pass;
        };

        if hand == Hand::Main {
            let Some(callback) = self.find_inspector(&InspectionTool::from_item(item)) else {
                return ActionResult::Pass;
            };
            let distance = self.inspection_distance();
            if let Some(target) = self.platform.target_block(player, distance) {
                callback(&user, &target);
            }
            return ActionResult::Fail;
        }

        let Some(kind) = self.item_table().get(&item.material).cloned() else {
            return ActionResult::Pass;
        };
        let position = user.position().clone();
        let actor = self.platform.actor(player);
        let operation = Operation::by_silent(actor, kind, position, true);
        self.check(operation).into()
    }
}
