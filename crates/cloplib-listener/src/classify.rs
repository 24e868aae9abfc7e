//! Pure classification rules: native event facts in, [`OperationType`] out.
//!
//! Nothing here talks to a handler or a platform. [`OperationListener`]
//! gathers the facts and calls these functions, so the rules can be tested
//! without a game server.
//!
//! [`OperationListener`]: crate::OperationListener

use cloplib_handler::TypeChecker;
use cloplib_operation::OperationType;

use crate::platform::{BlockTraits, EntityTraits};

/// Substring identifying spawn egg item ids.
pub const SPAWN_EGG_NAME: &str = "spawn_egg";

const DEFAULT_ITEM_NAMESPACE: &str = "minecraft:";

// ---------------------------------------------------------------------------
// Event causes
// ---------------------------------------------------------------------------

/// Why a mob spawned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpawnReason {
    Natural,
    /// Skeleton horse traps.
    Trap,
    /// Zombie reinforcements.
    Reinforcements,
    /// Pillager patrols.
    Patrol,
    SpawnEgg,
    Spawner,
    Breeding,
    /// Golems and withers built from blocks.
    BuildStructure,
    Command,
    Custom,
    Other,
}

impl SpawnReason {
    /// Spawns fire constantly, so only these reasons are checked.
    pub fn is_checked(self) -> bool {
        matches!(
            self,
            SpawnReason::Natural
                | SpawnReason::Trap
                | SpawnReason::Reinforcements
                | SpawnReason::Patrol
        )
    }
}

/// Cause of damage dealt by one entity to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DamageCause {
    BlockExplosion,
    EntityExplosion,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TeleportCause {
    EnderPearl,
    ChorusFruit,
    Command,
    NetherPortal,
    EndPortal,
    EndGateway,
    Plugin,
    Other,
}

impl TeleportCause {
    /// Teleports a player triggers with an item.
    pub fn is_item_teleport(self) -> bool {
        matches!(self, TeleportCause::EnderPearl | TeleportCause::ChorusFruit)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LightningCause {
    /// A channeling trident.
    Trident,
    /// A skeleton horse trap.
    Trap,
    Weather,
    Command,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PortalCreateReason {
    /// A nether portal generated to pair with one lit on the other side.
    NetherPair,
    /// A portal frame lit with fire.
    Fire,
    EndPlatform,
}

/// How a hanging entity (painting, item frame) is being removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HangingRemoveCause {
    Entity,
    Explosion,
    Obstruction,
    Physics,
    Other,
}

/// The kind of click a player made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickAction {
    RightClickAir,
    RightClickBlock,
    LeftClickAir,
    LeftClickBlock,
    /// Stepping on or trampling a block.
    Physical,
}

/// Broad item categories for item-use classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Places a block.
    Block,
    EmptyBucket,
    /// Water, lava, powder snow and mob buckets.
    FilledBucket,
    /// Ender pearls and chorus fruit.
    Teleporter,
    /// Boats and minecarts.
    Vehicle,
    /// Paintings, item frames and other hanging decorations.
    Decoration,
    /// Spawn eggs and throwable eggs.
    SpawnEgg,
    Other,
}

// ---------------------------------------------------------------------------
// Material ids
// ---------------------------------------------------------------------------

/// `id` with surrounding whitespace and the default `minecraft:` namespace
/// removed.
pub fn material_name(id: &str) -> &str {
    let id = id.trim();
    id.strip_prefix(DEFAULT_ITEM_NAMESPACE).unwrap_or(id)
}

/// Case-insensitive comparison of a raw id against a bare default-namespace
/// name.
pub fn material_is(id: &str, name: &str) -> bool {
    material_name(&id.to_lowercase()) == name
}

pub fn is_spawn_egg(material: &str) -> bool {
    material.to_lowercase().contains(SPAWN_EGG_NAME)
}

/// Only water and lava flows are checked.
pub fn is_flowing_fluid(material: &str) -> bool {
    material_is(material, "water") || material_is(material, "lava")
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

pub fn break_type(farm_material: bool) -> OperationType {
    if farm_material {
        OperationType::FARM_BLOCK_BREAK
    } else {
        OperationType::BLOCK_BREAK
    }
}

pub fn place_type(farm_material: bool) -> OperationType {
    if farm_material {
        OperationType::FARM_BLOCK_PLACE
    } else {
        OperationType::BLOCK_PLACE
    }
}

/// Right-clicking a block. Lecterns are checked before containers since
/// hosts report them as inventory holders.
pub fn interact_type(block: &BlockTraits, farm_material: bool) -> OperationType {
    if block.lectern {
        OperationType::BLOCK_INTERACT
    } else if farm_material {
        OperationType::FARM_BLOCK_INTERACT
    } else if block.inventory_holder {
        OperationType::CONTAINER_OPEN
    } else if block.switch {
        OperationType::REDSTONE_INTERACT
    } else if block.sign {
        // Editing sign text counts as placing.
        OperationType::BLOCK_PLACE
    } else {
        OperationType::BLOCK_INTERACT
    }
}

/// A player damaging a non-player entity.
pub fn player_damage_type(victim: &EntityTraits, hostile: bool) -> OperationType {
    if hostile {
        OperationType::PLAYER_DAMAGE_MONSTER
    } else if victim.vehicle && !victim.mob {
        if victim.inventory_holder {
            OperationType::BLOCK_BREAK
        } else {
            OperationType::BREAK_VEHICLE
        }
    } else if (victim.living && victim.persistent) || victim.custom_named {
        OperationType::PLAYER_DAMAGE_PERSISTENT_ENTITY
    } else {
        OperationType::PLAYER_DAMAGE_ENTITY
    }
}

/// Whether explosion damage to a non-player-caused victim is checked.
///
/// Block explosions are always checked; entity explosions only when the
/// victim is not hostile.
pub fn explosion_damages_entity(cause: DamageCause, victim_hostile: bool) -> bool {
    cause == DamageCause::BlockExplosion || cause == DamageCause::EntityExplosion && !victim_hostile
}

pub fn spawn_type(hostile: bool) -> OperationType {
    if hostile {
        OperationType::MONSTER_SPAWN
    } else {
        OperationType::PASSIVE_MOB_SPAWN
    }
}

/// Terrain damage from an entity explosion: primed explosives count as
/// explosions, anything else (creepers, withers) as monsters.
pub fn explosion_terrain_type(explosive: &EntityTraits) -> OperationType {
    if explosive.primed_explosive {
        OperationType::EXPLOSION_DAMAGE_TERRAIN
    } else {
        OperationType::MONSTER_DAMAGE_TERRAIN
    }
}

/// Placing an entity such as a boat, minecart, end crystal or armor stand.
pub fn entity_place_type(entity: &EntityTraits) -> OperationType {
    if entity.vehicle && !entity.inventory_holder {
        OperationType::PLACE_VEHICLE
    } else {
        OperationType::BLOCK_PLACE
    }
}

pub fn lightning_type(cause: LightningCause) -> OperationType {
    match cause {
        LightningCause::Trident => OperationType::BLOCK_BREAK,
        LightningCause::Trap => OperationType::MONSTER_DAMAGE_TERRAIN,
        _ => OperationType::FIRE_SPREAD,
    }
}

/// The operation implied by using an item in the air, if any. Farm items
/// take precedence over every other kind.
pub fn use_item_type(
    material: &str,
    kind: ItemKind,
    checker: &dyn TypeChecker,
) -> Option<OperationType> {
    if checker.is_farm_material(material) {
        return Some(OperationType::FARM_BLOCK_PLACE);
    }
    match kind {
        ItemKind::Block => Some(OperationType::BLOCK_PLACE),
        ItemKind::EmptyBucket => Some(OperationType::FILL_BUCKET),
        ItemKind::FilledBucket => Some(OperationType::EMPTY_BUCKET),
        ItemKind::Teleporter => Some(OperationType::ENDER_PEARL_TELEPORT),
        ItemKind::Vehicle => Some(OperationType::PLACE_VEHICLE),
        ItemKind::Decoration => Some(OperationType::PLACE_HANGING_ENTITY),
        ItemKind::SpawnEgg => Some(OperationType::USE_SPAWN_EGG),
        ItemKind::Other => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use cloplib_handler::SpecialTypeChecker;

    use super::*;

    #[test]
    fn test_material_name_strips_default_namespace() {
        assert_eq!(material_name("minecraft:stone"), "stone");
        assert_eq!(material_name(" stone "), "stone");
        assert_eq!(material_name("othermod:stone"), "othermod:stone");
        assert!(material_is("minecraft:WATER", "water"));
        assert!(!material_is("othermod:water", "water"));
    }

    #[test]
    fn test_break_and_place_follow_farm_flag() {
        assert_eq!(break_type(true), OperationType::FARM_BLOCK_BREAK);
        assert_eq!(break_type(false), OperationType::BLOCK_BREAK);
        assert_eq!(place_type(true), OperationType::FARM_BLOCK_PLACE);
        assert_eq!(place_type(false), OperationType::BLOCK_PLACE);
    }

    #[test]
    fn test_interact_priority() {
        let lectern = BlockTraits {
            lectern: true,
            inventory_holder: true,
            ..Default::default()
        };
        let chest = BlockTraits {
            inventory_holder: true,
            ..Default::default()
        };
        let lever = BlockTraits {
            switch: true,
            ..Default::default()
        };
        let sign = BlockTraits {
            sign: true,
            ..Default::default()
        };

        let cases = [
            (lectern, false, OperationType::BLOCK_INTERACT),
            (chest, false, OperationType::CONTAINER_OPEN),
            (chest, true, OperationType::FARM_BLOCK_INTERACT),
            (lever, false, OperationType::REDSTONE_INTERACT),
            (sign, false, OperationType::BLOCK_PLACE),
            (BlockTraits::default(), false, OperationType::BLOCK_INTERACT),
        ];
        for (block, farm, expected) in cases {
            assert_eq!(interact_type(&block, farm), expected);
        }
    }

    #[test]
    fn test_player_damage_classification() {
        let zombie = EntityTraits {
            mob: true,
            living: true,
            ..Default::default()
        };
        let chest_boat = EntityTraits {
            vehicle: true,
            inventory_holder: true,
            ..Default::default()
        };
        let boat = EntityTraits {
            vehicle: true,
            ..Default::default()
        };
        let horse = EntityTraits {
            vehicle: true,
            mob: true,
            living: true,
            persistent: true,
            ..Default::default()
        };
        let named_frame = EntityTraits {
            custom_named: true,
            ..Default::default()
        };

        let persistent = OperationType::PLAYER_DAMAGE_PERSISTENT_ENTITY;
        assert_eq!(
            player_damage_type(&zombie, true),
            OperationType::PLAYER_DAMAGE_MONSTER
        );
        assert_eq!(
            player_damage_type(&chest_boat, false),
            OperationType::BLOCK_BREAK
        );
        assert_eq!(
            player_damage_type(&boat, false),
            OperationType::BREAK_VEHICLE
        );
        assert_eq!(player_damage_type(&horse, false), persistent);
        assert_eq!(player_damage_type(&named_frame, false), persistent);
        // Same traits as the zombie, but not hostile.
        assert_eq!(
            player_damage_type(&zombie, false),
            OperationType::PLAYER_DAMAGE_ENTITY
        );
    }

    #[test]
    fn test_explosion_cause_asymmetry() {
        assert!(explosion_damages_entity(DamageCause::BlockExplosion, false));
        assert!(explosion_damages_entity(DamageCause::BlockExplosion, true));
        assert!(explosion_damages_entity(DamageCause::EntityExplosion, false));
        assert!(!explosion_damages_entity(DamageCause::EntityExplosion, true));
        assert!(!explosion_damages_entity(DamageCause::Other, false));
    }

    #[test]
    fn test_spawn_reason_whitelist() {
        let checked: Vec<_> = [
            SpawnReason::Natural,
            SpawnReason::Trap,
            SpawnReason::Reinforcements,
            SpawnReason::Patrol,
            SpawnReason::SpawnEgg,
            SpawnReason::Spawner,
            SpawnReason::Breeding,
            SpawnReason::BuildStructure,
            SpawnReason::Command,
            SpawnReason::Custom,
            SpawnReason::Other,
        ]
        .into_iter()
        .filter(|reason| reason.is_checked())
        .collect();
        assert_eq!(
            checked,
            vec![
                SpawnReason::Natural,
                SpawnReason::Trap,
                SpawnReason::Reinforcements,
                SpawnReason::Patrol,
            ]
        );
        assert_eq!(spawn_type(true), OperationType::MONSTER_SPAWN);
        assert_eq!(spawn_type(false), OperationType::PASSIVE_MOB_SPAWN);
    }

    #[test]
    fn test_explosion_terrain_and_entity_place() {
        let tnt = EntityTraits {
            primed_explosive: true,
            ..Default::default()
        };
        let creeper = EntityTraits {
            mob: true,
            living: true,
            ..Default::default()
        };
        let terrain = OperationType::MONSTER_DAMAGE_TERRAIN;
        assert_eq!(
            explosion_terrain_type(&tnt),
            OperationType::EXPLOSION_DAMAGE_TERRAIN
        );
        assert_eq!(explosion_terrain_type(&creeper), terrain);

        let minecart = EntityTraits {
            vehicle: true,
            ..Default::default()
        };
        let hopper_cart = EntityTraits {
            vehicle: true,
            inventory_holder: true,
            ..Default::default()
        };
        assert_eq!(entity_place_type(&minecart), OperationType::PLACE_VEHICLE);
        assert_eq!(entity_place_type(&hopper_cart), OperationType::BLOCK_PLACE);
        assert_eq!(
            entity_place_type(&EntityTraits::default()),
            OperationType::BLOCK_PLACE
        );
    }

    #[test]
    fn test_lightning_types() {
        assert_eq!(
            lightning_type(LightningCause::Trident),
            OperationType::BLOCK_BREAK
        );
        assert_eq!(
            lightning_type(LightningCause::Weather),
            OperationType::FIRE_SPREAD
        );
        assert_eq!(
            lightning_type(LightningCause::Trap),
            OperationType::MONSTER_DAMAGE_TERRAIN
        );
    }

    #[test]
    fn test_use_item_farm_first() {
        let checker = SpecialTypeChecker::bundled().unwrap();
        assert_eq!(
            use_item_type("minecraft:wheat_seeds", ItemKind::Block, &checker),
            Some(OperationType::FARM_BLOCK_PLACE)
        );
        assert_eq!(
            use_item_type("minecraft:stone", ItemKind::Block, &checker),
            Some(OperationType::BLOCK_PLACE)
        );
        assert_eq!(
            use_item_type("minecraft:bucket", ItemKind::EmptyBucket, &checker),
            Some(OperationType::FILL_BUCKET)
        );
        assert_eq!(
            use_item_type("minecraft:egg", ItemKind::SpawnEgg, &checker),
            Some(OperationType::USE_SPAWN_EGG)
        );
        let stick = use_item_type("minecraft:stick", ItemKind::Other, &checker);
        assert_eq!(stick, None);
    }

    #[test]
    fn test_fluids_and_spawn_eggs() {
        assert!(is_flowing_fluid("minecraft:water"));
        assert!(is_flowing_fluid("minecraft:lava"));
        assert!(!is_flowing_fluid("minecraft:powder_snow"));
        assert!(is_spawn_egg("minecraft:ZOMBIE_SPAWN_EGG"));
        assert!(!is_spawn_egg("minecraft:egg"));
    }
}
