//! The narrow view of a game server the classification rules need.

use cloplib_operation::{Position, User};
use glam::IVec3;

/// Who launched a projectile.
#[derive(Clone, Debug, PartialEq)]
pub enum Shooter<E, B> {
    /// Shot by an entity (a player, a skeleton, ...).
    Entity(E),
    /// Fired by a block, typically a dispenser.
    Block(B),
    /// The launcher is gone or was never recorded.
    Unknown,
}

/// Which hand an interaction was made with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hand {
    Main,
    Off,
}

impl Hand {
    /// Off-hand interactions are checked silently.
    pub fn is_silent(self) -> bool {
        self == Hand::Off
    }
}

/// One of the six axis-aligned faces of a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockFace {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl BlockFace {
    /// Unit step towards the neighbouring block on this face.
    pub fn offset(self) -> IVec3 {
        match self {
            BlockFace::North => IVec3::new(0, 0, -1),
            BlockFace::South => IVec3::new(0, 0, 1),
            BlockFace::East => IVec3::new(1, 0, 0),
            BlockFace::West => IVec3::new(-1, 0, 0),
            BlockFace::Up => IVec3::new(0, 1, 0),
            BlockFace::Down => IVec3::new(0, -1, 0),
        }
    }
}

/// Structural facts about an entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntityTraits {
    /// Boats, minecarts and other rideable vehicles.
    pub vehicle: bool,
    /// Carries an inventory (chest boats, hopper minecarts, ...).
    pub inventory_holder: bool,
    /// An AI-driven mob. Mob vehicles (horses, striders) are not vehicles
    /// for damage purposes.
    pub mob: bool,
    pub living: bool,
    /// A living entity that will not despawn when far from players.
    pub persistent: bool,
    pub custom_named: bool,
    /// Primed TNT or an explosive minecart.
    pub primed_explosive: bool,
}

/// Structural facts about a block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockTraits {
    pub air: bool,
    pub sign: bool,
    pub lectern: bool,
    /// Chests, furnaces, barrels and other containers.
    pub inventory_holder: bool,
    /// Levers, buttons and pressure plates.
    pub switch: bool,
    pub fire: bool,
}

/// The item stack a player holds while clicking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeldItem {
    /// Raw material id, e.g. `minecraft:stick`.
    pub material: String,
    /// Custom model data or a similar numeric discriminator.
    pub variant: Option<i32>,
    pub edible: bool,
}

impl HeldItem {
    pub fn new(material: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            ..Self::default()
        }
    }

    pub fn with_variant(mut self, variant: i32) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn edible(mut self) -> Self {
        self.edible = true;
        self
    }

    /// An empty hand.
    pub fn is_air(&self) -> bool {
        crate::classify::material_name(&self.material).is_empty()
            || crate::classify::material_is(&self.material, "air")
    }
}

/// Queries over the host's native entities and blocks.
///
/// Every method is a read; the listener never mutates the world through a
/// platform. Positions are `None` when the host cannot place the object in a
/// known world, in which case the event is let through unchecked.
pub trait Platform {
    /// Native entity handle.
    type Entity: Clone;
    /// Native block handle.
    type Block;

    // ---- Entities ----

    /// The player behind `entity`, or `None` if it is not a player. NPC
    /// players still resolve to a user here.
    fn as_user(&self, entity: &Self::Entity) -> Option<User>;

    /// Whether the player is a synthetic NPC.
    fn is_npc(&self, player: &Self::Entity) -> bool;

    /// The launcher of a projectile, or `None` if `entity` is not a
    /// projectile.
    fn shooter(&self, entity: &Self::Entity) -> Option<Shooter<Self::Entity, Self::Block>>;

    /// Entities riding `entity`, in mount order.
    fn passengers(&self, entity: &Self::Entity) -> Vec<Self::Entity>;

    /// Whether the entity counts as a hostile monster.
    fn is_hostile(&self, entity: &Self::Entity) -> bool;

    fn entity_traits(&self, entity: &Self::Entity) -> EntityTraits;

    fn entity_position(&self, entity: &Self::Entity) -> Option<Position>;

    /// Raw entity type id, e.g. `minecraft:enderman`.
    fn entity_type_id(&self, entity: &Self::Entity) -> String;

    /// Whether the player is currently riding something.
    fn is_inside_vehicle(&self, player: &Self::Entity) -> bool;

    // ---- Blocks ----

    fn block_position(&self, block: &Self::Block) -> Option<Position>;

    /// Raw material id, e.g. `minecraft:wheat`.
    fn block_material(&self, block: &Self::Block) -> String;

    fn block_traits(&self, block: &Self::Block) -> BlockTraits;

    /// The first solid block the player is looking at within
    /// `max_distance` blocks, ignoring fluids.
    fn target_block(&self, player: &Self::Entity, max_distance: u32) -> Option<Position>;

    // ---- Provided ----

    fn is_player(&self, entity: &Self::Entity) -> bool {
        self.as_user(entity).is_some()
    }

    /// The player responsible for `entity`: the entity itself if it is a
    /// player, the launching player of a projectile, or else the first
    /// player riding it.
    fn player_source(&self, entity: &Self::Entity) -> Option<Self::Entity> {
        if self.is_player(entity) {
            return Some(entity.clone());
        }
        if let Some(Shooter::Entity(shooter)) = self.shooter(entity) {
            if self.is_player(&shooter) {
                return Some(shooter);
            }
        }
        self.passengers(entity)
            .into_iter()
            .find(|passenger| self.is_player(passenger))
    }

    /// Like [`player_source`](Self::player_source), but NPC players resolve
    /// to no actor.
    fn resolve_actor(&self, entity: &Self::Entity) -> Option<User> {
        let player = self.player_source(entity)?;
        if self.is_npc(&player) {
            return None;
        }
        self.as_user(&player)
    }

    /// `player` as an actor, or `None` for NPCs.
    fn actor(&self, player: &Self::Entity) -> Option<User> {
        if self.is_npc(player) {
            return None;
        }
        self.as_user(player)
    }
}
