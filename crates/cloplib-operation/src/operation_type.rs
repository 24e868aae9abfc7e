//! Operation kinds: namespaced identifiers with a default visibility.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::PoisonError;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::key::{Key, KeyError};
use crate::registry::OperationTypeRegistry;

/// A kind of operation, such as placing a block or damaging a player.
///
/// Identity is the [`Key`]: two types are equal when their minimal string
/// forms match, whatever their `silent` flag and however they were created.
/// `silent` only decides whether a vetoed operation of this kind notifies
/// the acting player by default.
#[derive(Clone, Debug)]
pub struct OperationType {
    key: Key,
    silent: bool,
}

macro_rules! builtin_types {
    ($($(#[$doc:meta])* $name:ident = $value:literal, $silent:literal;)*) => {
        impl OperationType {
            $(
                $(#[$doc])*
                pub const $name: OperationType = OperationType::builtin($value, $silent);
            )*

            /// Every built-in type, in declaration order.
            pub fn builtins() -> Vec<OperationType> {
                vec![$(Self::$name),*]
            }
        }
    };
}

builtin_types! {
    /// A player placing a block (also: editing a sign, creating a portal).
    BLOCK_PLACE = "block_place", false;
    /// A player breaking a block.
    BLOCK_BREAK = "block_break", false;
    /// A player right-clicking or stepping on a block.
    BLOCK_INTERACT = "block_interact", false;
    /// A player using a switch or pressure-sensitive block.
    REDSTONE_INTERACT = "redstone_interact", true;
    /// Redstone activity outside any claim reaching into one.
    REDSTONE_OUTSIDE_CLAIMS = "redstone_outside_claims", true;
    /// A player breaking a crop or other farm block.
    FARM_BLOCK_BREAK = "farm_block_break", false;
    /// A player planting a crop or other farm block.
    FARM_BLOCK_PLACE = "farm_block_place", false;
    /// A player hurting another player.
    PLAYER_DAMAGE_PLAYER = "player_damage_player", false;
    /// A player hurting a hostile mob.
    PLAYER_DAMAGE_MONSTER = "player_damage_monster", false;
    /// A player hurting a passive entity.
    PLAYER_DAMAGE_ENTITY = "player_damage_entity", false;
    /// A player hurting a named or persistent entity.
    PLAYER_DAMAGE_PERSISTENT_ENTITY = "player_damage_persistent_entity", false;
    /// A hostile mob spawning.
    MONSTER_SPAWN = "monster_spawn", true;
    /// A passive mob spawning.
    PASSIVE_MOB_SPAWN = "passive_mob_spawn", true;
    /// A hostile mob altering terrain or hurting passive entities.
    MONSTER_DAMAGE_TERRAIN = "monster_damage_terrain", true;
    /// An explosion destroying terrain.
    EXPLOSION_DAMAGE_TERRAIN = "explosion_damage_terrain", true;
    /// An explosion hurting an entity.
    EXPLOSION_DAMAGE_ENTITY = "explosion_damage_entity", true;
    /// Fire burning a block away.
    FIRE_BURN = "fire_burn", true;
    /// Fire spreading to a block.
    FIRE_SPREAD = "fire_spread", true;
    /// A player filling a bucket.
    FILL_BUCKET = "fill_bucket", false;
    /// A player emptying a bucket.
    EMPTY_BUCKET = "empty_bucket", false;
    /// A player placing a painting, item frame or similar.
    PLACE_HANGING_ENTITY = "place_hanging_entity", false;
    /// A player breaking a painting, item frame or similar.
    BREAK_HANGING_ENTITY = "break_hanging_entity", false;
    /// A player placing a boat or minecart.
    PLACE_VEHICLE = "place_vehicle", false;
    /// Breaking a boat or minecart.
    BREAK_VEHICLE = "break_vehicle", false;
    /// A player right-clicking an entity.
    ENTITY_INTERACT = "entity_interact", false;
    /// A player right-clicking a farm block.
    FARM_BLOCK_INTERACT = "farm_block_interact", false;
    /// A player using a spawn egg or hatching a thrown egg.
    USE_SPAWN_EGG = "use_spawn_egg", false;
    /// A player teleporting by ender pearl or chorus fruit.
    ENDER_PEARL_TELEPORT = "ender_pearl_teleport", false;
    /// A player opening a container, lectern or armor stand.
    CONTAINER_OPEN = "container_open", false;
    /// A player triggering a raid.
    START_RAID = "start_raid", false;
}

impl OperationType {
    const fn builtin(value: &'static str, silent: bool) -> Self {
        Self {
            key: Key::builtin(value),
            silent,
        }
    }

    /// Constructs a type without touching any registry.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Invalid`] if `key` is not a valid key.
    pub fn create(key: &str, silent: bool) -> Result<Self, KeyError> {
        Ok(Self::from_key(Key::parse(key)?, silent))
    }

    /// Constructs a type from an already parsed key.
    pub fn from_key(key: Key, silent: bool) -> Self {
        Self { key, silent }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Whether operations of this type are silent by default.
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// The bare name for built-in namespace types, the full key otherwise.
    pub fn as_minimal_string(&self) -> String {
        self.key.as_minimal_string().into_owned()
    }
}

impl PartialEq for OperationType {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for OperationType {}

impl Hash for OperationType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialEq<str> for OperationType {
    fn eq(&self, other: &str) -> bool {
        Key::parse(other).is_ok_and(|key| key == self.key)
    }
}

impl PartialEq<&str> for OperationType {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.key, f)
    }
}

impl Serialize for OperationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.key)
    }
}

/// Deserializes through the process-wide registry, so unknown keys come back
/// as transient non-silent types instead of failing.
impl<'de> Deserialize<'de> for OperationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        OperationTypeRegistry::global()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_create(&key)
            .map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
