//! Where and who an operation concerns: worlds, positions, chunks and users.

use std::sync::Arc;

use glam::{DVec3, IVec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Environment tag of a standard overworld.
pub const OVERWORLD_ENVIRONMENT: &str = "NORMAL";

/// Width of a chunk along the X and Z axes, in blocks.
pub const CHUNK_SIZE: i32 = 16;

// ---------------------------------------------------------------------------
// World
// ---------------------------------------------------------------------------

/// A game world, identified by name and unique id.
///
/// Worlds are owned by the host and shared into positions via [`Arc`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct World {
    name: String,
    uuid: Uuid,
    environment: String,
}

impl World {
    /// Creates an overworld-environment world.
    pub fn new(name: impl Into<String>, uuid: Uuid) -> Self {
        Self {
            name: name.into(),
            uuid,
            environment: OVERWORLD_ENVIRONMENT.to_string(),
        }
    }

    /// Replaces the environment tag (e.g. `"NETHER"`, `"THE_END"`).
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A point in a world, with an optional view rotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    coords: DVec3,
    yaw: f32,
    pitch: f32,
    world: Arc<World>,
}

impl Position {
    /// Creates a position with zero yaw and pitch.
    pub fn new(x: f64, y: f64, z: f64, world: Arc<World>) -> Self {
        Self {
            coords: DVec3::new(x, y, z),
            yaw: 0.0,
            pitch: 0.0,
            world,
        }
    }

    /// Creates the position of the block cell at integer coordinates.
    pub fn of_block(block: IVec3, world: Arc<World>) -> Self {
        let coords = block.as_dvec3();
        Self::new(coords.x, coords.y, coords.z, world)
    }

    /// Returns a copy of this position with the given rotation.
    pub fn with_rotation(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }

    pub fn x(&self) -> f64 {
        self.coords.x
    }

    pub fn y(&self) -> f64 {
        self.coords.y
    }

    pub fn z(&self) -> f64 {
        self.coords.z
    }

    pub fn coords(&self) -> DVec3 {
        self.coords
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn world(&self) -> &Arc<World> {
        &self.world
    }

    /// The chunk containing this position.
    pub fn chunk(&self) -> Chunk {
        Chunk::containing(self)
    }

    /// The integer block cell containing this position (each axis floored).
    pub fn block(&self) -> IVec3 {
        self.coords.floor().as_ivec3()
    }

    /// Returns `true` if both positions fall in the same block cell of the
    /// same world.
    pub fn same_block(&self, other: &Position) -> bool {
        self.world == other.world && self.block() == other.block()
    }

    /// Returns the position offset by whole blocks, keeping world and rotation.
    pub fn offset(&self, delta: IVec3) -> Self {
        Self {
            coords: self.coords + delta.as_dvec3(),
            ..self.clone()
        }
    }

    /// Euclidean distance to another position. Worlds are not compared.
    pub fn distance_between(&self, other: &Position) -> f64 {
        self.coords.distance(other.coords)
    }
}

// ---------------------------------------------------------------------------
// Chunk
// ---------------------------------------------------------------------------

/// A 16×16 column of the world grid, addressed by chunk coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk-grid X coordinate.
    pub x: i32,
    /// Chunk-grid Z coordinate.
    pub z: i32,
}

impl Chunk {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The chunk containing `position`. Negative coordinates floor, so
    /// `x = -0.5` lies in chunk `-1`.
    pub fn containing(position: &Position) -> Self {
        let size = f64::from(CHUNK_SIZE);
        Self {
            x: (position.x() / size).floor() as i32,
            z: (position.z() / size).floor() as i32,
        }
    }

    /// Manhattan distance in chunks.
    pub fn distance_between(&self, other: &Chunk) -> i32 {
        (self.x - other.x).abs() + (self.z - other.z).abs()
    }

    /// Returns `true` if `position` lies in `[x*16, (x+1)*16)` on both the X
    /// and Z axes.
    pub fn contains(&self, position: &Position) -> bool {
        let size = f64::from(CHUNK_SIZE);
        let (min_x, min_z) = (f64::from(self.x) * size, f64::from(self.z) * size);
        position.x() >= min_x
            && position.x() < min_x + size
            && position.z() >= min_z
            && position.z() < min_z + size
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A human player acting in, or suffering, an operation.
///
/// Non-player actors are never represented as a `User`; operations caused by
/// them carry no actor at all.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    name: String,
    uuid: Uuid,
    position: Position,
}

impl User {
    pub fn new(name: impl Into<String>, uuid: Uuid, position: Position) -> Self {
        Self {
            name: name.into(),
            uuid,
            position,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// The user's current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The world the user is currently in.
    pub fn world(&self) -> &Arc<World> {
        self.position.world()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
