//! Canonical operation model for claim protection.
//!
//! An [`Operation`] is an immutable snapshot of one potentially-vetoable game
//! action: an [`OperationType`], the [`Position`] where it happens, and an
//! optional acting and victim [`User`]. Operation types are namespaced
//! [`Key`]s held in an open [`OperationTypeRegistry`] so that host plugins can
//! contribute their own kinds next to the built-in set.

pub mod geometry;
pub mod key;
pub mod operation;
pub mod operation_type;
pub mod registry;

pub use geometry::{CHUNK_SIZE, Chunk, OVERWORLD_ENVIRONMENT, Position, User, World};
pub use key::{DEFAULT_NAMESPACE, Key, KeyError};
pub use operation::Operation;
pub use operation_type::OperationType;
pub use registry::{OperationTypeRegistry, RegistryError};
