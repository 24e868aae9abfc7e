//! The policy boundary: the [`Handler`] a protection plugin implements to veto
//! operations, its chunk-granular refinement [`ChunkHandler`], and the
//! [`TypeChecker`] data classifying raw material and mob identifiers.

mod checker;
mod handler;

pub use checker::{SpecialTypeChecker, SpecialTypes, TypeChecker, TypeCheckerError};
pub use handler::{ChunkHandler, ChunkHandlerAdapter, Handler};
