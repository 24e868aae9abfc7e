//! Handler traits consulted before an operation happens.

use std::sync::Arc;

use cloplib_operation::{Chunk, Operation, Position, User, World};

use crate::checker::TypeChecker;

/// Decides whether operations, movements and natural events are vetoed.
///
/// Every query returns `true` to cancel. Queries are made synchronously on
/// the game thread and must not have side effects the caller depends on. A
/// panicking handler is not caught: the enclosing event fails rather than
/// being silently allowed.
pub trait Handler {
    /// Returns `true` if `operation` should be cancelled.
    fn cancel_operation(&self, operation: &Operation) -> bool;

    /// Returns `true` if `user` may not move from `from` to `to`.
    fn cancel_movement(&self, user: &User, from: &Position, to: &Position) -> bool;

    /// Returns `true` if a natural effect with no player behind it (fluid
    /// flow, piston push, dispenser output) may not travel from `source` to
    /// `target`.
    fn cancel_nature(&self, world: &World, source: &Position, target: &Position) -> bool;

    /// The special-type data used while classifying events for this handler.
    fn type_checker(&self) -> &dyn TypeChecker;
}

impl<H: Handler + ?Sized> Handler for &H {
    fn cancel_operation(&self, operation: &Operation) -> bool {
        (**self).cancel_operation(operation)
    }

    fn cancel_movement(&self, user: &User, from: &Position, to: &Position) -> bool {
        (**self).cancel_movement(user, from, to)
    }

    fn cancel_nature(&self, world: &World, source: &Position, target: &Position) -> bool {
        (**self).cancel_nature(world, source, target)
    }

    fn type_checker(&self) -> &dyn TypeChecker {
        (**self).type_checker()
    }
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn cancel_operation(&self, operation: &Operation) -> bool {
        (**self).cancel_operation(operation)
    }

    fn cancel_movement(&self, user: &User, from: &Position, to: &Position) -> bool {
        (**self).cancel_movement(user, from, to)
    }

    fn cancel_nature(&self, world: &World, source: &Position, target: &Position) -> bool {
        (**self).cancel_nature(world, source, target)
    }

    fn type_checker(&self) -> &dyn TypeChecker {
        (**self).type_checker()
    }
}

// ---------------------------------------------------------------------------
// ChunkHandler
// ---------------------------------------------------------------------------

/// A handler for protection systems that reason about whole chunks.
///
/// Wrap an implementation in [`ChunkHandlerAdapter`] to use it wherever a
/// [`Handler`] is expected: movement and nature checks are degraded to the
/// chunks containing each position.
pub trait ChunkHandler {
    /// Returns `true` if `operation` should be cancelled.
    fn cancel_operation(&self, operation: &Operation) -> bool;

    /// Returns `true` if `user` may not cross from chunk `from` to `to`.
    fn cancel_chunk_change(&self, user: &User, from: Chunk, to: Chunk) -> bool;

    /// Returns `true` if a natural effect may not cross from `source` to
    /// `target`.
    fn cancel_chunk_nature(&self, world: &World, source: Chunk, target: Chunk) -> bool;

    fn type_checker(&self) -> &dyn TypeChecker;
}

/// Presents a [`ChunkHandler`] as a block-granular [`Handler`].
#[derive(Debug, Clone, Default)]
pub struct ChunkHandlerAdapter<H> {
    inner: H,
}

impl<H: ChunkHandler> ChunkHandlerAdapter<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: ChunkHandler> Handler for ChunkHandlerAdapter<H> {
    fn cancel_operation(&self, operation: &Operation) -> bool {
        self.inner.cancel_operation(operation)
    }

    fn cancel_movement(&self, user: &User, from: &Position, to: &Position) -> bool {
        self.inner
            .cancel_chunk_change(user, from.chunk(), to.chunk())
    }

    fn cancel_nature(&self, world: &World, source: &Position, target: &Position) -> bool {
        self.inner
            .cancel_chunk_nature(world, source.chunk(), target.chunk())
    }

    fn type_checker(&self) -> &dyn TypeChecker {
        self.inner.type_checker()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
