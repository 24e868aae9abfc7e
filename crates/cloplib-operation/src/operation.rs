//! The immutable [`Operation`] snapshot handed to a handler.

use crate::geometry::{Position, User};
use crate::operation_type::OperationType;

/// One potentially-vetoable game action.
///
/// Built fresh for each native event through one of the factory functions,
/// passed to a single handler query and then dropped. Unless a factory takes
/// an explicit `silent` flag, the operation inherits the silence of its type.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    operation_type: OperationType,
    position: Position,
    user: Option<User>,
    victim: Option<User>,
    silent: bool,
}

impl Operation {
    /// An operation with no actor, e.g. fire spreading.
    pub fn of(operation_type: OperationType, position: Position) -> Self {
        Self::between(None, None, operation_type, position)
    }

    /// An operation with no actor and explicit visibility.
    pub fn of_silent(operation_type: OperationType, position: Position, silent: bool) -> Self {
        Self {
            silent,
            ..Self::of(operation_type, position)
        }
    }

    /// An operation performed by `user`, if any.
    pub fn by(user: Option<User>, operation_type: OperationType, position: Position) -> Self {
        Self::between(user, None, operation_type, position)
    }

    /// An operation performed by `user`, if any, with explicit visibility.
    pub fn by_silent(
        user: Option<User>,
        operation_type: OperationType,
        position: Position,
        silent: bool,
    ) -> Self {
        Self {
            silent,
            ..Self::by(user, operation_type, position)
        }
    }

    /// An operation performed by `user` against `victim`.
    pub fn between(
        user: Option<User>,
        victim: Option<User>,
        operation_type: OperationType,
        position: Position,
    ) -> Self {
        let silent = operation_type.is_silent();
        Self {
            operation_type,
            position,
            user,
            victim,
            silent,
        }
    }

    pub fn operation_type(&self) -> &OperationType {
        &self.operation_type
    }

    /// Where the operation takes place.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The acting player, absent for natural or non-player causes.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The player on the receiving end, if any.
    pub fn victim(&self) -> Option<&User> {
        self.victim.as_ref()
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Whether a veto of this operation should be shown to the acting player.
    pub fn is_verbose(&self) -> bool {
        !self.silent
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
