//! What a listener tells the host to do with a native event.

/// Outcome of a single veto query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Decision {
    /// Let the native action proceed.
    #[default]
    Allow,
    /// Cancel the native event.
    Cancel,
}

impl Decision {
    /// Maps a handler answer (`true` = cancel) to a decision.
    pub fn from_veto(cancel: bool) -> Self {
        if cancel { Self::Cancel } else { Self::Allow }
    }

    pub fn is_cancelled(self) -> bool {
        self == Self::Cancel
    }

    pub fn is_allowed(self) -> bool {
        self == Self::Allow
    }

    /// Cancels if either decision cancels.
    pub fn or(self, other: Decision) -> Self {
        Self::from_veto(self.is_cancelled() || other.is_cancelled())
    }
}

/// Result type for hosts whose events are function-pointer callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionResult {
    /// Continue with the default behaviour.
    Pass,
    /// Stop the action.
    Fail,
}

impl From<Decision> for ActionResult {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Allow => Self::Pass,
            Decision::Cancel => Self::Fail,
        }
    }
}

/// The block-use and item-use state of a click after classification.
///
/// Starts from the denial state the host passed in; classification only ever
/// adds denials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct InteractOutcome {
    /// Interacting with the clicked block is denied.
    pub deny_block: bool,
    /// Using the held item is denied.
    pub deny_item: bool,
}

impl InteractOutcome {
    pub fn deny_both(&mut self) {
        self.deny_block = true;
        self.deny_item = true;
    }

    /// Whether anything is denied.
    pub fn is_denied(&self) -> bool {
        self.deny_block || self.deny_item
    }
}

/// Outcome of a player movement check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Movement {
    #[default]
    Allow,
    /// Cancel the move; `dismount` asks the host to take the player out of
    /// the vehicle they are riding.
    Cancel { dismount: bool },
}

impl Movement {
    pub fn is_cancelled(self) -> bool {
        matches!(self, Self::Cancel { .. })
    }
}

/// Outcome of a vehicle movement check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VehicleMovement {
    #[default]
    Allow,
    /// Dismount the riding player and teleport the vehicle back to where the
    /// move started.
    Eject,
}
