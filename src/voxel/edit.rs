//! Edit records and outcomes.
//!
//! Only the most recent successful mutation is remembered, which is what
//! gives the world its single level of undo.

use std::fmt;

use super::block::BlockKind;
use super::coord::Coordinate;

/// The most recent successful mutation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LastAction {
    /// A block was placed at `coord`
    Add { coord: Coordinate, kind: BlockKind },
    /// A block of `kind` was removed from `coord`
    Remove { coord: Coordinate, kind: BlockKind },
}

impl LastAction {
    pub fn coord(&self) -> Coordinate {
        match self {
            LastAction::Add { coord, .. } | LastAction::Remove { coord, .. } => *coord,
        }
    }
}

/// Why an operation left the grid untouched
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoOpReason {
    /// Placement target already holds a block
    Occupied,
    /// Removal target holds no block
    Empty,
    /// Face direction did not resolve to a single axis-aligned unit step
    InvalidDirection,
    /// Adjacent cell would overflow the coordinate range
    OutOfRange,
    /// Undo requested with no recorded action
    NothingToUndo,
    /// Undo of a removal found the cell re-occupied
    RestoreBlocked,
    /// Clear requested on an empty grid
    AlreadyEmpty,
}

/// Result of a world operation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Placed { coord: Coordinate, kind: BlockKind },
    Removed { coord: Coordinate, kind: BlockKind },
    Cleared { count: usize },
    Imported { count: usize },
    Unchanged(NoOpReason),
}

impl EditOutcome {
    /// Whether the grid was modified
    pub fn is_change(&self) -> bool {
        !matches!(self, EditOutcome::Unchanged(_))
    }
}

impl fmt::Display for EditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOutcome::Placed { coord, kind } => write!(f, "placed {} at {}", kind, coord),
            EditOutcome::Removed { coord, kind } => write!(f, "removed {} at {}", kind, coord),
            EditOutcome::Cleared { count } => write!(f, "cleared {} blocks", count),
            EditOutcome::Imported { count } => write!(f, "imported {} blocks", count),
            EditOutcome::Unchanged(reason) => write!(f, "unchanged ({:?})", reason),
        }
    }
}
