//! Shared outcome and error types for board operations.

use std::fmt;

/// Result of resolving a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot hit a ship segment without sinking it.
    Hit,
    /// Shot removed a ship's last segment.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shooter fires again.
    pub fn grants_extra_shot(&self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Errors returned by board operations. All of these are expected,
/// recoverable outcomes: placement errors drive the generator's retry loop
/// and shot errors drive the combatant's re-prompt loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship placement extends outside the board.
    PlacementOutOfBounds,
    /// Ship placement overlaps another ship or its buffer zone.
    PlacementOverlap,
    /// Shot aimed outside the board.
    ShotOutOfBounds,
    /// Shot aimed at a cell that was already resolved.
    AlreadyTargeted,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::PlacementOutOfBounds => write!(f, "ship placement is out of bounds"),
            BoardError::PlacementOverlap => {
                write!(f, "ship placement overlaps another ship or its buffer")
            }
            BoardError::ShotOutOfBounds => write!(f, "shot is outside the board"),
            BoardError::AlreadyTargeted => write!(f, "this cell was already fired upon"),
        }
    }
}

impl std::error::Error for BoardError {}
