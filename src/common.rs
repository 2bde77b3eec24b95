//! Shared domain types: shot outcomes, engine replies and engine errors.

use crate::geom::Coord;

/// Referee verdict on a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The shot hit open water.
    Miss,
    /// The shot hit a ship segment without sinking it.
    Wound,
    /// The shot destroyed the last segment of a ship.
    Kill,
}

/// What the engine wants to do after digesting an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextShot {
    /// Fire at the given cell.
    Fire(Coord),
    /// Every ship in the pool is sunk; nothing is left to shoot at.
    GameOver,
}

/// Errors returned by the targeting engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShooterError {
    /// Board width or height is not positive.
    InvalidDimensions { width: i32, height: i32 },
    /// A ship size is not positive or exceeds the longer board side.
    InvalidShipSizes { size: i32 },
    /// Asked to record a result for a cell outside the board.
    OutOfBounds { at: Coord },
    /// The search produced no cell worth firing at.
    NoLegalTarget,
}

impl core::fmt::Display for ShooterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShooterError::InvalidDimensions { width, height } => {
                write!(f, "Board dimensions {}x{} are not positive", width, height)
            }
            ShooterError::InvalidShipSizes { size } => {
                write!(f, "Ship size {} does not fit the board", size)
            }
            ShooterError::OutOfBounds { at } => {
                write!(f, "Cell {} is outside the board", at)
            }
            ShooterError::NoLegalTarget => write!(f, "No legal target remains"),
        }
    }
}
