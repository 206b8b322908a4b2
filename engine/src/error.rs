//! Construction-time error kinds.
//!
//! These are all synchronous: the engine itself cannot fail during `step`
//! (every direction is accepted and illegal moves degrade to `STAY`), only
//! construction and builder misuse are fallible.

use crate::Coordinates;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid dimensions: width and height must each be >= 2, got {width}x{height}")]
    InvalidDimension { width: u8, height: u8 },

    #[error("invalid position {pos:?}: outside a {width}x{height} board")]
    InvalidPosition {
        pos: Coordinates,
        width: u8,
        height: u8,
    },

    #[error("invalid edge: {0:?} and {1:?} are not adjacent")]
    InvalidEdge(Coordinates, Coordinates),

    #[error("invalid mud cost {0}: must be in range 2..=255")]
    InvalidMudCost(u16),

    #[error("duplicate wall between {0:?} and {1:?}")]
    DuplicateWall(Coordinates, Coordinates),

    #[error("duplicate mud between {0:?} and {1:?}")]
    DuplicateMud(Coordinates, Coordinates),

    #[error("duplicate cheese at {0:?}")]
    DuplicateCheese(Coordinates),

    #[error("a game must start with at least one cheese")]
    EmptyCheese,

    #[error("builder incomplete: {0} strategy was never selected")]
    BuilderIncomplete(&'static str),
}
