use thiserror::Error;

use crate::Coord2;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Out of range: board {0} should be above 0")]
    EmptyDimension(&'static str),
    #[error("Mine count must be smaller than cell count")]
    TooManyMines,
    #[error("Adjacent mine count ({0}) should be in the 0 - 8 range")]
    InvalidAdjacentCount(u8),
    #[error("Invalid coordinates {0:?}")]
    InvalidCoords(Coord2),
}

impl GameError {
    /// Construction-time argument errors, as opposed to coordinate misuse by a caller.
    pub const fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::InvalidCoords(_))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
