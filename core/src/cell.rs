use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Highest adjacency a cell can have: all eight neighbors mined.
pub const MAX_ADJACENT: u8 = 8;

/// Content of one board position plus its play state.
///
/// Whether the cell holds a mine and its adjacency count are fixed once
/// built; only the open and flagged markers change during play.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    mined: bool,
    adjacent: u8,
    open: bool,
    flagged: bool,
}

impl Cell {
    /// Builds a cell, `adjacent` is ignored for mined cells.
    pub fn new(mined: bool, adjacent: u8) -> Result<Self> {
        if mined {
            return Ok(Self::mine());
        }
        if adjacent > MAX_ADJACENT {
            return Err(GameError::InvalidAdjacentCount(adjacent));
        }
        Ok(Self {
            adjacent,
            ..Self::default()
        })
    }

    pub const fn mine() -> Self {
        Self {
            mined: true,
            adjacent: 0,
            open: false,
            flagged: false,
        }
    }

    pub const fn is_mined(&self) -> bool {
        self.mined
    }

    /// Number of mined neighbors, always 0 for a mined cell.
    pub const fn adjacent_count(&self) -> u8 {
        self.adjacent
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn toggle_flag(&mut self) {
        self.flagged = !self.flagged;
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mined {
            f.write_str("mined")?;
        } else {
            write!(f, "number {}", self.adjacent)?;
        }
        if self.flagged {
            f.write_str(", flagged")?;
        }
        if self.open {
            f.write_str(", open")?;
        }
        Ok(())
    }
}
