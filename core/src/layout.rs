use core::ops::Index;
use ndarray::Array2;
use rand::{Rng, seq::SliceRandom};

use crate::*;

/// Where the mines are, before any play state exists.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Places `config.mines` mines uniformly at random.
    ///
    /// The flat index list is partially shuffled (Fisher-Yates) and the first
    /// `mines` indices become mines, so every subset is equally likely and the
    /// cost is bounded by the cell count.
    pub fn random<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let height = usize::from(config.height());
        let mut indices: Vec<usize> = (0..usize::from(config.total_cells())).collect();
        let (mined, _) = indices.partial_shuffle(rng, config.mines.into());

        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        for &index in mined.iter() {
            mine_mask[[index / height, index % height]] = true;
        }

        Ok(Self {
            mine_mask,
            mine_count: config.mines,
        })
    }

    /// Fixed layout, duplicate coordinates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        GameConfig::new(size, 0)?;

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords(coords));
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        let mine_count = mine_mask.iter().filter(|&&mined| mined).count();
        let mine_count = CellCount::try_from(mine_count).map_err(|_| GameError::TooManyMines)?;
        GameConfig::new(size, mine_count)?;

        Ok(Self {
            mine_mask,
            mine_count,
        })
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.mine_mask.dim();
        // dimensions always come from a `Coord2`
        (x as Coord, y as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        NeighborIter::new(coords, self.size())
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}
