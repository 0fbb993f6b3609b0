use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only copy of everything a view needs to draw a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord2,
    pub mine_count: CellCount,
    pub flag_count: CellCount,
    pub state: GameState,
    pub elapsed_millis: u64,
    pub timer_running: bool,
    /// x-major, see [`Board::grid`]
    pub cells: Vec<Cell>,
}

impl BoardSnapshot {
    pub fn from_board(board: &Board) -> Self {
        Self {
            size: board.size(),
            mine_count: board.mine_count(),
            flag_count: board.flag_count(),
            state: board.state(),
            elapsed_millis: board.elapsed_millis(),
            timer_running: board.is_timer_running(),
            cells: board.grid(),
        }
    }

    pub fn cell_at(&self, (x, y): Coord2) -> Option<Cell> {
        if x >= self.size.0 || y >= self.size.1 {
            return None;
        }
        let index = usize::from(x) * usize::from(self.size.1) + usize::from(y);
        self.cells.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_matches_board() {
        let mut board = Board::from_mine_coords((3, 2), &[(2, 1)]).unwrap();
        board.toggle_flag((2, 1)).unwrap();

        let snapshot = board.snapshot();
        assert_eq!(snapshot.size, (3, 2));
        assert_eq!(snapshot.state, GameState::Won);
        assert_eq!(snapshot.flag_count, 1);
        assert!(!snapshot.timer_running);
        assert_eq!(snapshot.cells.len(), 6);
        for x in 0..3 {
            for y in 0..2 {
                assert_eq!(snapshot.cell_at((x, y)), board.cell_at((x, y)).ok());
            }
        }
        assert_eq!(snapshot.cell_at((3, 0)), None);
    }

    #[test]
    fn snapshot_serializes() {
        let board = Board::from_mine_coords((2, 2), &[(0, 1)]).unwrap();
        let snapshot = board.snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: BoardSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.cells, snapshot.cells);
        assert_eq!(parsed.state, GameState::Active);
        assert!(json.contains("\"mine_count\":1"));
    }
}
