use std::collections::VecDeque;

use core::time::Duration;
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Outcome of opening a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Game already over, or the cell was open or flagged
    NoChange,
    /// Cell opened safely, possibly cascading into its zero region
    Opened,
    /// A mine was opened and the game is lost
    Exploded,
}

impl OpenOutcome {
    /// True only when a cell was opened without detonating a mine.
    pub const fn succeeded(self) -> bool {
        matches!(self, Self::Opened)
    }

    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of toggling a flag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    /// Game already over, or no flags left
    NoChange,
    Flagged,
    Unflagged,
    /// The last flag landed and every flag sits on a mine
    Won,
}

impl FlagOutcome {
    /// True for a plain flag change; false when nothing happened or the game just ended.
    pub const fn succeeded(self) -> bool {
        matches!(self, Self::Flagged | Self::Unflagged)
    }

    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Active,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game from construction until it is won or lost.
///
/// The grid is stored `[x][y]` and only handed out as copies; all changes go
/// through [`Board::open`] and [`Board::toggle_flag`].
#[derive(Clone, Debug)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    flag_count: CellCount,
    state: GameState,
    stopwatch: Stopwatch,
}

impl Board {
    /// Random board seeded from system entropy.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        Self::from_config(GameConfig::new((width, height), mines)?)
    }

    pub fn from_config(config: GameConfig) -> Result<Self> {
        Self::with_seed(config, rand::rng().random())
    }

    /// Reproducible random board: the same config and seed give the same mines.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::from_layout(&MineLayout::random(config, &mut rng)?)
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        Self::from_layout(&MineLayout::from_mine_coords(size, mine_coords)?)
    }

    /// Builds every cell with its final adjacency count and starts the clock.
    pub fn from_layout(layout: &MineLayout) -> Result<Self> {
        Self::from_layout_at(layout, Instant::now())
    }

    pub fn from_layout_at(layout: &MineLayout, now: Instant) -> Result<Self> {
        let size = layout.size();
        let mut cells: Array2<Cell> = Array2::default(size.to_nd_index());

        for x in 0..size.0 {
            for y in 0..size.1 {
                let coords = (x, y);
                let mined = layout.contains_mine(coords);
                let adjacent = if mined {
                    0
                } else {
                    layout.adjacent_mine_count(coords)
                };
                cells[coords.to_nd_index()] = Cell::new(mined, adjacent)?;
            }
        }

        log::debug!(
            "New board {}x{} with {} mines",
            size.0,
            size.1,
            layout.mine_count()
        );

        Ok(Self {
            cells,
            mine_count: layout.mine_count(),
            flag_count: 0,
            state: GameState::Active,
            stopwatch: Stopwatch::start_at(now),
        })
    }

    pub fn size(&self) -> Coord2 {
        let (x, y) = self.cells.dim();
        (x as Coord, y as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn is_win(&self) -> bool {
        matches!(self.state, GameState::Won)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// Mines not yet accounted for by a flag.
    pub fn mines_left(&self) -> CellCount {
        self.mine_count - self.flag_count
    }

    /// Copy of every cell, x-major: index `x * height + y`.
    pub fn grid(&self) -> Vec<Cell> {
        self.cells.iter().copied().collect()
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords(coords))
        }
    }

    /// Opens a cell, cascading through connected zero cells.
    pub fn open(&mut self, coords: Coord2) -> Result<OpenOutcome> {
        self.open_at(coords, Instant::now())
    }

    pub fn open_at(&mut self, coords: Coord2, now: Instant) -> Result<OpenOutcome> {
        let coords = self.validate_coords(coords)?;

        if !self.state.is_active() {
            return Ok(OpenOutcome::NoChange);
        }

        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_open() || cell.is_flagged() {
            return Ok(OpenOutcome::NoChange);
        }

        if cell.is_mined() {
            cell.open();
            log::debug!("Mine opened at {:?}, game lost", coords);
            self.end_game(GameState::Lost, now);
            return Ok(OpenOutcome::Exploded);
        }

        self.flood_open(coords);
        Ok(OpenOutcome::Opened)
    }

    /// Opens `start` and, breadth first, every cell reachable through zero cells.
    fn flood_open(&mut self, start: Coord2) {
        let size = self.size();
        let mut visited: Array2<bool> = Array2::default(size.to_nd_index());
        visited[start.to_nd_index()] = true;
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let cell = &mut self.cells[coords.to_nd_index()];
            if cell.is_open() || cell.is_flagged() {
                log::trace!("Skipping cell at {:?}", coords);
                continue;
            }

            // zero cells have no mined neighbors, so the cascade never reaches a mine
            debug_assert!(!cell.is_mined());
            cell.open();
            log::trace!("Opened cell at {:?}: {}", coords, cell.adjacent_count());

            if cell.adjacent_count() == 0 {
                to_visit.extend(NeighborIter::new(coords, size).filter(|&pos| {
                    !std::mem::replace(&mut visited[pos.to_nd_index()], true)
                }));
            }
        }
    }

    /// Flags or unflags a cell; flags are capped at the mine count.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        self.toggle_flag_at(coords, Instant::now())
    }

    pub fn toggle_flag_at(&mut self, coords: Coord2, now: Instant) -> Result<FlagOutcome> {
        let coords = self.validate_coords(coords)?;

        if !self.state.is_active() {
            return Ok(FlagOutcome::NoChange);
        }

        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_flagged() {
            cell.toggle_flag();
            self.flag_count -= 1;
            return Ok(FlagOutcome::Unflagged);
        }

        if self.flag_count >= self.mine_count {
            return Ok(FlagOutcome::NoChange);
        }

        cell.toggle_flag();
        self.flag_count += 1;

        if self.all_mines_flagged() {
            log::debug!("All {} mines flagged, game won", self.mine_count);
            self.end_game(GameState::Won, now);
            Ok(FlagOutcome::Won)
        } else {
            Ok(FlagOutcome::Flagged)
        }
    }

    /// Win check: every mine carries a flag and no flag is misplaced.
    ///
    /// Recomputed from the grid on every call. A board without mines never
    /// qualifies.
    pub fn all_mines_flagged(&self) -> bool {
        self.mine_count > 0
            && self.flag_count == self.mine_count
            && !self
                .cells
                .iter()
                .any(|cell| cell.is_flagged() && !cell.is_mined())
    }

    pub fn is_timer_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    pub fn elapsed(&self) -> Duration {
        self.stopwatch.elapsed()
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        self.stopwatch.elapsed_at(now)
    }

    pub fn elapsed_millis(&self) -> u64 {
        duration_millis(self.elapsed())
    }

    /// Pauses a running timer or resumes a paused one; frozen once the game ends.
    pub fn toggle_timer(&mut self) {
        self.toggle_timer_at(Instant::now());
    }

    pub fn toggle_timer_at(&mut self, now: Instant) {
        if !self.state.is_active() {
            return;
        }
        if self.stopwatch.is_running() {
            self.stopwatch.pause_at(now);
            log::trace!("Timer paused");
        } else {
            self.stopwatch.resume_at(now);
            log::trace!("Timer resumed");
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_board(self)
    }

    fn end_game(&mut self, state: GameState, now: Instant) {
        self.state = state;
        self.stopwatch.pause_at(now);
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
