use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::*;

/// Owns the current board and replaces it wholesale on a new game.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    rng: SmallRng,
    board: Board,
    games_started: u32,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_seed(config, rand::random())
    }

    /// Successive games are drawn from one seeded generator, so the whole
    /// sequence of boards repeats for the same seed.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::with_seed(config, rng.random())?;
        Ok(Self {
            config,
            rng,
            board,
            games_started: 1,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Drops the current board and deals a new one with the same config.
    pub fn restart(&mut self) -> Result<()> {
        self.new_game(self.config)
    }

    /// On error the current game is kept untouched.
    pub fn new_game(&mut self, config: GameConfig) -> Result<()> {
        let board = Board::with_seed(config, self.rng.random())?;
        self.board = board;
        self.config = config;
        self.games_started += 1;
        log::debug!("Game #{} started with {:?}", self.games_started, config);
        Ok(())
    }

    pub fn open(&mut self, coords: Coord2) -> Result<OpenOutcome> {
        self.board.open(coords)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        self.board.toggle_flag(coords)
    }

    pub fn toggle_timer(&mut self) {
        self.board.toggle_timer();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }
}
