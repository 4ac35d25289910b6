use rand::prelude::*;

use crate::*;

/// Owns the board of the current session and hands out fresh boards on restart.
#[derive(Clone, Debug)]
pub struct BoardEngine {
    config: GameConfig,
    board: Board,
    seeds: SmallRng,
}

impl BoardEngine {
    /// Starts a session with a random board. The same `seed` replays the same sequence of boards.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut seeds = SmallRng::seed_from_u64(seed);
        let board = RandomBoardGenerator::new(seeds.random()).generate(config);
        Self {
            config,
            board,
            seeds,
        }
    }

    /// Validates the three configuration integers and starts a session.
    pub fn with_size(rows: Coord, cols: Coord, mines: CellCount, seed: u64) -> Result<Self> {
        Ok(Self::new(GameConfig::new(rows, cols, mines)?, seed))
    }

    /// Starts a session on a prepared board. Restarts generate random boards of the same size and mine count.
    pub fn from_board(board: Board, seed: u64) -> Self {
        let config = GameConfig::new_unchecked(board.size(), board.mine_count());
        Self {
            config,
            board,
            seeds: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.board.state()
    }

    pub fn is_finished(&self) -> bool {
        self.board.is_finished()
    }

    pub fn apply(&mut self, coords: Coord2, action: Action) -> ActionResult {
        let result = self.board.apply(coords, action);
        if result.outcome.has_update() {
            log::trace!("{:?} at {:?}: {:?}", action, coords, result);
        }
        result
    }

    pub fn reveal(&mut self, coords: Coord2) -> ActionResult {
        self.apply(coords, Action::RevealPrimary)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> ActionResult {
        self.apply(coords, Action::ToggleFlag)
    }

    pub fn cell_view(&self, coords: Coord2) -> Option<Cell> {
        self.board.cell_view(coords)
    }

    pub fn glyph_at(&self, coords: Coord2) -> Option<Glyph> {
        self.board.glyph_at(coords)
    }

    pub fn mines_left(&self) -> i64 {
        self.board.mines_left()
    }

    /// Replaces the board with a freshly generated one of the same configuration.
    pub fn restart(&mut self) {
        self.restart_with(self.config);
    }

    /// Replaces the board with a freshly generated one for `config`.
    pub fn restart_with(&mut self, config: GameConfig) {
        log::debug!(
            "Restarting with {}x{}, {} mines",
            config.rows(),
            config.cols(),
            config.mines()
        );
        self.config = config;
        self.board = RandomBoardGenerator::new(self.seeds.random()).generate(config);
    }
}
