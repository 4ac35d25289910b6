use ndarray::Array2;

use super::*;

/// Places mines uniformly at random, redrawing any position that already holds one.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        use rand::prelude::*;

        let (rows, cols) = config.size();
        log::debug!(
            "Generating {}x{} board with {} mines, seed {}",
            rows,
            cols,
            config.mines(),
            self.seed
        );

        let mut mines: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed = 0;

        // terminates because `GameConfig` keeps at least one cell free
        while mines_placed < config.mines() {
            let coords: Coord2 = (rng.random_range(0..rows), rng.random_range(0..cols));
            let cell = &mut mines[coords.to_nd_index()];
            if !*cell {
                *cell = true;
                mines_placed += 1;
            }
        }

        let board = Board::from_mine_mask(&mines);

        // double check mine count
        if board.mine_count() != config.mines() {
            log::warn!(
                "Generated board count mismatch, actual: {}, requested: {}",
                board.mine_count(),
                config.mines()
            );
        }
        board
    }
}
