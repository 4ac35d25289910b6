use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Board;
}

/// Validates the configuration and builds a randomly mined board from `seed`.
pub fn generate(rows: Coord, cols: Coord, mines: CellCount, seed: u64) -> Result<Board> {
    let config = GameConfig::new(rows, cols, mines)?;
    Ok(RandomBoardGenerator::new(seed).generate(config))
}
