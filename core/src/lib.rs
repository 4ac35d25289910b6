//! Minesweeper board engine: mine placement, adjacency numbers, the per-cell state machine, flood-fill reveal and
//! win/loss evaluation.
//!
//! Rendering and input translation are left to the caller, which drives a [`BoardEngine`] with [`Action`]s and
//! reads cells back through [`Board::cell_view`] or [`Board::glyph_at`].

#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use action::*;
pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use evaluate::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod action;
mod board;
mod cell;
mod engine;
mod error;
mod evaluate;
mod generator;
mod reveal;
mod types;
mod view;

/// Board dimensions and mine count, validated so that at least one safe cell exists.
///
/// Only obtainable through [`GameConfig::new`], the presets, or deserialization, which runs the same check.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    /// `(rows, cols)`
    size: Coord2,
    mines: CellCount,
}

/// Unchecked wire form of [`GameConfig`].
#[derive(Deserialize)]
struct RawGameConfig {
    size: Coord2,
    mines: CellCount,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.size.0, raw.size.1, raw.mines)
    }
}

impl GameConfig {
    /// The 300x300 window split into 30px cells, with 10 mines.
    pub const DEFAULT: Self = Self::new_unchecked((10, 10), 10);
    pub const BEGINNER: Self = Self::new_unchecked((9, 9), 10);
    pub const INTERMEDIATE: Self = Self::new_unchecked((16, 16), 40);
    pub const EXPERT: Self = Self::new_unchecked((16, 30), 99);

    pub(crate) const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if mines >= mult(rows, cols) {
            return Err(GameError::InvalidConfiguration { rows, cols, mines });
        }
        Ok(Self::new_unchecked((rows, cols), mines))
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What a single action did to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// Out of bounds, not actionable, or the game is over.
    Ignored,
    /// Number of cells that went from covered to revealed.
    Revealed(CellCount),
    /// A mine was revealed.
    Detonated,
    /// The cell's new marker state.
    Marked(CellState),
}

impl ActionOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Outcome of an action together with the game state after it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub outcome: ActionOutcome,
    pub state: GameState,
}
