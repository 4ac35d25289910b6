use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Derives the game state from the board.
///
/// A loss is never overturned. Otherwise the game is won once every safe cell has been revealed.
pub fn evaluate(board: &Board) -> GameState {
    if board.state() == GameState::Lost {
        return GameState::Lost;
    }

    let revealed_safe = board
        .positions()
        .filter(|&pos| {
            let cell = board[pos];
            cell.is_revealed() && !cell.is_mine()
        })
        .count() as CellCount;

    if revealed_safe == board.safe_cell_count() {
        GameState::Won
    } else {
        GameState::Playing
    }
}
