use serde::{Deserialize, Serialize};

/// What a cell holds. Fixed once the board has been generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Mine,
    /// Number of mines in the Moore neighborhood, `0..=8`.
    Number(u8),
}

impl CellKind {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Number(0))
    }
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Number(0)
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Covered,
    Revealed,
    Flagged,
    /// Question mark, the second step of the flag cycle.
    Unknown,
}

impl CellState {
    /// Next state of the flag cycle `Covered -> Flagged -> Unknown -> Covered`.
    ///
    /// Returns `None` for revealed cells, which cannot be marked.
    pub const fn next_mark(self) -> Option<Self> {
        match self {
            Self::Covered => Some(Self::Flagged),
            Self::Flagged => Some(Self::Unknown),
            Self::Unknown => Some(Self::Covered),
            Self::Revealed => None,
        }
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Covered
    }
}

/// One grid position: its content and what the player has done with it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub state: CellState,
}

impl Cell {
    pub const fn new(kind: CellKind) -> Self {
        Self {
            kind,
            state: CellState::Covered,
        }
    }

    pub const fn is_mine(&self) -> bool {
        self.kind.is_mine()
    }

    pub const fn is_covered(&self) -> bool {
        matches!(self.state, CellState::Covered)
    }

    pub const fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    pub const fn is_flagged(&self) -> bool {
        matches!(self.state, CellState::Flagged)
    }
}
