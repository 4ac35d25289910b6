use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Glyph {
    Number(u8),
    Covered,
    Flag,
    Unknown,
    /// A mine shown after the game was lost.
    Mine,
    /// The mine that was revealed and lost the game.
    Detonated,
}

const NUMBER_ASSETS: [&str; 9] = [
    "number_0", "number_1", "number_2", "number_3", "number_4", "number_5", "number_6", "number_7",
    "number_8",
];

impl Glyph {
    /// Picks the glyph for `cell`. Once the game is lost, covered mines are shown too.
    pub const fn for_cell(cell: Cell, game: GameState) -> Self {
        match (cell.state, cell.kind) {
            (CellState::Revealed, CellKind::Mine) => Self::Detonated,
            (CellState::Revealed, CellKind::Number(n)) => Self::Number(n),
            (CellState::Flagged, _) => Self::Flag,
            (CellState::Unknown, _) => Self::Unknown,
            (CellState::Covered, CellKind::Mine) if matches!(game, GameState::Lost) => Self::Mine,
            (CellState::Covered, _) => Self::Covered,
        }
    }

    /// Single character used by text renderers.
    pub const fn symbol(self) -> char {
        match self {
            Self::Number(0) => '.',
            Self::Number(n) if n <= 8 => (b'0' + n) as char,
            Self::Number(_) => '?',
            Self::Covered => '#',
            Self::Flag => 'F',
            Self::Unknown => '?',
            Self::Mine => '*',
            Self::Detonated => 'X',
        }
    }

    /// Name of the image asset for this glyph.
    pub fn asset_name(self) -> &'static str {
        match self {
            Self::Number(n) => NUMBER_ASSETS
                .get(usize::from(n))
                .copied()
                .unwrap_or("unk"),
            Self::Covered => "covered",
            Self::Flag => "flag",
            Self::Unknown => "unk",
            Self::Mine => "mine",
            Self::Detonated => "dead",
        }
    }
}

impl Board {
    /// The glyph to draw at `coords`, or `None` outside the board.
    pub fn glyph_at(&self, coords: Coord2) -> Option<Glyph> {
        self.cell_view(coords)
            .map(|cell| Glyph::for_cell(cell, self.state()))
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.size();

        write!(f, "    ")?;
        for col in 0..cols {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;

        for row in 0..rows {
            write!(f, "{:>3} ", row)?;
            for col in 0..cols {
                let glyph = Glyph::for_cell(self[(row, col)], self.state());
                write!(f, "{:>3}", glyph.symbol())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
