use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// The grid of cells for one game session together with its counters and outcome.
///
/// Cell kinds are fixed at construction; only cell states and the game state change afterwards. A restart builds a
/// new `Board` instead of resetting this one.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    safe_cell_count: CellCount,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Builds a board from a mine mask, computing every adjacency number.
    pub(crate) fn from_mine_mask(mine_mask: &Array2<bool>) -> Self {
        let cells = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            if mine_mask[(row, col)] {
                return Cell::new(CellKind::Mine);
            }
            // dimensions come from a `Coord2`, so indices fit
            let coords = (row as Coord, col as Coord);
            let adjacent_mines = mine_mask
                .iter_neighbors(coords)
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count();
            Cell::new(CellKind::Number(adjacent_mines as u8))
        });

        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        let total_cells = cells.len() as CellCount;

        Self {
            cells,
            mine_count,
            safe_cell_count: total_cells - mine_count,
            state: GameState::Playing,
            triggered_mine: None,
        }
    }

    /// Builds a board with mines at exactly the given positions.
    ///
    /// Repeated positions count once. Fails with [`GameError::InvalidCoords`] when a position is outside the board
    /// and with [`GameError::InvalidConfiguration`] when no safe cell would remain.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        let mines = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        GameConfig::new(size.0, size.1, mines)?;

        Ok(Self::from_mine_mask(&mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Cells that must be revealed to win, `rows * cols - mines`.
    pub fn safe_cell_count(&self) -> CellCount {
        self.safe_cell_count
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Read-only `(kind, state)` of a cell, or `None` outside the board.
    pub fn cell_view(&self, coords: Coord2) -> Option<Cell> {
        self.contains(coords)
            .then(|| self.cells[coords.to_nd_index()])
    }

    pub fn revealed_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_revealed()).count() as CellCount
    }

    pub fn flagged_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_flagged()).count() as CellCount
    }

    /// Mines minus placed flags. Negative when the player over-flags.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.mine_count) - i64::from(self.flagged_count())
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub(crate) fn set_state(&mut self, coords: Coord2, state: CellState) {
        self.cells[coords.to_nd_index()].state = state;
    }

    pub(crate) fn set_game_state(&mut self, state: GameState) {
        self.state = state;
    }

    pub(crate) fn set_triggered_mine(&mut self, coords: Coord2) {
        self.triggered_mine = Some(coords);
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn numbers(board: &Board) -> Vec<CellKind> {
        board.positions().map(|pos| board[pos].kind).collect()
    }

    #[test]
    fn adjacency_numbers_match_layout() {
        // * * .
        // . . *
        // . . .
        let board = Board::from_mine_coords((3, 3), &[(0, 0), (0, 1), (1, 2)]).unwrap();

        use CellKind::*;
        assert_eq!(
            numbers(&board),
            [
                Mine,
                Mine,
                Number(2),
                Number(2),
                Number(3),
                Mine,
                Number(0),
                Number(1),
                Number(1)
            ]
        );
    }

    #[test]
    fn counters_are_computed_once() {
        let board = Board::from_mine_coords((4, 5), &[(0, 0), (3, 4)]).unwrap();

        assert_eq!(board.size(), (4, 5));
        assert_eq!(board.total_cells(), 20);
        assert_eq!(board.mine_count(), 2);
        assert_eq!(board.safe_cell_count(), 18);
        assert_eq!(board.revealed_count(), 0);
        assert_eq!(board.state(), GameState::Playing);
    }

    #[test]
    fn duplicate_mine_coords_count_once() {
        let board = Board::from_mine_coords((3, 3), &[(1, 1), (1, 1)]).unwrap();

        assert_eq!(board.mine_count(), 1);
        assert_eq!(board[(0, 0)].kind, CellKind::Number(1));
    }

    #[test]
    fn out_of_range_mine_is_rejected() {
        assert_eq!(
            Board::from_mine_coords((3, 3), &[(3, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn fully_mined_layout_is_rejected() {
        assert!(matches!(
            Board::from_mine_coords((1, 2), &[(0, 0), (0, 1)]),
            Err(GameError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn cell_view_is_none_outside_the_board() {
        let board = Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap();

        assert_eq!(
            board.cell_view((1, 1)),
            Some(Cell::new(CellKind::Number(1)))
        );
        assert_eq!(board.cell_view((2, 0)), None);
        assert_eq!(board.cell_view((0, 7)), None);
    }

    #[test]
    fn mines_left_goes_negative_when_over_flagged() {
        let mut board = Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        board.set_state((0, 1), CellState::Flagged);
        board.set_state((1, 0), CellState::Flagged);

        assert_eq!(board.flagged_count(), 2);
        assert_eq!(board.mines_left(), -1);
    }
}
