use alloc::collections::VecDeque;

use crate::*;

impl Board {
    /// Reveals the connected zero region around `start` plus its ring of numbered cells, returning how many cells
    /// were opened.
    ///
    /// Runs on an explicit work-list. Anything not covered (revealed, flagged, unknown) is left alone, so visiting a
    /// cell twice is harmless and calling this again on an opened region opens nothing. Mines are never revealed.
    pub(crate) fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut opened = 0;
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let Some(cell) = self.cell_view(coords) else {
                continue;
            };
            if !cell.is_covered() || cell.is_mine() {
                continue;
            }

            self.set_state(coords, CellState::Revealed);
            opened += 1;

            if cell.kind.is_zero() {
                to_visit.extend(
                    self.iter_neighbors(coords)
                        .filter(|&pos| self[pos].is_covered()),
                );
            }
        }

        log::debug!("Flood fill from {:?} opened {} cells", start, opened);
        opened
    }
}
