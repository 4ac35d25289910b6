use serde::{Deserialize, Serialize};

use crate::*;

/// A player input aimed at one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Primary click: open the cell.
    RevealPrimary,
    /// Secondary click: cycle `Covered -> Flagged -> Unknown -> Covered`.
    ToggleFlag,
}

impl Board {
    /// Applies `action` to the cell at `coords` and reports what happened along with the resulting game state.
    ///
    /// Actions outside the board, on cells that cannot take them, or after the game has ended are ignored.
    pub fn apply(&mut self, coords: Coord2, action: Action) -> ActionResult {
        let outcome = self.apply_action(coords, action);
        ActionResult {
            outcome,
            state: self.state(),
        }
    }

    fn apply_action(&mut self, coords: Coord2, action: Action) -> ActionOutcome {
        if self.is_finished() {
            log::trace!("{:?} at {:?} ignored, game is {:?}", action, coords, self.state());
            return ActionOutcome::Ignored;
        }

        let Some(cell) = self.cell_view(coords) else {
            log::trace!("{:?} at {:?} ignored, outside the board", action, coords);
            return ActionOutcome::Ignored;
        };

        match action {
            Action::RevealPrimary => self.reveal_primary(coords, cell),
            Action::ToggleFlag => self.toggle_mark(coords, cell),
        }
    }

    fn reveal_primary(&mut self, coords: Coord2, cell: Cell) -> ActionOutcome {
        if !cell.is_covered() {
            return ActionOutcome::Ignored;
        }

        let opened = match cell.kind {
            CellKind::Mine => {
                self.set_state(coords, CellState::Revealed);
                self.set_triggered_mine(coords);
                self.set_game_state(GameState::Lost);
                log::debug!("Mine hit at {:?}, game lost", coords);
                return ActionOutcome::Detonated;
            }
            CellKind::Number(0) => self.flood_reveal(coords),
            CellKind::Number(_) => {
                self.set_state(coords, CellState::Revealed);
                1
            }
        };

        let state = evaluate(self);
        if state == GameState::Won {
            log::debug!("All {} safe cells revealed, game won", self.safe_cell_count());
        }
        self.set_game_state(state);

        ActionOutcome::Revealed(opened)
    }

    fn toggle_mark(&mut self, coords: Coord2, cell: Cell) -> ActionOutcome {
        match cell.state.next_mark() {
            Some(next) => {
                self.set_state(coords, next);
                ActionOutcome::Marked(next)
            }
            None => ActionOutcome::Ignored,
        }
    }
}
