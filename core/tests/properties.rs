use minegrid_core::*;

const SHAPES: [(Coord, Coord, CellCount); 6] = [
    (1, 1, 0),
    (1, 9, 3),
    (3, 3, 1),
    (9, 9, 10),
    (16, 16, 40),
    (16, 30, 99),
];

fn boards() -> impl Iterator<Item = Board> {
    SHAPES.into_iter().flat_map(|(rows, cols, mines)| {
        (0..20).map(move |seed| generate(rows, cols, mines, seed).unwrap())
    })
}

fn brute_force_count(board: &Board, (row, col): Coord2) -> u8 {
    let mut count = 0;
    for d_row in -1i32..=1 {
        for d_col in -1i32..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            let (r, c) = (i32::from(row) + d_row, i32::from(col) + d_col);
            if r < 0 || c < 0 {
                continue;
            }
            if let Some(cell) = board.cell_view((r as Coord, c as Coord)) {
                if cell.is_mine() {
                    count += 1;
                }
            }
        }
    }
    count
}

fn snapshot(board: &Board) -> Vec<Cell> {
    board
        .positions()
        .map(|pos| board.cell_view(pos).unwrap())
        .collect()
}

#[test]
fn generated_boards_have_exact_mine_count() {
    for board in boards() {
        let mines = board
            .positions()
            .filter(|&pos| board[pos].is_mine())
            .count() as CellCount;

        assert_eq!(mines, board.mine_count());
        assert_eq!(board.safe_cell_count(), board.total_cells() - mines);
    }
}

#[test]
fn adjacency_matches_brute_force() {
    for board in boards() {
        for pos in board.positions() {
            if let CellKind::Number(n) = board[pos].kind {
                assert_eq!(n, brute_force_count(&board, pos), "at {pos:?}");
            }
        }
    }
}

#[test]
fn revealing_safe_cells_never_opens_a_mine() {
    for mut board in boards() {
        for pos in board.positions().collect::<Vec<_>>() {
            if !board[pos].is_mine() {
                board.apply(pos, Action::RevealPrimary);
            }
        }

        assert!(board
            .positions()
            .filter(|&pos| board[pos].is_mine())
            .all(|pos| board[pos].is_covered()));
        assert_eq!(board.revealed_count(), board.safe_cell_count());
        assert_eq!(board.state(), GameState::Won);
    }
}

#[test]
fn finished_boards_reject_further_reveals() {
    for mut board in boards() {
        let Some(mine) = board.positions().find(|&pos| board[pos].is_mine()) else {
            continue;
        };
        let Some(zero) = board
            .positions()
            .find(|&pos| board[pos].kind == CellKind::Number(0))
        else {
            continue;
        };

        board.apply(mine, Action::RevealPrimary);
        let before = snapshot(&board);

        assert_eq!(
            board.apply(zero, Action::RevealPrimary),
            ActionResult {
                outcome: ActionOutcome::Ignored,
                state: GameState::Lost
            }
        );
        assert_eq!(snapshot(&board), before);
    }
}

#[test]
fn first_zero_reveal_is_idempotent() {
    for mut board in boards() {
        let Some(zero) = board
            .positions()
            .find(|&pos| board[pos].kind == CellKind::Number(0))
        else {
            continue;
        };

        board.apply(zero, Action::RevealPrimary);
        let before = snapshot(&board);

        for pos in board.positions().collect::<Vec<_>>() {
            if board[pos].is_revealed() {
                assert_eq!(
                    board.apply(pos, Action::RevealPrimary).outcome,
                    ActionOutcome::Ignored
                );
            }
        }
        assert_eq!(snapshot(&board), before);
    }
}

#[test]
fn won_exactly_when_all_safe_cells_are_revealed() {
    for mut board in boards() {
        let safe: Vec<_> = board
            .positions()
            .filter(|&pos| !board[pos].is_mine())
            .collect();

        for pos in safe {
            let result = board.apply(pos, Action::RevealPrimary);
            let expected = if board.revealed_count() == board.safe_cell_count() {
                GameState::Won
            } else {
                GameState::Playing
            };
            assert_eq!(result.state, expected);
            assert_eq!(evaluate(&board), expected);
        }

        assert_eq!(board.state(), GameState::Won);
    }
}

#[test]
fn loss_is_permanent() {
    for mut board in boards() {
        let Some(mine) = board.positions().find(|&pos| board[pos].is_mine()) else {
            continue;
        };

        assert_eq!(
            board.apply(mine, Action::RevealPrimary).state,
            GameState::Lost
        );
        for pos in board.positions().collect::<Vec<_>>() {
            assert_eq!(
                board.apply(pos, Action::RevealPrimary).state,
                GameState::Lost
            );
            assert_eq!(board.apply(pos, Action::ToggleFlag).state, GameState::Lost);
        }
        assert_eq!(evaluate(&board), GameState::Lost);
        assert_eq!(board.revealed_count(), 1);
    }
}

#[test]
fn corner_mine_scenario() {
    let mut engine =
        BoardEngine::from_board(Board::from_mine_coords((3, 3), &[(0, 0)]).unwrap(), 1);

    let result = engine.reveal((2, 2));

    assert_eq!(result.outcome, ActionOutcome::Revealed(8));
    assert_eq!(result.state, GameState::Won);
    assert_eq!(engine.cell_view((0, 0)).unwrap().state, CellState::Covered);
}

#[test]
fn triple_flag_returns_to_covered() {
    let mut engine = BoardEngine::new(GameConfig::DEFAULT, 3);

    for _ in 0..3 {
        engine.toggle_flag((4, 4));
    }

    assert_eq!(engine.cell_view((4, 4)).unwrap().state, CellState::Covered);
    assert_eq!(engine.state(), GameState::Playing);
}
