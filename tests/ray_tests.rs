use blackbox::{border_cells, trace, trace_path, Board, Cell, GameError, RayKind, RayOutcome};

fn board(atoms: &[(usize, usize)]) -> Board {
    let cells: Vec<Cell> = atoms.iter().map(|&rc| Cell::from(rc)).collect();
    Board::new(&cells).unwrap()
}

fn cells(list: &[(usize, usize)]) -> Vec<Cell> {
    list.iter().map(|&rc| Cell::from(rc)).collect()
}

#[test]
fn test_empty_board_passes_straight_through() {
    let b = board(&[]);
    for entry in border_cells() {
        let out = trace(&b, entry).unwrap();
        assert_eq!(out.kind, RayKind::Miss, "entry {}", entry);
        assert_eq!(out.exit, Some(entry.opposite()));
    }
}

#[test]
fn test_atom_directly_inward_is_hit() {
    let b = board(&[(1, 3)]);
    assert_eq!(trace(&b, Cell::new(0, 3)).unwrap(), RayOutcome::hit(Cell::new(0, 3)));
}

#[test]
fn test_hit_beats_edge_reflection() {
    let b = board(&[(1, 3), (1, 4)]);
    assert_eq!(trace(&b, Cell::new(0, 3)).unwrap().kind, RayKind::Hit);
}

#[test]
fn test_hit_deep_in_the_box() {
    let b = board(&[(2, 2), (2, 6), (6, 4)]);
    let t = trace_path(&b, Cell::new(0, 4)).unwrap();
    assert_eq!(t.outcome.kind, RayKind::Hit);
    assert_eq!(t.outcome.exit, None);
    assert_eq!(t.path.last(), Some(&Cell::new(5, 4)));
}

#[test]
fn test_single_deflection_turns_away_from_atom() {
    let b = board(&[(4, 5)]);
    let t = trace_path(&b, Cell::new(0, 4)).unwrap();
    assert_eq!(t.outcome.kind, RayKind::Detour);
    assert_eq!(t.outcome.exit, Some(Cell::new(3, 0)));
    assert_eq!(t.turns, 1);
    assert_eq!(
        t.path,
        cells(&[(0, 4), (1, 4), (2, 4), (3, 4), (3, 3), (3, 2), (3, 1), (3, 0)])
    );

    let up = trace(&b, Cell::new(9, 4)).unwrap();
    assert_eq!(up.kind, RayKind::Detour);
    assert_eq!(up.exit, Some(Cell::new(5, 0)));
}

#[test]
fn test_deflection_along_edge_row_exits_beside_path() {
    let b = board(&[(2, 5)]);
    let out = trace(&b, Cell::new(1, 0)).unwrap();
    assert_eq!(out.kind, RayKind::Detour);
    assert_eq!(out.exit, Some(Cell::new(0, 4)));
}

#[test]
fn test_multiple_deflections() {
    let b = board(&[(4, 1), (4, 6)]);
    let t = trace_path(&b, Cell::new(0, 2)).unwrap();
    assert_eq!(t.outcome.kind, RayKind::Detour);
    assert_eq!(t.outcome.exit, Some(Cell::new(0, 5)));
    assert_eq!(t.turns, 2);
    assert_eq!(
        t.path,
        cells(&[
            (0, 2),
            (1, 2),
            (2, 2),
            (3, 2),
            (3, 3),
            (3, 4),
            (3, 5),
            (2, 5),
            (1, 5),
            (0, 5)
        ])
    );
}

#[test]
fn test_diagonal_atom_at_entry_reflects() {
    let b = board(&[(1, 4)]);
    let t = trace_path(&b, Cell::new(0, 3)).unwrap();
    assert_eq!(t.outcome.kind, RayKind::Reflection);
    assert_eq!(t.outcome.exit, Some(Cell::new(0, 3)));
    assert_eq!(t.path, cells(&[(0, 3)]));
}

#[test]
fn test_double_deflection_returns_to_entry() {
    let b = board(&[(5, 3), (5, 5)]);
    let t = trace_path(&b, Cell::new(0, 4)).unwrap();
    assert_eq!(t.outcome.kind, RayKind::Reflection);
    assert_eq!(t.outcome.exit, Some(Cell::new(0, 4)));
    assert_eq!(t.turns, 1);
    assert_eq!(t.path.first(), Some(&Cell::new(0, 4)));
    assert_eq!(t.path.last(), Some(&Cell::new(0, 4)));
    assert!(t.path.contains(&Cell::new(4, 4)));
}

#[test]
fn test_non_border_entry_rejected() {
    let b = board(&[]);
    for bad in [Cell::new(4, 4), Cell::new(0, 0), Cell::new(9, 9), Cell::new(10, 2)] {
        assert_eq!(
            trace(&b, bad).unwrap_err(),
            GameError::OutOfBounds {
                row: bad.row,
                col: bad.col
            }
        );
    }
}

#[test]
fn test_trace_is_repeatable() {
    let b = board(&[(3, 3), (6, 6)]);
    for entry in border_cells() {
        assert_eq!(trace(&b, entry), trace(&b, entry));
    }
    assert_eq!(trace(&b, Cell::new(0, 4)).unwrap().exit, Some(Cell::new(2, 9)));
    assert_eq!(trace(&b, Cell::new(4, 0)).unwrap().exit, Some(Cell::new(9, 2)));
}
