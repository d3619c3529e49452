use blackbox::{BitBoardError, Cell, CellSet, ConfigIssue, GameError, GameSession, SessionState};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn played_session(seed: u64) -> GameSession {
    let mut rng = SmallRng::seed_from_u64(seed);
    let board = blackbox::Board::random(&mut rng, 4).unwrap();
    let mut session = GameSession::with_board(board);
    let borders: Vec<Cell> = blackbox::border_cells().collect();
    for _ in 0..rng.random_range(0..10) {
        session.shoot(borders[rng.random_range(0..borders.len())]).unwrap();
    }
    let atom = session.reveal_atoms().iter().next().unwrap();
    session.guess(atom).unwrap();
    session
}

proptest! {
    #[test]
    fn session_state_roundtrip(seed in any::<u64>()) {
        let session = played_session(seed);
        let state = session.state();
        let bytes = bincode::serialize(&state).unwrap();
        let decoded: SessionState = bincode::deserialize(&bytes).unwrap();
        let restored = GameSession::from_state(decoded).unwrap();
        assert_eq!(session.state(), restored.state());
    }

    #[test]
    fn session_bytes_roundtrip(seed in any::<u64>()) {
        let session = played_session(seed);
        let restored = GameSession::from_bytes(&session.to_bytes().unwrap()).unwrap();
        prop_assert_eq!(session.state(), restored.state());
    }
}

fn base_state() -> SessionState {
    GameSession::new(&[Cell::new(3, 3), Cell::new(6, 2)])
        .unwrap()
        .state()
}

fn set(cells: &[(usize, usize)]) -> CellSet {
    CellSet::from_cells(cells.iter().map(|&rc| Cell::from(rc))).unwrap()
}

#[test]
fn test_restore_rejects_found_non_atom() {
    let mut state = base_state();
    state.found = set(&[(4, 4)]);
    assert!(matches!(
        GameSession::from_state(state),
        Err(GameError::InvalidConfiguration(ConfigIssue::InconsistentState(_)))
    ));
}

#[test]
fn test_restore_rejects_wrong_guess_on_atom() {
    let mut state = base_state();
    state.wrong_guesses = set(&[(3, 3)]);
    assert!(GameSession::from_state(state).is_err());
}

#[test]
fn test_restore_rejects_interior_used_point() {
    let mut state = base_state();
    state.used_border = set(&[(0, 4), (5, 5)]);
    assert!(GameSession::from_state(state).is_err());
}

#[test]
fn test_restore_rejects_inflated_score() {
    let mut state = base_state();
    state.score = 26;
    assert!(GameSession::from_state(state).is_err());
}

#[test]
fn test_restore_rejects_border_atom() {
    let mut state = base_state();
    state.atoms = set(&[(0, 3)]);
    assert_eq!(
        GameSession::from_state(state).unwrap_err(),
        GameError::InvalidConfiguration(ConfigIssue::AtomNotInterior(Cell::new(0, 3)))
    );
}

#[test]
fn test_garbage_bytes_rejected() {
    assert!(GameSession::from_bytes(&[1, 2, 3]).is_err());
}

#[test]
fn test_stray_high_atom_bit_rejected() {
    let session = GameSession::new(&[Cell::new(3, 3)]).unwrap();
    let mut bytes = session.to_bytes().unwrap();
    // atoms is the first field: a little-endian u128, bit 110 lives in byte 13
    bytes[13] |= 1 << 6;
    assert!(GameSession::from_bytes(&bytes).is_err());
}

#[test]
fn test_cell_set_raw_conversion() {
    let cells = set(&[(9, 9), (1, 2)]);
    let raw = u128::from(cells);
    assert_eq!(CellSet::try_from(raw), Ok(cells));
    assert_eq!(
        CellSet::try_from(raw | 1 << 100),
        Err(BitBoardError::BitsOutsideGrid { raw: raw | 1 << 100 })
    );
    assert_eq!(
        GameError::from(BitBoardError::BitsOutsideGrid { raw: 1 << 127 }),
        GameError::InvalidConfiguration(ConfigIssue::InconsistentState(
            "cell set has bits outside the grid"
        ))
    );
}
