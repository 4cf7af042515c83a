use seabattle::{Board, BoardError, CellState, Coord, Orientation, Ship, ShotOutcome};

/// Board with the given ships placed, sealed and ready to fire at.
fn board_with(size: usize, ships: &[(usize, (usize, usize), Orientation)]) -> Board {
    let mut board = Board::new(size);
    for &(length, (row, col), orientation) in ships {
        board
            .place_ship(Ship::new(length, Coord::new(row, col), orientation))
            .unwrap();
    }
    board.begin();
    board
}

#[test]
fn placement_out_of_bounds_is_rejected() {
    let mut board = Board::new(6);
    let err = board
        .place_ship(Ship::new(3, Coord::new(0, 4), Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, BoardError::PlacementOutOfBounds);
    assert!(board.ships().is_empty());

    // Anchor itself outside the board.
    let err = board
        .place_ship(Ship::new(1, Coord::new(6, 0), Orientation::Vertical))
        .unwrap_err();
    assert_eq!(err, BoardError::PlacementOutOfBounds);
}

#[test]
fn placement_overlap_is_rejected() {
    let mut board = Board::new(6);
    board
        .place_ship(Ship::new(3, Coord::new(0, 0), Orientation::Horizontal))
        .unwrap();
    let err = board
        .place_ship(Ship::new(1, Coord::new(0, 1), Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, BoardError::PlacementOverlap);
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn placement_respects_buffer_zone() {
    let mut board = Board::new(6);
    board
        .place_ship(Ship::new(1, Coord::new(2, 2), Orientation::Horizontal))
        .unwrap();
    // Diagonal neighbor sits in the buffer.
    let err = board
        .place_ship(Ship::new(1, Coord::new(3, 3), Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, BoardError::PlacementOverlap);
    // Two cells away is fine.
    board
        .place_ship(Ship::new(1, Coord::new(4, 4), Orientation::Horizontal))
        .unwrap();
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn buffer_is_clipped_at_the_border() {
    let mut board = Board::new(6);
    board
        .place_ship(Ship::new(1, Coord::new(0, 0), Orientation::Horizontal))
        .unwrap();
    // Still room in the far corner.
    board
        .place_ship(Ship::new(1, Coord::new(5, 5), Orientation::Horizontal))
        .unwrap();
}

#[test]
fn shot_out_of_bounds_fails_for_any_size() {
    for size in 1..=6 {
        let mut board = board_with(size, &[(1, (0, 0), Orientation::Horizontal)]);
        assert_eq!(
            board.fire(Coord::new(size, 0)).unwrap_err(),
            BoardError::ShotOutOfBounds
        );
        assert_eq!(
            board.fire(Coord::new(0, size)).unwrap_err(),
            BoardError::ShotOutOfBounds
        );
    }
}

#[test]
fn repeated_shot_is_rejected() {
    let mut board = board_with(6, &[(1, (0, 0), Orientation::Horizontal)]);
    assert_eq!(board.fire(Coord::new(3, 3)).unwrap(), ShotOutcome::Miss);
    assert_eq!(
        board.fire(Coord::new(3, 3)).unwrap_err(),
        BoardError::AlreadyTargeted
    );
    // Hit cells are rejected the same way.
    assert_eq!(board.fire(Coord::new(0, 0)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(
        board.fire(Coord::new(0, 0)).unwrap_err(),
        BoardError::AlreadyTargeted
    );
}

#[test]
fn sinking_a_single_cell_ship() {
    let mut board = board_with(6, &[(1, (0, 0), Orientation::Horizontal)]);
    assert_eq!(board.fire(Coord::new(0, 0)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(board.sunk_count(), 1);
    assert!(board.defeated());
    assert_eq!(board.cell(Coord::new(0, 0)), Some(CellState::Hit));
}

#[test]
fn missing_far_from_the_ship() {
    let mut board = board_with(6, &[(1, (0, 0), Orientation::Horizontal)]);
    assert_eq!(board.fire(Coord::new(5, 5)).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.sunk_count(), 0);
    assert_eq!(board.cell(Coord::new(5, 5)), Some(CellState::Miss));
    assert_eq!(board.cell(Coord::new(0, 0)), Some(CellState::Ship));
}

#[test]
fn sunk_is_reported_once_on_the_final_cell() {
    let mut board = board_with(
        6,
        &[
            (2, (1, 1), Orientation::Horizontal),
            (1, (4, 4), Orientation::Horizontal),
        ],
    );
    assert_eq!(board.fire(Coord::new(1, 1)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.sunk_count(), 0);
    assert_eq!(board.fire(Coord::new(1, 2)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(board.sunk_count(), 1);
    assert!(!board.defeated());
    assert_eq!(board.fire(Coord::new(4, 4)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(board.sunk_count(), 2);
    assert!(board.defeated());
}

#[test]
fn begin_clears_placement_reservations() {
    let mut board = Board::new(6);
    board
        .place_ship(Ship::new(1, Coord::new(2, 2), Orientation::Horizontal))
        .unwrap();
    board.begin();
    // A buffer cell of the placed ship is fair game for a shot.
    assert_eq!(board.fire(Coord::new(3, 3)).unwrap(), ShotOutcome::Miss);
}

#[test]
fn empty_board_is_not_defeated() {
    let board = Board::new(6);
    assert!(!board.defeated());
}
