//! Randomized fleet placement with a bounded retry budget.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::config::{FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

/// Attempt to populate one board with the fixed fleet. Returns `None` when
/// the cumulative attempt budget runs out; the caller regenerates the whole
/// board from scratch rather than salvaging a partial one.
pub fn try_random_board<R: Rng>(size: usize, rng: &mut R) -> Option<Board> {
    let mut board = Board::new(size);
    let mut attempts: u32 = 0;
    for &length in FLEET.iter() {
        loop {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                debug!("fleet generation exhausted its {MAX_PLACEMENT_ATTEMPTS}-attempt budget");
                return None;
            }
            // Anchor rows and columns are drawn from the inclusive range
            // [0, size]; an anchor of `size` is rejected by the bounds check
            // and only costs an attempt.
            let anchor = Coord::new(rng.random_range(0..=size), rng.random_range(0..=size));
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if board
                .place_ship(Ship::new(length, anchor, orientation))
                .is_ok()
            {
                break;
            }
        }
    }
    debug!("fleet placed after {attempts} attempts");
    board.begin();
    Some(board)
}

/// Populate a board, regenerating whole boards until one succeeds.
pub fn random_board<R: Rng>(size: usize, rng: &mut R) -> Board {
    loop {
        if let Some(board) = try_random_board(size, rng) {
            return board;
        }
    }
}
