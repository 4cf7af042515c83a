//! One player's board: ship placements, the reserved set, and shot history.

use std::collections::HashSet;

use crate::common::{BoardError, ShotOutcome};
use crate::coord::Coord;
use crate::ship::Ship;

/// Visible state of a single cell, exposed read-only for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Ship,
    Hit,
    Miss,
}

/// A single player's grid. Built empty, populated by the fleet generator,
/// then used read/write for the rest of the match. Never reset once shots
/// begin; a rematch gets a fresh board.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
    /// During placement: ship cells plus their no-touch buffer. After
    /// [`Board::begin`]: the set of cells already fired upon.
    reserved: HashSet<Coord>,
    ships: Vec<Ship>,
    sunk_count: usize,
}

impl Board {
    /// Create an empty board of the given dimension.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellState::Empty; size * size],
            reserved: HashSet::new(),
            ships: Vec::new(),
            sunk_count: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `coord` lies within the board.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Cell state for rendering. `None` when out of bounds.
    pub fn cell(&self, coord: Coord) -> Option<CellState> {
        if self.in_bounds(coord) {
            Some(self.cells[coord.row * self.size + coord.col])
        } else {
            None
        }
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Ships fully sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Whether the whole fleet has been destroyed. The threshold is the
    /// number of placed ships, not a fixed constant.
    pub fn defeated(&self) -> bool {
        !self.ships.is_empty() && self.sunk_count == self.ships.len()
    }

    fn set(&mut self, coord: Coord, state: CellState) {
        self.cells[coord.row * self.size + coord.col] = state;
    }

    /// Place a ship, enforcing bounds and the no-touch rule against
    /// everything already on the board. Placement order matters: the buffer
    /// only constrains future placements.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        for cell in ship.cells() {
            if !self.in_bounds(cell) {
                return Err(BoardError::PlacementOutOfBounds);
            }
            if self.reserved.contains(&cell) {
                return Err(BoardError::PlacementOverlap);
            }
        }
        for cell in ship.cells() {
            self.set(cell, CellState::Ship);
            self.reserved.insert(cell);
        }
        self.reserve_buffer(&ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Reserve the 8-neighborhood around every cell of `ship`, clipped to
    /// the board, so later placements cannot touch it.
    fn reserve_buffer(&mut self, ship: &Ship) {
        for cell in ship.cells() {
            for row in cell.row.saturating_sub(1)..=cell.row + 1 {
                for col in cell.col.saturating_sub(1)..=cell.col + 1 {
                    let neighbor = Coord::new(row, col);
                    if self.in_bounds(neighbor) {
                        self.reserved.insert(neighbor);
                    }
                }
            }
        }
    }

    /// Finish the placement phase. The placement reservations are cleared
    /// and the same set is reused from here on as the shot-history record,
    /// keeping "was this cell already decided" in one place per phase.
    pub fn begin(&mut self) {
        self.reserved.clear();
    }

    /// Resolve a shot at `coord`.
    pub fn fire(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        if !self.in_bounds(coord) {
            return Err(BoardError::ShotOutOfBounds);
        }
        if !self.reserved.insert(coord) {
            return Err(BoardError::AlreadyTargeted);
        }
        let mut outcome = ShotOutcome::Miss;
        for ship in &mut self.ships {
            if ship.is_hit_by(coord) {
                outcome = if ship.register_hit() {
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                };
                break;
            }
        }
        match outcome {
            ShotOutcome::Miss => self.set(coord, CellState::Miss),
            ShotOutcome::Hit => self.set(coord, CellState::Hit),
            ShotOutcome::Sunk => {
                self.set(coord, CellState::Hit);
                self.sunk_count += 1;
            }
        }
        Ok(outcome)
    }
}
