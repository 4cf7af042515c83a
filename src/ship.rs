//! Ship geometry and damage tracking.

use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along the column axis.
    Horizontal,
    /// Extends along the row axis.
    Vertical,
}

/// A ship anchored at a cell, extending `length` cells in one direction.
/// Owned by the board that accepted it; the only mutation after placement
/// is the loss of lives to successful shots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    anchor: Coord,
    orientation: Orientation,
    lives: usize,
}

impl Ship {
    pub fn new(length: usize, anchor: Coord, orientation: Orientation) -> Self {
        debug_assert!(length > 0, "a ship occupies at least one cell");
        Self {
            length,
            anchor,
            orientation,
            lives: length,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells occupied by this ship, anchor first. Deterministic and
    /// restartable; no state beyond the stored anchor/length/orientation.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let Coord { row, col } = self.anchor;
        let orientation = self.orientation;
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => Coord::new(row, col + i),
            Orientation::Vertical => Coord::new(row + i, col),
        })
    }

    /// Whether `coord` lies on this ship.
    pub fn is_hit_by(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Undamaged segments remaining.
    pub fn lives(&self) -> usize {
        self.lives
    }

    /// All segments hit.
    pub fn is_sunk(&self) -> bool {
        self.lives == 0
    }

    /// Record one hit. Returns `true` when this hit sinks the ship.
    pub(crate) fn register_hit(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }
}
