//! Board and fleet constants shared by both sides.

/// Default board dimension.
pub const BOARD_SIZE: usize = 6;

/// Fixed fleet composition, placed in this order. Largest first keeps the
/// success rate of randomized placement acceptable.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Total ship cells in a full fleet.
pub const FLEET_CELLS: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < FLEET.len() {
        total += FLEET[i];
        i += 1;
    }
    total
};

/// Cumulative placement attempts allowed for one board. Once exceeded the
/// whole board is thrown away and regenerated from scratch.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;
