//! Automated opponent: uniform random targeting.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::coord::Coord;
use crate::player::Strategy;

/// Strategy drawing targets uniformly from the board. Rejected candidates
/// are simply redrawn by the turn protocol.
pub struct RandomGunner {
    size: usize,
    rng: SmallRng,
}

impl RandomGunner {
    pub fn new(size: usize, rng: SmallRng) -> Self {
        Self { size, rng }
    }
}

impl Strategy for RandomGunner {
    fn choose_target(&mut self) -> Coord {
        Coord::new(
            self.rng.random_range(0..self.size),
            self.rng.random_range(0..self.size),
        )
    }
}
