//! Interactive strategy reading targets from stdin.

use std::io::{self, Write};

use crate::coord::Coord;
use crate::player::Strategy;
use crate::ui::parse_coord;

/// Strategy that prompts the player for a target. Malformed input is
/// re-prompted here; bounds and duplicate checks belong to the board.
pub struct CliGunner;

impl CliGunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliGunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for CliGunner {
    fn choose_target(&mut self) -> Coord {
        loop {
            print!("Your shot (e.g. B3): ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            io::stdin().read_line(&mut line).unwrap();
            match parse_coord(line.trim()) {
                Some(coord) => return coord,
                None => println!("Enter a column letter and a row number, e.g. B3"),
            }
        }
    }
}
