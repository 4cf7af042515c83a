//! Text rendering and console reporting. Presentation only; the core
//! exposes read-only cell state for this.

use crate::board::{Board, CellState};
use crate::common::{BoardError, ShotOutcome};
use crate::coord::Coord;
use crate::player::Reporter;

/// Render a board as text. Un-hit ship cells are hidden unless `reveal` is
/// set; hits and misses always show.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let size = board.size();
    let mut out = String::from("   ");
    for col in 0..size {
        out.push(' ');
        out.push((b'A' + col as u8) as char);
    }
    out.push('\n');
    for row in 0..size {
        out.push_str(&format!("{:2} ", row + 1));
        for col in 0..size {
            let ch = match board.cell(Coord::new(row, col)) {
                Some(CellState::Hit) => 'X',
                Some(CellState::Miss) => 'o',
                Some(CellState::Ship) if reveal => 'S',
                _ => '.',
            };
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Parse a "B3"-style coordinate: column letter, one-based row number.
pub fn parse_coord(input: &str) -> Option<Coord> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.trim().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(Coord::new(row - 1, col))
}

/// Greeting shown before the first turn.
pub fn banner() -> String {
    [
        "Welcome to SEA BATTLE",
        "---------------------",
        "Shots are a column letter plus a row number, e.g. B3.",
    ]
    .join("\n")
}

/// Reporter that narrates the match on stdout.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn shot_resolved(&mut self, shooter: &str, coord: Coord, outcome: ShotOutcome) {
        let text = match outcome {
            ShotOutcome::Miss => "miss",
            ShotOutcome::Hit => "hit!",
            ShotOutcome::Sunk => "ship destroyed!",
        };
        println!("{shooter} fires at {coord}: {text}");
    }

    fn shot_rejected(&mut self, shooter: &str, coord: Coord, error: BoardError) {
        println!("{shooter} fires at {coord}: {error}");
    }
}
