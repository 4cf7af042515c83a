//! Classic sea battle on a square grid: a fixed fleet is placed at random
//! with a no-touch rule, then the two sides trade single-cell shots until
//! one fleet is destroyed. A hit grants the shooter another shot.

mod board;
mod common;
mod config;
mod coord;
mod game;
mod generator;
mod logging;
mod player;
mod player_ai;
mod player_cli;
mod ship;
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use generator::*;
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use ship::*;
pub use ui::*;
