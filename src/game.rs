//! Game layer for the adventure.
//!
//! Implements the session rules on top of the world data:
//! - Command parsing with alias normalization
//! - Player inventory, discovered rooms and map coordinates
//! - Movement through exits, gated by entry requirements
//! - Resource gathering

mod map;
mod parser;
mod player;
mod state;

pub use map::{Coord, Direction};
pub use parser::{ParsedCommand, parse_command};
pub use player::{Player, STARTING_RESOURCES};
pub use state::{GameState, messages};
