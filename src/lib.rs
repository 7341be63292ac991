// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! The Dark Forest: a small text adventure.
//!
//! The player walks a graph of rooms loaded from a JSON world description,
//! gathers resources, and builds up a map of the rooms they have found.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Front ends (console, terminal UI) │
//! ├─────────────────────────────────────┤
//! │   Parser → GameState → output lines │
//! ├─────────────────────────────────────┤
//! │   Room registry (typed rooms)       │
//! ├─────────────────────────────────────┤
//! │   World data (JSON)                 │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use dark_forest::{GameState, WorldData, parse_command};
//!
//! let world = WorldData::builtin().unwrap();
//! let mut state = GameState::from_world(&world).unwrap();
//!
//! let lines = state.execute(&parse_command("gather wood"));
//! assert_eq!(lines, vec!["You gather wood."]);
//! ```

pub mod error;
pub mod game;
pub mod render;
pub mod world;

pub use error::{WorldError, WorldResult};

// Re-export key types at crate root for convenience
pub use game::{Coord, Direction, GameState, ParsedCommand, Player, parse_command};
pub use render::{MapCell, MapGrid, render_map};
pub use world::{Requirement, Room, RoomRegistry, WorldData};

/// Title shown by the front ends.
pub const GAME_TITLE: &str = "The Dark Forest";

/// One-line help shown when a session starts.
pub const HELP_LINE: &str = "Type: look, go <direction>, gather <resource>, inventory, quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_line_matches_unknown_command_hint() {
        // Both list the same verbs
        let verbs = HELP_LINE.trim_start_matches("Type: ");
        assert!(game::messages::UNKNOWN_COMMAND.ends_with(verbs));
    }
}
