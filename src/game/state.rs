//! Game state management.
//!
//! [`GameState`] is the session controller: it owns the room registry and the
//! player, takes one command at a time and answers with output lines. It is
//! either running or stopped; once stopped every command is ignored.

use crate::error::WorldResult;
use crate::game::{Coord, Direction, ParsedCommand, Player};
use crate::world::{Room, RoomRegistry, WorldData};

/// Fixed output lines.
pub mod messages {
    /// Reply to `quit`.
    pub const GOODBYE: &str = "Goodbye.";
    /// Reply to blank input.
    pub const EMPTY_COMMAND: &str = "Please type a command.";
    /// Reply to an unrecognized verb.
    pub const UNKNOWN_COMMAND: &str =
        "Unknown command. Try: look, go <direction>, gather <resource>, inventory, quit";
    /// Reply to `go` without a direction.
    pub const GO_USAGE: &str = "Go where? Example: go north";
    /// Reply to `gather` without a resource.
    pub const GATHER_USAGE: &str = "Gather what? Example: gather wood";
    /// The current room has no such exit.
    pub const NO_EXIT: &str = "You cannot go that way.";
    /// The exit exists but is not a compass direction.
    pub const COMPASS_ONLY: &str = "You can only travel north, south, east, or west.";
    /// Nothing of that resource can be gathered here.
    pub const NOTHING_TO_GATHER: &str = "You cannot gather that here.";
    /// The current room id is not in the registry.
    pub const MISSING_CURRENT_ROOM: &str = "Error: current room not found.";
    /// An exit leads to a room id that is not in the registry.
    pub const MISSING_EXIT_ROOM: &str = "Error: exit points to a missing room.";
}

/// Complete session state.
#[derive(Debug, Clone)]
pub struct GameState {
    /// All rooms of the world.
    rooms: RoomRegistry,
    /// The player.
    player: Player,
    /// Identifier of the room the player stands in.
    current_room_id: String,
    /// Cleared by `quit`, never set again.
    running: bool,
}

impl GameState {
    /// Create a session starting in `starting_room`.
    ///
    /// The starting room is placed at the map origin. If it is missing or not
    /// in the registry the session starts stopped.
    #[must_use]
    pub fn new(rooms: RoomRegistry, starting_room: Option<&str>) -> Self {
        let current_room_id = starting_room.unwrap_or_default().to_string();
        let running = rooms.contains(&current_room_id);

        let mut player = Player::new();
        if running {
            player.place_room(&current_room_id, Coord::ORIGIN);
        } else {
            tracing::warn!(
                starting_room = %current_room_id,
                "starting room not found, session will not run"
            );
        }

        Self {
            rooms,
            player,
            current_room_id,
            running,
        }
    }

    /// Create a session from a world document.
    ///
    /// # Errors
    ///
    /// Returns an error if the room records cannot be converted.
    pub fn from_world(world: &WorldData) -> WorldResult<Self> {
        let rooms = RoomRegistry::from_records(&world.rooms)?;
        Ok(Self::new(rooms, world.starting_room.as_deref()))
    }

    /// Whether the session still accepts commands.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Identifier of the room the player stands in.
    #[must_use]
    pub fn current_room_id(&self) -> &str {
        &self.current_room_id
    }

    /// The room the player stands in, if it exists.
    #[must_use]
    pub fn current_room(&self) -> Option<&Room> {
        self.rooms.get(&self.current_room_id)
    }

    /// The player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// The room registry.
    #[must_use]
    pub const fn rooms(&self) -> &RoomRegistry {
        &self.rooms
    }

    /// Describe the current room and mark it discovered.
    ///
    /// Output: the name with a leading newline, the description, and the
    /// sorted exits if there are any.
    pub fn describe_current_room(&mut self) -> Vec<String> {
        let Some(room) = self.rooms.get(&self.current_room_id) else {
            tracing::warn!(room = %self.current_room_id, "current room missing from registry");
            return vec![messages::MISSING_CURRENT_ROOM.to_string()];
        };

        self.player.discover(&room.id);

        let mut lines = vec![format!("\n{}", room.name), room.description.clone()];
        if !room.exits.is_empty() {
            let directions: Vec<&str> = room.exit_names().collect();
            lines.push(format!("Exits: {}", directions.join(", ")));
        }
        lines
    }

    /// Process a parsed command.
    pub fn execute(&mut self, command: &ParsedCommand) -> Vec<String> {
        self.process_command(&command.verb, command.target())
    }

    /// Process one command and return the lines to show the player.
    ///
    /// Returns nothing once the session has stopped.
    pub fn process_command(&mut self, verb: &str, target: Option<&str>) -> Vec<String> {
        if !self.running {
            return Vec::new();
        }

        match verb {
            "quit" | "exit" => {
                self.running = false;
                tracing::info!(
                    discovered = self.player.discovered_count(),
                    "session stopped"
                );
                vec![messages::GOODBYE.to_string()]
            }
            "" => vec![messages::EMPTY_COMMAND.to_string()],
            "look" => self.describe_current_room(),
            "inventory" => self.player.inventory_lines(),
            "go" => match target {
                Some(direction) => self.handle_go(direction),
                None => vec![messages::GO_USAGE.to_string()],
            },
            "gather" => match target {
                Some(resource) => self.handle_gather(resource),
                None => vec![messages::GATHER_USAGE.to_string()],
            },
            _ => vec![messages::UNKNOWN_COMMAND.to_string()],
        }
    }

    /// Try to move through the exit named `target`.
    fn handle_go(&mut self, target: &str) -> Vec<String> {
        let Some(room) = self.rooms.get(&self.current_room_id) else {
            return vec![messages::MISSING_CURRENT_ROOM.to_string()];
        };

        let Some(next_room_id) = room.exit(target) else {
            return vec![messages::NO_EXIT.to_string()];
        };

        let Some(direction) = Direction::from_name(target) else {
            return vec![messages::COMPASS_ONLY.to_string()];
        };

        let Some(destination) = self.rooms.get(next_room_id) else {
            tracing::warn!(
                room = %self.current_room_id,
                exit = target,
                destination = next_room_id,
                "exit points to a missing room"
            );
            return vec![messages::MISSING_EXIT_ROOM.to_string()];
        };

        let here = self
            .player
            .position_of(&self.current_room_id)
            .unwrap_or(self.player.position());
        let coord = self.player.place_room(&destination.id, here.step(direction));

        if let Some(requirement) = destination.first_unmet_requirement(&self.player) {
            self.player.discover(&destination.id);
            tracing::debug!(room = %destination.id, "entry blocked by requirement");
            return vec![requirement.message().to_string()];
        }

        self.player.set_position(coord);
        self.player.discover(&destination.id);
        self.current_room_id.clone_from(&destination.id);
        tracing::debug!(room = %self.current_room_id, %coord, "moved");

        self.describe_current_room()
    }

    /// Gather `resource` in the current room.
    fn handle_gather(&mut self, resource: &str) -> Vec<String> {
        let Some(room) = self.rooms.get(&self.current_room_id) else {
            return vec![messages::MISSING_CURRENT_ROOM.to_string()];
        };

        let amount = room.gather_amount(resource);
        if amount == 0 {
            return vec![messages::NOTHING_TO_GATHER.to_string()];
        }

        self.player.add_item(resource, amount);
        vec![format!("You gather {resource}.")]
    }
}
