//! Typed rooms and entry requirements.

use std::collections::BTreeMap;

use crate::game::Player;

/// Message used when an item requirement does not provide its own.
pub const DEFAULT_BLOCKED_MESSAGE: &str = "Something blocks your way.";

/// A gating condition on entering a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// The player must hold at least `amount` of `item`.
    Item {
        /// Resource name.
        item: String,
        /// Minimum amount held.
        amount: u32,
        /// Message shown when the player holds too little.
        message: String,
    },
}

impl Requirement {
    /// Create an item requirement.
    #[must_use]
    pub fn item(item: impl Into<String>, amount: u32, message: impl Into<String>) -> Self {
        Self::Item {
            item: item.into(),
            amount,
            message: message.into(),
        }
    }

    /// Check whether the player currently satisfies this requirement.
    #[must_use]
    pub fn is_met_by(&self, player: &Player) -> bool {
        match self {
            Self::Item { item, amount, .. } => player.amount(item) >= *amount,
        }
    }

    /// Message to show when the requirement is not met.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Item { message, .. } => message,
        }
    }
}

/// A node in the world graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Direction name to destination room id.
    pub exits: BTreeMap<String, String>,
    /// Resource name to yield per gather. Only positive yields are stored.
    pub gather: BTreeMap<String, u32>,
    /// Entry requirements in evaluation order.
    pub requires: Vec<Requirement>,
}

impl Room {
    /// Create an empty room with no exits.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            exits: BTreeMap::new(),
            gather: BTreeMap::new(),
            requires: Vec::new(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add an exit.
    #[must_use]
    pub fn with_exit(mut self, direction: impl Into<String>, target: impl Into<String>) -> Self {
        self.exits.insert(direction.into(), target.into());
        self
    }

    /// Add a gatherable resource. A zero yield is not stored.
    #[must_use]
    pub fn with_gather(mut self, resource: impl Into<String>, amount: u32) -> Self {
        if amount > 0 {
            self.gather.insert(resource.into(), amount);
        }
        self
    }

    /// Append an entry requirement.
    #[must_use]
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requires.push(requirement);
        self
    }

    /// Destination room id for a direction, if this room has that exit.
    #[must_use]
    pub fn exit(&self, direction: &str) -> Option<&str> {
        self.exits.get(direction).map(String::as_str)
    }

    /// Exit direction names in sorted order.
    pub fn exit_names(&self) -> impl Iterator<Item = &str> {
        self.exits.keys().map(String::as_str)
    }

    /// Yield for gathering `resource` here, zero if it cannot be gathered.
    #[must_use]
    pub fn gather_amount(&self, resource: &str) -> u32 {
        self.gather.get(resource).copied().unwrap_or(0)
    }

    /// The first requirement the player does not meet, in declaration order.
    #[must_use]
    pub fn first_unmet_requirement(&self, player: &Player) -> Option<&Requirement> {
        self.requires.iter().find(|req| !req.is_met_by(player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gated_room() -> Room {
        Room::new("ruins", "Stone Ruins")
            .with_requirement(Requirement::item("stone", 3, "Need stone."))
            .with_requirement(Requirement::item("wood", 2, "Need wood."))
    }

    #[test]
    fn test_room_builder() {
        let room = Room::new("clearing", "Forest Clearing")
            .with_description("Grass.")
            .with_exit("north", "oak")
            .with_gather("wood", 2);

        assert_eq!(room.id, "clearing");
        assert_eq!(room.description, "Grass.");
        assert_eq!(room.exit("north"), Some("oak"));
        assert_eq!(room.exit("south"), None);
        assert_eq!(room.gather_amount("wood"), 2);
        assert_eq!(room.gather_amount("stone"), 0);
    }

    #[test]
    fn test_zero_gather_not_stored() {
        let room = Room::new("a", "A").with_gather("wood", 0);
        assert!(room.gather.is_empty());
    }

    #[test]
    fn test_exit_names_sorted() {
        let room = Room::new("a", "A")
            .with_exit("west", "w")
            .with_exit("east", "e")
            .with_exit("north", "n");
        let names: Vec<_> = room.exit_names().collect();
        assert_eq!(names, vec!["east", "north", "west"]);
    }

    #[test]
    fn test_requirement_met() {
        let mut player = Player::new();
        let req = Requirement::item("stone", 3, "Need stone.");
        assert!(!req.is_met_by(&player));

        player.add_item("stone", 3);
        assert!(req.is_met_by(&player));
        assert_eq!(req.message(), "Need stone.");
    }

    #[test]
    fn test_first_unmet_requirement_in_order() {
        let room = gated_room();
        let mut player = Player::new();

        // Both unmet: the first one wins
        let unmet = room.first_unmet_requirement(&player).unwrap();
        assert_eq!(unmet.message(), "Need stone.");

        player.add_item("stone", 3);
        let unmet = room.first_unmet_requirement(&player).unwrap();
        assert_eq!(unmet.message(), "Need wood.");

        player.add_item("wood", 2);
        assert!(room.first_unmet_requirement(&player).is_none());
    }
}
