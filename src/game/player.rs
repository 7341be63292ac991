//! Player state management.

use std::collections::{HashMap, HashSet};

use crate::game::Coord;

/// Resources every inventory starts with, at zero.
pub const STARTING_RESOURCES: [&str; 3] = ["wood", "stone", "food"];

/// State for the player of one session.
#[derive(Debug, Clone)]
pub struct Player {
    /// Resource counts in the order each resource was first held.
    inventory: Vec<(String, u32)>,
    /// Rooms the player has seen. Never shrinks.
    discovered: HashSet<String>,
    /// Map coordinate of each room, fixed on first assignment.
    positions: HashMap<String, Coord>,
    /// Coordinate of the room the player stands in.
    position: Coord,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Create a player with the starting resources at zero, at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inventory: STARTING_RESOURCES
                .iter()
                .map(|name| ((*name).to_string(), 0))
                .collect(),
            discovered: HashSet::new(),
            positions: HashMap::new(),
            position: Coord::ORIGIN,
        }
    }

    /// Amount held of a resource, zero if never seen.
    #[must_use]
    pub fn amount(&self, resource: &str) -> u32 {
        self.inventory
            .iter()
            .find(|(name, _)| name == resource)
            .map_or(0, |&(_, count)| count)
    }

    /// Add to a resource count. New resources go to the end of the list.
    pub fn add_item(&mut self, resource: &str, amount: u32) {
        match self.inventory.iter_mut().find(|(name, _)| name == resource) {
            Some((_, count)) => *count = count.saturating_add(amount),
            None => self.inventory.push((resource.to_string(), amount)),
        }
    }

    /// All inventory entries, including zero counts: the starting resources
    /// first, then others in the order they were first gathered.
    pub fn inventory(&self) -> impl Iterator<Item = (&str, u32)> {
        self.inventory.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Inventory listing: a header, then one `name: amount` line per held
    /// resource, or `Empty`.
    #[must_use]
    pub fn inventory_lines(&self) -> Vec<String> {
        let mut lines = vec!["Inventory:".to_string()];

        lines.extend(
            self.inventory()
                .filter(|&(_, count)| count > 0)
                .map(|(name, count)| format!("{name}: {count}")),
        );

        if lines.len() == 1 {
            lines.push("Empty".to_string());
        }
        lines
    }

    /// Mark a room as discovered. Returns `true` if it was new.
    pub fn discover(&mut self, room_id: &str) -> bool {
        if self.discovered.contains(room_id) {
            return false;
        }
        self.discovered.insert(room_id.to_string())
    }

    /// Check if this player has discovered the given room.
    #[must_use]
    pub fn has_discovered(&self, room_id: &str) -> bool {
        self.discovered.contains(room_id)
    }

    /// All discovered room ids in no particular order.
    pub fn discovered(&self) -> impl Iterator<Item = &str> {
        self.discovered.iter().map(String::as_str)
    }

    /// Number of discovered rooms.
    #[must_use]
    pub fn discovered_count(&self) -> usize {
        self.discovered.len()
    }

    /// Stored map coordinate for a room.
    #[must_use]
    pub fn position_of(&self, room_id: &str) -> Option<Coord> {
        self.positions.get(room_id).copied()
    }

    /// Record a room's coordinate unless it already has one.
    ///
    /// Returns the coordinate that ends up stored, which is the earlier one
    /// when the room was already placed.
    pub fn place_room(&mut self, room_id: &str, coord: Coord) -> Coord {
        *self.positions.entry(room_id.to_string()).or_insert(coord)
    }

    /// Coordinate of the room the player stands in.
    #[must_use]
    pub const fn position(&self) -> Coord {
        self.position
    }

    /// Move the player's marker on the map.
    pub fn set_position(&mut self, coord: Coord) {
        self.position = coord;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_inventory_starts_at_zero() {
        let player = Player::new();
        assert_eq!(player.amount("wood"), 0);
        assert_eq!(player.amount("stone"), 0);
        assert_eq!(player.amount("food"), 0);
        assert_eq!(player.inventory().count(), 3);
        assert_eq!(player.position(), Coord::ORIGIN);
    }

    #[test]
    fn test_add_item_accumulates() {
        let mut player = Player::new();
        player.add_item("wood", 2);
        player.add_item("wood", 2);
        assert_eq!(player.amount("wood"), 4);
    }

    #[test]
    fn test_add_new_resource() {
        let mut player = Player::new();
        assert_eq!(player.amount("herbs"), 0);
        player.add_item("herbs", 1);
        assert_eq!(player.amount("herbs"), 1);
        assert_eq!(player.inventory().count(), 4);
    }

    #[test]
    fn test_add_item_saturates() {
        let mut player = Player::new();
        player.add_item("stone", u32::MAX);
        player.add_item("stone", 5);
        assert_eq!(player.amount("stone"), u32::MAX);
    }

    #[test]
    fn test_inventory_lines_empty() {
        let player = Player::new();
        assert_eq!(player.inventory_lines(), vec!["Inventory:", "Empty"]);
    }

    #[test]
    fn test_inventory_lines_skip_zero() {
        let mut player = Player::new();
        player.add_item("food", 1);
        player.add_item("wood", 4);
        assert_eq!(
            player.inventory_lines(),
            vec!["Inventory:", "wood: 4", "food: 1"]
        );
    }

    #[test]
    fn test_inventory_keeps_insertion_order() {
        let mut player = Player::new();
        player.add_item("rope", 1);
        player.add_item("herbs", 2);
        player.add_item("stone", 3);
        player.add_item("rope", 1);

        let names: Vec<&str> = player.inventory().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["wood", "stone", "food", "rope", "herbs"]);
        assert_eq!(
            player.inventory_lines(),
            vec!["Inventory:", "stone: 3", "rope: 2", "herbs: 2"]
        );
    }

    #[test]
    fn test_player_discover() {
        let mut player = Player::new();
        assert!(!player.has_discovered("clearing"));

        assert!(player.discover("clearing"));
        assert!(player.has_discovered("clearing"));

        // Second discovery is a no-op
        assert!(!player.discover("clearing"));
        assert_eq!(player.discovered_count(), 1);
    }

    #[test]
    fn test_place_room_first_wins() {
        let mut player = Player::new();
        assert_eq!(player.position_of("oak"), None);

        assert_eq!(player.place_room("oak", Coord::new(0, -1)), Coord::new(0, -1));
        assert_eq!(player.place_room("oak", Coord::new(5, 5)), Coord::new(0, -1));
        assert_eq!(player.position_of("oak"), Some(Coord::new(0, -1)));
    }

    #[test]
    fn test_set_position() {
        let mut player = Player::new();
        player.set_position(Coord::new(2, -3));
        assert_eq!(player.position(), Coord::new(2, -3));
    }
}
