//! Raw world documents.
//!
//! Records mirror the JSON layout one to one and stay loosely typed. Turning
//! them into [`Room`](crate::world::Room) values is the registry's job.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{WorldError, WorldResult};

/// The world compiled into the crate.
const BUILTIN_WORLD: &str = include_str!("../../data/game.json");

/// A complete world description: a room list and where the player starts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorldData {
    /// Identifier of the room the player starts in.
    #[serde(default)]
    pub starting_room: Option<String>,
    /// Every room record in document order.
    #[serde(default)]
    pub rooms: Vec<RoomRecord>,
}

/// One room as it appears in the world document.
///
/// Unknown keys (such as `encounters` and `loot`) are accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomRecord {
    /// Unique room identifier. Records without one are skipped.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Display description.
    #[serde(default)]
    pub description: String,
    /// Direction name to destination room id.
    #[serde(default)]
    pub exits: BTreeMap<String, String>,
    /// Resource name to yield per gather.
    #[serde(default)]
    pub gather: BTreeMap<String, i64>,
    /// Entry requirements in evaluation order.
    #[serde(default)]
    pub requires: Vec<RequirementRecord>,
}

/// An entry requirement as it appears in the world document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequirementRecord {
    /// Requirement kind, e.g. `"item"`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Resource the player must hold.
    #[serde(default)]
    pub item: Option<String>,
    /// Minimum amount held.
    #[serde(default)]
    pub amount: Option<i64>,
    /// Message shown when the requirement is not met.
    #[serde(default)]
    pub message: Option<String>,
}

impl WorldData {
    /// Parse a world document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid world document.
    pub fn from_json(text: &str) -> WorldResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a world document from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> WorldResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| WorldError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let world = Self::from_json(&text)?;
        tracing::info!(
            path = %path.display(),
            rooms = world.rooms.len(),
            "loaded world file"
        );
        Ok(world)
    }

    /// The world shipped with the game.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled document is malformed.
    pub fn builtin() -> WorldResult<Self> {
        Self::from_json(BUILTIN_WORLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_world_parses() {
        let world = WorldData::builtin().unwrap();
        assert_eq!(world.starting_room.as_deref(), Some("clearing"));
        assert!(!world.rooms.is_empty());
    }

    #[test]
    fn test_builtin_world_has_wood() {
        let world = WorldData::builtin().unwrap();
        assert!(
            world.rooms.iter().any(|r| r.gather.contains_key("wood")),
            "No room contains gather data for wood"
        );
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let world = WorldData::from_json(r#"{"rooms": [{"id": "a"}]}"#).unwrap();
        assert_eq!(world.starting_room, None);

        let room = &world.rooms[0];
        assert_eq!(room.id.as_deref(), Some("a"));
        assert!(room.name.is_empty());
        assert!(room.description.is_empty());
        assert!(room.exits.is_empty());
        assert!(room.gather.is_empty());
        assert!(room.requires.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let world = WorldData::from_json("{}").unwrap();
        assert!(world.rooms.is_empty());
        assert!(world.starting_room.is_none());
    }

    #[test]
    fn test_unused_fields_ignored() {
        let json = r#"{
            "starting_room": "a",
            "rooms": [{"id": "a", "encounters": ["wolf"], "loot": {"gold": 3}}]
        }"#;
        let world = WorldData::from_json(json).unwrap();
        assert_eq!(world.rooms.len(), 1);
    }

    #[test]
    fn test_requirement_record_fields() {
        let json = r#"{"rooms": [{"id": "a", "requires": [
            {"type": "item", "item": "stone", "amount": 3, "message": "Need stone."}
        ]}]}"#;
        let world = WorldData::from_json(json).unwrap();
        let req = &world.rooms[0].requires[0];
        assert_eq!(req.kind, "item");
        assert_eq!(req.item.as_deref(), Some("stone"));
        assert_eq!(req.amount, Some(3));
        assert_eq!(req.message.as_deref(), Some("Need stone."));
    }

    #[test]
    fn test_malformed_json() {
        let result = WorldData::from_json("{ not json");
        assert!(matches!(result, Err(WorldError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = WorldData::load(Path::new("/nonexistent/world.json"));
        assert!(matches!(result, Err(WorldError::Io { .. })));
    }
}
