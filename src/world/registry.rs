//! Room registry: typed rooms keyed by identifier.

use std::collections::HashMap;

use crate::error::{WorldError, WorldResult};
use crate::world::{DEFAULT_BLOCKED_MESSAGE, Requirement, RequirementRecord, Room, RoomRecord};

/// An exit whose destination is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingExit {
    /// Room the exit leaves from.
    pub room: String,
    /// Direction name of the exit.
    pub direction: String,
    /// Destination id that does not exist.
    pub target: String,
}

/// All rooms of a world, keyed by identifier. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct RoomRegistry {
    rooms: HashMap<String, Room>,
}

impl RoomRegistry {
    /// Build a registry from raw room records.
    ///
    /// Records without an id are skipped. A record whose id repeats an
    /// earlier one replaces it. Exits are not checked here; a dangling exit
    /// only surfaces when someone tries to walk through it.
    ///
    /// # Errors
    ///
    /// Returns an error if a requirement has an unknown type or no item.
    pub fn from_records(records: &[RoomRecord]) -> WorldResult<Self> {
        let mut rooms = HashMap::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let Some(id) = record.id.as_deref().filter(|id| !id.is_empty()) else {
                tracing::warn!(index, "skipping room record without an id");
                continue;
            };

            let room = convert_record(id, record)?;
            if rooms.insert(id.to_string(), room).is_some() {
                tracing::warn!(room = id, "duplicate room id, later record wins");
            }
        }

        tracing::debug!(rooms = rooms.len(), "room registry built");
        Ok(Self { rooms })
    }

    /// Build a registry from already typed rooms.
    #[must_use]
    pub fn from_rooms(rooms: impl IntoIterator<Item = Room>) -> Self {
        Self {
            rooms: rooms.into_iter().map(|room| (room.id.clone(), room)).collect(),
        }
    }

    /// Look up a room by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Check whether a room id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.rooms.contains_key(id)
    }

    /// Number of rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the registry holds no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterate over all rooms in no particular order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Every exit that points at a room id not in the registry, sorted by
    /// room then direction.
    #[must_use]
    pub fn dangling_exits(&self) -> Vec<DanglingExit> {
        let mut dangling: Vec<DanglingExit> = self
            .rooms
            .values()
            .flat_map(|room| {
                room.exits
                    .iter()
                    .filter(|(_, target)| !self.contains(target))
                    .map(|(direction, target)| DanglingExit {
                        room: room.id.clone(),
                        direction: direction.clone(),
                        target: target.clone(),
                    })
            })
            .collect();

        dangling.sort_by(|a, b| (&a.room, &a.direction).cmp(&(&b.room, &b.direction)));
        dangling
    }
}

impl FromIterator<Room> for RoomRegistry {
    fn from_iter<T: IntoIterator<Item = Room>>(iter: T) -> Self {
        Self::from_rooms(iter)
    }
}

fn convert_record(id: &str, record: &RoomRecord) -> WorldResult<Room> {
    let gather = record
        .gather
        .iter()
        .filter(|&(_, &amount)| amount > 0)
        .map(|(resource, &amount)| (resource.clone(), clamp_to_u32(amount)))
        .collect();

    let requires = record
        .requires
        .iter()
        .map(|req| convert_requirement(id, req))
        .collect::<WorldResult<Vec<_>>>()?;

    Ok(Room {
        id: id.to_string(),
        name: record.name.clone(),
        description: record.description.clone(),
        exits: record.exits.clone(),
        gather,
        requires,
    })
}

fn convert_requirement(room: &str, record: &RequirementRecord) -> WorldResult<Requirement> {
    match record.kind.as_str() {
        "item" => {
            let item = record
                .item
                .as_deref()
                .filter(|item| !item.is_empty())
                .ok_or_else(|| WorldError::InvalidRequirement {
                    room: room.to_string(),
                    reason: "item requirement without an item".to_string(),
                })?;

            Ok(Requirement::item(
                item,
                clamp_to_u32(record.amount.unwrap_or(1)),
                record.message.as_deref().unwrap_or(DEFAULT_BLOCKED_MESSAGE),
            ))
        }
        other => Err(WorldError::InvalidRequirement {
            room: room.to_string(),
            reason: format!("unknown requirement type '{other}'"),
        }),
    }
}

fn clamp_to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
