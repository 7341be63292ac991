//! World layer: static room data and the typed room registry.
//!
//! - Raw world documents (`WorldData`) as read from JSON
//! - Typed rooms with exits, gather tables and entry requirements
//! - The registry that converts records into rooms and looks them up by id

mod data;
mod registry;
mod room;

pub use data::{RequirementRecord, RoomRecord, WorldData};
pub use registry::{DanglingExit, RoomRegistry};
pub use room::{DEFAULT_BLOCKED_MESSAGE, Requirement, Room};
