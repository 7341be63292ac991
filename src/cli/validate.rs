//! World validation command implementation.

use super::{CliError, load_world, world_label};
use dark_forest::{RoomRegistry, WorldData};
use std::path::Path;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the world cannot be loaded or has problems.
pub(crate) fn execute(world_path: Option<&Path>) -> Result<(), CliError> {
    println!("Validating: {}", world_label(world_path));
    println!();

    let world = load_world(world_path)?;
    let report = check_world(&world)?;

    print_check("World file parses", true);
    print_check("Rooms converted", true);
    print_check("Starting room exists", report.starting_room_ok);
    print_check("All exits lead somewhere", report.dangling.is_empty());

    println!();
    println!("Summary:");
    println!("  Room records:  {}", world.rooms.len());
    println!("  Rooms loaded:  {}", report.room_count);
    println!(
        "  Starting room: {}",
        world.starting_room.as_deref().unwrap_or("(none)")
    );

    if !report.dangling.is_empty() {
        println!();
        println!("Dangling exits:");
        for line in &report.dangling {
            println!("  {line}");
        }
    }

    if !report.is_ok() {
        return Err(CliError::new("World has problems"));
    }

    println!();
    println!("Validation successful!");

    Ok(())
}

/// What validation found.
#[derive(Debug)]
struct Report {
    /// Number of rooms in the registry.
    room_count: usize,
    /// Whether the starting room is in the registry.
    starting_room_ok: bool,
    /// One line per dangling exit.
    dangling: Vec<String>,
}

impl Report {
    fn is_ok(&self) -> bool {
        self.starting_room_ok && self.dangling.is_empty()
    }
}

fn check_world(world: &WorldData) -> Result<Report, CliError> {
    let registry = RoomRegistry::from_records(&world.rooms)?;

    let starting_room_ok = world
        .starting_room
        .as_deref()
        .is_some_and(|id| registry.contains(id));

    let dangling = registry
        .dangling_exits()
        .into_iter()
        .map(|exit| format!("{} --{}--> {} (missing)", exit.room, exit.direction, exit.target))
        .collect();

    Ok(Report {
        room_count: registry.len(),
        starting_room_ok,
        dangling,
    })
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}
