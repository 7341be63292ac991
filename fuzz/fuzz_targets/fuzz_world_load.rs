#![no_main]

//! World document fuzzer.
//!
//! Arbitrary bytes must either be rejected with an error or produce a world
//! that a session can be built from and played without panicking.

use dark_forest::{GameState, RoomRegistry, WorldData, parse_command};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(world) = WorldData::from_json(text) else {
        return;
    };
    let Ok(registry) = RoomRegistry::from_records(&world.rooms) else {
        return;
    };
    let _ = registry.dangling_exits();

    let mut game = GameState::new(registry, world.starting_room.as_deref());
    game.describe_current_room();
    for input in ["n", "e", "s", "w", "look", "i", "gather wood", "q"] {
        let _ = game.execute(&parse_command(input));
    }
});
