#![no_main]

//! Session fuzzer.
//!
//! Feeds arbitrary player input to a session on the built-in world and checks
//! that the controller keeps its bookkeeping consistent:
//! 1. Parsing never panics
//! 2. The current room always has a stored coordinate
//! 3. The discovered set never shrinks
//! 4. A stopped session produces no output

use arbitrary::Arbitrary;
use dark_forest::{GameState, WorldData, parse_command, render_map};
use libfuzzer_sys::fuzz_target;

/// Structured input for session fuzzing.
#[derive(Arbitrary, Debug)]
struct SessionInput {
    /// Raw lines typed by the player.
    lines: Vec<String>,
    /// Draw the map after every command.
    draw_map: bool,
}

fuzz_target!(|input: SessionInput| {
    let Ok(world) = WorldData::builtin() else {
        return;
    };
    let Ok(mut game) = GameState::from_world(&world) else {
        return;
    };
    game.describe_current_room();

    let mut discovered = game.player().discovered_count();
    for line in input.lines.iter().take(200) {
        let was_running = game.is_running();
        let output = game.execute(&parse_command(line));

        if !was_running {
            assert!(output.is_empty(), "stopped session produced output");
        }
        assert!(game.player().discovered_count() >= discovered);
        discovered = game.player().discovered_count();
        assert_eq!(
            game.player().position_of(game.current_room_id()),
            Some(game.player().position())
        );

        if input.draw_map {
            let _ = render_map(&game);
        }
    }
});
