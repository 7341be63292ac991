//! Play command implementation - line-oriented console session.

use super::{CliError, load_world};
use dark_forest::{GAME_TITLE, GameState, HELP_LINE, parse_command};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the world cannot be loaded, the starting room is
/// missing, or the console fails.
pub(crate) fn execute(world_path: Option<&Path>) -> Result<(), CliError> {
    let world = load_world(world_path)?;
    let state = GameState::from_world(&world)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(state, stdin.lock(), stdout.lock())
}

/// Run a session until the player quits or input ends.
///
/// Prints the title, the help line and the starting room, then reads one
/// command per line and prints the replies.
fn run_session(
    mut state: GameState,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<(), CliError> {
    writeln!(output, "{GAME_TITLE}")?;
    writeln!(output, "{HELP_LINE}")?;

    for line in state.describe_current_room() {
        writeln!(output, "{line}")?;
    }

    if !state.is_running() {
        return Err(CliError::new(format!(
            "Starting room '{}' not found in world",
            state.current_room_id()
        )));
    }

    tracing::info!(room = state.current_room_id(), "console session started");

    let mut buffer = String::new();
    while state.is_running() {
        write!(output, "\n> ")?;
        output.flush()?;

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            // End of input: leave like a quit, without the farewell
            writeln!(output)?;
            break;
        }

        let command = parse_command(&buffer);
        for line in state.execute(&command) {
            writeln!(output, "{line}")?;
        }
    }

    Ok(())
}
