//! Dark Forest CLI - play the adventure in the console or a terminal UI.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// The Dark Forest - a text-based survival adventure
#[derive(Parser, Debug)]
#[command(name = "dark-forest")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World file (JSON). Uses the built-in world if omitted.
    #[arg(short, long, global = true, env = "DARK_FOREST_WORLD")]
    world: Option<PathBuf>,

    /// Write logs to this file (`RUST_LOG` controls the level)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Play in the console, one command per line (default)
    Play,

    /// Play in a full-screen terminal UI with a map overlay
    Tui,

    /// Check a world file for problems
    Validate,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let command = args.command.unwrap_or(Commands::Play);

    let result = cli::logging::init(command == Commands::Tui, args.log_file.as_deref())
        .and_then(|_guard| {
            let world_path = args.world.as_deref();
            match command {
                Commands::Play => cli::play::execute(world_path),
                Commands::Tui => cli::tui::execute(world_path),
                Commands::Validate => cli::validate::execute(world_path),
            }
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
