//! CLI command implementations for the Dark Forest.

pub(crate) mod logging;
pub(crate) mod play;
pub(crate) mod tui;
pub(crate) mod validate;

use dark_forest::{WorldData, WorldError};
use std::error::Error;
use std::fmt;
use std::path::Path;

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<WorldError> for CliError {
    fn from(e: WorldError) -> Self {
        Self::new(e.to_string())
    }
}

/// Load the world from `path`, or the built-in world if none is given.
///
/// # Errors
///
/// Returns an error if the world cannot be read or parsed.
pub(crate) fn load_world(path: Option<&Path>) -> Result<WorldData, CliError> {
    let world = match path {
        Some(path) => WorldData::load(path)?,
        None => WorldData::builtin()?,
    };
    Ok(world)
}

/// Human-readable name of the world source.
pub(crate) fn world_label(path: Option<&Path>) -> String {
    path.map_or_else(|| "built-in world".to_string(), |p| p.display().to_string())
}
