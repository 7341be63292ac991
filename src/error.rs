//! Error types for loading world data.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or converting world data.
///
/// These only occur at startup. Integrity problems discovered during play
/// (a missing current room, an exit that points nowhere) are reported as
/// output lines by the game controller instead.
#[derive(Debug, Error)]
pub enum WorldError {
    /// The world file could not be read.
    #[error("failed to read world file {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The world document is not valid JSON or does not match the schema.
    #[error("malformed world data: {0}")]
    Json(#[from] serde_json::Error),

    /// A room declares a requirement that cannot be converted.
    #[error("room '{room}' has an invalid requirement: {reason}")]
    InvalidRequirement {
        /// Identifier of the offending room.
        room: String,
        /// Why the requirement was rejected.
        reason: String,
    },
}

/// Result type for world loading.
pub type WorldResult<T> = Result<T, WorldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_requirement_display() {
        let err = WorldError::InvalidRequirement {
            room: "cave".to_string(),
            reason: "unknown requirement type 'flag'".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("cave"));
        assert!(msg.contains("flag"));
    }

    #[test]
    fn test_io_error_display_names_path() {
        let err = WorldError::Io {
            path: PathBuf::from("data/missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(format!("{err}").contains("data/missing.json"));
    }
}
