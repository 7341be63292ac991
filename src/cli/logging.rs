//! Logging setup.
//!
//! The console front end logs warnings to stderr unless `--log-file` is given.
//! The terminal UI owns the screen, so it only logs when a file is given.

use super::CliError;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber.
///
/// The returned guard flushes the log file when dropped, so keep it alive for
/// the whole run.
///
/// # Errors
///
/// Returns an error if the log file path is unusable or a subscriber is
/// already installed.
pub(crate) fn init(
    fullscreen: bool,
    log_file: Option<&Path>,
) -> Result<Option<WorkerGuard>, CliError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| CliError::new(format!("Invalid log file: {}", path.display())))?;
            let dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name.to_string_lossy())
                .build(dir)
                .map_err(|e| CliError::new(format!("Failed to open log file: {e}")))?;
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| CliError::new(format!("Failed to initialize logging: {e}")))?;

            tracing::info!(log_file = %path.display(), "logging initialized");
            Ok(Some(guard))
        }
        None if fullscreen => Ok(None),
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| CliError::new(format!("Failed to initialize logging: {e}")))?;
            Ok(None)
        }
    }
}
