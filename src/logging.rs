//! Diagnostic logging bootstrap.
//!
//! Logs go to rotating files in a per-user directory, never to the
//! interactive stream the shell owns. Initialization is idempotent: the
//! first successful call wins and later calls are no-ops.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use thiserror::Error;

const LOG_FILE_BASENAME: &str = "agenda";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Errors raised while starting the diagnostic logger.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("failed to create log directory: {0}")]
    Directory(#[from] std::io::Error),

    /// The logger backend failed to start.
    #[error("failed to start logger: {0}")]
    Backend(#[from] flexi_logger::FlexiLoggerError),
}

/// Initializes file logging under the default per-user directory.
///
/// # Errors
///
/// Returns [`LoggingError`] when the directory cannot be created or the
/// logger backend fails to start.
pub fn init_default() -> Result<(), LoggingError> {
    init(&default_log_dir())
}

/// Initializes file logging under the given directory.
///
/// Idempotent: once a logger is active, further calls return `Ok` without
/// touching the active configuration.
///
/// # Errors
///
/// Returns [`LoggingError`] when the directory cannot be created or the
/// logger backend fails to start.
pub fn init(log_dir: &Path) -> Result<(), LoggingError> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    LOGGER.get_or_try_init(|| -> Result<LoggerHandle, LoggingError> {
        std::fs::create_dir_all(log_dir)?;
        let handle = Logger::try_with_str(default_level())?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()?;

        info!(
            "event=logging_started level={} version={}",
            default_level(),
            env!("CARGO_PKG_VERSION")
        );
        Ok(handle)
    })?;

    Ok(())
}

/// Returns the default log level for the current build mode.
#[must_use]
pub const fn default_level() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "info" }
}

fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("agenda-logs")
}
