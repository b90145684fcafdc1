//! File logging bootstrap
//!
//! The terminal belongs to the TUI, so log records go to a rotating file under
//! the user's cache directory (`~/.cache/nook/logs` on Linux).
//!
//! Initialization is best-effort: callers report the error and keep running
//! without a log file.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::path::{Path, PathBuf};
use thiserror::Error;

const LOG_FILE_BASENAME: &str = "nook";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Errors raised while starting the logger
#[derive(Debug, Error)]
pub enum LoggingError {
    /// No cache directory for this platform
    #[error("Could not determine cache directory")]
    NoCacheDir,

    /// Log directory could not be created
    #[error("Failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Logger backend rejected the level string or failed to start
    #[error("Failed to start logger: {0}")]
    Backend(#[from] flexi_logger::FlexiLoggerError),
}

/// Default log directory
///
/// # Errors
///
/// Returns `LoggingError::NoCacheDir` if the platform has no cache directory.
pub fn default_log_dir() -> Result<PathBuf, LoggingError> {
    dirs::cache_dir()
        .map(|dir| dir.join("nook").join("logs"))
        .ok_or(LoggingError::NoCacheDir)
}

/// Start file logging at `level` into `log_dir`
///
/// The returned handle must be kept alive for the lifetime of the program;
/// dropping it flushes and stops the logger.
///
/// # Errors
///
/// Returns `LoggingError` if the directory cannot be created or the level
/// string is not understood.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<LoggerHandle, LoggingError> {
    std::fs::create_dir_all(log_dir).map_err(|source| LoggingError::CreateDir {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let handle = Logger::try_with_str(level)?
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

    log::info!(
        "event=app_start version={} platform={} level={level}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
    );

    Ok(handle)
}
