//! File logging for the overlay.
//!
//! The overlay lives inside a host client that owns stdout, so events go to a
//! log file instead. The filter is scoped to this crate by default so that a
//! verbose level does not drag the host's own targets along.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Env var holding filter directives for the overlay.
pub const LOG_FILTER_ENV_VAR: &str = "MUSEUM_OVERLAY_LOG";

/// Directives used when neither [`LOG_FILTER_ENV_VAR`] nor `RUST_LOG` is set.
pub const DEFAULT_DIRECTIVES: &str = "museum_overlay=info";

/// Why the file subscriber could not be installed.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying io error.
        #[source]
        source: std::io::Error,
    },

    /// The path has no usable file name.
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// The path has no parent, e.g. a bare root.
    #[error("Log path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    /// The host, or an earlier call, already installed a global subscriber.
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Split a log file path into its directory and file name.
///
/// A bare file name logs into the current directory.
pub fn split_log_path(log_path: &Path) -> Result<(&Path, &str), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;
    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::NoParentDirectory(log_path.to_path_buf()))?;
    let directory = if directory.as_os_str().is_empty() {
        Path::new(".")
    } else {
        directory
    };
    Ok((directory, file_name))
}

/// Filter from [`LOG_FILTER_ENV_VAR`], then `RUST_LOG`, then [`DEFAULT_DIRECTIVES`].
pub fn build_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install a global subscriber appending to `log_path`.
///
/// The parent directory is created if needed.
///
/// # Errors
///
/// See [`LoggingError`].
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let (directory, file_name) = split_log_path(log_path)?;
    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(tracing_appender::rolling::never(directory, file_name))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

/// [`init`] at the configured log file path.
///
/// # Errors
///
/// See [`init`].
pub fn init_from_config(config: &crate::config::ResolvedConfig) -> Result<(), LoggingError> {
    init(&config.log_file_path)
}
