//! Tracing subscriber initialization.
//!
//! The TUI owns the terminal, so logs are written to a file instead.
//! Users can monitor them via `tail -f` in a separate terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// `RUST_LOG` if set and valid, otherwise [`DEFAULT_LOG_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Build a subscriber that appends plain-text events to `log_path`.
///
/// Creates the log directory if it doesn't exist.
pub fn file_subscriber(
    log_path: &Path,
    filter: EnvFilter,
) -> Result<impl tracing::Subscriber + Send + Sync + 'static, LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);

    Ok(tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file_appender)
        .with_ansi(false) // No ANSI colors in log files
        .finish())
}

/// Install the global file subscriber.
///
/// Respects `RUST_LOG`, defaulting to "info".
///
/// # Errors
///
/// Fails if the log directory cannot be created, the path has no file name, or a global
/// subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let subscriber = file_subscriber(log_path, env_filter())?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    fn file_subscriber_creates_log_directory_if_missing() {
        let test_dir = std::env::temp_dir().join("guidebook_test_logs_create");
        let _ = fs::remove_dir_all(&test_dir);

        let result = file_subscriber(&test_dir.join("test.log"), EnvFilter::new("info"));

        assert!(result.is_ok());
        assert!(test_dir.exists(), "Log directory should be created: {:?}", test_dir);
        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    fn file_subscriber_writes_events_to_file() {
        let test_dir = std::env::temp_dir().join("guidebook_test_logs_write");
        let _ = fs::remove_dir_all(&test_dir);
        let log_file = test_dir.join("app.log");

        let subscriber = file_subscriber(&log_file, EnvFilter::new("debug")).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(id = "power", "Guides updated");
            tracing::trace!("below the filter");
        });

        let contents = fs::read_to_string(&log_file).unwrap();
        assert!(contents.contains("Guides updated"));
        assert!(contents.contains("id=\"power\"") || contents.contains("id=power"));
        assert!(!contents.contains("below the filter"));
        assert!(!contents.contains('\u{1b}'), "Log file should not contain ANSI escapes");
        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    fn file_subscriber_rejects_path_without_file_name() {
        let result = file_subscriber(Path::new("/"), EnvFilter::new("info"));
        assert!(matches!(result, Err(LoggingError::InvalidPath(_))));
    }

    #[test]
    #[serial(tracing_init)]
    fn init_creates_log_directory() {
        let test_dir = std::env::temp_dir().join("guidebook_test_logs_init");
        let _ = fs::remove_dir_all(&test_dir);

        // May fail if another test already installed a subscriber, which is fine
        let _ = init(&test_dir.join("init.log"));

        assert!(test_dir.exists(), "Log directory should exist: {:?}", test_dir);
        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_subscriber_already_set() {
        let test_dir = std::env::temp_dir().join("guidebook_test_logs_twice");
        let log_file = test_dir.join("twice.log");

        let _ = init(&log_file);
        let second = init(&log_file);

        assert!(matches!(second, Err(LoggingError::SubscriberAlreadySet)));
        let _ = fs::remove_dir_all(&test_dir);
    }
}
