//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to %APPDATA%\TextMatch\app.log
//! and rotation on application startup keeping a short history of sessions.

use crate::error::Result;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Number of historical log files to keep (app.log.1 through app.log.5)
const MAX_LOG_FILES: u8 = 5;

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via the `RUST_LOG`
/// environment variable. Existing logs are rotated on startup so each
/// session writes to a fresh file.
pub fn init_logging() -> Result<()> {
    let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
    let log_dir = Path::new(&appdata).join("TextMatch");
    std::fs::create_dir_all(&log_dir)?;

    rotate_logs_on_startup(&log_dir.join("app.log"))?;

    // tracing_appender's rotation is time-based; session-based rotation is
    // handled above, so the appender itself never rotates
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("app")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| crate::error::TextMatchError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false) // Disable ANSI colors for file output
        .with_target(true) // Include target module
        .with_file(true) // Include file names
        .with_line_number(true) // Include line numbers
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| crate::error::TextMatchError::ConfigError(Box::new(e)))?;

    tracing::info!("TextMatch v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Rotate log files on application startup
///
/// Shifts each numbered log up by one (app.log.4 becomes app.log.5 and so
/// on), drops the oldest, and moves the current app.log to app.log.1. The
/// logger then creates a fresh app.log for this session.
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path.parent().ok_or_else(|| {
        crate::error::TextMatchError::ConfigError(crate::error::StringError::new(
            "Invalid log path",
        ))
    })?;
    let log_name = log_path
        .file_name()
        .ok_or_else(|| {
            crate::error::TextMatchError::ConfigError(crate::error::StringError::new(
                "Invalid log filename",
            ))
        })?
        .to_string_lossy();

    let numbered = |n: u8| log_dir.join(format!("{log_name}.{n}"));

    let oldest = numbered(MAX_LOG_FILES);
    if oldest.exists() {
        std::fs::remove_file(&oldest)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current = numbered(i);
        if current.exists() {
            std::fs::rename(&current, numbered(i + 1))?;
        }
    }

    std::fs::rename(log_path, numbered(1))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_dir;
    use std::fs;

    #[test]
    fn test_rotate_missing_log_is_noop() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join("app.log");

        rotate_logs_on_startup(&log_path).unwrap();
        assert!(!log_path.exists());
    }

    #[test]
    fn test_rotate_moves_current_log_to_one() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join("app.log");
        fs::write(&log_path, "session 1").unwrap();

        rotate_logs_on_startup(&log_path).unwrap();

        assert!(!log_path.exists());
        let rotated = fs::read_to_string(temp_dir.path().join("app.log.1")).unwrap();
        assert_eq!(rotated, "session 1");
    }

    #[test]
    fn test_rotate_shifts_history_and_drops_oldest() {
        let temp_dir = create_test_dir();
        let log_path = temp_dir.path().join("app.log");

        // Simulate more sessions than the retention window holds
        for i in 1..=(MAX_LOG_FILES + 2) {
            fs::write(&log_path, format!("session {i}")).unwrap();
            rotate_logs_on_startup(&log_path).unwrap();
        }

        // Most recent session is in .1, the oldest kept in .5
        for i in 1..=MAX_LOG_FILES {
            let content =
                fs::read_to_string(temp_dir.path().join(format!("app.log.{i}"))).unwrap();
            let expected = u32::from(MAX_LOG_FILES + 3 - i);
            assert_eq!(content, format!("session {expected}"));
        }

        assert!(!temp_dir
            .path()
            .join(format!("app.log.{}", MAX_LOG_FILES + 1))
            .exists());
    }
}
