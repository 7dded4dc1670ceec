//! Logging Infrastructure
//!
//! `tracing` subscriber setup. Console output by default, daily rolling
//! file output when a log directory is configured.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Log file prefix inside the log directory
pub const LOG_FILE_PREFIX: &str = "booking-core";

/// Initialize the logger
pub fn init_logger() -> bool {
    init_logger_with_file(None, None)
}

/// Initialize the logger with optional file output.
///
/// `RUST_LOG` wins over `log_level` when set. Returns `false` if a global
/// subscriber was already installed.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) -> bool {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, LOG_FILE_PREFIX);
            return subscriber
                .with_ansi(false)
                .with_writer(file_appender)
                .try_init()
                .is_ok();
        }
        let installed = subscriber.try_init().is_ok();
        tracing::warn!(log_dir = %dir, "Log directory does not exist, logging to stdout");
        return installed;
    }

    subscriber.try_init().is_ok()
}
