//! Logging Infrastructure
//!
//! Structured logging for development (pretty, stdout) and production
//! (JSON, optionally to a daily-rolling file).

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output
///
/// `RUST_LOG` wins over `log_level` when set. Files are only written when
/// `log_dir` exists; otherwise output stays on stdout. Calling this twice is
/// harmless, the second call is ignored.
pub fn init_logger_with_file(log_level: &str, json: bool, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "store-server");
            let result = if json {
                builder.json().with_writer(file_appender).try_init()
            } else {
                builder.with_ansi(false).with_writer(file_appender).try_init()
            };
            if result.is_err() {
                tracing::debug!("Logger already initialized");
            }
            return;
        }
        eprintln!("Log directory {dir} does not exist, logging to stdout");
    }

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if result.is_err() {
        tracing::debug!("Logger already initialized");
    }
}
