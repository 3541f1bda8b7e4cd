//! Structured logging setup using the `tracing` ecosystem.
//!
//! The client itself only emits `tracing` events; installing a subscriber is
//! left to the hosting application. These helpers cover the two common
//! setups: console-only, and console plus a daily-rotated file.

use std::path::Path;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants::{DEFAULT_LOG_LEVEL, LOG_FILE_NAME};
use crate::error::{DbvError, DbvResult};

/// Initialize the global tracing subscriber with console and file output.
///
/// Fails with `DbvError::Config` if a global subscriber is already set, since
/// the file layer would otherwise be silently dropped.
///
/// # Arguments
/// * `level` - Log level or filter directive, e.g. "debug" or "dbv_api=trace"
/// * `log_dir` - Directory for rotated log files (created if missing)
/// * `json_output` - If true, use JSON format for file output
pub fn init_logging(level: &str, log_dir: &Path, json_output: bool) -> DbvResult<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = rolling::daily(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer().with_target(true).compact();

    let result = if json_output {
        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter(level))
            .with(console_layer)
            .with(file_layer)
            .try_init()
    } else {
        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter(level))
            .with(console_layer)
            .with(file_layer)
            .try_init()
    };
    result.map_err(|e| DbvError::Config(format!("failed to install file logging: {e}")))?;

    tracing::info!("logging initialized at level={level}, dir={}", log_dir.display());

    Ok(LogGuard { _guard: guard })
}

/// Guard that keeps the non-blocking log writer alive.
/// Drop this to flush and close the log file.
pub struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Initialize a minimal console-only logger for tests or simple hosts.
///
/// Does nothing if a global subscriber is already set.
pub fn init_console_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(fmt::layer().with_target(true).compact())
        .try_init();
}

/// Initialize logging from configuration.
///
/// An empty `directory` means console-only logging and yields no guard.
pub fn init_from_config(config: &LoggingConfig) -> DbvResult<Option<LogGuard>> {
    if config.directory.trim().is_empty() {
        init_console_logging(&config.level);
        return Ok(None);
    }
    init_logging(&config.level, Path::new(&config.directory), config.json_output).map(Some)
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
