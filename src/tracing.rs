//! Debug tracing infrastructure for development diagnostics
//!
//! While the editor runs, stdout belongs to the screen, so logs go to a
//! file only.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=strand::search=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/strand/logs/strand.log` with daily
//! rotation.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with file logging only.
///
/// Returns the appender guard; dropping it flushes buffered log lines, so
/// the caller keeps it alive for the program's lifetime.
pub fn init() -> Option<WorkerGuard> {
    let logs_dir = match crate::config_paths::ensure_logs_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::daily(logs_dir, "strand.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(guard)
}
