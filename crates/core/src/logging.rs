//! Tracing setup shared by the binaries.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where log records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Rolling file under [`log_dir`] only.
    File,
    /// Rolling file plus a colored stderr layer.
    FileAndStderr,
    /// Stderr only, nothing written to disk.
    Stderr,
}

/// Log directory, `MODSCOPE_LOG_DIR` or `~/.modscope/logs`.
pub fn log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MODSCOPE_LOG_DIR") {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".modscope").join("logs")
}

/// Install the global subscriber. The filter comes from `RUST_LOG`, defaulting to `info`.
///
/// Returns the appender guard when a file layer was installed; it must be held for the
/// lifetime of the process so buffered records get flushed. Calling this twice keeps the
/// first subscriber.
pub fn init_logging(component: &str, target: LogTarget) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = matches!(target, LogTarget::FileAndStderr | LogTarget::Stderr).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
    });

    let (file_layer, guard) = if target == LogTarget::Stderr {
        (None, None)
    } else {
        let dir = log_dir();
        let _ = std::fs::create_dir_all(&dir);
        // Daily files prefixed with the component, e.g. cli.log.2024-01-21
        let appender = tracing_appender::rolling::daily(&dir, component);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true);
        (Some(layer), Some(guard))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    guard
}
