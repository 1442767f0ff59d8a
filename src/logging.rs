//! Tracing setup. The terminal game owns stdout, so it logs to a file; the
//! simulator logs to stderr.

use std::fs;
use std::io;
use std::path::Path;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "idols.log";

fn env_filter(default: tracing::Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default.as_str()))
}

/// Sends every event to `<dir>/idols.log`.
///
/// The writer guard is leaked so the background flusher lives as long as the
/// process.
pub fn init_file_logging(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;

    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter(tracing::Level::INFO))
        .with(file_layer)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    std::mem::forget(guard);

    tracing::info!("Log file: {}", dir.join(LOG_FILE_NAME).display());
    Ok(())
}

/// Sends events to stderr. Verbosity 0 keeps only warnings.
pub fn init_stderr_logging(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);
    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(layer)
        .try_init();
}
