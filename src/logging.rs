use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Installs the global subscriber, writing to a file so the terminal stays
/// free for the maze.
///
/// The returned guard flushes pending lines when dropped; hold it until exit.
pub fn init(config: &Config) -> WorkerGuard {
    let appender = tracing_appender::rolling::never(&config.log_dir, &config.log_file);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();

    for warning in &config.warnings {
        tracing::warn!("[config] {}", warning);
    }
    guard
}
