use std::path::PathBuf;

use color_eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

const LOG_FILE: &str = "enable-secret-version.log";

/// Install a file-backed subscriber. Stdout is left to the command's output.
///
/// `RUST_LOG` takes precedence over the configured filter. Keep the returned
/// guard alive until exit so buffered lines are flushed.
pub fn initialize_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let directory = log_directory(config);
    std::fs::create_dir_all(&directory)?;

    let file_appender = tracing_appender::rolling::daily(&directory, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .init();

    Ok(guard)
}

fn log_directory(config: &LoggingConfig) -> PathBuf {
    config.directory.clone().unwrap_or_else(|| {
        dirs::data_local_dir().map_or_else(
            || PathBuf::from("logs"),
            |path| path.join("enable-secret-version").join("logs"),
        )
    })
}
