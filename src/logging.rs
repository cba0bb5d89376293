use std::{fs, path::Path};

use anyhow::Context;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Console output plus daily-rotated `fyyur.<date>.log` files under `log_dir`.
/// Keep the returned guard alive for as long as records should reach the file.
pub fn init_logging(log_dir: &Path) -> anyhow::Result<WorkerGuard> {
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender(log_dir)?);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true);

    let console_layer = fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fyyur=info,tower_http=info".into()),
        )
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("installing the tracing subscriber")?;

    Ok(guard)
}

fn file_appender(log_dir: &Path) -> anyhow::Result<RollingFileAppender> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("fyyur")
        .filename_suffix("log")
        .build(log_dir)
        .with_context(|| format!("opening log file in {}", log_dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_appender_creates_missing_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_dir = temp_dir.path().join("nested").join("logs");

        file_appender(&log_dir).unwrap();
        assert!(log_dir.is_dir());
    }

    #[test]
    fn unusable_log_dir_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let err = file_appender(file.path()).unwrap_err();
        assert!(err.to_string().contains("creating log directory"), "{err:#}");
        assert!(init_logging(file.path()).is_err());
    }
}
