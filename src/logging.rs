use color_eyre::{Result, eyre::WrapErr};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Config, LoggingConfig};

const LOG_FILE_NAME: &str = "showcase.log";

/// Routes `tracing` output to the log file in the data directory.
///
/// The terminal belongs to the UI, so nothing is written to stdout or stderr.
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(logging: &LoggingConfig) -> Result<PathBuf> {
    let log_path = Config::data_dir()?.join(LOG_FILE_NAME);
    init_at(&log_path, &logging.level)?;
    Ok(log_path)
}

fn init_at(log_path: &Path, level: &str) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .wrap_err_with(|| format!("Failed to open log file {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_for(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|error| color_eyre::eyre::eyre!("Failed to install logger: {}", error))
}

fn filter_for(level: &str) -> EnvFilter {
    let level = level.trim();
    if level.is_empty() {
        EnvFilter::new("info")
    } else {
        EnvFilter::new(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_level_falls_back_to_info() {
        assert_eq!(filter_for("  ").to_string(), "info");
        assert_eq!(filter_for("showcase=debug").to_string(), "showcase=debug");
    }
}
