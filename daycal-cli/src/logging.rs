//! stderr logging setup.

use anyhow::{Context, Result};
use daycal_core::config::DayCalConfig;
use flexi_logger::{Logger, LoggerHandle};

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Start logging to stderr.
///
/// `RUST_LOG` wins over the configured level; `--verbose` wins over both.
pub fn init(config: &DayCalConfig, verbose: bool) -> Result<LoggerHandle> {
    let level = if verbose {
        "debug".to_string()
    } else {
        normalize_level(&config.log_level)?
    };

    let logger = if verbose {
        Logger::try_with_str(&level)
    } else {
        Logger::try_with_env_or_str(&level)
    }
    .with_context(|| format!("Invalid log level `{level}`"))?;

    logger
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .context("Failed to start logger")
}

fn normalize_level(level: &str) -> Result<String> {
    let normalized = level.trim().to_ascii_lowercase();
    if LEVELS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        anyhow::bail!(
            "Unsupported log level `{}`. Expected one of: {}",
            level,
            LEVELS.join(", ")
        )
    }
}
