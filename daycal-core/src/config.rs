//! daycal configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::error::{DayCalError, DayCalResult};
use crate::language::Language;

static DEFAULT_LOG_LEVEL: &str = "warn";

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Configuration at ~/.config/daycal/config.toml
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DayCalConfig {
    /// Agenda file loaded at start-up.
    #[serde(default)]
    pub agenda: Option<PathBuf>,

    #[serde(default)]
    pub language: Language,

    /// Seed sample activities when no agenda is configured.
    #[serde(default)]
    pub demo: bool,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for DayCalConfig {
    fn default() -> Self {
        DayCalConfig {
            agenda: None,
            language: Language::default(),
            demo: false,
            log_level: default_log_level(),
        }
    }
}

impl DayCalConfig {
    pub fn config_path() -> DayCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DayCalError::Config("Could not determine config directory".into()))?
            .join("daycal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, writing a commented-out default file first if
    /// none exists yet.
    pub fn load() -> DayCalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            if let Err(e) = Self::create_default_config(&config_path) {
                log::warn!("using built-in defaults: {}", e);
                return Ok(Self::default());
            }
        }

        Self::load_from(&config_path)
    }

    /// Load config from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> DayCalResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| DayCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DayCalError::Config(e.to_string()))
    }

    /// Agenda path with `~` expanded.
    pub fn agenda_path(&self) -> Option<PathBuf> {
        self.agenda.as_ref().map(|p| {
            PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).into_owned())
        })
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DayCalResult<()> {
        let contents = format!(
            "\
# daycal configuration

# Agenda file with [[activity]] entries, loaded at start-up:
# agenda = \"~/agenda.toml\"

# Label language, \"swedish\" or \"english\":
# language = \"swedish\"

# Show sample activities when no agenda is configured:
# demo = true

# Log level (error, warn, info, debug, trace):
# log_level = \"{}\"
",
            DEFAULT_LOG_LEVEL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DayCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DayCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
