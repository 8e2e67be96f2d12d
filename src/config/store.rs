//! Settings storage owned by the host.
//!
//! The panel only reads the current [`ProjectSettings`] and hands back a
//! replacement on apply. [`ConfigStore`] keeps them in the TOML config file,
//! [`MemoryStore`] keeps them in memory for hosts that persist elsewhere.

use std::path::PathBuf;

use crate::config::loader::ConfigError;
use crate::config::types::{Config, ProjectSettings};

/// Source of truth for the project settings.
pub trait SettingsStore {
    /// Settings as last saved.
    fn state(&self) -> &ProjectSettings;

    /// Replace the saved settings.
    fn save(&mut self, settings: ProjectSettings) -> Result<(), ConfigError>;
}

/// Settings backed by a TOML config file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config: Config,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self { config, path }
    }

    /// Load the file at `path` (defaults if it does not exist yet).
    pub fn open(path: PathBuf) -> Result<Self, ConfigError> {
        let config = Config::load_from(&path)?;
        tracing::info!(
            path = %path.display(),
            intervals = config.settings.intervals.len(),
            "Settings loaded"
        );
        Ok(Self::new(config, path))
    }
}

impl SettingsStore for ConfigStore {
    fn state(&self) -> &ProjectSettings {
        &self.config.settings
    }

    /// Writes the file first; memory is only updated once that succeeded.
    fn save(&mut self, settings: ProjectSettings) -> Result<(), ConfigError> {
        let config = Config { settings };
        config.save_to(&self.path)?;
        self.config = config;
        Ok(())
    }
}

/// In-memory settings.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    settings: ProjectSettings,
    saves: usize,
}

impl MemoryStore {
    pub fn new(settings: ProjectSettings) -> Self {
        Self { settings, saves: 0 }
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl SettingsStore for MemoryStore {
    fn state(&self) -> &ProjectSettings {
        &self.settings
    }

    fn save(&mut self, settings: ProjectSettings) -> Result<(), ConfigError> {
        self.settings = settings;
        self.saves += 1;
        Ok(())
    }
}
