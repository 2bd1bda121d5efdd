use crate::models::settings::Settings;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "planner.toml";

/// Overrides the config file location when set.
pub const CONFIG_ENV_VAR: &str = "FUZZY_PLANNER_CONFIG";

/// Reads startup settings from a TOML file. Settings are never written back.
pub struct SettingsService {
    path: Option<PathBuf>,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Resolve the config path from the environment, then the platform config dir.
    pub fn from_environment() -> Self {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::new(path);
        }
        let path = ProjectDirs::from("com", "Fuzzy", "FuzzyPlanner")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME));
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load settings; a missing file yields the defaults.
    pub fn load(&self) -> Result<Settings> {
        let Some(path) = &self.path else {
            return Ok(Settings::default());
        };
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Settings::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let settings = parse_settings(&text)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                Settings::default()
            }
        }
    }
}

pub fn parse_settings(text: &str) -> Result<Settings> {
    toml::from_str(text).context("Invalid settings")
}
