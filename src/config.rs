//! User configuration (`config.toml`) and platform paths

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::debounce::DEFAULT_QUIET;
use crate::filter::PAGE_SIZE;
use crate::navigation::DEFAULT_SWIPE_THRESHOLD;

const APP_NAME: &str = "skillsmp";
const CONFIG_FILE: &str = "config.toml";
const DB_FILE: &str = "skillsmp.db";
const LOG_FILE: &str = "skillsmp.log";

/// Grid behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub page_size: usize,
    /// Quiet period before a typed query is applied
    pub debounce_ms: u64,
    /// Horizontal drag distance that flips a page
    pub swipe_threshold: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            debounce_ms: DEFAULT_QUIET.as_millis() as u64,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl GridConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter, overridden by `SKILLSMP_LOG` or `RUST_LOG`
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsConfig {
    pub grid: GridConfig,
    pub log: LogConfig,
}

impl SkillsConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", APP_NAME).context("Could not determine home directory")
    }

    /// Directory holding `config.toml`
    pub fn config_dir() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().to_path_buf())
    }

    /// Directory holding the database and log file
    pub fn data_dir() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.data_dir().to_path_buf())
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    pub fn db_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join(DB_FILE))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join(LOG_FILE))
    }

    /// Check if a config file exists
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Load config from the default location (defaults if missing)
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path` (defaults if missing)
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config.normalized())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Replace out-of-range values with defaults
    fn normalized(mut self) -> Self {
        if self.grid.page_size == 0 {
            self.grid.page_size = PAGE_SIZE;
        }
        self
    }
}
