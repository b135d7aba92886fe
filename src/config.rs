//! Configuration management
//!
//! Plain TOML file under the platform config directory with environment
//! variable overrides. Presentation flags (theme, view mode) live here
//! because they are last-write-wins state with no other invariants.

use crate::error::{Error, Result};
use crate::store::http::DEFAULT_BASE_URL;
use crate::workflow::{Theme, ViewMode};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the directory holding the jobdeck config file.
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "jobdeck", "jobdeck")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Base URL of the job board API.
    pub api_url: String,
    /// Color theme for rendered output.
    #[serde(default)]
    pub theme: Theme,
    /// Grid or list rendering of the jobs view.
    #[serde(default)]
    pub view_mode: ViewMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            theme: Theme::default(),
            view_mode: ViewMode::default(),
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when
    /// no file exists yet.
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join("config.toml");
        Self::load_from(&path)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            Self::default()
        };
        config.merge_env_vars();
        Ok(config)
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        let dir = config_dir()?;
        fs::create_dir_all(&dir)?;
        self.save_to(&dir.join("config.toml"))
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Environment variables take precedence over the file.
    pub fn merge_env_vars(&mut self) {
        if let Ok(url) = std::env::var("JOBDECK_API_URL") {
            self.api_url = url;
        }
        if let Some(theme) = std::env::var("JOBDECK_THEME")
            .ok()
            .and_then(|v| v.parse::<Theme>().ok())
        {
            self.theme = theme;
        }
        if let Some(mode) = std::env::var("JOBDECK_VIEW_MODE")
            .ok()
            .and_then(|v| v.parse::<ViewMode>().ok())
        {
            self.view_mode = mode;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:5000/api");
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.view_mode, ViewMode::Grid);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.api_url, Config::default().api_url);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            api_url: "http://jobs.example.com/api".to_string(),
            theme: Theme::Light,
            view_mode: ViewMode::List,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_url = \"http://other:9999/api\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_url, "http://other:9999/api");
        assert_eq!(config.theme, Theme::Dark);
    }
}
