// File: src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::paths::AppPaths;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use strum::EnumIter;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter)]
pub enum AppTheme {
    #[default]
    RustyDark,
    Light,
    Dark,
    Dracula,
    Nord,
    SolarizedDark,
    GruvboxDark,
}

impl fmt::Display for AppTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppTheme::RustyDark => write!(f, "Rusty Dark"),
            AppTheme::Light => write!(f, "Light"),
            AppTheme::Dark => write!(f, "Dark"),
            AppTheme::Dracula => write!(f, "Dracula"),
            AppTheme::Nord => write!(f, "Nord"),
            AppTheme::SolarizedDark => write!(f, "Solarized Dark"),
            AppTheme::GruvboxDark => write!(f, "Gruvbox Dark"),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// External CV record overriding the built-in one. The `--cv` flag wins
    /// over this for a single run.
    #[serde(default)]
    pub cv_path: Option<PathBuf>,
    #[serde(default)]
    pub theme: AppTheme,
    #[serde(default = "default_true")]
    pub mouse_capture: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cv_path: None,
            theme: AppTheme::default(),
            // Match the serde defaults
            mouse_capture: true,
        }
    }
}

impl Config {
    /// Load the configuration from disk. A missing file is a fresh install,
    /// not an error; syntax or permission problems are reported.
    pub fn load() -> Result<Self> {
        let path = AppPaths::get_config_file_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = AppPaths::get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str).map_err(|e| {
            anyhow::anyhow!("Failed to write config file '{}': {}", path.display(), e)
        })?;
        Ok(())
    }

    pub fn get_path_string() -> Result<String> {
        let path = AppPaths::get_config_file_path()?;
        Ok(path.to_string_lossy().to_string())
    }
}
