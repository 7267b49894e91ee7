//! TOML-based application configuration.
//!
//! The calendar widget options that used to live in an ad hoc object
//! literal are a typed struct here, validated when loaded.
//!
//! Configuration is stored at `~/.config/tagtally/config.toml`; the cached
//! auth session sits next to it as `session.json`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::view::Granularity;

/// Event backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Calendar view settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default = "default_granularity")]
    pub initial_granularity: Granularity,
    #[serde(default = "default_true")]
    pub week_starts_monday: bool,
    /// First hour shown in day/week views (0-23).
    #[serde(default = "default_day_start")]
    pub day_start_hour: u32,
    /// Last hour shown in day/week views (1-24, exclusive).
    #[serde(default = "default_day_end")]
    pub day_end_hour: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/tagtally/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

fn default_base_url() -> String {
    "http://localhost:8000/".to_string()
}

fn default_granularity() -> Granularity {
    Granularity::Month
}

fn default_true() -> bool {
    true
}

fn default_day_start() -> u32 {
    0
}

fn default_day_end() -> u32 {
    24
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            initial_granularity: default_granularity(),
            week_starts_monday: true,
            day_start_hour: default_day_start(),
            day_end_hour: default_day_end(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            calendar: CalendarConfig::default(),
        }
    }
}

/// Configuration directory, created on demand.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir()
        .ok_or(ConfigError::NoConfigDir)?
        .join("tagtally");
    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

impl Config {
    /// Path of the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Path of the cached auth session.
    pub fn session_path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("session.json"))
    }

    /// Load from the default path; missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path; missing file yields defaults.
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Config =
            toml::from_str(&text).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save to the default path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, text).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Check field-level constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.backend.base_url).map_err(|e| ConfigError::InvalidValue {
            key: "backend.base_url".to_string(),
            message: e.to_string(),
        })?;
        if self.calendar.day_start_hour > 23 {
            return Err(ConfigError::InvalidValue {
                key: "calendar.day_start_hour".to_string(),
                message: format!("must be 0-23, got {}", self.calendar.day_start_hour),
            });
        }
        if self.calendar.day_end_hour < 1 || self.calendar.day_end_hour > 24 {
            return Err(ConfigError::InvalidValue {
                key: "calendar.day_end_hour".to_string(),
                message: format!("must be 1-24, got {}", self.calendar.day_end_hour),
            });
        }
        if self.calendar.day_start_hour >= self.calendar.day_end_hour {
            return Err(ConfigError::InvalidValue {
                key: "calendar.day_end_hour".to_string(),
                message: "day must end after it starts".to_string(),
            });
        }
        Ok(())
    }
}
