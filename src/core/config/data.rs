use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::constants::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    /// Gemini model id (e.g., "gemini-2.5-flash")
    pub model: Option<String>,
    /// API root the `models/{model}:generateContent` path is appended to
    pub base_url: Option<String>,
    /// Sampling temperature sent with every request
    pub temperature: Option<f32>,
    /// Show the agent sidebar at startup regardless of terminal width
    pub sidebar: Option<bool>,
}

/// Keys accepted by `carenav set` / `carenav unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Model,
    BaseUrl,
    Temperature,
    Sidebar,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::Model,
        ConfigKey::BaseUrl,
        ConfigKey::Temperature,
        ConfigKey::Sidebar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::Model => "model",
            ConfigKey::BaseUrl => "base-url",
            ConfigKey::Temperature => "temperature",
            ConfigKey::Sidebar => "sidebar",
        }
    }

    pub fn parse(key: &str) -> Result<Self, SettingError> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == key)
            .ok_or_else(|| SettingError::UnknownKey(key.to_string()))
    }
}

#[derive(Debug, PartialEq)]
pub enum SettingError {
    UnknownKey(String),
    InvalidValue { key: ConfigKey, reason: String },
}

impl fmt::Display for SettingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingError::UnknownKey(key) => {
                let known: Vec<&str> = ConfigKey::ALL.iter().map(|k| k.as_str()).collect();
                write!(
                    f,
                    "Unknown config key: {key} (expected one of: {})",
                    known.join(", ")
                )
            }
            SettingError::InvalidValue { key, reason } => {
                write!(f, "Invalid value for {}: {reason}", key.as_str())
            }
        }
    }
}

impl std::error::Error for SettingError {}

impl Config {
    pub fn model_or_default(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn base_url_or_default(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn temperature_or_default(&self) -> f32 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    pub fn set_value(&mut self, key: ConfigKey, value: &str) -> Result<(), SettingError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(SettingError::InvalidValue {
                key,
                reason: "value must not be empty".to_string(),
            });
        }

        match key {
            ConfigKey::Model => self.model = Some(value.to_string()),
            ConfigKey::BaseUrl => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(SettingError::InvalidValue {
                        key,
                        reason: "expected an http:// or https:// URL".to_string(),
                    });
                }
                self.base_url = Some(value.to_string());
            }
            ConfigKey::Temperature => {
                let parsed: f32 = value.parse().map_err(|_| SettingError::InvalidValue {
                    key,
                    reason: format!("'{value}' is not a number"),
                })?;
                if !(0.0..=2.0).contains(&parsed) {
                    return Err(SettingError::InvalidValue {
                        key,
                        reason: "must be between 0.0 and 2.0".to_string(),
                    });
                }
                self.temperature = Some(parsed);
            }
            ConfigKey::Sidebar => {
                let enabled = match value.to_ascii_lowercase().as_str() {
                    "on" | "true" | "yes" => true,
                    "off" | "false" | "no" => false,
                    other => {
                        return Err(SettingError::InvalidValue {
                            key,
                            reason: format!("'{other}' is not on/off"),
                        })
                    }
                };
                self.sidebar = Some(enabled);
            }
        }
        Ok(())
    }

    pub fn unset_value(&mut self, key: ConfigKey) {
        match key {
            ConfigKey::Model => self.model = None,
            ConfigKey::BaseUrl => self.base_url = None,
            ConfigKey::Temperature => self.temperature = None,
            ConfigKey::Sidebar => self.sidebar = None,
        }
    }
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
///
/// # Examples
/// - Unix: `/home/user/.config/carenav/config.toml` → `~/.config/carenav/config.toml`
/// - Windows: paths are returned unchanged
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
