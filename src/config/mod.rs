//! Configuration module for blbrowse
//!
//! Manages application configuration: the server-list base URL, whether a
//! built URL is handed to the system browser, the quiet default, and an
//! optional custom filter catalog. Configuration is stored in the user's
//! config directory.

use std::fs;
use std::path::PathBuf;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Server-list endpoint the original service exposes
pub const DEFAULT_BASE_URL: &str = "http://battlelog.battlefield.com/bf3/servers/";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_open_browser() -> bool {
    true
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL the query parameters are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Open built URLs in the system browser
    #[serde(default = "default_open_browser")]
    pub open_browser: bool,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Path to a custom filter catalog (TOML); built-in dictionary when unset
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            open_browser: true,
            quiet: false,
            catalog: None,
        }
    }
}

impl AppConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("blbrowse").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config dir: {e}")))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, content)
            .map_err(|e| ConfigError::Message(format!("Failed to write config: {e}")))?;

        Ok(())
    }

    /// Read one configuration value as a display string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "base-url" => Ok(self.base_url.clone()),
            "open-browser" => Ok(self.open_browser.to_string()),
            "quiet" => Ok(self.quiet.to_string()),
            "catalog" => Ok(self
                .catalog
                .as_ref()
                .map_or_else(|| "(built-in)".to_string(), |p| p.display().to_string())),
            _ => Err(ConfigError::Message(format!(
                "Unknown configuration key: '{key}'. Available keys: base-url, open-browser, quiet, catalog"
            ))),
        }
    }

    /// Set one configuration value from its string form
    ///
    /// Does not save; callers persist explicitly.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or an unparsable value.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "base-url" => {
                self.base_url = value.to_string();
            }
            "open-browser" => {
                self.open_browser = parse_bool(key, value)?;
            }
            "quiet" => {
                self.quiet = parse_bool(key, value)?;
            }
            "catalog" => {
                self.catalog = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            _ => {
                return Err(ConfigError::Message(format!(
                    "Unknown configuration key: '{key}'. Available keys: base-url, open-browser, quiet, catalog"
                )));
            }
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    value.parse::<bool>().map_err(|_| {
        ConfigError::Message(format!(
            "Invalid value for {key}: '{value}'. Use 'true' or 'false'"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.open_browser);
        assert!(!config.quiet);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.quiet = true;
        config.catalog = Some(PathBuf::from("/tmp/catalog.toml"));

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.base_url, config.base_url);
        assert_eq!(parsed.open_browser, config.open_browser);
        assert_eq!(parsed.quiet, config.quiet);
        assert_eq!(parsed.catalog, config.catalog);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed: AppConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.base_url, DEFAULT_BASE_URL);
        assert!(parsed.open_browser);
    }

    #[test]
    fn test_set_and_get_values() {
        let mut config = AppConfig::default();

        config.set_value("open-browser", "false").unwrap();
        assert_eq!(config.get_value("open-browser").unwrap(), "false");

        config.set_value("base-url", "http://example.com/servers/").unwrap();
        assert_eq!(
            config.get_value("base-url").unwrap(),
            "http://example.com/servers/"
        );

        assert_eq!(config.get_value("catalog").unwrap(), "(built-in)");

        assert!(config.set_value("quiet", "maybe").is_err());
        assert!(config.set_value("unknown", "x").is_err());
        assert!(config.get_value("unknown").is_err());
    }
}
