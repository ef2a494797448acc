//! Application configuration
//!
//! Lives at `~/.wordhint/config.toml`. A missing file means defaults;
//! the `init` command writes one out for editing.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Provider id used when the config names none
pub const DEFAULT_PROVIDER: &str = "free-dictionary";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default definition provider id
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Subscription key for the words-api provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words_api_key: Option<String>,

    /// Directory for per-provider cache files; defaults to
    /// `~/.wordhint/cache`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,
}

fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            words_api_key: None,
            cache_dir: None,
        }
    }
}

impl Config {
    /// Get the global config directory path (~/.wordhint/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".wordhint")
    }

    /// Get the global config file path (~/.wordhint/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Directory holding the per-provider cache files
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir
            .clone()
            .unwrap_or_else(|| Self::global_config_dir().join("cache"))
    }

    /// Backing cache file for a provider id
    pub fn cache_path(&self, provider_id: &str) -> PathBuf {
        self.cache_dir().join(format!("{provider_id}.cache.ndjson"))
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the global configuration, falling back to defaults when no
    /// config file exists yet
    pub fn load() -> Result<Self> {
        let global_path = Self::global_config_path();
        if !global_path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(&global_path)
    }

    /// Save configuration to a file with an atomic write
    /// (temp file + rename) so a crash cannot leave a corrupt config.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        let temp_path = path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write config content")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync config file")?;

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.provider, DEFAULT_PROVIDER);
        assert!(config.words_api_key.is_none());
        assert!(config.cache_dir.is_none());
    }

    #[test]
    fn test_cache_path_uses_provider_id() {
        let config = Config {
            cache_dir: Some(PathBuf::from("/tmp/wordhint-test")),
            ..Default::default()
        };
        assert_eq!(
            config.cache_path("free-dictionary"),
            PathBuf::from("/tmp/wordhint-test/free-dictionary.cache.ndjson")
        );
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str("words_api_key = \"secret\"").unwrap();
        assert_eq!(config.provider, DEFAULT_PROVIDER);
        assert_eq!(config.words_api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            provider: "words-api".to_string(),
            words_api_key: Some("secret".to_string()),
            cache_dir: None,
        };
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.provider, "words-api");
        assert_eq!(loaded.words_api_key.as_deref(), Some("secret"));
    }
}
