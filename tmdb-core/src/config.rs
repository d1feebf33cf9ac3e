use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

use crate::error::TmdbError;

/// Environment variable consulted before the config file.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Example TOML:
    /// api_key = "..."
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "tmdb-cli", "tmdb")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Resolve the credential: environment first, then the config file.
    ///
    /// Called once at startup; the client holds the key for the rest of the
    /// run. Fails fast when neither source has a non-empty value, instead of
    /// letting the remote reject an unauthenticated request.
    pub fn resolve_api_key(&self) -> crate::error::Result<String> {
        let env_value = env::var(API_KEY_ENV).ok();
        resolve_from(env_value.as_deref(), self.api_key.as_deref())
    }
}

fn resolve_from(
    env_value: Option<&str>,
    file_value: Option<&str>,
) -> crate::error::Result<String> {
    [env_value, file_value]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .map(str::to_owned)
        .ok_or(TmdbError::MissingApiKey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_errors_when_no_source_has_a_key() {
        let err = resolve_from(None, None).unwrap_err();
        assert!(matches!(err, TmdbError::MissingApiKey));
    }

    #[test]
    fn resolve_skips_blank_values() {
        let err = resolve_from(Some("   "), Some("")).unwrap_err();
        assert!(matches!(err, TmdbError::MissingApiKey));
    }

    #[test]
    fn env_value_wins_over_config_file() {
        let key = resolve_from(Some("ENV_KEY"), Some("FILE_KEY")).expect("key must resolve");
        assert_eq!(key, "ENV_KEY");
    }

    #[test]
    fn config_file_used_when_env_is_absent() {
        let key = resolve_from(None, Some("FILE_KEY")).expect("key must resolve");
        assert_eq!(key, "FILE_KEY");
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_api_key("SECRET".to_string());

        let serialized = toml::to_string_pretty(&cfg).expect("config must serialize");
        let parsed: Config = toml::from_str(&serialized).expect("config must parse");

        assert_eq!(parsed.api_key.as_deref(), Some("SECRET"));
    }
}
