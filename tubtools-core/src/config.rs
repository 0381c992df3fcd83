use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Environment variable holding the OpenWeather API key. Takes precedence
/// over the config file.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Optional override for the OpenWeather endpoint.
pub const API_URL_ENV: &str = "OPENWEATHER_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// api_key = "..."
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
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
        let dirs = ProjectDirs::from("dev", "tubtools", "tubtools")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolve the API key, preferring the environment over the config file.
    /// Missing from both is a fatal condition for the weather loop.
    pub fn resolve_api_key(&self) -> Result<String> {
        resolve_api_key(env::var(API_KEY_ENV).ok(), self.api_key.clone())
    }
}

/// Pure resolution logic: environment wins; blank values count as absent.
pub fn resolve_api_key(from_env: Option<String>, from_file: Option<String>) -> Result<String> {
    from_env
        .filter(|key| !key.trim().is_empty())
        .or_else(|| from_file.filter(|key| !key.trim().is_empty()))
        .ok_or_else(|| {
            anyhow!(
                "No OpenWeather API key found.\n\
                 Hint: set the {API_KEY_ENV} environment variable, or run `tubtools configure` to store one."
            )
        })
}

/// Endpoint for current-weather requests, honoring the env override.
pub fn api_base_url() -> String {
    env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
