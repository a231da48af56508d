//! `AppConfig` struct and TOML loading.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// OMDb settings.
    #[serde(default)]
    pub omdb: OmdbConfig,
    /// Open Library settings.
    #[serde(default)]
    pub books: BooksConfig,
    /// Open-Meteo settings.
    #[serde(default)]
    pub weather: WeatherConfig,
}

/// OMDb configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OmdbConfig {
    /// API key. `OMDB_API_KEY` takes precedence.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Book search configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BooksConfig {
    /// Default result limit when `--limit` is omitted.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Weather configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WeatherConfig {
    /// Language for geocoded place names (`ru`, `en`).
    #[serde(default)]
    pub language: Option<String>,
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Picks the OMDb API key: a non-blank `env_value` wins over the file.
    #[must_use]
    pub fn omdb_api_key(&self, env_value: Option<String>) -> Option<String> {
        env_value
            .into_iter()
            .chain(self.omdb.api_key.clone())
            .map(|key| String::from(key.trim()))
            .find(|key| !key.is_empty())
    }
}
