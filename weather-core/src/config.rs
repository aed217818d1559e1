use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, path::PathBuf};

pub const DEFAULT_LANG: &str = "ru_RU";

/// A saved pair of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub lat: f64,
    pub lon: f64,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// lang = "en_US"
///
/// [places.moscow]
/// lat = 55.75
/// lon = 37.62
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,

    /// Locale tag sent as `lang`; [`DEFAULT_LANG`] when unset.
    pub lang: Option<String>,

    /// Overrides the informers host.
    pub base_url: Option<String>,

    #[serde(default)]
    pub places: BTreeMap<String, Place>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid configuration TOML")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "yaweather", "yaweather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn lang(&self) -> &str {
        self.lang.as_deref().unwrap_or(DEFAULT_LANG)
    }

    /// Returns `true` if an existing place was replaced.
    pub fn upsert_place(&mut self, name: &str, place: Place) -> bool {
        self.places.insert(name.to_lowercase(), place).is_some()
    }

    pub fn remove_place(&mut self, name: &str) -> Option<Place> {
        self.places.remove(&name.to_lowercase())
    }

    /// Look a place up by name, case-insensitively.
    pub fn place(&self, name: &str) -> Result<Place> {
        self.places.get(&name.to_lowercase()).copied().ok_or_else(|| {
            anyhow!(
                "Unknown place '{name}'.\n\
                 Hint: run `yaweather place add {name} <lat> <lon>` first."
            )
        })
    }
}
