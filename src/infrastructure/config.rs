//! Configuration management

use crate::domain::IndexBase;
use crate::error::{ChunkError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "CHUNKTAG_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Position of the first word in a sentence
    pub index_base: IndexBase,
    /// Validate span bounds when inspecting annotations
    pub strict_bounds: bool,
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ChunkError::Config(format!("Config file not found: {}", path.display()))
            } else {
                ChunkError::Io(e)
            }
        })?;

        Self::from_toml(&contents)
    }

    /// Parse config from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| ChunkError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Resolve the effective config: an explicit path wins, then
    /// `CHUNKTAG_CONFIG`, then built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match Self::config_path(explicit) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load_from_file(&path)
            }
            None => {
                tracing::debug!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit.map(Path::to_path_buf).or_else(|| {
            std::env::var_os(CONFIG_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
    }

    /// Get a single config value by key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "index_base" => Ok(format!("{:?}", self.index_base).to_lowercase()),
            "strict_bounds" => Ok(self.strict_bounds.to_string()),
            _ => Err(ChunkError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: index_base, strict_bounds",
                key
            ))),
        }
    }

    /// Serialize to TOML text
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ChunkError::Config(format!("Failed to serialize config: {}", e)))
    }
}
