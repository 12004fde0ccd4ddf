use crate::{Result, SyncError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".ttir-sync.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SyncConfig {
    /// Lines shown on each side of a highlighted line
    #[serde(default)]
    pub context_lines: Option<usize>,
    /// Open the source split when an interactive session starts
    #[serde(default)]
    pub open_source: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Default output format ("text" or "json")
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub color: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DebugConfig {
    /// Default verbosity level (0-2)
    #[serde(default)]
    pub verbosity: Option<u8>,
}

impl Config {
    /// Load configuration from the working directory
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from `config_path`; a missing file yields defaults
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            SyncError::FileError(format!(
                "Failed to read config file {:?}: {}",
                config_path, e
            ))
        })?;

        Self::parse(&content).map_err(|e| {
            SyncError::ConfigError(format!("{:?}: {}", config_path, e)).into()
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load config, falling back to defaults on any failure.
    ///
    /// The load error is handed back so the caller can report it once
    /// logging is up.
    pub fn load_or_default(path: Option<&Path>) -> (Self, Option<miette::Report>) {
        let loaded = match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        };
        match loaded {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    }
}
