//! Default paths and persistent configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::engine::{EngineConfig, DEFAULT_MAX_INPUT_LEN};

/// Get the configuration directory for confusable-distance
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("confusable-distance"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            Ok(path.to_path_buf())
        }
        None => default_config_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// Input length policy stored in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthLimit {
    /// Accept inputs of any length
    Unlimited,
    /// Reject inputs longer than this many characters
    Max(usize),
}

impl LengthLimit {
    /// Convert to the engine's representation
    pub fn as_option(self) -> Option<usize> {
        match self {
            Self::Unlimited => None,
            Self::Max(n) => Some(n),
        }
    }
}

impl From<Option<usize>> for LengthLimit {
    fn from(limit: Option<usize>) -> Self {
        limit.map_or(Self::Unlimited, Self::Max)
    }
}

impl std::fmt::Display for LengthLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unlimited => write!(f, "unlimited"),
            Self::Max(n) => write!(f, "{n} characters"),
        }
    }
}

/// User configuration stored in config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistentConfig {
    /// Default input length limit
    pub max_input_len: Option<LengthLimit>,
    /// Default to JSON output
    pub json_output: Option<bool>,
}

impl PersistentConfig {
    /// Load configuration from the default or a custom path
    ///
    /// A missing file yields the defaults.
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the default or a custom path
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<PathBuf> {
        let path = config_file_path_with_override(custom_path)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(path)
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(&self, max_input_len: Option<Option<usize>>, json_output: bool) -> Self {
        Self {
            max_input_len: max_input_len.map(LengthLimit::from).or(self.max_input_len),
            json_output: if json_output { Some(true) } else { self.json_output },
        }
    }

    /// Engine configuration described by this config
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            max_input_len: self
                .max_input_len
                .unwrap_or(LengthLimit::Max(DEFAULT_MAX_INPUT_LEN))
                .as_option(),
        }
    }
}

impl Default for PersistentConfig {
    fn default() -> Self {
        Self {
            max_input_len: Some(LengthLimit::Max(DEFAULT_MAX_INPUT_LEN)),
            json_output: Some(false),
        }
    }
}
