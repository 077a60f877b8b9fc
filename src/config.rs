//! Configuration management and validation
//!
//! Layered configuration for the Gemini collaborator: built-in
//! defaults, then an optional TOML file in the user configuration
//! directory, then environment variables, then CLI overrides applied
//! by the command layer. Text parsing needs no configuration at all;
//! only the network operations require an API key.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    API_KEY_ENV_VAR, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_GEMINI_MODEL,
    DEFAULT_REQUEST_TIMEOUT_SECS, GEMINI_API_BASE, MODEL_ENV_VAR,
};
use crate::{Error, Result};

/// Gemini API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// API key; empty until provided by file, environment or CLI
    pub api_key: String,

    /// Model used for extraction and summaries
    pub model: String,

    /// Base URL of the generateContent endpoint family
    pub api_base: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_base: GEMINI_API_BASE.to_string(),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gemini collaborator settings
    pub gemini: GeminiConfig,
}

impl Config {
    /// Default location of the user configuration file
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration with the layered approach (defaults, then
    /// file, then environment)
    ///
    /// `config_file` overrides the default lookup location. A missing
    /// default file is fine; an explicitly named file must exist.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading config file: {}", path.display());
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => {
                    debug!("Loading default config file: {}", path.display());
                    Self::from_file(&path)?
                }
                _ => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML configuration file
    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config file {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Invalid config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Apply environment variable overrides
    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV_VAR) {
            if !key.trim().is_empty() {
                self.gemini.api_key = key;
            }
        }
        if let Ok(model) = std::env::var(MODEL_ENV_VAR) {
            if !model.trim().is_empty() {
                self.gemini.model = model;
            }
        }
    }

    /// Validate settings that every command depends on
    ///
    /// The API key is deliberately not checked here; commands that
    /// never reach the network must work without one.
    pub fn validate(&self) -> Result<()> {
        if self.gemini.model.trim().is_empty() {
            return Err(Error::configuration("Gemini model name cannot be empty"));
        }
        if self.gemini.api_base.trim().is_empty() {
            return Err(Error::configuration("Gemini API base URL cannot be empty"));
        }
        if self.gemini.timeout_secs == 0 {
            return Err(Error::configuration(
                "Request timeout must be at least 1 second",
            ));
        }
        Ok(())
    }
}
