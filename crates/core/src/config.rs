//! Run configuration
//!
//! A [`Config`] starts from defaults, can be read from a TOML file, and is
//! then refined by the caller (the CLI applies its flags last).
//!
//! # Example
//!
//! ```toml
//! prompt = "How many? "
//! width = "u64"
//! ```

use crate::checked::Width;
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Prompt shown when no other is configured
pub const DEFAULT_PROMPT: &str = "Enter rounds: ";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Text written before each count read, without a newline
    pub prompt: String,

    /// Integer width terms are computed in
    pub width: Width,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            width: Width::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse config from a TOML string; missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }
}
