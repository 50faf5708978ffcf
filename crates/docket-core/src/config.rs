//! Docket configuration (`docket.toml`) parsing and validation.
//!
//! ```toml
//! href-prefix = "../"
//! default-externs = true
//!
//! [externs]
//! Element = "https://developer.mozilla.org/en-US/docs/Web/API/Element"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid extern link '{0}': {1}")]
    InvalidExtern(String, &'static str),
}

/// Link resolution settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct DocketConfig {
    /// Prefix prepended to every generated page link.
    pub href_prefix: String,

    /// Whether to preload the built-in JavaScript extern links.
    pub default_externs: bool,

    /// Additional extern links, by type name.
    pub externs: BTreeMap<String, String>,
}

impl Default for DocketConfig {
    fn default() -> Self {
        Self {
            href_prefix: String::new(),
            default_externs: true,
            externs: BTreeMap::new(),
        }
    }
}

impl DocketConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, href) in &self.externs {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidExtern(name.clone(), "name is empty"));
            }
            if href.trim().is_empty() {
                return Err(ConfigError::InvalidExtern(name.clone(), "href is empty"));
            }
        }
        Ok(())
    }
}
