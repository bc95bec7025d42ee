//! Configuration system for Sitelab
//!
//! # Configuration Hierarchy
//!
//! Values are resolved in the following order (highest priority wins):
//!
//! 1. **Code / CLI** (builder methods) - Highest priority
//! 2. **Environment Variables** (`SITELAB_*`) - Override file config
//! 3. **Config File** (`sitelab.toml`) - Override defaults
//! 4. **Defaults** - Lowest priority
//!
//! # Example
//!
//! ```no_run
//! use sitelab_core::config::SitelabConfig;
//!
//! // Defaults + ./sitelab.toml (if present) + environment
//! let config = SitelabConfig::load()?;
//!
//! // An explicitly named file must exist
//! let config = SitelabConfig::load_from("deploy/sitelab.toml")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod logging;
pub mod map;
pub mod server;

pub use logging::LoggingConfig;
pub use map::MapConfig;
pub use server::ServerConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the working directory by [`SitelabConfig::load`]
pub const DEFAULT_CONFIG_FILE: &str = "sitelab.toml";

/// Complete Sitelab configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitelabConfig {
    pub server: ServerConfig,
    pub map: MapConfig,
    pub logging: LoggingConfig,
}

impl SitelabConfig {
    /// Load defaults, then `sitelab.toml` if it exists, then environment
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env_vars();
        Ok(config)
    }

    /// Load a specific file (which must exist), then environment
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
        config.apply_env_vars();
        Ok(config)
    }

    /// Parse a TOML file; missing keys take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(crate::Error::Io)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }

    /// Parse TOML text; syntax and type errors surface as [`crate::Error::Config`]
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()).into())
    }

    /// Render as TOML (used by `--print-config`)
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Apply environment variables to configuration
    pub fn apply_env_vars(&mut self) {
        self.server.apply_env_vars();
        self.map.apply_env_vars();
        self.logging.apply_env_vars();
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.map.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
