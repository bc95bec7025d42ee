//! Logging configuration

use crate::logging::{LogFormat, LogLevel};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// error | warn | info | debug | trace
    /// Env: SITELAB_LOG_LEVEL
    pub level: String,
    /// human | json
    /// Env: SITELAB_LOG_FORMAT
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "human".to_string() }
    }
}

impl LoggingConfig {
    pub fn apply_env_vars(&mut self) {
        if let Ok(level) = env::var("SITELAB_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(format) = env::var("SITELAB_LOG_FORMAT") {
            self.format = format;
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.log_level()?;
        self.log_format()?;
        Ok(())
    }

    pub fn log_level(&self) -> Result<LogLevel> {
        self.level.parse().with_context(|| format!("Invalid logging.level: {}", self.level))
    }

    pub fn log_format(&self) -> Result<LogFormat> {
        self.format.parse().with_context(|| format!("Invalid logging.format: {}", self.format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_values() {
        let cfg = LoggingConfig { level: "DEBUG".to_string(), format: "json".to_string() };
        assert_eq!(cfg.log_level().unwrap(), LogLevel::Debug);
        assert_eq!(cfg.log_format().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_unknown_values_fail_validation() {
        let cfg = LoggingConfig { level: "loud".to_string(), ..Default::default() };
        assert!(cfg.validate().unwrap_err().to_string().contains("logging.level"));

        let cfg = LoggingConfig { format: "xml".to_string(), ..Default::default() };
        assert!(cfg.validate().unwrap_err().to_string().contains("logging.format"));
    }
}
