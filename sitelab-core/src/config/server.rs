//! Server configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server listening port
    /// Env: SITELAB_PORT
    /// Default: 5000
    pub port: u16,

    /// Server listening address
    /// Env: SITELAB_HOST
    /// Default: "127.0.0.1"
    pub host: String,

    /// Number of Tokio worker threads
    /// Env: SITELAB_WORKERS
    /// Default: Tokio's choice (one per core)
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 5000, host: "127.0.0.1".to_string(), workers: None }
    }
}

impl ServerConfig {
    /// `host:port` string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Apply environment variables
    pub fn apply_env_vars(&mut self) {
        if let Ok(port) = env::var("SITELAB_PORT") {
            if let Ok(p) = port.parse() {
                self.port = p;
            }
        }

        if let Ok(host) = env::var("SITELAB_HOST") {
            self.host = host;
        }

        if let Ok(workers) = env::var("SITELAB_WORKERS") {
            if let Ok(w) = workers.parse() {
                self.workers = Some(w);
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            bail!("Invalid port: port must be between 1 and 65535");
        }

        if self.host.is_empty() {
            bail!("Invalid host: host cannot be empty");
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                bail!("Invalid workers: must be at least 1");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr() {
        let cfg = ServerConfig { port: 8081, ..Default::default() };
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8081");
    }

    #[test]
    fn test_invalid_values_fail() {
        let cfg = ServerConfig { port: 0, ..Default::default() };
        assert!(cfg.validate().unwrap_err().to_string().contains("Invalid port"));

        let cfg = ServerConfig { host: String::new(), ..Default::default() };
        assert!(cfg.validate().unwrap_err().to_string().contains("Invalid host"));

        let cfg = ServerConfig { workers: Some(0), ..Default::default() };
        assert!(cfg.validate().unwrap_err().to_string().contains("Invalid workers"));
    }

    #[test]
    fn test_apply_env_vars() {
        let mut cfg = ServerConfig::default();
        std::env::set_var("SITELAB_PORT", "7070");
        std::env::set_var("SITELAB_WORKERS", "not-a-number");
        cfg.apply_env_vars();
        assert_eq!(cfg.port, 7070);
        assert_eq!(cfg.workers, None);
        std::env::remove_var("SITELAB_PORT");
        std::env::remove_var("SITELAB_WORKERS");
    }
}
