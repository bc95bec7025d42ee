//! Builder pattern for SitelabServer

use std::sync::Arc;

use anyhow::{Context, Result};

use super::SitelabServer;
use crate::api::ApiState;
use crate::config::SitelabConfig;
use crate::store::{SiteRepository, SiteStore};

/// Builder for SitelabServer
pub struct SitelabServerBuilder {
    config: SitelabConfig,
    store: Option<Arc<dyn SiteRepository>>,
}

impl SitelabServerBuilder {
    /// Create a new builder from `sitelab.toml` and the environment.
    ///
    /// A malformed `sitelab.toml` is replaced by defaults. The warning goes
    /// through `log`, so it is dropped when no logger is installed yet; use
    /// [`try_new`](Self::try_new) to get the error instead.
    pub fn new() -> Self {
        Self::try_new().unwrap_or_else(|e| {
            log::warn!("Using default configuration: {:#}", e);
            Self::with_config(SitelabConfig::default())
        })
    }

    /// Like [`new`](Self::new), but a config file that cannot be read or
    /// parsed is an error
    pub fn try_new() -> Result<Self> {
        Ok(Self::with_config(SitelabConfig::load()?))
    }

    /// Create a builder with custom configuration
    pub fn with_config(config: SitelabConfig) -> Self {
        Self { config, store: None }
    }

    // ========================================================================
    // SERVER CONFIGURATION
    // ========================================================================

    /// Set server port (overrides config file and env vars)
    pub fn with_port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    /// Set server host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.config.server.host = host.into();
        self
    }

    /// Set number of worker threads (read by the binary when it builds its runtime)
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.config.server.workers = Some(workers);
        self
    }

    /// Environment variable the map token endpoint reads
    pub fn with_map_token_env(mut self, name: impl Into<String>) -> Self {
        self.config.map.token_env = name.into();
        self
    }

    // ========================================================================
    // DATA
    // ========================================================================

    /// Serve from `store` instead of a freshly seeded [`SiteStore`]
    pub fn with_store<R>(self, store: R) -> Self
    where
        R: SiteRepository + 'static,
    {
        self.with_repository(Arc::new(store))
    }

    /// Serve from a repository that is shared with other owners
    pub fn with_repository(mut self, store: Arc<dyn SiteRepository>) -> Self {
        self.store = Some(store);
        self
    }

    /// Validate the configuration and assemble the server
    pub fn build(self) -> Result<SitelabServer> {
        self.config.validate().context("Invalid server configuration")?;

        let store = self.store.unwrap_or_else(|| Arc::new(SiteStore::new()));
        let state = ApiState::new(store, self.config.map.clone());

        Ok(SitelabServer::from_parts(self.config, state))
    }

    /// Build and serve until Ctrl-C
    pub async fn serve(self) -> Result<()> {
        let server = self.build()?;
        server.serve().await
    }
}

impl Default for SitelabServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
