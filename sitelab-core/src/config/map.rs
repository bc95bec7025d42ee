//! Map-tile token configuration
//!
//! Only the *name* of the environment variable lives here. The token itself is
//! read from that variable on every `/api/mapbox-token` request.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Environment variable holding the map-tile access token
    /// Env: SITELAB_MAP_TOKEN_ENV
    /// Default: "MAPBOX_ACCESS_TOKEN"
    pub token_env: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { token_env: "MAPBOX_ACCESS_TOKEN".to_string() }
    }
}

impl MapConfig {
    pub fn apply_env_vars(&mut self) {
        if let Ok(name) = env::var("SITELAB_MAP_TOKEN_ENV") {
            self.token_env = name;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.token_env.trim().is_empty() {
            bail!("Invalid map.token_env: variable name cannot be empty");
        }
        Ok(())
    }

    /// Current token value; `None` when the variable is unset
    pub fn read_token(&self) -> Option<String> {
        env::var(&self.token_env).ok()
    }
}
