//! Sitelab - Core
//!
//! In-memory data-access layer and REST facade behind the Sitelab housing
//! dashboard.
//!
//! # Overview
//!
//! The dashboard explores simulated NYC housing-development scenarios. All of
//! its data is fixture data: a handful of sites and the scenarios proposed for
//! them, seeded once when the store is constructed. This crate owns that store
//! and serves it read-only over HTTP.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sitelab_core::app::SitelabServer;
//! use sitelab_core::store::SiteStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     SitelabServer::new()
//!         .with_port(5000)
//!         .with_store(SiteStore::new())
//!         .serve()
//!         .await
//! }
//! ```
//!
//! # Architecture
//!
//! - [`model`] - `Site`, `Scenario` and `User` records
//! - [`store`] - Seeded in-memory store and the [`store::SiteRepository`] query facade
//! - [`http`] - Route table, path/query parsing and JSON responses
//! - [`api`] - The `/api/*` endpoint handlers
//! - [`app`] - Server builder and hyper accept loop
//! - [`config`] - TOML + environment configuration
//! - [`logging`] - `log` backend with human and JSON output
//! - [`security`] - Argon2 password hashing for user records

pub mod api;
pub mod app;
pub mod config; // Configuration system with TOML support
pub mod http;
pub mod logging; // Process-wide logger for the standard log crate
pub mod model;
pub mod security;
pub mod store;

// Re-exports of main types and traits
pub use app::SitelabServer;
pub use config::SitelabConfig;
pub use model::{NewScenario, NewSite, NewUser, RecordId, Scenario, Site, User};
pub use store::{SiteRepository, SiteStore};

// Main result type for the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Sitelab
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error("Configuration Error: {0}")]
    Config(String),
    /// Socket and file I/O errors
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
    /// HTTP serving errors (bind, connection setup)
    #[error("HTTP Error: {0}")]
    Http(String),
    /// Password hashing or verification failure
    #[error(transparent)]
    Password(#[from] security::PasswordError),
}
