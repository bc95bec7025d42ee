//! Sitelab Server - the dashboard API over hyper
//!
//! [`SitelabServer`] owns the route table and the shared handler state. It
//! accepts connections on a tokio listener and serves each one with hyper's
//! HTTP/1 connection driver.
//!
//! # Example
//!
//! ```no_run
//! use sitelab_core::app::SitelabServer;
//! use sitelab_core::store::SiteStore;
//!
//! # async fn example() -> anyhow::Result<()> {
//! SitelabServer::new()
//!     .with_port(5000)
//!     .with_store(SiteStore::new())
//!     .serve()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use http::{Method, Request, Uri};
use tokio::net::TcpListener;

use crate::api::{self, ApiState};
use crate::config::SitelabConfig;
use crate::http::{Resp, Router};

pub mod builder;

pub use builder::SitelabServerBuilder;

/// The dashboard API server
pub struct SitelabServer {
    config: SitelabConfig,
    state: ApiState,
    router: Router<ApiState>,
}

impl SitelabServer {
    /// Create a new server builder
    ///
    /// Configuration is loaded with full supersedence:
    /// 1. Defaults
    /// 2. Config file (sitelab.toml)
    /// 3. Environment variables
    /// 4. Code (builder methods)
    pub fn new() -> SitelabServerBuilder {
        SitelabServerBuilder::new()
    }

    /// Create a new server builder with custom configuration
    pub fn with_config(config: SitelabConfig) -> SitelabServerBuilder {
        SitelabServerBuilder::with_config(config)
    }

    pub(crate) fn from_parts(config: SitelabConfig, state: ApiState) -> Self {
        Self { config, state, router: api::routes() }
    }

    pub fn config(&self) -> &SitelabConfig {
        &self.config
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| crate::Error::Http(format!("Failed to bind to {}: {}", addr, e)))?;

        self.serve_on(listener, shutdown_signal()).await
    }

    /// Serve connections from `listener` until `shutdown` completes.
    ///
    /// Connections already accepted keep running on their own tasks.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send,
    {
        let local_addr = listener
            .local_addr()
            .map_err(crate::Error::Io)
            .context("Failed to read listener address")?;

        log::info!("Starting Sitelab Server");
        log::info!("   Sites: {}", self.state.store().site_count());
        log::info!("   Scenarios: {}", self.state.store().scenario_count());
        log::info!("   Routes: {}", self.router.route_count());
        log::info!("Server listening on http://{}", local_addr);

        let server = Arc::new(self);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    log::info!("Shutdown requested, no longer accepting connections");
                    break;
                }
                accepted = listener.accept() => {
                    let (stream, remote_addr) = match accepted {
                        Ok(conn) => conn,
                        Err(err) => {
                            log::warn!("Failed to accept connection: {}", err);
                            continue;
                        }
                    };
                    server.clone().spawn_connection(stream, remote_addr);
                }
            }
        }

        Ok(())
    }

    fn spawn_connection(self: Arc<Self>, stream: tokio::net::TcpStream, remote_addr: SocketAddr) {
        tokio::spawn(async move {
            let io = hyper_util::rt::TokioIo::new(stream);

            let service = hyper::service::service_fn(move |req| {
                let server = self.clone();
                async move { Ok::<_, Infallible>(server.handle_request(req)) }
            });

            if let Err(err) = hyper::server::conn::http1::Builder::new()
                .serve_connection(io, service)
                .await
            {
                log::error!("Connection error from {}: {}", remote_addr, err);
            }
        });
    }

    /// Route one request and write an access log line. Request bodies are
    /// never read.
    pub fn handle_request<B>(&self, req: Request<B>) -> Resp {
        let started = Instant::now();
        let resp = self.dispatch(req.method(), req.uri());

        log::info!(
            "{} {} {} {:.2}ms",
            req.method(),
            req.uri().path(),
            resp.status().as_u16(),
            started.elapsed().as_secs_f64() * 1000.0
        );
        resp
    }

    /// Route a method and URI without going through a socket
    pub fn dispatch(&self, method: &Method, uri: &Uri) -> Resp {
        self.router.dispatch(&self.state, method, uri)
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {}", err);
        // Without a signal handler, run until the process is killed.
        std::future::pending::<()>().await;
    }
}
