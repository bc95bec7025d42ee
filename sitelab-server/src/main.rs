//! Sitelab server binary.
//!
//! ```bash
//! sitelab-server --port 5000
//! sitelab-server --config deploy/sitelab.toml --log-format json
//! ```
//!
//! See `sitelab-server --help` for all options.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sitelab_core::config::SitelabConfig;
use sitelab_core::logging::init_logging;
use sitelab_core::SitelabServer;

#[derive(Parser)]
#[command(
    name = "sitelab-server",
    about = "REST backend for the Sitelab housing dashboard",
    version
)]
struct Cli {
    /// Config file (default: ./sitelab.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Listening address
    #[arg(long)]
    host: Option<String>,

    /// Listening port
    #[arg(long)]
    port: Option<u16>,

    /// error, warn, info, debug or trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// human or json
    #[arg(long, value_name = "FORMAT")]
    log_format: Option<String>,

    /// Print the resolved configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<SitelabConfig> {
        let mut config = match &self.config {
            Some(path) => SitelabConfig::load_from(path)?,
            None => SitelabConfig::load()?,
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    init_logging(&config.logging)?;

    let mut runtime = tokio::runtime::Builder::new_multi_thread();
    if let Some(workers) = config.server.workers {
        runtime.worker_threads(workers);
    }
    let runtime = runtime.enable_all().build().context("Failed to start tokio runtime")?;

    runtime.block_on(SitelabServer::with_config(config).serve())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
