//! Line Picker
//!
//! Serves `GET /pick-random-line?url=<document>&line=<n|query>` with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request            ┌──────────────────────────────────────────────┐
//!     ──────────────────────────┼─▶ http::server ─▶ http::params               │
//!                               │                        │                     │
//!                               │                        ▼                     │
//!                               │                 http::handler ──▶ fetch ─────┼──▶ Remote
//!                               │                        │                     │    Document
//!                               │                        ▼                     │
//!     Client Response           │                     select                   │
//!     ◀─────────────────────────┼── http::response ◀─────┘                     │
//!                               │                                              │
//!                               │  config · observability · lifecycle          │
//!                               └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use line_picker::config::{load_config, validate_config, AppConfig, ConfigError};
use line_picker::http::{HttpServer, PICK_ENDPOINT};
use line_picker::lifecycle::Shutdown;
use line_picker::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "line-picker", version)]
#[command(about = "Serve a single line picked from a remote text document")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init_logging(&config.observability)?;

    tracing::info!("line-picker v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        fetch_timeout_secs = config.fetch.timeout_secs,
        max_document_bytes = config.fetch.max_document_bytes,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // validated above
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        endpoint = PICK_ENDPOINT,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
