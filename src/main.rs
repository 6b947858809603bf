//! Greeting service.
//!
//! A small HTTP service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                 GREETER                      │
//!                      │                                              │
//!     GET /path        │  ┌─────────┐    ┌──────────┐   ┌──────────┐  │
//!     ─────────────────┼─▶│  http   │───▶│ routing  │──▶│ handler  │  │
//!                      │  │ server  │    │  table   │   │ greeting │  │
//!                      │  └─────────┘    └──────────┘   └────┬─────┘  │
//!     {"message": ..}  │                                      │        │
//!     ◀────────────────┼──────────────────────────────────────┘        │
//!                      │                                              │
//!                      │  config · observability · lifecycle          │
//!                      └──────────────────────────────────────────────┘
//! ```
//!
//! Routes, most specific first:
//! - `/` → `{"message": "hi"}`
//! - `/{name}` → `{"message": "hello, <name>!"}`
//! - anything else → `{"message": "fallback"}`

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use greeter::http::GreeterServer;
use greeter::lifecycle::{startup, Shutdown};
use greeter::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "greeter")]
#[command(about = "Greeting HTTP service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = startup::resolve_config(cli.config.as_deref(), cli.bind.as_deref())?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "greeter starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    let server = GreeterServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
