//! Meshcoord Daemon
//!
//! Coordinates a fleet of mesh VPN nodes: admits registrations, reconciles
//! check-ins against the authoritative topology and distributes peers.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod admission;
mod config;
mod grpc;
mod peers;
mod reconciler;
mod staleness;
mod state;
mod sweeper;

pub mod generated {
    #![allow(clippy::all)]
    include!("generated/meshcoord.v1.rs");
}

use config::{DaemonConfig, LogFormat};

#[derive(Parser)]
#[command(name = "meshcoordd")]
#[command(about = "meshcoord daemon - mesh VPN coordinator")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "MESHCOORD_CONFIG")]
    config: Option<PathBuf>,

    /// Store directory
    #[arg(short, long)]
    store: Option<PathBuf>,

    /// gRPC listen address
    #[arg(short, long)]
    listen: Option<String>,

    /// Log output format
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration, then apply command line overrides
    let config_path = cli
        .config
        .unwrap_or_else(|| meshcoord_common::default_store_path().join("config.toml"));
    let mut config = DaemonConfig::load(&config_path)?;
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    if let Some(listen) = cli.listen {
        config.grpc_listen = listen;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    // Initialize logging
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    match config.log_format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
    }

    info!("meshcoord daemon v{}", env!("CARGO_PKG_VERSION"));
    info!("Using configuration {:?}", config_path);

    // Ensure store directory exists
    tokio::fs::create_dir_all(&config.store_path).await?;

    // Initialize state manager
    let state = state::StateManager::new(&config)?;

    // Start overdue sweeper
    let sweeper = sweeper::OverdueSweeper::new(state.clone());
    let sweeper_handle = tokio::spawn(async move { sweeper.run().await });

    // Start gRPC server
    let grpc_handle = tokio::spawn(grpc::serve(config.clone(), state.clone()));

    info!("Daemon started on {}", config.grpc_listen);

    // Wait for shutdown signal
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
        result = grpc_handle => {
            match result {
                Ok(Err(e)) => tracing::error!("gRPC server error: {}", e),
                Err(e) => tracing::error!("gRPC server task failed: {}", e),
                Ok(Ok(())) => {}
            }
        }
        result = sweeper_handle => {
            if let Err(e) = result {
                tracing::error!("Sweeper error: {}", e);
            }
        }
    }

    info!("Daemon shutdown complete");
    Ok(())
}
