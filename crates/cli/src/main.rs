//! meshcoord CLI - Main Entry Point
//!
//! Operator and node-side interface to the meshcoord daemon: networks,
//! access keys, node lifecycle, peers and external clients.

use clap::{Parser, Subcommand};

mod client;
mod commands;
mod output;

mod generated {
    #![allow(clippy::all)]
    include!("generated/meshcoord.v1.rs");
}

use commands::{ext_peer, key, network, node, peers};

/// meshcoord CLI - mesh VPN coordinator
#[derive(Parser)]
#[command(name = "meshcoord")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Daemon address
    #[arg(long, default_value = "http://127.0.0.1:50051", global = true)]
    daemon_addr: String,

    /// Bearer token for administrative calls
    #[arg(long, env = "MESHCOORD_ADMIN_TOKEN", global = true, hide_env_values = true)]
    admin_token: Option<String>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage networks
    #[command(subcommand)]
    Network(network::NetworkCommands),

    /// Manage access keys
    #[command(subcommand)]
    Key(key::KeyCommands),

    /// Manage nodes
    #[command(subcommand)]
    Node(node::NodeCommands),

    /// Fetch peer lists
    #[command(subcommand)]
    Peers(peers::PeersCommands),

    /// Manage external clients of ingress gateways
    #[command(subcommand)]
    ExtPeer(ext_peer::ExtPeerCommands),

    /// Check daemon status
    Status,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    if let Commands::Version = cli.command {
        println!("meshcoord CLI v{}", env!("CARGO_PKG_VERSION"));
        println!("Control plane client for WireGuard mesh networks");
        return Ok(());
    }

    tracing::debug!("Connecting to {}", cli.daemon_addr);
    let client = client::DaemonClient::new(&cli.daemon_addr, cli.admin_token.as_deref()).await;

    match cli.command {
        Commands::Network(cmd) => network::execute(cmd, client?, cli.format).await?,
        Commands::Key(cmd) => key::execute(cmd, client?, cli.format).await?,
        Commands::Node(cmd) => node::execute(cmd, client?, cli.format).await?,
        Commands::Peers(cmd) => peers::execute(cmd, client?, cli.format).await?,
        Commands::ExtPeer(cmd) => ext_peer::execute(cmd, client?, cli.format).await?,
        Commands::Status => match client {
            Ok(mut c) => match c.health().await {
                Ok(health) if health.healthy => {
                    println!("✅ Daemon is running at {}", cli.daemon_addr);
                    println!("  Version:  {}", health.version);
                    println!("  Uptime:   {}s", health.uptime_seconds);
                    println!("  Networks: {}", health.networks);
                }
                Ok(_) => {
                    println!("❌ Daemon at {} reports unhealthy", cli.daemon_addr);
                    std::process::exit(1);
                }
                Err(e) => {
                    println!("❌ Daemon is not responding at {}: {}", cli.daemon_addr, e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                println!("❌ Cannot connect to daemon: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Version => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_register() {
        let cli = Cli::try_parse_from([
            "meshcoord",
            "node",
            "register",
            "lab",
            "aa:bb:cc:dd:ee:01",
            "--public-key",
            "AAAA",
            "--key",
            "k1",
        ])
        .unwrap();
        match cli.command {
            Commands::Node(node::NodeCommands::Register { node, key, password, .. }) => {
                assert_eq!(node.network, "lab");
                assert_eq!(node.mac, "aa:bb:cc:dd:ee:01");
                assert_eq!(key.as_deref(), Some("k1"));
                assert!(password.is_none());
            }
            _ => panic!("expected node register"),
        }
    }

    #[test]
    fn test_update_separates_current_and_new_password() {
        let cli = Cli::try_parse_from([
            "meshcoord",
            "node",
            "update",
            "lab",
            "aa:bb:cc:dd:ee:01",
            "--password",
            "old",
            "--new-password",
            "new",
        ])
        .unwrap();
        match cli.command {
            Commands::Node(node::NodeCommands::Update {
                password,
                new_password,
                ..
            }) => {
                assert_eq!(password, "old");
                assert_eq!(new_password.as_deref(), Some("new"));
            }
            _ => panic!("expected node update"),
        }
    }

    #[test]
    fn test_gateway_flags() {
        let cli = Cli::try_parse_from([
            "meshcoord",
            "node",
            "gateway",
            "lab",
            "aa:bb:cc:dd:ee:01",
            "--ingress",
            "10.20.0.0/24",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Node(node::NodeCommands::Gateway { ingress: Some(_), egress: None, .. })
        ));
    }
}
