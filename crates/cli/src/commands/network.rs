//! Network Commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::client::DaemonClient;
use crate::generated::Network;
use crate::output::{format_timestamp, or_dash, print_item, print_list, print_success, OutputFormat, TableDisplay};

#[derive(Subcommand)]
pub enum NetworkCommands {
    /// List all networks
    List,

    /// Get network details
    Get {
        /// Network name
        name: String,
    },

    /// Create a new network
    Create {
        /// Network name (up to 12 letters, digits or '-')
        name: String,

        /// IPv4 range tunnel addresses are allocated from (e.g. 10.10.0.0/24)
        #[arg(long)]
        address_range: Option<String>,

        /// IPv6 range for dual-stack networks
        #[arg(long)]
        address_range6: Option<String>,

        /// Enable dual-stack addressing
        #[arg(long)]
        dual_stack: bool,

        /// Prefer LAN addresses between nodes
        #[arg(long)]
        local: bool,

        /// LAN range used with --local
        #[arg(long)]
        local_range: Option<String>,

        /// Admit nodes without a key as pending
        #[arg(long)]
        manual_signup: bool,

        /// Default check-in interval in seconds
        #[arg(long, default_value = "30")]
        check_in_interval: i32,

        /// Default persistent keepalive in seconds
        #[arg(long, default_value = "20")]
        keepalive: i32,

        /// Default WireGuard listen port
        #[arg(long, default_value = "51821")]
        listen_port: i32,

        /// Default interface name
        #[arg(long)]
        interface: Option<String>,
    },
}

/// Network display wrapper for serialization
#[derive(Serialize)]
pub struct NetworkDisplay {
    pub name: String,
    pub address_range: String,
    pub address_range6: String,
    pub dual_stack: bool,
    pub local: bool,
    pub manual_signup: bool,
    pub topology_version: u64,
    pub updated: String,
}

impl From<Network> for NetworkDisplay {
    fn from(net: Network) -> Self {
        Self {
            name: net.name,
            address_range: net.address_range,
            address_range6: net.address_range6,
            dual_stack: net.is_dual_stack,
            local: net.is_local,
            manual_signup: net.allow_manual_sign_up,
            topology_version: net.topology_version,
            updated: format_timestamp(net.updated_at),
        }
    }
}

impl TableDisplay for NetworkDisplay {
    fn headers() -> Vec<&'static str> {
        vec!["Name", "Range", "Range6", "Dual Stack", "Local", "Manual Signup", "Version", "Updated"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            or_dash(&self.address_range),
            or_dash(&self.address_range6),
            self.dual_stack.to_string(),
            self.local.to_string(),
            self.manual_signup.to_string(),
            self.topology_version.to_string(),
            self.updated.clone(),
        ]
    }
}

pub async fn execute(cmd: NetworkCommands, mut client: DaemonClient, format: OutputFormat) -> Result<()> {
    match cmd {
        NetworkCommands::List => {
            let networks = client.list_networks().await?;
            let displays: Vec<NetworkDisplay> = networks.into_iter().map(NetworkDisplay::from).collect();
            print_list(&displays, format);
        }

        NetworkCommands::Get { name } => {
            let net = client.get_network(&name).await?;
            print_item(&NetworkDisplay::from(net), format);
        }

        NetworkCommands::Create {
            name,
            address_range,
            address_range6,
            dual_stack,
            local,
            local_range,
            manual_signup,
            check_in_interval,
            keepalive,
            listen_port,
            interface,
        } => {
            let network = Network {
                name,
                is_local: local,
                is_dual_stack: dual_stack,
                local_range: local_range.unwrap_or_default(),
                address_range: address_range.unwrap_or_default(),
                address_range6: address_range6.unwrap_or_default(),
                allow_manual_sign_up: manual_signup,
                default_check_in_interval: check_in_interval,
                default_keepalive: keepalive,
                default_listen_port: listen_port,
                default_interface: interface.unwrap_or_default(),
                ..Default::default()
            };

            let net = client.create_network(network).await?;
            let display = NetworkDisplay::from(net);
            print_success(&format!("Network '{}' created", display.name));
            print_item(&display, format);
        }
    }

    Ok(())
}
