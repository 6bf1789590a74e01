//! Peer Commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::client::DaemonClient;
use crate::generated::{ExtPeerDescriptor, PeerDescriptor};
use crate::output::{or_dash, print_list, OutputFormat, TableDisplay};

#[derive(Subcommand)]
pub enum PeersCommands {
    /// Fetch the mesh peers of a node
    Internal {
        /// Network name
        network: String,

        /// Requesting node MAC address
        mac: String,

        /// Node secret
        #[arg(long, env = "MESHCOORD_NODE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Fetch the external clients served by an ingress gateway
    External {
        /// Network name
        network: String,

        /// Gateway node MAC address
        mac: String,

        /// Node secret
        #[arg(long, env = "MESHCOORD_NODE_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

#[derive(Serialize)]
pub struct PeerDisplay {
    pub public_key: String,
    pub address: String,
    pub address6: String,
    pub endpoint: String,
    pub listen_port: i32,
    pub keepalive: i32,
    pub local_address: String,
    pub egress_range: String,
}

impl From<PeerDescriptor> for PeerDisplay {
    fn from(peer: PeerDescriptor) -> Self {
        Self {
            public_key: peer.public_key,
            address: peer.address,
            address6: peer.address6,
            endpoint: peer.endpoint,
            listen_port: peer.listen_port,
            keepalive: peer.keepalive,
            local_address: peer.local_address,
            egress_range: if peer.is_egress_gateway {
                peer.egress_gateway_range
            } else {
                String::new()
            },
        }
    }
}

impl From<ExtPeerDescriptor> for PeerDisplay {
    fn from(peer: ExtPeerDescriptor) -> Self {
        Self {
            public_key: peer.public_key,
            address: peer.address,
            address6: peer.address6,
            endpoint: peer.endpoint,
            listen_port: peer.listen_port,
            keepalive: peer.keepalive,
            local_address: peer.local_address,
            egress_range: String::new(),
        }
    }
}

impl TableDisplay for PeerDisplay {
    fn headers() -> Vec<&'static str> {
        vec!["Public Key", "Address", "Address6", "Endpoint", "Port", "Keepalive", "Local", "Egress"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.public_key.clone(),
            or_dash(&self.address),
            or_dash(&self.address6),
            or_dash(&self.endpoint),
            self.listen_port.to_string(),
            self.keepalive.to_string(),
            or_dash(&self.local_address),
            or_dash(&self.egress_range),
        ]
    }
}

pub async fn execute(cmd: PeersCommands, mut client: DaemonClient, format: OutputFormat) -> Result<()> {
    let displays: Vec<PeerDisplay> = match cmd {
        PeersCommands::Internal {
            network,
            mac,
            password,
        } => client
            .peers(&network, &mac, &password)
            .await?
            .into_iter()
            .map(PeerDisplay::from)
            .collect(),
        PeersCommands::External {
            network,
            mac,
            password,
        } => client
            .ext_peers(&network, &mac, &password)
            .await?
            .into_iter()
            .map(PeerDisplay::from)
            .collect(),
    };

    print_list(&displays, format);
    Ok(())
}
