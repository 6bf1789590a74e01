//! External Peer Commands

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::client::DaemonClient;
use crate::generated::ExtPeer;
use crate::output::{format_timestamp, or_dash, print_item, print_success, OutputFormat, TableDisplay};

#[derive(Subcommand)]
pub enum ExtPeerCommands {
    /// Attach an external client to an ingress gateway
    Create {
        /// Network name
        network: String,

        /// Client identifier
        client_id: String,

        /// MAC address of the ingress gateway node
        #[arg(long)]
        gateway: String,

        /// Client WireGuard public key (base64)
        #[arg(long)]
        public_key: String,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        address6: Option<String>,

        #[arg(long)]
        endpoint: Option<String>,

        #[arg(long)]
        keepalive: Option<i32>,
    },

    /// Remove an external client
    Delete {
        /// Network name
        network: String,

        /// Client identifier
        client_id: String,
    },
}

#[derive(Serialize)]
pub struct ExtPeerDisplay {
    pub client_id: String,
    pub network: String,
    pub gateway: String,
    pub address: String,
    pub public_key: String,
    pub pending: bool,
    pub created: String,
}

impl From<ExtPeer> for ExtPeerDisplay {
    fn from(peer: ExtPeer) -> Self {
        Self {
            client_id: peer.client_id,
            network: peer.network,
            gateway: peer.ingress_gateway,
            address: peer.address,
            public_key: peer.public_key,
            pending: peer.is_pending,
            created: format_timestamp(peer.created_at),
        }
    }
}

impl TableDisplay for ExtPeerDisplay {
    fn headers() -> Vec<&'static str> {
        vec!["Client", "Network", "Gateway", "Address", "Public Key", "Pending", "Created"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.client_id.clone(),
            self.network.clone(),
            self.gateway.clone(),
            or_dash(&self.address),
            self.public_key.clone(),
            self.pending.to_string(),
            self.created.clone(),
        ]
    }
}

pub async fn execute(cmd: ExtPeerCommands, mut client: DaemonClient, format: OutputFormat) -> Result<()> {
    match cmd {
        ExtPeerCommands::Create {
            network,
            client_id,
            gateway,
            public_key,
            address,
            address6,
            endpoint,
            keepalive,
        } => {
            let peer = ExtPeer {
                client_id,
                network,
                ingress_gateway: gateway,
                address: address.unwrap_or_default(),
                address6: address6.unwrap_or_default(),
                endpoint: endpoint.unwrap_or_default(),
                public_key,
                keepalive: keepalive.unwrap_or(0),
                ..Default::default()
            };

            let peer = client.create_ext_peer(peer).await?;
            print_success(&format!("External peer '{}' created", peer.client_id));
            print_item(&ExtPeerDisplay::from(peer), format);
        }

        ExtPeerCommands::Delete { network, client_id } => {
            client.delete_ext_peer(&network, &client_id).await?;
            print_success(&format!("External peer '{}' deleted from '{}'", client_id, network));
        }
    }

    Ok(())
}
