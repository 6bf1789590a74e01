//! Node Commands

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::client::DaemonClient;
use crate::generated::{CheckInVerdict, Node, NodeUpdate, SetGatewayRequest};
use crate::output::{
    format_timestamp, or_dash, print_item, print_list, print_success, print_warning, OutputFormat,
    TableDisplay,
};

#[derive(Subcommand)]
pub enum NodeCommands {
    /// List nodes in a network
    List {
        /// Network name
        network: String,
    },

    /// Get node details
    Get {
        /// Network name
        network: String,

        /// Node MAC address
        mac: String,

        /// Node secret
        #[arg(long, env = "MESHCOORD_NODE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Register a node
    Register {
        #[command(flatten)]
        node: NodeArgs,

        /// Access key authorizing the registration
        #[arg(short, long)]
        key: Option<String>,

        /// Node secret; generated when omitted
        #[arg(long)]
        password: Option<String>,

        /// Node name; defaults to the MAC address
        #[arg(long)]
        name: Option<String>,
    },

    /// Report node state and print the coordinator's verdict
    CheckIn {
        #[command(flatten)]
        node: NodeArgs,

        /// Node secret
        #[arg(long, env = "MESHCOORD_NODE_PASSWORD", hide_env_values = true)]
        password: String,

        /// Interface name the node is running
        #[arg(long)]
        interface: Option<String>,
    },

    /// Update node fields
    Update {
        /// Network name
        network: String,

        /// Node MAC address
        mac: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        address6: Option<String>,

        #[arg(long)]
        endpoint: Option<String>,

        #[arg(long)]
        listen_port: Option<i32>,

        #[arg(long)]
        local_address: Option<String>,

        #[arg(long)]
        public_key: Option<String>,

        #[arg(long)]
        keepalive: Option<i32>,

        #[arg(long)]
        interface: Option<String>,

        #[arg(long)]
        post_up: Option<String>,

        #[arg(long)]
        post_down: Option<String>,

        #[arg(long)]
        check_in_interval: Option<i32>,

        /// Replace the node secret
        #[arg(long)]
        new_password: Option<String>,

        /// Current node secret
        #[arg(long, env = "MESHCOORD_NODE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Delete a node
    Delete {
        /// Network name
        network: String,

        /// Node MAC address
        mac: String,

        /// Node secret
        #[arg(long, env = "MESHCOORD_NODE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Approve a pending node
    Promote {
        /// Network name
        network: String,

        /// Node MAC address
        mac: String,
    },

    /// List nodes that stopped checking in
    Overdue {
        /// Network name
        network: String,

        /// Report nodes silent for longer than this many seconds;
        /// defaults to each node's own check-in interval
        #[arg(long)]
        silent_for: Option<i64>,
    },

    /// Configure gateway roles
    Gateway {
        /// Network name
        network: String,

        /// Node MAC address
        mac: String,

        /// Range ingress clients are allocated from
        #[arg(long)]
        ingress: Option<String>,

        /// Range routed through this node
        #[arg(long)]
        egress: Option<String>,
    },
}

/// Node identity and reachability shared by register and check-in
#[derive(Args)]
pub struct NodeArgs {
    /// Network name
    pub network: String,

    /// Node MAC address
    pub mac: String,

    /// WireGuard public key (base64)
    #[arg(long)]
    pub public_key: String,

    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub listen_port: Option<i32>,

    #[arg(long)]
    pub local_address: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub address6: Option<String>,

    #[arg(long)]
    pub keepalive: Option<i32>,
}

impl NodeArgs {
    fn into_node(self) -> Node {
        Node {
            network: self.network,
            mac_address: self.mac,
            public_key: self.public_key,
            endpoint: self.endpoint.unwrap_or_default(),
            listen_port: self.listen_port.unwrap_or(0),
            local_address: self.local_address.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            address6: self.address6.unwrap_or_default(),
            keepalive: self.keepalive.unwrap_or(0),
            ..Default::default()
        }
    }
}

/// Node display wrapper for serialization
#[derive(Serialize)]
pub struct NodeDisplay {
    pub network: String,
    pub mac_address: String,
    pub name: String,
    pub address: String,
    pub address6: String,
    pub endpoint: String,
    pub listen_port: i32,
    pub public_key: String,
    pub pending: bool,
    pub ingress_gateway: bool,
    pub egress_gateway: bool,
    pub last_check_in: String,
    pub last_peer_update: u64,
}

impl From<Node> for NodeDisplay {
    fn from(node: Node) -> Self {
        Self {
            network: node.network,
            mac_address: node.mac_address,
            name: node.name,
            address: node.address,
            address6: node.address6,
            endpoint: node.endpoint,
            listen_port: node.listen_port,
            public_key: node.public_key,
            pending: node.is_pending,
            ingress_gateway: node.is_ingress_gateway,
            egress_gateway: node.is_egress_gateway,
            last_check_in: format_timestamp(node.last_check_in),
            last_peer_update: node.last_peer_update,
        }
    }
}

impl TableDisplay for NodeDisplay {
    fn headers() -> Vec<&'static str> {
        vec![
            "MAC", "Name", "Address", "Address6", "Endpoint", "Port", "Pending", "Gateway",
            "Last Check-In", "Synced",
        ]
    }

    fn row(&self) -> Vec<String> {
        let gateway = match (self.ingress_gateway, self.egress_gateway) {
            (true, true) => "ingress+egress",
            (true, false) => "ingress",
            (false, true) => "egress",
            (false, false) => "-",
        };
        vec![
            self.mac_address.clone(),
            self.name.clone(),
            or_dash(&self.address),
            or_dash(&self.address6),
            or_dash(&self.endpoint),
            self.listen_port.to_string(),
            self.pending.to_string(),
            gateway.to_string(),
            self.last_check_in.clone(),
            self.last_peer_update.to_string(),
        ]
    }
}

#[derive(Serialize)]
pub struct VerdictDisplay {
    pub success: bool,
    pub pending: bool,
    pub need_peer_update: bool,
    pub need_config_update: bool,
    pub need_key_update: bool,
    pub need_delete: bool,
    pub message: String,
}

impl From<CheckInVerdict> for VerdictDisplay {
    fn from(v: CheckInVerdict) -> Self {
        Self {
            success: v.success,
            pending: v.is_pending,
            need_peer_update: v.need_peer_update,
            need_config_update: v.need_config_update,
            need_key_update: v.need_key_update,
            need_delete: v.need_delete,
            message: v.message,
        }
    }
}

impl TableDisplay for VerdictDisplay {
    fn headers() -> Vec<&'static str> {
        vec!["Success", "Pending", "Peers", "Config", "Key", "Delete", "Message"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.success.to_string(),
            self.pending.to_string(),
            self.need_peer_update.to_string(),
            self.need_config_update.to_string(),
            self.need_key_update.to_string(),
            self.need_delete.to_string(),
            or_dash(&self.message),
        ]
    }
}

pub async fn execute(cmd: NodeCommands, mut client: DaemonClient, format: OutputFormat) -> Result<()> {
    match cmd {
        NodeCommands::List { network } => {
            let nodes = client.list_nodes(&network).await?;
            let displays: Vec<NodeDisplay> = nodes.into_iter().map(NodeDisplay::from).collect();
            print_list(&displays, format);
        }

        NodeCommands::Get {
            network,
            mac,
            password,
        } => {
            let node = client.read_node(&network, &mac, &password).await?;
            print_item(&NodeDisplay::from(node), format);
        }

        NodeCommands::Register {
            node,
            key,
            password,
            name,
        } => {
            let chose_password = password.is_some();
            let mut request = node.into_node();
            request.access_key = key.unwrap_or_default();
            request.password = password.unwrap_or_default();
            request.name = name.unwrap_or_default();

            let (node, version) = client.register_node(request).await?;
            let generated = (!chose_password && !node.password.is_empty()).then(|| node.password.clone());
            let pending = node.is_pending;
            let display = NodeDisplay::from(node);

            print_success(&format!(
                "Node {} registered at topology version {}",
                display.mac_address, version
            ));
            if pending {
                print_warning("Node is pending approval and will not receive peers until promoted");
            }
            if let Some(secret) = generated {
                println!("Password (shown once): {}", secret);
            }
            print_item(&display, format);
        }

        NodeCommands::CheckIn {
            node,
            password,
            interface,
        } => {
            let mut report = node.into_node();
            report.password = password;
            report.interface = interface.unwrap_or_default();

            let verdict = client.check_in(report).await?;
            print_item(&VerdictDisplay::from(verdict), format);
        }

        NodeCommands::Update {
            network,
            mac,
            name,
            address,
            address6,
            endpoint,
            listen_port,
            local_address,
            public_key,
            keepalive,
            interface,
            post_up,
            post_down,
            check_in_interval,
            new_password,
            password,
        } => {
            let update = NodeUpdate {
                name,
                address,
                address6,
                endpoint,
                listen_port,
                local_address,
                udp_hole_punch: None,
                public_key,
                keepalive,
                interface,
                post_up,
                post_down,
                check_in_interval,
                password: new_password,
            };

            let node = client.update_node(&network, &mac, &password, update).await?;
            print_success(&format!("Node {} updated", mac));
            print_item(&NodeDisplay::from(node), format);
        }

        NodeCommands::Delete {
            network,
            mac,
            password,
        } => {
            client.delete_node(&network, &mac, &password).await?;
            print_success(&format!("Node {} deleted from '{}'", mac, network));
        }

        NodeCommands::Promote { network, mac } => {
            let node = client.promote_node(&network, &mac).await?;
            print_success(&format!("Node {} approved", mac));
            print_item(&NodeDisplay::from(node), format);
        }

        NodeCommands::Overdue { network, silent_for } => {
            let cutoff = match silent_for {
                Some(secs) => chrono::Utc::now().timestamp() - secs,
                None => 0,
            };
            let nodes = client.list_overdue_nodes(&network, cutoff).await?;
            let displays: Vec<NodeDisplay> = nodes.into_iter().map(NodeDisplay::from).collect();
            print_list(&displays, format);
        }

        NodeCommands::Gateway {
            network,
            mac,
            ingress,
            egress,
        } => {
            let request = SetGatewayRequest {
                network,
                mac_address: mac.clone(),
                is_ingress_gateway: ingress.is_some(),
                ingress_gateway_range: ingress.unwrap_or_default(),
                is_egress_gateway: egress.is_some(),
                egress_gateway_range: egress.unwrap_or_default(),
            };

            let node = client.set_gateway(request).await?;
            print_success(&format!("Gateway roles of {} updated", mac));
            print_item(&NodeDisplay::from(node), format);
        }
    }

    Ok(())
}
