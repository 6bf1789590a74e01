//! Daemon gRPC Client

use anyhow::{Context, Result};
use futures::StreamExt;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::Channel;
use tonic::Request;

use crate::generated::admin_service_client::AdminServiceClient;
use crate::generated::node_service_client::NodeServiceClient;
use crate::generated::*;

/// Client for communicating with the meshcoord daemon
pub struct DaemonClient {
    nodes: NodeServiceClient<Channel>,
    admin: AdminServiceClient<Channel>,
    admin_token: Option<MetadataValue<Ascii>>,
}

impl DaemonClient {
    /// Connect to the daemon
    pub async fn new(addr: &str, admin_token: Option<&str>) -> Result<Self> {
        let channel = Channel::from_shared(addr.to_string())?
            .connect()
            .await
            .with_context(|| format!("failed to connect to {}", addr))?;

        let admin_token = admin_token
            .map(|token| format!("Bearer {}", token).parse::<MetadataValue<Ascii>>())
            .transpose()
            .context("admin token is not valid header text")?;

        Ok(Self {
            nodes: NodeServiceClient::new(channel.clone()),
            admin: AdminServiceClient::new(channel),
            admin_token,
        })
    }

    fn admin_request<T>(&self, message: T) -> Request<T> {
        let mut request = Request::new(message);
        if let Some(token) = &self.admin_token {
            request.metadata_mut().insert("authorization", token.clone());
        }
        request
    }

    /// Check if the daemon is healthy
    pub async fn health(&mut self) -> Result<GetHealthResponse> {
        let request = self.admin_request(GetHealthRequest {});
        Ok(self.admin.get_health(request).await?.into_inner())
    }

    // Network operations

    pub async fn create_network(&mut self, network: Network) -> Result<Network> {
        let request = self.admin_request(CreateNetworkRequest {
            network: Some(network),
        });
        let response = self.admin.create_network(request).await?;
        response
            .into_inner()
            .network
            .ok_or_else(|| anyhow::anyhow!("No network in response"))
    }

    pub async fn get_network(&mut self, name: &str) -> Result<Network> {
        let request = self.admin_request(GetNetworkRequest {
            name: name.to_string(),
        });
        let response = self.admin.get_network(request).await?;
        response
            .into_inner()
            .network
            .ok_or_else(|| anyhow::anyhow!("Network not found"))
    }

    pub async fn list_networks(&mut self) -> Result<Vec<Network>> {
        let request = self.admin_request(ListNetworksRequest {});
        Ok(self.admin.list_networks(request).await?.into_inner().networks)
    }

    /// Issue an access key; `ttl_seconds` of 0 never expires
    pub async fn create_access_key(
        &mut self,
        network: &str,
        name: &str,
        uses: u32,
        ttl_seconds: i64,
    ) -> Result<AccessKey> {
        let request = self.admin_request(CreateAccessKeyRequest {
            network: network.to_string(),
            name: name.to_string(),
            uses,
            ttl_seconds,
        });
        let response = self.admin.create_access_key(request).await?;
        response
            .into_inner()
            .key
            .ok_or_else(|| anyhow::anyhow!("No key in response"))
    }

    // Node operations

    /// Register a node; the returned node carries the password if one was generated
    pub async fn register_node(&mut self, node: Node) -> Result<(Node, u64)> {
        let request = Request::new(CreateNodeRequest { node: Some(node) });
        let response = self.nodes.create_node(request).await?.into_inner();
        let node = response
            .node
            .ok_or_else(|| anyhow::anyhow!("No node in response"))?;
        Ok((node, response.topology_version))
    }

    pub async fn read_node(&mut self, network: &str, mac_address: &str, password: &str) -> Result<Node> {
        let request = Request::new(ReadNodeRequest {
            network: network.to_string(),
            mac_address: mac_address.to_string(),
            password: password.to_string(),
        });
        let response = self.nodes.read_node(request).await?;
        response
            .into_inner()
            .node
            .ok_or_else(|| anyhow::anyhow!("Node not found"))
    }

    pub async fn check_in(&mut self, node: Node) -> Result<CheckInVerdict> {
        let request = Request::new(CheckInRequest { node: Some(node) });
        let response = self.nodes.check_in(request).await?;
        response
            .into_inner()
            .verdict
            .ok_or_else(|| anyhow::anyhow!("No verdict in response"))
    }

    pub async fn update_node(
        &mut self,
        network: &str,
        mac_address: &str,
        password: &str,
        update: NodeUpdate,
    ) -> Result<Node> {
        let request = Request::new(UpdateNodeRequest {
            network: network.to_string(),
            mac_address: mac_address.to_string(),
            update: Some(update),
            password: password.to_string(),
        });
        let response = self.nodes.update_node(request).await?;
        response
            .into_inner()
            .node
            .ok_or_else(|| anyhow::anyhow!("No node in response"))
    }

    pub async fn delete_node(&mut self, network: &str, mac_address: &str, password: &str) -> Result<()> {
        let request = Request::new(DeleteNodeRequest {
            network: network.to_string(),
            mac_address: mac_address.to_string(),
            password: password.to_string(),
        });
        self.nodes.delete_node(request).await?;
        Ok(())
    }

    pub async fn promote_node(&mut self, network: &str, mac_address: &str) -> Result<Node> {
        let request = self.admin_request(PromoteNodeRequest {
            network: network.to_string(),
            mac_address: mac_address.to_string(),
        });
        let response = self.admin.promote_node(request).await?;
        response
            .into_inner()
            .node
            .ok_or_else(|| anyhow::anyhow!("No node in response"))
    }

    pub async fn list_nodes(&mut self, network: &str) -> Result<Vec<Node>> {
        let request = self.admin_request(ListNodesRequest {
            network: network.to_string(),
        });
        Ok(self.admin.list_nodes(request).await?.into_inner().nodes)
    }

    /// Nodes silent since `cutoff`; 0 uses each node's own check-in interval
    pub async fn list_overdue_nodes(&mut self, network: &str, cutoff: i64) -> Result<Vec<Node>> {
        let request = self.admin_request(ListOverdueNodesRequest {
            network: network.to_string(),
            cutoff,
        });
        Ok(self.admin.list_overdue_nodes(request).await?.into_inner().nodes)
    }

    pub async fn set_gateway(&mut self, request: SetGatewayRequest) -> Result<Node> {
        let request = self.admin_request(request);
        let response = self.admin.set_gateway(request).await?;
        response
            .into_inner()
            .node
            .ok_or_else(|| anyhow::anyhow!("No node in response"))
    }

    // Peer operations

    /// Fetch every mesh peer; reading to the end marks the node synchronized
    pub async fn peers(
        &mut self,
        network: &str,
        mac_address: &str,
        password: &str,
    ) -> Result<Vec<PeerDescriptor>> {
        let request = Request::new(GetPeersRequest {
            network: network.to_string(),
            mac_address: mac_address.to_string(),
            password: password.to_string(),
        });
        let mut stream = self.nodes.get_peers(request).await?.into_inner();

        let mut peers = Vec::new();
        while let Some(item) = stream.next().await {
            if let Some(peer) = item?.peer {
                peers.push(peer);
            }
        }
        Ok(peers)
    }

    pub async fn ext_peers(
        &mut self,
        network: &str,
        mac_address: &str,
        password: &str,
    ) -> Result<Vec<ExtPeerDescriptor>> {
        let request = Request::new(GetExtPeersRequest {
            network: network.to_string(),
            mac_address: mac_address.to_string(),
            password: password.to_string(),
        });
        let mut stream = self.nodes.get_ext_peers(request).await?.into_inner();

        let mut peers = Vec::new();
        while let Some(item) = stream.next().await {
            if let Some(peer) = item?.peer {
                peers.push(peer);
            }
        }
        Ok(peers)
    }

    // External peer operations

    pub async fn create_ext_peer(&mut self, peer: ExtPeer) -> Result<ExtPeer> {
        let request = self.admin_request(CreateExtPeerRequest { peer: Some(peer) });
        let response = self.admin.create_ext_peer(request).await?;
        response
            .into_inner()
            .peer
            .ok_or_else(|| anyhow::anyhow!("No peer in response"))
    }

    pub async fn delete_ext_peer(&mut self, network: &str, client_id: &str) -> Result<()> {
        let request = self.admin_request(DeleteExtPeerRequest {
            network: network.to_string(),
            client_id: client_id.to_string(),
        });
        self.admin.delete_ext_peer(request).await?;
        Ok(())
    }
}
