//! gRPC server implementation

use crate::admission::AdmissionController;
use crate::config::DaemonConfig;
use crate::generated::{
    self as proto,
    admin_service_server::{AdminService, AdminServiceServer},
    node_service_server::{NodeService, NodeServiceServer},
};
use crate::peers::PeerSynchronizer;
use crate::reconciler::CheckInReconciler;
use crate::state::StateManager;
use futures::{Stream, StreamExt};
use meshcoord_common::{
    crypto::{hash_secret, verify_secret},
    now_epoch_secs,
    types::{self, SyncState},
};
use std::fmt::Display;
use std::pin::Pin;
use std::str::FromStr;
use tonic::{Request, Response, Status};
use tracing::{debug, info, warn};

type ResponseStream<T> = Pin<Box<dyn Stream<Item = Result<T, Status>> + Send + 'static>>;

// ============================================================================
// Node service
// ============================================================================

/// Operations invoked by mesh nodes
pub struct NodeServiceImpl {
    state: StateManager,
    admission: AdmissionController,
    reconciler: CheckInReconciler,
    peers: PeerSynchronizer,
}

impl NodeServiceImpl {
    pub fn new(state: StateManager) -> Self {
        Self {
            admission: AdmissionController::new(state.clone()),
            reconciler: CheckInReconciler::new(state.clone()),
            peers: PeerSynchronizer::new(state.clone()),
            state,
        }
    }
}

#[tonic::async_trait]
impl NodeService for NodeServiceImpl {
    async fn read_node(
        &self,
        request: Request<proto::ReadNodeRequest>,
    ) -> Result<Response<proto::ReadNodeResponse>, Status> {
        let req = request.into_inner();
        let config = self
            .state
            .read_node(&req.network, &req.mac_address, &req.password)?;

        Ok(Response::new(proto::ReadNodeResponse {
            node: Some(node_config_to_proto(&config)),
        }))
    }

    async fn create_node(
        &self,
        request: Request<proto::CreateNodeRequest>,
    ) -> Result<Response<proto::CreateNodeResponse>, Status> {
        let node = request
            .into_inner()
            .node
            .ok_or_else(|| Status::invalid_argument("node required"))?;
        debug!("CreateNode: {}/{}", node.network, node.mac_address);

        let registration = registration_from_proto(node)?;
        let admission = self.admission.admit(registration).await?;

        let mut node = node_to_proto(&admission.node, SyncState::default());
        node.password = admission.password.unwrap_or_default();

        Ok(Response::new(proto::CreateNodeResponse {
            node: Some(node),
            topology_version: admission.topology_version,
        }))
    }

    async fn check_in(
        &self,
        request: Request<proto::CheckInRequest>,
    ) -> Result<Response<proto::CheckInResponse>, Status> {
        let node = request
            .into_inner()
            .node
            .ok_or_else(|| Status::invalid_argument("node required"))?;
        let report = report_from_proto(node)?;
        let verdict = self.reconciler.check_in(&report).await?;

        Ok(Response::new(proto::CheckInResponse {
            verdict: Some(verdict_to_proto(&verdict)),
        }))
    }

    async fn update_node(
        &self,
        request: Request<proto::UpdateNodeRequest>,
    ) -> Result<Response<proto::UpdateNodeResponse>, Status> {
        let req = request.into_inner();
        debug!("UpdateNode: {}/{}", req.network, req.mac_address);

        let update = update_from_proto(req.update.unwrap_or_default())?;
        let node = self
            .state
            .update_node(&req.network, &req.mac_address, &req.password, update)
            .await?;
        let sync = self.state.staleness().sync_state(&req.network, &req.mac_address)?;

        Ok(Response::new(proto::UpdateNodeResponse {
            node: Some(node_to_proto(&node, sync)),
        }))
    }

    async fn delete_node(
        &self,
        request: Request<proto::DeleteNodeRequest>,
    ) -> Result<Response<proto::DeleteNodeResponse>, Status> {
        let req = request.into_inner();
        self.state
            .delete_node(&req.network, &req.mac_address, &req.password)
            .await?;

        Ok(Response::new(proto::DeleteNodeResponse { success: true }))
    }

    type GetPeersStream = ResponseStream<proto::PeerResponse>;

    async fn get_peers(
        &self,
        request: Request<proto::GetPeersRequest>,
    ) -> Result<Response<Self::GetPeersStream>, Status> {
        let req = request.into_inner();
        let stream = self
            .peers
            .stream_internal_peers(&req.network, &req.mac_address, &req.password)?
            .map(|item| {
                item.map(|peer| proto::PeerResponse {
                    peer: Some(peer_to_proto(&peer)),
                })
                .map_err(Status::from)
            });

        Ok(Response::new(Box::pin(stream)))
    }

    type GetExtPeersStream = ResponseStream<proto::ExtPeerResponse>;

    async fn get_ext_peers(
        &self,
        request: Request<proto::GetExtPeersRequest>,
    ) -> Result<Response<Self::GetExtPeersStream>, Status> {
        let req = request.into_inner();
        let stream = self
            .peers
            .stream_external_peers(&req.network, &req.mac_address, &req.password)?
            .map(|item| {
                item.map(|peer| proto::ExtPeerResponse {
                    peer: Some(ext_peer_descriptor_to_proto(&peer)),
                })
                .map_err(Status::from)
            });

        Ok(Response::new(Box::pin(stream)))
    }
}

// ============================================================================
// Admin service
// ============================================================================

/// Operator-facing operations
pub struct AdminServiceImpl {
    state: StateManager,
}

impl AdminServiceImpl {
    pub fn new(state: StateManager) -> Self {
        Self { state }
    }
}

#[tonic::async_trait]
impl AdminService for AdminServiceImpl {
    async fn create_network(
        &self,
        request: Request<proto::CreateNetworkRequest>,
    ) -> Result<Response<proto::CreateNetworkResponse>, Status> {
        let network = request
            .into_inner()
            .network
            .ok_or_else(|| Status::invalid_argument("network required"))?;
        let (name, spec) = network_from_proto(network)?;
        let network = self.state.create_network(&name, spec)?;

        Ok(Response::new(proto::CreateNetworkResponse {
            network: Some(network_to_proto(&network)),
        }))
    }

    async fn get_network(
        &self,
        request: Request<proto::GetNetworkRequest>,
    ) -> Result<Response<proto::GetNetworkResponse>, Status> {
        let network = self.state.require_network(&request.into_inner().name)?;

        Ok(Response::new(proto::GetNetworkResponse {
            network: Some(network_to_proto(&network)),
        }))
    }

    async fn list_networks(
        &self,
        _request: Request<proto::ListNetworksRequest>,
    ) -> Result<Response<proto::ListNetworksResponse>, Status> {
        let networks = self.state.list_networks()?;

        Ok(Response::new(proto::ListNetworksResponse {
            networks: networks.iter().map(network_to_proto).collect(),
        }))
    }

    async fn create_access_key(
        &self,
        request: Request<proto::CreateAccessKeyRequest>,
    ) -> Result<Response<proto::CreateAccessKeyResponse>, Status> {
        let req = request.into_inner();
        let ttl = (req.ttl_seconds != 0).then_some(req.ttl_seconds);
        let key = self
            .state
            .create_access_key(&req.network, &req.name, req.uses, ttl)?;

        Ok(Response::new(proto::CreateAccessKeyResponse {
            key: Some(access_key_to_proto(&key)),
        }))
    }

    async fn promote_node(
        &self,
        request: Request<proto::PromoteNodeRequest>,
    ) -> Result<Response<proto::PromoteNodeResponse>, Status> {
        let req = request.into_inner();
        let node = self.state.promote_node(&req.network, &req.mac_address).await?;
        let sync = self.state.staleness().sync_state(&req.network, &req.mac_address)?;

        Ok(Response::new(proto::PromoteNodeResponse {
            node: Some(node_to_proto(&node, sync)),
        }))
    }

    async fn list_nodes(
        &self,
        request: Request<proto::ListNodesRequest>,
    ) -> Result<Response<proto::ListNodesResponse>, Status> {
        let nodes = self.state.list_nodes(&request.into_inner().network)?;

        Ok(Response::new(proto::ListNodesResponse {
            nodes: nodes
                .iter()
                .map(|(node, sync)| node_to_proto(node, *sync))
                .collect(),
        }))
    }

    async fn set_gateway(
        &self,
        request: Request<proto::SetGatewayRequest>,
    ) -> Result<Response<proto::SetGatewayResponse>, Status> {
        let req = request.into_inner();
        let gateway = types::GatewaySettings {
            is_ingress_gateway: req.is_ingress_gateway,
            ingress_gateway_range: non_empty(req.ingress_gateway_range),
            is_egress_gateway: req.is_egress_gateway,
            egress_gateway_range: non_empty(req.egress_gateway_range),
        };
        let node = self
            .state
            .set_gateway(&req.network, &req.mac_address, gateway)
            .await?;
        let sync = self.state.staleness().sync_state(&req.network, &req.mac_address)?;

        Ok(Response::new(proto::SetGatewayResponse {
            node: Some(node_to_proto(&node, sync)),
        }))
    }

    async fn create_ext_peer(
        &self,
        request: Request<proto::CreateExtPeerRequest>,
    ) -> Result<Response<proto::CreateExtPeerResponse>, Status> {
        let peer = request
            .into_inner()
            .peer
            .ok_or_else(|| Status::invalid_argument("peer required"))?;
        let peer = self.state.create_ext_peer(ext_peer_from_proto(peer)?).await?;

        Ok(Response::new(proto::CreateExtPeerResponse {
            peer: Some(ext_peer_to_proto(&peer)),
        }))
    }

    async fn delete_ext_peer(
        &self,
        request: Request<proto::DeleteExtPeerRequest>,
    ) -> Result<Response<proto::DeleteExtPeerResponse>, Status> {
        let req = request.into_inner();
        self.state.delete_ext_peer(&req.network, &req.client_id)?;

        Ok(Response::new(proto::DeleteExtPeerResponse { success: true }))
    }

    async fn list_overdue_nodes(
        &self,
        request: Request<proto::ListOverdueNodesRequest>,
    ) -> Result<Response<proto::ListOverdueNodesResponse>, Status> {
        let req = request.into_inner();
        let nodes = if req.cutoff == 0 {
            self.state.overdue_nodes(&req.network, now_epoch_secs())?
        } else {
            self.state.nodes_overdue_since(&req.network, req.cutoff)?
        };

        let mut out = Vec::with_capacity(nodes.len());
        for node in &nodes {
            let sync = self.state.staleness().sync_state(&node.network, &node.mac_address)?;
            out.push(node_to_proto(node, sync));
        }

        Ok(Response::new(proto::ListOverdueNodesResponse { nodes: out }))
    }

    async fn get_health(
        &self,
        _request: Request<proto::GetHealthRequest>,
    ) -> Result<Response<proto::GetHealthResponse>, Status> {
        let networks = self.state.list_networks()?;

        Ok(Response::new(proto::GetHealthResponse {
            healthy: true,
            version: meshcoord_common::VERSION.to_string(),
            uptime_seconds: self.state.uptime_secs() as i64,
            networks: networks.len() as u32,
        }))
    }
}

/// Interceptor requiring `authorization: Bearer <token>` when a token is configured
fn admin_auth(
    token_hash: Option<String>,
) -> impl FnMut(Request<()>) -> Result<Request<()>, Status> + Clone {
    move |req: Request<()>| {
        let expected = match &token_hash {
            Some(hash) => hash,
            None => return Ok(req),
        };
        let presented = req
            .metadata()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));
        match presented {
            Some(token) if verify_secret(token, expected) => Ok(req),
            _ => Err(Status::unauthenticated("valid admin token required")),
        }
    }
}

// ============================================================================
// Wire to domain
// ============================================================================

fn parse_required<T>(field: &str, value: &str) -> Result<T, Status>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse()
        .map_err(|e| Status::invalid_argument(format!("{}: {}", field, e)))
}

/// Empty strings are unset
fn parse_optional<T>(field: &str, value: &str) -> Result<Option<T>, Status>
where
    T: FromStr,
    T::Err: Display,
{
    if value.is_empty() {
        Ok(None)
    } else {
        parse_required(field, value).map(Some)
    }
}

fn to_port(field: &str, value: i32) -> Result<u16, Status> {
    u16::try_from(value).map_err(|_| Status::invalid_argument(format!("{} out of range", field)))
}

fn to_unsigned(field: &str, value: i32) -> Result<u32, Status> {
    u32::try_from(value).map_err(|_| Status::invalid_argument(format!("{} must not be negative", field)))
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn spec_from_proto(node: &proto::Node) -> Result<types::NodeSpec, Status> {
    Ok(types::NodeSpec {
        name: node.name.clone(),
        address: parse_optional("address", &node.address)?,
        address6: parse_optional("address6", &node.address6)?,
        endpoint: parse_optional("endpoint", &node.endpoint)?,
        listen_port: to_port("listen_port", node.listen_port)?,
        local_address: parse_optional("local_address", &node.local_address)?,
        udp_hole_punch: node.udp_hole_punch,
        public_key: node.public_key.clone(),
        keepalive: to_unsigned("keepalive", node.keepalive)?,
        interface: node.interface.clone(),
        post_up: node.post_up.clone(),
        post_down: node.post_down.clone(),
        check_in_interval: to_unsigned("check_in_interval", node.check_in_interval)?,
    })
}

fn registration_from_proto(node: proto::Node) -> Result<types::NodeRegistration, Status> {
    let spec = spec_from_proto(&node)?;
    Ok(types::NodeRegistration {
        network: node.network,
        mac_address: node.mac_address,
        access_key: node.access_key,
        password: node.password,
        spec,
    })
}

fn report_from_proto(node: proto::Node) -> Result<types::CheckInReport, Status> {
    let listen_port = to_port("listen_port", node.listen_port)?;
    let keepalive = to_unsigned("keepalive", node.keepalive)?;
    Ok(types::CheckInReport {
        address: parse_optional("address", &node.address)?,
        address6: parse_optional("address6", &node.address6)?,
        endpoint: parse_optional("endpoint", &node.endpoint)?,
        local_address: parse_optional("local_address", &node.local_address)?,
        listen_port: (listen_port != 0).then_some(listen_port),
        keepalive: (keepalive != 0).then_some(keepalive),
        interface: non_empty(node.interface),
        post_up: non_empty(node.post_up),
        post_down: non_empty(node.post_down),
        network: node.network,
        mac_address: node.mac_address,
        password: node.password,
        public_key: node.public_key,
    })
}

fn update_from_proto(update: proto::NodeUpdate) -> Result<types::NodeUpdate, Status> {
    Ok(types::NodeUpdate {
        address: update
            .address
            .as_deref()
            .map(|v| parse_required("address", v))
            .transpose()?,
        address6: update
            .address6
            .as_deref()
            .map(|v| parse_required("address6", v))
            .transpose()?,
        endpoint: update
            .endpoint
            .as_deref()
            .map(|v| parse_required("endpoint", v))
            .transpose()?,
        local_address: update
            .local_address
            .as_deref()
            .map(|v| parse_required("local_address", v))
            .transpose()?,
        listen_port: update
            .listen_port
            .map(|v| to_port("listen_port", v))
            .transpose()?,
        keepalive: update.keepalive.map(|v| to_unsigned("keepalive", v)).transpose()?,
        check_in_interval: update
            .check_in_interval
            .map(|v| to_unsigned("check_in_interval", v))
            .transpose()?,
        name: update.name,
        udp_hole_punch: update.udp_hole_punch,
        public_key: update.public_key,
        interface: update.interface,
        post_up: update.post_up,
        post_down: update.post_down,
        password: update.password,
    })
}

fn network_from_proto(network: proto::Network) -> Result<(String, types::NetworkSpec), Status> {
    let spec = types::NetworkSpec {
        is_local: network.is_local,
        is_dual_stack: network.is_dual_stack,
        local_range: non_empty(network.local_range),
        address_range: non_empty(network.address_range),
        address_range6: non_empty(network.address_range6),
        allow_manual_sign_up: network.allow_manual_sign_up,
        default_check_in_interval: match to_unsigned(
            "default_check_in_interval",
            network.default_check_in_interval,
        )? {
            0 => types::NetworkSpec::default().default_check_in_interval,
            secs => secs,
        },
        default_keepalive: to_unsigned("default_keepalive", network.default_keepalive)?,
        default_listen_port: to_port("default_listen_port", network.default_listen_port)?,
        default_interface: network.default_interface,
    };
    Ok((network.name, spec))
}

fn ext_peer_from_proto(peer: proto::ExtPeer) -> Result<types::ExtPeer, Status> {
    Ok(types::ExtPeer {
        address: parse_optional("address", &peer.address)?,
        address6: parse_optional("address6", &peer.address6)?,
        endpoint: parse_optional("endpoint", &peer.endpoint)?,
        local_address: parse_optional("local_address", &peer.local_address)?,
        keepalive: to_unsigned("keepalive", peer.keepalive)?,
        listen_port: to_port("listen_port", peer.listen_port)?,
        client_id: peer.client_id,
        network: peer.network,
        ingress_gateway: peer.ingress_gateway,
        public_key: peer.public_key,
        is_pending: peer.is_pending,
        created_at: 0,
    })
}

// ============================================================================
// Domain to wire
// ============================================================================

fn display_or_empty<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn node_to_proto(node: &types::Node, sync: SyncState) -> proto::Node {
    proto::Node {
        mac_address: node.mac_address.clone(),
        network: node.network.clone(),
        name: node.spec.name.clone(),
        address: display_or_empty(&node.spec.address),
        address6: display_or_empty(&node.spec.address6),
        endpoint: display_or_empty(&node.spec.endpoint),
        listen_port: i32::from(node.spec.listen_port),
        local_address: display_or_empty(&node.spec.local_address),
        udp_hole_punch: node.spec.udp_hole_punch,
        public_key: node.spec.public_key.clone(),
        keepalive: node.spec.keepalive as i32,
        password: String::new(),
        access_key: String::new(),
        interface: node.spec.interface.clone(),
        post_up: node.spec.post_up.clone(),
        post_down: node.spec.post_down.clone(),
        check_in_interval: node.spec.check_in_interval as i32,
        is_pending: node.is_pending,
        is_ingress_gateway: node.gateway.is_ingress_gateway,
        ingress_gateway_range: node.gateway.ingress_gateway_range.clone().unwrap_or_default(),
        is_egress_gateway: node.gateway.is_egress_gateway,
        egress_gateway_range: node.gateway.egress_gateway_range.clone().unwrap_or_default(),
        is_local: false,
        is_dual_stack: false,
        local_range: String::new(),
        last_check_in: sync.last_contact.unwrap_or_default(),
        last_peer_update: sync.synced_version,
        expires_at: node.expires_at,
    }
}

fn node_config_to_proto(config: &types::NodeConfig) -> proto::Node {
    proto::Node {
        is_local: config.is_local,
        is_dual_stack: config.is_dual_stack,
        local_range: config.local_range.clone().unwrap_or_default(),
        ..node_to_proto(&config.node, config.sync)
    }
}

fn verdict_to_proto(verdict: &types::CheckInVerdict) -> proto::CheckInVerdict {
    proto::CheckInVerdict {
        success: verdict.success,
        need_peer_update: verdict.need_peer_update,
        need_config_update: verdict.need_config_update,
        need_key_update: verdict.need_key_update,
        need_delete: verdict.need_delete,
        is_pending: verdict.is_pending,
        message: verdict.message.clone(),
    }
}

fn peer_to_proto(peer: &types::PeerDescriptor) -> proto::PeerDescriptor {
    proto::PeerDescriptor {
        address: display_or_empty(&peer.address),
        address6: display_or_empty(&peer.address6),
        endpoint: display_or_empty(&peer.endpoint),
        public_key: peer.public_key.clone(),
        keepalive: peer.keepalive as i32,
        listen_port: i32::from(peer.listen_port),
        local_address: display_or_empty(&peer.local_address),
        is_egress_gateway: peer.is_egress_gateway,
        egress_gateway_range: peer.egress_gateway_range.clone().unwrap_or_default(),
    }
}

fn ext_peer_descriptor_to_proto(peer: &types::ExtPeerDescriptor) -> proto::ExtPeerDescriptor {
    proto::ExtPeerDescriptor {
        address: display_or_empty(&peer.address),
        address6: display_or_empty(&peer.address6),
        endpoint: display_or_empty(&peer.endpoint),
        public_key: peer.public_key.clone(),
        keepalive: peer.keepalive as i32,
        listen_port: i32::from(peer.listen_port),
        local_address: display_or_empty(&peer.local_address),
    }
}

fn network_to_proto(network: &types::Network) -> proto::Network {
    proto::Network {
        name: network.name.clone(),
        is_local: network.spec.is_local,
        is_dual_stack: network.spec.is_dual_stack,
        local_range: network.spec.local_range.clone().unwrap_or_default(),
        address_range: network.spec.address_range.clone().unwrap_or_default(),
        address_range6: network.spec.address_range6.clone().unwrap_or_default(),
        allow_manual_sign_up: network.spec.allow_manual_sign_up,
        default_check_in_interval: network.spec.default_check_in_interval as i32,
        default_keepalive: network.spec.default_keepalive as i32,
        default_listen_port: i32::from(network.spec.default_listen_port),
        default_interface: network.spec.default_interface.clone(),
        topology_version: network.topology_version,
        created_at: network.created_at,
        updated_at: network.updated_at,
    }
}

fn access_key_to_proto(key: &types::AccessKey) -> proto::AccessKey {
    proto::AccessKey {
        network: key.network.clone(),
        name: key.name.clone(),
        value: key.value.clone(),
        uses_remaining: key.uses_remaining,
        expires_at: key.expires_at.unwrap_or_default(),
        created_at: key.created_at,
    }
}

fn ext_peer_to_proto(peer: &types::ExtPeer) -> proto::ExtPeer {
    proto::ExtPeer {
        client_id: peer.client_id.clone(),
        network: peer.network.clone(),
        ingress_gateway: peer.ingress_gateway.clone(),
        address: display_or_empty(&peer.address),
        address6: display_or_empty(&peer.address6),
        endpoint: display_or_empty(&peer.endpoint),
        public_key: peer.public_key.clone(),
        keepalive: peer.keepalive as i32,
        listen_port: i32::from(peer.listen_port),
        local_address: display_or_empty(&peer.local_address),
        is_pending: peer.is_pending,
        created_at: peer.created_at,
    }
}

// ============================================================================
// Server startup
// ============================================================================

pub async fn serve(config: DaemonConfig, state: StateManager) -> anyhow::Result<()> {
    let addr = config.grpc_listen.parse()?;
    let node_service = NodeServiceImpl::new(state.clone());
    let admin_service = AdminServiceImpl::new(state);

    let token_hash = config.security.admin_token.as_deref().map(hash_secret);
    if token_hash.is_none() {
        warn!("No admin token configured; the admin service is unauthenticated");
    }

    info!("gRPC server listening on {}", addr);

    tonic::transport::Server::builder()
        .add_service(NodeServiceServer::new(node_service))
        .add_service(AdminServiceServer::with_interceptor(
            admin_service,
            admin_auth(token_hash),
        ))
        .serve(addr)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::{seed_node, test_pubkey, test_state};

    fn wire_node(mac: &str, key: &str) -> proto::Node {
        proto::Node {
            network: "lab".to_string(),
            mac_address: mac.to_string(),
            access_key: key.to_string(),
            public_key: test_pubkey(mac.len() as u8),
            ..Default::default()
        }
    }

    async fn lab(manual: bool) -> (NodeServiceImpl, AdminServiceImpl) {
        let state = test_state();
        let admin = AdminServiceImpl::new(state.clone());
        admin
            .create_network(Request::new(proto::CreateNetworkRequest {
                network: Some(proto::Network {
                    name: "lab".to_string(),
                    address_range: "10.30.0.0/24".to_string(),
                    allow_manual_sign_up: manual,
                    ..Default::default()
                }),
            }))
            .await
            .unwrap();
        (NodeServiceImpl::new(state), admin)
    }

    #[tokio::test]
    async fn test_register_and_read() {
        let (nodes, admin) = lab(false).await;
        let key = admin
            .create_access_key(Request::new(proto::CreateAccessKeyRequest {
                network: "lab".to_string(),
                name: "bootstrap".to_string(),
                uses: 5,
                ttl_seconds: 0,
            }))
            .await
            .unwrap()
            .into_inner()
            .key
            .unwrap();

        let created = nodes
            .create_node(Request::new(proto::CreateNodeRequest {
                node: Some(wire_node("AA:01", &key.value)),
            }))
            .await
            .unwrap()
            .into_inner();
        let node = created.node.unwrap();
        assert_eq!(node.address, "10.30.0.1");
        assert!(!node.password.is_empty());
        assert_eq!(created.topology_version, 1);

        let read = nodes
            .read_node(Request::new(proto::ReadNodeRequest {
                network: "lab".to_string(),
                mac_address: "AA:01".to_string(),
                password: node.password.clone(),
            }))
            .await
            .unwrap()
            .into_inner()
            .node
            .unwrap();
        assert!(read.password.is_empty());
        assert_eq!(read.listen_port, 51821);
    }

    #[tokio::test]
    async fn test_refused_registration_is_permission_denied() {
        let (nodes, _admin) = lab(false).await;
        let status = nodes
            .create_node(Request::new(proto::CreateNodeRequest {
                node: Some(wire_node("AA:01", "nope")),
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::PermissionDenied);
    }

    #[tokio::test]
    async fn test_pending_check_in_is_not_an_error() {
        let (nodes, admin) = lab(true).await;
        let created = nodes
            .create_node(Request::new(proto::CreateNodeRequest {
                node: Some(wire_node("AA:01", "")),
            }))
            .await
            .unwrap()
            .into_inner()
            .node
            .unwrap();
        assert!(created.is_pending);

        let mut report = wire_node("AA:01", "");
        report.password = created.password.clone();
        let verdict = nodes
            .check_in(Request::new(proto::CheckInRequest {
                node: Some(report.clone()),
            }))
            .await
            .unwrap()
            .into_inner()
            .verdict
            .unwrap();
        assert!(!verdict.success);
        assert!(verdict.is_pending);

        admin
            .promote_node(Request::new(proto::PromoteNodeRequest {
                network: "lab".to_string(),
                mac_address: "AA:01".to_string(),
            }))
            .await
            .unwrap();
        let verdict = nodes
            .check_in(Request::new(proto::CheckInRequest { node: Some(report) }))
            .await
            .unwrap()
            .into_inner()
            .verdict
            .unwrap();
        assert!(verdict.success);
        assert!(verdict.need_peer_update);
        assert!(!verdict.need_delete);
    }

    #[tokio::test]
    async fn test_peer_stream_over_the_wire() {
        let (nodes, _admin) = lab(true).await;
        let mut passwords = Vec::new();
        for mac in ["AA:01", "AA:02", "AA:03"] {
            let created = nodes
                .create_node(Request::new(proto::CreateNodeRequest {
                    node: Some(wire_node(mac, "")),
                }))
                .await
                .unwrap()
                .into_inner();
            passwords.push(created.node.unwrap().password);
        }
        // Still pending, so fetching is refused
        let status = nodes
            .get_peers(Request::new(proto::GetPeersRequest {
                network: "lab".to_string(),
                mac_address: "AA:01".to_string(),
                password: passwords[0].clone(),
            }))
            .await
            .err()
            .unwrap();
        assert_eq!(status.code(), tonic::Code::PermissionDenied);

        let state = nodes.state.clone();
        state.promote_node("lab", "AA:01").await.unwrap();
        state.promote_node("lab", "AA:02").await.unwrap();

        let stream = nodes
            .get_peers(Request::new(proto::GetPeersRequest {
                network: "lab".to_string(),
                mac_address: "AA:01".to_string(),
                password: passwords[0].clone(),
            }))
            .await
            .unwrap()
            .into_inner();
        let peers: Vec<_> = stream.collect().await;
        assert_eq!(peers.len(), 1);
        let peer = peers[0].as_ref().unwrap().peer.clone().unwrap();
        assert_eq!(peer.address, "10.30.0.2");

        let version = state.db().topology_version("lab").unwrap().unwrap();
        assert_eq!(state.staleness().last_synced_version("lab", "AA:01").unwrap(), version);
    }

    #[tokio::test]
    async fn test_update_validates_at_boundary() {
        let (nodes, _admin) = lab(true).await;
        let password = nodes
            .create_node(Request::new(proto::CreateNodeRequest {
                node: Some(wire_node("AA:01", "")),
            }))
            .await
            .unwrap()
            .into_inner()
            .node
            .unwrap()
            .password;

        let status = nodes
            .update_node(Request::new(proto::UpdateNodeRequest {
                network: "lab".to_string(),
                mac_address: "AA:01".to_string(),
                update: Some(proto::NodeUpdate {
                    endpoint: Some("not-an-ip".to_string()),
                    ..Default::default()
                }),
                password: password.clone(),
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);

        let updated = nodes
            .update_node(Request::new(proto::UpdateNodeRequest {
                network: "lab".to_string(),
                mac_address: "AA:01".to_string(),
                update: Some(proto::NodeUpdate {
                    endpoint: Some("198.51.100.7".to_string()),
                    ..Default::default()
                }),
                password,
            }))
            .await
            .unwrap()
            .into_inner()
            .node
            .unwrap();
        assert_eq!(updated.endpoint, "198.51.100.7");
    }

    #[tokio::test]
    async fn test_delete_unknown_node_is_not_found() {
        let (nodes, _admin) = lab(true).await;
        let status = nodes
            .delete_node(Request::new(proto::DeleteNodeRequest {
                network: "lab".to_string(),
                mac_address: "AA:01".to_string(),
                password: "secret".to_string(),
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::NotFound);
    }

    #[tokio::test]
    async fn test_node_calls_without_credentials_are_refused() {
        let (nodes, _admin) = lab(false).await;
        let state = nodes.state.clone();
        let before = seed_node(&state, "lab", "AA:01", "10.30.0.1");

        for password in ["", "attacker"] {
            let status = nodes
                .update_node(Request::new(proto::UpdateNodeRequest {
                    network: "lab".to_string(),
                    mac_address: "AA:01".to_string(),
                    update: Some(proto::NodeUpdate {
                        public_key: Some(test_pubkey(99)),
                        endpoint: Some("198.51.100.66".to_string()),
                        password: Some("attacker".to_string()),
                        ..Default::default()
                    }),
                    password: password.to_string(),
                }))
                .await
                .unwrap_err();
            assert_eq!(status.code(), tonic::Code::PermissionDenied);

            let status = nodes
                .delete_node(Request::new(proto::DeleteNodeRequest {
                    network: "lab".to_string(),
                    mac_address: "AA:01".to_string(),
                    password: password.to_string(),
                }))
                .await
                .unwrap_err();
            assert_eq!(status.code(), tonic::Code::PermissionDenied);

            let status = nodes
                .read_node(Request::new(proto::ReadNodeRequest {
                    network: "lab".to_string(),
                    mac_address: "AA:01".to_string(),
                    password: password.to_string(),
                }))
                .await
                .unwrap_err();
            assert_eq!(status.code(), tonic::Code::PermissionDenied);

            let status = nodes
                .get_peers(Request::new(proto::GetPeersRequest {
                    network: "lab".to_string(),
                    mac_address: "AA:01".to_string(),
                    password: password.to_string(),
                }))
                .await
                .err()
                .unwrap();
            assert_eq!(status.code(), tonic::Code::PermissionDenied);

            let status = nodes
                .get_ext_peers(Request::new(proto::GetExtPeersRequest {
                    network: "lab".to_string(),
                    mac_address: "AA:01".to_string(),
                    password: password.to_string(),
                }))
                .await
                .err()
                .unwrap();
            assert_eq!(status.code(), tonic::Code::PermissionDenied);
        }

        let after = state.require_node("lab", "AA:01").unwrap();
        assert_eq!(after.spec.public_key, before.spec.public_key);
        assert_eq!(after.spec.endpoint, before.spec.endpoint);
        assert_eq!(after.generation, before.generation);

        // The real node still checks in cleanly
        let mut report = wire_node("AA:01", "");
        report.public_key = before.spec.public_key.clone();
        report.password = "secret".to_string();
        let verdict = nodes
            .check_in(Request::new(proto::CheckInRequest { node: Some(report) }))
            .await
            .unwrap()
            .into_inner()
            .verdict
            .unwrap();
        assert!(!verdict.need_delete);
        assert!(!verdict.need_key_update);
    }

    #[test]
    fn test_admin_auth() {
        let mut open = admin_auth(None);
        assert!(open(Request::new(())).is_ok());

        let mut guarded = admin_auth(Some(hash_secret("s3cret")));
        assert_eq!(
            guarded(Request::new(())).unwrap_err().code(),
            tonic::Code::Unauthenticated
        );

        let mut req = Request::new(());
        req.metadata_mut()
            .insert("authorization", "Bearer s3cret".parse().unwrap());
        assert!(guarded(req).is_ok());

        let mut req = Request::new(());
        req.metadata_mut()
            .insert("authorization", "Bearer wrong".parse().unwrap());
        assert!(guarded(req).is_err());
    }

    #[test]
    fn test_report_treats_zero_as_unreported() {
        let report = report_from_proto(proto::Node {
            network: "lab".to_string(),
            mac_address: "AA:01".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(report.listen_port, None);
        assert_eq!(report.keepalive, None);
        assert_eq!(report.address, None);
        assert_eq!(report.interface, None);

        assert!(report_from_proto(proto::Node {
            listen_port: 70000,
            ..Default::default()
        })
        .is_err());
    }
}
