//! Core types for meshcoord

use crate::crypto::validate_public_key;
use crate::{Error, Result};
use ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Maximum length of a network name
pub const MAX_NETWORK_NAME_LEN: usize = 12;

/// Maximum length of a hardware address
pub const MAX_MAC_LEN: usize = 64;

// ============================================================================
// Network
// ============================================================================

/// Administratively defined settings of a network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Nodes should prefer their LAN address when talking to each other
    #[serde(default)]
    pub is_local: bool,
    #[serde(default)]
    pub is_dual_stack: bool,
    /// LAN range used when `is_local` is set
    pub local_range: Option<String>,
    /// IPv4 range tunnel addresses are allocated from
    pub address_range: Option<String>,
    /// IPv6 range tunnel addresses are allocated from on dual-stack networks
    pub address_range6: Option<String>,
    /// Accept registrations without a valid key, quarantined as pending
    #[serde(default)]
    pub allow_manual_sign_up: bool,
    pub default_check_in_interval: u32,
    pub default_keepalive: u32,
    pub default_listen_port: u16,
    pub default_interface: String,
}

impl Default for NetworkSpec {
    fn default() -> Self {
        Self {
            is_local: false,
            is_dual_stack: false,
            local_range: None,
            address_range: None,
            address_range6: None,
            allow_manual_sign_up: false,
            default_check_in_interval: 30,
            default_keepalive: 20,
            default_listen_port: 51821,
            default_interface: String::new(),
        }
    }
}

impl NetworkSpec {
    pub fn validate(&self) -> Result<()> {
        if let Some(range) = &self.local_range {
            parse_cidr(range, "local range")?;
        }
        if let Some(range) = &self.address_range {
            range
                .parse::<Ipv4Network>()
                .map_err(|e| Error::invalid(format!("address range {}: {}", range, e)))?;
        }
        if let Some(range) = &self.address_range6 {
            range
                .parse::<Ipv6Network>()
                .map_err(|e| Error::invalid(format!("address range6 {}: {}", range, e)))?;
        }
        if self.default_check_in_interval == 0 {
            return Err(Error::invalid("default check-in interval must be positive"));
        }
        Ok(())
    }
}

/// A logical mesh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
    pub spec: NetworkSpec,
    /// Bumped by every write that can change what peers see
    pub topology_version: u64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Registration credential for a network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessKey {
    pub network: String,
    pub name: String,
    pub value: String,
    pub uses_remaining: u32,
    pub expires_at: Option<i64>,
    pub created_at: i64,
}

impl AccessKey {
    pub fn is_valid_at(&self, now: i64) -> bool {
        self.uses_remaining > 0 && self.expires_at.map_or(true, |exp| exp > now)
    }
}

// ============================================================================
// Node
// ============================================================================

/// Node configuration, reported by the node and held authoritatively here
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    #[serde(default)]
    pub name: String,
    pub address: Option<Ipv4Addr>,
    pub address6: Option<Ipv6Addr>,
    pub endpoint: Option<IpAddr>,
    pub listen_port: u16,
    pub local_address: Option<IpAddr>,
    #[serde(default)]
    pub udp_hole_punch: bool,
    pub public_key: String,
    pub keepalive: u32,
    #[serde(default)]
    pub interface: String,
    #[serde(default)]
    pub post_up: String,
    #[serde(default)]
    pub post_down: String,
    pub check_in_interval: u32,
}

impl NodeSpec {
    pub fn validate(&self) -> Result<()> {
        if !self.public_key.is_empty() {
            validate_public_key(&self.public_key)?;
        }
        if self.interface.len() > 15 {
            return Err(Error::invalid(format!(
                "interface name {} exceeds 15 characters",
                self.interface
            )));
        }
        Ok(())
    }
}

/// Gateway roles of a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewaySettings {
    #[serde(default)]
    pub is_ingress_gateway: bool,
    pub ingress_gateway_range: Option<String>,
    #[serde(default)]
    pub is_egress_gateway: bool,
    pub egress_gateway_range: Option<String>,
}

impl GatewaySettings {
    pub fn validate(&self) -> Result<()> {
        if let Some(range) = &self.ingress_gateway_range {
            parse_cidr(range, "ingress gateway range")?;
        }
        if let Some(range) = &self.egress_gateway_range {
            parse_cidr(range, "egress gateway range")?;
        }
        if self.is_egress_gateway && self.egress_gateway_range.is_none() {
            return Err(Error::invalid("egress gateway requires a range"));
        }
        Ok(())
    }
}

/// Authoritative record of a mesh participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub network: String,
    pub mac_address: String,
    pub spec: NodeSpec,
    pub gateway: GatewaySettings,
    pub is_pending: bool,
    /// SHA-256 digest of the node password
    #[serde(default, skip_serializing)]
    pub password_hash: String,
    /// Unix seconds after which the node must re-register, 0 for never
    pub expires_at: i64,
    pub created_at: i64,
    pub updated_at: i64,
    pub generation: i64,
}

impl Node {
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at != 0 && self.expires_at <= now
    }

    pub fn key(&self) -> NodeKey {
        NodeKey::new(&self.network, &self.mac_address)
    }
}

/// Registry key of a node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub network: String,
    pub mac_address: String,
}

impl NodeKey {
    pub fn new(network: &str, mac_address: &str) -> Self {
        Self {
            network: network.to_string(),
            mac_address: mac_address.to_string(),
        }
    }
}

impl std::fmt::Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.network, self.mac_address)
    }
}

/// A request to join a network
#[derive(Debug, Clone, Default)]
pub struct NodeRegistration {
    pub network: String,
    pub mac_address: String,
    pub access_key: String,
    /// Chosen by the node; generated when empty
    pub password: String,
    pub spec: NodeSpec,
}

/// Field changes requested by a node; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct NodeUpdate {
    pub name: Option<String>,
    pub address: Option<Ipv4Addr>,
    pub address6: Option<Ipv6Addr>,
    pub endpoint: Option<IpAddr>,
    pub listen_port: Option<u16>,
    pub local_address: Option<IpAddr>,
    pub udp_hole_punch: Option<bool>,
    pub public_key: Option<String>,
    pub keepalive: Option<u32>,
    pub interface: Option<String>,
    pub post_up: Option<String>,
    pub post_down: Option<String>,
    pub check_in_interval: Option<u32>,
    pub password: Option<String>,
}

impl NodeUpdate {
    /// Apply the update on top of an existing spec
    pub fn apply(&self, spec: &NodeSpec) -> NodeSpec {
        let mut next = spec.clone();
        if let Some(v) = &self.name {
            next.name = v.clone();
        }
        if let Some(v) = self.address {
            next.address = Some(v);
        }
        if let Some(v) = self.address6 {
            next.address6 = Some(v);
        }
        if let Some(v) = self.endpoint {
            next.endpoint = Some(v);
        }
        if let Some(v) = self.listen_port {
            next.listen_port = v;
        }
        if let Some(v) = self.local_address {
            next.local_address = Some(v);
        }
        if let Some(v) = self.udp_hole_punch {
            next.udp_hole_punch = v;
        }
        if let Some(v) = &self.public_key {
            next.public_key = v.clone();
        }
        if let Some(v) = self.keepalive {
            next.keepalive = v;
        }
        if let Some(v) = &self.interface {
            next.interface = v.clone();
        }
        if let Some(v) = &self.post_up {
            next.post_up = v.clone();
        }
        if let Some(v) = &self.post_down {
            next.post_down = v.clone();
        }
        if let Some(v) = self.check_in_interval {
            next.check_in_interval = v;
        }
        next
    }
}

/// Node record joined with the network settings it needs to build its interface
#[derive(Debug, Clone, Serialize)]
pub struct NodeConfig {
    pub node: Node,
    pub is_local: bool,
    pub is_dual_stack: bool,
    pub local_range: Option<String>,
    pub sync: SyncState,
}

// ============================================================================
// Staleness
// ============================================================================

/// Per-node synchronization bookkeeping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncState {
    /// Topology version of the last completed peer fetch
    pub synced_version: u64,
    /// Unix seconds of the last check-in
    pub last_contact: Option<i64>,
}

// ============================================================================
// Check-in
// ============================================================================

/// A node's view of itself, sent on every check-in
#[derive(Debug, Clone, Default)]
pub struct CheckInReport {
    pub network: String,
    pub mac_address: String,
    pub password: String,
    pub public_key: String,
    pub address: Option<Ipv4Addr>,
    pub address6: Option<Ipv6Addr>,
    pub endpoint: Option<IpAddr>,
    pub local_address: Option<IpAddr>,
    pub listen_port: Option<u16>,
    pub keepalive: Option<u32>,
    pub interface: Option<String>,
    pub post_up: Option<String>,
    pub post_down: Option<String>,
}

/// Reconciliation result telling a node what to refresh
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInVerdict {
    pub success: bool,
    pub need_peer_update: bool,
    pub need_config_update: bool,
    pub need_key_update: bool,
    pub need_delete: bool,
    pub is_pending: bool,
    pub message: String,
}

impl CheckInVerdict {
    /// The node is unknown here and should discard its configuration
    pub fn unregistered() -> Self {
        Self {
            success: false,
            need_delete: true,
            message: "unregistered".to_string(),
            ..Default::default()
        }
    }

    /// The node exists but is quarantined until promoted
    pub fn awaiting_approval() -> Self {
        Self {
            success: false,
            is_pending: true,
            message: "awaiting approval".to_string(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Peers
// ============================================================================

/// What a node is told about one of its mesh peers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerDescriptor {
    pub address: Option<Ipv4Addr>,
    pub address6: Option<Ipv6Addr>,
    pub endpoint: Option<IpAddr>,
    pub public_key: String,
    pub keepalive: u32,
    pub listen_port: u16,
    pub local_address: Option<IpAddr>,
    pub is_egress_gateway: bool,
    pub egress_gateway_range: Option<String>,
}

impl From<&Node> for PeerDescriptor {
    fn from(node: &Node) -> Self {
        Self {
            address: node.spec.address,
            address6: node.spec.address6,
            endpoint: node.spec.endpoint,
            public_key: node.spec.public_key.clone(),
            keepalive: node.spec.keepalive,
            listen_port: node.spec.listen_port,
            local_address: node.spec.local_address,
            is_egress_gateway: node.gateway.is_egress_gateway,
            egress_gateway_range: node.gateway.egress_gateway_range.clone(),
        }
    }
}

/// Client reachable through an ingress gateway without joining the mesh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtPeer {
    pub client_id: String,
    pub network: String,
    /// Hardware address of the ingress gateway node serving this client
    pub ingress_gateway: String,
    pub address: Option<Ipv4Addr>,
    pub address6: Option<Ipv6Addr>,
    pub endpoint: Option<IpAddr>,
    pub public_key: String,
    pub keepalive: u32,
    pub listen_port: u16,
    pub local_address: Option<IpAddr>,
    pub is_pending: bool,
    pub created_at: i64,
}

impl ExtPeer {
    pub fn validate(&self) -> Result<()> {
        validate_mac(&self.ingress_gateway)?;
        validate_public_key(&self.public_key)?;
        if self.address.is_none() && self.address6.is_none() {
            return Err(Error::invalid("external peer requires an address"));
        }
        Ok(())
    }
}

/// What a gateway node is told about one of its external peers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtPeerDescriptor {
    pub address: Option<Ipv4Addr>,
    pub address6: Option<Ipv6Addr>,
    pub endpoint: Option<IpAddr>,
    pub public_key: String,
    pub keepalive: u32,
    pub listen_port: u16,
    pub local_address: Option<IpAddr>,
}

impl From<&ExtPeer> for ExtPeerDescriptor {
    fn from(peer: &ExtPeer) -> Self {
        Self {
            address: peer.address,
            address6: peer.address6,
            endpoint: peer.endpoint,
            public_key: peer.public_key.clone(),
            keepalive: peer.keepalive,
            listen_port: peer.listen_port,
            local_address: peer.local_address,
        }
    }
}

// ============================================================================
// Validation helpers
// ============================================================================

/// Network names are short DNS-friendly labels
pub fn validate_network_name(name: &str) -> Result<()> {
    if name.is_empty() || name.len() > MAX_NETWORK_NAME_LEN {
        return Err(Error::invalid(format!(
            "network name must be 1-{} characters",
            MAX_NETWORK_NAME_LEN
        )));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(Error::invalid(format!(
            "network name {} may only contain letters, digits and '-'",
            name
        )));
    }
    Ok(())
}

/// Hardware addresses are hex groups separated by ':' or '-'
pub fn validate_mac(mac: &str) -> Result<()> {
    if mac.is_empty() {
        return Err(Error::invalid("hardware address is required"));
    }
    if mac.len() > MAX_MAC_LEN {
        return Err(Error::invalid("hardware address is too long"));
    }
    if !mac
        .chars()
        .all(|c| c.is_ascii_hexdigit() || c == ':' || c == '-')
    {
        return Err(Error::invalid(format!("malformed hardware address {}", mac)));
    }
    Ok(())
}

fn parse_cidr(range: &str, what: &str) -> Result<IpNetwork> {
    range
        .parse::<IpNetwork>()
        .map_err(|e| Error::invalid(format!("{} {}: {}", what, range, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(mac: &str) -> Node {
        Node {
            network: "lab".to_string(),
            mac_address: mac.to_string(),
            spec: NodeSpec {
                address: Some("10.10.0.2".parse().unwrap()),
                public_key: "key".to_string(),
                listen_port: 51821,
                keepalive: 20,
                ..Default::default()
            },
            gateway: GatewaySettings {
                is_egress_gateway: true,
                egress_gateway_range: Some("192.168.1.0/24".to_string()),
                ..Default::default()
            },
            is_pending: false,
            password_hash: String::new(),
            expires_at: 0,
            created_at: 0,
            updated_at: 0,
            generation: 1,
        }
    }

    #[test]
    fn test_mac_validation() {
        assert!(validate_mac("AA:BB").is_ok());
        assert!(validate_mac("aa-bb-cc-dd-ee-ff").is_ok());
        assert!(validate_mac("").is_err());
        assert!(validate_mac("zz:11").is_err());
        assert!(validate_mac("AA BB").is_err());
    }

    #[test]
    fn test_network_name_validation() {
        assert!(validate_network_name("lab").is_ok());
        assert!(validate_network_name("home-net").is_ok());
        assert!(validate_network_name("").is_err());
        assert!(validate_network_name("much-too-long-name").is_err());
        assert!(validate_network_name("lab_1").is_err());
    }

    #[test]
    fn test_network_spec_validation() {
        let spec = NetworkSpec {
            address_range: Some("10.10.0.0/24".to_string()),
            address_range6: Some("fd00::/64".to_string()),
            ..Default::default()
        };
        assert!(spec.validate().is_ok());

        let bad = NetworkSpec {
            address_range: Some("fd00::/64".to_string()),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_gateway_validation() {
        let gw = GatewaySettings {
            is_egress_gateway: true,
            egress_gateway_range: None,
            ..Default::default()
        };
        assert!(gw.validate().is_err());

        let gw = GatewaySettings {
            is_ingress_gateway: true,
            ingress_gateway_range: Some("not-a-cidr".to_string()),
            ..Default::default()
        };
        assert!(gw.validate().is_err());
    }

    #[test]
    fn test_access_key_validity() {
        let key = AccessKey {
            network: "lab".to_string(),
            name: "k".to_string(),
            value: "v".to_string(),
            uses_remaining: 1,
            expires_at: Some(100),
            created_at: 0,
        };
        assert!(key.is_valid_at(99));
        assert!(!key.is_valid_at(100));

        let spent = AccessKey { uses_remaining: 0, expires_at: None, ..key };
        assert!(!spent.is_valid_at(0));
    }

    #[test]
    fn test_update_apply_leaves_unset_fields() {
        let spec = node("AA:BB").spec;
        let update = NodeUpdate {
            listen_port: Some(51999),
            post_up: Some("iptables -A FORWARD".to_string()),
            ..Default::default()
        };
        let next = update.apply(&spec);
        assert_eq!(next.listen_port, 51999);
        assert_eq!(next.post_up, "iptables -A FORWARD");
        assert_eq!(next.address, spec.address);
        assert_eq!(next.public_key, spec.public_key);
    }

    #[test]
    fn test_peer_descriptor_projection() {
        let n = node("AA:BB");
        let peer = PeerDescriptor::from(&n);
        assert_eq!(peer.address, n.spec.address);
        assert!(peer.is_egress_gateway);
        assert_eq!(peer.egress_gateway_range.as_deref(), Some("192.168.1.0/24"));
    }

    #[test]
    fn test_verdict_constructors() {
        let v = CheckInVerdict::unregistered();
        assert!(!v.success && v.need_delete && !v.is_pending);

        let v = CheckInVerdict::awaiting_approval();
        assert!(!v.success && v.is_pending && !v.need_peer_update);
    }
}
