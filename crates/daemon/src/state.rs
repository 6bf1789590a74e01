//! State management for the daemon
//!
//! `StateManager` fronts the network and node registries. Every operation that
//! mutates a single node runs under that node's critical section, obtained with
//! [`StateManager::lock_node`].

use crate::config::DaemonConfig;
use crate::staleness::StalenessTracker;
use dashmap::DashMap;
use meshcoord_common::{
    crypto::{generate_secret, hash_secret, verify_secret},
    now_epoch_secs,
    types::*,
    Database, Error, Result,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info, warn};

/// Bytes of entropy in generated access key values
const ACCESS_KEY_ENTROPY: usize = 24;

/// State manager for networks, nodes and external peers
#[derive(Clone)]
pub struct StateManager {
    config: DaemonConfig,
    db: Database,
    staleness: StalenessTracker,
    /// Per-node critical sections
    node_locks: Arc<DashMap<NodeKey, Arc<Mutex<()>>>>,
    started_at: Instant,
}

impl StateManager {
    /// Open the registry database named by the configuration
    pub fn new(config: &DaemonConfig) -> Result<Self> {
        let db = Database::open(config.db_path())?;
        Ok(Self::with_database(config, db))
    }

    /// Build a state manager over an already opened database
    pub fn with_database(config: &DaemonConfig, db: Database) -> Self {
        Self {
            config: config.clone(),
            staleness: StalenessTracker::new(db.clone()),
            db,
            node_locks: Arc::new(DashMap::new()),
            started_at: Instant::now(),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &DaemonConfig {
        &self.config
    }

    /// Get database
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Get the staleness tracker
    pub fn staleness(&self) -> &StalenessTracker {
        &self.staleness
    }

    /// Seconds since the daemon started
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Enter the critical section of a node.
    ///
    /// The guard must be held across the read and the write of any
    /// read-modify-write on the node record.
    pub async fn lock_node(&self, network: &str, mac_address: &str) -> OwnedMutexGuard<()> {
        let lock = self
            .node_locks
            .entry(NodeKey::new(network, mac_address))
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }

    /// Drop a node's lock entry while its guard is still held.
    ///
    /// The entry survives when any other task holds a clone of the mutex,
    /// so queued waiters and later callers keep sharing one critical section.
    fn forget_node_lock(&self, network: &str, mac_address: &str, guard: OwnedMutexGuard<()>) {
        // The map and `guard` account for two references
        self.node_locks
            .remove_if(&NodeKey::new(network, mac_address), |_, lock| {
                Arc::strong_count(lock) == 2
            });
        drop(guard);
    }

    // ========================================================================
    // Network operations
    // ========================================================================

    /// Create a new network
    pub fn create_network(&self, name: &str, spec: NetworkSpec) -> Result<Network> {
        validate_network_name(name)?;
        spec.validate()?;

        let network = self.db.create_network(name, &spec)?;
        info!("Created network {}", name);
        Ok(network)
    }

    /// Get a network by name
    pub fn get_network(&self, name: &str) -> Result<Option<Network>> {
        self.db.get_network(name)
    }

    /// Get a network or fail with `NotFound`
    pub fn require_network(&self, name: &str) -> Result<Network> {
        self.db
            .get_network(name)?
            .ok_or_else(|| Error::not_found("network", name))
    }

    /// List all networks
    pub fn list_networks(&self) -> Result<Vec<Network>> {
        self.db.list_networks()
    }

    // ========================================================================
    // Access key operations
    // ========================================================================

    /// Issue a registration key with `uses` uses and an optional lifetime
    pub fn create_access_key(
        &self,
        network: &str,
        name: &str,
        uses: u32,
        ttl_secs: Option<i64>,
    ) -> Result<AccessKey> {
        self.require_network(network)?;
        if name.is_empty() {
            return Err(Error::invalid("access key name is required"));
        }
        if uses == 0 {
            return Err(Error::invalid("access key needs at least one use"));
        }
        if matches!(ttl_secs, Some(ttl) if ttl <= 0) {
            return Err(Error::invalid("access key lifetime must be positive"));
        }

        let now = now_epoch_secs();
        let key = AccessKey {
            network: network.to_string(),
            name: name.to_string(),
            value: generate_secret(ACCESS_KEY_ENTROPY),
            uses_remaining: uses,
            expires_at: ttl_secs.map(|ttl| now + ttl),
            created_at: now,
        };
        self.db.insert_access_key(&key)?;

        info!("Created access key {}/{} with {} uses", network, name, uses);
        Ok(key)
    }

    // ========================================================================
    // Node operations
    // ========================================================================

    /// Get a node by network and hardware address
    pub fn get_node(&self, network: &str, mac_address: &str) -> Result<Option<Node>> {
        self.db.get_node(network, mac_address)
    }

    /// Get a node or fail with `NotFound`
    pub fn require_node(&self, network: &str, mac_address: &str) -> Result<Node> {
        self.db
            .get_node(network, mac_address)?
            .ok_or_else(|| Error::not_found("node", NodeKey::new(network, mac_address).to_string()))
    }

    /// Load a node and check the secret it presented
    pub fn authenticate_node(&self, network: &str, mac_address: &str, password: &str) -> Result<Node> {
        let node = self.require_node(network, mac_address)?;
        verify_node_password(&node, password)?;
        Ok(node)
    }

    /// Node record joined with the network settings it needs locally
    pub fn read_node(&self, network: &str, mac_address: &str, password: &str) -> Result<NodeConfig> {
        let net = self.require_network(network)?;
        let node = self.authenticate_node(network, mac_address, password)?;
        let sync = self.staleness.sync_state(network, mac_address)?;

        Ok(NodeConfig {
            node,
            is_local: net.spec.is_local,
            is_dual_stack: net.spec.is_dual_stack,
            local_range: net.spec.local_range,
            sync,
        })
    }

    /// Nodes of a network with their sync state
    pub fn list_nodes(&self, network: &str) -> Result<Vec<(Node, SyncState)>> {
        self.require_network(network)?;
        self.db.nodes_with_sync(network)
    }

    /// Apply node-requested field changes.
    ///
    /// The topology version is bumped only when the change is visible to
    /// peers.
    pub async fn update_node(
        &self,
        network: &str,
        mac_address: &str,
        password: &str,
        update: NodeUpdate,
    ) -> Result<Node> {
        let _guard = self.lock_node(network, mac_address).await;

        let node = self.authenticate_node(network, mac_address, password)?;
        let spec = update.apply(&node.spec);
        spec.validate()?;
        if let Some(password) = &update.password {
            if password.is_empty() {
                return Err(Error::invalid("password must not be empty"));
            }
        }

        let mut next = node.clone();
        next.spec = spec;
        if let Some(password) = &update.password {
            next.password_hash = hash_secret(password);
        }
        let peer_visible = PeerDescriptor::from(&node) != PeerDescriptor::from(&next);

        let (node, version) = self.db.write_node(&next, peer_visible)?;
        match version {
            Some(v) => info!("Updated node {} (topology version {})", node.key(), v),
            None => debug!("Updated node {} without topology change", node.key()),
        }
        Ok(node)
    }

    /// Delete a node
    pub async fn delete_node(&self, network: &str, mac_address: &str, password: &str) -> Result<()> {
        let guard = self.lock_node(network, mac_address).await;

        self.authenticate_node(network, mac_address, password)?;
        let version = self
            .db
            .delete_node(network, mac_address)?
            .ok_or_else(|| Error::not_found("node", NodeKey::new(network, mac_address).to_string()))?;

        self.forget_node_lock(network, mac_address, guard);

        info!(
            "Deleted node {}/{} (topology version {})",
            network, mac_address, version
        );
        Ok(())
    }

    /// Lift a pending node out of quarantine
    pub async fn promote_node(&self, network: &str, mac_address: &str) -> Result<Node> {
        let _guard = self.lock_node(network, mac_address).await;

        let mut node = self.require_node(network, mac_address)?;
        if !node.is_pending {
            debug!("Node {} is already trusted", node.key());
            return Ok(node);
        }

        node.is_pending = false;
        let (node, version) = self.db.write_node(&node, true)?;
        info!(
            "Promoted node {} (topology version {})",
            node.key(),
            version.unwrap_or_default()
        );
        Ok(node)
    }

    /// Replace the gateway roles of a node
    pub async fn set_gateway(
        &self,
        network: &str,
        mac_address: &str,
        gateway: GatewaySettings,
    ) -> Result<Node> {
        gateway.validate()?;
        let _guard = self.lock_node(network, mac_address).await;

        let mut node = self.require_node(network, mac_address)?;
        node.gateway = gateway;
        let (node, version) = self.db.write_node(&node, true)?;
        info!(
            "Set gateway roles of {} (ingress: {}, egress: {}, topology version {})",
            node.key(),
            node.gateway.is_ingress_gateway,
            node.gateway.is_egress_gateway,
            version.unwrap_or_default()
        );
        Ok(node)
    }

    // ========================================================================
    // External peer operations
    // ========================================================================

    /// Attach an external client to an ingress gateway node
    pub async fn create_ext_peer(&self, mut peer: ExtPeer) -> Result<ExtPeer> {
        self.require_network(&peer.network)?;
        if peer.client_id.is_empty() {
            return Err(Error::invalid("client id is required"));
        }
        peer.validate()?;

        // Hold the gateway steady so its roles cannot change under us
        let _guard = self.lock_node(&peer.network, &peer.ingress_gateway).await;
        let gateway = self.require_node(&peer.network, &peer.ingress_gateway)?;
        if !gateway.gateway.is_ingress_gateway {
            return Err(Error::invalid(format!(
                "node {} is not an ingress gateway",
                gateway.key()
            )));
        }

        peer.created_at = now_epoch_secs();
        let version = self.db.insert_ext_peer(&peer)?;
        info!(
            "Created external peer {}/{} via {} (topology version {})",
            peer.network, peer.client_id, peer.ingress_gateway, version
        );
        Ok(peer)
    }

    /// Remove an external client
    pub fn delete_ext_peer(&self, network: &str, client_id: &str) -> Result<()> {
        let version = self
            .db
            .delete_ext_peer(network, client_id)?
            .ok_or_else(|| Error::not_found("external peer", format!("{}/{}", network, client_id)))?;
        info!(
            "Deleted external peer {}/{} (topology version {})",
            network, client_id, version
        );
        Ok(())
    }

    // ========================================================================
    // Overdue nodes
    // ========================================================================

    /// Nodes of `network` that have not checked in since `cutoff`
    pub fn nodes_overdue_since(&self, network: &str, cutoff: i64) -> Result<Vec<Node>> {
        self.require_network(network)?;
        self.db.nodes_overdue_since(network, cutoff)
    }

    /// Nodes silent for longer than their own check-in interval times the
    /// configured overdue multiple
    pub fn overdue_nodes(&self, network: &str, now: i64) -> Result<Vec<Node>> {
        let multiple = i64::from(self.config.sweep.overdue_multiple.max(1));
        let fallback = i64::from(self.config.defaults.check_in_interval_secs);

        Ok(self
            .list_nodes(network)?
            .into_iter()
            .filter(|(node, sync)| {
                let interval = match node.spec.check_in_interval {
                    0 => fallback,
                    secs => i64::from(secs),
                };
                let last_seen = sync.last_contact.unwrap_or(node.created_at);
                last_seen < now - interval * multiple
            })
            .map(|(node, _)| node)
            .collect())
    }
}

/// Check the secret a node presented on an authenticated call
pub fn verify_node_password(node: &Node, password: &str) -> Result<()> {
    if password.is_empty() || !verify_secret(password, &node.password_hash) {
        warn!("Rejected credentials for node {}", node.key());
        return Err(Error::PermissionDenied(format!(
            "invalid credentials for node {}",
            node.key()
        )));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn test_state() -> StateManager {
        let db = Database::open_memory().unwrap();
        StateManager::with_database(&DaemonConfig::default(), db)
    }

    pub(crate) fn test_pubkey(seed: u8) -> String {
        use base64::Engine as _;
        base64::engine::general_purpose::STANDARD.encode([seed; 32])
    }

    /// Insert a trusted node directly, bypassing admission
    pub(crate) fn seed_node(state: &StateManager, network: &str, mac: &str, address: &str) -> Node {
        let now = now_epoch_secs();
        let node = Node {
            network: network.to_string(),
            mac_address: mac.to_string(),
            spec: NodeSpec {
                address: Some(address.parse().unwrap()),
                endpoint: Some("203.0.113.1".parse().unwrap()),
                listen_port: 51821,
                public_key: test_pubkey(address.bytes().last().unwrap_or(0)),
                keepalive: 20,
                interface: "nm-lab".to_string(),
                check_in_interval: 30,
                ..Default::default()
            },
            gateway: GatewaySettings::default(),
            is_pending: false,
            password_hash: hash_secret("secret"),
            expires_at: 0,
            created_at: now,
            updated_at: now,
            generation: 1,
        };
        state.db().insert_node(&node, None).unwrap();
        state.require_node(network, mac).unwrap()
    }

    #[test]
    fn test_create_network_validates() {
        let state = test_state();
        assert!(state.create_network("lab", NetworkSpec::default()).is_ok());
        assert!(matches!(
            state.create_network("lab", NetworkSpec::default()),
            Err(Error::AlreadyExists { .. })
        ));
        assert!(matches!(
            state.create_network("bad name", NetworkSpec::default()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_access_key_creation() {
        let state = test_state();
        assert!(matches!(
            state.create_access_key("lab", "k", 1, None),
            Err(Error::NotFound { .. })
        ));

        state.create_network("lab", NetworkSpec::default()).unwrap();
        let key = state.create_access_key("lab", "k", 2, Some(60)).unwrap();
        assert_eq!(key.uses_remaining, 2);
        assert!(key.expires_at.is_some());
        assert!(!key.value.is_empty());
        assert!(state.create_access_key("lab", "zero", 0, None).is_err());
    }

    #[tokio::test]
    async fn test_update_bumps_only_for_peer_visible_changes() {
        let state = test_state();
        state.create_network("lab", NetworkSpec::default()).unwrap();
        seed_node(&state, "lab", "AA:01", "10.0.0.1");
        let v0 = state.db().topology_version("lab").unwrap().unwrap();

        let update = NodeUpdate {
            post_up: Some("echo up".to_string()),
            ..Default::default()
        };
        state.update_node("lab", "AA:01", "secret", update).await.unwrap();
        assert_eq!(state.db().topology_version("lab").unwrap(), Some(v0));

        let update = NodeUpdate {
            listen_port: Some(51999),
            ..Default::default()
        };
        let node = state.update_node("lab", "AA:01", "secret", update).await.unwrap();
        assert_eq!(node.spec.listen_port, 51999);
        assert_eq!(state.db().topology_version("lab").unwrap(), Some(v0 + 1));
    }

    #[tokio::test]
    async fn test_update_rejects_bad_key_without_writing() {
        let state = test_state();
        state.create_network("lab", NetworkSpec::default()).unwrap();
        let before = seed_node(&state, "lab", "AA:01", "10.0.0.1");

        let update = NodeUpdate {
            public_key: Some("not-a-key".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            state.update_node("lab", "AA:01", "secret", update).await,
            Err(Error::InvalidArgument(_))
        ));
        let after = state.require_node("lab", "AA:01").unwrap();
        assert_eq!(after.generation, before.generation);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_node() {
        let state = test_state();
        state.create_network("lab", NetworkSpec::default()).unwrap();
        assert!(matches!(
            state.update_node("lab", "AA:99", "secret", NodeUpdate::default()).await,
            Err(Error::NotFound { .. })
        ));
        assert!(matches!(
            state.delete_node("lab", "AA:99", "secret").await,
            Err(Error::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_node_calls_require_password() {
        let state = test_state();
        state.create_network("lab", NetworkSpec::default()).unwrap();
        let before = seed_node(&state, "lab", "AA:01", "10.0.0.1");
        let v0 = state.db().topology_version("lab").unwrap();

        for password in ["", "wrong"] {
            let hijack = NodeUpdate {
                public_key: Some(test_pubkey(99)),
                endpoint: Some("198.51.100.66".parse().unwrap()),
                password: Some("attacker".to_string()),
                ..Default::default()
            };
            assert!(matches!(
                state.update_node("lab", "AA:01", password, hijack).await,
                Err(Error::PermissionDenied(_))
            ));
            assert!(matches!(
                state.delete_node("lab", "AA:01", password).await,
                Err(Error::PermissionDenied(_))
            ));
            assert!(matches!(
                state.read_node("lab", "AA:01", password),
                Err(Error::PermissionDenied(_))
            ));
        }

        let after = state.require_node("lab", "AA:01").unwrap();
        assert_eq!(after.spec.public_key, before.spec.public_key);
        assert_eq!(after.spec.endpoint, before.spec.endpoint);
        assert_eq!(after.password_hash, before.password_hash);
        assert_eq!(after.generation, before.generation);
        assert_eq!(state.db().topology_version("lab").unwrap(), v0);

        let config = state.read_node("lab", "AA:01", "secret").unwrap();
        assert_eq!(config.node.mac_address, "AA:01");
        state.delete_node("lab", "AA:01", "secret").await.unwrap();
        assert!(state.get_node("lab", "AA:01").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_keeps_lock_shared_with_waiters() {
        use std::time::Duration;
        use tokio::sync::oneshot;

        let state = test_state();
        state.create_network("lab", NetworkSpec::default()).unwrap();
        seed_node(&state, "lab", "AA:01", "10.0.0.1");

        let held = state.lock_node("lab", "AA:01").await;

        let deleter = {
            let state = state.clone();
            tokio::spawn(async move { state.delete_node("lab", "AA:01", "secret").await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        let (acquired_tx, acquired_rx) = oneshot::channel();
        let (release_tx, release_rx) = oneshot::channel::<()>();
        let waiter = {
            let state = state.clone();
            tokio::spawn(async move {
                let _guard = state.lock_node("lab", "AA:01").await;
                let _ = acquired_tx.send(());
                let _ = release_rx.await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        drop(held);
        deleter.await.unwrap().unwrap();
        acquired_rx.await.unwrap();

        // The waiter holds the node's section, so nobody else may enter it
        let third = tokio::time::timeout(
            Duration::from_millis(200),
            state.lock_node("lab", "AA:01"),
        )
        .await;
        assert!(third.is_err());

        release_tx.send(()).unwrap();
        waiter.await.unwrap();

        // Once nobody references it, deletion drops the entry
        seed_node(&state, "lab", "AA:01", "10.0.0.1");
        state.delete_node("lab", "AA:01", "secret").await.unwrap();
        assert!(!state.node_locks.contains_key(&NodeKey::new("lab", "AA:01")));
    }

    #[tokio::test]
    async fn test_promote_bumps_once() {
        let state = test_state();
        state.create_network("lab", NetworkSpec::default()).unwrap();
        let mut node = seed_node(&state, "lab", "AA:01", "10.0.0.1");
        node.is_pending = true;
        state.db().write_node(&node, false).unwrap();
        let v0 = state.db().topology_version("lab").unwrap().unwrap();

        let promoted = state.promote_node("lab", "AA:01").await.unwrap();
        assert!(!promoted.is_pending);
        assert_eq!(state.db().topology_version("lab").unwrap(), Some(v0 + 1));

        state.promote_node("lab", "AA:01").await.unwrap();
        assert_eq!(state.db().topology_version("lab").unwrap(), Some(v0 + 1));
    }

    #[tokio::test]
    async fn test_ext_peer_requires_ingress_gateway() {
        let state = test_state();
        state.create_network("lab", NetworkSpec::default()).unwrap();
        seed_node(&state, "lab", "AA:01", "10.0.0.1");

        let peer = ExtPeer {
            client_id: "laptop".to_string(),
            network: "lab".to_string(),
            ingress_gateway: "AA:01".to_string(),
            address: Some("10.0.0.200".parse().unwrap()),
            address6: None,
            endpoint: None,
            public_key: test_pubkey(9),
            keepalive: 20,
            listen_port: 0,
            local_address: None,
            is_pending: false,
            created_at: 0,
        };
        assert!(matches!(
            state.create_ext_peer(peer.clone()).await,
            Err(Error::InvalidArgument(_))
        ));

        let gateway = GatewaySettings {
            is_ingress_gateway: true,
            ingress_gateway_range: Some("10.0.0.0/24".to_string()),
            ..Default::default()
        };
        state.set_gateway("lab", "AA:01", gateway).await.unwrap();
        state.create_ext_peer(peer).await.unwrap();
        state.delete_ext_peer("lab", "laptop").unwrap();
        assert!(state.delete_ext_peer("lab", "laptop").is_err());
    }

    #[tokio::test]
    async fn test_overdue_nodes() {
        let state = test_state();
        state.create_network("lab", NetworkSpec::default()).unwrap();
        seed_node(&state, "lab", "AA:01", "10.0.0.1");
        seed_node(&state, "lab", "AA:02", "10.0.0.2");

        let now = now_epoch_secs();
        state.staleness().record_contact("lab", "AA:01", now - 1000).unwrap();
        state.staleness().record_contact("lab", "AA:02", now).unwrap();

        // interval 30 x multiple 3
        let overdue = state.overdue_nodes("lab", now).unwrap();
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].mac_address, "AA:01");

        let since = state.nodes_overdue_since("lab", now + 1).unwrap();
        assert_eq!(since.len(), 2);
        assert!(state.nodes_overdue_since("nope", now).is_err());
    }
}
