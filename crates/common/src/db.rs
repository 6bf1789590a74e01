//! SQLite registry for networks, nodes and synchronization state
//!
//! Every write that can change what peers see bumps the owning network's
//! topology version inside the same transaction, so a reader never observes
//! the new record without the new version.

use crate::types::*;
use crate::{now_epoch_secs, Error, Result};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

const NODE_COLUMNS: &str = "n.network, n.mac_address, n.spec, n.gateway, n.is_pending, \
     n.password_hash, n.expires_at, n.created_at, n.updated_at, n.generation";

/// Database wrapper for registry persistence
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open or create database at path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;

        // Enable WAL mode for better concurrency
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };

        db.init_schema()?;

        info!("Opened database at {:?}", path.as_ref());
        Ok(db)
    }

    /// Open in-memory database (for testing)
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        let conn = self.conn.lock();

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS networks (
                name TEXT PRIMARY KEY,
                spec TEXT NOT NULL,
                topology_version INTEGER NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS access_keys (
                network TEXT NOT NULL,
                name TEXT NOT NULL,
                value TEXT NOT NULL,
                uses_remaining INTEGER NOT NULL,
                expires_at INTEGER,
                created_at INTEGER NOT NULL,
                PRIMARY KEY (network, name)
            );
            CREATE INDEX IF NOT EXISTS idx_access_keys_value ON access_keys(network, value);

            CREATE TABLE IF NOT EXISTS nodes (
                network TEXT NOT NULL,
                mac_address TEXT NOT NULL,
                spec TEXT NOT NULL,
                gateway TEXT NOT NULL DEFAULT '{}',
                is_pending INTEGER NOT NULL DEFAULT 0,
                password_hash TEXT NOT NULL,
                expires_at INTEGER NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                generation INTEGER NOT NULL DEFAULT 1,
                PRIMARY KEY (network, mac_address)
            );
            CREATE INDEX IF NOT EXISTS idx_nodes_address ON nodes(network, json_extract(spec, '$.address'));

            -- External clients served by an ingress gateway node
            CREATE TABLE IF NOT EXISTS ext_peers (
                network TEXT NOT NULL,
                client_id TEXT NOT NULL,
                ingress_gateway TEXT NOT NULL,
                record TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                PRIMARY KEY (network, client_id)
            );
            CREATE INDEX IF NOT EXISTS idx_ext_peers_gateway ON ext_peers(network, ingress_gateway);

            -- Staleness tracking, last write wins
            CREATE TABLE IF NOT EXISTS node_sync (
                network TEXT NOT NULL,
                mac_address TEXT NOT NULL,
                synced_version INTEGER NOT NULL DEFAULT 0,
                last_contact INTEGER,
                PRIMARY KEY (network, mac_address)
            );
            "#,
        )?;

        debug!("Database schema initialized");
        Ok(())
    }

    // ========================================================================
    // Networks
    // ========================================================================

    /// Create a network at topology version 0
    pub fn create_network(&self, name: &str, spec: &NetworkSpec) -> Result<Network> {
        let conn = self.conn.lock();
        let now = now_epoch_secs();

        if query_network(&conn, name)?.is_some() {
            return Err(Error::already_exists("network", name));
        }

        conn.execute(
            "INSERT INTO networks (name, spec, topology_version, created_at, updated_at)
             VALUES (?1, ?2, 0, ?3, ?3)",
            params![name, serde_json::to_string(spec)?, now],
        )?;

        debug!("Inserted network {}", name);
        Ok(Network {
            name: name.to_string(),
            spec: spec.clone(),
            topology_version: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get a network by name
    pub fn get_network(&self, name: &str) -> Result<Option<Network>> {
        let conn = self.conn.lock();
        query_network(&conn, name)
    }

    /// List all networks
    pub fn list_networks(&self) -> Result<Vec<Network>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT name, spec, topology_version, created_at, updated_at
             FROM networks ORDER BY name",
        )?;
        let rows = stmt.query_map([], RawNetworkRow::from_row)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?.parse()?);
        }
        Ok(results)
    }

    /// Current topology version of a network
    pub fn topology_version(&self, name: &str) -> Result<Option<u64>> {
        let conn = self.conn.lock();
        let version: Option<i64> = conn
            .query_row(
                "SELECT topology_version FROM networks WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(version.map(|v| v as u64))
    }

    // ========================================================================
    // Access keys
    // ========================================================================

    /// Store a new access key
    pub fn insert_access_key(&self, key: &AccessKey) -> Result<()> {
        let conn = self.conn.lock();

        let exists: i64 = conn.query_row(
            "SELECT COUNT(*) FROM access_keys WHERE network = ?1 AND name = ?2",
            params![key.network, key.name],
            |row| row.get(0),
        )?;
        if exists > 0 {
            return Err(Error::already_exists(
                "access key",
                format!("{}/{}", key.network, key.name),
            ));
        }

        conn.execute(
            "INSERT INTO access_keys (network, name, value, uses_remaining, expires_at, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                key.network,
                key.name,
                key.value,
                key.uses_remaining,
                key.expires_at,
                key.created_at,
            ],
        )?;

        debug!("Inserted access key {}/{}", key.network, key.name);
        Ok(())
    }

    /// Find a key with the given value that is usable at `now`
    pub fn find_valid_access_key(
        &self,
        network: &str,
        value: &str,
        now: i64,
    ) -> Result<Option<AccessKey>> {
        if value.is_empty() {
            return Ok(None);
        }
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT network, name, value, uses_remaining, expires_at, created_at
             FROM access_keys WHERE network = ?1 AND value = ?2",
        )?;
        let keys = stmt.query_map(params![network, value], access_key_from_row)?;
        for key in keys {
            let key = key?;
            if key.is_valid_at(now) {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }

    /// List the access keys of a network
    pub fn list_access_keys(&self, network: &str) -> Result<Vec<AccessKey>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT network, name, value, uses_remaining, expires_at, created_at
             FROM access_keys WHERE network = ?1 ORDER BY name",
        )?;
        let keys = stmt.query_map(params![network], access_key_from_row)?;
        Ok(keys.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    /// Insert an admitted node and bump the topology version.
    ///
    /// When `consume_key` is set one use of that key is spent in the same
    /// transaction; a key that ran out in the meantime rejects the insert.
    pub fn insert_node(&self, node: &Node, consume_key: Option<&str>) -> Result<u64> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        let now = now_epoch_secs();

        if let Some(value) = consume_key {
            let consumed = tx.execute(
                "UPDATE access_keys SET uses_remaining = uses_remaining - 1
                 WHERE rowid = (
                     SELECT rowid FROM access_keys
                     WHERE network = ?1 AND value = ?2 AND uses_remaining > 0
                       AND (expires_at IS NULL OR expires_at > ?3)
                     LIMIT 1
                 )",
                params![node.network, value, now],
            )?;
            if consumed == 0 {
                return Err(Error::PermissionDenied(format!(
                    "access key for network {} is no longer valid",
                    node.network
                )));
            }
        }

        if query_node(&tx, &node.network, &node.mac_address)?.is_some() {
            return Err(Error::already_exists("node", node.key().to_string()));
        }
        ensure_address_free(&tx, node)?;

        tx.execute(
            "INSERT INTO nodes (network, mac_address, spec, gateway, is_pending, password_hash,
                                expires_at, created_at, updated_at, generation)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, 1)",
            params![
                node.network,
                node.mac_address,
                serde_json::to_string(&node.spec)?,
                serde_json::to_string(&node.gateway)?,
                node.is_pending,
                node.password_hash,
                node.expires_at,
                node.created_at,
                node.updated_at,
            ],
        )?;

        let version = bump_topology(&tx, &node.network)?;
        tx.commit()?;

        debug!("Inserted node {}", node.key());
        Ok(version)
    }

    /// Get a node by network and hardware address
    pub fn get_node(&self, network: &str, mac_address: &str) -> Result<Option<Node>> {
        let conn = self.conn.lock();
        query_node(&conn, network, mac_address)
    }

    /// List the nodes of a network
    pub fn list_nodes(&self, network: &str) -> Result<Vec<Node>> {
        let conn = self.conn.lock();
        query_nodes(&conn, network)
    }

    /// Overwrite a node record.
    ///
    /// The write only lands if the stored generation still equals
    /// `node.generation`. With `bump` set the topology version is bumped in
    /// the same transaction and returned.
    pub fn write_node(&self, node: &Node, bump: bool) -> Result<(Node, Option<u64>)> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        let now = now_epoch_secs();

        ensure_address_free(&tx, node)?;

        let rows = tx.execute(
            "UPDATE nodes SET spec = ?1, gateway = ?2, is_pending = ?3, password_hash = ?4,
                              expires_at = ?5, updated_at = ?6, generation = generation + 1
             WHERE network = ?7 AND mac_address = ?8 AND generation = ?9",
            params![
                serde_json::to_string(&node.spec)?,
                serde_json::to_string(&node.gateway)?,
                node.is_pending,
                node.password_hash,
                node.expires_at,
                now,
                node.network,
                node.mac_address,
                node.generation,
            ],
        )?;

        if rows == 0 {
            return match query_node(&tx, &node.network, &node.mac_address)? {
                Some(_) => Err(Error::Internal(format!(
                    "node {} was modified concurrently",
                    node.key()
                ))),
                None => Err(Error::not_found("node", node.key().to_string())),
            };
        }

        let version = if bump {
            Some(bump_topology(&tx, &node.network)?)
        } else {
            None
        };
        let stored = query_node(&tx, &node.network, &node.mac_address)?
            .ok_or_else(|| Error::Internal(format!("node {} vanished mid-write", node.key())))?;
        tx.commit()?;

        debug!("Updated node {} (generation {})", node.key(), stored.generation);
        Ok((stored, version))
    }

    /// Delete a node with its sync state and external clients.
    ///
    /// Returns the bumped topology version, or `None` if there was no such node.
    pub fn delete_node(&self, network: &str, mac_address: &str) -> Result<Option<u64>> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;

        let rows = tx.execute(
            "DELETE FROM nodes WHERE network = ?1 AND mac_address = ?2",
            params![network, mac_address],
        )?;
        if rows == 0 {
            return Ok(None);
        }

        tx.execute(
            "DELETE FROM node_sync WHERE network = ?1 AND mac_address = ?2",
            params![network, mac_address],
        )?;
        tx.execute(
            "DELETE FROM ext_peers WHERE network = ?1 AND ingress_gateway = ?2",
            params![network, mac_address],
        )?;

        let version = bump_topology(&tx, network)?;
        tx.commit()?;

        debug!("Deleted node {}/{}", network, mac_address);
        Ok(Some(version))
    }

    /// Topology version and node list read under one lock
    pub fn peer_snapshot(&self, network: &str) -> Result<Option<(u64, Vec<Node>)>> {
        let conn = self.conn.lock();
        let network = match query_network(&conn, network)? {
            Some(n) => n,
            None => return Ok(None),
        };
        let nodes = query_nodes(&conn, &network.name)?;
        Ok(Some((network.topology_version, nodes)))
    }

    // ========================================================================
    // External peers
    // ========================================================================

    /// Insert an external peer and bump the topology version
    pub fn insert_ext_peer(&self, peer: &ExtPeer) -> Result<u64> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;

        let exists: i64 = tx.query_row(
            "SELECT COUNT(*) FROM ext_peers WHERE network = ?1 AND client_id = ?2",
            params![peer.network, peer.client_id],
            |row| row.get(0),
        )?;
        if exists > 0 {
            return Err(Error::already_exists(
                "external peer",
                format!("{}/{}", peer.network, peer.client_id),
            ));
        }

        tx.execute(
            "INSERT INTO ext_peers (network, client_id, ingress_gateway, record, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                peer.network,
                peer.client_id,
                peer.ingress_gateway,
                serde_json::to_string(peer)?,
                peer.created_at,
            ],
        )?;

        let version = bump_topology(&tx, &peer.network)?;
        tx.commit()?;

        debug!("Inserted external peer {}/{}", peer.network, peer.client_id);
        Ok(version)
    }

    /// Delete an external peer, returning the bumped topology version
    pub fn delete_ext_peer(&self, network: &str, client_id: &str) -> Result<Option<u64>> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;

        let rows = tx.execute(
            "DELETE FROM ext_peers WHERE network = ?1 AND client_id = ?2",
            params![network, client_id],
        )?;
        if rows == 0 {
            return Ok(None);
        }

        let version = bump_topology(&tx, network)?;
        tx.commit()?;

        debug!("Deleted external peer {}/{}", network, client_id);
        Ok(Some(version))
    }

    /// Topology version, gateway node and its external peers read under one lock
    pub fn ext_peer_snapshot(
        &self,
        network: &str,
        gateway: &str,
    ) -> Result<Option<(u64, Option<Node>, Vec<ExtPeer>)>> {
        let conn = self.conn.lock();
        let network = match query_network(&conn, network)? {
            Some(n) => n,
            None => return Ok(None),
        };
        let node = query_node(&conn, &network.name, gateway)?;

        let mut stmt = conn.prepare(
            "SELECT record FROM ext_peers WHERE network = ?1 AND ingress_gateway = ?2
             ORDER BY created_at, client_id",
        )?;
        let records = stmt.query_map(params![network.name, gateway], |row| {
            row.get::<_, String>(0)
        })?;
        let mut peers = Vec::new();
        for record in records {
            peers.push(serde_json::from_str(&record?)?);
        }

        Ok(Some((network.topology_version, node, peers)))
    }

    // ========================================================================
    // Sync state
    // ========================================================================

    /// Record the topology version a node finished synchronizing against.
    ///
    /// Returns false, writing nothing, when the node no longer exists.
    pub fn record_sync(&self, network: &str, mac_address: &str, version: u64) -> Result<bool> {
        let conn = self.conn.lock();
        let written = conn.execute(
            "INSERT INTO node_sync (network, mac_address, synced_version, last_contact)
             SELECT network, mac_address, ?3, NULL FROM nodes
             WHERE network = ?1 AND mac_address = ?2
             ON CONFLICT(network, mac_address) DO UPDATE SET synced_version = excluded.synced_version",
            params![network, mac_address, version as i64],
        )?;
        Ok(written > 0)
    }

    /// Record the time a node last checked in; false when the node is gone
    pub fn record_contact(&self, network: &str, mac_address: &str, timestamp: i64) -> Result<bool> {
        let conn = self.conn.lock();
        let written = conn.execute(
            "INSERT INTO node_sync (network, mac_address, synced_version, last_contact)
             SELECT network, mac_address, 0, ?3 FROM nodes
             WHERE network = ?1 AND mac_address = ?2
             ON CONFLICT(network, mac_address) DO UPDATE SET last_contact = excluded.last_contact",
            params![network, mac_address, timestamp],
        )?;
        Ok(written > 0)
    }

    /// Sync state of a node; nodes never seen report the zero state
    pub fn sync_state(&self, network: &str, mac_address: &str) -> Result<SyncState> {
        let conn = self.conn.lock();
        let state = conn
            .query_row(
                "SELECT synced_version, last_contact FROM node_sync
                 WHERE network = ?1 AND mac_address = ?2",
                params![network, mac_address],
                |row| {
                    Ok(SyncState {
                        synced_version: row.get::<_, i64>(0)? as u64,
                        last_contact: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(state.unwrap_or_default())
    }

    /// Every node of a network paired with its sync state
    pub fn nodes_with_sync(&self, network: &str) -> Result<Vec<(Node, SyncState)>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&format!(
            "SELECT {}, COALESCE(s.synced_version, 0), s.last_contact
             FROM nodes n LEFT JOIN node_sync s
               ON s.network = n.network AND s.mac_address = n.mac_address
             WHERE n.network = ?1 ORDER BY n.created_at, n.mac_address",
            NODE_COLUMNS
        ))?;
        let rows = stmt.query_map(params![network], |row| {
            let raw = RawNodeRow::from_row(row)?;
            let sync = SyncState {
                synced_version: row.get::<_, i64>(10)? as u64,
                last_contact: row.get(11)?,
            };
            Ok((raw, sync))
        })?;

        let mut results = Vec::new();
        for row in rows {
            let (raw, sync) = row?;
            results.push((raw.parse()?, sync));
        }
        Ok(results)
    }

    /// Nodes whose last contact is older than `cutoff`.
    ///
    /// A node that never checked in counts from its creation time.
    pub fn nodes_overdue_since(&self, network: &str, cutoff: i64) -> Result<Vec<Node>> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&format!(
            "SELECT {}
             FROM nodes n LEFT JOIN node_sync s
               ON s.network = n.network AND s.mac_address = n.mac_address
             WHERE n.network = ?1 AND COALESCE(s.last_contact, n.created_at) < ?2
             ORDER BY n.created_at, n.mac_address",
            NODE_COLUMNS
        ))?;
        let rows = stmt.query_map(params![network, cutoff], RawNodeRow::from_row)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?.parse()?);
        }
        Ok(results)
    }
}

// ============================================================================
// Query helpers
// ============================================================================

fn query_network(conn: &Connection, name: &str) -> Result<Option<Network>> {
    let row = conn
        .query_row(
            "SELECT name, spec, topology_version, created_at, updated_at
             FROM networks WHERE name = ?1",
            params![name],
            RawNetworkRow::from_row,
        )
        .optional()?;

    match row {
        Some(raw) => Ok(Some(raw.parse()?)),
        None => Ok(None),
    }
}

fn query_node(conn: &Connection, network: &str, mac_address: &str) -> Result<Option<Node>> {
    let row = conn
        .query_row(
            &format!(
                "SELECT {} FROM nodes n WHERE n.network = ?1 AND n.mac_address = ?2",
                NODE_COLUMNS
            ),
            params![network, mac_address],
            RawNodeRow::from_row,
        )
        .optional()?;

    match row {
        Some(raw) => Ok(Some(raw.parse()?)),
        None => Ok(None),
    }
}

fn query_nodes(conn: &Connection, network: &str) -> Result<Vec<Node>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM nodes n WHERE n.network = ?1 ORDER BY n.created_at, n.mac_address",
        NODE_COLUMNS
    ))?;
    let rows = stmt.query_map(params![network], RawNodeRow::from_row)?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?.parse()?);
    }
    Ok(results)
}

/// Tunnel addresses are unique within a network
fn ensure_address_free(conn: &Connection, node: &Node) -> Result<()> {
    if let Some(address) = node.spec.address {
        let taken: i64 = conn.query_row(
            "SELECT COUNT(*) FROM nodes
             WHERE network = ?1 AND json_extract(spec, '$.address') = ?2 AND mac_address != ?3",
            params![node.network, address.to_string(), node.mac_address],
            |row| row.get(0),
        )?;
        if taken > 0 {
            return Err(Error::already_exists(
                "address",
                format!("{}/{}", node.network, address),
            ));
        }
    }
    if let Some(address6) = node.spec.address6 {
        let taken: i64 = conn.query_row(
            "SELECT COUNT(*) FROM nodes
             WHERE network = ?1 AND json_extract(spec, '$.address6') = ?2 AND mac_address != ?3",
            params![node.network, address6.to_string(), node.mac_address],
            |row| row.get(0),
        )?;
        if taken > 0 {
            return Err(Error::already_exists(
                "address",
                format!("{}/{}", node.network, address6),
            ));
        }
    }
    Ok(())
}

/// Bump a network's topology version and return the new value
fn bump_topology(conn: &Connection, network: &str) -> Result<u64> {
    let version: Option<i64> = conn
        .query_row(
            "UPDATE networks SET topology_version = topology_version + 1, updated_at = ?2
             WHERE name = ?1 RETURNING topology_version",
            params![network, now_epoch_secs()],
            |row| row.get(0),
        )
        .optional()?;

    let version = version.ok_or_else(|| Error::not_found("network", network))? as u64;
    debug!("Network {} topology version is now {}", network, version);
    Ok(version)
}

fn access_key_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<AccessKey> {
    Ok(AccessKey {
        network: row.get(0)?,
        name: row.get(1)?,
        value: row.get(2)?,
        uses_remaining: row.get(3)?,
        expires_at: row.get(4)?,
        created_at: row.get(5)?,
    })
}

/// Raw network row before parsing
struct RawNetworkRow {
    name: String,
    spec: String,
    topology_version: i64,
    created_at: i64,
    updated_at: i64,
}

impl RawNetworkRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            name: row.get(0)?,
            spec: row.get(1)?,
            topology_version: row.get(2)?,
            created_at: row.get(3)?,
            updated_at: row.get(4)?,
        })
    }

    fn parse(self) -> Result<Network> {
        Ok(Network {
            name: self.name,
            spec: serde_json::from_str(&self.spec)?,
            topology_version: self.topology_version as u64,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Raw node row before parsing
struct RawNodeRow {
    network: String,
    mac_address: String,
    spec: String,
    gateway: String,
    is_pending: bool,
    password_hash: String,
    expires_at: i64,
    created_at: i64,
    updated_at: i64,
    generation: i64,
}

impl RawNodeRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            network: row.get(0)?,
            mac_address: row.get(1)?,
            spec: row.get(2)?,
            gateway: row.get(3)?,
            is_pending: row.get(4)?,
            password_hash: row.get(5)?,
            expires_at: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
            generation: row.get(9)?,
        })
    }

    fn parse(self) -> Result<Node> {
        Ok(Node {
            network: self.network,
            mac_address: self.mac_address,
            spec: serde_json::from_str(&self.spec)?,
            gateway: serde_json::from_str(&self.gateway)?,
            is_pending: self.is_pending,
            password_hash: self.password_hash,
            expires_at: self.expires_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
            generation: self.generation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> Database {
        let db = Database::open_memory().unwrap();
        db.create_network("lab", &NetworkSpec::default()).unwrap();
        db
    }

    fn test_node(mac: &str, address: &str) -> Node {
        Node {
            network: "lab".to_string(),
            mac_address: mac.to_string(),
            spec: NodeSpec {
                address: Some(address.parse().unwrap()),
                listen_port: 51821,
                keepalive: 20,
                check_in_interval: 30,
                ..Default::default()
            },
            gateway: GatewaySettings::default(),
            is_pending: false,
            password_hash: crate::crypto::hash_secret("secret"),
            expires_at: 0,
            created_at: 0,
            updated_at: 0,
            generation: 1,
        }
    }

    fn test_key(value: &str, uses: u32) -> AccessKey {
        AccessKey {
            network: "lab".to_string(),
            name: format!("key-{}", value),
            value: value.to_string(),
            uses_remaining: uses,
            expires_at: None,
            created_at: 0,
        }
    }

    #[test]
    fn test_network_crud() {
        let db = test_db();
        assert!(db.create_network("lab", &NetworkSpec::default()).is_err());

        let net = db.get_network("lab").unwrap().unwrap();
        assert_eq!(net.topology_version, 0);
        assert_eq!(db.list_networks().unwrap().len(), 1);
        assert!(db.get_network("nope").unwrap().is_none());
    }

    #[test]
    fn test_node_writes_bump_topology_once() {
        let db = test_db();

        assert_eq!(db.insert_node(&test_node("AA:01", "10.0.0.1"), None).unwrap(), 1);
        assert_eq!(db.insert_node(&test_node("AA:02", "10.0.0.2"), None).unwrap(), 2);

        let node = db.get_node("lab", "AA:01").unwrap().unwrap();
        let (_, version) = db.write_node(&node, true).unwrap();
        assert_eq!(version, Some(3));

        let node = db.get_node("lab", "AA:01").unwrap().unwrap();
        let (stored, version) = db.write_node(&node, false).unwrap();
        assert_eq!(version, None);
        assert_eq!(stored.generation, node.generation + 1);
        assert_eq!(db.topology_version("lab").unwrap(), Some(3));

        assert_eq!(db.delete_node("lab", "AA:02").unwrap(), Some(4));
        assert_eq!(db.delete_node("lab", "AA:02").unwrap(), None);
        assert_eq!(db.topology_version("lab").unwrap(), Some(4));
    }

    #[test]
    fn test_duplicate_node_and_address_rejected() {
        let db = test_db();
        db.insert_node(&test_node("AA:01", "10.0.0.1"), None).unwrap();

        let err = db.insert_node(&test_node("AA:01", "10.0.0.9"), None).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists { .. }));

        let err = db.insert_node(&test_node("AA:02", "10.0.0.1"), None).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists { .. }));

        // Failed inserts leave the version untouched
        assert_eq!(db.topology_version("lab").unwrap(), Some(1));
    }

    #[test]
    fn test_stale_generation_rejected() {
        let db = test_db();
        db.insert_node(&test_node("AA:01", "10.0.0.1"), None).unwrap();
        let node = db.get_node("lab", "AA:01").unwrap().unwrap();

        db.write_node(&node, false).unwrap();
        let err = db.write_node(&node, true).unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
        assert_eq!(db.topology_version("lab").unwrap(), Some(1));
    }

    #[test]
    fn test_access_key_consumed_with_insert() {
        let db = test_db();
        db.insert_access_key(&test_key("abc", 1)).unwrap();
        assert!(db.find_valid_access_key("lab", "abc", 0).unwrap().is_some());

        db.insert_node(&test_node("AA:01", "10.0.0.1"), Some("abc")).unwrap();
        assert!(db.find_valid_access_key("lab", "abc", 0).unwrap().is_none());

        let err = db
            .insert_node(&test_node("AA:02", "10.0.0.2"), Some("abc"))
            .unwrap_err();
        assert!(matches!(err, Error::PermissionDenied(_)));
        assert!(db.get_node("lab", "AA:02").unwrap().is_none());
    }

    #[test]
    fn test_expired_key_is_invalid() {
        let db = test_db();
        let mut key = test_key("old", 5);
        key.expires_at = Some(100);
        db.insert_access_key(&key).unwrap();

        assert!(db.find_valid_access_key("lab", "old", 99).unwrap().is_some());
        assert!(db.find_valid_access_key("lab", "old", 100).unwrap().is_none());
        assert!(db.find_valid_access_key("lab", "", 0).unwrap().is_none());
    }

    #[test]
    fn test_sync_state_last_write_wins() {
        let db = test_db();
        assert_eq!(db.sync_state("lab", "AA:01").unwrap(), SyncState::default());

        // No row is created for a node that does not exist
        assert!(!db.record_sync("lab", "AA:01", 5).unwrap());
        assert!(!db.record_contact("lab", "AA:01", 1000).unwrap());
        assert_eq!(db.sync_state("lab", "AA:01").unwrap(), SyncState::default());

        db.insert_node(&test_node("AA:01", "10.0.0.1"), None).unwrap();
        assert!(db.record_sync("lab", "AA:01", 5).unwrap());
        db.record_contact("lab", "AA:01", 1000).unwrap();
        db.record_sync("lab", "AA:01", 3).unwrap();

        let state = db.sync_state("lab", "AA:01").unwrap();
        assert_eq!(state.synced_version, 3);
        assert_eq!(state.last_contact, Some(1000));
    }

    #[test]
    fn test_overdue_query() {
        let db = test_db();
        db.insert_node(&test_node("AA:01", "10.0.0.1"), None).unwrap();
        db.insert_node(&test_node("AA:02", "10.0.0.2"), None).unwrap();

        let now = now_epoch_secs();
        db.record_contact("lab", "AA:01", now - 500).unwrap();
        db.record_contact("lab", "AA:02", now).unwrap();

        let overdue = db.nodes_overdue_since("lab", now - 100).unwrap();
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].mac_address, "AA:01");

        let joined = db.nodes_with_sync("lab").unwrap();
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[1].1.last_contact, Some(now));
    }

    #[test]
    fn test_ext_peers_removed_with_gateway() {
        let db = test_db();
        db.insert_node(&test_node("AA:01", "10.0.0.1"), None).unwrap();

        let peer = ExtPeer {
            client_id: "laptop".to_string(),
            network: "lab".to_string(),
            ingress_gateway: "AA:01".to_string(),
            address: Some("10.0.0.100".parse().unwrap()),
            address6: None,
            endpoint: None,
            public_key: "pk".to_string(),
            keepalive: 20,
            listen_port: 0,
            local_address: None,
            is_pending: false,
            created_at: 0,
        };
        assert_eq!(db.insert_ext_peer(&peer).unwrap(), 2);
        assert!(db.insert_ext_peer(&peer).is_err());

        let (version, gateway, peers) = db.ext_peer_snapshot("lab", "AA:01").unwrap().unwrap();
        assert_eq!(version, 2);
        assert!(gateway.is_some());
        assert_eq!(peers.len(), 1);

        db.delete_node("lab", "AA:01").unwrap();
        let (_, gateway, peers) = db.ext_peer_snapshot("lab", "AA:01").unwrap().unwrap();
        assert!(gateway.is_none());
        assert!(peers.is_empty());
    }
}
