//! Per-node synchronization bookkeeping
//!
//! Records the topology version each node last fully fetched its peers
//! against, and when it last checked in. Entries are last-write-wins.

use meshcoord_common::{types::SyncState, Database, Result};
use tracing::debug;

#[derive(Clone)]
pub struct StalenessTracker {
    db: Database,
}

impl StalenessTracker {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Mark a node as synchronized against `version`.
    ///
    /// A node deleted while its fetch was in flight is skipped.
    pub fn record_sync(&self, network: &str, mac_address: &str, version: u64) -> Result<()> {
        if self.db.record_sync(network, mac_address, version)? {
            debug!("Node {}/{} synced at version {}", network, mac_address, version);
        } else {
            debug!("Node {}/{} is gone, sync at version {} dropped", network, mac_address, version);
        }
        Ok(())
    }

    /// Version of the last completed peer fetch, 0 if none
    pub fn last_synced_version(&self, network: &str, mac_address: &str) -> Result<u64> {
        Ok(self.db.sync_state(network, mac_address)?.synced_version)
    }

    pub fn record_contact(&self, network: &str, mac_address: &str, timestamp: i64) -> Result<()> {
        self.db.record_contact(network, mac_address, timestamp)?;
        Ok(())
    }

    pub fn sync_state(&self, network: &str, mac_address: &str) -> Result<SyncState> {
        self.db.sync_state(network, mac_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::{seed_node, test_state};
    use meshcoord_common::types::NetworkSpec;

    #[test]
    fn test_unknown_node_starts_at_zero() {
        let tracker = StalenessTracker::new(Database::open_memory().unwrap());
        assert_eq!(tracker.last_synced_version("lab", "AA:BB").unwrap(), 0);
        assert_eq!(tracker.sync_state("lab", "AA:BB").unwrap().last_contact, None);
    }

    #[test]
    fn test_sync_and_contact_are_independent() {
        let state = test_state();
        state.create_network("lab", NetworkSpec::default()).unwrap();
        seed_node(&state, "lab", "AA:BB", "10.0.0.1");
        let tracker = state.staleness();
        tracker.record_contact("lab", "AA:BB", 1700).unwrap();
        tracker.record_sync("lab", "AA:BB", 3).unwrap();
        tracker.record_contact("lab", "AA:BB", 1760).unwrap();

        let sync = tracker.sync_state("lab", "AA:BB").unwrap();
        assert_eq!(sync.synced_version, 3);
        assert_eq!(sync.last_contact, Some(1760));
        assert_eq!(tracker.last_synced_version("lab", "AA:CC").unwrap(), 0);
    }
}
