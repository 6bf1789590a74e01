//! Check-in reconciliation
//!
//! Compares what a node reports about itself with the authoritative record
//! and tells it which facets to refresh. Peer-affecting fields are never
//! taken from the report; local hints (interface name, post-up/down) are.

use crate::state::StateManager;
use meshcoord_common::{crypto::verify_secret, now_epoch_secs, types::*, Result};
use tracing::{debug, warn};

#[derive(Clone)]
pub struct CheckInReconciler {
    state: StateManager,
}

impl CheckInReconciler {
    pub fn new(state: StateManager) -> Self {
        Self { state }
    }

    /// Reconcile one check-in.
    ///
    /// Unknown and pending nodes get a soft verdict rather than an error;
    /// only storage failures surface as `Err`.
    pub async fn check_in(&self, report: &CheckInReport) -> Result<CheckInVerdict> {
        let _guard = self
            .state
            .lock_node(&report.network, &report.mac_address)
            .await;

        let node = match self.state.get_node(&report.network, &report.mac_address)? {
            Some(node) => node,
            None => {
                debug!(
                    "Check-in from unregistered node {}/{}",
                    report.network, report.mac_address
                );
                return Ok(CheckInVerdict::unregistered());
            }
        };
        let topology_version = match self.state.db().topology_version(&node.network)? {
            Some(version) => version,
            None => return Ok(CheckInVerdict::unregistered()),
        };

        let now = now_epoch_secs();
        let staleness = self.state.staleness();
        staleness.record_contact(&node.network, &node.mac_address, now)?;

        if node.is_pending {
            debug!("Check-in from pending node {}", node.key());
            return Ok(CheckInVerdict::awaiting_approval());
        }

        let need_delete =
            !verify_secret(&report.password, &node.password_hash) || node.is_expired_at(now);
        // An empty key is unreported, like every other zero-valued field
        let need_key_update =
            !report.public_key.is_empty() && report.public_key != node.spec.public_key;
        let drift = config_drift(report, &node.spec);
        let need_config_update = !drift.is_empty();
        let need_peer_update =
            staleness.last_synced_version(&node.network, &node.mac_address)? < topology_version;

        if need_config_update {
            warn!(
                "Node {} reported diverging {}; keeping authoritative values",
                node.key(),
                drift.join(", ")
            );
        }
        if need_key_update {
            warn!("Node {} reported a stale public key", node.key());
        }

        // Local hints are only taken from an authenticated node
        if !need_delete {
            if let Some(spec) = accept_local_hints(report, &node.spec) {
                let mut next = node.clone();
                next.spec = spec;
                self.state.db().write_node(&next, false)?;
                debug!("Stored local hints reported by {}", node.key());
            }
        }

        Ok(CheckInVerdict {
            success: true,
            need_peer_update,
            need_config_update,
            need_key_update,
            need_delete,
            is_pending: false,
            message: String::new(),
        })
    }
}

/// Names of reported peer-affecting fields that disagree with the record.
///
/// Fields the node did not report are not compared.
fn config_drift(report: &CheckInReport, spec: &NodeSpec) -> Vec<&'static str> {
    let mut drift = Vec::new();
    if report.address.is_some() && report.address != spec.address {
        drift.push("address");
    }
    if report.address6.is_some() && report.address6 != spec.address6 {
        drift.push("address6");
    }
    if report.endpoint.is_some() && report.endpoint != spec.endpoint {
        drift.push("endpoint");
    }
    if report.local_address.is_some() && report.local_address != spec.local_address {
        drift.push("local address");
    }
    if matches!(report.listen_port, Some(port) if port != 0 && port != spec.listen_port) {
        drift.push("listen port");
    }
    if matches!(report.keepalive, Some(secs) if secs != 0 && secs != spec.keepalive) {
        drift.push("keepalive");
    }
    drift
}

/// The record with reported local hints applied, if any of them changed
fn accept_local_hints(report: &CheckInReport, spec: &NodeSpec) -> Option<NodeSpec> {
    let mut next = spec.clone();
    for (reported, stored) in [
        (&report.interface, &mut next.interface),
        (&report.post_up, &mut next.post_up),
        (&report.post_down, &mut next.post_down),
    ] {
        if let Some(value) = reported.as_deref().filter(|v| !v.is_empty()) {
            if value != stored.as_str() {
                *stored = value.to_string();
            }
        }
    }
    (next != *spec).then_some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::{seed_node, test_state};

    fn report_for(node: &Node) -> CheckInReport {
        CheckInReport {
            network: node.network.clone(),
            mac_address: node.mac_address.clone(),
            password: "secret".to_string(),
            public_key: node.spec.public_key.clone(),
            address: node.spec.address,
            listen_port: Some(node.spec.listen_port),
            ..Default::default()
        }
    }

    fn lab() -> (StateManager, CheckInReconciler) {
        let state = test_state();
        state.create_network("lab", NetworkSpec::default()).unwrap();
        (state.clone(), CheckInReconciler::new(state))
    }

    #[tokio::test]
    async fn test_unregistered_node() {
        let (state, reconciler) = lab();
        let report = CheckInReport {
            network: "lab".to_string(),
            mac_address: "AA:BB".to_string(),
            ..Default::default()
        };
        let verdict = reconciler.check_in(&report).await.unwrap();
        assert!(!verdict.success);
        assert!(verdict.need_delete);
        assert_eq!(verdict.message, "unregistered");
        assert_eq!(state.staleness().sync_state("lab", "AA:BB").unwrap().last_contact, None);

        let report = CheckInReport {
            network: "nope".to_string(),
            ..report
        };
        assert!(reconciler.check_in(&report).await.unwrap().need_delete);
    }

    #[tokio::test]
    async fn test_pending_node_gets_soft_verdict() {
        let (state, reconciler) = lab();
        let mut node = seed_node(&state, "lab", "AA:BB", "10.0.0.1");
        node.is_pending = true;
        state.db().write_node(&node, false).unwrap();

        let verdict = reconciler.check_in(&report_for(&node)).await.unwrap();
        assert!(!verdict.success);
        assert!(verdict.is_pending);
        assert!(!verdict.need_peer_update);
        assert_eq!(verdict.message, "awaiting approval");
        assert!(state.staleness().sync_state("lab", "AA:BB").unwrap().last_contact.is_some());
    }

    #[tokio::test]
    async fn test_peer_update_tracks_synced_version() {
        let (state, reconciler) = lab();
        let node = seed_node(&state, "lab", "AA:BB", "10.0.0.1");
        seed_node(&state, "lab", "AA:CC", "10.0.0.2");
        seed_node(&state, "lab", "AA:DD", "10.0.0.3");
        assert_eq!(state.db().topology_version("lab").unwrap(), Some(3));

        state.staleness().record_sync("lab", "AA:BB", 2).unwrap();
        let verdict = reconciler.check_in(&report_for(&node)).await.unwrap();
        assert!(verdict.success);
        assert!(verdict.need_peer_update);

        // The check-in itself does not advance the synced version
        assert_eq!(state.staleness().last_synced_version("lab", "AA:BB").unwrap(), 2);

        state.staleness().record_sync("lab", "AA:BB", 3).unwrap();
        let verdict = reconciler.check_in(&report_for(&node)).await.unwrap();
        assert!(!verdict.need_peer_update);
        assert!(!verdict.need_config_update);
        assert!(!verdict.need_key_update);
        assert!(!verdict.need_delete);
    }

    #[tokio::test]
    async fn test_key_mismatch_is_server_wins() {
        let (state, reconciler) = lab();
        let node = seed_node(&state, "lab", "AA:BB", "10.0.0.1");

        let mut report = report_for(&node);
        report.public_key = crate::state::tests::test_pubkey(200);
        let verdict = reconciler.check_in(&report).await.unwrap();
        assert!(verdict.need_key_update);

        let stored = state.require_node("lab", "AA:BB").unwrap();
        assert_eq!(stored.spec.public_key, node.spec.public_key);
    }

    #[tokio::test]
    async fn test_unreported_key_is_not_a_mismatch() {
        let (state, reconciler) = lab();
        let node = seed_node(&state, "lab", "AA:BB", "10.0.0.1");

        let mut report = report_for(&node);
        report.public_key = String::new();
        let verdict = reconciler.check_in(&report).await.unwrap();
        assert!(verdict.success);
        assert!(!verdict.need_key_update);
    }

    #[tokio::test]
    async fn test_config_drift_keeps_record() {
        let (state, reconciler) = lab();
        let node = seed_node(&state, "lab", "AA:BB", "10.0.0.1");
        let version = state.db().topology_version("lab").unwrap();

        let mut report = report_for(&node);
        report.address = Some("10.0.0.99".parse().unwrap());
        report.listen_port = Some(40000);
        let verdict = reconciler.check_in(&report).await.unwrap();
        assert!(verdict.need_config_update);

        let stored = state.require_node("lab", "AA:BB").unwrap();
        assert_eq!(stored.spec.address, node.spec.address);
        assert_eq!(stored.spec.listen_port, node.spec.listen_port);
        assert_eq!(state.db().topology_version("lab").unwrap(), version);
    }

    #[tokio::test]
    async fn test_local_hints_are_accepted_without_bump() {
        let (state, reconciler) = lab();
        let node = seed_node(&state, "lab", "AA:BB", "10.0.0.1");
        let version = state.db().topology_version("lab").unwrap();

        let mut report = report_for(&node);
        report.interface = Some("wg-lab".to_string());
        report.post_up = Some("sysctl -w net.ipv4.ip_forward=1".to_string());
        let verdict = reconciler.check_in(&report).await.unwrap();
        assert!(!verdict.need_config_update);

        let stored = state.require_node("lab", "AA:BB").unwrap();
        assert_eq!(stored.spec.interface, "wg-lab");
        assert_eq!(stored.spec.post_up, "sysctl -w net.ipv4.ip_forward=1");
        assert_eq!(state.db().topology_version("lab").unwrap(), version);
    }

    #[tokio::test]
    async fn test_bad_password_or_expiry_requests_delete() {
        let (state, reconciler) = lab();
        let node = seed_node(&state, "lab", "AA:BB", "10.0.0.1");

        let mut report = report_for(&node);
        report.password = "wrong".to_string();
        report.interface = Some("evil0".to_string());
        let verdict = reconciler.check_in(&report).await.unwrap();
        assert!(verdict.success);
        assert!(verdict.need_delete);
        assert_eq!(state.require_node("lab", "AA:BB").unwrap().spec.interface, "nm-lab");

        let mut expired = state.require_node("lab", "AA:BB").unwrap();
        expired.expires_at = 1;
        state.db().write_node(&expired, false).unwrap();
        let verdict = reconciler.check_in(&report_for(&node)).await.unwrap();
        assert!(verdict.need_delete);
    }

    #[tokio::test]
    async fn test_concurrent_check_ins_serialize() {
        let (state, reconciler) = lab();
        let node = seed_node(&state, "lab", "AA:BB", "10.0.0.1");

        let mut handles = Vec::new();
        for i in 0..8 {
            let reconciler = reconciler.clone();
            let mut report = report_for(&node);
            report.post_down = Some(format!("echo {}", i));
            handles.push(tokio::spawn(async move { reconciler.check_in(&report).await }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().unwrap().success);
        }
        assert!(state.require_node("lab", "AA:BB").unwrap().spec.post_down.starts_with("echo "));
    }
}
