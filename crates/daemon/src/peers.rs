//! Peer distribution
//!
//! A peer fetch is a point-in-time snapshot delivered as a finite stream.
//! The requesting node is marked synchronized against the snapshot's
//! topology version only when the stream is polled past its last item;
//! dropping the stream early leaves the staleness record untouched.
//!
//! Behind the gRPC server the consumer is tonic's response encoder, not the
//! remote node. A snapshot small enough to fit in the transport's send
//! buffers is therefore recorded as synced once the server has encoded it,
//! even if the client drops the call before reading it. The node then
//! reports the newer version on its next check-in and is not told to
//! refetch; its next topology change will flag it again.

use crate::staleness::StalenessTracker;
use crate::state::{verify_node_password, StateManager};
use futures::Stream;
use meshcoord_common::{types::*, Error, Result};
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::debug;

/// Finite, non-restartable sequence of peer descriptors
pub struct PeerStream<T> {
    items: std::vec::IntoIter<T>,
    completion: Option<SyncCompletion>,
}

/// Staleness write owed once the stream is exhausted
struct SyncCompletion {
    tracker: StalenessTracker,
    key: NodeKey,
    version: u64,
}

impl<T> PeerStream<T> {
    fn new(items: Vec<T>, tracker: StalenessTracker, key: NodeKey, version: u64) -> Self {
        Self {
            items: items.into_iter(),
            completion: Some(SyncCompletion {
                tracker,
                key,
                version,
            }),
        }
    }

    /// Topology version the snapshot was taken at
    pub fn version(&self) -> Option<u64> {
        self.completion.as_ref().map(|c| c.version)
    }
}

impl<T: Unpin> Stream for PeerStream<T> {
    type Item = Result<T>;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if let Some(item) = this.items.next() {
            return Poll::Ready(Some(Ok(item)));
        }

        if let Some(done) = this.completion.take() {
            let SyncCompletion {
                tracker,
                key,
                version,
            } = done;
            if let Err(e) = tracker.record_sync(&key.network, &key.mac_address, version) {
                return Poll::Ready(Some(Err(Error::Internal(format!(
                    "failed to record sync of {}: {}",
                    key, e
                )))));
            }
        }
        Poll::Ready(None)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len();
        let extra = usize::from(self.completion.is_some());
        (remaining, Some(remaining + extra))
    }
}

#[derive(Clone)]
pub struct PeerSynchronizer {
    state: StateManager,
}

impl PeerSynchronizer {
    pub fn new(state: StateManager) -> Self {
        Self { state }
    }

    /// Mesh peers of the requesting node, excluding itself and pending nodes
    pub fn stream_internal_peers(
        &self,
        network: &str,
        mac_address: &str,
        password: &str,
    ) -> Result<PeerStream<PeerDescriptor>> {
        let (version, nodes) = self
            .state
            .db()
            .peer_snapshot(network)?
            .ok_or_else(|| Error::not_found("network", network))?;

        let requester = nodes
            .iter()
            .find(|n| n.mac_address == mac_address)
            .ok_or_else(|| Error::not_found("node", NodeKey::new(network, mac_address).to_string()))?;
        verify_node_password(requester, password)?;
        ensure_trusted(requester)?;

        let peers: Vec<PeerDescriptor> = nodes
            .iter()
            .filter(|n| n.mac_address != mac_address && !n.is_pending)
            .map(PeerDescriptor::from)
            .collect();

        debug!(
            "Streaming {} peers to {}/{} at version {}",
            peers.len(),
            network,
            mac_address,
            version
        );
        Ok(PeerStream::new(
            peers,
            self.state.staleness().clone(),
            NodeKey::new(network, mac_address),
            version,
        ))
    }

    /// External clients served by the requesting node.
    ///
    /// Empty unless the node is an ingress gateway.
    pub fn stream_external_peers(
        &self,
        network: &str,
        mac_address: &str,
        password: &str,
    ) -> Result<PeerStream<ExtPeerDescriptor>> {
        let (version, requester, ext_peers) = self
            .state
            .db()
            .ext_peer_snapshot(network, mac_address)?
            .ok_or_else(|| Error::not_found("network", network))?;

        let requester = requester
            .ok_or_else(|| Error::not_found("node", NodeKey::new(network, mac_address).to_string()))?;
        verify_node_password(&requester, password)?;
        ensure_trusted(&requester)?;

        let peers: Vec<ExtPeerDescriptor> = if requester.gateway.is_ingress_gateway {
            ext_peers
                .iter()
                .filter(|p| !p.is_pending)
                .map(ExtPeerDescriptor::from)
                .collect()
        } else {
            Vec::new()
        };

        debug!(
            "Streaming {} external peers to {}/{} at version {}",
            peers.len(),
            network,
            mac_address,
            version
        );
        Ok(PeerStream::new(
            peers,
            self.state.staleness().clone(),
            NodeKey::new(network, mac_address),
            version,
        ))
    }
}

fn ensure_trusted(node: &Node) -> Result<()> {
    if node.is_pending {
        return Err(Error::PermissionDenied(format!(
            "node {} is awaiting approval",
            node.key()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconciler::CheckInReconciler;
    use crate::state::tests::{seed_node, test_pubkey, test_state};
    use futures::StreamExt;

    fn lab() -> (StateManager, PeerSynchronizer) {
        let state = test_state();
        state.create_network("lab", NetworkSpec::default()).unwrap();
        (state.clone(), PeerSynchronizer::new(state))
    }

    fn make_pending(state: &StateManager, mac: &str) {
        let mut node = state.require_node("lab", mac).unwrap();
        node.is_pending = true;
        state.db().write_node(&node, false).unwrap();
    }

    #[tokio::test]
    async fn test_excludes_self_and_pending() {
        let (state, peers) = lab();
        seed_node(&state, "lab", "AA:01", "10.0.0.1");
        let trusted = seed_node(&state, "lab", "AA:02", "10.0.0.2");
        seed_node(&state, "lab", "AA:03", "10.0.0.3");
        make_pending(&state, "AA:03");

        let items: Vec<_> = peers
            .stream_internal_peers("lab", "AA:01", "secret")
            .unwrap()
            .collect()
            .await;
        let items: Vec<PeerDescriptor> = items.into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(items, vec![PeerDescriptor::from(&trusted)]);

        // A pending node cannot fetch peers either
        assert!(matches!(
            peers.stream_internal_peers("lab", "AA:03", "secret"),
            Err(Error::PermissionDenied(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_network_or_node() {
        let (_state, peers) = lab();
        assert!(matches!(
            peers.stream_internal_peers("nope", "AA:01", "secret"),
            Err(Error::NotFound { .. })
        ));
        assert!(matches!(
            peers.stream_external_peers("lab", "AA:01", "secret"),
            Err(Error::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_requires_password() {
        let (state, peers) = lab();
        seed_node(&state, "lab", "AA:01", "10.0.0.1");
        seed_node(&state, "lab", "AA:02", "10.0.0.2");

        for password in ["", "wrong"] {
            assert!(matches!(
                peers.stream_internal_peers("lab", "AA:01", password),
                Err(Error::PermissionDenied(_))
            ));
            assert!(matches!(
                peers.stream_external_peers("lab", "AA:01", password),
                Err(Error::PermissionDenied(_))
            ));
        }
        assert_eq!(state.staleness().last_synced_version("lab", "AA:01").unwrap(), 0);
    }

    #[tokio::test]
    async fn test_fetch_completed_after_delete_leaves_no_sync_row() {
        let (state, peers) = lab();
        seed_node(&state, "lab", "AA:01", "10.0.0.1");
        seed_node(&state, "lab", "AA:02", "10.0.0.2");

        let stream = peers.stream_internal_peers("lab", "AA:01", "secret").unwrap();
        state.delete_node("lab", "AA:01", "secret").await.unwrap();
        let items: Vec<_> = stream.collect().await;
        assert_eq!(items.len(), 1);

        // A re-registered node starts out stale
        seed_node(&state, "lab", "AA:01", "10.0.0.1");
        assert_eq!(state.staleness().last_synced_version("lab", "AA:01").unwrap(), 0);
    }

    #[tokio::test]
    async fn test_full_fetch_records_snapshot_version() {
        let (state, peers) = lab();
        let node = seed_node(&state, "lab", "AA:BB", "10.0.0.1");
        seed_node(&state, "lab", "AA:CC", "10.0.0.2");
        seed_node(&state, "lab", "AA:DD", "10.0.0.3");
        state.staleness().record_sync("lab", "AA:BB", 2).unwrap();
        assert_eq!(state.db().topology_version("lab").unwrap(), Some(3));

        let reconciler = CheckInReconciler::new(state.clone());
        let report = CheckInReport {
            network: "lab".to_string(),
            mac_address: "AA:BB".to_string(),
            password: "secret".to_string(),
            public_key: node.spec.public_key.clone(),
            ..Default::default()
        };
        assert!(reconciler.check_in(&report).await.unwrap().need_peer_update);

        let mut stream = peers.stream_internal_peers("lab", "AA:BB", "secret").unwrap();
        assert_eq!(stream.version(), Some(3));

        // Topology changes mid-stream are picked up by the next fetch
        let mut received = 0;
        while let Some(item) = stream.next().await {
            item.unwrap();
            received += 1;
            if received == 1 {
                seed_node(&state, "lab", "AA:EE", "10.0.0.4");
            }
        }
        assert_eq!(received, 2);
        assert_eq!(state.staleness().last_synced_version("lab", "AA:BB").unwrap(), 3);
        assert!(reconciler.check_in(&report).await.unwrap().need_peer_update);

        let fresh: Vec<_> = peers
            .stream_internal_peers("lab", "AA:BB", "secret")
            .unwrap()
            .collect()
            .await;
        assert_eq!(fresh.len(), 3);
        assert!(!reconciler.check_in(&report).await.unwrap().need_peer_update);
    }

    #[tokio::test]
    async fn test_dropped_fetch_does_not_advance() {
        let (state, peers) = lab();
        seed_node(&state, "lab", "AA:BB", "10.0.0.1");
        seed_node(&state, "lab", "AA:CC", "10.0.0.2");
        seed_node(&state, "lab", "AA:DD", "10.0.0.3");
        state.staleness().record_sync("lab", "AA:BB", 1).unwrap();

        let mut stream = peers.stream_internal_peers("lab", "AA:BB", "secret").unwrap();
        stream.next().await.unwrap().unwrap();
        drop(stream);
        assert_eq!(state.staleness().last_synced_version("lab", "AA:BB").unwrap(), 1);

        // Reading every item without polling the end is still incomplete
        let mut stream = peers.stream_internal_peers("lab", "AA:BB", "secret").unwrap();
        stream.next().await.unwrap().unwrap();
        stream.next().await.unwrap().unwrap();
        drop(stream);
        assert_eq!(state.staleness().last_synced_version("lab", "AA:BB").unwrap(), 1);
    }

    #[tokio::test]
    async fn test_external_peers_of_ingress_gateway() {
        let (state, peers) = lab();
        seed_node(&state, "lab", "AA:01", "10.0.0.1");
        seed_node(&state, "lab", "AA:02", "10.0.0.2");

        let gateway = GatewaySettings {
            is_ingress_gateway: true,
            ingress_gateway_range: Some("10.0.0.0/24".to_string()),
            ..Default::default()
        };
        state.set_gateway("lab", "AA:01", gateway).await.unwrap();

        let base = ExtPeer {
            client_id: "laptop".to_string(),
            network: "lab".to_string(),
            ingress_gateway: "AA:01".to_string(),
            address: Some("10.0.0.100".parse().unwrap()),
            address6: None,
            endpoint: None,
            public_key: test_pubkey(50),
            keepalive: 20,
            listen_port: 0,
            local_address: None,
            is_pending: false,
            created_at: 0,
        };
        state.create_ext_peer(base.clone()).await.unwrap();
        state
            .create_ext_peer(ExtPeer {
                client_id: "phone".to_string(),
                address: Some("10.0.0.101".parse().unwrap()),
                public_key: test_pubkey(51),
                is_pending: true,
                ..base.clone()
            })
            .await
            .unwrap();

        let items: Vec<_> = peers
            .stream_external_peers("lab", "AA:01", "secret")
            .unwrap()
            .collect()
            .await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].as_ref().unwrap(), &ExtPeerDescriptor::from(&base));

        let version = state.db().topology_version("lab").unwrap().unwrap();
        assert_eq!(state.staleness().last_synced_version("lab", "AA:01").unwrap(), version);

        let items: Vec<_> = peers
            .stream_external_peers("lab", "AA:02", "secret")
            .unwrap()
            .collect()
            .await;
        assert!(items.is_empty());
    }
}
