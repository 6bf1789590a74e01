//! Admission control for registering nodes
//!
//! A registration carrying a currently valid access key is trusted and spends
//! one use of the key. Without one, a network that allows manual sign-up
//! admits the node as pending; any other network refuses it.

use crate::state::StateManager;
use ipnetwork::{Ipv4Network, Ipv6Network};
use meshcoord_common::{
    crypto::{generate_secret, hash_secret},
    now_epoch_secs,
    types::*,
    Error, Result,
};
use std::collections::HashSet;
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::{debug, info, warn};

/// Bytes of entropy in generated node passwords
const PASSWORD_ENTROPY: usize = 24;

/// Allocation retries when a concurrent registration takes the chosen address
const MAX_ALLOCATION_ATTEMPTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionOutcome {
    Trusted,
    Pending,
}

/// Result of a successful registration
#[derive(Debug, Clone)]
pub struct Admission {
    pub node: Node,
    pub outcome: AdmissionOutcome,
    /// Generated password, returned exactly once
    pub password: Option<String>,
    pub topology_version: u64,
}

#[derive(Clone)]
pub struct AdmissionController {
    state: StateManager,
}

impl AdmissionController {
    pub fn new(state: StateManager) -> Self {
        Self { state }
    }

    /// Register a node.
    ///
    /// Nothing is written unless the node is admitted.
    pub async fn admit(&self, registration: NodeRegistration) -> Result<Admission> {
        let network = self.state.require_network(&registration.network)?;
        validate_mac(&registration.mac_address)?;
        registration.spec.validate()?;

        let now = now_epoch_secs();
        let key = self.state.db().find_valid_access_key(
            &network.name,
            &registration.access_key,
            now,
        )?;
        let outcome = match key {
            Some(_) => AdmissionOutcome::Trusted,
            None if network.spec.allow_manual_sign_up => AdmissionOutcome::Pending,
            None => {
                warn!(
                    "Refused registration of {} on {}: no valid access key",
                    registration.mac_address, network.name
                );
                return Err(Error::PermissionDenied(format!(
                    "network {} requires a valid access key",
                    network.name
                )));
            }
        };

        let generated = registration
            .password
            .is_empty()
            .then(|| generate_secret(PASSWORD_ENTROPY));
        let password_hash = hash_secret(generated.as_deref().unwrap_or(&registration.password));
        let consume = match outcome {
            AdmissionOutcome::Trusted => Some(registration.access_key.as_str()),
            AdmissionOutcome::Pending => None,
        };

        let _guard = self
            .state
            .lock_node(&network.name, &registration.mac_address)
            .await;

        let mut attempt = 1;
        loop {
            let (spec, allocated) = self.complete_spec(&network, &registration)?;
            let node = Node {
                network: network.name.clone(),
                mac_address: registration.mac_address.clone(),
                spec,
                gateway: GatewaySettings::default(),
                is_pending: outcome == AdmissionOutcome::Pending,
                password_hash: password_hash.clone(),
                expires_at: 0,
                created_at: now,
                updated_at: now,
                generation: 1,
            };

            match self.state.db().insert_node(&node, consume) {
                Ok(topology_version) => {
                    info!(
                        "Admitted node {} as {:?} (topology version {})",
                        node.key(),
                        outcome,
                        topology_version
                    );
                    return Ok(Admission {
                        node,
                        outcome,
                        password: generated,
                        topology_version,
                    });
                }
                Err(Error::AlreadyExists { kind, .. })
                    if kind == "address" && allocated && attempt < MAX_ALLOCATION_ATTEMPTS =>
                {
                    debug!(
                        "Allocated address for {} was taken concurrently, retrying",
                        node.key()
                    );
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Fill unset fields from network and daemon defaults.
    ///
    /// Returns whether any tunnel address was allocated here.
    fn complete_spec(
        &self,
        network: &Network,
        registration: &NodeRegistration,
    ) -> Result<(NodeSpec, bool)> {
        let defaults = &self.state.config().defaults;
        let mut spec = registration.spec.clone();

        if spec.listen_port == 0 {
            spec.listen_port = nonzero_or(network.spec.default_listen_port, defaults.listen_port);
        }
        if spec.keepalive == 0 {
            spec.keepalive = nonzero_or(network.spec.default_keepalive, defaults.keepalive_secs);
        }
        if spec.check_in_interval == 0 {
            spec.check_in_interval = nonzero_or(
                network.spec.default_check_in_interval,
                defaults.check_in_interval_secs,
            );
        }
        if spec.interface.is_empty() {
            spec.interface = if network.spec.default_interface.is_empty() {
                defaults.interface_for(&network.name)
            } else {
                network.spec.default_interface.clone()
            };
        }
        if spec.name.is_empty() {
            spec.name = registration.mac_address.clone();
        }

        let mut allocated = false;
        let needs_v4 = spec.address.is_none() && network.spec.address_range.is_some();
        let needs_v6 = spec.address6.is_none()
            && network.spec.is_dual_stack
            && network.spec.address_range6.is_some();

        if needs_v4 || needs_v6 {
            let nodes = self.state.db().list_nodes(&network.name)?;
            if let (true, Some(range)) = (needs_v4, &network.spec.address_range) {
                let used: HashSet<Ipv4Addr> = nodes.iter().filter_map(|n| n.spec.address).collect();
                spec.address = Some(next_free_v4(range, &used)?);
                allocated = true;
            }
            if let (true, Some(range)) = (needs_v6, &network.spec.address_range6) {
                let used: HashSet<Ipv6Addr> = nodes.iter().filter_map(|n| n.spec.address6).collect();
                spec.address6 = Some(next_free_v6(range, &used)?);
                allocated = true;
            }
        }

        Ok((spec, allocated))
    }
}

fn nonzero_or<T: Default + PartialEq>(value: T, fallback: T) -> T {
    if value == T::default() {
        fallback
    } else {
        value
    }
}

/// First host address in `range` not in `used`
fn next_free_v4(range: &str, used: &HashSet<Ipv4Addr>) -> Result<Ipv4Addr> {
    let net: Ipv4Network = range
        .parse()
        .map_err(|e| Error::Internal(format!("stored address range {} is invalid: {}", range, e)))?;
    net.iter()
        .filter(|ip| *ip != net.network() && *ip != net.broadcast())
        .find(|ip| !used.contains(ip))
        .ok_or_else(|| Error::Internal(format!("address range {} is exhausted", range)))
}

fn next_free_v6(range: &str, used: &HashSet<Ipv6Addr>) -> Result<Ipv6Addr> {
    let net: Ipv6Network = range
        .parse()
        .map_err(|e| Error::Internal(format!("stored address range {} is invalid: {}", range, e)))?;
    net.iter()
        .filter(|ip| *ip != net.network())
        .find(|ip| !used.contains(ip))
        .ok_or_else(|| Error::Internal(format!("address range {} is exhausted", range)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::{test_pubkey, test_state};

    fn registration(mac: &str, key: &str) -> NodeRegistration {
        NodeRegistration {
            network: "lab".to_string(),
            mac_address: mac.to_string(),
            access_key: key.to_string(),
            password: String::new(),
            spec: NodeSpec {
                public_key: test_pubkey(1),
                ..Default::default()
            },
        }
    }

    fn lab_spec(manual: bool) -> NetworkSpec {
        NetworkSpec {
            address_range: Some("10.20.0.0/29".to_string()),
            allow_manual_sign_up: manual,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_valid_key_is_trusted_and_spent() {
        let state = test_state();
        state.create_network("lab", lab_spec(false)).unwrap();
        let key = state.create_access_key("lab", "one", 1, None).unwrap();
        let admission = AdmissionController::new(state.clone());

        let admitted = admission.admit(registration("AA:01", &key.value)).await.unwrap();
        assert_eq!(admitted.outcome, AdmissionOutcome::Trusted);
        assert!(!admitted.node.is_pending);
        assert_eq!(admitted.topology_version, 1);
        assert_eq!(admitted.node.spec.address, Some("10.20.0.1".parse().unwrap()));
        assert_eq!(admitted.node.spec.interface, "nm-lab");

        let password = admitted.password.unwrap();
        assert!(meshcoord_common::crypto::verify_secret(
            &password,
            &admitted.node.password_hash
        ));

        // Single use key is now spent
        let err = admission.admit(registration("AA:02", &key.value)).await.unwrap_err();
        assert!(matches!(err, Error::PermissionDenied(_)));
    }

    #[tokio::test]
    async fn test_invalid_key_without_manual_signup_is_refused() {
        let state = test_state();
        state.create_network("lab", lab_spec(false)).unwrap();
        let admission = AdmissionController::new(state.clone());

        let err = admission.admit(registration("AA:01", "bogus")).await.unwrap_err();
        assert!(matches!(err, Error::PermissionDenied(_)));
        assert!(state.get_node("lab", "AA:01").unwrap().is_none());
        assert_eq!(state.db().topology_version("lab").unwrap(), Some(0));
    }

    #[tokio::test]
    async fn test_invalid_key_with_manual_signup_is_pending() {
        let state = test_state();
        state.create_network("lab", lab_spec(true)).unwrap();
        let admission = AdmissionController::new(state.clone());

        let admitted = admission.admit(registration("AA:01", "bogus")).await.unwrap();
        assert_eq!(admitted.outcome, AdmissionOutcome::Pending);
        assert!(admitted.node.is_pending);
        assert!(state.require_node("lab", "AA:01").unwrap().is_pending);
    }

    #[tokio::test]
    async fn test_unknown_network_and_bad_input() {
        let state = test_state();
        let admission = AdmissionController::new(state.clone());
        let err = admission.admit(registration("AA:01", "k")).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));

        state.create_network("lab", lab_spec(true)).unwrap();
        let err = admission.admit(registration("not a mac", "k")).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let mut bad_key = registration("AA:01", "k");
        bad_key.spec.public_key = "short".to_string();
        let err = admission.admit(bad_key).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(state.db().list_nodes("lab").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_registration_rejected() {
        let state = test_state();
        state.create_network("lab", lab_spec(true)).unwrap();
        let admission = AdmissionController::new(state.clone());

        admission.admit(registration("AA:01", "")).await.unwrap();
        let err = admission.admit(registration("AA:01", "")).await.unwrap_err();
        assert!(matches!(err, Error::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_chosen_password_not_echoed() {
        let state = test_state();
        state.create_network("lab", lab_spec(true)).unwrap();
        let admission = AdmissionController::new(state);

        let mut reg = registration("AA:01", "");
        reg.password = "hunter2".to_string();
        let admitted = admission.admit(reg).await.unwrap();
        assert!(admitted.password.is_none());
        assert_eq!(admitted.node.password_hash, hash_secret("hunter2"));
    }

    #[test]
    fn test_address_allocation() {
        let used: HashSet<Ipv4Addr> = ["10.20.0.1".parse().unwrap()].into_iter().collect();
        assert_eq!(
            next_free_v4("10.20.0.0/30", &used).unwrap(),
            "10.20.0.2".parse::<Ipv4Addr>().unwrap()
        );

        let used: HashSet<Ipv4Addr> = ["10.20.0.1", "10.20.0.2"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert!(next_free_v4("10.20.0.0/30", &used).is_err());

        let v6 = next_free_v6("fd00::/64", &HashSet::new()).unwrap();
        assert_eq!(v6, "fd00::1".parse::<Ipv6Addr>().unwrap());
    }
}
