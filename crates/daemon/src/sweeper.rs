//! Overdue node sweep
//!
//! Periodically reports nodes that stopped checking in. Removal is left to
//! fleet management; the sweep only logs.

use crate::state::StateManager;
use meshcoord_common::now_epoch_secs;
use std::time::Duration;
use tracing::{debug, error, info, warn};

pub struct OverdueSweeper {
    state: StateManager,
    interval: Duration,
}

impl OverdueSweeper {
    pub fn new(state: StateManager) -> Self {
        let interval = Duration::from_secs(state.config().sweep.interval_secs.max(1));
        Self { state, interval }
    }

    /// Run the sweep loop
    pub async fn run(&self) {
        info!("Overdue sweeper started (every {:?})", self.interval);

        loop {
            tokio::time::sleep(self.interval).await;

            if let Err(e) = self.sweep_once() {
                error!("Overdue sweep error: {}", e);
            }
        }
    }

    /// Sweep every network once, returning the number of overdue nodes
    pub fn sweep_once(&self) -> meshcoord_common::Result<usize> {
        let now = now_epoch_secs();
        let mut total = 0;

        for network in self.state.list_networks()? {
            let overdue = match self.state.overdue_nodes(&network.name, now) {
                Ok(nodes) => nodes,
                Err(e) => {
                    warn!("Failed to sweep network {}: {}", network.name, e);
                    continue;
                }
            };

            for node in &overdue {
                warn!(
                    "Node {} ({}) is overdue; check-in interval {}s",
                    node.key(),
                    node.spec.name,
                    node.spec.check_in_interval
                );
            }
            total += overdue.len();
        }

        debug!("Overdue sweep found {} nodes", total);
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::{seed_node, test_state};
    use meshcoord_common::NetworkSpec;

    #[test]
    fn test_sweep_counts_across_networks() {
        let state = test_state();
        state.create_network("lab", NetworkSpec::default()).unwrap();
        state.create_network("prod", NetworkSpec::default()).unwrap();
        seed_node(&state, "lab", "AA:01", "10.0.0.1");
        seed_node(&state, "prod", "AA:01", "10.1.0.1");
        seed_node(&state, "prod", "AA:02", "10.1.0.2");

        let now = now_epoch_secs();
        state.staleness().record_contact("lab", "AA:01", now).unwrap();
        state.staleness().record_contact("prod", "AA:01", now - 3600).unwrap();
        state.staleness().record_contact("prod", "AA:02", now - 3600).unwrap();

        let sweeper = OverdueSweeper::new(state);
        assert_eq!(sweeper.sweep_once().unwrap(), 2);
    }

    #[test]
    fn test_fresh_nodes_are_not_overdue() {
        let state = test_state();
        state.create_network("lab", NetworkSpec::default()).unwrap();
        seed_node(&state, "lab", "AA:01", "10.0.0.1");

        // Never contacted, but created just now
        let sweeper = OverdueSweeper::new(state);
        assert_eq!(sweeper.sweep_once().unwrap(), 0);
    }
}
