use std::sync::Arc;

use tracing::debug;

use crate::cluster::{NodeQuery, TaskDiscovery};
use crate::error::{ConvergeError, QueryError};
use crate::observer::{PollConfig, PollOutcome, await_condition, require_condition};

/// Converges when every node's record count is a nonzero exact multiple of
/// `doc_count`.
///
/// The multiple rule supports idempotent repeated-write testing: re-running
/// the same write workload N times leaves each node at N times the expected
/// count. A `doc_count` of zero disables the check entirely.
///
/// Addresses are resolved once, up front — not re-discovered per round. Within
/// a round, nodes are probed in order and the first query error ends the round
/// as non-converged with the remaining nodes unprobed; the next round retries
/// from the top.
pub struct RecordCountCondition {
    nodes: Arc<dyn NodeQuery>,
    addresses: Vec<String>,
    doc_count: u64,
}

impl RecordCountCondition {
    /// Fix the address list from current task discovery.
    pub async fn resolve(
        tasks: &dyn TaskDiscovery,
        nodes: Arc<dyn NodeQuery>,
        doc_count: u64,
    ) -> Result<Self, QueryError> {
        let addresses = tasks.addresses().await?;
        Ok(Self::with_addresses(nodes, addresses, doc_count))
    }

    /// Build against a known address list.
    pub fn with_addresses(
        nodes: Arc<dyn NodeQuery>,
        addresses: Vec<String>,
        doc_count: u64,
    ) -> Self {
        Self {
            nodes,
            addresses,
            doc_count,
        }
    }

    /// One evaluation round over all fixed addresses.
    pub async fn check(&self) -> Result<bool, QueryError> {
        for addr in &self.addresses {
            let count = self.nodes.record_count(addr).await?;
            debug!(addr = %addr, count, expected = self.doc_count, "record count round");

            if self.doc_count != 0 && (count == 0 || count % self.doc_count != 0) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Poll until every node's count satisfies the rule or the deadline elapses.
    pub async fn wait(&self, cfg: &PollConfig) -> PollOutcome {
        await_condition(cfg, || self.check()).await
    }

    /// Strict-mode [`Self::wait`].
    pub async fn require(&self, cfg: &PollConfig) -> Result<(), ConvergeError> {
        require_condition(cfg, || self.check()).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use vigil_model::ClusterHealth;

    use super::*;

    /// Counts per address; missing addresses answer with a transport error.
    struct CountsByNode {
        counts: HashMap<String, u64>,
        probes: AtomicU32,
    }

    impl CountsByNode {
        fn new(counts: &[(&str, u64)]) -> Self {
            Self {
                counts: counts
                    .iter()
                    .map(|(addr, count)| (addr.to_string(), *count))
                    .collect(),
                probes: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl NodeQuery for CountsByNode {
        async fn cluster_health(&self, _addr: &str) -> Result<ClusterHealth, QueryError> {
            unimplemented!("not used by the count condition")
        }

        async fn record_count(&self, addr: &str) -> Result<u64, QueryError> {
            self.probes.fetch_add(1, Ordering::SeqCst);
            self.counts
                .get(addr)
                .copied()
                .ok_or_else(|| QueryError::Transport(format!("{addr}: connection refused")))
        }
    }

    fn addrs(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("10.0.0.{}:9200", i + 1)).collect()
    }

    #[tokio::test]
    async fn exact_multiples_converge() {
        let nodes = Arc::new(CountsByNode::new(&[
            ("10.0.0.1:9200", 5),
            ("10.0.0.2:9200", 10),
            ("10.0.0.3:9200", 15),
        ]));
        let condition = RecordCountCondition::with_addresses(nodes, addrs(3), 5);

        assert!(condition.check().await.unwrap());
    }

    #[tokio::test]
    async fn zero_count_on_any_node_is_not_converged() {
        let nodes = Arc::new(CountsByNode::new(&[
            ("10.0.0.1:9200", 5),
            ("10.0.0.2:9200", 10),
            ("10.0.0.3:9200", 0),
        ]));
        let condition = RecordCountCondition::with_addresses(nodes, addrs(3), 5);

        assert!(!condition.check().await.unwrap());
    }

    #[tokio::test]
    async fn non_multiple_is_not_converged() {
        let nodes = Arc::new(CountsByNode::new(&[
            ("10.0.0.1:9200", 5),
            ("10.0.0.2:9200", 7),
        ]));
        let condition = RecordCountCondition::with_addresses(nodes, addrs(2), 5);

        assert!(!condition.check().await.unwrap());
    }

    #[tokio::test]
    async fn zero_doc_count_disables_the_check() {
        let nodes = Arc::new(CountsByNode::new(&[
            ("10.0.0.1:9200", 0),
            ("10.0.0.2:9200", 7),
        ]));
        let condition = RecordCountCondition::with_addresses(nodes, addrs(2), 0);

        assert!(condition.check().await.unwrap());
    }

    #[tokio::test]
    async fn query_error_ends_the_round_without_probing_later_nodes() {
        // First address is unknown to the fake, so it errors; the later nodes
        // must not be probed in that round.
        let nodes = Arc::new(CountsByNode::new(&[
            ("10.0.0.2:9200", 5),
            ("10.0.0.3:9200", 5),
        ]));
        let condition =
            RecordCountCondition::with_addresses(Arc::clone(&nodes) as Arc<dyn NodeQuery>, addrs(3), 5);

        assert!(condition.check().await.is_err());
        assert_eq!(nodes.probes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn resolve_fixes_addresses_up_front() {
        struct OnceTasks(AtomicU32);

        #[async_trait]
        impl TaskDiscovery for OnceTasks {
            async fn addresses(&self) -> Result<Vec<String>, QueryError> {
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(vec!["10.0.0.1:9200".into()])
            }
        }

        let tasks = OnceTasks(AtomicU32::new(0));
        let nodes = Arc::new(CountsByNode::new(&[("10.0.0.1:9200", 5)]));
        let condition = RecordCountCondition::resolve(&tasks, nodes, 5).await.unwrap();

        let cfg = PollConfig::new(Duration::from_millis(100), Duration::from_millis(10));
        assert_eq!(condition.wait(&cfg).await, PollOutcome::Converged);
        assert_eq!(tasks.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn wait_times_out_on_persistent_mismatch() {
        let nodes = Arc::new(CountsByNode::new(&[("10.0.0.1:9200", 3)]));
        let condition = RecordCountCondition::with_addresses(nodes, addrs(1), 5);

        let cfg = PollConfig::new(Duration::from_millis(40), Duration::from_millis(10));
        assert_eq!(condition.wait(&cfg).await, PollOutcome::TimedOut);
        assert!(matches!(
            condition.require(&cfg).await.unwrap_err(),
            ConvergeError::Timeout { .. }
        ));
    }
}
