use std::sync::Arc;

use tracing::debug;

use vigil_model::HealthStatus;

use crate::cluster::{NodeQuery, TaskDiscovery};
use crate::error::{ConvergeError, QueryError};
use crate::observer::{PollConfig, PollOutcome, await_condition, require_condition};

/// Converges when the cluster reports the target health from one
/// representative node.
///
/// Each round re-discovers the known tasks, queries the first address, and
/// requires all of: active-node count equals the expectation, status equals
/// the target, and zero initializing and unassigned shards. Any failure on the
/// way — including a summary document that is not fully populated yet — counts
/// as "not yet converged" for that round.
pub struct ClusterHealthCondition {
    tasks: Arc<dyn TaskDiscovery>,
    nodes: Arc<dyn NodeQuery>,
    expected_nodes: u32,
    target: HealthStatus,
}

impl ClusterHealthCondition {
    pub fn new(
        tasks: Arc<dyn TaskDiscovery>,
        nodes: Arc<dyn NodeQuery>,
        expected_nodes: u32,
        target: HealthStatus,
    ) -> Self {
        Self {
            tasks,
            nodes,
            expected_nodes,
            target,
        }
    }

    /// One evaluation round.
    pub async fn check(&self) -> Result<bool, QueryError> {
        let addresses = self.tasks.addresses().await?;
        let addr = addresses.first().ok_or(QueryError::NoTasks)?;

        let health = self.nodes.cluster_health(addr).await?;
        let converged = health.number_of_nodes == self.expected_nodes
            && health.status == self.target
            && health.initializing_shards == 0
            && health.unassigned_shards == 0;

        debug!(
            addr = %addr,
            status = %health.status,
            nodes = health.number_of_nodes,
            initializing = health.initializing_shards,
            unassigned = health.unassigned_shards,
            converged,
            "cluster health round"
        );
        Ok(converged)
    }

    /// Poll until the cluster reaches the target health or the deadline elapses.
    pub async fn wait(&self, cfg: &PollConfig) -> PollOutcome {
        debug!(
            expected_nodes = self.expected_nodes,
            target = %self.target,
            "waiting for cluster health"
        );
        await_condition(cfg, || self.check()).await
    }

    /// Strict-mode [`Self::wait`].
    pub async fn require(&self, cfg: &PollConfig) -> Result<(), ConvergeError> {
        require_condition(cfg, || self.check()).await
    }
}
