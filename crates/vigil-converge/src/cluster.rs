use async_trait::async_trait;

use vigil_model::ClusterHealth;

use crate::error::QueryError;

/// Port over the scheduler's view of currently known tasks.
///
/// Every failure is a [`QueryError`] — transient by definition, since the
/// scheduler itself may not be reachable yet while the cluster comes up.
#[async_trait]
pub trait TaskDiscovery: Send + Sync {
    /// Externally reachable `host:port` addresses of the known tasks.
    async fn addresses(&self) -> Result<Vec<String>, QueryError>;
}

/// Port over per-node state queries.
#[async_trait]
pub trait NodeQuery: Send + Sync {
    /// Fetch the cluster health summary as seen by the node at `addr`.
    async fn cluster_health(&self, addr: &str) -> Result<ClusterHealth, QueryError>;

    /// Fetch the record count reported by the node at `addr`.
    async fn record_count(&self, addr: &str) -> Result<u64, QueryError>;
}
