use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use vigil_converge::{NodeQuery, QueryError};
use vigil_model::{ClusterHealth, CountSummary};

use crate::config::ProbeConfig;

/// Per-node queries over HTTP.
///
/// Discovery hands out bare `host:port` addresses; the scheme is owned here,
/// at the one place URLs get built.
pub struct HttpNodeQuery {
    client: reqwest::Client,
    request_timeout: Duration,
}

impl HttpNodeQuery {
    pub fn new(cfg: &ProbeConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            request_timeout: cfg.request_timeout,
        }
    }

    async fn get_json<T>(&self, url: &str) -> Result<T, QueryError>
    where
        T: serde::de::DeserializeOwned,
    {
        debug!(url, "probing node");

        let response = self
            .client
            .get(url)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| {
            QueryError::InvalidResponse(format!("failed to parse node response: {e}, body: {body}"))
        })
    }
}

#[async_trait]
impl NodeQuery for HttpNodeQuery {
    async fn cluster_health(&self, addr: &str) -> Result<ClusterHealth, QueryError> {
        self.get_json(&format!("http://{addr}/_cluster/health")).await
    }

    async fn record_count(&self, addr: &str) -> Result<u64, QueryError> {
        let summary: CountSummary = self.get_json(&format!("http://{addr}/_count")).await?;
        Ok(summary.count)
    }
}
