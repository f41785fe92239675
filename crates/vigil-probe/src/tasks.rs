use async_trait::async_trait;
use tracing::debug;

use vigil_converge::{QueryError, TaskDiscovery};
use vigil_model::TaskDescriptor;

use crate::config::ProbeConfig;

/// Task discovery against the scheduler's `/v1/tasks` listing.
pub struct HttpTaskDiscovery {
    client: reqwest::Client,
    tasks_url: String,
    request_timeout: std::time::Duration,
}

impl HttpTaskDiscovery {
    pub fn new(cfg: &ProbeConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            tasks_url: format!("{}/v1/tasks", cfg.endpoint),
            request_timeout: cfg.request_timeout,
        }
    }

    /// Fetch the full task listing.
    pub async fn tasks(&self) -> Result<Vec<TaskDescriptor>, QueryError> {
        debug!(url = %self.tasks_url, "fetching task listing");

        let response = self
            .client
            .get(&self.tasks_url)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| {
            QueryError::InvalidResponse(format!("failed to parse task listing: {e}, body: {body}"))
        })
    }
}

#[async_trait]
impl TaskDiscovery for HttpTaskDiscovery {
    async fn addresses(&self) -> Result<Vec<String>, QueryError> {
        let tasks = self.tasks().await?;
        Ok(tasks.into_iter().map(|t| t.http_address).collect())
    }
}
