use std::time::Duration;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the HTTP probes.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Scheduler base URL, e.g. `http://10.0.0.5:31100`.
    pub endpoint: String,
    /// Per-request timeout. Bounds one probe, not a whole convergence wait.
    pub request_timeout: Duration,
}

impl ProbeConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
