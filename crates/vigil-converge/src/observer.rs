use std::fmt;
use std::future::Future;
use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::debug;

use crate::error::ConvergeError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Timing discipline for one bounded wait.
///
/// All fields are wall-clock durations. No exact scheduling is promised: the
/// actual cadence may drift by up to one condition-evaluation duration per
/// cycle, so callers must not rely on precise tick alignment.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Total wait budget. The initial delay counts against it.
    pub timeout: Duration,
    /// Sleep between evaluations.
    pub interval: Duration,
    /// Wait before the first evaluation.
    pub initial_delay: Duration,
}

impl PollConfig {
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self {
            timeout,
            interval,
            initial_delay: Duration::ZERO,
        }
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_INTERVAL)
    }
}

/// Result of a bounded wait. Binary — there is no partial outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The condition returned true before the deadline.
    Converged,
    /// The deadline elapsed without the condition returning true.
    TimedOut,
}

/// Repeatedly evaluate `condition` until it returns true or the deadline
/// elapses.
///
/// The condition is opaque business logic; this loop contributes only the
/// timing and retry discipline. A condition error is expected intermediate
/// state (target unreachable, summary document not yet populated) and is
/// treated exactly like `Ok(false)` — logged at debug, never escalated. The
/// condition is always evaluated at least once, even when the initial delay
/// already exceeds the timeout.
///
/// Blocks the calling task for the duration of the wait; the only cancellation
/// is the deadline itself. Callers wanting early cancellation wrap this in
/// their own outer context.
pub async fn await_condition<F, Fut, E>(cfg: &PollConfig, mut condition: F) -> PollOutcome
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
    E: fmt::Display,
{
    let deadline = Instant::now() + cfg.timeout;

    if !cfg.initial_delay.is_zero() {
        sleep(cfg.initial_delay).await;
    }

    loop {
        match condition().await {
            Ok(true) => return PollOutcome::Converged,
            Ok(false) => debug!("condition not yet met"),
            Err(e) => debug!(error = %e, "condition check failed, treating as not converged"),
        }

        if Instant::now() >= deadline {
            return PollOutcome::TimedOut;
        }
        sleep(cfg.interval).await;
    }
}

/// Strict-mode variant of [`await_condition`]: a timeout becomes an error.
pub async fn require_condition<F, Fut, E>(cfg: &PollConfig, condition: F) -> Result<(), ConvergeError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
    E: fmt::Display,
{
    match await_condition(cfg, condition).await {
        PollOutcome::Converged => Ok(()),
        PollOutcome::TimedOut => Err(ConvergeError::Timeout {
            waited: cfg.timeout,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;
    use crate::error::QueryError;

    fn fast(timeout_ms: u64, interval_ms: u64) -> PollConfig {
        PollConfig::new(
            Duration::from_millis(timeout_ms),
            Duration::from_millis(interval_ms),
        )
    }

    #[tokio::test]
    async fn converges_immediately_on_first_true() {
        let outcome = await_condition(&fast(100, 10), || async {
            Ok::<_, Infallible>(true)
        })
        .await;
        assert_eq!(outcome, PollOutcome::Converged);
    }

    #[tokio::test]
    async fn retries_until_condition_becomes_true() {
        let calls = Arc::new(AtomicU32::new(0));
        let n = 4;

        let counter = Arc::clone(&calls);
        let outcome = await_condition(&fast(500, 10), move || {
            let counter = Arc::clone(&counter);
            async move {
                let seen = counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, Infallible>(seen >= n)
            }
        })
        .await;

        assert_eq!(outcome, PollOutcome::Converged);
        assert_eq!(calls.load(Ordering::SeqCst), n + 1);
    }

    #[tokio::test]
    async fn erroring_condition_times_out_instead_of_failing() {
        let timeout = Duration::from_millis(80);
        let cfg = PollConfig::new(timeout, Duration::from_millis(10));

        let started = std::time::Instant::now();
        let outcome = await_condition(&cfg, || async {
            Err::<bool, _>(QueryError::Transport("connection refused".into()))
        })
        .await;

        assert_eq!(outcome, PollOutcome::TimedOut);
        assert!(started.elapsed() >= timeout);
    }

    #[tokio::test]
    async fn evaluates_at_least_once_even_with_late_start() {
        let calls = Arc::new(AtomicU32::new(0));
        let cfg = fast(10, 5).with_initial_delay(Duration::from_millis(30));

        let counter = Arc::clone(&calls);
        let outcome = await_condition(&cfg, move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, Infallible>(false)
            }
        })
        .await;

        assert_eq!(outcome, PollOutcome::TimedOut);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn initial_delay_runs_before_first_evaluation() {
        let cfg = fast(200, 10).with_initial_delay(Duration::from_millis(50));

        let started = std::time::Instant::now();
        let outcome = await_condition(&cfg, || async { Ok::<_, Infallible>(true) }).await;

        assert_eq!(outcome, PollOutcome::Converged);
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn require_condition_maps_timeout_to_error() {
        let cfg = fast(30, 10);

        let err = require_condition(&cfg, || async { Ok::<_, Infallible>(false) })
            .await
            .unwrap_err();
        let ConvergeError::Timeout { waited } = err;
        assert_eq!(waited, Duration::from_millis(30));
    }

    #[tokio::test]
    async fn require_condition_passes_through_convergence() {
        let cfg = fast(30, 10);
        require_condition(&cfg, || async { Ok::<_, Infallible>(true) })
            .await
            .unwrap();
    }
}
