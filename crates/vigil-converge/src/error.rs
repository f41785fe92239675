use std::time::Duration;

use thiserror::Error;

/// Transient failure while querying live cluster state.
///
/// During convergence checking these are the expected common case, not an
/// anomaly: the observer treats every variant as "not yet converged" and logs
/// it at debug severity only.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("no tasks discovered yet")]
    NoTasks,
}

/// Definite failure of a strict-mode convergence wait.
#[derive(Error, Debug)]
pub enum ConvergeError {
    /// The deadline elapsed without the condition becoming true.
    #[error("condition did not converge within {waited:?}")]
    Timeout { waited: Duration },
}
