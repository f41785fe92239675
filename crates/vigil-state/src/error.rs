use thiserror::Error;

/// Failure of the coordination store itself.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e.to_string())
    }
}

/// Failure of a ledger operation.
///
/// `NotFound` is distinct from `Persistence` so callers can tell "never
/// written" apart from "store broken".
#[derive(Error, Debug)]
pub enum StateError {
    /// Invalid identity or binding supplied at construction. Rejected before
    /// any I/O, never retried.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Store unreachable, or a record failed to (de)serialize.
    #[error("persistence failure: {0}")]
    Persistence(String),

    /// No record has ever been written at the requested key.
    #[error("no status recorded at {0}")]
    NotFound(String),
}

impl From<StoreError> for StateError {
    fn from(e: StoreError) -> Self {
        StateError::Persistence(e.to_string())
    }
}
