use serde::{Deserialize, Serialize};

/// One element of the scheduler's task listing.
///
/// `http_address` is the externally reachable `host:port` of the worker node;
/// callers own the scheme when building URLs from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub http_address: String,
}
