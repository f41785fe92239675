//! Typed views of the JSON documents exchanged with live cluster endpoints.
//!
//! Field names mirror the wire format exactly; unknown fields are ignored so
//! richer live documents still decode.

mod health;
pub use health::{ClusterHealth, CountSummary, HealthStatus};

mod tasks;
pub use tasks::TaskDescriptor;
