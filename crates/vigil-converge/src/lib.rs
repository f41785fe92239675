mod error;
pub use error::{ConvergeError, QueryError};

mod observer;
pub use observer::{PollConfig, PollOutcome, await_condition, require_condition};

mod cluster;
pub use cluster::{NodeQuery, TaskDiscovery};

mod health;
pub use health::ClusterHealthCondition;

mod count;
pub use count::RecordCountCondition;
