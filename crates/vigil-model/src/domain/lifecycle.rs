use serde::{Deserialize, Serialize};

/// Lifecycle state of a worker task, as last reported by its supervisor.
///
/// Ordered by typical progression, but no layer of this SDK enforces transition
/// legality: the supervisor may race or resend, and rejecting "illegal"
/// transitions would drop legitimate late-arriving updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskLifecycle {
    /// Task has been placed but not yet confirmed running.
    Starting,
    /// Task is executing.
    Running,
    /// Task completed normally.
    Finished,
    /// Task failed.
    Failed,
    /// Task was killed on request.
    Killed,
    /// Task was lost by the cluster (node gone, status unknown).
    Lost,
    /// Supervisor reported an error for the task.
    Error,
}

impl TaskLifecycle {
    /// Returns `true` if the task is in a terminal state (won't transition further).
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskLifecycle::Finished
                | TaskLifecycle::Failed
                | TaskLifecycle::Killed
                | TaskLifecycle::Lost
                | TaskLifecycle::Error
        )
    }

    /// Returns `true` if the task is still active (starting or running).
    pub fn is_active(&self) -> bool {
        matches!(self, TaskLifecycle::Starting | TaskLifecycle::Running)
    }
}
