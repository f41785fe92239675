use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::{ExecutorId, TaskId, TaskLifecycle};

/// Binding between a task and the executor it runs under.
///
/// Carried by every status record so observers can correlate a report with the
/// executor that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBinding {
    pub task_id: TaskId,
    pub executor_id: ExecutorId,
}

impl TaskBinding {
    pub fn new(task_id: impl Into<TaskId>, executor_id: impl Into<ExecutorId>) -> Self {
        Self {
            task_id: task_id.into(),
            executor_id: executor_id.into(),
        }
    }
}

/// One reported lifecycle snapshot for a task.
///
/// Immutable once built. The ledger stores only the latest record per key —
/// every write replaces the previous one, there is no history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusRecord {
    /// Reported lifecycle state.
    pub state: TaskLifecycle,
    /// When the supervisor produced this report.
    #[serde(with = "time_serde")]
    pub timestamp: SystemTime,
    /// Task the report is about.
    pub task_id: TaskId,
    /// Executor the task is bound to.
    pub executor_id: ExecutorId,
    /// Optional human-readable detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TaskStatusRecord {
    /// Build a record with the current time and no message.
    pub fn new(state: TaskLifecycle, binding: &TaskBinding) -> Self {
        Self {
            state,
            timestamp: SystemTime::now(),
            task_id: binding.task_id.clone(),
            executor_id: binding.executor_id.clone(),
            message: None,
        }
    }

    /// The placeholder written before the supervisor's first real report.
    pub fn starting(binding: &TaskBinding) -> Self {
        Self::new(TaskLifecycle::Starting, binding)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

mod time_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    pub fn serialize<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let since_epoch = time
            .duration_since(UNIX_EPOCH)
            .map_err(serde::ser::Error::custom)?;
        (since_epoch.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SystemTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(UNIX_EPOCH + Duration::from_millis(millis))
    }
}
