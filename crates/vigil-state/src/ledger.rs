use std::sync::Arc;

use tracing::{debug, error};

use vigil_model::{RunId, StateKey, TaskBinding, TaskStatusRecord};

use crate::error::StateError;
use crate::store::StateStore;

/// Durable record of one task's lifecycle in the coordination store.
///
/// A dumb overwrite-on-write store: the ledger persists whatever the
/// supervisor last reported and keeps no history. Transition legality is not
/// validated — the supervisor may race or resend, and rejecting "illegal"
/// transitions would drop legitimate late-arriving updates.
///
/// Only one supervisor is expected to own a task's status at a time;
/// concurrent writers to the same key race as last-writer-wins in the store.
pub struct TaskStateLedger {
    store: Arc<dyn StateStore>,
    binding: TaskBinding,
    key: StateKey,
}

impl std::fmt::Debug for TaskStateLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStateLedger")
            .field("binding", &self.binding)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl TaskStateLedger {
    /// Create a ledger handle for one (run, task) pair.
    ///
    /// Fails with [`StateError::Configuration`] before any I/O when the run
    /// identity or binding is empty — these are caller programming errors, not
    /// runtime faults, and must not surface later as a confusing store error.
    pub fn new(
        store: Arc<dyn StateStore>,
        run: RunId,
        binding: TaskBinding,
    ) -> Result<Self, StateError> {
        if run.is_empty() {
            return Err(StateError::Configuration("run identity is empty".into()));
        }
        if binding.task_id.is_empty() {
            return Err(StateError::Configuration("task identity is empty".into()));
        }
        if binding.executor_id.is_empty() {
            return Err(StateError::Configuration(
                "executor identity is empty".into(),
            ));
        }

        let key = StateKey::new(&run, &binding.task_id);
        Ok(Self {
            store,
            binding,
            key,
        })
    }

    /// Path under which this task's status lives.
    pub fn key(&self) -> &StateKey {
        &self.key
    }

    /// Persist `record` at the state key, creating missing parents.
    ///
    /// Create-or-replace: succeeds whether or not a record already exists.
    pub async fn record_status(&self, record: &TaskStatusRecord) -> Result<(), StateError> {
        debug!(key = %self.key, state = ?record.state, "writing task status");

        let bytes = serde_json::to_vec(record)
            .map_err(|e| StateError::Persistence(format!("serialize status: {e}")))?;
        self.store
            .set_and_create_parents(self.key.as_str(), &bytes)
            .await
            .map_err(StateError::from)
    }

    /// Read the latest recorded status.
    pub async fn current_status(&self) -> Result<TaskStatusRecord, StateError> {
        let bytes = self
            .store
            .get(self.key.as_str())
            .await?
            .ok_or_else(|| StateError::NotFound(self.key.to_string()))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| StateError::Persistence(format!("decode status: {e}")))
    }

    /// Best-effort write of the STARTING placeholder.
    ///
    /// Failures are logged and swallowed: initialization must never block task
    /// startup, and the supervisor sends a real status shortly after,
    /// superseding this record.
    pub async fn init_default(&self) {
        let record = TaskStatusRecord::starting(&self.binding);
        if let Err(e) = self.record_status(&record).await {
            error!(key = %self.key, error = %e, "unable to record default task state");
        }
    }

    /// Diagnostic rendering: `"<key>: <message>"`.
    ///
    /// Never fails — a read error degrades to a fallback message instead of
    /// propagating into logging paths.
    pub async fn describe(&self) -> String {
        match self.current_status().await {
            Ok(record) => format!("{}: {}", self.key, record.message.unwrap_or_default()),
            Err(_) => format!("{}: Unable to get message", self.key),
        }
    }
}
