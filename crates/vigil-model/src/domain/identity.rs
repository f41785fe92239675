use std::fmt;

use serde::{Deserialize, Serialize};

/// Path segment separating the run identity from the task identity in a [`StateKey`].
const STATE_SEGMENT: &str = "state";

/// Identifier scoping all durable state for one execution of the cluster.
///
/// Opaque to this SDK; typically the framework id assigned by the resource manager.
/// Must never be empty — emptiness is rejected where a key is first derived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(String);

/// Identifier of one worker task within a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

/// Identifier of the executor a task is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutorId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(RunId);
string_id!(TaskId);
string_id!(ExecutorId);

/// Slash-delimited path under which a task's latest status lives in the
/// coordination store.
///
/// Format: `<run>/state/<task>`. The format is stable — external tooling reads
/// these paths directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey(String);

impl StateKey {
    /// Derive the key for a (run, task) pair.
    ///
    /// Deterministic and collision-free for distinct pairs.
    pub fn new(run: &RunId, task: &TaskId) -> Self {
        Self(format!("{}/{}/{}", run, STATE_SEGMENT, task))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
