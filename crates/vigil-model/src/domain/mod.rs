mod identity;
pub use identity::{ExecutorId, RunId, StateKey, TaskId};

mod lifecycle;
pub use lifecycle::TaskLifecycle;

mod status;
pub use status::{TaskBinding, TaskStatusRecord};
