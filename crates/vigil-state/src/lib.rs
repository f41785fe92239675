mod error;
pub use error::{StateError, StoreError};

pub mod store;
pub use store::{MemoryStore, StateStore};

mod ledger;
pub use ledger::TaskStateLedger;
