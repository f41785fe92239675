mod memory;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::StoreError;

/// Port over the hierarchical coordination store.
///
/// Implementations must provide read-your-writes consistency at the same path:
/// a `get` issued after a successful `set_and_create_parents` returns the
/// written value. Concurrent writes to the same path serialize as
/// last-writer-wins; no client-side locking happens above this trait.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Write `value` at `path`, creating any missing intermediate segments.
    ///
    /// Create-or-replace: succeeds whether or not the path already exists.
    async fn set_and_create_parents(&self, path: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Read the value at `path`, or `None` if nothing was ever written there.
    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, StoreError>;
}
