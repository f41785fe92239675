use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use async_trait::async_trait;

use crate::error::StoreError;
use crate::store::StateStore;

/// In-memory coordination store.
///
/// Backs tests and single-process setups. Paths are kept in a flat map, so
/// intermediate segments exist implicitly.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of paths holding a value.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().is_empty()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn set_and_create_parents(&self, path: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        inner.insert(path.to_string(), value.to_vec());
        Ok(())
    }

    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let inner = self.inner.read().unwrap();
        Ok(inner.get(path).cloned())
    }
}
