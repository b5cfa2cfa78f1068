//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::storage::CartStorage;

/// A `HashMap`-backed storage backend.
///
/// Nothing survives the process; useful for tests and for running the store
/// without a data directory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().map_err(|_| StorageError::Read {
            key: key.to_owned(),
            source: std::io::Error::other("storage mutex poisoned"),
        })?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::Write {
            key: key.to_owned(),
            source: std::io::Error::other("storage mutex poisoned"),
        })?;
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
