//! Key-value persistence backends.
//!
//! The whole cart is stored as one string blob under one fixed key; backends
//! only need `get`/`set`. There is no versioning and no migration format.

pub mod file;
pub mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use async_trait::async_trait;

use crate::error::StorageError;

/// A string key-value storage backend for the cart blob.
///
/// Implementations take `&self` and use interior mutability so the store can
/// hold them behind an `Arc<dyn CartStorage>`.
#[async_trait]
pub trait CartStorage: Send + Sync {
    /// Retrieve the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the underlying storage fails.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the underlying storage fails.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
