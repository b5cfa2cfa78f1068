//! Error types for the cart store.
//!
//! Persistence failures are deliberately split by direction: a failed read is
//! recoverable (the store starts empty), while a failed write leaves the
//! in-memory cart authoritative for the rest of the session.

use thiserror::Error;

/// Errors from the key-value persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the value under `key` failed.
    #[error("failed to read {key:?}: {source}")]
    Read {
        /// The storage key that was being read.
        key: String,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Writing the value under `key` failed.
    #[error("failed to write {key:?}: {source}")]
    Write {
        /// The storage key that was being written.
        key: String,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Encoding the cart snapshot to JSON failed.
    #[error("failed to encode cart snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Store-level error type.
#[derive(Debug, Error)]
pub enum CartError {
    /// A persistence operation failed.
    ///
    /// On the write path the in-memory mutation has already been applied and
    /// is not rolled back; callers that only care about the in-memory state
    /// may ignore this.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The global registry was accessed before a store was installed.
    #[error("cart store accessed before registry::install was called")]
    Uninitialized,

    /// A store was already installed in the global registry.
    #[error("a cart store is already installed in the registry")]
    AlreadyInstalled,
}

/// Result type alias for cart store operations.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Read {
            key: "@GoMarketPlace:products".to_owned(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("@GoMarketPlace:products"));
    }

    #[test]
    fn test_cart_error_from_storage() {
        let err = CartError::from(StorageError::Write {
            key: "k".to_owned(),
            source: std::io::Error::other("disk full"),
        });
        assert!(matches!(err, CartError::Storage(StorageError::Write { .. })));
    }
}
