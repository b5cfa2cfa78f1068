//! JSON-file storage backend.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::StorageError;
use crate::storage::CartStorage;

/// A file-per-key storage backend under a base directory.
///
/// Keys like `@GoMarketPlace:products` contain characters that are awkward in
/// file names, so each key is sanitized to `[A-Za-z0-9._-]` before being used
/// as a `.json` file name. A missing file reads as `None`; the base directory
/// is created on first write.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    base_dir: PathBuf,
}

impl JsonFileStorage {
    /// Create a backend rooted at `base_dir`.
    ///
    /// The directory does not need to exist yet.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The directory this backend reads and writes under.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.base_dir.join(format!("{name}.json"))
    }
}

#[async_trait]
impl CartStorage for JsonFileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key: key.to_owned(),
                source: e,
            }),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            key: key.to_owned(),
            source,
        };

        tokio::fs::create_dir_all(&self.base_dir)
            .await
            .map_err(write_err)?;

        // Write to a sibling temp file and rename so readers never observe a
        // partially written blob.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value).await.map_err(write_err)?;
        tokio::fs::rename(&tmp, &path).await.map_err(write_err)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        assert!(storage.get("@GoMarketPlace:products").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_then_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        storage.set("@GoMarketPlace:products", "[]").await.unwrap();
        assert_eq!(
            storage.get("@GoMarketPlace:products").await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn test_key_is_sanitized_into_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        storage.set("@GoMarketPlace:products", "[]").await.unwrap();

        let expected = dir.path().join("-GoMarketPlace-products.json");
        assert!(expected.exists());
    }

    #[tokio::test]
    async fn test_base_dir_created_on_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("cart");
        let storage = JsonFileStorage::new(&nested);

        storage.set("k", "[]").await.unwrap();
        assert!(nested.exists());
    }
}
