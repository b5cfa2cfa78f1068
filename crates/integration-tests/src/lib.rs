//! Integration tests for the GoMarket cart.
//!
//! These tests drive [`CartStore`] over the real [`JsonFileStorage`] backend
//! in a scratch directory, covering the full load → mutate → persist →
//! reload cycle.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gomarket-integration-tests
//! ```

use std::sync::Arc;

use rust_decimal::Decimal;
use tempfile::TempDir;

use gomarket_cart::{CartStore, JsonFileStorage};
use gomarket_core::{Product, ProductId};

/// A cart store rooted in a scratch directory.
///
/// The directory lives as long as the context, so a store can be dropped and
/// reloaded to exercise persistence.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Create a context with a fresh scratch directory.
    ///
    /// # Panics
    ///
    /// Panics if the scratch directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create scratch directory"),
        }
    }

    /// The file backend rooted at the scratch directory.
    #[must_use]
    pub fn storage(&self) -> JsonFileStorage {
        JsonFileStorage::new(self.dir.path())
    }

    /// Load a store over the scratch directory.
    ///
    /// Each call loads from whatever the previous store persisted.
    pub async fn store(&self) -> CartStore {
        CartStore::load(Arc::new(self.storage())).await
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a test product with a whole-number price.
#[must_use]
pub fn product(id: &str, title: &str, price: i64) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_owned(),
        image_url: format!("https://img.example/{id}.png"),
        price: Decimal::new(price, 0),
    }
}
