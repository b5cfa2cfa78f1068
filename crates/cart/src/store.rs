//! The async cart store.
//!
//! [`CartStore`] pairs the pure [`Cart`] model with a [`CartStorage`]
//! backend. The persisted blob is read once at load time; after that the
//! in-memory cart is the source of truth and storage is only written.
//!
//! Mutations are serialized through a single async mutex that is held across
//! the persistence write, so overlapping calls cannot race each other's
//! snapshots and every write carries the post-mutation collection.

use std::sync::Arc;

use tracing::instrument;

use gomarket_core::{Cart, LineItem, Product, ProductId};

use crate::error::{CartError, StorageError};
use crate::storage::CartStorage;

/// The fixed key the whole cart is stored under.
///
/// One blob, one key; there is no versioning or partial-key layout.
pub const CART_KEY: &str = "@GoMarketPlace:products";

/// The cart store.
///
/// Cheap to share behind an `Arc`; all methods take `&self`. Consumers that
/// need persistence-confirmed completion await the mutation result, while
/// fire-and-forget callers may spawn it and drop the handle.
pub struct CartStore {
    cart: tokio::sync::Mutex<Cart>,
    storage: Arc<dyn CartStorage>,
}

impl CartStore {
    /// Load the store from its persisted snapshot.
    ///
    /// An absent blob leaves the cart empty. A read failure or a malformed
    /// blob also yields an empty cart: the persisted mirror is best-effort
    /// state, not something worth refusing to start over. Both cases are
    /// logged at `warn`.
    pub async fn load(storage: Arc<dyn CartStorage>) -> Self {
        let cart = match storage.get(CART_KEY).await {
            Ok(Some(blob)) => serde_json::from_str::<Cart>(&blob).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "persisted cart is malformed, starting empty");
                Cart::new()
            }),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted cart, starting empty");
                Cart::new()
            }
        };

        tracing::debug!(items = cart.len(), "cart store loaded");

        Self {
            cart: tokio::sync::Mutex::new(cart),
            storage,
        }
    }

    /// Snapshot of the current line items in insertion order.
    pub async fn items(&self) -> Vec<LineItem> {
        self.cart.lock().await.items().to_vec()
    }

    /// Total units across all line items.
    pub async fn total_quantity(&self) -> u32 {
        self.cart.lock().await.total_quantity()
    }

    /// Add a product to the cart and persist the result.
    ///
    /// A product whose id is already present has its quantity bumped by one
    /// and its other fields replaced from the incoming product; otherwise it
    /// is appended with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the write-back fails. The in-memory
    /// mutation is already committed and is not rolled back.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_to_cart(&self, product: Product) -> Result<(), CartError> {
        let mut cart = self.cart.lock().await;
        cart.add(product);
        self.persist(&cart).await
    }

    /// Increase the quantity of the item with `id` by one and persist.
    ///
    /// An absent id is a no-op, but the (unchanged) snapshot is still
    /// written back.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the write-back fails.
    #[instrument(skip(self))]
    pub async fn increment(&self, id: &ProductId) -> Result<(), CartError> {
        let mut cart = self.cart.lock().await;
        cart.increment(id);
        self.persist(&cart).await
    }

    /// Decrease the quantity of the item with `id` by one and persist.
    ///
    /// An item reaching quantity 0 is removed entirely. An absent id is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the write-back fails.
    #[instrument(skip(self))]
    pub async fn decrement(&self, id: &ProductId) -> Result<(), CartError> {
        let mut cart = self.cart.lock().await;
        cart.decrement(id);
        self.persist(&cart).await
    }

    /// Remove everything from the cart and persist the empty snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the write-back fails.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), CartError> {
        let mut cart = self.cart.lock().await;
        *cart = Cart::new();
        self.persist(&cart).await
    }

    /// Write the freshly computed collection back to storage.
    ///
    /// Takes the cart as an explicit parameter so the write can only ever see
    /// the post-mutation state.
    async fn persist(&self, cart: &Cart) -> Result<(), CartError> {
        let blob = serde_json::to_string(cart).map_err(StorageError::Serialize)?;

        if let Err(e) = self.storage.set(CART_KEY, &blob).await {
            tracing::warn!(
                error = %e,
                "cart write-back failed; in-memory state remains authoritative"
            );
            return Err(e.into());
        }

        Ok(())
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore").finish_non_exhaustive()
    }
}
