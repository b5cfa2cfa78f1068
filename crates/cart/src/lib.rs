//! GoMarket Cart - the cart store and its persistence backends.
//!
//! The store owns the in-memory [`Cart`](gomarket_core::Cart) and mirrors it
//! to a local key-value backend on every mutation. Storage is a passive
//! mirror: it is read once when the store is loaded, then only written.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use gomarket_cart::{CartStore, MemoryStorage};
//! use gomarket_core::{Product, ProductId};
//! use rust_decimal::Decimal;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), gomarket_cart::CartError> {
//! let store = CartStore::load(Arc::new(MemoryStorage::new())).await;
//!
//! store
//!     .add_to_cart(Product {
//!         id: ProductId::new("sku-1"),
//!         title: "Shoe".to_owned(),
//!         image_url: "https://img.example/shoe.png".to_owned(),
//!         price: Decimal::new(100, 0),
//!     })
//!     .await?;
//!
//! assert_eq!(store.items().await.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`store`] - The async [`CartStore`]
//! - [`storage`] - The [`CartStorage`] trait and its backends
//! - [`registry`] - Process-global accessor for the UI boundary
//! - [`error`] - Error types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod registry;
pub mod storage;
pub mod store;

pub use error::{CartError, StorageError};
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage};
pub use store::{CART_KEY, CartStore};
