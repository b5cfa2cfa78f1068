//! Domain types for the GoMarket cart.

pub mod cart;
pub mod id;
pub mod item;

pub use cart::Cart;
pub use id::ProductId;
pub use item::{LineItem, Product};
