//! GoMarket Core - Shared domain types.
//!
//! This crate provides the cart domain model used across all GoMarket
//! components:
//! - `cart` - The cart store with its persistence backends
//! - `cli` - Command-line tool for inspecting and editing a cart
//!
//! # Architecture
//!
//! The core crate contains only types and the pure cart mutation rules -
//! no I/O, no storage access, no async. This keeps it lightweight and
//! allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - `ProductId`, `Product`, `LineItem`, and the [`types::Cart`]
//!   collection

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
