//! Process-global cart store registry.
//!
//! Prefer passing [`CartStore`] by reference; this registry exists only as a
//! thin adapter for UI layers that cannot thread a handle through every
//! consumer. Accessing it before [`install`] is a programming-contract
//! violation: [`get`] fails loudly, [`current`] surfaces it as
//! [`CartError::Uninitialized`].

use std::sync::OnceLock;

use crate::error::CartError;
use crate::store::CartStore;

static REGISTRY: OnceLock<CartStore> = OnceLock::new();

/// Install the process-global cart store.
///
/// May be called at most once for the lifetime of the process.
///
/// # Errors
///
/// Returns [`CartError::AlreadyInstalled`] if a store was installed before.
pub fn install(store: CartStore) -> Result<(), CartError> {
    REGISTRY
        .set(store)
        .map_err(|_| CartError::AlreadyInstalled)
}

/// The installed cart store, if any.
///
/// # Errors
///
/// Returns [`CartError::Uninitialized`] if [`install`] has not been called.
pub fn current() -> Result<&'static CartStore, CartError> {
    REGISTRY.get().ok_or(CartError::Uninitialized)
}

/// The installed cart store.
///
/// # Panics
///
/// Panics if [`install`] has not been called. Use this from UI code where an
/// uninstalled registry is an integration bug that should surface
/// immediately; use [`current`] where the caller can recover.
#[must_use]
pub fn get() -> &'static CartStore {
    match REGISTRY.get() {
        Some(store) => store,
        None => panic!("cart store accessed before registry::install was called"),
    }
}
