//! Cart management commands.
//!
//! Each command operates on an already-loaded [`CartStore`] and awaits the
//! persistence write, so a zero exit status means the blob on disk reflects
//! the change.

use gomarket_cart::{CartError, CartStore};
use gomarket_core::{Product, ProductId};
use rust_decimal::Decimal;

/// Print the current cart contents.
#[allow(clippy::print_stdout)]
pub async fn show(store: &CartStore) {
    let items = store.items().await;

    if items.is_empty() {
        println!("(cart is empty)");
        return;
    }

    for item in &items {
        println!(
            "{:>4} x {:<30} {:>10}  [{}]",
            item.quantity, item.title, item.price, item.id
        );
    }
    println!("total units: {}", store.total_quantity().await);
}

/// Add a product to the cart.
pub async fn add(
    store: &CartStore,
    id: String,
    title: String,
    image_url: String,
    price: Decimal,
) -> Result<(), CartError> {
    let product = Product {
        id: ProductId::new(id),
        title,
        image_url,
        price,
    };

    tracing::info!(product_id = %product.id, "adding product to cart");
    store.add_to_cart(product).await
}

/// Increment the quantity of an item.
pub async fn increment(store: &CartStore, id: &str) -> Result<(), CartError> {
    let id = ProductId::new(id);
    store.increment(&id).await?;

    if store.items().await.iter().all(|item| item.id != id) {
        tracing::warn!(product_id = %id, "no such item in cart; nothing changed");
    }
    Ok(())
}

/// Decrement the quantity of an item.
pub async fn decrement(store: &CartStore, id: &str) -> Result<(), CartError> {
    store.decrement(&ProductId::new(id)).await
}

/// Remove everything from the cart.
pub async fn clear(store: &CartStore) -> Result<(), CartError> {
    tracing::info!("clearing cart");
    store.clear().await
}
